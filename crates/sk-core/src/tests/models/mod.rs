mod credential_pair;
mod experience_level;
mod register_request;
mod session_state;
mod user;
mod user_update;
