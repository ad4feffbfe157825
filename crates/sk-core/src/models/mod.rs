pub mod credential_pair;
pub mod experience_level;
pub mod login_request;
pub mod refresh_request;
pub mod register_request;
pub mod session_event;
pub mod session_state;
pub mod token_response;
pub mod user;
pub mod user_id;
pub mod user_update;
