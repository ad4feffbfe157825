mod error;
mod memory_token_store;
