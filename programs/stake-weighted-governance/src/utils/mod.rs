pub mod account_store;
pub mod constants;
pub mod events;
