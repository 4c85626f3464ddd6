pub mod proposal;
pub mod stake_account;
pub mod vote_record;

pub use proposal::*;
pub use stake_account::*;
pub use vote_record::*;
