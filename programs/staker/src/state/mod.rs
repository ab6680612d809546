pub mod stake_pool;

pub use stake_pool::*;
