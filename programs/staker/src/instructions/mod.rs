pub mod create_beef_token_bag;
pub mod stake;
pub mod unstake;

pub use create_beef_token_bag::*;
pub use stake::*;
pub use unstake::*;
