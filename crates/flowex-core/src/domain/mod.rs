//! 모의 거래소 도메인 모델.

mod balance;
mod store;
mod ticker;
mod trading_pair;
mod user;

pub use balance::*;
pub use store::*;
pub use ticker::*;
pub use trading_pair::*;
pub use user::*;
