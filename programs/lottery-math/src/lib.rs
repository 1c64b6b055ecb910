//! Pricing, bracket matching and settlement math of the six-bracket lottery.
//!
//! Every function is pure: round data read from the contract goes in, costs,
//! brackets and rewards come out. All amounts are integers in the payment
//! token's smallest unit.

pub mod error;
pub mod math;
pub mod state;

pub use error::LotteryError;
pub use math::*;
pub use state::*;
