pub use bracket::*;
pub use config::*;
pub use round::*;
pub use ticket::*;

pub mod bracket;
pub mod config;
pub mod round;
pub mod ticket;
