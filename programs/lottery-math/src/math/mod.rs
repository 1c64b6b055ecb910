pub use claim::*;
pub use display::*;
pub use generator::*;
pub use matching::*;
pub use pricing::*;
pub use purchase::*;
pub use round_setup::*;
pub use settlement::*;
pub use winnings::*;

pub mod claim;
pub mod display;
pub mod generator;
pub mod matching;
pub mod pricing;
pub mod purchase;
pub mod round_setup;
pub mod settlement;
pub mod winnings;
