pub mod asset_ledger;
pub mod schedule;

pub use asset_ledger::*;
pub use schedule::*;
