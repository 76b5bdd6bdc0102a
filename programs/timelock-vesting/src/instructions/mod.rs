pub mod deposit;
pub mod emit_vesting_quote;
pub mod initialize_schedule;
pub mod release;
pub mod revoke;

pub use deposit::*;
pub use emit_vesting_quote::*;
pub use initialize_schedule::*;
pub use release::*;
pub use revoke::*;
