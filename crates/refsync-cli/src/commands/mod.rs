//! Command implementations

mod sync;

pub use sync::{run_check, run_write};
