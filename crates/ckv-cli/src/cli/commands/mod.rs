//! CLI command handlers, one per file.

mod algorithms;
mod hash;
mod info;
mod verify;

pub use algorithms::run_algorithms;
pub use hash::run_hash;
pub use info::run_info;
pub use verify::run_verify;
