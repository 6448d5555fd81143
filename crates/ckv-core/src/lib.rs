pub mod config;
pub mod logging;

pub mod algorithm;
pub mod checksum;
pub mod file_info;
pub mod session;
pub mod verify;

pub use algorithm::Algorithm;
pub use checksum::{Checksum, ChecksumError};
pub use verify::Verification;
