//! `ckv info <path>` – show file name and size.

use anyhow::Result;
use ckv_core::file_info::FileInfo;
use std::path::Path;

pub fn run_info(path: &Path) -> Result<()> {
    let info = FileInfo::from_path(path)?;
    println!("{}", info);
    Ok(())
}
