//! `ckv verify <path> <expected>` – compare a file's checksum with an expected value.

use anyhow::{bail, Context, Result};
use ckv_core::session::Session;
use std::path::Path;

pub async fn run_verify(mut session: Session, path: &Path, expected: &str) -> Result<()> {
    let (session, outcome) = tokio::task::spawn_blocking({
        let path = path.to_path_buf();
        let expected = expected.to_string();
        move || {
            session.select_file(path)?;
            let outcome = session.verify(&expected);
            Ok::<_, ckv_core::ChecksumError>((session, outcome))
        }
    })
    .await
    .context("checksum task join")??;

    if let Some(info) = session.file_info() {
        println!("{}", info);
    }
    if let Some(sum) = session.checksum() {
        println!("{}: {}", sum.algorithm(), sum);
    }
    println!("{}", session.status());

    if !outcome.is_match() {
        bail!("checksum mismatch for {}", path.display());
    }
    Ok(())
}
