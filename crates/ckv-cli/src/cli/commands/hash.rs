//! `ckv hash <path>` – print file checksums.

use anyhow::{Context, Result};
use ckv_core::checksum::{self, Checksum};
use ckv_core::Algorithm;
use std::path::Path;

fn print_checksums(path: &Path, sums: &[Checksum], labelled: bool) {
    for sum in sums {
        if labelled {
            println!("{:<8} {}  {}", sum.algorithm(), sum, path.display());
        } else {
            println!("{}  {}", sum, path.display());
        }
    }
}

/// Hash `path` once per algorithm, in order, on a blocking worker.
pub async fn run_hash(
    path: &Path,
    algorithms: Vec<Algorithm>,
    labelled: bool,
    chunk_size: usize,
) -> Result<()> {
    let sums = tokio::task::spawn_blocking({
        let path = path.to_path_buf();
        move || {
            algorithms
                .into_iter()
                .map(|algo| checksum::hash_path_with_chunk_size(&path, algo, chunk_size))
                .collect::<Result<Vec<_>, _>>()
        }
    })
    .await
    .context("checksum task join")??;
    print_checksums(path, &sums, labelled);
    Ok(())
}
