//! Streaming file checksums (MD5, SHA-1, SHA-256, SHA-512).
//!
//! Files are read sequentially in fixed-size chunks so memory use stays
//! bounded regardless of file size. Every call opens, streams and drops its
//! own handle; nothing is cached between calls.

mod error;

use crate::algorithm::Algorithm;
use crate::verify::{self, Verification};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub use error::ChecksumError;

/// Reference read size in bytes.
pub const CHUNK_SIZE: usize = 8192;

/// Largest read buffer the engine will allocate.
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;

/// Hex digest of some input under one algorithm. Always lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    algorithm: Algorithm,
    hex: String,
}

impl Checksum {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn into_hex(self) -> String {
        self.hex
    }

    /// Compare against a user-supplied digest (case and surrounding whitespace ignored).
    pub fn verify(&self, expected: &str) -> Verification {
        verify::verify(&self.hex, expected)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Feed `reader` into a `D` accumulator `chunk_size` bytes at a time.
/// Returns the hex digest and the number of bytes consumed.
fn stream<D: Digest, R: Read>(mut reader: R, chunk_size: usize) -> io::Result<(String, u64)> {
    let mut hasher = D::new();
    let mut buf = vec![0u8; chunk_size];
    let mut total: u64 = 0;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
        total += n as u64;
    }
    Ok((hex::encode(hasher.finalize()), total))
}

fn stream_as<R: Read>(reader: R, algorithm: Algorithm, chunk_size: usize) -> io::Result<(String, u64)> {
    match algorithm {
        Algorithm::Md5 => stream::<Md5, _>(reader, chunk_size),
        Algorithm::Sha1 => stream::<Sha1, _>(reader, chunk_size),
        Algorithm::Sha256 => stream::<Sha256, _>(reader, chunk_size),
        Algorithm::Sha512 => stream::<Sha512, _>(reader, chunk_size),
    }
}

/// Hash everything `reader` yields. A `chunk_size` of zero means [`CHUNK_SIZE`];
/// sizes above [`MAX_CHUNK_SIZE`] are capped.
pub fn hash_reader<R: Read>(reader: R, algorithm: Algorithm, chunk_size: usize) -> io::Result<Checksum> {
    let chunk_size = effective_chunk_size(chunk_size);
    let (hex, _) = stream_as(reader, algorithm, chunk_size)?;
    Ok(Checksum { algorithm, hex })
}

/// One-shot digest of an in-memory buffer.
pub fn hash_bytes(data: &[u8], algorithm: Algorithm) -> Checksum {
    let hex = match algorithm {
        Algorithm::Md5 => hex::encode(Md5::digest(data)),
        Algorithm::Sha1 => hex::encode(Sha1::digest(data)),
        Algorithm::Sha256 => hex::encode(Sha256::digest(data)),
        Algorithm::Sha512 => hex::encode(Sha512::digest(data)),
    };
    Checksum { algorithm, hex }
}

/// Hash the file at `path` with the reference chunk size.
pub fn hash_path(path: &Path, algorithm: Algorithm) -> Result<Checksum, ChecksumError> {
    hash_path_with_chunk_size(path, algorithm, CHUNK_SIZE)
}

/// Like [`hash_path`], but the algorithm is given by name. Unrecognized
/// names hash with SHA-256 instead of failing.
pub fn hash_path_named(path: &Path, name: &str) -> Result<Checksum, ChecksumError> {
    hash_path(path, Algorithm::from_name_or_default(name))
}

/// Hash the file at `path`, reading `chunk_size` bytes at a time (zero means
/// [`CHUNK_SIZE`], capped at [`MAX_CHUNK_SIZE`]).
pub fn hash_path_with_chunk_size(
    path: &Path,
    algorithm: Algorithm,
    chunk_size: usize,
) -> Result<Checksum, ChecksumError> {
    let chunk_size = effective_chunk_size(chunk_size);
    tracing::debug!(
        "hashing {} with {} (chunk {} bytes)",
        path.display(),
        algorithm,
        chunk_size
    );

    let file = File::open(path).map_err(|e| {
        tracing::warn!("open {} failed: {}", path.display(), e);
        ChecksumError::open(path, e)
    })?;
    let (hex, bytes) = stream_as(file, algorithm, chunk_size).map_err(|e| {
        tracing::warn!("read {} failed: {}", path.display(), e);
        ChecksumError::read(path, e)
    })?;

    tracing::debug!("{} {} ({} bytes): {}", algorithm, path.display(), bytes, hex);
    Ok(Checksum { algorithm, hex })
}

pub(crate) fn effective_chunk_size(chunk_size: usize) -> usize {
    match chunk_size {
        0 => CHUNK_SIZE,
        n => n.min(MAX_CHUNK_SIZE),
    }
}
