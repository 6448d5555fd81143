//! Headless state of one checking session.
//!
//! Tracks the current file, the selected algorithm and the most recent
//! checksum, and produces the status line a front end shows after each
//! action. Changing the algorithm re-reads the current file from the start.

use crate::algorithm::Algorithm;
use crate::checksum::{self, Checksum, ChecksumError, CHUNK_SIZE};
use crate::config::CkvConfig;
use crate::file_info::FileInfo;
use crate::verify::Verification;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Session {
    algorithm: Algorithm,
    chunk_size: usize,
    current_file: Option<PathBuf>,
    file_info: Option<FileInfo>,
    checksum: Option<Checksum>,
    status: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}

impl Session {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            chunk_size: CHUNK_SIZE,
            current_file: None,
            file_info: None,
            checksum: None,
            status: String::new(),
        }
    }

    pub fn from_config(cfg: &CkvConfig) -> Self {
        Self {
            chunk_size: cfg.chunk_size,
            ..Self::new(cfg.default_algorithm)
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    pub fn file_info(&self) -> Option<&FileInfo> {
        self.file_info.as_ref()
    }

    pub fn checksum(&self) -> Option<&Checksum> {
        self.checksum.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Make `path` the current file and hash it with the selected algorithm.
    pub fn select_file(&mut self, path: impl Into<PathBuf>) -> Result<&Checksum, ChecksumError> {
        let path = path.into();
        self.current_file = Some(path.clone());
        let sum = self.compute(&path)?;
        self.status = format!("Checksum calculated using {}", self.algorithm);
        Ok(self.checksum.insert(sum))
    }

    /// Select another algorithm. With a current file, its checksum is recomputed.
    pub fn set_algorithm(
        &mut self,
        algorithm: Algorithm,
    ) -> Result<Option<&Checksum>, ChecksumError> {
        self.algorithm = algorithm;
        let Some(path) = self.current_file.clone() else {
            return Ok(None);
        };
        let sum = self.compute(&path)?;
        self.status = "Hash algorithm changed".to_string();
        Ok(Some(self.checksum.insert(sum)))
    }

    /// Compare `expected` with the latest checksum. Without one, it is a mismatch.
    pub fn verify(&mut self, expected: &str) -> Verification {
        let outcome = match &self.checksum {
            Some(sum) => sum.verify(expected),
            None => Verification::Mismatch,
        };
        tracing::debug!("verify {:?}: {:?}", expected.trim(), outcome);
        self.status = outcome.message().to_string();
        outcome
    }

    /// Forget the file and its checksum; the algorithm selection stays.
    pub fn clear(&mut self) {
        self.current_file = None;
        self.file_info = None;
        self.checksum = None;
        self.status = "Form cleared".to_string();
    }

    fn compute(&mut self, path: &Path) -> Result<Checksum, ChecksumError> {
        self.checksum = None;
        self.file_info = None;
        let result = FileInfo::from_path(path).and_then(|info| {
            self.file_info = Some(info);
            checksum::hash_path_with_chunk_size(path, self.algorithm, self.chunk_size)
        });
        if let Err(e) = &result {
            self.status = e.user_message();
        }
        result
    }
}
