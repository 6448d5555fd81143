//! Supported checksum algorithms and name resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hash algorithm used to compute a file checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Algorithm {
    Md5,
    Sha1,
    #[default]
    Sha256,
    Sha512,
}

impl Algorithm {
    /// All supported algorithms, in display order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha512,
    ];

    /// Canonical label ("MD5", "SHA-1", "SHA-256", "SHA-512").
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha512 => "SHA-512",
        }
    }

    /// Digest size in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
            Algorithm::Sha512 => 64,
        }
    }

    /// Length of the hex-encoded digest.
    pub fn hex_len(self) -> usize {
        self.digest_len() * 2
    }

    /// Resolve a user-facing name; anything unrecognized becomes SHA-256.
    pub fn from_name_or_default(name: &str) -> Algorithm {
        match name.parse() {
            Ok(algo) => algo,
            Err(_) => {
                tracing::debug!("unknown algorithm {:?}, using {}", name, Algorithm::default());
                Algorithm::default()
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Returned by the strict parser for names outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported algorithm: {0:?} (expected one of MD5, SHA-1, SHA-256, SHA-512)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Case-insensitive; the dash is optional ("sha256", "SHA-256", " Sha-1 ").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "md5" => Ok(Algorithm::Md5),
            "sha1" => Ok(Algorithm::Sha1),
            "sha256" => Ok(Algorithm::Sha256),
            "sha512" => Ok(Algorithm::Sha512),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl From<String> for Algorithm {
    fn from(name: String) -> Self {
        Algorithm::from_name_or_default(&name)
    }
}

impl From<Algorithm> for String {
    fn from(algo: Algorithm) -> Self {
        algo.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.label().parse::<Algorithm>().unwrap(), algo);
        }
    }

    #[test]
    fn lenient_spellings() {
        assert_eq!("md5".parse::<Algorithm>().unwrap(), Algorithm::Md5);
        assert_eq!("sha1".parse::<Algorithm>().unwrap(), Algorithm::Sha1);
        assert_eq!(" Sha-512 ".parse::<Algorithm>().unwrap(), Algorithm::Sha512);
        assert_eq!("SHA_256".parse::<Algorithm>().unwrap(), Algorithm::Sha256);
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        let err = "blake3".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, UnknownAlgorithm("blake3".to_string()));
        assert!(err.to_string().contains("blake3"));
    }

    #[test]
    fn unknown_name_falls_back_to_sha256() {
        assert_eq!(Algorithm::from_name_or_default("CRC32"), Algorithm::Sha256);
        assert_eq!(Algorithm::from_name_or_default(""), Algorithm::Sha256);
        assert_eq!(Algorithm::from_name_or_default("SHA-1"), Algorithm::Sha1);
    }

    #[test]
    fn display_honours_width() {
        assert_eq!(format!("{:<8}|", Algorithm::Md5), "MD5     |");
        assert_eq!(Algorithm::Sha512.to_string(), "SHA-512");
    }

    #[test]
    fn hex_lengths() {
        let lens: Vec<usize> = Algorithm::ALL.iter().map(|a| a.hex_len()).collect();
        assert_eq!(lens, vec![32, 40, 64, 128]);
    }
}
