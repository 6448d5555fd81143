//! Tests for hash and verify subcommands.

use super::parse;
use crate::cli::{resolve_algorithm, Cli, CliCommand};
use ckv_core::config::CkvConfig;
use ckv_core::Algorithm;
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_hash() {
    match parse(&["ckv", "hash", "/path/to/file.iso"]) {
        CliCommand::Hash {
            path,
            algorithm,
            all,
        } => {
            assert_eq!(path, Path::new("/path/to/file.iso"));
            assert!(algorithm.is_none());
            assert!(!all);
        }
        _ => panic!("expected Hash"),
    }
}

#[test]
fn cli_parse_hash_algorithm() {
    match parse(&["ckv", "hash", "a.bin", "--algorithm", "SHA-1"]) {
        CliCommand::Hash { algorithm, .. } => assert_eq!(algorithm.as_deref(), Some("SHA-1")),
        _ => panic!("expected Hash with --algorithm"),
    }
    match parse(&["ckv", "hash", "-a", "md5", "a.bin"]) {
        CliCommand::Hash { algorithm, .. } => assert_eq!(algorithm.as_deref(), Some("md5")),
        _ => panic!("expected Hash with -a"),
    }
}

#[test]
fn cli_parse_hash_all() {
    match parse(&["ckv", "hash", "a.bin", "--all"]) {
        CliCommand::Hash { all, .. } => assert!(all),
        _ => panic!("expected Hash with --all"),
    }
}

#[test]
fn cli_hash_all_conflicts_with_algorithm() {
    assert!(Cli::try_parse_from(["ckv", "hash", "a.bin", "--all", "-a", "md5"]).is_err());
}

#[test]
fn cli_parse_verify() {
    match parse(&[
        "ckv",
        "verify",
        "release.tar",
        "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855",
    ]) {
        CliCommand::Verify {
            path,
            expected,
            algorithm,
        } => {
            assert_eq!(path, Path::new("release.tar"));
            assert_eq!(
                expected,
                "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855"
            );
            assert!(algorithm.is_none());
        }
        _ => panic!("expected Verify"),
    }
}

#[test]
fn cli_parse_verify_requires_expected() {
    assert!(Cli::try_parse_from(["ckv", "verify", "release.tar"]).is_err());
}

#[test]
fn resolve_algorithm_prefers_flag_then_config() {
    let cfg = CkvConfig {
        default_algorithm: Algorithm::Md5,
        ..CkvConfig::default()
    };
    assert_eq!(resolve_algorithm(None, &cfg), Algorithm::Md5);
    assert_eq!(resolve_algorithm(Some("sha512"), &cfg), Algorithm::Sha512);
    assert_eq!(resolve_algorithm(Some("tiger"), &cfg), Algorithm::Sha256);
}
