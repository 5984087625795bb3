use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use fixload_core::digest::DigestAlgorithm;
use std::path::Path;

#[test]
fn cli_parse_fetch() {
    assert!(matches!(parse(&["fixload", "fetch"]), CliCommand::Fetch));
}

#[test]
fn cli_parse_verify() {
    assert!(matches!(parse(&["fixload", "verify"]), CliCommand::Verify));
}

#[test]
fn cli_parse_list() {
    assert!(matches!(parse(&["fixload", "list"]), CliCommand::List));
}

#[test]
fn cli_parse_digest_defaults_to_md5() {
    match parse(&["fixload", "digest", "small.svg"]) {
        CliCommand::Digest { path, algorithm } => {
            assert_eq!(path, Path::new("small.svg"));
            assert_eq!(algorithm, DigestAlgorithm::Md5);
        }
        _ => panic!("expected Digest"),
    }
}

#[test]
fn cli_parse_digest_sha256() {
    match parse(&["fixload", "digest", "--algorithm", "SHA256", "large.svg"]) {
        CliCommand::Digest { algorithm, .. } => assert_eq!(algorithm, DigestAlgorithm::Sha256),
        _ => panic!("expected Digest"),
    }
}

#[test]
fn cli_rejects_unknown_algorithm() {
    assert!(Cli::try_parse_from(["fixload", "digest", "-a", "crc32", "x"]).is_err());
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["fixload"]).is_err());
    assert!(Cli::try_parse_from(["fixload", "fetch", "--dir", "/tmp"]).is_err());
}
