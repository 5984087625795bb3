//! `fixload digest` – hash a file the way fixtures are checked.

use anyhow::Result;
use fixload_core::digest::{self, DigestAlgorithm};
use std::path::Path;

pub fn run_digest(path: &Path, algorithm: DigestAlgorithm) -> Result<()> {
    let hex = digest::digest_path(algorithm, path)?;
    println!("{}  {}", hex, path.display());
    Ok(())
}
