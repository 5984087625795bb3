//! `fixload verify` – check staged fixtures without downloading.

use anyhow::{Context, Result};
use fixload_core::{builtin_fixtures, verify_all};
use std::path::Path;

pub fn run_verify(base_dir: &Path) -> Result<()> {
    let report = verify_all(base_dir, &builtin_fixtures()).context("fixture verification failed")?;
    for f in &report.fixtures {
        println!("{}  {}", f.digest, f.path.display());
    }
    Ok(())
}
