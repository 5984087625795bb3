//! `fixload fetch` – stage and verify the built-in fixtures.

use anyhow::{Context, Result};
use fixload_core::config;
use fixload_core::{builtin_fixtures, load_all_with};

/// Download the built-in fixtures into the current directory.
pub fn run_fetch() -> Result<()> {
    let cfg = config::load_or_default()?;
    let report = load_all_with(&cfg, &builtin_fixtures()).context("fixture preparation failed")?;
    tracing::info!(
        "staged {} fixtures ({} bytes)",
        report.fixtures.len(),
        report.total_bytes()
    );
    Ok(())
}
