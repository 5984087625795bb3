//! Fixture Loader: sequential fetch, persist and verify over a fixture list.
//!
//! Fail-fast: the first error of any kind aborts the run. Files written for
//! earlier fixtures are left in place; later fixtures are never touched.

use crate::config::FixloadConfig;
use crate::digest;
use crate::error::FixtureError;
use crate::fetch::{CurlFetcher, Fetch};
use crate::fixture::FixtureDescriptor;
use crate::storage;
use std::path::{Path, PathBuf};

/// A fixture that was staged (or found on disk) with a matching digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFixture {
    pub path: PathBuf,
    pub bytes: u64,
    pub digest: String,
}

/// Outcome of a successful run, in descriptor order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub fixtures: Vec<LoadedFixture>,
}

impl LoadReport {
    pub fn total_bytes(&self) -> u64 {
        self.fixtures.iter().map(|f| f.bytes).sum()
    }
}

pub struct FixtureLoader<F = CurlFetcher> {
    base_dir: PathBuf,
    fetcher: F,
}

impl<F> FixtureLoader<F> {
    /// Loader writing destinations relative to `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>, fetcher: F) -> Self {
        Self {
            base_dir: base_dir.into(),
            fetcher,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Check fixtures already under the base directory, without fetching.
    pub fn verify_all(&self, descriptors: &[FixtureDescriptor]) -> Result<LoadReport, FixtureError> {
        verify_all(self.base_dir(), descriptors)
    }
}

impl<F: Fetch> FixtureLoader<F> {
    /// Fetch, write and verify every descriptor in order, stopping at the first failure.
    pub fn load_all(&self, descriptors: &[FixtureDescriptor]) -> Result<LoadReport, FixtureError> {
        let mut report = LoadReport::default();
        for d in descriptors {
            match self.load_one(d) {
                Ok(loaded) => report.fixtures.push(loaded),
                Err(e) => {
                    let destination = e.destination().unwrap_or_else(|| d.destination.clone());
                    tracing::error!(%destination, "fixture load aborted: {}", e);
                    return Err(e);
                }
            }
        }
        tracing::info!(
            count = report.fixtures.len(),
            bytes = report.total_bytes(),
            base_dir = %self.base_dir.display(),
            "all fixtures staged"
        );
        Ok(report)
    }

    /// Fetch, write and verify a single descriptor.
    pub fn load_one(&self, d: &FixtureDescriptor) -> Result<LoadedFixture, FixtureError> {
        let expected = d.validate()?;
        tracing::info!(source = %d.source, destination = %d.destination, "fetching fixture");

        let body = self
            .fetcher
            .fetch(&d.source)
            .map_err(|reason| FixtureError::Retrieval {
                source_url: d.source.clone(),
                reason,
            })?;
        tracing::debug!(destination = %d.destination, bytes = body.len(), "retrieved");

        let path = self.base_dir.join(&d.destination);
        storage::persist(&path, &body).map_err(|source| FixtureError::Persistence {
            destination: path.clone(),
            source,
        })?;
        drop(body);

        verify_on_disk(d, &expected, path)
    }
}

/// Check fixtures already in `base_dir` without touching the network.
/// Stops at the first missing or mismatching file.
pub fn verify_all(base_dir: &Path, descriptors: &[FixtureDescriptor]) -> Result<LoadReport, FixtureError> {
    let mut report = LoadReport::default();
    for d in descriptors {
        let expected = d.validate()?;
        let path = base_dir.join(&d.destination);
        report.fixtures.push(verify_on_disk(d, &expected, path)?);
    }
    Ok(report)
}

/// Hash the file as it is on disk and compare to `expected`.
fn verify_on_disk(
    d: &FixtureDescriptor,
    expected: &str,
    path: PathBuf,
) -> Result<LoadedFixture, FixtureError> {
    let (actual, bytes) =
        digest::digest_file(d.algorithm, &path).map_err(|source| FixtureError::Persistence {
            destination: path.clone(),
            source,
        })?;
    if !digest::digests_match(expected, &actual) {
        return Err(FixtureError::DigestMismatch {
            destination: path,
            expected: expected.to_string(),
            actual,
        });
    }
    tracing::info!(destination = %d.destination, algorithm = %d.algorithm, digest = %actual, "fixture verified");
    Ok(LoadedFixture {
        path,
        bytes,
        digest: actual,
    })
}

/// Stage `descriptors` into the current working directory with transport
/// settings from `config`.
pub fn load_all_with(
    config: &FixloadConfig,
    descriptors: &[FixtureDescriptor],
) -> Result<LoadReport, FixtureError> {
    let cwd = std::env::current_dir().map_err(|source| FixtureError::Persistence {
        destination: PathBuf::from("."),
        source,
    })?;
    FixtureLoader::new(cwd, CurlFetcher::new(config.clone())).load_all(descriptors)
}

/// Stage `descriptors` into the current working directory using default settings.
pub fn load_all(descriptors: &[FixtureDescriptor]) -> Result<LoadReport, FixtureError> {
    load_all_with(&FixloadConfig::default(), descriptors)
}
