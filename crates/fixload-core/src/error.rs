//! Fatal errors raised while staging fixtures.
//!
//! None of these are recovered; the loader returns the first one it hits.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Why a network fetch failed.
#[derive(Debug)]
pub enum RetrievalFailure {
    /// Curl reported an error (DNS, connect, timeout, TLS, short read, ...).
    Transport(curl::Error),
    /// Final HTTP response had a non-2xx status.
    Status(u32),
}

impl fmt::Display for RetrievalFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetrievalFailure::Transport(e) => write!(f, "{}", e),
            RetrievalFailure::Status(code) => write!(f, "HTTP {}", code),
        }
    }
}

impl std::error::Error for RetrievalFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RetrievalFailure::Transport(e) => Some(e),
            RetrievalFailure::Status(_) => None,
        }
    }
}

impl From<curl::Error> for RetrievalFailure {
    fn from(e: curl::Error) -> Self {
        RetrievalFailure::Transport(e)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to retrieve {source_url}: {reason}")]
    Retrieval {
        source_url: String,
        #[source]
        reason: RetrievalFailure,
    },

    #[error("failed to write {}: {source}", .destination.display())]
    Persistence {
        destination: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("digest mismatch for {}: expected {expected}, got {actual}", .destination.display())]
    DigestMismatch {
        destination: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("invalid fixture {destination:?}: {reason}")]
    InvalidDescriptor { destination: String, reason: String },
}

impl FixtureError {
    /// Destination named by the error, if any.
    pub fn destination(&self) -> Option<String> {
        match self {
            FixtureError::Retrieval { .. } => None,
            FixtureError::Persistence { destination, .. }
            | FixtureError::DigestMismatch { destination, .. } => {
                Some(destination.display().to_string())
            }
            FixtureError::InvalidDescriptor { destination, .. } => Some(destination.clone()),
        }
    }
}
