//! Blocking HTTP GET of a fixture body.
//!
//! Uses the curl crate (libcurl). The whole body is buffered in memory; the
//! fixtures are small SVG files.

use crate::config::FixloadConfig;
use crate::error::RetrievalFailure;

/// Retrieves the bytes at a source URL.
pub trait Fetch {
    fn fetch(&self, source: &str) -> Result<Vec<u8>, RetrievalFailure>;
}

/// Fetcher backed by a fresh curl Easy handle per request.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    config: FixloadConfig,
}

impl CurlFetcher {
    pub fn new(config: FixloadConfig) -> Self {
        Self { config }
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(FixloadConfig::default())
    }
}

impl Fetch for CurlFetcher {
    fn fetch(&self, source: &str) -> Result<Vec<u8>, RetrievalFailure> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(source)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.config.max_redirections)?;
        easy.useragent(&self.config.user_agent)?;
        easy.connect_timeout(self.config.connect_timeout())?;
        easy.timeout(self.config.timeout())?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(RetrievalFailure::Status(code));
        }
        tracing::debug!(source, bytes = body.len(), "GET complete");
        Ok(body)
    }
}
