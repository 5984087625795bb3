//! Fixture descriptors and the built-in benchmark fixture set.

use crate::digest::{self, DigestAlgorithm};
use crate::error::FixtureError;
use std::path::{Component, Path};

/// One file to stage: where to get it, where to put it, and what it must hash to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureDescriptor {
    /// Remote http/https URL.
    pub source: String,
    /// Relative file name, resolved against the loader's base directory.
    pub destination: String,
    /// Expected content digest as hex (compared case-insensitively).
    pub expected_digest: String,
    pub algorithm: DigestAlgorithm,
}

impl FixtureDescriptor {
    /// Descriptor pinned with an MD5 digest.
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        expected_digest: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            expected_digest: expected_digest.into(),
            algorithm: DigestAlgorithm::Md5,
        }
    }

    pub fn with_algorithm(mut self, algorithm: DigestAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Checks the descriptor before any network activity.
    ///
    /// Returns the canonical (lowercase) expected digest on success.
    pub fn validate(&self) -> Result<String, FixtureError> {
        let invalid = |reason: String| FixtureError::InvalidDescriptor {
            destination: self.destination.clone(),
            reason,
        };

        let url = url::Url::parse(&self.source)
            .map_err(|e| invalid(format!("bad source URL {:?}: {}", self.source, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported URL scheme {:?}", url.scheme())));
        }

        check_destination(&self.destination).map_err(|r| invalid(r.to_string()))?;

        digest::normalize_hex(self.algorithm, &self.expected_digest).ok_or_else(|| {
            invalid(format!(
                "expected digest {:?} is not {} hex characters of {}",
                self.expected_digest,
                self.algorithm.hex_len(),
                self.algorithm
            ))
        })
    }
}

/// Destination must be a plain relative file name inside the base directory.
fn check_destination(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("empty destination");
    }
    if name.contains('\0') {
        return Err("destination contains NUL");
    }
    if name.contains('/') || name.contains('\\') {
        return Err("destination must be a bare file name");
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err("destination must not be absolute or refer to a parent directory"),
    }
}

/// The fixture set consumed by the SVG parser benchmarks, in load order.
pub fn builtin_fixtures() -> Vec<FixtureDescriptor> {
    vec![
        FixtureDescriptor::new(
            "https://upload.wikimedia.org/wikipedia/commons/0/02/SVG_logo.svg",
            "small.svg",
            "71bbb30ab760b8f4da07639f4eeb32d6",
        ),
        FixtureDescriptor::new(
            "http://www.clker.com/cliparts/6/8/2/1/12344034191822607300Inkscape_skull_corneum.svg",
            "medium.svg",
            "5fcb9790c90b9362ff77daf062f963c9",
        ),
        FixtureDescriptor::new(
            "https://openclipart.org/download/231513/Colorful-Geometric-Line-Art-2.svg",
            "large.svg",
            "7d44ac52a89feca40f27d5024141d6cf",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> FixtureDescriptor {
        FixtureDescriptor::new(
            "http://example/small.svg",
            "small.svg",
            "71bbb30ab760b8f4da07639f4eeb32d6",
        )
    }

    #[test]
    fn builtin_set_is_valid_and_ordered() {
        let fixtures = builtin_fixtures();
        let names: Vec<_> = fixtures.iter().map(|f| f.destination.as_str()).collect();
        assert_eq!(names, ["small.svg", "medium.svg", "large.svg"]);
        for f in &fixtures {
            assert_eq!(f.algorithm, DigestAlgorithm::Md5);
            assert_eq!(f.validate().unwrap(), f.expected_digest);
        }
    }

    #[test]
    fn validate_canonicalizes_uppercase_digest() {
        let mut d = small();
        d.expected_digest = d.expected_digest.to_uppercase();
        assert_eq!(d.validate().unwrap(), "71bbb30ab760b8f4da07639f4eeb32d6");
    }

    #[test]
    fn validate_rejects_bad_scheme() {
        let mut d = small();
        d.source = "ftp://example/small.svg".into();
        assert!(matches!(
            d.validate(),
            Err(FixtureError::InvalidDescriptor { .. })
        ));
    }

    #[test]
    fn validate_rejects_unparseable_url() {
        let mut d = small();
        d.source = "not a url".into();
        assert!(d.validate().is_err());
    }

    #[test]
    fn validate_rejects_escaping_destinations() {
        for bad in ["", "..", "../small.svg", "/tmp/small.svg", "sub/small.svg", "a\\b.svg", "."] {
            let mut d = small();
            d.destination = bad.into();
            assert!(d.validate().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn validate_rejects_digest_of_wrong_length() {
        let d = small().with_algorithm(DigestAlgorithm::Sha256);
        assert!(d.validate().is_err());
    }
}
