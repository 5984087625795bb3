pub mod config;
pub mod logging;

pub mod digest;
pub mod error;
pub mod fetch;
pub mod fixture;
pub mod loader;
pub mod storage;

pub use error::{FixtureError, RetrievalFailure};
pub use fixture::{builtin_fixtures, FixtureDescriptor};
pub use loader::{load_all, load_all_with, verify_all, FixtureLoader, LoadReport, LoadedFixture};
