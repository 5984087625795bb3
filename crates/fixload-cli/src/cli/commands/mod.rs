//! CLI command handlers, one per file.

mod digest;
mod fetch;
mod list;
mod verify;

pub use digest::run_digest;
pub use fetch::run_fetch;
pub use list::run_list;
pub use verify::run_verify;
