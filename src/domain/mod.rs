//! Domain logic - the version value and its precedence rules

pub mod precedence;
pub mod prerelease;
pub mod version;

pub use prerelease::Identifier;
pub use version::Version;
