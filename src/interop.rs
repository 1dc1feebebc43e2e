//! Conversion into the `semver` crate's version type

use crate::domain::Version;
use crate::error::{Result, SemverCompatError};

impl TryFrom<&Version> for semver::Version {
    type Error = SemverCompatError;

    fn try_from(version: &Version) -> Result<Self> {
        let pre = match version.prerelease() {
            Some(label) => semver::Prerelease::new(label).map_err(|e| {
                SemverCompatError::interop(format!("pre-release '{}': {}", label, e))
            })?,
            None => semver::Prerelease::EMPTY,
        };
        let build = match version.build() {
            Some(meta) => semver::BuildMetadata::new(meta).map_err(|e| {
                SemverCompatError::interop(format!("build metadata '{}': {}", meta, e))
            })?,
            None => semver::BuildMetadata::EMPTY,
        };

        Ok(semver::Version {
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            pre,
            build,
        })
    }
}

impl Version {
    /// Convert into a [`semver::Version`] carrying the canonical form
    pub fn to_semver(&self) -> Result<semver::Version> {
        semver::Version::try_from(self)
    }
}
