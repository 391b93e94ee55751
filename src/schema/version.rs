use crate::foundation::error::{FrameplayError, FrameplayResult};

/// Major data-format version this engine plays.
pub const SUPPORTED_MAJOR_VERSION: u64 = 1;

/// Parse the major component of a `MAJOR.MINOR...` version string.
pub fn parse_major(version: &str) -> Option<u64> {
    let major = version.trim().split('.').next()?;
    major.parse().ok()
}

/// `true` when `version` has the supported major version.
pub fn is_compatible(version: &str) -> bool {
    parse_major(version) == Some(SUPPORTED_MAJOR_VERSION)
}

/// Fail with [`FrameplayError::IncompatibleVersion`] unless `version` is playable.
pub fn check_compatible(version: &str) -> FrameplayResult<()> {
    if is_compatible(version) {
        Ok(())
    } else {
        Err(FrameplayError::IncompatibleVersion {
            found: version.to_owned(),
            supported: SUPPORTED_MAJOR_VERSION,
        })
    }
}
