//! API version validation.

/// Accepted `version` query values. Exact string match, not a semver range.
pub const KNOWN_VERSIONS: &[&str] = &["1.0", "1.1", "2313.8"];

/// Version assumed when the caller sends none.
pub const DEFAULT_VERSION: &str = "1.0";

/// A whitelisted API version, split into its numeric components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
}

/// Dispatch family keyed on the major version.
///
/// Both families currently share one code path; the split mirrors the
/// upstream protocol's version dispatch and keeps the extension point
/// visible should the families ever diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionFamily {
    V1,
    Other,
}

impl ApiVersion {
    /// Validate a raw query value against the whitelist and parse it.
    ///
    /// Returns `None` for anything outside the accepted set. Segments that
    /// fail to parse (or a missing minor segment) default to 0.
    pub fn validate(raw: &str) -> Option<Self> {
        if !KNOWN_VERSIONS.contains(&raw) {
            return None;
        }

        let mut segments = raw.splitn(2, '.');
        let major = segments.next().and_then(|s| s.parse().ok()).unwrap_or(0);
        let minor = segments.next().and_then(|s| s.parse().ok()).unwrap_or(0);

        Some(Self { major, minor })
    }

    pub fn family(self) -> VersionFamily {
        if self.major == 1 {
            VersionFamily::V1
        } else {
            VersionFamily::Other
        }
    }
}
