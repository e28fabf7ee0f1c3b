//! Registration-time defaults.
//!
//! [`CallDefaults`] is an explicit value handed to [`EndpointBuilder::build`]
//! rather than process-global state: whatever options an endpoint leaves
//! unset are resolved from the defaults it was built with, at build time.
//! "Configure defaults before declaring endpoints" is therefore just
//! ordinary value ordering, not a side-effecting global.
//!
//! [`EndpointBuilder::build`]: crate::EndpointBuilder::build

/// The region endpoints deploy to unless configured otherwise.
///
/// Functions that talk to the platform's primary database should keep this
/// default, as both run closest there.
pub const DEFAULT_REGION: &str = "us-central1";

/// One or more deployment regions.
///
/// An endpoint configured with several regions deploys identical logic to
/// each of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions(Vec<String>);

impl Regions {
    /// A single region.
    pub fn single(region: impl Into<String>) -> Self {
        Self(vec![region.into()])
    }

    /// Iterate over the region names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no region is configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Regions {
    fn default() -> Self {
        Self::single(DEFAULT_REGION)
    }
}

impl From<&str> for Regions {
    fn from(region: &str) -> Self {
        Self::single(region)
    }
}

impl From<String> for Regions {
    fn from(region: String) -> Self {
        Self::single(region)
    }
}

impl From<Vec<String>> for Regions {
    fn from(regions: Vec<String>) -> Self {
        Self(regions)
    }
}

impl From<Vec<&str>> for Regions {
    fn from(regions: Vec<&str>) -> Self {
        Self(regions.into_iter().map(str::to_string).collect())
    }
}

/// Fallback values for the options an endpoint leaves unset.
#[derive(Debug, Clone)]
pub struct CallDefaults {
    /// Default deployment regions.
    pub regions: Regions,
    /// Whether anonymously authenticated callers may invoke endpoints.
    pub allow_anonymous: bool,
    /// Whether unauthenticated callers may invoke endpoints.
    pub allow_non_authed: bool,
}

impl Default for CallDefaults {
    fn default() -> Self {
        Self {
            regions: Regions::default(),
            allow_anonymous: true,
            allow_non_authed: false,
        }
    }
}
