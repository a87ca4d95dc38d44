//! Version parsing and comparison

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("version regex is valid"));

/// A three-part extension version
///
/// Parsed from the first `major.minor[.revision]` match in a string; a
/// missing revision defaults to 0, so `"1.2"` and `"1.2.0"` are equal.
///
/// There is no "zero" fallback for unparseable input: a string with no
/// version in it yields `None`, and `Option<Version>` ordering already
/// encodes the policy that absent information is older than any concrete
/// version while two absent versions are equal (no information, no update).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
}

impl Version {
    /// Create a version from its parts
    pub fn new(major: u32, minor: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }

    /// Parse the first version found in `text`, or `None` if there is none
    pub fn parse(text: &str) -> Option<Self> {
        let captures = VERSION_RE.captures(text)?;
        Some(Self {
            major: captures[1].parse().ok()?,
            minor: captures[2].parse().ok()?,
            revision: captures
                .get(3)
                .map_or(Some(0), |m| m.as_str().parse().ok())?,
        })
    }
}

/// Compare two possibly-absent versions
///
/// Lexicographic on (major, minor, revision); absent compares lower than
/// any parsed version and equal to absent.
pub fn compare(a: Option<Version>, b: Option<Version>) -> Ordering {
    a.cmp(&b)
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}
