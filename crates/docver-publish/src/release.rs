//! Release tag parsing and ordering.
//!
//! Parses the dotted tags documentation trees are published under
//! (`1.0`, `0.7.0`, `v2.1`, `1.1rc1`) with numeric component ordering and
//! pre-release detection. Directory names that are not release tags
//! (`main`, `assets`) parse to `None` and are ignored by the scanner.

use std::cmp::Ordering;

/// A parsed release tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    /// Directory name as published.
    name: String,

    /// Numeric components, in order.
    parts: Vec<u64>,

    /// Pre-release suffix (`rc1`, `a2`, `dev0`), lowercase, if any.
    pre: Option<String>,
}

impl ReleaseVersion {
    /// Parse a directory name as a release tag.
    ///
    /// Accepts `N(.N)*` with an optional leading `v` and an optional
    /// pre-release suffix, either attached to the final numeric component
    /// (`1.0rc1`) or as a final dotted component (`1.1.dev0`). Returns
    /// `None` for anything else.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let tag = name.strip_prefix('v').unwrap_or(name);
        if !tag.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }

        let mut parts = Vec::new();
        let mut pre = None;
        let components: Vec<&str> = tag.split('.').collect();

        for (i, component) in components.iter().enumerate() {
            if component.is_empty() {
                return None;
            }
            let last = i == components.len() - 1;
            let digits = component
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(component.len());

            if digits == component.len() {
                parts.push(component.parse().ok()?);
            } else if last {
                // Pre-release text is only valid on the final component.
                if digits > 0 {
                    parts.push(component[..digits].parse().ok()?);
                }
                pre = Some(component[digits..].to_ascii_lowercase());
            } else {
                return None;
            }
        }

        if parts.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            parts,
            pre,
        })
    }

    /// The directory name this tag was parsed from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a pre-release (`rc`, `a`, `b`, `dev` suffixes).
    #[must_use]
    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }

    /// Numeric component at `index`, treating missing components as 0 so
    /// `1.0` and `1.0.0` compare equal.
    fn part(&self, index: usize) -> u64 {
        self.parts.get(index).copied().unwrap_or(0)
    }
}

/// Pre-release phase rank and trailing number: `dev0` < `a1` < `b1` < `rc1`.
fn pre_rank(pre: &str) -> (u8, u64) {
    let split = pre
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(pre.len());
    let (phase, number) = pre.split_at(split);
    let rank = match phase {
        "dev" => 0,
        "a" | "alpha" => 1,
        "b" | "beta" => 2,
        "c" | "rc" => 3,
        _ => 4,
    };
    (rank, number.parse().unwrap_or(0))
}

impl Ord for ReleaseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let width = self.parts.len().max(other.parts.len());
        for i in 0..width {
            match self.part(i).cmp(&other.part(i)) {
                Ordering::Equal => {}
                ordering => return ordering,
            }
        }

        let by_pre = match (&self.pre, &other.pre) {
            (None, None) => Ordering::Equal,
            // A release outranks any of its pre-releases.
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => pre_rank(a).cmp(&pre_rank(b)),
        };

        // Tie-break on the published name to stay consistent with `Eq`.
        by_pre.then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for ReleaseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(name: &str) -> ReleaseVersion {
        ReleaseVersion::parse(name).unwrap_or_else(|| panic!("{name} should parse"))
    }

    #[test]
    fn test_parse_release_tags() {
        assert_eq!(parse("1.0").name(), "1.0");
        assert_eq!(parse("0.7.0").name(), "0.7.0");
        assert_eq!(parse("v2.1").name(), "v2.1");
        assert!(!parse("1.0").is_prerelease());
    }

    #[test]
    fn test_parse_prerelease_tags() {
        assert!(parse("1.1rc1").is_prerelease());
        assert!(parse("2.0.0a2").is_prerelease());
        assert!(parse("1.1.dev0").is_prerelease());
        assert!(parse("1.0b1").is_prerelease());
    }

    #[test]
    fn test_non_release_names_rejected() {
        assert!(ReleaseVersion::parse("main").is_none());
        assert!(ReleaseVersion::parse("assets").is_none());
        assert!(ReleaseVersion::parse("stable").is_none());
        assert!(ReleaseVersion::parse("").is_none());
        assert!(ReleaseVersion::parse("1..0").is_none());
        assert!(ReleaseVersion::parse("1.x.0").is_none());
    }

    #[test]
    fn test_numeric_ordering() {
        assert!(parse("0.9") < parse("1.0"));
        assert!(parse("1.2") < parse("1.10"));
        assert!(parse("2.0") > parse("1.9.9"));
    }

    #[test]
    fn test_prerelease_sorts_below_release() {
        assert!(parse("1.1rc1") < parse("1.1"));
        assert!(parse("1.1rc1") > parse("1.0"));
    }

    #[test]
    fn test_prerelease_phase_ordering() {
        assert!(parse("1.0.dev0") < parse("1.0a1"));
        assert!(parse("1.0a1") < parse("1.0b1"));
        assert!(parse("1.0b1") < parse("1.0rc1"));
        assert!(parse("1.0rc1") < parse("1.0rc2"));
    }

    #[test]
    fn test_missing_components_compare_as_zero() {
        assert_eq!(parse("1.0").cmp(&parse("1.0.0")), "1.0".cmp("1.0.0"));
        assert!(parse("1.0.1") > parse("1.0"));
    }
}
