use std::{borrow::Borrow, fmt, sync::Arc};

/// Marker separating a base unit name from its split-part suffix, e.g. `douglas#2`.
pub const PART_SEPARATOR: char = '#';

/// Normalize a raw unit name so every data source maps the same entity to the same key.
///
/// Trims, lowercases, drops commas and all whitespace, then strips a trailing `county`.
pub fn normalize_name(raw: &str) -> String {
    let mut name = raw.trim()
        .to_lowercase()
        .chars()
        .filter(|&c| c != ',' && !c.is_whitespace())
        .collect::<String>();

    if let Some(stem) = name.strip_suffix("county") { name.truncate(stem.len()) }
    name
}

/// Stable key for a unit, shared cheaply between tables and plans.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitId(Arc<str>);

impl UnitId {
    /// Build a key from a raw name, applying `normalize_name`.
    pub fn new(raw: &str) -> Self { Self(Arc::from(normalize_name(raw))) }

    /// Wrap a name that is already normalized.
    pub fn from_normalized(name: impl Into<Arc<str>>) -> Self { Self(name.into()) }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }

    /// The base unit this key belongs to, without any split-part suffix.
    #[inline]
    pub fn base(&self) -> &str {
        self.0.split_once(PART_SEPARATOR).map_or(self.as_str(), |(base, _)| base)
    }

    /// Whether this key denotes one part of a split base unit.
    #[inline] pub fn is_part(&self) -> bool { self.0.contains(PART_SEPARATOR) }
}

impl Borrow<str> for UnitId {
    fn borrow(&self) -> &str { &self.0 }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_case_whitespace_commas_and_suffix() {
        assert_eq!(normalize_name("  Adams County "), "adams");
        assert_eq!(normalize_name("Box Butte County"), "boxbutte");
        assert_eq!(normalize_name("Lancaster, County"), "lancaster");
        assert_eq!(normalize_name("DOUGLAS#2"), "douglas#2");
        assert_eq!(normalize_name("Sioux\t"), "sioux");
    }

    #[test]
    fn suffix_is_only_stripped_at_the_end() {
        assert_eq!(normalize_name("County Line"), "countyline");
        assert_eq!(normalize_name("Douglas County#1"), "douglascounty#1");
    }

    #[test]
    fn base_drops_part_suffix() {
        let id = UnitId::new("Douglas#2");
        assert_eq!(id.as_str(), "douglas#2");
        assert_eq!(id.base(), "douglas");
        assert!(id.is_part());

        let whole = UnitId::new("Sarpy County");
        assert_eq!(whole.base(), "sarpy");
        assert!(!whole.is_part());
    }

    #[test]
    fn borrowed_lookup_matches_owned_key() {
        let mut map = std::collections::HashMap::new();
        map.insert(UnitId::new("Hall County"), 7);
        assert_eq!(map.get("hall"), Some(&7));
    }
}
