use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered `name -> version` map as written to the manifest.
pub type DependencyMap = IndexMap<String, String>;

/// One `[[manifest.dependencies]]`-style entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    pub name: String,
    pub version: String,
}

impl DependencySpec {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        DependencySpec {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Collapse a dependency list into a map.
///
/// A repeated name keeps the slot of its first occurrence and takes the
/// version of its last one.
pub fn merge_dependencies(specs: &[DependencySpec]) -> DependencyMap {
    let mut map = DependencyMap::with_capacity(specs.len());
    for spec in specs {
        map.insert(spec.name.clone(), spec.version.clone());
    }
    map
}

/// Index of the first entry whose name is empty.
pub fn find_empty_name(specs: &[DependencySpec]) -> Option<usize> {
    specs.iter().position(|spec| spec.name.is_empty())
}

/// Names that appear more than once, in order of first repeat.
pub fn duplicate_names(specs: &[DependencySpec]) -> Vec<&str> {
    let mut seen = IndexMap::new();
    let mut dups = Vec::new();
    for spec in specs {
        let count = seen.entry(spec.name.as_str()).or_insert(0usize);
        *count += 1;
        if *count == 2 {
            dups.push(spec.name.as_str());
        }
    }
    dups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_empty() {
        assert!(merge_dependencies(&[]).is_empty());
    }

    #[test]
    fn test_merge_last_version_wins() {
        let specs = vec![DependencySpec::new("core", "1.0"), DependencySpec::new("core", "2.0")];
        let map = merge_dependencies(&specs);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("core").map(String::as_str), Some("2.0"));
    }

    #[test]
    fn test_merge_duplicate_keeps_first_position() {
        let specs = vec![
            DependencySpec::new("core", "1.0"),
            DependencySpec::new("ui", "0.3"),
            DependencySpec::new("core", "2.0"),
        ];
        let map = merge_dependencies(&specs);
        let entries: Vec<(&str, &str)> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(entries, vec![("core", "2.0"), ("ui", "0.3")]);
    }

    #[test]
    fn test_merge_preserves_input_order() {
        let specs = vec![
            DependencySpec::new("zeta", "1"),
            DependencySpec::new("alpha", "2"),
            DependencySpec::new("mid", "3"),
        ];
        let keys: Vec<String> = merge_dependencies(&specs).into_keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_find_empty_name() {
        let specs = vec![DependencySpec::new("core", "1.0"), DependencySpec::new("", "1.0")];
        assert_eq!(find_empty_name(&specs), Some(1));
        assert_eq!(find_empty_name(&specs[..1]), None);
    }

    #[test]
    fn test_duplicate_names() {
        let specs = vec![
            DependencySpec::new("a", "1"),
            DependencySpec::new("b", "1"),
            DependencySpec::new("a", "2"),
            DependencySpec::new("a", "3"),
            DependencySpec::new("b", "2"),
        ];
        assert_eq!(duplicate_names(&specs), vec!["a", "b"]);
    }
}
