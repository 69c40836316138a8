//! Turns a [`ManifestInput`] into a [`Manifest`].
//!
//! Everything here is pure: no file system access, no output.

use crate::types::author::AuthorInfo;
use crate::types::dependency::{merge_dependencies, DependencyMap, DependencySpec};
use crate::types::manifest::{DependencyMapPolicy, Manifest};
use crate::types::manifest_input::ManifestInput;
use crate::types::plugin_toml::Person;

/// Pick the author list for the manifest.
///
/// A non-empty `explicit` list is returned as is. Otherwise every developer
/// and then every contributor becomes one author, in source order.
pub fn resolve_authors(
    explicit: &[AuthorInfo],
    developers: &[Person],
    contributors: &[Person],
) -> Vec<AuthorInfo> {
    if !explicit.is_empty() {
        return explicit.to_vec();
    }
    developers
        .iter()
        .chain(contributors)
        .map(AuthorInfo::from)
        .collect()
}

fn empty_to_none(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_owned)
}

fn dependency_map(specs: &[DependencySpec], policy: DependencyMapPolicy) -> Option<DependencyMap> {
    let map = merge_dependencies(specs);
    match policy {
        DependencyMapPolicy::OmitEmpty if map.is_empty() => None,
        _ => Some(map),
    }
}

pub fn build_manifest(input: &ManifestInput) -> Manifest {
    let authors = resolve_authors(&input.authors, &input.developers, &input.contributors);
    let policy = input.dependency_maps;

    Manifest {
        group: empty_to_none(input.group.as_deref()),
        name: empty_to_none(input.name.as_deref()),
        version: empty_to_none(input.version.as_deref()),
        description: empty_to_none(input.description.as_deref()),
        authors,
        website: empty_to_none(input.website.as_deref()),
        server_version: empty_to_none(input.server_version.as_deref()),
        dependencies: dependency_map(&input.dependencies, policy),
        optional_dependencies: dependency_map(&input.optional_dependencies, policy),
        load_before: dependency_map(&input.load_before, policy),
        disabled_by_default: input.disabled_by_default,
        includes_asset_pack: input.includes_asset_pack,
        main: empty_to_none(input.main.as_deref()),
    }
}
