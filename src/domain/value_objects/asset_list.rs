//! Static asset list value object
//!
//! A fixed, ordered list of project-relative paths that are staged next to
//! the compiled package. Entries may be files or directories and are allowed
//! to be missing on disk.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Entries staged when no list is configured
pub const DEFAULT_ASSETS: [&str; 6] = [
    "index.html",
    "styles.css",
    "scripts",
    "grids",
    "renderer",
    "assets",
];

/// Ordered list of static asset paths, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetList(Vec<PathBuf>);

impl AssetList {
    pub fn new(entries: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self(entries.into_iter().map(Into::into).collect())
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }

    /// First entry that is absolute or climbs out of the project root
    pub fn first_escaping(&self) -> Option<&Path> {
        self.iter().find(|p| !is_contained(p))
    }
}

impl Default for AssetList {
    fn default() -> Self {
        Self::new(DEFAULT_ASSETS)
    }
}

fn is_contained(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_keeps_order() {
        let list = AssetList::default();
        let names: Vec<_> = list.iter().map(|p| p.to_string_lossy().to_string()).collect();
        assert_eq!(
            names,
            vec!["index.html", "styles.css", "scripts", "grids", "renderer", "assets"]
        );
    }

    #[test]
    fn relative_entries_are_contained() {
        let list = AssetList::new(["index.html", "static/img", "./fonts"]);
        assert_eq!(list.first_escaping(), None);
    }

    #[test]
    fn parent_and_absolute_entries_escape() {
        let list = AssetList::new(["index.html", "../secrets"]);
        assert_eq!(list.first_escaping(), Some(Path::new("../secrets")));

        let list = AssetList::new(["/etc/passwd"]);
        assert_eq!(list.first_escaping(), Some(Path::new("/etc/passwd")));
    }

    #[test]
    fn deserializes_from_plain_array() {
        let list: AssetList = serde_json::from_str(r#"["a.html", "img"]"#).unwrap();
        assert_eq!(list.len(), 2);
    }
}
