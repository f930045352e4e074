//! Filesystem paths for one build, computed once from the project root

use std::path::{Component, Path, PathBuf};

/// Name of the package subdirectory inside a structured deploy directory
pub const PACKAGE_SUBDIR: &str = "pkg";

/// Resolved directories used while staging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagePaths {
    /// Project root; assets and relative config paths resolve against it
    pub root: PathBuf,
    /// Directory the compiler populates
    pub output_dir: PathBuf,
    /// Directory assembled for deployment
    pub deploy_dir: PathBuf,
}

impl StagePaths {
    /// Resolve `out_dir` and `deploy_dir` against `root` (absolute paths win).
    ///
    /// All three paths are normalized lexically, so `dist/..` or `../proj`
    /// compare equal to the directory they name.
    pub fn resolve(root: &Path, out_dir: &Path, deploy_dir: &Path) -> Self {
        let root = normalize(root);
        Self {
            output_dir: normalize(&root.join(out_dir)),
            deploy_dir: normalize(&root.join(deploy_dir)),
            root,
        }
    }

    /// Where the compiler output lands in a structured layout
    pub fn package_dir(&self) -> PathBuf {
        self.deploy_dir.join(PACKAGE_SUBDIR)
    }

    /// Why the deploy directory cannot be wiped and refilled, if it can't.
    ///
    /// Paths are compared lexically; symlinks are not resolved.
    pub fn deploy_dir_conflict(&self) -> Option<&'static str> {
        if self.root.starts_with(&self.deploy_dir) {
            return Some("it contains the project root");
        }
        if self.output_dir.starts_with(&self.deploy_dir) {
            return Some("it contains the compiler output directory");
        }
        if self.deploy_dir.starts_with(&self.output_dir) {
            return Some("it is inside the compiler output directory");
        }
        None
    }
}

/// Fold `.` and `..` components without touching the filesystem.
///
/// `..` never climbs above the root of an absolute path; leading `..` of a
/// relative path are kept.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
