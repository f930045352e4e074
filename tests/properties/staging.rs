//! Property tests for structured staging on a real filesystem.

use proptest::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;

use tempfile::TempDir;
use wasmdist::domain::ports::{CommandRunner, NoopEventSink};
use wasmdist::infrastructure::LocalFs;
use wasmdist::{BuildOptions, BuildUseCase, ExternalCommand, StagePaths, WasmdistResult};

const ASSETS: [&str; 6] = [
    "index.html",
    "styles.css",
    "scripts",
    "grids",
    "renderer",
    "assets",
];

/// Writes `pkg/a.wasm` and `pkg/a.js` into the command's working directory
struct WritesPackage;

impl CommandRunner for WritesPackage {
    fn run(&self, command: &ExternalCommand) -> WasmdistResult<()> {
        let root = command.working_dir().unwrap_or(Path::new("."));
        std::fs::create_dir_all(root.join("pkg"))?;
        std::fs::write(root.join("pkg/a.wasm"), "wasm")?;
        std::fs::write(root.join("pkg/a.js"), "js")?;
        Ok(())
    }
}

fn files_under(dir: &Path) -> BTreeSet<String> {
    fn walk(base: &Path, dir: &Path, out: &mut BTreeSet<String>) {
        for entry in std::fs::read_dir(dir).unwrap().flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(base, &path, out);
            } else {
                out.insert(path.strip_prefix(base).unwrap().to_string_lossy().replace('\\', "/"));
            }
        }
    }

    let mut out = BTreeSet::new();
    walk(dir, dir, &mut out);
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a structured build stages exactly the package plus the assets that exist,
    /// whatever was in the deploy directory before.
    #[test]
    fn property_structured_stage_is_exact(
        present in proptest::collection::vec(any::<bool>(), ASSETS.len()),
        stale in proptest::collection::vec("[a-z]{1,8}\\.txt", 0..=4),
    ) {
        let project = TempDir::new().unwrap();
        let root = project.path();

        let mut expected: BTreeSet<String> =
            ["pkg/a.js", "pkg/a.wasm"].iter().map(|s| s.to_string()).collect();

        for (asset, exists) in ASSETS.iter().zip(&present) {
            if !exists {
                continue;
            }
            if asset.contains('.') {
                std::fs::write(root.join(asset), asset).unwrap();
                expected.insert(asset.to_string());
            } else {
                std::fs::create_dir_all(root.join(asset).join("sub")).unwrap();
                std::fs::write(root.join(asset).join("sub/item.txt"), asset).unwrap();
                expected.insert(format!("{asset}/sub/item.txt"));
            }
        }

        std::fs::create_dir_all(root.join("dist")).unwrap();
        for name in &stale {
            std::fs::write(root.join("dist").join(name), "stale").unwrap();
        }

        let paths = StagePaths::resolve(root, Path::new("pkg"), Path::new("dist"));
        let use_case = BuildUseCase::new(WritesPackage, LocalFs::new(), NoopEventSink);
        let result = use_case.execute(&paths, &BuildOptions::default()).unwrap();

        prop_assert_eq!(files_under(&paths.deploy_dir), expected.clone());
        prop_assert_eq!(result.file_count(), expected.len());
        prop_assert_eq!(result.skipped.len(), present.iter().filter(|p| !**p).count());
    }
}
