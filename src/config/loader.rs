//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::DeployLayout;
use crate::error::{WasmdistError, WasmdistResult};

use super::types::Config;

/// Project config file, looked up in the project root
pub const CONFIG_FILE_NAME: &str = "wasmdist.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> WasmdistResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(WasmdistError::fs("failed to read", path))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WasmdistError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate(&config, path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `wasmdist.toml` from the project root if present, then apply env overrides.
///
/// A missing file yields the defaults; a malformed one is an error.
pub fn load_for_project(root: &Path) -> WasmdistResult<(Config, Vec<ConfigWarning>)> {
    let path = root.join(CONFIG_FILE_NAME);
    let (config, warnings) = if path.is_file() {
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (WASMDIST_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides using a custom environment lookup.
///
/// Invalid values are ignored and leave the setting unchanged.
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(tool) = get_env("WASMDIST_TOOL").filter(|t| !t.trim().is_empty()) {
        config.build.tool = tool;
    }

    if let Some(dir) = get_env("WASMDIST_DEPLOY_DIR").filter(|d| !d.trim().is_empty()) {
        config.deploy.dir = PathBuf::from(dir);
    }

    if let Some(layout) = get_env("WASMDIST_LAYOUT").and_then(|l| DeployLayout::parse(&l)) {
        config.deploy.layout = layout;
    }

    if let Some(port) = get_env("WASMDIST_PORT").and_then(|p| p.trim().parse::<u16>().ok()) {
        config.serve.port = port;
    }

    config
}

fn validate(config: &Config, file: &Path) -> WasmdistResult<()> {
    let invalid = |message: String| WasmdistError::InvalidConfig {
        file: file.to_path_buf(),
        message,
    };

    if config.build.tool.trim().is_empty() {
        return Err(invalid("build.tool must not be empty".to_string()));
    }

    if config.serve.command.is_empty() {
        return Err(invalid("serve.command must not be empty".to_string()));
    }

    if let Some(entry) = config.deploy.assets.first_escaping() {
        return Err(invalid(format!(
            "deploy.assets entry '{}' must be a relative path inside the project",
            entry.display()
        )));
    }

    Ok(())
}

/// 1-based line of the first `key = ...` assignment
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "build", "tool", "target", "out_dir", "deploy", "dir", "layout", "assets", "serve",
        "command", "port",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
