//! Test environment builder for isolated wasmdist runs.
//!
//! Provides `TestEnv` - a temp project directory with a stand-in compiler
//! script wired up through `wasmdist.toml`, plus helpers to run the binary.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use super::fixtures::COMPILER_OK;

/// Environment variables that would leak host configuration into a run
const ISOLATED_VARS: &[&str] = &[
    "WASMDIST_TOOL",
    "WASMDIST_DEPLOY_DIR",
    "WASMDIST_LAYOUT",
    "WASMDIST_PORT",
];

/// Result of running the wasmdist binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON, one value per non-empty line
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {l}"))
            })
            .collect()
    }
}

/// Isolated project directory with a fake compiler
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Stand-in compiler script, outside the project tree
    pub compiler: PathBuf,
    _tools_dir: TempDir,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Read a project file to a string, panicking with the path on failure
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
    }

    /// Write a project file, creating parent directories
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Arguments the stand-in compiler received on its last run
    pub fn compiler_args(&self) -> Vec<String> {
        self.read("compiler-args.txt")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Run wasmdist from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args, &[])
    }

    /// Run wasmdist from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from(self.project_root.path(), args, env_vars)
    }

    /// Run wasmdist from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_wasmdist"));
        cmd.current_dir(cwd).args(args).env("NO_COLOR", "1");

        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to run wasmdist binary");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Builder for TestEnv
pub struct TestEnvBuilder {
    compiler_script: String,
    files: Vec<(String, String)>,
    directories: Vec<String>,
    config_sections: Vec<String>,
    write_config: bool,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            compiler_script: COMPILER_OK.to_string(),
            files: Vec::new(),
            directories: Vec::new(),
            config_sections: Vec::new(),
            write_config: true,
        }
    }

    /// Replace the stand-in compiler script
    pub fn with_compiler(mut self, script: &str) -> Self {
        self.compiler_script = script.to_string();
        self
    }

    /// Add a project file (e.g. a static asset)
    pub fn with_file(mut self, name: &str, content: &str) -> Self {
        self.files.push((name.to_string(), content.to_string()));
        self
    }

    /// Create an empty project directory
    pub fn with_directory(mut self, name: &str) -> Self {
        self.directories.push(name.to_string());
        self
    }

    /// Append raw TOML after the generated `[build]` section
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config_sections.push(toml.to_string());
        self
    }

    /// Do not write `wasmdist.toml`; the compiler must come from `WASMDIST_TOOL`
    pub fn without_config_file(mut self) -> Self {
        self.write_config = false;
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project temp dir");
        let tools_dir = TempDir::new().expect("Failed to create tools temp dir");

        let compiler = tools_dir.path().join("fake-wasm-pack");
        std::fs::write(&compiler, &self.compiler_script).expect("Failed to write compiler script");
        make_executable(&compiler);

        if self.write_config {
            let mut config = format!("[build]\ntool = '{}'\n", compiler.display());
            for section in &self.config_sections {
                config.push('\n');
                config.push_str(section);
                config.push('\n');
            }
            std::fs::write(project_root.path().join("wasmdist.toml"), config)
                .expect("Failed to write wasmdist.toml");
        }

        for dir in &self.directories {
            std::fs::create_dir_all(project_root.path().join(dir))
                .expect("Failed to create directory");
        }

        for (name, content) in &self.files {
            let path = project_root.path().join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create parent directory");
            }
            std::fs::write(&path, content).expect("Failed to write file");
        }

        TestEnv {
            project_root,
            compiler,
            _tools_dir: tools_dir,
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)
        .expect("Failed to stat compiler script")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("Failed to chmod compiler script");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
