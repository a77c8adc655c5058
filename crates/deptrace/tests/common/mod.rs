//! Common test utilities shared across integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use deptrace::{DepsConfig, QueryConfig};

/// Path to the shell script that fakes the metadata query.
pub fn graph_script() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("graph.sh")
}

/// Configuration pointing the query at the fixture script.
pub fn fixture_config() -> DepsConfig {
    DepsConfig {
        namespace: "ns/".to_string(),
        query: QueryConfig {
            program: "sh".to_string(),
            args: vec![graph_script().display().to_string()],
        },
    }
}

/// Write `config` as YAML to `path`.
pub fn write_config(path: &Path, config: &DepsConfig) {
    let yaml = serde_yaml::to_string(config).expect("config should serialize");
    std::fs::write(path, yaml).expect("should write config file");
}

/// Run the deptrace binary in `dir` with colors and log filters disabled.
pub fn run_deps_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_deptrace"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute deptrace binary")
}
