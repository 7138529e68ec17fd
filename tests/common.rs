use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

/// Overlay file name used when no --overlay flag or config is given
pub const DEFAULT_OVERLAY: &str = "datos_personalizados.json";

/// citynav isolated inside `dir`: config, overlay and logging come only from there
pub fn citynav(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("citynav");
    cmd.current_dir(dir)
        .env("CITYNAV_CONFIG_DIR", dir.join("config"))
        .env_remove("CITYNAV_OVERLAY")
        .env_remove("CITYNAV_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Parse stdout of a successful `--format json` run
#[allow(dead_code)]
pub fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
