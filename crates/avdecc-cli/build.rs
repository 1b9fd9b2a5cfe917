use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=AVDECC_BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");

    let commit = env_value("AVDECC_BUILD_COMMIT")
        .or_else(|| env_value("GITHUB_SHA").map(|sha| sha.chars().take(7).collect()))
        .or_else(|| git(&["rev-parse", "--short", "HEAD"]))
        .unwrap_or_else(|| UNKNOWN.to_string());
    let date = git(&["log", "-1", "--format=%cs"]).unwrap_or_else(|| UNKNOWN.to_string());

    println!("cargo:rustc-env=AVDECC_BUILD_COMMIT={commit}");
    println!("cargo:rustc-env=AVDECC_BUILD_DATE={date}");
}

fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!value.is_empty()).then_some(value)
}
