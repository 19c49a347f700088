//! Stamps the binary with its source revision and build time
//!
//! Exposes `GIT_HASH`, `BUILD_TIMESTAMP` and `BUILD_PROFILE` to `env!`.
//! No `rerun-if-changed` is emitted, so the values refresh on every build.

use chrono::{Local, SecondsFormat};
use std::env;
use std::process::Command;

fn git_revision() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let revision = String::from_utf8(output.stdout).ok()?;
    Some(revision.trim().to_string())
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env={}={}", key, value);
}

fn main() {
    emit("GIT_HASH", &git_revision().unwrap_or_else(|| "unknown".into()));
    emit(
        "BUILD_TIMESTAMP",
        &Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
    );
    emit(
        "BUILD_PROFILE",
        &env::var("PROFILE").unwrap_or_else(|_| "unknown".into()),
    );
}
