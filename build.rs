//! Build metadata for items-rs
//!
//! Exports `BUILD_TIME`, `BUILD_PROFILE`, `GIT_HASH` and `RUST_VERSION`,
//! read back by `items_rs::BuildInfo` and reported on `/health`.

use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const UNKNOWN: &str = "unknown";

fn main() {
    let build_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| UNKNOWN.to_string());

    // No git checkout or toolchain binaries on docs.rs
    let docs_rs = std::env::var_os("DOCS_RS").is_some();
    let git_hash = if docs_rs {
        None
    } else {
        command_output("git", &["rev-parse", "--short", "HEAD"])
    };
    let rust_version = if docs_rs {
        None
    } else {
        command_output(&rustc(), &["--version"])
    };

    emit("BUILD_TIME", &build_time.to_string());
    emit("BUILD_PROFILE", &profile);
    emit("GIT_HASH", git_hash.as_deref().unwrap_or(UNKNOWN));
    emit("RUST_VERSION", rust_version.as_deref().unwrap_or(UNKNOWN));

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
    println!("cargo:rerun-if-env-changed=DOCS_RS");
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env={}={}", key, value);
}

/// Cargo passes the compiler it is using through `RUSTC`
fn rustc() -> String {
    std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string())
}

/// Trimmed stdout of a successful command
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
