//! Build script for sunshine-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates face.toml and embeds it as a postcard blob
//! - Records the build time as the clock's starting point

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use sunshine_core::config::{ConfigError, FaceConfig};

fn main() {
    setup_linker();
    build_config();
    record_build_time();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate face.toml and write it to OUT_DIR as postcard bytes
fn build_config() {
    println!("cargo:rerun-if-changed=face.toml");

    let config_path = Path::new("face.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: face.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a face.toml configuration file.           ║\n\
            ║  Please create one in the sunshine-firmware directory.           ║\n\
            ║  An empty file selects every default.                            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read face.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Syntax first, so TOML mistakes are not reported as schema mistakes
    if let Err(e) = toml::from_str::<toml::Value>(&config_content) {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid TOML syntax in face.toml                         ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        );
    }

    let config: FaceConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Unexpected key or value in face.toml                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: face.toml does not describe a drawable face              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            ║  • {:<62} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            describe(e)
        );
    }

    let bytes = postcard::to_stdvec(&config).unwrap();
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("face_config.bin"), bytes).unwrap();

    println!("cargo:warning=face.toml validated successfully");
}

fn describe(e: ConfigError) -> &'static str {
    match e {
        ConfigError::InvalidScreenSize => "[dimensions] width and height must be non-zero",
        ConfigError::OffsetOutOfBounds => "[dimensions] a y offset lies below the screen",
        ConfigError::DividerTooWide => "[dimensions] divider_half_width exceeds half the width",
        ConfigError::InvalidTimeZone => "[clock] utc_offset_minutes must be within +/-1439",
        ConfigError::InvalidLinkTiming => "[link] timeout and miss count must be non-zero",
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the build time so the clock starts near the real time
///
/// The board has no RTC; the phone link does not carry time either.
fn record_build_time() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let epoch_ms = chrono::Utc::now().timestamp_millis();
    let mut f = File::create(out_dir.join("build_time.rs")).unwrap();
    writeln!(f, "pub const BUILD_EPOCH_MS: i64 = {};", epoch_ms).unwrap();
}
