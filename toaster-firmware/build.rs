//! Build script for toaster-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates toaster.toml at compile time with the firmware's own parser

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use toaster_core::config::{parse_config, ConfigError, ToasterConfig};

include!("src/board.rs");

/// Highest RP2040 user GPIO
const MAX_GPIO: u8 = 29;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate toaster.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=toaster.toml");
    println!("cargo:rerun-if-changed=src/board.rs");

    let config_path = Path::new("toaster.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read toaster.toml", &[e.to_string()]),
    };

    // Syntax first, for readable line/column errors
    if let Err(e) = toml::from_str::<toml::Value>(&content) {
        fail(
            "Invalid TOML syntax in toaster.toml",
            &e.to_string().lines().map(String::from).collect::<Vec<_>>(),
        );
    }

    let config = match parse_config(&content) {
        Ok(config) => config,
        Err(e) => fail(
            "toaster.toml rejected by the firmware parser",
            &[format!("{:?}", e)],
        ),
    };

    let errors = board_errors(&config);
    if !errors.is_empty() {
        fail("toaster.toml does not fit the board", &errors);
    }

    println!("cargo:warning=toaster.toml validated successfully");
}

/// Check configured pins against the chip and the fixed board wiring
fn board_errors(config: &ToasterConfig) -> Vec<String> {
    let reserved: Vec<u8> = BUTTON_PINS.iter().map(|&(_, pin)| pin).collect();
    match config.check_board(MAX_GPIO, &reserved) {
        Ok(()) => Vec::new(),
        Err(ConfigError::ReservedPin(pin)) => {
            let (name, _) = BUTTON_PINS
                .iter()
                .find(|&&(_, p)| p == pin)
                .copied()
                .unwrap_or(("board", pin));
            vec![format!("[pins] gpio{} is wired to the {}", pin, name)]
        }
        Err(e) => vec![format!("{:?}", e)],
    }
}

/// Abort the build with a boxed error listing
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|line| {
                let line = if line.chars().count() > 62 {
                    format!("{}...", line.chars().take(59).collect::<String>())
                } else {
                    line.clone()
                };
                format!("║  • {:<62} ║", line)
            })
            .collect::<Vec<_>>()
            .join("\n")
    );
}
