//! Program Loader.
//!
//! This module loads program images for the command-line front end.
//! Two formats are supported:
//!
//! * **Hex listing** (any extension but `.bin`): one 32-bit word per
//!   line, with an optional `0x` prefix; blank lines and `#` comments
//!   are skipped.
//! * **Raw binary** (`.bin`): little-endian 32-bit words.
//!
//! Loader failures are fatal; the library core itself never performs I/O.

use std::fs;
use std::process;

/// Loads a binary file from disk, exiting the process on failure.
pub fn load_binary(path: &str) -> Vec<u8> {
    fs::read(path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not read file '{}': {}", path, e);
        process::exit(1);
    })
}

/// Loads a program image as a sequence of 32-bit instruction words.
pub fn load_words(path: &str) -> Vec<u32> {
    if path.ends_with(".bin") {
        let bytes = load_binary(path);
        if bytes.len() % 4 != 0 {
            eprintln!(
                "\n[!] FATAL: '{}' is {} bytes, not a multiple of 4",
                path,
                bytes.len()
            );
            process::exit(1);
        }
        return bytes
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
    }

    let text = String::from_utf8(load_binary(path)).unwrap_or_else(|_| {
        eprintln!("\n[!] FATAL: '{}' is not valid UTF-8 hex text", path);
        process::exit(1);
    });

    let mut words = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let item = line.split('#').next().unwrap_or("").trim();
        if item.is_empty() {
            continue;
        }
        let digits = item.trim_start_matches("0x");
        match u32::from_str_radix(digits, 16) {
            Ok(word) => words.push(word),
            Err(_) => {
                eprintln!(
                    "\n[!] FATAL: '{}' line {}: bad instruction word '{}'",
                    path,
                    lineno + 1,
                    item
                );
                process::exit(1);
            }
        }
    }
    words
}
