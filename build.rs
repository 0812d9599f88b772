// Copyright 2025 Mara Ellison (maraellison@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Build script for the source document builder
//!
//! Rejects stray editor backup files in the source tree at compile time.
//! Backup copies of source files (`foo.rs~`, `foo.rs.bak`, merge leftovers)
//! have a habit of being committed by accident and then shipping stale code
//! inside the crate; the build fails loudly instead.
//!
//! # Failure
//!
//! Exits with code 1 and lists every offending file.

use std::fs;
use std::path::Path;
use std::process::exit;

/// File-name endings that mark a file as an editor or merge leftover.
const BACKUP_SUFFIXES: &[&str] = &["~", ".bak", ".orig", ".rej", ".swp"];

fn main() {
    let mut stray = Vec::new();
    collect_backup_files(Path::new("src"), &mut stray);

    if !stray.is_empty() {
        eprintln!("Error: stray backup files in src/:");
        for path in &stray {
            eprintln!("  {}", path);
        }
        eprintln!("Remove these files before building.");
        exit(1);
    }

    println!("cargo:rerun-if-changed=src");
}

/// Recursively collects paths under `dir` whose names carry a backup suffix.
fn collect_backup_files(dir: &Path, stray: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_backup_files(&path, stray);
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if BACKUP_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            stray.push(path.display().to_string());
        }
    }
}
