// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

const EXCLUDE_DIR_NAMES: &[&str] = &["target", "examples", ".git"];

fn has_spdx_identifier(file_path: &Path) -> bool {
    let file = fs::File::open(file_path).unwrap();
    let reader = io::BufReader::new(file);
    match reader.lines().next() {
        Some(Ok(first_line)) => first_line.starts_with("// SPDX-License-Identifier: Apache-2.0"),
        _ => false,
    }
}

#[test]
fn check_all_rust_files_for_spdx() {
    let project_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut missing_spdx_files = Vec::new();
    let mut dir_worklist: Vec<PathBuf> = vec![project_dir.to_path_buf()];

    while let Some(dir) = dir_worklist.pop() {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                let excluded = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| EXCLUDE_DIR_NAMES.contains(&n));
                if !excluded {
                    dir_worklist.push(path);
                }
                continue;
            }
            if path.extension().is_some_and(|e| e == "rs") && !has_spdx_identifier(&path) {
                missing_spdx_files.push(path);
            }
        }
    }

    assert!(
        missing_spdx_files.is_empty(),
        "The following files are missing SPDX identifiers: {:?}",
        missing_spdx_files
    );
}
