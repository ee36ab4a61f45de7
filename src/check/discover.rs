//! Discovery of base and profile files within a folder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Base file names, in order of preference.
pub const BASE_FILE_NAMES: [&str; 2] = ["application.yaml", "application.yml"];

/// Profile file name patterns; `*` matches any run of characters.
pub const PROFILE_PATTERNS: [&str; 4] = [
    "application-*-*.yaml",
    "application-*.yaml",
    "application-*-*.yml",
    "application-*.yml",
];

/// Returns the base file of `folder`, preferring `application.yaml`.
pub fn find_base_file(folder: &Path) -> Option<PathBuf> {
    BASE_FILE_NAMES
        .iter()
        .map(|name| folder.join(name))
        .find(|candidate| candidate.is_file())
}

/// Returns true if `file_name` names a profile file.
pub fn is_profile_file_name(file_name: &str) -> bool {
    !BASE_FILE_NAMES.contains(&file_name)
        && PROFILE_PATTERNS
            .iter()
            .any(|pattern| wildcard_match(pattern, file_name))
}

/// Lists the profile files directly inside `folder`, sorted and without
/// duplicates. Base files are never included.
pub fn find_profile_files(folder: &Path) -> io::Result<Vec<PathBuf>> {
    let mut profiles = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if is_profile_file_name(name) && entry.path().is_file() {
            profiles.push(entry.path());
        }
    }
    profiles.sort();
    profiles.dedup();
    Ok(profiles)
}

/// Matches `text` against a pattern whose only metacharacter is `*`.
fn wildcard_match(pattern: &str, text: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();
    let (mut pi, mut ti) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while ti < t.len() {
        if pi < p.len() && p[pi] == '*' {
            backtrack = Some((pi, ti));
            pi += 1;
        } else if pi < p.len() && p[pi] == t[ti] {
            pi += 1;
            ti += 1;
        } else if let Some((star, matched)) = backtrack {
            pi = star + 1;
            ti = matched + 1;
            backtrack = Some((star, matched + 1));
        } else {
            return false;
        }
    }
    p[pi..].iter().all(|&c| c == '*')
}
