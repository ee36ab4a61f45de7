//! Folder processing and tree traversal.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::{find_base_file, find_profile_files, Options, Summary};
use crate::compare::{compare, Duplicate};
use crate::error::{CheckError, LoadError};
use crate::fieldpath::{flatten, FlatDocument};
use crate::load::{DocumentParser, Loader, YamlParser};
use crate::value::Value;

/// Checker compares base and profile files and writes a report.
///
/// The report goes to the writer passed to each call; diagnostics for the
/// operator go through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct Checker<P = YamlParser> {
    loader: Loader<P>,
    options: Options,
}

impl Checker<YamlParser> {
    /// Creates a checker backed by the YAML parser.
    pub fn new(options: Options) -> Self {
        Checker {
            loader: Loader::new(),
            options,
        }
    }
}

impl<P: DocumentParser> Checker<P> {
    /// Creates a checker with a custom loader.
    pub fn with_loader(loader: Loader<P>, options: Options) -> Self {
        Checker { loader, options }
    }

    /// Loads a file and flattens its merged document.
    pub fn load_flat(&self, path: &Path) -> Result<FlatDocument, LoadError> {
        let merged = self.loader.merge_file(path)?;
        let flat = flatten(&Value::Map(merged));
        debug!(path = %path.display(), entries = flat.len(), "flattened document");
        Ok(flat)
    }

    /// Returns the redundant overrides `profile` makes against `base`.
    pub fn compare_files(&self, base: &Path, profile: &Path) -> Result<Vec<Duplicate>, LoadError> {
        let base_flat = self.load_flat(base)?;
        let profile_flat = self.load_flat(profile)?;
        Ok(compare(&base_flat, &profile_flat))
    }

    /// Checks one folder: compares its base file against each profile file
    /// next to it and reports every duplicate.
    ///
    /// A folder without a base file is skipped silently. Load failures are
    /// reported and count as zero findings.
    pub fn process_folder(&self, folder: &Path, out: &mut dyn Write) -> Result<Summary, CheckError> {
        let mut summary = Summary::new();
        let Some(base_path) = find_base_file(folder) else {
            return Ok(summary);
        };
        summary.folders = 1;

        writeln!(out)?;
        writeln!(out, "Folder: {}", folder.display())?;
        writeln!(out, "Base:   {}", base_path.display())?;

        let profiles = find_profile_files(folder).unwrap_or_else(|e| {
            warn!(folder = %folder.display(), error = %e, "failed to list profile files");
            Vec::new()
        });
        debug!(folder = %folder.display(), profiles = profiles.len(), "discovered profile files");

        if profiles.is_empty() {
            writeln!(out, "No profile-specific files found.")?;
            return Ok(summary);
        }

        match self.load_flat(&base_path) {
            Ok(base_flat) => {
                for profile in &profiles {
                    summary += self.report_profile(&base_flat, profile, out)?;
                }
            }
            Err(e) => {
                writeln!(
                    out,
                    "ERROR: Failed to load base YAML '{}': {}",
                    base_path.display(),
                    e.cause()
                )?;
                summary.load_errors += 1;
            }
        }

        if summary.duplicates == 0 {
            writeln!(out, "No duplicate key values found.")?;
        }
        Ok(summary)
    }

    fn report_profile(
        &self,
        base_flat: &FlatDocument,
        profile: &Path,
        out: &mut dyn Write,
    ) -> Result<Summary, CheckError> {
        let mut summary = Summary::new();
        let profile_flat = match self.load_flat(profile) {
            Ok(flat) => flat,
            Err(e) => {
                writeln!(
                    out,
                    "ERROR: Failed to load profile YAML '{}': {}",
                    profile.display(),
                    e.cause()
                )?;
                summary.load_errors = 1;
                return Ok(summary);
            }
        };
        summary.profiles = 1;

        for duplicate in compare(base_flat, &profile_flat) {
            writeln!(
                out,
                "ERROR: {}: key '{}' duplicates base value {}",
                profile.display(),
                duplicate.path,
                duplicate.value.render_truncated(self.options.value_width)
            )?;
            summary.duplicates += 1;
        }
        Ok(summary)
    }

    /// Walks `root` recursively and processes every folder that holds a
    /// base file, then writes the closing line.
    ///
    /// Fails up front with [`CheckError::InvalidRoot`] if `root` is not an
    /// existing directory.
    pub fn run(&self, root: &Path, out: &mut dyn Write) -> Result<Summary, CheckError> {
        let root = resolve_root(root)?;
        let mut summary = Summary::new();
        for folder in eligible_folders(&root) {
            debug!(folder = %folder.display(), "processing folder");
            summary += self.process_folder(&folder, out)?;
        }

        writeln!(out)?;
        if summary.has_duplicates() {
            writeln!(
                out,
                "Completed with {} duplicated key value(s) found.",
                summary.duplicates
            )?;
        } else {
            writeln!(out, "Completed with no duplicated key values found.")?;
        }
        Ok(summary)
    }

    /// Runs the check and returns the process exit code: 0 when clean, 1
    /// when duplicates were found, or the error's own code. A fatal error is
    /// written to `out` as an `ERROR:` line.
    pub fn execute(&self, root: &Path, out: &mut dyn Write) -> u8 {
        match self.run(root, out) {
            Ok(summary) => {
                debug!(?summary, "run finished");
                summary.exit_code()
            }
            Err(e) => {
                if let Err(write_err) = writeln!(out, "ERROR: {}", e) {
                    warn!(error = %write_err, "failed to write report");
                }
                e.exit_code()
            }
        }
    }
}

/// Resolves `root` to an absolute directory path. Errors name the absolute
/// form of `root`, with symlinks resolved when it exists.
pub fn resolve_root(root: &Path) -> Result<PathBuf, CheckError> {
    let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    let resolved = fs::canonicalize(&absolute)
        .map_err(|_| CheckError::InvalidRoot { path: absolute })?;
    if !resolved.is_dir() {
        return Err(CheckError::InvalidRoot { path: resolved });
    }
    Ok(resolved)
}

/// Lists every directory under `root` (inclusive) that holds a base file,
/// depth first in name order. Symlinks are not followed and unreadable
/// entries are skipped.
pub fn eligible_folders(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .filter(|dir| find_base_file(dir).is_some())
        .collect()
}
