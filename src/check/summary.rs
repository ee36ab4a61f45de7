//! Aggregated results of a check run.

use std::ops::AddAssign;

/// Summary counts what a run (or one folder of it) did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Folders that contained a base file.
    pub folders: usize,
    /// Profile files compared against their base.
    pub profiles: usize,
    /// Files that could not be read or parsed.
    pub load_errors: usize,
    /// Duplicate findings reported.
    pub duplicates: usize,
}

impl Summary {
    pub fn new() -> Self {
        Summary::default()
    }

    pub fn has_duplicates(&self) -> bool {
        self.duplicates > 0
    }

    /// Exit code for the run: 1 when any duplicate was found, else 0.
    /// Load errors alone do not fail the run.
    pub fn exit_code(&self) -> u8 {
        if self.has_duplicates() {
            1
        } else {
            0
        }
    }
}

impl AddAssign for Summary {
    fn add_assign(&mut self, other: Summary) {
        self.folders += other.folders;
        self.profiles += other.profiles;
        self.load_errors += other.load_errors;
        self.duplicates += other.duplicates;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code() {
        let mut summary = Summary::new();
        assert_eq!(summary.exit_code(), 0);

        summary.load_errors = 3;
        assert_eq!(summary.exit_code(), 0);

        summary += Summary {
            duplicates: 2,
            folders: 1,
            ..Summary::default()
        };
        assert_eq!(summary.exit_code(), 1);
        assert_eq!(summary.folders, 1);
        assert_eq!(summary.load_errors, 3);
    }
}
