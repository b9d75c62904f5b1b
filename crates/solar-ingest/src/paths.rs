//! Resolution of measurement export locations.
//!
//! Exports live in a `data/` directory, either beside the installed
//! binary's parent directory or under the working directory. Resolution
//! walks an explicit ordered candidate list; the first directory holding
//! the file wins. Front-ends may prepend their own directories.

use std::path::PathBuf;

/// Ordered list of directories that may contain the cleaned exports.
#[derive(Debug, Clone)]
pub struct DataLocator {
    candidates: Vec<PathBuf>,
}

impl DataLocator {
    /// Locator over an explicit candidate list, highest priority first.
    #[must_use]
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Default candidates: `../data` relative to the running executable,
    /// then `data` under the current working directory.
    #[must_use]
    pub fn from_environment() -> Self {
        let mut candidates = Vec::new();
        if let Some(dir) = exe_relative_data_dir() {
            candidates.push(dir);
        }
        candidates.push(PathBuf::from("data"));
        Self { candidates }
    }

    /// Inserts a directory ahead of the existing candidates.
    #[must_use]
    pub fn with_priority_dir(mut self, dir: PathBuf) -> Self {
        self.candidates.insert(0, dir);
        self
    }

    /// Candidate directories in resolution order.
    pub fn candidate_dirs(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Full candidate paths for a filename, in resolution order.
    pub fn candidate_paths(&self, filename: &str) -> Vec<PathBuf> {
        self.candidates
            .iter()
            .map(|dir| dir.join(filename))
            .collect()
    }

    /// First existing path for the filename, if any candidate has it.
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        self.candidate_paths(filename)
            .into_iter()
            .find(|path| path.is_file())
    }
}

impl Default for DataLocator {
    fn default() -> Self {
        Self::from_environment()
    }
}

fn exe_relative_data_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join("..").join("data"))
}
