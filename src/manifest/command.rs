//! A complete merge run: load, merge, write.

use std::path::PathBuf;

use tracing::debug;

use super::error::{MergeError, Result, MIN_ARGUMENTS};
use super::loader::{load_sources, load_target, write_manifest};
use crate::merge::{MergeOptions, MergeReport, Merger};

/// MergeCommand merges source manifest files into a target file.
#[derive(Debug, Clone)]
pub struct MergeCommand {
    pub sources: Vec<PathBuf>,
    pub target: PathBuf,
    /// Start from an empty manifest when the target does not exist.
    pub create_new: bool,
    pub options: MergeOptions,
}

impl MergeCommand {
    /// Builds a command from positional paths; the last path is the target.
    pub fn from_paths(
        mut paths: Vec<PathBuf>,
        create_new: bool,
        options: MergeOptions,
    ) -> Result<Self> {
        if paths.len() < MIN_ARGUMENTS {
            return Err(MergeError::missing_arguments(paths.len()));
        }
        let target = paths.pop().ok_or_else(|| MergeError::missing_arguments(0))?;
        Ok(MergeCommand {
            sources: paths,
            target,
            create_new,
            options,
        })
    }

    /// Runs the merge. The target file is written only after every input has
    /// been read and the merge has completed.
    pub fn run(&self) -> Result<MergeReport> {
        let target = load_target(&self.target, self.create_new)?;
        let sources = load_sources(&self.sources)?;
        debug!(
            sources = sources.len(),
            target = %self.target.display(),
            "loaded manifests"
        );

        let outcome = Merger::new(self.options.clone()).merge(&sources, target);
        for entry in outcome.report.iter() {
            debug!("{}", entry);
        }

        write_manifest(&self.target, &outcome.manifest)?;
        Ok(outcome.report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_from_paths_splits_target() {
        let cmd = MergeCommand::from_paths(
            paths(&["a.json", "b.json", "out.json"]),
            false,
            MergeOptions::default(),
        )
        .unwrap();
        assert_eq!(cmd.sources, paths(&["a.json", "b.json"]));
        assert_eq!(cmd.target, PathBuf::from("out.json"));
    }

    #[test]
    fn test_from_paths_requires_three() {
        let err = MergeCommand::from_paths(paths(&["a.json", "out.json"]), true, MergeOptions::default())
            .unwrap_err();
        assert!(matches!(err, MergeError::MissingArguments { given: 2 }));
    }
}
