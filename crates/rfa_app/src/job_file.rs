//! RON job files: a saved set of form inputs for repeat submissions.
//!
//! ```ron
//! (
//!     job_name: Some("her2-binders"),
//!     mode: Some("Nanobody"),
//!     framework: Some("inputs/h-NbBCII10.pdb"),
//!     target: Some("inputs/her2.pdb"),
//!     hotspots: Some("T305, T456"),
//!     rf_diffusion_designs: Some(20),
//! )
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rfa_logging::rfa_info;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobFileError {
    #[error("failed to read job file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse job file {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Every field optional; command-line flags fill or override them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobFile {
    pub job_name: Option<String>,
    pub mode: Option<String>,
    pub framework: Option<PathBuf>,
    pub target: Option<PathBuf>,
    pub hotspots: Option<String>,
    pub design_loops: Option<String>,
    pub rf_diffusion_designs: Option<u64>,
    pub protein_mpnn_designs: Option<u64>,
}

/// Loads a job file; relative structure paths resolve against the file's directory.
pub fn load_job_file(path: &Path) -> Result<JobFile, JobFileError> {
    let content = fs::read_to_string(path).map_err(|source| JobFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut job: JobFile = ron::from_str(&content).map_err(|err| JobFileError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    job.framework = job.framework.map(|p| resolve(base, p));
    job.target = job.target.map(|p| resolve(base, p));

    rfa_info!("Loaded job file {:?}", path);
    Ok(job)
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_partial_job_and_resolves_paths() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("job.ron");
        fs::write(
            &path,
            r#"(
                mode: Some("Nanobody"),
                framework: Some("inputs/fw.pdb"),
                target: Some("/abs/target.pdb"),
                rf_diffusion_designs: Some(20),
            )"#,
        )
        .unwrap();

        let job = load_job_file(&path).unwrap();

        assert_eq!(job.mode.as_deref(), Some("Nanobody"));
        assert_eq!(job.framework, Some(temp.path().join("inputs/fw.pdb")));
        assert_eq!(job.target, Some(PathBuf::from("/abs/target.pdb")));
        assert_eq!(job.rf_diffusion_designs, Some(20));
        assert_eq!(job.hotspots, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("job.ron");
        fs::write(&path, "(hotspot: Some(\"A21\"))").unwrap();

        let err = load_job_file(&path).unwrap_err();

        assert!(matches!(err, JobFileError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();

        let err = load_job_file(&temp.path().join("nope.ron")).unwrap_err();

        assert!(matches!(err, JobFileError::Read { .. }));
    }
}
