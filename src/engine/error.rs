use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabmeterError {
    #[error("Could not write report to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Nothing analyzed yet")]
    NoAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_export_error_names_path() {
        let err = VocabmeterError::Export {
            path: PathBuf::from("/out/report.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/out/report.html"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_no_analysis_message() {
        assert_eq!(VocabmeterError::NoAnalysis.to_string(), "Nothing analyzed yet");
    }
}
