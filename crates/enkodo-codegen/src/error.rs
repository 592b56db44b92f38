use std::{
    io,
    path::{
        Path,
        PathBuf,
    },
};

use thiserror::Error;

/// Failures of one generation unit. Unresolvable field types are not errors; they are reported as
/// [`crate::parse::field_descriptor::SkippedField`]s on the generated record instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The unit could not be turned into record descriptors.
    #[error("{}:{line}:{column}: {message}", .path.display())]
    Extraction {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output writer could not persist a generated artifact.
    #[error("failed to write {}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn extraction(path: &Path, err: syn::Error) -> Self {
        let start = err.span().start();
        Self::Extraction {
            path: path.to_path_buf(),
            line: start.line,
            column: start.column + 1,
            message: err.to_string(),
        }
    }
}
