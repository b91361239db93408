use std::path::PathBuf;

use thiserror::Error;

pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Input-boundary failures only. Anything that merely fails matching is
/// surfaced through [`crate::diagnostics::Diagnostic`] records instead and
/// never aborts a generation pass.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Failed to parse module '{module}': {source}")]
    ModuleParse {
        module: String,
        #[source]
        source: syn::Error,
    },

    #[error("Failed to read module source '{path}': {source}")]
    ModuleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Module path has no usable file stem: {0}")]
    ModuleName(PathBuf),
}
