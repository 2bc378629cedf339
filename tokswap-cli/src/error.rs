use thiserror::Error;
use tokswap_core::RewriteError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Rewrite(#[from] RewriteError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Lint found {0} issue(s)")]
    LintFindings(usize),
}

pub type CliResult<T> = Result<T, CliError>;
