//! Reading, transforming and persisting a single document.
//!
//! The document is read once, threaded through the ruleset as one owned
//! buffer, and written once. The write goes through a temporary file in the
//! destination directory that is renamed over the destination, so a failed
//! write leaves the destination exactly as it was.

use serde::Serialize;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    config::RewriteConfig,
    error::{InternalResult, RewriteError},
    rule::{RuleOutcome, Ruleset},
};

/// Summary of one rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Always the ruleset length: every rule runs.
    pub rules_applied: usize,
    pub outcomes: Vec<RuleOutcome>,
    /// False for previews.
    pub written: bool,
}

impl RewriteResult {
    pub fn total_replacements(&self) -> usize {
        self.outcomes.iter().map(|o| o.replacements).sum()
    }

    /// Rules that found nothing to replace. Not an error.
    pub fn unmatched(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| o.replacements == 0)
    }
}

/// Rewrite `source` in place.
pub fn rewrite<P: AsRef<Path>>(source: P, ruleset: &Ruleset) -> InternalResult<RewriteResult> {
    let source = source.as_ref();
    rewrite_to(source, source, ruleset)
}

/// Rewrite `source` into `destination`. The source is left untouched unless
/// both paths are the same.
#[tracing::instrument(skip(ruleset), fields(rules = ruleset.len()))]
pub fn rewrite_to(
    source: &Path,
    destination: &Path,
    ruleset: &Ruleset,
) -> InternalResult<RewriteResult> {
    let (output, mut result) = preview(source, destination, ruleset)?;
    write_atomically(destination, output.as_bytes())?;
    result.written = true;
    debug!(
        "Wrote {} replacements to {}",
        result.total_replacements(),
        destination.display()
    );
    Ok(result)
}

/// Read and transform `source` without writing anything.
pub fn preview(
    source: &Path,
    destination: &Path,
    ruleset: &Ruleset,
) -> InternalResult<(String, RewriteResult)> {
    let document = fs::read_to_string(source).map_err(|e| RewriteError::from_io(source, e))?;
    debug!("Read {} bytes from {}", document.len(), source.display());

    let (output, outcomes) = ruleset.apply(&document);
    for (index, outcome) in outcomes.iter().enumerate() {
        debug!(
            "rule {} {}: {} replacements",
            index + 1,
            outcome.rule,
            outcome.replacements
        );
    }

    Ok((
        output,
        RewriteResult {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            rules_applied: outcomes.len(),
            outcomes,
            written: false,
        },
    ))
}

/// Run the rewrite a config describes.
pub fn run(config: &RewriteConfig) -> InternalResult<RewriteResult> {
    let ruleset = config.ruleset()?;
    rewrite_to(&config.source_path, config.destination(), &ruleset)
}

fn write_atomically(path: &Path, data: &[u8]) -> InternalResult<()> {
    // Write through a symlink to the file it points at, not over the link.
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(RewriteError::from_io(path, e)),
    };
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // The rename would replace a read-only destination, so refuse it here.
    let existing = match fs::metadata(&target) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(RewriteError::from_io(path, e)),
    };
    if existing.as_ref().is_some_and(|p| p.readonly()) {
        return Err(RewriteError::PermissionDenied(format!(
            "{} is read-only",
            path.display()
        )));
    }

    let mut builder = tempfile::Builder::new();
    if let Some(permissions) = existing.clone().or_else(new_file_permissions) {
        builder.permissions(permissions);
    }
    let mut temp_file = builder
        .tempfile_in(dir)
        .map_err(|e| RewriteError::from_io(path, e))?;
    temp_file
        .write_all(data)
        .and_then(|_| temp_file.flush())
        .map_err(|e| RewriteError::from_io(path, e))?;
    if let Some(permissions) = existing {
        fs::set_permissions(temp_file.path(), permissions)
            .map_err(|e| RewriteError::from_io(path, e))?;
    }

    temp_file
        .persist(&target)
        .map_err(|e| RewriteError::from_io(path, e.error))?;
    Ok(())
}

/// Mode for a destination that does not exist yet, the same one `fs::write`
/// would give it (0o666 less the umask).
#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}
