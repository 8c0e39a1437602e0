use std::fs;
use std::path::{Path, PathBuf};

use line_diff::{compute_unified_diff, DEFAULT_CONTEXT_LINES};
use log::{debug, info};

use crate::error::{BuildError, Result};
use crate::language::resolve_language;
use crate::template::{render_prompt, PromptRequest, ReviewObjectives};

/// Display name for the old side when it was not loaded from a file
pub const BEFORE_FALLBACK_NAME: &str = "Before.txt";

/// Display name for the new side when it was not loaded from a file
pub const AFTER_FALLBACK_NAME: &str = "After.txt";

/// Repository label used when none is given
pub const DEFAULT_REPOSITORY: &str = "Internal-LLM-Inspection/Prototype";

/// One side of the comparison: its text and, if loaded from disk, its path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInput {
    pub path: Option<PathBuf>,
    pub text: String,
}

impl DiffInput {
    /// Read a file as UTF-8 text
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded {} bytes from {:?}", text.len(), path);

        Ok(Self {
            path: Some(path.to_path_buf()),
            text,
        })
    }

    /// Wrap text that did not come from a file
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            path: None,
            text: text.into(),
        }
    }

    /// The final component of the path, if there is one
    pub fn file_name(&self) -> Option<&str> {
        self.path.as_deref()?.file_name()?.to_str()
    }

    /// The name shown in diff headers
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.file_name().unwrap_or(fallback)
    }
}

/// How a prompt is assembled
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Language to name, or `None`/`Auto` to detect it from file names
    pub language: Option<String>,
    pub repository: String,
    pub objectives: ReviewObjectives,
    pub context_lines: i64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            language: None,
            repository: DEFAULT_REPOSITORY.to_string(),
            objectives: ReviewObjectives::default(),
            context_lines: DEFAULT_CONTEXT_LINES as i64,
        }
    }
}

/// Unified diff of the two inputs, labelled with their display names
pub fn unified_diff(options: &BuildOptions, before: &DiffInput, after: &DiffInput) -> Result<String> {
    let diff = compute_unified_diff(
        before.display_name(BEFORE_FALLBACK_NAME),
        after.display_name(AFTER_FALLBACK_NAME),
        &before.text,
        &after.text,
        options.context_lines,
    )?;
    Ok(diff)
}

/// Diff the two inputs and wrap the result in the review prompt
pub fn build_prompt(options: &BuildOptions, before: &DiffInput, after: &DiffInput) -> Result<String> {
    let diff = unified_diff(options, before, after)?;
    let language = resolve_language(
        options.language.as_deref(),
        before.file_name(),
        after.file_name(),
    );
    info!(
        "Building {} review prompt for {} ({} diff bytes)",
        language,
        options.repository,
        diff.len()
    );

    Ok(render_prompt(&PromptRequest {
        language,
        repository: options.repository.clone(),
        diff,
        objectives: options.objectives,
    }))
}
