// Review prompt builder
// Wraps a unified diff of two files in a deterministic code review prompt

mod builder;
mod error;
mod language;
mod template;

pub use builder::{
    build_prompt, unified_diff, BuildOptions, DiffInput, AFTER_FALLBACK_NAME, BEFORE_FALLBACK_NAME,
    DEFAULT_REPOSITORY,
};
pub use error::{BuildError, Result};
pub use language::{guess_language, resolve_language, AUTO_LANGUAGE, GENERIC_LANGUAGE};
pub use template::{render_prompt, PromptRequest, ReviewObjectives};
