//! AI remediation suggestions for failed requests.
//!
//! The suggestion service is a collaborator: it is only consulted for
//! responses with an error status, and its own failures are reported
//! separately from the response they were asked about.

pub mod gemini;
pub mod prompt;
pub mod types;

pub use gemini::{GeminiClient, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use prompt::build_prompt;
pub use types::*;

use std::future::Future;
use std::pin::Pin;

/// Trait for services that turn a failed request into a suggestion.
pub trait SuggestionService: Send + Sync {
    fn suggest<'a>(
        &'a self,
        request: &'a SuggestionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, SuggestionError>> + Send + 'a>>;
}
