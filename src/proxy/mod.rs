pub mod body;
pub mod executor;
pub mod headers;
pub mod outcome;
pub mod service;
pub mod types;

pub use body::resolve_body;
pub use executor::{collect_headers, prepare_spec, HttpExecutor, DEFAULT_TIMEOUT_MS};
pub use headers::normalize_headers;
pub use outcome::{decode_body, is_binary_content, normalize, Outcome, Reply, Settlement};
pub use service::{RequestExecutor, RequestExecutorExt};
pub use types::*;
