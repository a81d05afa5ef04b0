pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;
pub mod shared;
pub mod store;
pub mod suggest;

pub use config::Config;
pub use proxy::{
    ExecuteRequest, ExecutionFailure, ExecutionResult, HttpExecutor, Outcome, RequestExecutor,
    RequestSpec,
};
pub use routes::{app, AppState};
