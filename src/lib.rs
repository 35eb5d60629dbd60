//! Mock chat completion API.
//!
//! Answers `/chat/completions` with a canned reply and
//! `/chat/completions/streaming` with scripted SSE fragments on a timer.

pub mod app_state;
pub mod assembler;
pub mod env;
pub mod error;
pub mod middlewares;
pub mod routes;
pub mod server;
pub mod utils;

pub use app_state::AppState;
pub use env::Env;
pub use error::ApiError;
pub use routes::create_router;
pub use server::serve;
