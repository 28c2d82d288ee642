//! apigw-bridge - runs a synchronous HTTP application behind API Gateway.
//!
//! The crate translates between two contracts:
//! 1. API Gateway proxy events delivered to AWS Lambda, answered with a
//!    single `{statusCode, headers, body}` value
//! 2. A synchronous application that reads a request environment, starts
//!    a response through a callback, and returns its body as byte chunks
//!
//! # Architecture
//!
//! - [`environ`] builds the request environment from the event
//! - [`response`] collects status, headers and body and assembles the reply
//! - [`api`] wires both around an [`Application`] for `lambda_runtime`
//!
//! # Example
//!
//! ```no_run
//! use apigw_bridge::core::config::AdapterConfig;
//! use apigw_bridge::{Environ, Responder, lambda_handler};
//!
//! fn hello(env: &mut Environ, resp: &mut Responder) -> Vec<Vec<u8>> {
//!     resp.start_response(
//!         "200 OK",
//!         vec![("Content-Type".into(), "text/plain".into())],
//!         None,
//!     );
//!     vec![format!("hello from {}", env.path_info).into_bytes()]
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     apigw_bridge::setup_logging();
//!     let config = AdapterConfig::from_env()?;
//!     let handler = lambda_handler(hello, config.path_prefix);
//!     lambda_runtime::run(lambda_runtime::service_fn(handler)).await
//! }
//! ```

// Module declarations
pub mod api;
pub mod app;
pub mod core;
pub mod environ;
pub mod errors;
pub mod response;
pub mod utils;

pub use api::{handle_event, lambda_handler};
pub use app::Application;
pub use environ::Environ;
pub use errors::AdapterError;
pub use response::{BodyWriter, Responder, ResponseSink};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. Calling it again after a subscriber is installed does nothing.
///
/// # Example
///
/// ```
/// apigw_bridge::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
