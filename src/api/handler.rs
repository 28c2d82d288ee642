//! Lambda entry point wrapping a synchronous application.
//!
//! Each invocation gets a fresh environment and responder; nothing is shared
//! between invocations.

use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;
use std::future::{Ready, ready};
use tracing::{error, info};

use crate::app::Application;
use crate::core::models::LambdaResponse;
use crate::environ::Environ;
use crate::errors::AdapterError;
use crate::response::Responder;

/// Translates one proxy event through `app` into a proxy response.
///
/// # Errors
///
/// Returns `AdapterError::InvalidEvent` when the event lacks `httpMethod` or
/// `path`, and `AdapterError::Decode` when the body is not valid UTF-8.
#[tracing::instrument(level = "info", skip(app, payload, context))]
pub fn handle_event<A: Application>(
    app: &A,
    payload: &Value,
    context: Context,
    path_prefix: &str,
) -> Result<LambdaResponse, AdapterError> {
    let mut responder = Responder::new();
    let mut environ = Environ::from_payload(payload, context, path_prefix)?;

    info!(
        method = %environ.request_method,
        path_info = %environ.path_info,
        request_id = %environ.context.request_id,
        "Dispatching request to application"
    );

    let body = app.call(&mut environ, &mut responder);
    let response = responder.build_lambda_response(body)?;

    info!(status = %response.status_code, "Application responded");
    Ok(response)
}

/// Wraps `app` into a handler for `lambda_runtime::service_fn`.
///
/// # Example
///
/// ```no_run
/// use apigw_bridge::{Environ, Responder, lambda_handler};
///
/// #[tokio::main]
/// async fn main() -> Result<(), lambda_runtime::Error> {
///     let app = |_env: &mut Environ, resp: &mut Responder| {
///         resp.start_response("200 OK", vec![], None);
///         vec![b"ok".to_vec()]
///     };
///     lambda_runtime::run(lambda_runtime::service_fn(lambda_handler(app, "/"))).await
/// }
/// ```
pub fn lambda_handler<A>(
    app: A,
    path_prefix: impl Into<String>,
) -> impl Fn(LambdaEvent<Value>) -> Ready<Result<LambdaResponse, Error>>
where
    A: Application,
{
    let path_prefix = path_prefix.into();
    move |event: LambdaEvent<Value>| {
        let result = handle_event(&app, &event.payload, event.context, &path_prefix)
            .map_err(|e| {
                error!("Failed to translate request: {}", e);
                Error::from(e)
            });
        ready(result)
    }
}
