// Echo application behind API Gateway: replies with the request environment
// it was handed, as JSON.

use apigw_bridge::core::config::AdapterConfig;
use apigw_bridge::{Environ, Responder, lambda_handler};
use lambda_runtime::{Error, run, service_fn};
use serde_json::json;

fn echo(environ: &mut Environ, responder: &mut Responder) -> Vec<Vec<u8>> {
    let body = String::from_utf8_lossy(environ.body_bytes()).into_owned();
    let payload = json!({
        "environ": environ.to_vars(),
        "body": body,
    });

    responder.start_response(
        "200 OK",
        vec![("Content-Type".to_string(), "application/json".to_string())],
        None,
    );
    vec![payload.to_string().into_bytes()]
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    apigw_bridge::setup_logging();

    let config = AdapterConfig::from_env()?;
    run(service_fn(lambda_handler(echo, config.path_prefix))).await
}
