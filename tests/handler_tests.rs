use apigw_bridge::core::models::LambdaResponse;
use apigw_bridge::{AdapterError, Environ, Responder, ResponseSink, handle_event, lambda_handler};
use lambda_runtime::{Context, LambdaEvent};
use serde_json::json;
use std::io::Read;

/// End-to-end tests running small applications through the Lambda handler.

fn greeter(environ: &mut Environ, responder: &mut Responder) -> Vec<Vec<u8>> {
    let mut body = String::new();
    let _ = environ.input.read_to_string(&mut body);

    responder
        .start_response(
            "200 OK",
            vec![("Content-Type".to_string(), "text/plain".to_string())],
            None,
        )
        .append(b"hello ");

    vec![format!("{} {} {}", environ.request_method, environ.path_info, body).into_bytes()]
}

#[test]
fn test_handle_event_round_trip() {
    let event = json!({
        "httpMethod": "PUT",
        "path": "/api/items/7",
        "headers": { "Content-Type": "text/plain" },
        "body": "payload"
    });

    let response = handle_event(&greeter, &event, Context::default(), "/api").unwrap();

    assert_eq!(
        response,
        LambdaResponse {
            status_code: "200".to_string(),
            headers: [("Content-Type".to_string(), "text/plain".to_string())].into(),
            body: "hello PUT /items/7 payload".to_string(),
        }
    );
}

#[test]
fn test_handle_event_rejects_incomplete_event() {
    let event = json!({ "path": "/" });
    let result = handle_event(&greeter, &event, Context::default(), "/");

    assert!(matches!(result, Err(AdapterError::InvalidEvent(_))));
}

#[test]
fn test_closure_application_can_read_headers() {
    let app = |environ: &mut Environ, responder: &mut Responder| {
        responder.start_response("200 OK", vec![], None);
        vec![environ.get("HTTP_X_CUSTOM").unwrap_or("none").to_string()]
    };
    let event = json!({
        "httpMethod": "GET",
        "path": "/",
        "headers": { "X-Custom": "value1" }
    });

    let response = handle_event(&app, &event, Context::default(), "/").unwrap();
    assert_eq!(response.body, "value1");
}

#[test]
fn test_application_that_never_starts_gets_default_status() {
    let app = |_environ: &mut Environ, _responder: &mut Responder| vec![b"orphan".to_vec()];
    let event = json!({ "httpMethod": "GET", "path": "/" });

    let response = handle_event(&app, &event, Context::default(), "/").unwrap();
    assert_eq!(response.status_code, "500");
    assert_eq!(response.body, "orphan");
}

#[tokio::test]
async fn test_lambda_handler_serves_events() {
    let handler = lambda_handler(greeter, "/");
    let event = LambdaEvent::new(
        json!({ "httpMethod": "GET", "path": "/health" }),
        Context::default(),
    );

    let response = handler(event).await.unwrap();
    assert_eq!(response.status_code, "200");
    assert_eq!(response.body, "hello GET /health ");
}

#[tokio::test]
async fn test_lambda_handler_propagates_decode_errors() {
    let app = |_environ: &mut Environ, responder: &mut Responder| {
        responder.start_response("200 OK", vec![], None);
        vec![vec![0xff_u8]]
    };
    let handler = lambda_handler(app, "/");
    let event = LambdaEvent::new(json!({ "httpMethod": "GET", "path": "/" }), Context::default());

    let err = handler(event).await.unwrap_err();
    assert!(err.to_string().contains("UTF-8"), "Unexpected error: {err}");
}
