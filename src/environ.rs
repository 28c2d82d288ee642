//! Request side of the bridge.
//!
//! Builds the synchronous application's request environment from an API
//! Gateway proxy event. Fixed keys are typed fields; every inbound header is
//! additionally exposed under its `HTTP_` key so applications can discover
//! arbitrary headers.

use indexmap::IndexMap;
use lambda_runtime::Context;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::{self, Cursor, Stderr};
use tracing::debug;

use crate::core::models::ApiGatewayEvent;
use crate::errors::AdapterError;
use crate::utils::query::encode_query;

pub const DEFAULT_REMOTE_ADDR: &str = "127.0.0.1";
pub const SERVER_PROTOCOL: &str = "HTTP/1.1";
pub const VERSION: (u8, u8) = (1, 0);

#[derive(Debug)]
pub struct Environ {
    pub script_name: String,
    pub request_method: String,
    pub path_info: String,
    pub query_string: String,
    pub remote_addr: String,
    pub content_type: Option<String>,
    /// Body length in bytes, empty when there is no body.
    pub content_length: String,
    pub http: String,
    pub server_name: Option<String>,
    pub server_port: Option<String>,
    pub server_protocol: String,
    pub url_scheme: Option<String>,
    pub version: (u8, u8),
    pub input: Cursor<Vec<u8>>,
    pub errors: Stderr,
    pub multithread: bool,
    pub multiprocess: bool,
    pub run_once: bool,
    /// Inbound headers keyed by normalized name (`X-Custom` -> `X_CUSTOM`).
    /// Event order is kept; a later spelling of the same name wins.
    pub headers: IndexMap<String, String>,
    /// The same headers keyed `HTTP_<NORMALIZED>`.
    pub http_headers: IndexMap<String, String>,
    /// Invocation context, passed through untouched.
    pub context: Context,
}

/// Uppercases a header name and swaps hyphens for underscores.
#[must_use]
pub fn normalize_header_name(name: &str) -> String {
    name.to_uppercase().replace('-', "_")
}

/// Replaces a literal `prefix` at the start of `path` with a single `/`.
///
/// Paths that do not start with the prefix come back unchanged.
///
/// # Examples
///
/// ```
/// use apigw_bridge::environ::strip_path_prefix;
///
/// assert_eq!(strip_path_prefix("/api/users", "/api"), "/users");
/// assert_eq!(strip_path_prefix("/other", "/api"), "/other");
/// assert_eq!(strip_path_prefix("/users", "/"), "/users");
/// assert_eq!(strip_path_prefix("//users", "/"), "//users");
/// ```
#[must_use]
pub fn strip_path_prefix(path: &str, prefix: &str) -> String {
    let Some(rest) = path.strip_prefix(prefix) else {
        return path.to_string();
    };
    // The remainder keeps its own slashes when the prefix consumed one.
    if !prefix.ends_with('/') && rest.starts_with('/') {
        rest.to_string()
    } else {
        format!("/{rest}")
    }
}

/// First hop of an `X-Forwarded-For` chain.
fn first_forwarded_addr(forwarded_for: &str) -> &str {
    forwarded_for
        .split_once(", ")
        .map_or(forwarded_for, |(first, _)| first)
}

impl Environ {
    /// Builds an environment from a raw event payload.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::InvalidEvent` when `httpMethod` or `path` is
    /// missing, or when the payload does not have the proxy event shape.
    pub fn from_payload(
        payload: &Value,
        context: Context,
        path_prefix: &str,
    ) -> Result<Self, AdapterError> {
        let event = ApiGatewayEvent::deserialize(payload)?;
        Ok(Self::from_event(&event, context, path_prefix))
    }

    #[must_use]
    pub fn from_event(event: &ApiGatewayEvent, context: Context, path_prefix: &str) -> Self {
        let body = event.body.clone().unwrap_or_default().into_bytes();

        let headers: IndexMap<String, String> = event
            .headers
            .iter()
            .flatten()
            .map(|(name, value)| (normalize_header_name(name), value.clone()))
            .collect();

        let remote_addr = headers
            .get("X_FORWARDED_FOR")
            .map_or(DEFAULT_REMOTE_ADDR, |v| first_forwarded_addr(v))
            .to_string();

        let path_info = strip_path_prefix(&event.path, path_prefix);

        let query_string = event
            .query_string_parameters
            .as_ref()
            .map(encode_query)
            .unwrap_or_default();

        let content_length = if body.is_empty() {
            String::new()
        } else {
            body.len().to_string()
        };

        let http_headers = headers
            .iter()
            .map(|(name, value)| (format!("HTTP_{name}"), value.clone()))
            .collect();

        debug!(
            method = %event.http_method,
            path = %event.path,
            path_info = %path_info,
            "Built request environment"
        );

        Self {
            script_name: String::new(),
            request_method: event.http_method.clone(),
            path_info,
            query_string,
            remote_addr,
            content_type: headers.get("CONTENT_TYPE").cloned(),
            content_length,
            http: "on".to_string(),
            server_name: headers.get("HOST").cloned(),
            server_port: headers.get("X_FORWARDED_PORT").cloned(),
            server_protocol: SERVER_PROTOCOL.to_string(),
            url_scheme: headers.get("X_FORWARDED_PROTO").cloned(),
            version: VERSION,
            input: Cursor::new(body),
            errors: io::stderr(),
            multithread: false,
            multiprocess: false,
            run_once: false,
            headers,
            http_headers,
            context,
        }
    }

    /// Looks up an inbound header by any spelling of its name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&normalize_header_name(name))
            .map(String::as_str)
    }

    /// Mapping view over the text-valued keys, including `HTTP_*` entries.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "SCRIPT_NAME" => Some(&self.script_name),
            "REQUEST_METHOD" => Some(&self.request_method),
            "PATH_INFO" => Some(&self.path_info),
            "QUERY_STRING" => Some(&self.query_string),
            "REMOTE_ADDR" => Some(&self.remote_addr),
            "CONTENT_TYPE" => self.content_type.as_ref(),
            "CONTENT_LENGTH" => Some(&self.content_length),
            "HTTP" => Some(&self.http),
            "SERVER_NAME" => self.server_name.as_ref(),
            "SERVER_PORT" => self.server_port.as_ref(),
            "SERVER_PROTOCOL" => Some(&self.server_protocol),
            "wsgi.url_scheme" => self.url_scheme.as_ref(),
            _ => self.http_headers.get(key),
        };
        value.map(String::as_str)
    }

    /// Every text-valued key that has a value, fixed keys and `HTTP_*` alike.
    #[must_use]
    pub fn to_vars(&self) -> BTreeMap<String, String> {
        const FIXED: [&str; 12] = [
            "SCRIPT_NAME",
            "REQUEST_METHOD",
            "PATH_INFO",
            "QUERY_STRING",
            "REMOTE_ADDR",
            "CONTENT_TYPE",
            "CONTENT_LENGTH",
            "HTTP",
            "SERVER_NAME",
            "SERVER_PORT",
            "SERVER_PROTOCOL",
            "wsgi.url_scheme",
        ];

        let mut vars: BTreeMap<String, String> = FIXED
            .iter()
            .filter_map(|key| self.get(key).map(|v| ((*key).to_string(), v.to_string())))
            .collect();
        vars.extend(self.http_headers.clone());
        vars
    }

    /// Full body backing `input`, regardless of the cursor position.
    #[must_use]
    pub fn body_bytes(&self) -> &[u8] {
        self.input.get_ref()
    }
}
