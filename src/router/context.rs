use hashbrown::HashMap;
use serde::Serialize;

use crate::method::HttpMethod;
use crate::pattern::CaptureList;

/// Parameter name → captured path segment text. Values are the raw captured
/// bytes; URL decoding is left to the caller.
pub type RouteParams = HashMap<String, String>;

/// The per-request view handed to a handler: path, method, and the parameter
/// mapping built from the matched pattern's captures.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub path: String,
    pub method: HttpMethod,
    pub params: RouteParams,
}

impl RequestContext {
    pub(crate) fn new(path: &str, method: HttpMethod, params: RouteParams) -> Self {
        Self {
            path: path.to_string(),
            method,
            params,
        }
    }

    /// Captured value for a declared parameter name, if the matched pattern
    /// declared one.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Zips ordered parameter names with their captures, resolving each capture
/// range against the request path. Insertion is positional, so when a name
/// repeats within one pattern the later capture wins.
pub(crate) fn captures_to_params(path: &str, names: &[String], captures: &CaptureList) -> RouteParams {
    let mut params = RouteParams::with_capacity(captures.len());
    for (name, &(start, len)) in names.iter().zip(captures.iter()) {
        params.insert(name.clone(), path[start..start + len].to_string());
    }
    params
}

/// What a handler produces: status, content type, body. The host glue
/// renders it onto the wire; the router itself never touches headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Response {
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: Vec::new(),
        }
    }

    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: "text/plain; charset=utf-8",
            body: body.into().into_bytes(),
        }
    }

    /// Serializes `value` as a JSON body. Serialization failure degrades to
    /// an empty 500 rather than surfacing through dispatch, which has no
    /// error channel for handler output.
    pub fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self {
                status: 200,
                content_type: "application/json",
                body,
            },
            Err(_) => Self::empty(500),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}
