//! A minimal Express-style HTTP request router.
//!
//! Routes are plain patterns of `/`-separated segments where a segment
//! starting with `:` captures the corresponding path segment by name:
//!
//! ```
//! use sluggish::{Response, Router};
//!
//! let router = Router::new();
//! router
//!     .get("/users/:id", |ctx| {
//!         Response::text(format!("user {}", ctx.param("id").unwrap_or("")))
//!     })
//!     .unwrap();
//!
//! let response = router.dispatch(sluggish::HttpMethod::Get, "/users/42").unwrap();
//! assert_eq!(response.body, b"user 42");
//! ```
//!
//! Matching is strict and positional: segment counts must agree (a trailing
//! slash is a real, empty segment), literals compare exactly, and precedence
//! is purely registration order — the first registered pattern that matches
//! wins, with no specificity ranking. A path that matches no pattern yields
//! [`DispatchError::RouteNotFound`]; a matched pattern without the request's
//! method yields [`DispatchError::MethodNotAllowed`]. These map to 404 and
//! 405 at the host layer.
//!
//! The route table is lock-guarded, so adding routes while serving is safe;
//! the intended deployment nevertheless registers everything at startup
//! before the first request, and interleaved registration should be the
//! exception. [`server::listen`] starts a hyper-backed HTTP/1 server that
//! feeds every request through [`Router::dispatch`].

pub mod errors;
mod method;
pub mod pattern;
pub mod router;
pub mod server;

pub use errors::{RouterError, RouterResult};
pub use method::HttpMethod;
pub use router::{
    DispatchError, Handler, RequestContext, Response, RouteParams, Router, RouterConfig,
};
