mod config;
mod context;
mod error;
mod route;

pub use config::RouterConfig;
pub use context::{RequestContext, Response, RouteParams};
pub use error::DispatchError;
pub use route::{Handler, Route, RouteTable};

use std::sync::Arc;

use parking_lot::RwLock;

use crate::errors::RouterResult;
use crate::method::HttpMethod;
use crate::pattern::CompiledPattern;

use context::captures_to_params;

/// The request router: an insertion-ordered route table plus the dispatch
/// procedure that resolves one request to a handler invocation, a 404
/// outcome, or a 405 outcome.
///
/// The table sits behind a `parking_lot::RwLock`, so registration may
/// interleave with dispatch. The reference deployment still registers every
/// route at startup before serving begins; interleaved registration is
/// supported, not recommended.
pub struct Router {
    table: RwLock<RouteTable>,
    config: RouterConfig,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            table: RwLock::new(RouteTable::new()),
            config,
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Registers `handler` for `method` under `pattern`.
    ///
    /// The first registration of a pattern compiles it and appends a route,
    /// fixing its precedence position; later registrations of the same
    /// pattern string augment that route. For an exact (pattern, method)
    /// pair the last registration wins, silently.
    pub fn route<F>(&self, method: HttpMethod, pattern: &str, handler: F) -> RouterResult<()>
    where
        F: Fn(&RequestContext) -> Response + Send + Sync + 'static,
    {
        let mut table = self.table.write();

        let position = match table.position(pattern) {
            Some(position) => position,
            None => {
                let compiled = CompiledPattern::compile(pattern)?;
                table.insert(Route::new(pattern, compiled))
            }
        };

        // the slot exists for as long as the write lock is held
        if let Some(route) = table.get_mut(position) {
            route.handlers.insert(method, Arc::new(handler));
        }

        tracing::debug!(method = %method, pattern, "route registered");

        Ok(())
    }

    pub fn get<F>(&self, pattern: &str, handler: F) -> RouterResult<()>
    where
        F: Fn(&RequestContext) -> Response + Send + Sync + 'static,
    {
        self.route(HttpMethod::Get, pattern, handler)
    }

    pub fn post<F>(&self, pattern: &str, handler: F) -> RouterResult<()>
    where
        F: Fn(&RequestContext) -> Response + Send + Sync + 'static,
    {
        self.route(HttpMethod::Post, pattern, handler)
    }

    pub fn put<F>(&self, pattern: &str, handler: F) -> RouterResult<()>
    where
        F: Fn(&RequestContext) -> Response + Send + Sync + 'static,
    {
        self.route(HttpMethod::Put, pattern, handler)
    }

    pub fn patch<F>(&self, pattern: &str, handler: F) -> RouterResult<()>
    where
        F: Fn(&RequestContext) -> Response + Send + Sync + 'static,
    {
        self.route(HttpMethod::Patch, pattern, handler)
    }

    pub fn delete<F>(&self, pattern: &str, handler: F) -> RouterResult<()>
    where
        F: Fn(&RequestContext) -> Response + Send + Sync + 'static,
    {
        self.route(HttpMethod::Delete, pattern, handler)
    }

    /// Resolves one request and invokes the matched handler.
    ///
    /// Routes are tested in registration order and the first structural
    /// match wins; there is no backtracking to a later route, even one whose
    /// method map would have allowed the request. A miss is
    /// [`DispatchError::RouteNotFound`]; a match without the method is
    /// [`DispatchError::MethodNotAllowed`]. The handler runs outside the
    /// table lock, so a handler may itself register routes.
    #[tracing::instrument(level = "trace", skip(self), fields(method = %method, path = %path))]
    pub fn dispatch(&self, method: HttpMethod, path: &str) -> RouterResult<Response> {
        let (handler, ctx) = self.resolve(method, path)?;

        Ok(handler(&ctx))
    }

    fn resolve(
        &self,
        method: HttpMethod,
        path: &str,
    ) -> RouterResult<(Handler, RequestContext)> {
        let table = self.table.read();

        for route in table.iter() {
            let Some(captures) = route.compiled.match_path(path) else {
                continue;
            };

            let Some(handler) = route.handlers.get(&method) else {
                return Err(DispatchError::MethodNotAllowed {
                    path: path.to_string(),
                    method,
                }
                .into());
            };

            let params = captures_to_params(path, route.compiled.param_names(), &captures);

            return Ok((
                Arc::clone(handler),
                RequestContext::new(path, method, params),
            ));
        }

        Err(DispatchError::RouteNotFound {
            path: path.to_string(),
        }
        .into())
    }

    /// Number of distinct registered patterns.
    pub fn route_count(&self) -> usize {
        self.table.read().len()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.table.read().len())
            .field("config", &self.config)
            .finish()
    }
}
