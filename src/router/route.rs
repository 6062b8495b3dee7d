use std::sync::Arc;

use hashbrown::HashMap;

use crate::method::HttpMethod;
use crate::pattern::CompiledPattern;

use super::context::{RequestContext, Response};

/// A registered handler. Stored behind `Arc` so dispatch can clone it out of
/// the table and invoke it after releasing the lock.
pub type Handler = Arc<dyn Fn(&RequestContext) -> Response + Send + Sync>;

/// One registered route: the raw pattern (its unique key), the compiled
/// matcher, and the per-method handler map. Created on the first
/// registration of a pattern and augmented by later registrations; never
/// removed.
pub struct Route {
    pub(crate) pattern: String,
    pub(crate) compiled: CompiledPattern,
    pub(crate) handlers: HashMap<HttpMethod, Handler>,
}

impl Route {
    pub(crate) fn new(pattern: &str, compiled: CompiledPattern) -> Self {
        Self {
            pattern: pattern.to_string(),
            compiled,
            handlers: HashMap::new(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn allows(&self, method: HttpMethod) -> bool {
        self.handlers.contains_key(&method)
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut methods: Vec<&'static str> =
            self.handlers.keys().map(HttpMethod::as_str).collect();
        methods.sort_unstable();
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("methods", &methods)
            .finish()
    }
}

/// Insertion-ordered route storage: the `Vec` is the arena whose order fixes
/// match precedence, the map indexes it by raw pattern string so repeat
/// registrations augment instead of duplicating.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    index: HashMap<Box<str>, usize>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the route stored for `pattern`, if any.
    pub fn position(&self, pattern: &str) -> Option<usize> {
        self.index.get(pattern).copied()
    }

    /// Inserts a new route at the end of the precedence order. The caller
    /// checks `position` first; a pattern is never stored twice.
    pub fn insert(&mut self, route: Route) -> usize {
        let position = self.routes.len();
        self.index
            .insert(route.pattern.clone().into_boxed_str(), position);
        self.routes.push(route);
        position
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Route> {
        self.routes.get_mut(position)
    }

    /// Routes in registration order, the order dispatch tests them in.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
