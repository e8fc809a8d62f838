//! Request dispatching.
//!
//! [`Router::dispatch`] normalizes the request path, tries every route of the table in
//! insertion order and returns the handler of the first route that matches. When none
//! matches, the default convention route `/controller/action/params...` is applied.
//!
//! # Example
//!
//! ```
//! use micro_router::{Handler, Router};
//!
//! let router = Router::builder()
//!     .static_route("/about", Handler::new("pages", "show"))
//!     .regex_route("/news/(\\d+)", [Some("id".to_string())], Handler::new("news", "view"))
//!     .build();
//!
//! let handler = router.dispatch("/app/news/42", "/app").unwrap();
//! assert_eq!(handler.controller(), "news");
//! assert_eq!(handler.params().get("id"), Some("42"));
//! ```

use crate::compact::{self, CompactRoute};
use crate::config::RouterConfig;
use crate::error::{ExpandError, RouterError};
use crate::matcher::{match_regex, match_static};
use crate::params::Params;
use crate::request::RequestPath;
use crate::route::{Handler, Route, RoutePattern};
use crate::table::RouteTable;
use crate::{DEFAULT_ACTION, DEFAULT_CONTROLLER, URL_DELIMITER};
use tracing::{debug, error, trace};

/// Resolves request paths to handlers.
///
/// The router is immutable once built and can be shared by reference between threads.
#[derive(Debug, Clone, Default)]
pub struct Router {
    table: RouteTable,
}

impl Router {
    /// Creates a new router builder with an empty route table
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Creates a router from an initial list of routes
    pub fn new<I: IntoIterator<Item = Route>>(routes: I) -> Self {
        Self { table: routes.into_iter().collect() }
    }

    pub fn from_table(table: RouteTable) -> Self {
        Self { table }
    }

    /// Builds a router from a loaded configuration.
    ///
    /// Canonical routes come first, followed by the expanded compact routes.
    pub fn from_config(config: RouterConfig) -> Result<Self, RouterError> {
        Ok(Self::new(config.into_routes()?))
    }

    pub fn routes(&self) -> &RouteTable {
        &self.table
    }

    /// Compiles every regex route up front.
    ///
    /// Dispatch compiles lazily anyway, this only lets configuration errors surface
    /// before the first request.
    pub fn validate(&self) -> Result<(), RouterError> {
        for route in &self.table {
            if let RoutePattern::Regex(pattern) = route.pattern() {
                pattern.compiled()?;
            }
        }
        Ok(())
    }

    /// Determines which handler should receive control for `request`.
    ///
    /// `base_path` is the mount point of the application, the number of characters it has
    /// is removed from the front of the lower-cased request path. The prefix itself is not
    /// compared. Returns `None` when no handler can be determined.
    pub fn dispatch<R>(&self, request: &R, base_path: &str) -> Option<Handler>
    where
        R: RequestPath + ?Sized,
    {
        let path = normalize_path(request.raw_path(), base_path);
        self.dispatch_path(&path)
    }

    /// Dispatches an already normalized path.
    ///
    /// A regex route whose pattern does not compile never matches, the error is logged and the
    /// next route is tried. Use [`Router::validate`] to reject such routes up front.
    pub fn dispatch_path(&self, path: &str) -> Option<Handler> {
        for (index, route) in self.table.iter().enumerate() {
            trace!(index, path, route_type = %route.route_type(), "try route");

            let Some(params) = match_route(path, route) else {
                continue;
            };

            let mut handler = route.handler().clone();
            handler.params.merge_absent(params);

            debug!(
                index,
                path,
                alias = route.alias(),
                controller = handler.controller(),
                action = handler.action(),
                "route matched"
            );
            return Some(handler);
        }

        let handler = default_route(path);
        debug!(path, matched = handler.is_some(), "no route matched, applied default route");
        handler
    }
}

/// Lower-cases the raw path and removes as many leading characters as `base_path` has.
///
/// A request without a path is the root path.
pub fn normalize_path(raw_path: Option<&str>, base_path: &str) -> String {
    let Some(raw_path) = raw_path else {
        return URL_DELIMITER.to_string();
    };

    let path = raw_path.to_ascii_lowercase();
    let base_len = base_path.chars().count();
    match path.char_indices().nth(base_len) {
        Some((offset, _)) => path[offset..].to_owned(),
        None => String::new(),
    }
}

fn match_route(path: &str, route: &Route) -> Option<Params> {
    match route.pattern() {
        RoutePattern::Static(pattern) => match_static(path, pattern),
        RoutePattern::Regex(pattern) => match pattern.compiled() {
            Ok(regex) => match_regex(path, regex, pattern),
            Err(e) => {
                error!(cause = %e, alias = route.alias(), "route regex error, skip route");
                None
            }
        },
    }
}

/// Derives the handler from the path segments: `/controller/action/params...`.
///
/// An empty path resolves to `index/index`. Returns `None` when the path has a single
/// segment, trailing segments are exposed as positional params.
pub fn default_route(path: &str) -> Option<Handler> {
    let path = path.trim_matches(URL_DELIMITER);

    let segments: Vec<&str> =
        if path.is_empty() { vec![DEFAULT_CONTROLLER, DEFAULT_ACTION] } else { path.split(URL_DELIMITER).collect() };
    let mut segments = segments.into_iter();

    let controller = segments.next()?;
    let action = segments.next()?;

    Some(Handler::new(controller, action).with_params(Params::positional(segments)))
}

#[derive(Debug)]
pub struct RouterBuilder {
    table: RouteTable,
}

impl RouterBuilder {
    fn new() -> Self {
        Self { table: RouteTable::new() }
    }

    pub fn route(mut self, route: Route) -> Self {
        self.table.push(route);
        self
    }

    pub fn static_route(self, pattern: impl Into<String>, handler: Handler) -> Self {
        self.route(Route::static_route(pattern, handler))
    }

    pub fn regex_route<R, I, N>(self, regex: R, names: I, handler: Handler) -> Self
    where
        R: Into<String>,
        I: IntoIterator<Item = N>,
        N: Into<Option<String>>,
    {
        self.route(Route::regex_route(regex, names, handler))
    }

    pub fn routes<I: IntoIterator<Item = Route>>(mut self, routes: I) -> Self {
        self.table.add_routes(routes);
        self
    }

    /// Expands and appends compact routes, nothing is appended if any of them is malformed.
    pub fn compact<I: IntoIterator<Item = CompactRoute>>(self, compact_routes: I) -> Result<Self, ExpandError> {
        Ok(self.routes(compact::expand(compact_routes)?))
    }

    /// Builds the router from the accumulated routes
    pub fn build(self) -> Router {
        Router::from_table(self.table)
    }
}
