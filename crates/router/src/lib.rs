//! A request router for MVC applications.
//!
//! The router keeps an ordered table of routes, matches a request path against them and
//! returns the [`Handler`] (controller, action and params) which should receive control.
//! When no route matches, the path is resolved by the default convention
//! `/controller/action/params...`.

mod error;
mod matcher;
mod params;
mod request;
mod route;
mod table;

pub mod compact;
pub mod config;
pub mod router;

pub use compact::CompactRoute;
pub use config::RouterConfig;
pub use error::ExpandError;
pub use error::RouterError;
pub use matcher::{match_regex, match_static};
pub use params::Params;
pub use request::RequestPath;
pub use route::{Handler, RegexPattern, Route, RoutePattern, RouteType};
pub use router::Router;
pub use router::RouterBuilder;
pub use table::RouteTable;

/// Delimiter of path segments.
pub const URL_DELIMITER: char = '/';

/// Controller the empty path resolves to.
pub const DEFAULT_CONTROLLER: &str = "index";

/// Action the empty path resolves to.
pub const DEFAULT_ACTION: &str = "index";
