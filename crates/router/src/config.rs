//! Router configuration.
//!
//! Routes arrive as in-memory structures from whatever loads the application
//! configuration. [`RouterConfig`] is their serde model, routes may be given in canonical
//! form, in compact form, or both:
//!
//! ```json
//! {
//!     "routes": [
//!         {"alias": "about", "type": "static", "pattern": "/about",
//!          "handler": {"controller": "pages", "action": "show"}}
//!     ],
//!     "compact": [
//!         ["/news/(\\d+)", ["id"], "news", "view", "news", "regex"]
//!     ]
//! }
//! ```

use crate::compact::{self, CompactRoute};
use crate::error::{ExpandError, RouterError};
use crate::route::Route;
use serde::{Deserialize, Serialize};
use std::io::Read;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub compact: Vec<CompactRoute>,
}

impl RouterConfig {
    pub fn from_json(json: &str) -> Result<Self, RouterError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RouterError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// All routes in table order: canonical routes, then the expanded compact routes.
    pub fn into_routes(self) -> Result<Vec<Route>, ExpandError> {
        let mut routes = self.routes;
        routes.extend(compact::expand(self.compact)?);
        Ok(routes)
    }
}
