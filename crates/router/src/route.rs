//! Route definitions.
//!
//! A [`Route`] maps a [`RoutePattern`] to the [`Handler`] which should receive control
//! when the pattern matches. The pattern variant decides how the route is matched, see
//! [`RouteType`].

use crate::error::RouterError;
use crate::matcher;
use crate::params::Params;
use once_cell::sync::OnceCell;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    Static,
    Regex,
}

impl RouteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::Static => "static",
            RouteType::Regex => "regex",
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteType {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(RouteType::Static),
            "regex" => Ok(RouteType::Regex),
            other => Err(RouterError::unknown_route_type(other)),
        }
    }
}

/// A regex pattern together with the names of its capture groups.
///
/// `names[i]` names the capture group at ordinal position `i`; a missing or `None` entry
/// keeps the ordinal index as the parameter key. The regex must not carry anchors or
/// delimiters, they are supplied when the pattern is compiled. Compilation happens the
/// first time the pattern is matched and the result is kept for later dispatches.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    regex: String,
    names: Vec<Option<String>>,
    compiled: OnceCell<Regex>,
}

impl RegexPattern {
    pub fn new<R, I, N>(regex: R, names: I) -> Self
    where
        R: Into<String>,
        I: IntoIterator<Item = N>,
        N: Into<Option<String>>,
    {
        Self { regex: regex.into(), names: names.into_iter().map(Into::into).collect(), compiled: OnceCell::new() }
    }

    pub fn regex(&self) -> &str {
        &self.regex
    }

    pub fn names(&self) -> &[Option<String>] {
        &self.names
    }

    /// Name of the capture group at `index`, if one was configured.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).and_then(Option::as_deref)
    }

    /// Returns the anchored, case-insensitive regex, compiling it on first use.
    pub fn compiled(&self) -> Result<&Regex, RouterError> {
        self.compiled
            .get_or_try_init(|| matcher::compile_regex(&self.regex))
            .map_err(|e| RouterError::invalid_regex(&self.regex, e))
    }
}

impl PartialEq for RegexPattern {
    fn eq(&self, other: &Self) -> bool {
        self.regex == other.regex && self.names == other.names
    }
}

impl Eq for RegexPattern {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    Static(String),
    Regex(RegexPattern),
}

impl RoutePattern {
    pub fn route_type(&self) -> RouteType {
        match self {
            RoutePattern::Static(_) => RouteType::Static,
            RoutePattern::Regex(_) => RouteType::Regex,
        }
    }
}

impl From<&str> for RoutePattern {
    fn from(pattern: &str) -> Self {
        RoutePattern::Static(pattern.to_owned())
    }
}

impl From<String> for RoutePattern {
    fn from(pattern: String) -> Self {
        RoutePattern::Static(pattern)
    }
}

impl From<RegexPattern> for RoutePattern {
    fn from(pattern: RegexPattern) -> Self {
        RoutePattern::Regex(pattern)
    }
}

/// The (controller, action, params) triple identifying what should handle a request.
///
/// On a configured route `params` are the default params, which are never overridden by
/// parameters extracted from the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handler {
    pub controller: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Params::is_empty")]
    pub params: Params,
}

impl Handler {
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self { controller: controller.into(), action: action.into(), params: Params::new() }
    }

    pub fn with_params(mut self, params: impl Into<Params>) -> Self {
        self.params = params.into();
        self
    }

    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RouteRecord", into = "RouteRecord")]
pub struct Route {
    alias: Option<String>,
    pattern: RoutePattern,
    handler: Handler,
}

impl Route {
    /// Creates a route of the given `route_type`.
    ///
    /// Fails with [`RouterError::RouteTypeMismatch`] when the pattern is not of that type.
    pub fn new(route_type: RouteType, pattern: impl Into<RoutePattern>, handler: Handler) -> Result<Self, RouterError> {
        let pattern = pattern.into();
        if pattern.route_type() != route_type {
            return Err(RouterError::RouteTypeMismatch { expected: route_type, found: pattern.route_type() });
        }
        Ok(Self { alias: None, pattern, handler })
    }

    pub(crate) fn from_parts(alias: Option<String>, pattern: RoutePattern, handler: Handler) -> Self {
        Self { alias, pattern, handler }
    }

    pub fn static_route(pattern: impl Into<String>, handler: Handler) -> Self {
        Self { alias: None, pattern: RoutePattern::Static(pattern.into()), handler }
    }

    pub fn regex_route<R, I, N>(regex: R, names: I, handler: Handler) -> Self
    where
        R: Into<String>,
        I: IntoIterator<Item = N>,
        N: Into<Option<String>>,
    {
        Self { alias: None, pattern: RoutePattern::Regex(RegexPattern::new(regex, names)), handler }
    }

    /// Attaches alias metadata, aliases are never consulted while matching.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn route_type(&self) -> RouteType {
        self.pattern.route_type()
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }
}

/// Serialized shape of a route, the pattern shape follows the route type.
#[derive(Serialize, Deserialize)]
struct RouteRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alias: Option<String>,
    #[serde(rename = "type")]
    route_type: RouteType,
    pattern: PatternRecord,
    handler: Handler,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PatternRecord {
    Static(String),
    Regex {
        regex: String,
        #[serde(default)]
        params: Vec<Option<String>>,
    },
}

impl TryFrom<RouteRecord> for Route {
    type Error = RouterError;

    fn try_from(record: RouteRecord) -> Result<Self, Self::Error> {
        let pattern = match record.pattern {
            PatternRecord::Static(pattern) => RoutePattern::Static(pattern),
            PatternRecord::Regex { regex, params } => RoutePattern::Regex(RegexPattern::new(regex, params)),
        };
        let route = Route::new(record.route_type, pattern, record.handler)?;
        Ok(Self { alias: record.alias, ..route })
    }
}

impl From<Route> for RouteRecord {
    fn from(route: Route) -> Self {
        let route_type = route.route_type();
        let pattern = match route.pattern {
            RoutePattern::Static(pattern) => PatternRecord::Static(pattern),
            RoutePattern::Regex(pattern) => PatternRecord::Regex { regex: pattern.regex, params: pattern.names },
        };
        Self { alias: route.alias, route_type, pattern, handler: route.handler }
    }
}

#[cfg(test)]
mod tests {
    use super::{Handler, RegexPattern, Route, RoutePattern, RouteType};
    use crate::error::RouterError;
    use crate::params::Params;

    #[test]
    fn test_route_type_from_str() {
        assert_eq!("static".parse::<RouteType>().unwrap(), RouteType::Static);
        assert_eq!("regex".parse::<RouteType>().unwrap(), RouteType::Regex);
        assert!(matches!("wildcard".parse::<RouteType>(), Err(RouterError::UnknownRouteType(t)) if t == "wildcard"));
    }

    #[test]
    fn test_new_route_rejects_type_mismatch() {
        let result = Route::new(RouteType::Regex, "/about", Handler::new("pages", "show"));

        assert!(matches!(
            result,
            Err(RouterError::RouteTypeMismatch { expected: RouteType::Regex, found: RouteType::Static })
        ));
    }

    #[test]
    fn test_regex_pattern_names() {
        let pattern = RegexPattern::new("/users/(\\d+)/(\\w+)", [Some("id".to_string()), None]);

        assert_eq!(pattern.name(0), Some("id"));
        assert_eq!(pattern.name(1), None);
        assert_eq!(pattern.name(2), None);
    }

    #[test]
    fn test_invalid_regex_reports_on_compile() {
        let pattern = RegexPattern::new("/users/(\\d+", Vec::<Option<String>>::new());

        assert!(matches!(pattern.compiled(), Err(RouterError::InvalidRegex { regex, .. }) if regex == "/users/(\\d+"));
    }

    #[test]
    fn test_deserialize_static_route() {
        let json = r#"{
            "alias": "about",
            "type": "static",
            "pattern": "/about",
            "handler": {"controller": "pages", "action": "show"}
        }"#;
        let route: Route = serde_json::from_str(json).unwrap();

        assert_eq!(route.alias(), Some("about"));
        assert_eq!(route.pattern(), &RoutePattern::Static("/about".into()));
        assert_eq!(route.handler(), &Handler::new("pages", "show"));
    }

    #[test]
    fn test_deserialize_regex_route() {
        let json = r#"{
            "type": "regex",
            "pattern": {"regex": "/news/(\\d+)/(\\w+)", "params": ["id", null]},
            "handler": {"controller": "news", "action": "view", "params": {"lang": "en"}}
        }"#;
        let route: Route = serde_json::from_str(json).unwrap();

        let RoutePattern::Regex(pattern) = route.pattern() else { panic!("expected a regex pattern") };
        assert_eq!(pattern.regex(), "/news/(\\d+)/(\\w+)");
        assert_eq!(pattern.names(), &[Some("id".to_string()), None]);
        assert_eq!(route.handler().params(), &Params::from([("lang", "en")]));
    }

    #[test]
    fn test_deserialize_rejects_mismatched_pattern() {
        let json = r#"{"type": "regex", "pattern": "/about", "handler": {"controller": "a", "action": "b"}}"#;

        assert!(serde_json::from_str::<Route>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_type() {
        let json = r#"{"type": "prefix", "pattern": "/about", "handler": {"controller": "a", "action": "b"}}"#;

        assert!(serde_json::from_str::<Route>(json).is_err());
    }
}
