//! Compact route definitions.
//!
//! A compact route is a flat list whose last element is the route type; the elements in
//! front of it are positional and their meaning depends on that type:
//!
//! ```text
//! static: [pattern, controller, action, (params)?, alias, "static"]
//! regex:  [regex, capture names, controller, action, (params)?, alias, "regex"]
//! ```
//!
//! # Example
//!
//! ```
//! use micro_router::compact::expand;
//! use micro_router::{RouteType, compact_route};
//!
//! let routes = expand(vec![compact_route!["/about", "pages", "show", "about", RouteType::Static]]).unwrap();
//! assert_eq!(routes[0].handler().controller(), "pages");
//! ```

use crate::error::ExpandError;
use crate::params::Params;
use crate::route::{Handler, RegexPattern, Route, RoutePattern, RouteType};
use serde::{Deserialize, Serialize};
use std::vec::IntoIter;
use tracing::debug;

/// One element of a compact route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompactElement {
    Text(String),
    Names(Vec<Option<String>>),
    Params(Params),
    // a serialized tag is indistinguishable from text, it is parsed when expanding
    #[serde(skip_deserializing)]
    Type(RouteType),
}

impl CompactElement {
    fn kind(&self) -> &'static str {
        match self {
            CompactElement::Text(_) => "text",
            CompactElement::Names(_) => "capture names",
            CompactElement::Params(_) => "params",
            CompactElement::Type(_) => "route type",
        }
    }
}

impl From<&str> for CompactElement {
    fn from(text: &str) -> Self {
        CompactElement::Text(text.to_owned())
    }
}

impl From<String> for CompactElement {
    fn from(text: String) -> Self {
        CompactElement::Text(text)
    }
}

impl From<Vec<Option<String>>> for CompactElement {
    fn from(names: Vec<Option<String>>) -> Self {
        CompactElement::Names(names)
    }
}

impl From<Vec<&str>> for CompactElement {
    fn from(names: Vec<&str>) -> Self {
        CompactElement::Names(names.into_iter().map(|name| Some(name.to_owned())).collect())
    }
}

impl From<Params> for CompactElement {
    fn from(params: Params) -> Self {
        CompactElement::Params(params)
    }
}

impl From<RouteType> for CompactElement {
    fn from(route_type: RouteType) -> Self {
        CompactElement::Type(route_type)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompactRoute {
    elements: Vec<CompactElement>,
}

impl CompactRoute {
    pub fn new(elements: Vec<CompactElement>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[CompactElement] {
        &self.elements
    }
}

impl From<Vec<CompactElement>> for CompactRoute {
    fn from(elements: Vec<CompactElement>) -> Self {
        Self::new(elements)
    }
}

/// Builds a [`CompactRoute`], every element is converted with `Into<CompactElement>`.
#[macro_export]
macro_rules! compact_route {
    ($($element:expr),* $(,)?) => {
        $crate::compact::CompactRoute::new(vec![$($crate::compact::CompactElement::from($element)),*])
    };
}

/// Expands compact routes into routes, preserving their order.
///
/// Either every route expands or an error naming the first malformed route is returned,
/// so a bad definition never reaches a route table partially.
pub fn expand<I>(compact_routes: I) -> Result<Vec<Route>, ExpandError>
where
    I: IntoIterator<Item = CompactRoute>,
{
    let routes = compact_routes
        .into_iter()
        .enumerate()
        .map(|(index, compact_route)| expand_route(index, compact_route))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = routes.len(), "expanded compact routes");
    Ok(routes)
}

/// Expands a single compact route, `index` is only used for error reporting.
pub fn expand_route(index: usize, compact_route: CompactRoute) -> Result<Route, ExpandError> {
    let mut elements = compact_route.elements;

    let route_type = match elements.pop() {
        None => return Err(ExpandError::MissingRouteType { index }),
        Some(CompactElement::Type(route_type)) => route_type,
        Some(CompactElement::Text(tag)) => match tag.parse::<RouteType>() {
            Ok(route_type) => route_type,
            Err(_) => return Err(ExpandError::UnknownRouteType { index, tag }),
        },
        Some(other) => return Err(unexpected_element(index, "a route type", &other)),
    };

    let mut fields = Fields { index, elements: elements.into_iter() };

    let pattern = match route_type {
        RouteType::Static => RoutePattern::Static(fields.text("pattern")?),
        RouteType::Regex => {
            let regex = fields.text("regex")?;
            let names = fields.names()?;
            RoutePattern::Regex(RegexPattern::new(regex, names))
        }
    };

    let controller = fields.text("controller")?;
    let action = fields.text("action")?;

    // params sit in front of the alias, so they exist only when two elements are left
    let params = if fields.remaining() > 1 { fields.params()? } else { Params::new() };
    let alias = fields.optional_text("alias")?;

    if fields.remaining() > 0 {
        return Err(ExpandError::TrailingElements { index });
    }

    let handler = Handler::new(controller, action).with_params(params);
    Ok(Route::from_parts(alias, pattern, handler))
}

fn unexpected_element(index: usize, expected: &'static str, found: &CompactElement) -> ExpandError {
    debug!(index, expected, found = found.kind(), "unexpected compact route element");
    ExpandError::unexpected_element(index, expected)
}

/// Cursor over the positional elements of a compact route, front to back.
struct Fields {
    index: usize,
    elements: IntoIter<CompactElement>,
}

impl Fields {
    fn remaining(&self) -> usize {
        self.elements.len()
    }

    fn text(&mut self, field: &'static str) -> Result<String, ExpandError> {
        self.optional_text(field)?.ok_or_else(|| ExpandError::missing_field(self.index, field))
    }

    fn optional_text(&mut self, field: &'static str) -> Result<Option<String>, ExpandError> {
        match self.elements.next() {
            None => Ok(None),
            Some(CompactElement::Text(text)) => Ok(Some(text)),
            Some(other) => Err(self.unexpected(field, &other)),
        }
    }

    fn names(&mut self) -> Result<Vec<Option<String>>, ExpandError> {
        match self.elements.next() {
            None => Err(ExpandError::missing_field(self.index, "capture names")),
            Some(CompactElement::Names(names)) => Ok(names),
            // an empty JSON object and an empty name list both mean "no names"
            Some(CompactElement::Params(params)) if params.is_empty() => Ok(Vec::new()),
            Some(other) => Err(self.unexpected("capture names", &other)),
        }
    }

    fn params(&mut self) -> Result<Params, ExpandError> {
        match self.elements.next() {
            None => Err(ExpandError::missing_field(self.index, "params")),
            Some(CompactElement::Params(params)) => Ok(params),
            Some(other) => Err(self.unexpected("params", &other)),
        }
    }

    fn unexpected(&self, expected: &'static str, found: &CompactElement) -> ExpandError {
        unexpected_element(self.index, expected, found)
    }
}
