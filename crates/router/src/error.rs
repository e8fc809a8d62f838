use crate::route::RouteType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("unknown route type \"{0}\"")]
    UnknownRouteType(String),

    #[error("route type {expected} does not match a {found} pattern")]
    RouteTypeMismatch { expected: RouteType, found: RouteType },

    #[error("invalid regex `{regex}`: {source}")]
    InvalidRegex {
        regex: String,
        #[source]
        source: regex::Error,
    },

    #[error("expand compact route error: {source}")]
    Expand {
        #[from]
        source: ExpandError,
    },

    #[error("router config error: {source}")]
    Config {
        #[from]
        source: serde_json::Error,
    },
}

impl RouterError {
    pub fn unknown_route_type<S: ToString>(str: S) -> Self {
        Self::UnknownRouteType(str.to_string())
    }

    pub fn invalid_regex<S: ToString>(regex: S, source: regex::Error) -> Self {
        Self::InvalidRegex { regex: regex.to_string(), source }
    }
}

/// Errors raised while expanding compact routes, `index` is the position of the
/// offending route in the input sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    #[error("compact route #{index} is empty, the route type is missing")]
    MissingRouteType { index: usize },

    #[error("compact route #{index} has unknown route type \"{tag}\"")]
    UnknownRouteType { index: usize, tag: String },

    #[error("compact route #{index} misses the {field}")]
    MissingField { index: usize, field: &'static str },

    #[error("compact route #{index} expects {expected} at this position")]
    UnexpectedElement { index: usize, expected: &'static str },

    #[error("compact route #{index} has elements after the alias")]
    TrailingElements { index: usize },
}

impl ExpandError {
    pub fn missing_field(index: usize, field: &'static str) -> Self {
        Self::MissingField { index, field }
    }

    pub fn unexpected_element(index: usize, expected: &'static str) -> Self {
        Self::UnexpectedElement { index, expected }
    }

    /// Returns the position of the compact route which failed to expand.
    pub fn index(&self) -> usize {
        match self {
            Self::MissingRouteType { index }
            | Self::UnknownRouteType { index, .. }
            | Self::MissingField { index, .. }
            | Self::UnexpectedElement { index, .. }
            | Self::TrailingElements { index } => *index,
        }
    }
}
