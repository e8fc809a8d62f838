//! Path matchers for static and regex routes.
//!
//! Both matchers return `None` when the path does not match, and the params extracted
//! from the path otherwise.

use crate::URL_DELIMITER;
use crate::params::Params;
use crate::route::RegexPattern;
use regex::{Regex, RegexBuilder};

/// Matches `path` against a literal `pattern`.
///
/// A single trailing delimiter is stripped from both sides before an exact, case
/// sensitive comparison. Static routes never extract params.
pub fn match_static(path: &str, pattern: &str) -> Option<Params> {
    let path = path.strip_suffix(URL_DELIMITER).unwrap_or(path);
    let pattern = pattern.strip_suffix(URL_DELIMITER).unwrap_or(pattern);

    (path == pattern).then(Params::new)
}

/// Matches `path` against a compiled regex route.
///
/// Every capture group yields one param. The key is the configured name of the group, or
/// its 0-based ordinal when it has none; groups which did not participate in the match keep
/// their slot with an empty value.
pub fn match_regex(path: &str, regex: &Regex, pattern: &RegexPattern) -> Option<Params> {
    let captures = regex.captures(path)?;

    let params = captures
        .iter()
        .skip(1)
        .enumerate()
        .map(|(index, group)| {
            let key = pattern.name(index).map_or_else(|| index.to_string(), str::to_owned);
            let value = group.map_or("", |m| m.as_str());
            (key, value)
        })
        .collect();

    Some(params)
}

/// Compiles a route regex: anchored at both ends, tolerating one trailing delimiter and
/// matching case-insensitively.
pub fn compile_regex(regex: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!("^(?:{regex})(?:{URL_DELIMITER})?$")).case_insensitive(true).build()
}
