use crate::error::RouterError;
use crate::route::{Handler, Route, RoutePattern, RouteType};
use std::slice::Iter;
use tracing::debug;

/// Ordered, append-only collection of routes.
///
/// Routes are tried in insertion order and the first match wins; an earlier, broader
/// route shadows later ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one route built from its parts.
    ///
    /// Fails when `route_type` disagrees with the pattern variant.
    pub fn add_route(
        &mut self,
        route_type: RouteType,
        pattern: impl Into<RoutePattern>,
        handler: Handler,
    ) -> Result<&mut Self, RouterError> {
        let route = Route::new(route_type, pattern, handler)?;
        Ok(self.push(route))
    }

    /// Appends an already built route.
    pub fn push(&mut self, route: Route) -> &mut Self {
        debug!(index = self.routes.len(), route_type = %route.route_type(), alias = route.alias(), "add route");
        self.routes.push(route);
        self
    }

    /// Appends every route in order.
    pub fn add_routes<I: IntoIterator<Item = Route>>(&mut self, routes: I) -> &mut Self {
        for route in routes {
            self.push(route);
        }
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    /// Finds the first route carrying `alias`.
    pub fn find_by_alias(&self, alias: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.alias() == Some(alias))
    }

    pub fn iter(&self) -> Iter<'_, Route> {
        self.routes.iter()
    }
}

impl FromIterator<Route> for RouteTable {
    fn from_iter<T: IntoIterator<Item = Route>>(iter: T) -> Self {
        let mut table = RouteTable::new();
        table.add_routes(iter);
        table
    }
}

impl Extend<Route> for RouteTable {
    fn extend<T: IntoIterator<Item = Route>>(&mut self, iter: T) {
        self.add_routes(iter);
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
