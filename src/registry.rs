//! Route registry with specificity-ordered collections
//!
//! Routes live in three independent collections - static, parametric,
//! wildcard - chosen at registration time from the template shape. Within a
//! collection, a stable insertion sort keeps the most specific templates
//! first: more parametric segments sort ahead, then more static segments.
//! Ties preserve registration order. The collections are never re-sorted
//! after insertion, so iteration order is the match priority.
//!
//! This lets `/users/:id/edit` be tried before `/users/:id` regardless of
//! which was registered first.

use crate::params::RouteParams;
use crate::route::{Route, RouteKind};

/// Result of looking a pathname up in the registry.
///
/// Identifies the matched route by collection and position so the lookup can
/// be replayed (or cached) without cloning the route itself.
#[derive(Debug, Clone)]
pub struct ResolvedRoute {
    /// Collection the matched route lives in
    pub kind: RouteKind,
    /// Position within that collection
    pub index: usize,
    /// Parameters extracted from the pathname
    pub params: RouteParams,
}

/// Holds the three priority-ordered route collections.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    static_routes: Vec<Route>,
    parametric_routes: Vec<Route>,
    wildcard_routes: Vec<Route>,
}

impl RouteRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route into the collection its template classifies into,
    /// preserving the specificity order.
    pub fn insert(&mut self, route: Route) {
        let collection = match route.kind() {
            RouteKind::Static => &mut self.static_routes,
            RouteKind::Parametric => &mut self.parametric_routes,
            RouteKind::Wildcard => &mut self.wildcard_routes,
        };

        Self::inject(collection, route);
    }

    /// Insert before the first element that is less specific than the
    /// incoming route; append when no such element exists. Equal specificity
    /// lands after existing entries, keeping registration order.
    fn inject(collection: &mut Vec<Route>, route: Route) {
        let position = collection.iter().position(|r| {
            r.parametric_segments() < route.parametric_segments()
                || (r.parametric_segments() == route.parametric_segments()
                    && r.static_segments() < route.static_segments())
        });

        match position {
            Some(index) => collection.insert(index, route),
            None => collection.push(route),
        }
    }

    /// Resolve a pathname to the highest-priority matching route.
    ///
    /// Collections are scanned in a fixed order: static, then parametric,
    /// then wildcard. Static routes match by byte-equality of the template
    /// against the pathname; the other two run their compiled matchers.
    pub fn find(&self, pathname: &str) -> Option<ResolvedRoute> {
        for (index, route) in self.static_routes.iter().enumerate() {
            if route.template() == pathname {
                return Some(ResolvedRoute {
                    kind: RouteKind::Static,
                    index,
                    params: RouteParams::new(),
                });
            }
        }

        Self::find_dynamic(RouteKind::Parametric, &self.parametric_routes, pathname)
            .or_else(|| Self::find_dynamic(RouteKind::Wildcard, &self.wildcard_routes, pathname))
    }

    fn find_dynamic(
        kind: RouteKind,
        collection: &[Route],
        pathname: &str,
    ) -> Option<ResolvedRoute> {
        for (index, route) in collection.iter().enumerate() {
            if let Some(captures) = route.pattern().match_path(pathname) {
                let params = RouteParams::from_captures(route.pattern().keys(), captures);
                return Some(ResolvedRoute {
                    kind,
                    index,
                    params,
                });
            }
        }

        None
    }

    /// Get a route by collection and position, as reported by [`find`](Self::find).
    pub fn get(&self, kind: RouteKind, index: usize) -> Option<&Route> {
        let collection = match kind {
            RouteKind::Static => &self.static_routes,
            RouteKind::Parametric => &self.parametric_routes,
            RouteKind::Wildcard => &self.wildcard_routes,
        };

        collection.get(index)
    }

    /// Total number of registered routes
    pub fn len(&self) -> usize {
        self.static_routes.len() + self.parametric_routes.len() + self.wildcard_routes.len()
    }

    /// Check if no routes are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    fn templates(&self, kind: RouteKind) -> Vec<&str> {
        let collection = match kind {
            RouteKind::Static => &self.static_routes,
            RouteKind::Parametric => &self.parametric_routes,
            RouteKind::Wildcard => &self.wildcard_routes,
        };

        collection.iter().map(Route::template).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(templates: &[&str]) -> RouteRegistry {
        let mut registry = RouteRegistry::new();
        for template in templates {
            registry.insert(Route::new(*template, |_, _| {}));
        }
        registry
    }

    #[test]
    fn test_classification_into_collections() {
        let registry = registry(&["/about", "/users/:id", "/files/*"]);

        assert_eq!(registry.templates(RouteKind::Static), ["/about"]);
        assert_eq!(registry.templates(RouteKind::Parametric), ["/users/:id"]);
        assert_eq!(registry.templates(RouteKind::Wildcard), ["/files/*"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_more_static_segments_sort_first() {
        // Registration order must not matter.
        let forward = registry(&["/a/:x", "/a/:x/b"]);
        let reverse = registry(&["/a/:x/b", "/a/:x"]);

        assert_eq!(
            forward.templates(RouteKind::Parametric),
            ["/a/:x/b", "/a/:x"]
        );
        assert_eq!(
            reverse.templates(RouteKind::Parametric),
            ["/a/:x/b", "/a/:x"]
        );
    }

    #[test]
    fn test_equal_specificity_keeps_registration_order() {
        let registry = registry(&["/a/:x", "/b/:y", "/c/:z"]);

        assert_eq!(
            registry.templates(RouteKind::Parametric),
            ["/a/:x", "/b/:y", "/c/:z"]
        );
    }

    #[test]
    fn test_wildcard_collection_ordering() {
        let registry = registry(&["/*", "/files/*"]);

        // /files/* has more static segments, so it is tried first.
        assert_eq!(
            registry.templates(RouteKind::Wildcard),
            ["/files/*", "/*"]
        );
    }

    #[test]
    fn test_find_static_by_byte_equality() {
        let registry = registry(&["/users", "/about"]);

        let resolved = registry.find("/about").unwrap();
        assert_eq!(resolved.kind, RouteKind::Static);
        assert!(resolved.params.is_empty());
        assert_eq!(
            registry.get(resolved.kind, resolved.index).unwrap().template(),
            "/about"
        );
    }

    #[test]
    fn test_find_falls_through_non_matching_tiers() {
        let registry = registry(&["/a/:x", "/a/:x/:y"]);

        // Whatever the scan order, only /a/:x/:y can match a two-segment
        // tail; /a/:x must fall through without firing.
        let resolved = registry.find("/a/1/2").unwrap();
        let route = registry.get(resolved.kind, resolved.index).unwrap();
        assert_eq!(route.template(), "/a/:x/:y");
        assert_eq!(resolved.params.get("x"), Some(&"1".to_string()));
        assert_eq!(resolved.params.get("y"), Some(&"2".to_string()));

        let resolved = registry.find("/a/1").unwrap();
        let route = registry.get(resolved.kind, resolved.index).unwrap();
        assert_eq!(route.template(), "/a/:x");
    }

    #[test]
    fn test_find_prefers_static_over_parametric() {
        let registry = registry(&["/users/:id", "/users/new"]);

        let resolved = registry.find("/users/new").unwrap();
        assert_eq!(resolved.kind, RouteKind::Static);

        let resolved = registry.find("/users/42").unwrap();
        assert_eq!(resolved.kind, RouteKind::Parametric);
        assert_eq!(resolved.params.get("id"), Some(&"42".to_string()));
    }

    #[test]
    fn test_find_wildcard_last() {
        let registry = registry(&["/files/*", "/files/readme"]);

        assert_eq!(registry.find("/files/readme").unwrap().kind, RouteKind::Static);

        let resolved = registry.find("/files/a/b/c").unwrap();
        assert_eq!(resolved.kind, RouteKind::Wildcard);
        assert_eq!(resolved.params.get("*"), Some(&"a/b/c".to_string()));
    }

    #[test]
    fn test_find_no_match() {
        let registry = registry(&["/users"]);
        assert!(registry.find("/missing").is_none());
    }
}
