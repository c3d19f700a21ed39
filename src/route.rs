//! Route definition and template classification

use crate::params::{QueryParams, RouteParams};
use crate::pattern::PathPattern;
use crate::warn_log;
use std::sync::Arc;

/// Handler invoked when a route matches.
///
/// Receives the parameters extracted from the path (empty for static routes)
/// and a read-only accessor over the query string.
pub type RouteHandler = Arc<dyn Fn(&RouteParams, &QueryParams) + Send + Sync>;

/// Handler invoked when no registered route matches.
pub type FallbackHandler = Arc<dyn Fn() + Send + Sync>;

/// Which of the three priority collections a route belongs to.
///
/// Wildcard takes precedence over parametric, which takes precedence over
/// static: a template containing both `*` and `:name` segments is wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// Template with no parameter or wildcard segments
    Static,
    /// Template containing one or more `:name` segments
    Parametric,
    /// Template containing a `*` segment
    Wildcard,
}

/// A registered route. Immutable once created.
#[derive(Clone)]
pub struct Route {
    template: String,
    pattern: PathPattern,
    static_segments: usize,
    parametric_segments: usize,
    kind: RouteKind,
    handler: RouteHandler,
}

impl Route {
    /// Compile and classify a route template.
    ///
    /// Segment counts come from splitting the template on `/`: a `:`-prefixed
    /// segment is parametric, a `*` segment is the wildcard marker, everything
    /// else (including empty segments) is static. The counts feed priority
    /// ordering only, never matching.
    ///
    /// A `*` anywhere other than the final segment logs a warning but still
    /// compiles; the matcher treats it as a greedy wildcard.
    pub fn new<F>(template: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&RouteParams, &QueryParams) + Send + Sync + 'static,
    {
        let template = template.into();
        let pattern = PathPattern::compile(&template);

        let segments: Vec<&str> = template.split('/').collect();
        let last = segments.len() - 1;

        let mut static_segments = 0;
        let mut parametric_segments = 0;
        let mut is_wildcard = false;

        for (index, segment) in segments.iter().enumerate() {
            if *segment == "*" {
                if index != last {
                    warn_log!("Wildcard '*' should be the last segment: {}", template);
                }
                is_wildcard = true;
            } else if segment.starts_with(':') {
                parametric_segments += 1;
            } else {
                static_segments += 1;
            }
        }

        let kind = if is_wildcard {
            RouteKind::Wildcard
        } else if parametric_segments > 0 {
            RouteKind::Parametric
        } else {
            RouteKind::Static
        };

        Self {
            template,
            pattern,
            static_segments,
            parametric_segments,
            kind,
            handler: Arc::new(handler),
        }
    }

    /// The original template string, e.g. `/users/:id`.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The compiled matcher.
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// Number of static segments in the template.
    pub fn static_segments(&self) -> usize {
        self.static_segments
    }

    /// Number of parametric segments in the template.
    pub fn parametric_segments(&self) -> usize {
        self.parametric_segments
    }

    /// Collection this route belongs to.
    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    /// Whether the template contains a wildcard segment.
    pub fn is_wildcard(&self) -> bool {
        self.kind == RouteKind::Wildcard
    }

    /// Invoke this route's handler.
    pub fn invoke(&self, params: &RouteParams, query: &QueryParams) {
        (self.handler)(params, query);
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("template", &self.template)
            .field("kind", &self.kind)
            .field("static_segments", &self.static_segments)
            .field("parametric_segments", &self.parametric_segments)
            .finish_non_exhaustive()
    }
}
