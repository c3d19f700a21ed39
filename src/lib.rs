//! # flow-router
//!
//! A client-side path router: maps a URL pathname to a registered handler,
//! extracting named and wildcard segments, and keeps the mapping synchronized
//! with a navigation history source.
//!
//! - **Pattern matching** - `:name` parameters and trailing `*` wildcards,
//!   compiled to anchored matchers
//! - **Specificity ordering** - three priority collections (static,
//!   parametric, wildcard); more specific templates win regardless of
//!   registration order
//! - **Query access** - handlers receive a read-only, multi-value query
//!   accessor alongside path parameters
//! - **History integration** - push/replace navigation plus a subscription
//!   to externally driven location changes
//! - **Fallback** - one handler for everything that matches nothing
//!
//! # Quick Start
//!
//! ```
//! use flow_router::{MemoryNavigation, Router};
//!
//! let mut router = Router::new(MemoryNavigation::new("/"));
//!
//! router.add("/", |_params, _query| println!("home"));
//! router.add("/users/:id", |params, _query| {
//!     println!("user {}", params.get("id").map_or("?", String::as_str));
//! });
//! router.add("/files/*", |params, _query| {
//!     println!("file {}", params.get("*").map_or("", String::as_str));
//! });
//! router.set_fallback(|| println!("not found"));
//!
//! // Begin observing navigation; resolves the current location immediately.
//! router.init();
//!
//! // Programmatic navigation resolves synchronously.
//! router.navigate("/users/42", false);
//!
//! router.deinit();
//! ```
//!
//! # Matching order
//!
//! A path is tried against the static collection first (byte-equality), then
//! parametric, then wildcard. Within a collection, templates with more
//! segments are tried first, so `/users/:id/edit` beats `/users/:id` for
//! `/users/42/edit` in either registration order. Exactly one handler fires
//! per resolution.
//!
//! # Feature Flags
//!
//! - `log` (default) - Uses the standard `log` crate for logging
//! - `tracing` - Uses the `tracing` crate for structured logging (mutually exclusive with `log`)
//! - `cache` (default) - LRU cache for repeated pathname resolution

#![cfg_attr(docsrs, feature(doc_cfg))]
// Lints are configured in Cargo.toml [lints] section

// Logging abstraction
pub mod logging;

// Cache (optional)
#[cfg(feature = "cache")]
pub mod cache;

// Core routing modules
pub mod history;
pub mod params;
pub mod pattern;
pub mod registry;
pub mod route;
pub mod router;

// Re-export main types for convenient access
#[cfg(feature = "cache")]
pub use cache::{CacheStats, ResolveCache};
pub use history::{
    ChangeListener, MemoryNavigation, NavigationAdapter, NavigationEvent, SubscriptionId,
};
pub use params::{QueryParams, RouteParams};
pub use pattern::PathPattern;
pub use registry::{ResolvedRoute, RouteRegistry};
pub use route::{FallbackHandler, Route, RouteHandler, RouteKind};
pub use router::Router;

/// Outcome of one resolution.
///
/// Informational, not an error: an unmatched path with no fallback is a
/// documented no-op.
///
/// # Example
///
/// ```
/// use flow_router::{MemoryNavigation, ResolveResult, Router};
///
/// let mut router = Router::new(MemoryNavigation::new("/"));
/// router.add("/users/:id", |_, _| {});
///
/// assert!(router.resolve("/users/7").is_matched());
/// assert_eq!(
///     router.resolve("/missing"),
///     ResolveResult::Unmatched { path: "/missing".to_string() },
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveResult {
    /// A registered route matched and its handler was invoked
    Matched {
        /// Template of the route that fired
        template: String,
    },
    /// No route matched; the fallback handler was invoked
    Fallback {
        /// The pathname that failed to match
        path: String,
    },
    /// No route matched and no fallback is registered; nothing was invoked
    Unmatched {
        /// The pathname that failed to match
        path: String,
    },
}

impl ResolveResult {
    /// Check if a route handler was invoked
    pub fn is_matched(&self) -> bool {
        matches!(self, ResolveResult::Matched { .. })
    }

    /// Check if the fallback handler was invoked
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolveResult::Fallback { .. })
    }

    /// Check if nothing was invoked
    pub fn is_unmatched(&self) -> bool {
        matches!(self, ResolveResult::Unmatched { .. })
    }
}

/// Navigation direction indicator.
///
/// Reported in [`NavigationEvent`]s from history traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    /// Navigating forward to a later entry
    Forward,
    /// Navigating back in history
    Back,
}
