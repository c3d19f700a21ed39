//! The router: registration, resolution, and navigation lifecycle
//!
//! A [`Router`] owns the route registry, an optional fallback handler, the
//! navigation adapter it is bound to, and at most one active subscription to
//! that adapter's change notifications.
//!
//! All work runs synchronously on the caller's turn. The registry is mutated
//! only by registration, which is assumed to happen during setup; resolution
//! never mutates it.

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, ResolveCache};
use crate::history::{ChangeListener, NavigationAdapter, SubscriptionId};
use crate::params::{QueryParams, RouteParams};
use crate::registry::{ResolvedRoute, RouteRegistry};
use crate::route::{FallbackHandler, Route};
use crate::{debug_log, trace_log, ResolveResult};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Matching state shared between the router and its change listener.
struct RouterCore {
    registry: RouteRegistry,
    fallback: Option<FallbackHandler>,
    #[cfg(feature = "cache")]
    cache: RefCell<ResolveCache>,
}

impl RouterCore {
    fn new() -> Self {
        Self {
            registry: RouteRegistry::new(),
            fallback: None,
            #[cfg(feature = "cache")]
            cache: RefCell::new(ResolveCache::new()),
        }
    }

    /// Resolve a path and fire at most one handler.
    fn resolve(&self, path: &str) -> ResolveResult {
        let (pathname, raw_query) = path.split_once('?').unwrap_or((path, ""));
        let query = QueryParams::from_query_string(raw_query);

        trace_log!("Resolving path: {}", pathname);

        #[cfg(feature = "cache")]
        {
            let hit = self.cache.borrow_mut().lookup(pathname);
            if let Some(resolved) = hit {
                if let Some(result) = self.dispatch(&resolved, &query) {
                    return result;
                }
            }
        }

        if let Some(resolved) = self.registry.find(pathname) {
            #[cfg(feature = "cache")]
            self.cache.borrow_mut().store(pathname, resolved.clone());

            if let Some(result) = self.dispatch(&resolved, &query) {
                return result;
            }
        }

        if let Some(fallback) = &self.fallback {
            debug_log!("No route matched {}, invoking fallback", pathname);
            fallback();
            ResolveResult::Fallback {
                path: pathname.to_string(),
            }
        } else {
            debug_log!("No route matched {} and no fallback registered", pathname);
            ResolveResult::Unmatched {
                path: pathname.to_string(),
            }
        }
    }

    /// Invoke the handler a lookup pointed at. Cache borrows are released
    /// before this runs, so a handler may re-enter `resolve`.
    fn dispatch(&self, resolved: &ResolvedRoute, query: &QueryParams) -> Option<ResolveResult> {
        let route = self.registry.get(resolved.kind, resolved.index)?;
        route.invoke(&resolved.params, query);

        Some(ResolveResult::Matched {
            template: route.template().to_string(),
        })
    }
}

/// Client-side path router bound to a navigation source.
///
/// # Example
///
/// ```
/// use flow_router::{MemoryNavigation, Router};
///
/// let mut router = Router::new(MemoryNavigation::new("/"));
///
/// router.add("/users/:id", |params, query| {
///     let id = params.get("id").cloned().unwrap_or_default();
///     let tab = query.get("tab").cloned().unwrap_or_default();
///     println!("user {id}, tab {tab:?}");
/// });
/// router.set_fallback(|| println!("not found"));
///
/// router.init();
/// router.navigate("/users/42?tab=posts", false);
/// router.deinit();
/// ```
pub struct Router<A: NavigationAdapter> {
    adapter: A,
    core: Rc<RefCell<RouterCore>>,
    subscription: Option<SubscriptionId>,
}

impl<A: NavigationAdapter> Router<A> {
    /// Create a router bound to the given navigation adapter.
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            core: Rc::new(RefCell::new(RouterCore::new())),
            subscription: None,
        }
    }

    /// Register a route template with its handler.
    ///
    /// Never fails; a `*` segment that is not last logs a warning and keeps
    /// greedy wildcard semantics. Routes registered after [`init`](Self::init)
    /// are visible to the next resolution - nothing is cached across
    /// registrations.
    pub fn add<F>(&mut self, template: impl Into<String>, handler: F)
    where
        F: Fn(&RouteParams, &QueryParams) + Send + Sync + 'static,
    {
        let route = Route::new(template, handler);
        debug_log!("Registered route: {}", route.template());

        let mut core = self.core.borrow_mut();
        #[cfg(feature = "cache")]
        core.cache.get_mut().clear();
        core.registry.insert(route);
    }

    /// Set the handler invoked when no route matches.
    ///
    /// Without a fallback, an unmatched resolution is a silent no-op - that
    /// is documented behavior, not an error.
    pub fn set_fallback<F>(&mut self, handler: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.core.borrow_mut().fallback = Some(Arc::new(handler));
    }

    /// Subscribe to the adapter's change notifications and resolve the
    /// current location, so a freshly initialized router reflects whatever
    /// URL the session started with.
    ///
    /// Calling `init` twice without an intervening [`deinit`](Self::deinit)
    /// replaces the previous subscription; handlers never fire twice per
    /// notification.
    pub fn init(&mut self) {
        if self.subscription.is_some() {
            debug_log!("init called while already subscribed, replacing subscription");
            self.deinit();
        }

        let weak = Rc::downgrade(&self.core);
        let listener: ChangeListener = Rc::new(move |path: &str| {
            if let Some(core) = weak.upgrade() {
                core.borrow().resolve(path);
            }
        });

        self.subscription = Some(self.adapter.subscribe(listener));

        let current = self.adapter.current_path();
        self.core.borrow().resolve(&current);
    }

    /// Unsubscribe from change notifications. Idempotent.
    pub fn deinit(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.adapter.unsubscribe(id);
        }
    }

    /// Whether an `init` subscription is currently active.
    pub fn is_initialized(&self) -> bool {
        self.subscription.is_some()
    }

    /// Push (default) or replace the current history entry, then resolve the
    /// path synchronously. Programmatic navigation does not wait for the
    /// adapter's change notification.
    pub fn navigate(&mut self, path: &str, replace: bool) -> ResolveResult {
        if replace {
            self.adapter.replace(path);
        } else {
            self.adapter.push(path);
        }

        self.core.borrow().resolve(path)
    }

    /// Navigate by pushing a new history entry.
    pub fn push(&mut self, path: &str) -> ResolveResult {
        self.navigate(path, false)
    }

    /// Navigate by replacing the current history entry.
    pub fn replace(&mut self, path: &str) -> ResolveResult {
        self.navigate(path, true)
    }

    /// Resolve a path against the registered routes, firing at most one
    /// handler (or the fallback). Usable without any subscription, e.g. for
    /// testing. Does not touch history.
    pub fn resolve(&self, path: &str) -> ResolveResult {
        self.core.borrow().resolve(path)
    }

    /// Current location reported by the adapter.
    pub fn current_path(&self) -> String {
        self.adapter.current_path()
    }

    /// Shared access to the navigation adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Exclusive access to the navigation adapter, e.g. to drive simulated
    /// back/forward traversal.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Number of registered routes.
    pub fn route_count(&self) -> usize {
        self.core.borrow().registry.len()
    }

    /// Resolve cache statistics.
    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> CacheStats {
        self.core.borrow().cache.borrow().stats()
    }
}
