//! Method-aware façade over a single [`RadixTree`].

use std::fmt;

use crate::error::{MatchError, RouteError};
use crate::partials::key::CompositeKey;
use crate::pattern::{validate_method, validate_path};
use crate::tree::{Match, RadixTree};

/// Routes `(method, path)` pairs to handlers of type `H`.
///
/// Registration composes `METHOD /path` into a single tree key, so methods sharing a
/// prefix (`POST`, `PUT`, `PATCH`) share tree structure too. Build the router fully, then
/// share it by reference: dispatch is read-only and allocation-free for routes with up
/// to four parameters.
///
/// ```rust
/// use radix_router::Router;
///
/// let mut router = Router::new();
/// router.get("/pet/:petId", "get_pet").unwrap();
/// router.get("/pet/findByStatus", "find_by_status").unwrap();
///
/// let m = router.dispatch("GET", "/pet/42").unwrap();
/// assert_eq!(*m.handler, "get_pet");
/// assert_eq!(m.params.get("petId"), Some("42"));
///
/// let m = router.dispatch("GET", "/pet/findByStatus").unwrap();
/// assert_eq!(*m.handler, "find_by_status");
///
/// assert!(router.dispatch("DELETE", "/pet/42").is_err());
/// ```
#[derive(Clone)]
pub struct Router<H> {
    tree: RadixTree<H>,
    methods: Vec<Box<str>>,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Router<H> {
    pub fn new() -> Self {
        Self {
            tree: RadixTree::new(),
            methods: Vec::new(),
        }
    }

    /// Registers `handler` for `method` requests to `path`.
    ///
    /// `path` must start with `/`; components of the form `:name` bind whatever the
    /// request carries in that position.
    pub fn route(&mut self, method: &str, path: &str, handler: H) -> Result<(), RouteError> {
        let key = CompositeKey::new(method, path).to_key_string();
        validate_method(method).map_err(|d| RouteError::malformed(&key, d))?;
        validate_path(path).map_err(|d| RouteError::malformed(&key, d))?;

        self.tree.insert(&key, handler)?;
        if !self.methods.iter().any(|m| &**m == method) {
            self.methods.push(method.into());
        }
        tracing::debug!(method, path, "registered route");
        Ok(())
    }

    pub fn get(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.route("GET", path, handler)
    }

    pub fn post(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.route("POST", path, handler)
    }

    pub fn put(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.route("PUT", path, handler)
    }

    pub fn patch(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.route("PATCH", path, handler)
    }

    pub fn delete(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.route("DELETE", path, handler)
    }

    pub fn head(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.route("HEAD", path, handler)
    }

    pub fn options(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.route("OPTIONS", path, handler)
    }

    /// Finds the handler for `method` and an already-decoded `path` (no query string).
    ///
    /// A miss is `Err(MatchError::NotFound)`, an ordinary outcome for the caller to turn
    /// into a "not found" response.
    pub fn dispatch<'r, 'p>(
        &'r self,
        method: &'p str,
        path: &'p str,
    ) -> Result<Match<'r, 'p, H>, MatchError> {
        // A method with a space in it could reach into the path half of the key space.
        if method.as_bytes().contains(&b' ') {
            return Err(MatchError::NotFound);
        }
        let found = self.tree.find(CompositeKey::new(method, path));
        if found.is_err() {
            tracing::trace!(method, path, "no route matched");
        }
        found
    }

    /// The registered methods under which `path` would be dispatched, in registration
    /// order. Empty when the path matches nothing at all.
    pub fn allowed_methods(&self, path: &str) -> Vec<&str> {
        self.methods
            .iter()
            .map(|m| &**m)
            .filter(|m| self.tree.find(CompositeKey::new(m, path)).is_ok())
            .collect()
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The underlying tree, for inspection.
    pub fn tree(&self) -> &RadixTree<H> {
        &self.tree
    }
}

impl<H> fmt::Debug for Router<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.tree.len())
            .field("methods", &self.methods)
            .finish()
    }
}
