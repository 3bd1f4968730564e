//! Publishing a router to concurrent readers, with rebuild-and-swap updates.
//!
//! A [`Router`] is never mutated while it is being read. To change routes at runtime,
//! writers clone the published router, apply their registrations to the copy and swap
//! it in atomically; readers holding the previous snapshot keep using it undisturbed.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use crate::error::RouteError;
use crate::router::Router;

pub struct SharedRouter<H> {
    current: ArcSwap<Router<H>>,
    // Serializes writers so no update is lost between clone and swap.
    write_lock: Mutex<()>,
}

impl<H> SharedRouter<H> {
    pub fn new(router: Router<H>) -> Self {
        Self {
            current: ArcSwap::from_pointee(router),
            write_lock: Mutex::new(()),
        }
    }

    /// The router as currently published. Lock-free.
    pub fn load(&self) -> Arc<Router<H>> {
        self.current.load_full()
    }

    /// Publishes `router`, returning the one it replaces.
    pub fn replace(&self, router: Router<H>) -> Arc<Router<H>> {
        let _guard = self.write_lock.lock();
        let old = self.current.swap(Arc::new(router));
        tracing::debug!(routes = old.len(), "replaced published router");
        old
    }
}

impl<H: Clone> SharedRouter<H> {
    /// Applies `f` to a copy of the published router and publishes the result.
    ///
    /// If `f` fails, nothing is published and readers keep the current router.
    pub fn update<F>(&self, f: F) -> Result<(), RouteError>
    where
        F: FnOnce(&mut Router<H>) -> Result<(), RouteError>,
    {
        let _guard = self.write_lock.lock();
        let mut next = Router::clone(&self.current.load());
        f(&mut next)?;
        tracing::debug!(routes = next.len(), "publishing updated router");
        self.current.store(Arc::new(next));
        Ok(())
    }
}

impl<H> From<Router<H>> for SharedRouter<H> {
    fn from(router: Router<H>) -> Self {
        Self::new(router)
    }
}
