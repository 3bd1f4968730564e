//! A request router built on a compressed prefix (radix) tree.
//!
//! Routes are registered once as `(method, "/literal/:param")` pairs and then dispatched
//! in time proportional to the length of the request path, independent of how many
//! routes exist. Parameters are captured without copying the path.
//!
//! ```rust
//! use radix_router::{MatchError, Router};
//!
//! let mut router = Router::new();
//! router.post("/pet", 1).unwrap();
//! router.put("/pet/:petId", 2).unwrap();
//!
//! let m = router.dispatch("PUT", "/pet/55").unwrap();
//! assert_eq!(*m.handler, 2);
//! assert_eq!(m.params.get("petId"), Some("55"));
//!
//! assert_eq!(router.dispatch("GET", "/pet").unwrap_err(), MatchError::NotFound);
//! ```

mod mapping;
mod node;
mod utils;

pub mod error;
#[cfg(feature = "manifest")]
pub mod manifest;
pub mod params;
pub mod partials;
pub mod pattern;
pub mod router;
#[cfg(feature = "shared")]
pub mod shared;
pub mod tree;

pub use crate::error::{MatchError, PatternDefect, RouteError};
#[cfg(feature = "manifest")]
pub use crate::manifest::{ManifestError, RouteManifest};
pub use crate::params::Params;
pub use crate::partials::key::{CompositeKey, RouteKey};
pub use crate::router::Router;
#[cfg(feature = "shared")]
pub use crate::shared::SharedRouter;
pub use crate::tree::{Match, RadixTree, TreeStats};
