//! Route tables declared in TOML.
//!
//! ```toml
//! [[route]]
//! method = "GET"
//! path = "/pet/:petId"
//! handler = "get_pet_by_id"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::RouteError;
use crate::router::Router;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read route manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse route manifest: {0}")]
    Parse(#[from] toml::de::Error),

    /// The manifest names a handler the resolver does not know.
    #[error("route `{method} {path}` refers to unknown handler `{name}`")]
    UnknownHandler {
        method: String,
        path: String,
        name: String,
    },

    #[error(transparent)]
    Route(#[from] RouteError),
}

/// One `[[route]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    pub method: String,
    pub path: String,
    pub handler: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteManifest {
    #[serde(default, rename = "route")]
    pub routes: Vec<RouteEntry>,
}

impl RouteManifest {
    pub fn from_toml_str(s: &str) -> Result<Self, ManifestError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses the manifest at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let manifest = Self::from_toml_str(&content)?;
        tracing::info!(path = ?path, routes = manifest.routes.len(), "loaded route manifest");
        Ok(manifest)
    }
}

impl<H> Router<H> {
    /// Builds a router from `manifest`, turning handler names into handlers with
    /// `resolve`. Stops at the first entry that cannot be registered.
    pub fn from_manifest<F>(
        manifest: &RouteManifest,
        mut resolve: F,
    ) -> Result<Self, ManifestError>
    where
        F: FnMut(&str) -> Option<H>,
    {
        let mut router = Router::new();
        for entry in &manifest.routes {
            let handler =
                resolve(&entry.handler).ok_or_else(|| ManifestError::UnknownHandler {
                    method: entry.method.clone(),
                    path: entry.path.clone(),
                    name: entry.handler.clone(),
                })?;
            router.route(&entry.method.to_ascii_uppercase(), &entry.path, handler)?;
        }
        Ok(router)
    }
}
