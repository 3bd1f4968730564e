//! Error types for route registration and dispatch.

use thiserror::Error;

/// Why a route pattern was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternDefect {
    /// Nothing to register.
    #[error("pattern is empty")]
    EmptyPattern,

    /// The path does not start with `/`.
    #[error("path must begin with '/'")]
    MissingLeadingSeparator,

    /// A `:` opened a parameter with no name after it.
    #[error("parameter name is empty")]
    EmptyParameterName,

    /// A parameter name holds something other than ASCII alphanumerics and `_`.
    #[error("parameter names may only contain ASCII letters, digits and '_'")]
    InvalidParameterName,

    /// The same parameter name appears twice in one route.
    #[error("parameter name is used more than once")]
    DuplicateParameterName,

    /// The method is empty or is not an HTTP token.
    #[error("method must be a non-empty HTTP token")]
    InvalidMethod,
}

/// Registration failures. All of them are fatal at build time: the route table has to
/// be fixed before it is served.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The exact same method and pattern were registered before.
    #[error("route `{route}` is already registered")]
    DuplicateRoute { route: String },

    /// Two routes place differently named parameters at the same position.
    #[error("parameter `:{attempted}` in `{route}` conflicts with existing parameter `:{existing}`")]
    ParameterConflict {
        route: String,
        existing: String,
        attempted: String,
    },

    /// The pattern does not follow the `/literal/:param` syntax.
    #[error("malformed route pattern `{pattern}`: {defect}")]
    MalformedPattern {
        pattern: String,
        defect: PatternDefect,
    },
}

impl RouteError {
    /// Both duplicate routes and parameter collisions are registration conflicts.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            RouteError::DuplicateRoute { .. } | RouteError::ParameterConflict { .. }
        )
    }

    pub(crate) fn malformed(pattern: &str, defect: PatternDefect) -> Self {
        RouteError::MalformedPattern {
            pattern: pattern.to_string(),
            defect,
        }
    }
}

/// Dispatch outcome when no handler matches.
///
/// This is an ordinary result, mapped by the caller to a "not found" response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("no route matches the request")]
    NotFound,
}
