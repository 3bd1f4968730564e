//! The compressed prefix tree behind the router.
//!
//! Keys are composed as `METHOD /path`. Static text is stored in path-compressed nodes
//! that split on demand; `:name` components live in a dedicated parameter child, one per
//! node, which captures a whole path component at match time.

use std::fmt;

use crate::error::{MatchError, PatternDefect, RouteError};
use crate::node::{Node, NodeType};
use crate::params::Params;
use crate::partials::key::{RouteKey, PATH_SEPARATOR};
use crate::pattern::{parse_pattern, Piece};

/// A successful lookup: the handler and the parameters bound along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'t, 'p, H> {
    pub handler: &'t H,
    pub params: Params<'t, 'p>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeStats {
    pub num_nodes: usize,
    pub num_static_nodes: usize,
    pub num_param_nodes: usize,
    pub num_handlers: usize,
    pub max_height: usize,
    pub max_fanout: usize,
}

/// Radix tree mapping route keys to handlers.
///
/// Built once, then read concurrently: `find` takes `&self` and never mutates, so a
/// finished tree can be shared across threads as long as `H` can.
#[derive(Clone)]
pub struct RadixTree<H> {
    root: Node<H>,
    len: usize,
}

impl<H> Default for RadixTree<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RadixTree<H> {
    pub fn new() -> Self {
        Self {
            root: Node::new_root(),
            len: 0,
        }
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Registers `key` (already composed, e.g. `GET /pet/:petId`) against `handler`.
    ///
    /// A route is never overwritten: registering the same key twice, or a parameter
    /// whose name differs from the one already at that position, is an error. A failed
    /// insert leaves the set of reachable routes unchanged.
    pub fn insert(&mut self, key: &str, handler: H) -> Result<(), RouteError> {
        let pieces = parse_pattern(key).map_err(|d| RouteError::malformed(key, d))?;
        if pieces.is_empty() {
            return Err(RouteError::malformed(key, PatternDefect::EmptyPattern));
        }

        let mut node = &mut self.root;
        for piece in &pieces {
            node = match *piece {
                Piece::Static(bytes) => Self::insert_static(node, bytes),
                Piece::Param(name) => Self::insert_param(node, name, key)?,
            };
        }

        if node.handler.is_some() {
            return Err(RouteError::DuplicateRoute {
                route: key.to_string(),
            });
        }
        node.handler = Some(handler);
        self.len += 1;
        Ok(())
    }

    /// Walks (and extends) the static path for `bytes` below `cur_node`, returning the
    /// node at which `bytes` ends exactly.
    fn insert_static<'n>(cur_node: &'n mut Node<H>, bytes: &[u8]) -> &'n mut Node<H> {
        let Some(&k) = bytes.first() else {
            return cur_node;
        };

        let Some(idx) = cur_node.statics.find_position(k) else {
            // Nothing shares our first byte: the whole remainder becomes one leaf.
            let idx = cur_node.statics.add_child(k, Node::new_static(bytes));
            return cur_node.statics.child_at_mut(idx);
        };

        let child = cur_node.statics.child_at_mut(idx);
        let longest_common_prefix = child.prefix.prefix_length_slice(bytes);

        // The key diverges inside this child's prefix. Break the child up so that it ends
        // where the key diverges; the recursion then either stops at the new parent or
        // hangs a sibling off it.
        if longest_common_prefix < child.prefix.length() {
            tracing::trace!(
                prefix = ?child.prefix,
                at = longest_common_prefix,
                "splitting node"
            );
            child.split(longest_common_prefix);
        }

        Self::insert_static(child, &bytes[longest_common_prefix..])
    }

    fn insert_param<'n>(
        cur_node: &'n mut Node<H>,
        name: &str,
        key: &str,
    ) -> Result<&'n mut Node<H>, RouteError> {
        let child = cur_node
            .param
            .get_or_insert_with(|| Box::new(Node::new_param(name)));

        if let Some(existing) = child.param_name() {
            if existing != name {
                return Err(RouteError::ParameterConflict {
                    route: key.to_string(),
                    existing: existing.to_string(),
                    attempted: name.to_string(),
                });
            }
        }
        Ok(&mut **child)
    }

    /// Looks up `key`, binding parameters in path order.
    ///
    /// Static children are preferred over the parameter child at every branching point;
    /// if the static branch dead-ends further down, the parameter child is tried next.
    ///
    /// A hit costs O(L) in the key length. A miss may revisit the same key bytes once per
    /// static/parameter alternative it backtracks through: a table holding every mix of
    /// `/a` and `/:p` over `n` components makes a near-miss explore up to 2^n branches.
    /// Ordinary route tables share few such alternatives and stay close to O(L).
    pub fn find<'t, 'k, K>(&'t self, key: K) -> Result<Match<'t, 'k, H>, MatchError>
    where
        K: RouteKey<'k>,
    {
        let mut params = Params::new();
        match Self::find_recurse(&self.root, &key, 0, &mut params) {
            Some(handler) => Ok(Match { handler, params }),
            None => Err(MatchError::NotFound),
        }
    }

    /// `depth` is the number of key bytes consumed up to and including `cur_node`.
    fn find_recurse<'t, 'k, K>(
        cur_node: &'t Node<H>,
        key: &K,
        depth: usize,
        params: &mut Params<'t, 'k>,
    ) -> Option<&'t H>
    where
        K: RouteKey<'k>,
    {
        if depth == key.length() {
            return cur_node.handler.as_ref();
        }

        if let Some(child) = cur_node.seek_static(key.at(depth)) {
            let prefix = child.prefix.to_slice();
            if key.prefix_length_at(depth, prefix) == prefix.len() {
                if let Some(handler) = Self::find_recurse(child, key, depth + prefix.len(), params)
                {
                    return Some(handler);
                }
            }
        }

        let param = cur_node.param.as_deref()?;
        let name = param.param_name()?;
        let end = key
            .find_byte(PATH_SEPARATOR, depth)
            .unwrap_or_else(|| key.length());
        if end == depth {
            // Parameters never bind an empty value.
            return None;
        }
        let value = key.slice(depth, end)?;

        params.push(name, value);
        let found = Self::find_recurse(param, key, end, params);
        if found.is_none() {
            params.pop();
        }
        found
    }

    pub fn print_tree(&self) {
        eprint!("{:?}", self);
    }

    fn write_tree_recurse(
        f: &mut fmt::Formatter<'_>,
        node: &Node<H>,
        depth: usize,
    ) -> fmt::Result {
        let indent = "  ".repeat(depth);
        writeln!(
            f,
            "{}{}{}, {} #children",
            indent,
            node.describe(),
            if node.handler.is_some() { " [handler]" } else { "" },
            node.num_children()
        )?;
        for child in node.children() {
            Self::write_tree_recurse(f, child, depth + 1)?;
        }
        Ok(())
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        Self::stats_recurse(&self.root, &mut stats, 1);
        stats
    }

    fn stats_recurse(node: &Node<H>, stats: &mut TreeStats, height: usize) {
        stats.num_nodes += 1;
        stats.max_height = stats.max_height.max(height);
        stats.max_fanout = stats.max_fanout.max(node.num_children());
        match node.ntype {
            NodeType::Static => stats.num_static_nodes += 1,
            NodeType::Param { .. } => stats.num_param_nodes += 1,
        }
        if node.handler.is_some() {
            stats.num_handlers += 1;
        }
        for child in node.children() {
            Self::stats_recurse(child, stats, height + 1);
        }
    }
}

impl<H> fmt::Debug for RadixTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_tree_recurse(f, &self.root, 0)
    }
}
