use crate::mapping::keyed_mapping::KeyedChildMapping;
use crate::partials::segment::Segment;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum NodeType {
    /// Matches its prefix literally.
    Static,
    /// Matches one path component and binds it to `name`.
    Param { name: Box<str> },
}

/// A tree node. Static children are indexed by the first byte of their prefix; the
/// parameter child, if any, is held apart so the two never compete for an index slot.
#[derive(Clone)]
pub(crate) struct Node<H> {
    pub(crate) prefix: Segment,
    pub(crate) ntype: NodeType,
    pub(crate) statics: KeyedChildMapping<Node<H>>,
    pub(crate) param: Option<Box<Node<H>>>,
    pub(crate) handler: Option<H>,
}

impl<H> Node<H> {
    #[inline]
    pub(crate) fn new_root() -> Self {
        Self::new_static(&[])
    }

    #[inline]
    pub(crate) fn new_static(prefix: &[u8]) -> Self {
        Self {
            prefix: Segment::from_slice(prefix),
            ntype: NodeType::Static,
            statics: KeyedChildMapping::new(),
            param: None,
            handler: None,
        }
    }

    #[inline]
    pub(crate) fn new_param(name: &str) -> Self {
        Self {
            prefix: Segment::default(),
            ntype: NodeType::Param { name: name.into() },
            statics: KeyedChildMapping::new(),
            param: None,
            handler: None,
        }
    }

    pub(crate) fn param_name(&self) -> Option<&str> {
        match &self.ntype {
            NodeType::Param { name } => Some(&**name),
            NodeType::Static => None,
        }
    }

    pub(crate) fn is_param(&self) -> bool {
        matches!(self.ntype, NodeType::Param { .. })
    }

    #[inline]
    pub(crate) fn seek_static(&self, key: u8) -> Option<&Node<H>> {
        self.statics.seek_child(key)
    }

    pub(crate) fn num_children(&self) -> usize {
        self.statics.num_children() + usize::from(self.param.is_some())
    }

    /// Splits this static node at `at`, which must fall strictly inside its prefix.
    ///
    /// Afterwards `self` holds `prefix[..at]` and nothing else; the previous contents
    /// (handler, parameter child, static children) move into a single static child
    /// holding `prefix[at..]`. The first byte of the prefix is unchanged, so the slot
    /// this node occupies in its parent's index stays valid.
    pub(crate) fn split(&mut self, at: usize) {
        debug_assert!(!self.is_param());
        debug_assert!(at > 0 && at < self.prefix.length());

        let head = Node::new_static(self.prefix.partial_before(at).to_slice());
        let mut tail = std::mem::replace(self, head);
        tail.prefix = tail.prefix.partial_after(at);
        let k = tail.prefix.at(0);
        self.statics.add_child(k, tail);
    }

    /// Static children first, in key order, then the parameter child.
    pub(crate) fn children(&self) -> impl Iterator<Item = &Node<H>> {
        self.statics
            .iter()
            .map(|(_, c)| c)
            .chain(self.param.as_deref())
    }

    pub(crate) fn describe(&self) -> String {
        match &self.ntype {
            NodeType::Static if self.prefix.is_empty() => "(root)".to_string(),
            NodeType::Static => format!("{:?}", self.prefix),
            NodeType::Param { name } => format!(":{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, NodeType};

    #[test]
    fn test_split_moves_contents_down() {
        let mut n: Node<u32> = Node::new_static(b"GET /pet");
        n.handler = Some(1);
        n.param = Some(Box::new(Node::new_param("id")));
        n.statics.add_child(b'/', Node::new_static(b"/x"));

        n.split(5);

        assert_eq!(n.prefix.to_slice(), b"GET /");
        assert!(n.handler.is_none());
        assert!(n.param.is_none());
        assert_eq!(n.num_children(), 1);

        let tail = n.seek_static(b'p').unwrap();
        assert_eq!(tail.prefix.to_slice(), b"pet");
        assert_eq!(tail.handler, Some(1));
        assert_eq!(tail.param.as_ref().unwrap().param_name(), Some("id"));
        assert!(tail.seek_static(b'/').is_some());
        assert_eq!(tail.num_children(), 2);
    }

    #[test]
    fn test_param_node() {
        let n: Node<()> = Node::new_param("petId");
        assert!(n.is_param());
        assert_eq!(n.ntype, NodeType::Param { name: "petId".into() });
        assert_eq!(n.describe(), ":petId");
        assert!(n.prefix.is_empty());

        let root: Node<()> = Node::new_root();
        assert!(!root.is_param());
        assert_eq!(root.param_name(), None);
        assert_eq!(root.children().count(), 0);
    }
}
