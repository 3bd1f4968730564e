use crate::utils::u8_keys::{u8_keys_find_insert_position, u8_keys_find_key_position};

/// Children keyed by a single byte, kept sorted by key.
///
/// Route trees are shallow and narrow: most nodes have a handful of children, the root a
/// few more (one per method prefix). A pair of parallel vectors keeps the keys packed
/// together so a probe touches one cache line before it touches any child.
#[derive(Clone)]
pub struct KeyedChildMapping<N> {
    keys: Vec<u8>,
    children: Vec<N>,
}

impl<N> Default for KeyedChildMapping<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> KeyedChildMapping<N> {
    #[inline]
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds `node` under `key`, returning its position.
    ///
    /// The caller guarantees `key` is not present yet; that is what keeps the first-byte
    /// index unambiguous.
    pub fn add_child(&mut self, key: u8, node: N) -> usize {
        debug_assert!(self.find_position(key).is_none());
        let idx = u8_keys_find_insert_position(key, &self.keys);
        self.keys.insert(idx, key);
        self.children.insert(idx, node);
        idx
    }

    #[inline]
    pub fn find_position(&self, key: u8) -> Option<usize> {
        u8_keys_find_key_position(key, &self.keys)
    }

    #[inline]
    pub fn seek_child(&self, key: u8) -> Option<&N> {
        let idx = self.find_position(key)?;
        Some(&self.children[idx])
    }

    #[inline]
    pub fn child_at_mut(&mut self, idx: usize) -> &mut N {
        &mut self.children[idx]
    }

    #[inline(always)]
    pub fn num_children(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (u8, &N)> {
        self.keys.iter().copied().zip(self.children.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::KeyedChildMapping;

    #[test]
    fn test_add_seek() {
        let mut m = KeyedChildMapping::new();
        m.add_child(b'P', 1);
        m.add_child(b'G', 2);
        m.add_child(b'D', 3);
        m.add_child(b'O', 4);

        assert_eq!(m.num_children(), 4);
        assert_eq!(m.seek_child(b'P'), Some(&1));
        assert_eq!(m.seek_child(b'G'), Some(&2));
        assert_eq!(m.seek_child(b'D'), Some(&3));
        assert_eq!(m.seek_child(b'O'), Some(&4));
        assert_eq!(m.seek_child(b'H'), None);

        // Iteration is ordered by key regardless of insertion order.
        let keys: Vec<u8> = m.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![b'D', b'G', b'O', b'P']);
    }

    #[test]
    fn test_full_width_positions() {
        let mut m = KeyedChildMapping::new();
        for k in (0..=255u8).rev() {
            m.add_child(k, k as u32);
        }
        assert_eq!(m.num_children(), 256);
        for k in 0..=255u8 {
            assert_eq!(m.find_position(k), Some(k as usize));
        }

        let idx = m.find_position(b'y').unwrap();
        *m.child_at_mut(idx) += 1;
        assert_eq!(m.seek_child(b'y'), Some(&(b'y' as u32 + 1)));
    }
}
