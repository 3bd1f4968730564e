use std::fmt;

/// The run of key bytes a node represents relative to its parent.
///
/// Segments are split at arbitrary byte offsets while the tree is built, so they are
/// plain bytes rather than `str`; values handed back to callers are always sliced from
/// the caller's own key at component boundaries.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Segment {
    data: Box<[u8]>,
}

impl Segment {
    pub fn from_slice(src: &[u8]) -> Self {
        Self { data: src.into() }
    }

    /// Returns a segment up to `length` bytes.
    pub fn partial_before(&self, length: usize) -> Self {
        Self::from_slice(&self.data[..length])
    }

    /// Returns a segment from `start` onwards.
    pub fn partial_after(&self, start: usize) -> Self {
        Self::from_slice(&self.data[start..])
    }

    #[inline]
    pub fn at(&self, pos: usize) -> u8 {
        self.data[pos]
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the length of the common prefix between `self` and `slice`.
    #[inline]
    pub fn prefix_length_slice(&self, slice: &[u8]) -> usize {
        self.data
            .iter()
            .zip(slice)
            .take_while(|(a, b)| a == b)
            .count()
    }

    #[inline]
    pub fn to_slice(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.data))
    }
}
