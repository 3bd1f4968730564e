/// Separator between the method and the path in a composite key.
pub const METHOD_SEPARATOR: u8 = b' ';

/// Separator between path components.
pub const PATH_SEPARATOR: u8 = b'/';

/// A lookup key the tree can walk byte by byte.
///
/// `'k` is the lifetime of the text backing the key; captured parameter values borrow
/// from it, so matching never copies the request path.
pub trait RouteKey<'k> {
    /// Total length of the key in bytes.
    fn length(&self) -> usize;

    /// Returns the byte at `pos`.
    fn at(&self, pos: usize) -> u8;

    /// Length of the common prefix between `partial` and the key from `pos` onwards.
    fn prefix_length_at(&self, pos: usize, partial: &[u8]) -> usize {
        let avail = self.length().saturating_sub(pos);
        partial
            .iter()
            .take(avail)
            .enumerate()
            .take_while(|(i, b)| self.at(pos + i) == **b)
            .count()
    }

    /// First position at or after `from` holding `byte`.
    fn find_byte(&self, byte: u8, from: usize) -> Option<usize> {
        (from..self.length()).find(|&i| self.at(i) == byte)
    }

    /// Text between `start` and `end`, if that range is valid UTF-8 text of the key.
    fn slice(&self, start: usize, end: usize) -> Option<&'k str>;
}

impl<'k> RouteKey<'k> for &'k str {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn at(&self, pos: usize) -> u8 {
        self.as_bytes()[pos]
    }

    fn prefix_length_at(&self, pos: usize, partial: &[u8]) -> usize {
        let rest = &self.as_bytes()[pos..];
        partial
            .iter()
            .zip(rest)
            .take_while(|(a, b)| a == b)
            .count()
    }

    fn find_byte(&self, byte: u8, from: usize) -> Option<usize> {
        self.as_bytes()[from..]
            .iter()
            .position(|&b| b == byte)
            .map(|i| from + i)
    }

    #[inline]
    fn slice(&self, start: usize, end: usize) -> Option<&'k str> {
        (*self).get(start..end)
    }
}

/// The key `method ++ " " ++ path` without materializing the concatenation.
///
/// Dispatch happens once per request; composing the key in place keeps the lookup free
/// of heap allocation.
#[derive(Clone, Copy, Debug)]
pub struct CompositeKey<'k> {
    method: &'k str,
    path: &'k str,
}

impl<'k> CompositeKey<'k> {
    pub fn new(method: &'k str, path: &'k str) -> Self {
        Self { method, path }
    }

    /// Offset of the first path byte within the key.
    #[inline]
    fn path_offset(&self) -> usize {
        self.method.len() + 1
    }

    /// The composed key as an owned string.
    pub fn to_key_string(&self) -> String {
        let mut key = String::with_capacity(self.path_offset() + self.path.len());
        key.push_str(self.method);
        key.push(METHOD_SEPARATOR as char);
        key.push_str(self.path);
        key
    }
}

impl<'k> RouteKey<'k> for CompositeKey<'k> {
    #[inline]
    fn length(&self) -> usize {
        self.path_offset() + self.path.len()
    }

    #[inline]
    fn at(&self, pos: usize) -> u8 {
        let m = self.method.len();
        if pos < m {
            self.method.as_bytes()[pos]
        } else if pos == m {
            METHOD_SEPARATOR
        } else {
            self.path.as_bytes()[pos - m - 1]
        }
    }

    fn prefix_length_at(&self, pos: usize, partial: &[u8]) -> usize {
        let offset = self.path_offset();
        if pos >= offset {
            // Past the method, the comparison is a plain slice compare.
            return self.path.prefix_length_at(pos - offset, partial);
        }
        let avail = self.length() - pos;
        partial
            .iter()
            .take(avail)
            .enumerate()
            .take_while(|(i, b)| self.at(pos + i) == **b)
            .count()
    }

    fn find_byte(&self, byte: u8, from: usize) -> Option<usize> {
        let offset = self.path_offset();
        if from >= offset {
            return self
                .path
                .find_byte(byte, from - offset)
                .map(|i| i + offset);
        }
        (from..self.length()).find(|&i| self.at(i) == byte)
    }

    /// Only ranges within the path are addressable; parameters never live in the method.
    fn slice(&self, start: usize, end: usize) -> Option<&'k str> {
        let offset = self.path_offset();
        if start < offset {
            return None;
        }
        self.path.get(start - offset..end - offset)
    }
}
