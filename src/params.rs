use smallvec::SmallVec;

/// Parameter bindings captured while matching, in the order they appear in the path.
///
/// Names borrow from the tree (`'t`), values from the matched path (`'p`). Up to four
/// bindings are stored inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params<'t, 'p> {
    bindings: SmallVec<[(&'t str, &'p str); 4]>,
}

impl<'t, 'p> Params<'t, 'p> {
    pub fn new() -> Self {
        Self {
            bindings: SmallVec::new(),
        }
    }

    pub(crate) fn push(&mut self, name: &'t str, value: &'p str) {
        self.bindings.push((name, value));
    }

    pub(crate) fn pop(&mut self) {
        self.bindings.pop();
    }

    /// Value bound to `name`, if the matched route declares it.
    pub fn get(&self, name: &str) -> Option<&'p str> {
        self.bindings
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'t str, &'p str)> + '_ {
        self.bindings.iter().copied()
    }

    pub fn as_slice(&self) -> &[(&'t str, &'p str)] {
        &self.bindings
    }
}

impl<'t, 'p> IntoIterator for Params<'t, 'p> {
    type Item = (&'t str, &'p str);
    type IntoIter = smallvec::IntoIter<[(&'t str, &'p str); 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Params;

    #[test]
    fn test_ordered_bindings() {
        let mut p = Params::new();
        assert!(p.is_empty());
        p.push("userId", "7");
        p.push("petId", "55");
        assert_eq!(p.len(), 2);
        assert_eq!(p.get("petId"), Some("55"));
        assert_eq!(p.get("userId"), Some("7"));
        assert_eq!(p.get("id"), None);
        assert_eq!(p.as_slice(), &[("userId", "7"), ("petId", "55")]);

        p.pop();
        let owned: Vec<_> = p.into_iter().collect();
        assert_eq!(owned, vec![("userId", "7")]);
    }
}
