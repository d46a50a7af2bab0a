use std::collections::BTreeMap;

/// Explicit values `T(n) = v` for small inputs.
///
/// Recorded alongside a recurrence for display; the asymptotic methods never
/// consult them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseCases {
    values: BTreeMap<u64, f64>,
}

impl BaseCases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `T(n) = value`, returning the value it replaced.
    pub fn insert(&mut self, n: u64, value: f64) -> Option<f64> {
        self.values.insert(n, value)
    }

    pub fn get(&self, n: u64) -> Option<f64> {
        self.values.get(&n).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Entries in ascending order of `n`.
    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.values.iter().map(|(n, v)| (*n, *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_adding_a_key_overwrites() {
        let mut cases = BaseCases::new();
        assert_eq!(cases.insert(1, 1.0), None);
        assert_eq!(cases.insert(1, 5.0), Some(1.0));
        assert_eq!(cases.len(), 1);
        assert_eq!(cases.get(1), Some(5.0));
    }

    #[test]
    fn iterates_in_key_order() {
        let mut cases = BaseCases::new();
        cases.insert(3, 9.0);
        cases.insert(0, 0.0);
        cases.insert(1, 1.0);
        let keys: Vec<u64> = cases.iter().map(|(n, _)| n).collect();
        assert_eq!(keys, vec![0, 1, 3]);
    }
}
