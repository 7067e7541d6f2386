use trellis_types::{Size, SizeConstraint};

/// A small per-node memo of `constraint -> desired size` results.
///
/// Entries are matched bit-exactly on the constraint. Once `capacity` is
/// reached the oldest entry is evicted. Invalidation clears the whole cache.
#[derive(Debug, Clone, Default)]
pub struct MeasureCache {
    entries: Vec<(SizeConstraint, Size)>,
}

impl MeasureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, constraint: &SizeConstraint) -> Option<Size> {
        self.entries
            .iter()
            .find(|(key, _)| key == constraint)
            .map(|(_, size)| *size)
    }

    pub fn insert(&mut self, constraint: SizeConstraint, size: Size, capacity: usize) {
        if capacity == 0 {
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == constraint) {
            entry.1 = size;
            return;
        }
        while self.entries.len() >= capacity {
            self.entries.remove(0);
        }
        self.entries.push((constraint, size));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_types::AxisConstraint;

    #[test]
    fn test_hit_requires_bit_exact_constraint() {
        let mut cache = MeasureCache::new();
        let c = SizeConstraint::loose(Size::new(100.0, 50.0));
        cache.insert(c, Size::new(10.0, 10.0), 4);
        assert_eq!(cache.get(&c), Some(Size::new(10.0, 10.0)));

        let other = SizeConstraint::new(AxisConstraint::Exact(100.0), AxisConstraint::at_most(50.0));
        assert_eq!(cache.get(&other), None);
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let mut cache = MeasureCache::new();
        for i in 0..3 {
            let c = SizeConstraint::exact(Size::new(i as f32, 0.0));
            cache.insert(c, Size::new(i as f32, 1.0), 2);
        }
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&SizeConstraint::exact(Size::new(0.0, 0.0))), None);
        assert!(cache.get(&SizeConstraint::exact(Size::new(2.0, 0.0))).is_some());

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_capacity_disables_storage() {
        let mut cache = MeasureCache::new();
        cache.insert(SizeConstraint::unconstrained(), Size::zero(), 0);
        assert!(cache.is_empty());
    }
}
