use indexmap::IndexMap;
use log::{debug, trace};

use crate::error::{DisjointSetError, Result};

/// Dense element identifier in `[0, capacity)`
pub type Element = usize;

/// Union-Find (Disjoint Sets) over a fixed range of elements, merged by group size
///
/// Every element starts as the root of its own singleton group. `merge` hangs
/// the root of the smaller group under the root of the larger one, which keeps
/// any element within `log2(capacity)` parent links of its root. `find` only
/// walks those links and never rewrites them; use [`DisjointSet::flatten`] to
/// compress all paths at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<Element>,
    // Only meaningful at roots; values left behind at absorbed roots are stale.
    group_size: Vec<usize>,
    group_count: usize,
}

impl DisjointSet {
    /// Create a new DisjointSet with `capacity` singleton groups
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(DisjointSetError::InvalidCapacity);
        }

        let too_large = |_| DisjointSetError::CapacityTooLarge { capacity };
        let mut parent = Vec::new();
        parent.try_reserve_exact(capacity).map_err(too_large)?;
        let mut group_size = Vec::new();
        group_size.try_reserve_exact(capacity).map_err(too_large)?;

        parent.extend(0..capacity);
        group_size.resize(capacity, 1);
        debug!("Created disjoint set with {capacity} singleton groups");

        Ok(DisjointSet {
            parent,
            group_size,
            group_count: capacity,
        })
    }

    /// Number of elements, fixed at construction
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Number of distinct groups
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    fn check(&self, element: Element) -> Result<()> {
        if element < self.parent.len() {
            Ok(())
        } else {
            Err(DisjointSetError::OutOfRange {
                element,
                capacity: self.parent.len(),
            })
        }
    }

    /// Walk parent links to the root, returning it with the number of links taken
    fn walk(&self, mut element: Element) -> (Element, usize) {
        let mut depth = 0;
        while self.parent[element] != element {
            element = self.parent[element];
            depth += 1;
        }
        (element, depth)
    }

    fn root_of(&self, element: Element) -> Element {
        self.walk(element).0
    }

    /// Find the root of the group containing `element`
    pub fn find(&self, element: Element) -> Result<Element> {
        self.check(element)?;
        Ok(self.root_of(element))
    }

    /// Merge the groups containing `a` and `b`
    ///
    /// Returns `false` when both were already in the same group. The larger
    /// group absorbs the smaller; on equal sizes the root of `a` is kept.
    pub fn merge(&mut self, a: Element, b: Element) -> Result<bool> {
        let mut root_a = self.find(a)?;
        let mut root_b = self.find(b)?;

        if root_a == root_b {
            return Ok(false);
        }

        if self.group_size[root_a] < self.group_size[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }

        self.parent[root_b] = root_a;
        self.group_size[root_a] += self.group_size[root_b];
        self.group_count -= 1;

        trace!(
            "Merged group {root_b} into {root_a} (size {}, {} groups left)",
            self.group_size[root_a],
            self.group_count
        );

        Ok(true)
    }

    /// Merge every pair in order, returning how many merges joined two groups
    ///
    /// Stops at the first pair with an out-of-range element; pairs before it
    /// stay applied.
    pub fn merge_all<I>(&mut self, pairs: I) -> Result<usize>
    where
        I: IntoIterator<Item = (Element, Element)>,
    {
        let mut joined = 0;
        for (a, b) in pairs {
            if self.merge(a, b)? {
                joined += 1;
            }
        }
        Ok(joined)
    }

    /// Check if two elements are in the same group
    pub fn connected(&self, a: Element, b: Element) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Size of the group containing `element`
    pub fn group_size(&self, element: Element) -> Result<usize> {
        let root = self.find(element)?;
        Ok(self.group_size[root])
    }

    /// Check if `element` is the representative of its group
    pub fn is_root(&self, element: Element) -> Result<bool> {
        self.check(element)?;
        Ok(self.parent[element] == element)
    }

    /// Number of parent links between `element` and its root
    pub fn depth(&self, element: Element) -> Result<usize> {
        self.check(element)?;
        Ok(self.walk(element).1)
    }

    /// Group representatives in ascending order
    pub fn roots(&self) -> impl Iterator<Item = Element> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(element, &parent)| element == parent)
            .map(|(element, _)| element)
    }

    /// Get all groups as sorted lists of elements, ordered by their smallest element
    pub fn groups(&self) -> Vec<Vec<Element>> {
        let mut root_to_group: IndexMap<Element, Vec<Element>> =
            IndexMap::with_capacity(self.group_count);

        for element in 0..self.parent.len() {
            let root = self.root_of(element);
            root_to_group.entry(root).or_default().push(element);
        }

        root_to_group.into_values().collect()
    }

    /// Point every element directly at its root
    ///
    /// Roots, group sizes and connectivity are unchanged.
    pub fn flatten(&mut self) {
        for element in 0..self.parent.len() {
            let root = self.root_of(element);
            self.parent[element] = root;
        }
        debug!("Flattened disjoint set ({} groups)", self.group_count);
    }

    /// Return to `len()` singleton groups
    pub fn reset(&mut self) {
        for (element, parent) in self.parent.iter_mut().enumerate() {
            *parent = element;
        }
        self.group_size.fill(1);
        self.group_count = self.parent.len();
        debug!("Reset disjoint set to {} singleton groups", self.group_count);
    }
}
