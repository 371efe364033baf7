use log::debug;

use crate::generator::errors::GeneratorError;

/// Enumerates every injective map from `{0..m}` into `{0..n}` exactly once.
///
/// Walks the m-subsets of the codomain in lexicographic order and, for each
/// subset, all of its permutations in lexicographic order (Knuth, TAOCP
/// Vol. 4 Fasc. 2, Algorithm L, extended with a combination step):
///
/// 1. Find the largest `j` with `a[j] < a[j+1]`.
/// 2. If found, swap `a[j]` with the rightmost `a[l] > a[j]`.
/// 3. Reverse `a[j+1..]`.
/// 4. If no `j` was found, move to the next subset: find the largest `j`
///    with `a[j] != j + (n - m)`, increment it and refill the tail with
///    consecutive values. If there is none the enumeration is complete.
///
/// The current map is mutated in place by [`advance`](Self::advance); copy it
/// before advancing if it must outlive the step.
#[derive(Debug, Clone)]
pub struct InjectionGenerator {
    codomain: usize,
    map: Vec<usize>,
}

impl InjectionGenerator {
    /// Start at the map `(0, 1, ..., m-1)`, which is itself the first state.
    ///
    /// # Errors
    ///
    /// Returns an error if `codomain < domain`.
    pub fn new(domain: usize, codomain: usize) -> Result<Self, GeneratorError> {
        if codomain < domain {
            return Err(GeneratorError::CodomainTooSmall { domain, codomain });
        }
        debug!(
            "Creating injection generator: {} -> {} elements",
            domain, codomain
        );
        Ok(Self {
            codomain,
            map: (0..domain).collect(),
        })
    }

    pub fn current(&self) -> &[usize] {
        &self.map
    }

    pub fn domain_size(&self) -> usize {
        self.map.len()
    }

    pub fn codomain_size(&self) -> usize {
        self.codomain
    }

    /// Step to the next map. Returns `false` once every map has been visited,
    /// leaving the array in an unspecified state.
    pub fn advance(&mut self) -> bool {
        let m = self.map.len();

        // Next permutation of the current subset
        if let Some(j) = self.map.windows(2).rposition(|w| w[0] < w[1]) {
            let pivot = self.map[j];
            if let Some(l) = self.map.iter().rposition(|&v| v > pivot) {
                self.map.swap(j, l);
            }
            self.map[j + 1..].reverse();
            return true;
        }

        // Permutations exhausted: restore ascending order, then next subset
        self.map.reverse();
        let diff = self.codomain - m;
        let Some(j) = (0..m).rev().find(|&j| self.map[j] != j + diff) else {
            return false;
        };
        let mut next = self.map[j];
        for slot in &mut self.map[j..] {
            next += 1;
            *slot = next;
        }
        true
    }
}
