//! Index combinations for subset enumeration.

/// Iterator over every `K`-element index tuple of `0..n` in lexicographic
/// order. Yields nothing when `n < K`.
///
/// ```rust
/// use handscope_engine::combos::Combinations;
///
/// let all: Vec<[usize; 2]> = Combinations::<2>::new(3).collect();
/// assert_eq!(all, vec![[0, 1], [0, 2], [1, 2]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations<const K: usize> {
    n: usize,
    next: Option<[usize; K]>,
}

impl<const K: usize> Combinations<K> {
    pub fn new(n: usize) -> Self {
        let next = if n >= K {
            Some(std::array::from_fn(|i| i))
        } else {
            None
        };
        Self { n, next }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        // Advance the rightmost index that still has room, then reset the tail.
        let mut advanced = current;
        let mut pos = K;
        while pos > 0 {
            pos -= 1;
            if advanced[pos] < self.n - K + pos {
                advanced[pos] += 1;
                for j in pos + 1..K {
                    advanced[j] = advanced[j - 1] + 1;
                }
                self.next = Some(advanced);
                return Some(current);
            }
        }
        self.next = None;
        Some(current)
    }
}

/// Number of ways to choose `k` items out of `n`.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_of_five_is_identity() {
        let all: Vec<[usize; 5]> = Combinations::<5>::new(5).collect();
        assert_eq!(all, vec![[0, 1, 2, 3, 4]]);
    }

    #[test]
    fn counts_match_binomial() {
        for n in 5..=9 {
            assert_eq!(Combinations::<5>::new(n).count(), binomial(n, 5));
        }
        assert_eq!(binomial(7, 5), 21);
        assert_eq!(binomial(6, 5), 6);
    }

    #[test]
    fn lexicographic_and_strictly_increasing() {
        let all: Vec<[usize; 5]> = Combinations::<5>::new(7).collect();
        assert_eq!(all.first(), Some(&[0, 1, 2, 3, 4]));
        assert_eq!(all.last(), Some(&[2, 3, 4, 5, 6]));
        for w in all.windows(2) {
            assert!(w[0] < w[1]);
        }
        for combo in &all {
            assert!(combo.windows(2).all(|p| p[0] < p[1]));
            assert!(combo.iter().all(|&i| i < 7));
        }
    }

    #[test]
    fn too_few_items_yields_nothing() {
        assert_eq!(Combinations::<5>::new(4).count(), 0);
        assert_eq!(Combinations::<5>::new(0).count(), 0);
    }
}
