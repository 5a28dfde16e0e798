//! Word-packed node sets.
//!
//! A dense alternative to `HashSet<usize>` for sets keyed by node index.
//! Every membership structure in a query (observations, ancestor closure,
//! reachable nodes, visited tokens) is one of these.

/// A word-packed bitset over the node indices `0..universe()`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(n / w)\) | `w` is the word width |
/// | `insert` | \(O(1)\) | Returns whether the bit was previously clear |
/// | `contains` | \(O(1)\) | |
/// | `count` | \(O(n / w)\) | Popcount over words |
/// | `iter` | \(O(n / w + k)\) | Ascending, skips empty words |
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeSet {
    bits: usize,
    words: Vec<usize>,
}

impl NodeSet {
    /// Creates a new set over `0..bits`, all cleared.
    pub fn new(bits: usize) -> Self {
        let word_bits = usize::BITS as usize;
        let words_len = bits.div_ceil(word_bits);
        Self {
            bits,
            words: vec![0; words_len],
        }
    }

    /// Creates a set over `0..bits` holding every index yielded by `indices`.
    ///
    /// # Panics
    /// Panics if any index is `>= bits`.
    pub fn from_indices<I>(bits: usize, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = Self::new(bits);
        for i in indices {
            set.insert(i);
        }
        set
    }

    /// Size of the universe this set ranges over.
    #[inline]
    pub fn universe(&self) -> usize {
        self.bits
    }

    /// Returns `true` when no index is set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Number of set indices.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Clears all bits.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns whether `bit` is set.
    ///
    /// # Panics
    /// Panics if `bit >= universe()`.
    #[inline(always)]
    pub fn contains(&self, bit: usize) -> bool {
        assert!(bit < self.bits, "node {bit} out of bounds for n={}", self.bits);
        let (word, mask) = bit_word_mask(bit);
        (self.words[word] & mask) != 0
    }

    /// Sets `bit` and returns `true` iff it was previously cleared.
    ///
    /// # Panics
    /// Panics if `bit >= universe()`.
    #[inline(always)]
    pub fn insert(&mut self, bit: usize) -> bool {
        assert!(bit < self.bits, "node {bit} out of bounds for n={}", self.bits);
        let (word, mask) = bit_word_mask(bit);
        let prev = self.words[word];
        self.words[word] = prev | mask;
        (prev & mask) == 0
    }

    /// Iterates the set indices in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Collects the set indices in ascending order.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over the indices of a [`NodeSet`].
pub struct Iter<'a> {
    words: &'a [usize],
    word_idx: usize,
    current: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.words.len() {
                return None;
            }
            self.current = self.words[self.word_idx];
        }
        let tz = self.current.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.current &= self.current - 1;
        Some(self.word_idx * usize::BITS as usize + tz)
    }
}

#[inline(always)]
fn bit_word_mask(bit: usize) -> (usize, usize) {
    // `usize::BITS` is always a power-of-two (32 or 64), so use shifts/masks.
    const SHIFT: u32 = usize::BITS.trailing_zeros();
    const MASK: usize = usize::BITS as usize - 1;
    (bit >> SHIFT, 1usize << (bit & MASK))
}
