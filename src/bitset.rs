//! Compact bit set used for rows and columns of the covering table.
//!
//! Each bit corresponds to a column (minterm) index of a [`QuineTable`][crate::minimize::QuineTable].

/// A fixed-universe bit set backed by a vector of u64 words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSet {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
    /// Number of set bits (cached for O(1) len())
    count: usize,
}

impl BitSet {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates a new empty bit set able to hold `capacity` bits.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(Self::BITS_PER_WORD)],
            count: 0,
        }
    }

    /// Creates a bit set with bits `0..len` all set.
    pub fn full(len: usize) -> Self {
        let mut words = vec![u64::MAX; len / Self::BITS_PER_WORD];
        let rest = len % Self::BITS_PER_WORD;
        if rest != 0 {
            words.push((1u64 << rest) - 1);
        }
        Self { words, count: len }
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    /// Returns true if the bit at the given index is set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        match self.words.get(word_idx) {
            Some(word) => word & (1u64 << bit_idx) != 0,
            None => false,
        }
    }

    /// Sets the bit at the given index. Returns true if the bit was not previously set.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the capacity given at construction.
    pub fn insert(&mut self, index: usize) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        let mask = 1u64 << bit_idx;
        let word = &mut self.words[word_idx];
        let was_clear = *word & mask == 0;
        if was_clear {
            *word |= mask;
            self.count += 1;
        }
        was_clear
    }

    /// Clears the bit at the given index. Returns true if the bit was previously set.
    pub fn remove(&mut self, index: usize) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        let Some(word) = self.words.get_mut(word_idx) else {
            return false;
        };
        let mask = 1u64 << bit_idx;
        let was_set = *word & mask != 0;
        if was_set {
            *word &= !mask;
            self.count -= 1;
        }
        was_set
    }

    /// Clears every bit that is set in `other`.
    pub fn difference_with(&mut self, other: &BitSet) {
        for (w, o) in self.words.iter_mut().zip(&other.words) {
            *w &= !o;
        }
        self.count = self.words.iter().map(|w| w.count_ones() as usize).sum();
    }

    /// Number of bits set in both `self` and `other`.
    pub fn intersection_len(&self, other: &BitSet) -> usize {
        self.words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    /// Returns an iterator over all set bit indices, in increasing order.
    pub fn iter(&self) -> BitSetIter<'_> {
        BitSetIter {
            bitset: self,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let indices: Vec<usize> = iter.into_iter().collect();
        let capacity = indices.iter().max().map_or(0, |&m| m + 1);
        let mut bs = BitSet::new(capacity);
        for index in indices {
            bs.insert(index);
        }
        bs
    }
}

/// Iterator over set bits in a BitSet.
pub struct BitSetIter<'a> {
    bitset: &'a BitSet,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(self.word_idx * BitSet::BITS_PER_WORD + bit_idx);
            }

            self.word_idx += 1;
            if self.word_idx >= self.bitset.words.len() {
                return None;
            }
            self.current_word = self.bitset.words[self.word_idx];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let bs = BitSet::new(0);
        assert!(bs.is_empty());
        assert_eq!(bs.len(), 0);
        assert!(!bs.contains(0));
        assert!(!bs.contains(100));
    }

    #[test]
    fn test_insert_contains() {
        let mut bs = BitSet::new(100);
        assert!(!bs.contains(42));
        assert!(bs.insert(42));
        assert!(bs.contains(42));
        assert!(!bs.insert(42)); // Already set
        assert_eq!(bs.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut bs = BitSet::new(100);
        bs.insert(42);
        assert!(bs.remove(42));
        assert!(!bs.contains(42));
        assert!(!bs.remove(42)); // Already cleared
        assert!(!bs.remove(1000)); // Out of capacity
        assert_eq!(bs.len(), 0);
    }

    #[test]
    fn test_full() {
        let bs = BitSet::full(70);
        assert_eq!(bs.len(), 70);
        assert!(bs.contains(0));
        assert!(bs.contains(69));
        assert!(!bs.contains(70));
        assert_eq!(bs.iter().count(), 70);

        let empty = BitSet::full(0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_iter() {
        let bs: BitSet = [5, 10, 3, 64, 65].into_iter().collect();
        let indices: Vec<_> = bs.iter().collect();
        assert_eq!(indices, vec![3, 5, 10, 64, 65]);
    }

    #[test]
    fn test_difference_and_intersection() {
        let mut a = BitSet::full(8);
        let mut b = BitSet::new(8);
        b.insert(1);
        b.insert(6);
        assert_eq!(a.intersection_len(&b), 2);
        a.difference_with(&b);
        assert_eq!(a.len(), 6);
        assert!(!a.contains(1));
        assert!(!a.contains(6));
        assert_eq!(a.intersection_len(&b), 0);
    }
}
