use std::fmt::{self, Debug, Formatter};
use crate::grammar::TermId;

type BitBlock = u64;

const BLOCK_NBITS: usize = std::mem::size_of::<BitBlock>() * 8;

/// Set of terminals of one grammar, sized by `Grammar::num_terms`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TokenSet {
  slice: Box<[BitBlock]>,
}

impl TokenSet {
  pub fn new(num_tokens: usize) -> Self {
    let len = (num_tokens + BLOCK_NBITS - 1) / BLOCK_NBITS;
    Self {
      slice: vec![0; len].into_boxed_slice(),
    }
  }

  pub fn from_token(num_tokens: usize, token: TermId) -> Self {
    let mut s = Self::new(num_tokens);
    s.insert(token);
    s
  }

  pub fn insert(&mut self, token: TermId) {
    let ix = token.index();
    self.slice[ix / BLOCK_NBITS] |= 1 << (ix % BLOCK_NBITS);
  }

  pub fn contains(&self, token: TermId) -> bool {
    let ix = token.index();
    self.slice[ix / BLOCK_NBITS] & (1 << (ix % BLOCK_NBITS)) != 0
  }

  /// Returns whether the set has changed.
  pub fn union_with(&mut self, other: &TokenSet) -> bool {
    let mut changed = false;
    for (x, y) in self.slice.iter_mut().zip(other.slice.iter()) {
      let old = *x;
      *x |= *y;
      changed |= old != *x;
    }
    changed
  }

  pub fn is_disjoint(&self, other: &TokenSet) -> bool {
    self.slice.iter().zip(other.slice.iter()).all(|(x, y)| x & y == 0)
  }

  pub fn is_empty(&self) -> bool {
    self.slice.iter().all(|&x| x == 0)
  }

  pub fn len(&self) -> usize {
    self.slice.iter().map(|x| x.count_ones() as usize).sum()
  }

  /// Terminals in ascending id order.
  pub fn iter(&self) -> Iter<'_> {
    Iter {
      slice: &*self.slice,
      bit: 0,
      index: 0,
    }
  }
}

pub struct Iter<'a> {
  slice: &'a [BitBlock],
  bit: usize,
  index: usize,
}

impl<'a> Iterator for Iter<'a> {
  type Item = TermId;

  fn next(&mut self) -> Option<TermId> {
    while self.index < self.slice.len() {
      if self.bit < BLOCK_NBITS {
        let bit = (self.slice[self.index] & !((1 << self.bit) - 1))
          .trailing_zeros() as usize;
        if bit < BLOCK_NBITS {
          self.bit = bit + 1;
          return Some(TermId((self.index * BLOCK_NBITS + bit) as u32));
        }
      }

      self.index += 1;
      self.bit = 0;
    }
    None
  }
}

impl Debug for TokenSet {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.debug_set().entries(self.iter().map(|t| t.0)).finish()
  }
}
