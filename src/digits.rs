//! Limb storage with a small-buffer optimization and copy-on-write sharing.
//!
//! A [`Digits`] store holds up to [`INLINE_CAPACITY`] limbs inline. Once it
//! grows past that it moves to a reference-counted heap block and stays
//! there, even if it later shrinks. Clones of a heap-backed store share the
//! block; every mutating entry point first makes the block uniquely owned,
//! duplicating it if another store still refers to it.
//!
//! ```
//! use bigint_cow::Digits;
//!
//! let a = Digits::from_vec(vec![1, 2, 3, 4]);
//! let mut b = a.clone();
//! assert!(a.is_shared());
//!
//! b[0] = 9;
//! assert!(!a.is_shared());
//! assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
//! assert_eq!(b.as_slice(), &[9, 2, 3, 4]);
//! ```

use crate::lib::{cmp, fmt, hash, mem, ops, slice, Box, Rc, Vec};
use crate::math::Limb;

/// Number of limbs stored without a heap allocation: as many as fit in one
/// pointer, and never fewer than one.
pub const INLINE_CAPACITY: usize = {
    let n = mem::size_of::<*const ()>() / mem::size_of::<Limb>();
    if n == 0 {
        1
    } else {
        n
    }
};

/// Heap storage shared between stores. The slice length is the capacity.
#[derive(Clone)]
struct Block {
    limbs: Box<[Limb]>,
}

impl Block {
    fn with_capacity(capacity: usize) -> Self {
        let mut limbs = Vec::with_capacity(capacity);
        limbs.resize(capacity, 0);
        Block {
            limbs: limbs.into_boxed_slice(),
        }
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.limbs.len()
    }
}

#[derive(Clone)]
enum Repr {
    Inline {
        len: usize,
        limbs: [Limb; INLINE_CAPACITY],
    },
    Heap {
        len: usize,
        block: Rc<Block>,
    },
}

/// Doubling growth, with a floor of one limb.
#[inline]
fn grow(capacity: usize) -> usize {
    if capacity == 0 {
        1
    } else {
        capacity * 2
    }
}

/// Make `block` uniquely owned with room for at least `capacity` limbs.
///
/// Only the first `len` limbs are carried over when a larger block has to
/// be allocated.
fn reserve_unique(block: &mut Rc<Block>, len: usize, capacity: usize) -> &mut Block {
    if capacity > block.capacity() {
        let mut fresh = Block::with_capacity(capacity);
        fresh.limbs[..len].copy_from_slice(&block.limbs[..len]);
        *block = Rc::new(fresh);
    }
    Rc::make_mut(block)
}

/// A resizable sequence of limbs with value semantics.
///
/// Reads never copy. Writes through [`IndexMut`](ops::IndexMut),
/// [`as_mut_slice`](Digits::as_mut_slice), [`last_mut`](Digits::last_mut),
/// [`push`](Digits::push), [`pop`](Digits::pop) and
/// [`resize`](Digits::resize) first diverge from any other store sharing the
/// same heap block.
#[derive(Clone)]
pub struct Digits {
    repr: Repr,
}

impl Digits {
    /// Create an empty, inline store.
    #[inline]
    pub const fn new() -> Self {
        Digits {
            repr: Repr::Inline {
                len: 0,
                limbs: [0; INLINE_CAPACITY],
            },
        }
    }

    /// Create a store holding `limbs`.
    ///
    /// Sequences longer than [`INLINE_CAPACITY`] take over the vector's
    /// allocation as a heap block of exactly `limbs.len()` limbs.
    pub fn from_vec(limbs: Vec<Limb>) -> Self {
        if limbs.len() <= INLINE_CAPACITY {
            return Digits::from(limbs.as_slice());
        }
        Digits {
            repr: Repr::Heap {
                len: limbs.len(),
                block: Rc::new(Block {
                    limbs: limbs.into_boxed_slice(),
                }),
            },
        }
    }

    /// Number of limbs in use.
    #[inline]
    pub fn len(&self) -> usize {
        match self.repr {
            Repr::Inline { len, .. } | Repr::Heap { len, .. } => len,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity of the active storage mode.
    #[inline]
    pub fn capacity(&self) -> usize {
        match &self.repr {
            Repr::Inline { .. } => INLINE_CAPACITY,
            Repr::Heap { block, .. } => block.capacity(),
        }
    }

    /// Whether the limbs are stored inline.
    #[inline]
    pub fn is_inline(&self) -> bool {
        matches!(self.repr, Repr::Inline { .. })
    }

    /// Whether another store currently shares this store's heap block.
    #[inline]
    pub fn is_shared(&self) -> bool {
        self.ref_count() > 1
    }

    /// Number of stores referring to the heap block, or 1 when inline.
    #[inline]
    pub fn ref_count(&self) -> usize {
        match &self.repr {
            Repr::Inline { .. } => 1,
            Repr::Heap { block, .. } => Rc::strong_count(block),
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Limb] {
        match &self.repr {
            Repr::Inline { len, limbs } => &limbs[..*len],
            Repr::Heap { len, block } => &block.limbs[..*len],
        }
    }

    /// Mutable view of the limbs in use. Diverges from a shared block.
    pub fn as_mut_slice(&mut self) -> &mut [Limb] {
        match &mut self.repr {
            Repr::Inline { len, limbs } => &mut limbs[..*len],
            Repr::Heap { len, block } => {
                let len = *len;
                &mut Rc::make_mut(block).limbs[..len]
            }
        }
    }

    /// The most significant limb.
    #[inline]
    pub fn last(&self) -> Option<&Limb> {
        self.as_slice().last()
    }

    /// The most significant limb, mutably. Diverges from a shared block.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut Limb> {
        self.as_mut_slice().last_mut()
    }

    /// Append one limb at the most significant end.
    pub fn push(&mut self, limb: Limb) {
        let len = self.len();
        self.resize(len + 1);
        self.as_mut_slice()[len] = limb;
    }

    /// Remove and return the most significant limb.
    pub fn pop(&mut self) -> Option<Limb> {
        let len = self.len();
        let limb = *self.last()?;
        self.resize(len - 1);
        Some(limb)
    }

    /// Set the number of limbs in use, appending zero limbs or truncating.
    pub fn resize(&mut self, new_len: usize) {
        match &mut self.repr {
            Repr::Inline { len, limbs } if new_len <= INLINE_CAPACITY => {
                if new_len > *len {
                    limbs[*len..new_len].fill(0);
                }
                *len = new_len;
            }
            Repr::Inline { len, limbs } => {
                let old_len = *len;
                let capacity = cmp::max(grow(INLINE_CAPACITY), new_len);
                let mut block = Block::with_capacity(capacity);
                block.limbs[..old_len].copy_from_slice(&limbs[..old_len]);
                self.repr = Repr::Heap {
                    len: new_len,
                    block: Rc::new(block),
                };
            }
            Repr::Heap { len, block } => {
                let old_len = *len;
                let capacity = if new_len > block.capacity() {
                    cmp::max(grow(block.capacity()), new_len)
                } else {
                    block.capacity()
                };
                let block = reserve_unique(block, old_len, capacity);
                if new_len > old_len {
                    block.limbs[old_len..new_len].fill(0);
                }
                *len = new_len;
            }
        }
    }

    /// Shorten to `len` limbs. Has no effect if `len` is not smaller.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        if len < self.len() {
            self.resize(len);
        }
    }
}

impl Default for Digits {
    #[inline]
    fn default() -> Self {
        Digits::new()
    }
}

impl From<Vec<Limb>> for Digits {
    #[inline]
    fn from(limbs: Vec<Limb>) -> Self {
        Digits::from_vec(limbs)
    }
}

impl From<&[Limb]> for Digits {
    fn from(x: &[Limb]) -> Self {
        if x.len() <= INLINE_CAPACITY {
            let mut limbs = [0; INLINE_CAPACITY];
            limbs[..x.len()].copy_from_slice(x);
            Digits {
                repr: Repr::Inline {
                    len: x.len(),
                    limbs,
                },
            }
        } else {
            Digits::from_vec(x.to_vec())
        }
    }
}

impl FromIterator<Limb> for Digits {
    fn from_iter<I: IntoIterator<Item = Limb>>(iter: I) -> Self {
        Digits::from_vec(iter.into_iter().collect())
    }
}

impl Extend<Limb> for Digits {
    fn extend<I: IntoIterator<Item = Limb>>(&mut self, iter: I) {
        for limb in iter {
            self.push(limb);
        }
    }
}

impl ops::Deref for Digits {
    type Target = [Limb];

    #[inline]
    fn deref(&self) -> &[Limb] {
        self.as_slice()
    }
}

impl ops::DerefMut for Digits {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Limb] {
        self.as_mut_slice()
    }
}

impl<I: slice::SliceIndex<[Limb]>> ops::Index<I> for Digits {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &I::Output {
        &self.as_slice()[index]
    }
}

impl<I: slice::SliceIndex<[Limb]>> ops::IndexMut<I> for Digits {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl PartialEq for Digits {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Digits {}

impl hash::Hash for Digits {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for Digits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

// TESTS
// -----
