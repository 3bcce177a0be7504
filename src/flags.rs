use core::fmt;

use num_traits::{PrimInt, Unsigned};

use crate::{FlagSetError, FlagSetResult};

/// An unsigned primitive integer that flags can be packed into.
pub trait FlagWord: PrimInt + Unsigned + fmt::Debug {
    /// Number of flags a single word can hold.
    fn word_bits() -> usize {
        Self::zero().count_zeros() as usize
    }
}

impl<W: PrimInt + Unsigned + fmt::Debug> FlagWord for W {}

/// Fixed number of boolean flags packed into one word. Flag `i` lives in bit `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags<W: FlagWord = u64> {
    value: W,
    mask: W,
    capacity: usize,
}

impl<W: FlagWord> Flags<W> {
    pub fn new(capacity: usize, initial: bool) -> FlagSetResult<Self> {
        let max = W::word_bits();
        if capacity == 0 || capacity > max {
            return Err(FlagSetError::InvalidCapacity { capacity, max });
        }

        let mask = if capacity == max {
            !W::zero()
        } else {
            (W::one() << capacity) - W::one()
        };
        let value = if initial { mask } else { W::zero() };

        Ok(Self {
            value,
            mask,
            capacity,
        })
    }

    pub fn zero(capacity: usize) -> FlagSetResult<Self> {
        Self::new(capacity, false)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> FlagSetResult<bool> {
        let bit = self.bit(index)?;
        Ok((self.value & bit) != W::zero())
    }

    pub fn set(&mut self, index: usize, value: bool) -> FlagSetResult<()> {
        let bit = self.bit(index)?;
        if value {
            self.value = self.value | bit;
        } else {
            self.value = self.value & !bit;
        }
        Ok(())
    }

    pub fn all_true(&self) -> bool {
        self.value == self.mask
    }

    pub fn all_false(&self) -> bool {
        self.value == W::zero()
    }

    pub(crate) fn value(&self) -> W {
        self.value
    }

    pub(crate) fn mask(&self) -> W {
        self.mask
    }

    #[inline(always)]
    pub(crate) fn bit(&self, index: usize) -> FlagSetResult<W> {
        if index >= self.capacity {
            Err(FlagSetError::IndexOutOfRange {
                index,
                capacity: self.capacity,
            })
        } else {
            Ok(W::one() << index)
        }
    }
}
