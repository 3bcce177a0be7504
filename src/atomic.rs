use core::sync::atomic::{AtomicU64, Ordering};

use log::trace;

use crate::flags::Flags;
use crate::{FlagSetError, FlagSetResult};

/// A [`FlagSet`](crate::FlagSet) of up to 64 flags that can be shared between threads.
///
/// Every operation is atomic on its own. Callers that need several operations
/// to observe one consistent state must still lock around them.
///
/// In latching mode exactly one of several racing first writes to a flag is
/// applied. The latch is claimed before the value is stored, so a concurrent
/// reader may briefly see a flag as latched while it still holds its previous value.
#[derive(Debug)]
pub struct AtomicFlagSet {
    bits: AtomicU64,
    latched: Option<AtomicU64>,
    mask: u64,
    capacity: usize,
}

impl AtomicFlagSet {
    pub fn new(capacity: usize) -> FlagSetResult<Self> {
        Self::with_options(capacity, false, false)
    }

    pub fn with_initial(capacity: usize, initial: bool) -> FlagSetResult<Self> {
        Self::with_options(capacity, initial, false)
    }

    pub fn with_options(capacity: usize, initial: bool, latching: bool) -> FlagSetResult<Self> {
        let flags: Flags<u64> = Flags::new(capacity, initial)?;

        trace!(
            "created atomic flag set with {} flags (initial: {}, latching: {})",
            capacity,
            initial,
            latching
        );

        Ok(Self {
            bits: AtomicU64::new(flags.value()),
            latched: latching.then(|| AtomicU64::new(0)),
            mask: flags.mask(),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_latching(&self) -> bool {
        self.latched.is_some()
    }

    pub fn is_latched(&self, index: usize) -> FlagSetResult<bool> {
        let bit = self.bit(index)?;
        Ok(match &self.latched {
            Some(latched) => (latched.load(Ordering::Acquire) & bit) != 0,
            None => false,
        })
    }

    pub fn set(&self, index: usize, value: bool) -> FlagSetResult<()> {
        let bit = self.bit(index)?;

        if let Some(latched) = &self.latched {
            let previous = latched.fetch_or(bit, Ordering::AcqRel);
            if (previous & bit) != 0 {
                trace!("ignoring write of {} to latched flag {}", value, index);
                return Ok(());
            }
        }

        if value {
            self.bits.fetch_or(bit, Ordering::AcqRel);
        } else {
            self.bits.fetch_and(!bit, Ordering::AcqRel);
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> FlagSetResult<bool> {
        let bit = self.bit(index)?;
        Ok((self.bits.load(Ordering::Acquire) & bit) != 0)
    }

    pub fn all_true(&self) -> bool {
        self.bits.load(Ordering::Acquire) == self.mask
    }

    pub fn all_false(&self) -> bool {
        self.bits.load(Ordering::Acquire) == 0
    }

    #[inline(always)]
    fn bit(&self, index: usize) -> FlagSetResult<u64> {
        if index >= self.capacity {
            Err(FlagSetError::IndexOutOfRange {
                index,
                capacity: self.capacity,
            })
        } else {
            Ok(1 << index)
        }
    }
}
