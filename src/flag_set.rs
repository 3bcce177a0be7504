use core::marker::PhantomData;

use log::trace;

use crate::flags::{FlagWord, Flags};
use crate::FlagSetResult;

/// A fixed number of boolean flags with aggregate queries.
///
/// In latching mode the first write to a flag freezes it: later calls to
/// [`FlagSet::set`] for that index are ignored, whatever value they carry.
/// The write-once state is tracked by a second, non-latching [`Flags`] word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSet<W: FlagWord = u64> {
    flags: Flags<W>,
    latched: Option<Flags<W>>,
}

impl<W: FlagWord> FlagSet<W> {
    /// All flags start `false`, no latching.
    pub fn new(capacity: usize) -> FlagSetResult<Self> {
        Self::with_options(capacity, false, false)
    }

    /// All flags start at `initial`, no latching.
    pub fn with_initial(capacity: usize, initial: bool) -> FlagSetResult<Self> {
        Self::with_options(capacity, initial, false)
    }

    /// Fails with [`FlagSetError::InvalidCapacity`](crate::FlagSetError::InvalidCapacity)
    /// if `capacity` is zero or does not fit into `W`.
    pub fn with_options(capacity: usize, initial: bool, latching: bool) -> FlagSetResult<Self> {
        let flags = Flags::new(capacity, initial)?;
        // The initial value is not a write, so nothing starts latched.
        let latched = if latching {
            Some(Flags::zero(capacity)?)
        } else {
            None
        };

        trace!(
            "created flag set with {} flags (initial: {}, latching: {})",
            capacity,
            initial,
            latching
        );

        Ok(Self { flags, latched })
    }

    pub fn builder(capacity: usize) -> FlagSetBuilder<W> {
        FlagSetBuilder::new(capacity)
    }

    pub fn capacity(&self) -> usize {
        self.flags.capacity()
    }

    pub fn is_latching(&self) -> bool {
        self.latched.is_some()
    }

    /// Whether a write to `index` would be ignored.
    pub fn is_latched(&self, index: usize) -> FlagSetResult<bool> {
        match &self.latched {
            Some(latched) => latched.get(index),
            None => self.flags.bit(index).map(|_| false),
        }
    }

    /// Sets the flag at `index` to `value`.
    ///
    /// Writes to an already latched flag return `Ok(())` without changing it.
    /// The index is validated first, so an out of range index is an error even
    /// in latching mode.
    pub fn set(&mut self, index: usize, value: bool) -> FlagSetResult<()> {
        let Some(latched) = &mut self.latched else {
            return self.flags.set(index, value);
        };

        if latched.get(index)? {
            trace!("ignoring write of {} to latched flag {}", value, index);
            return Ok(());
        }

        self.flags.set(index, value)?;
        latched.set(index, true)
    }

    pub fn get(&self, index: usize) -> FlagSetResult<bool> {
        self.flags.get(index)
    }

    /// Returns true if every flag is `true`.
    pub fn all_true(&self) -> bool {
        self.flags.all_true()
    }

    /// Returns true if every flag is `false`.
    pub fn all_false(&self) -> bool {
        self.flags.all_false()
    }
}

/// Configuration for a [`FlagSet`]. Defaults to all flags `false` and no latching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSetBuilder<W: FlagWord = u64> {
    capacity: usize,
    initial: bool,
    latching: bool,
    word: PhantomData<W>,
}

impl<W: FlagWord> FlagSetBuilder<W> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            initial: false,
            latching: false,
            word: PhantomData,
        }
    }

    pub fn initial(mut self, initial: bool) -> Self {
        self.initial = initial;
        self
    }

    pub fn latching(mut self, latching: bool) -> Self {
        self.latching = latching;
        self
    }

    pub fn build(self) -> FlagSetResult<FlagSet<W>> {
        FlagSet::with_options(self.capacity, self.initial, self.latching)
    }
}
