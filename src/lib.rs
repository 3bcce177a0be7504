#![no_std]

//! Fixed-size sets of boolean flags packed into a single integer word.
//!
//! A [`FlagSet`] tracks a fixed number of independent conditions, such as
//! "has worker N reported?", and answers aggregate questions about them in
//! constant time. In latching mode every flag is write-once.
//!
//! ```
//! use tinyflagset::FlagSet;
//!
//! let mut reported: FlagSet = FlagSet::new(3)?;
//! reported.set(0, true)?;
//! assert!(!reported.all_true() && !reported.all_false());
//! # Ok::<(), tinyflagset::FlagSetError>(())
//! ```

pub use self::flag_set::{FlagSet, FlagSetBuilder};
pub use self::flags::{FlagWord, Flags};

#[cfg(target_has_atomic = "64")]
pub use self::atomic::AtomicFlagSet;

#[cfg(target_has_atomic = "64")]
pub mod atomic;
pub mod flag_set;
pub mod flags;

pub type FlagSetResult<T> = Result<T, FlagSetError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FlagSetError {
    #[error("flag index {index} is out of range for a set of {capacity} flags")]
    IndexOutOfRange { index: usize, capacity: usize },
    #[error("a flag set must hold between 1 and {max} flags, got {capacity}")]
    InvalidCapacity { capacity: usize, max: usize },
}
