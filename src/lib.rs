#![no_std]
#![warn(missing_docs)]

//! A growable contiguous buffer with configurable growth factor and
//! shrink hysteresis.
//!
//! [`GrowBuf`] is a vector of [`Pod`](bytemuck::Pod) elements that
//! manages its own capacity: it grows by a multiplicative factor when an
//! append finds it full, and shrinks back to fit once unused capacity
//! reaches [five times](SHRINK_SLACK_RATIO) the live element count.
//! Slots beyond the current length always hold the all-zero bit
//! pattern. A built-in cursor supports one-pass forward iteration
//! without borrowing an iterator.
//!
//! The crate is `no_std` and requires only a global allocator.
//! Allocation failure is never fatal: fallible operations report
//! [`Error::OutOfMemory`] and leave the buffer fully usable at its
//! previous capacity.
//!
//! # Examples
//! ```
//! use growbuf::GrowBuf;
//!
//! let mut buf = GrowBuf::<i32>::with_growth_factor(2, 1.6)?;
//! buf.try_push(10)?;
//! buf.try_push(20)?;
//! buf.try_push(30)?; // grows 2 -> 3
//! assert_eq!(buf.as_slice(), &[10, 20, 30]);
//!
//! buf.reset_cursor();
//! while let Some(&value) = buf.next_item() {
//!     assert!(value >= 10);
//! }
//! # Ok::<(), growbuf::Error>(())
//! ```

extern crate alloc;

pub mod buf;
pub mod error;
pub mod index;
mod raw;

pub use crate::buf::{GrowBuf, DEFAULT_GROWTH_FACTOR, SHRINK_SLACK_RATIO};
pub use crate::error::Error;
pub use crate::index::BufIndex;
