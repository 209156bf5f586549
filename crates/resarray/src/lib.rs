//! A from-scratch resizable array.
//!
//! [`ResizableArray`] is a single sequence container over one contiguous,
//! fixed-length buffer that is swapped for a larger or smaller one when the
//! element count crosses a threshold:
//!
//! ```text
//! ResizableArray<T>
//! ├── buffer: Box<[Option<T>]>   (capacity slots, power of two, >= 2)
//! ├── len                        (live prefix of buffer)
//! ├── ArrayConfig                (remove policy)
//! └── ResizeMetrics              (grow/shrink counters)
//! ```
//!
//! Capacity doubles when an insertion fills the last slot and halves when a
//! removal leaves the array at most a quarter full. Alternating push and pop
//! across either threshold reallocates at most once; appends and pops are
//! amortized *O*(1).
//!
//! Reallocations are reported through the `log` facade at `debug` level.
//! This crate does not install a logger.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod metrics;

pub use array::ResizableArray;
pub use config::{ArrayConfig, RemovePolicy};
pub use error::ArrayError;
pub use metrics::ResizeMetrics;
