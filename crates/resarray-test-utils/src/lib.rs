//! Test fixtures and reference models for resarray development.
//!
//! - [`Item`]: a mixed number/letter element, for scripts that put both
//!   kinds into one array.
//! - [`array_of`] / [`contents`]: build an array from a slice and read it
//!   back as a `Vec`.
//! - [`model`]: an [`Op`](model::Op) description of every mutating call,
//!   proptest strategies over op sequences, and a `Vec`-backed reference
//!   model to check an array against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod model;

use std::fmt;

use resarray::ResizableArray;

/// An array element that is either a number or a single letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Item {
    Num(i64),
    Letter(char),
}

impl From<i64> for Item {
    fn from(n: i64) -> Self {
        Item::Num(n)
    }
}

impl From<char> for Item {
    fn from(c: char) -> Self {
        Item::Letter(c)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Num(n) => write!(f, "{n}"),
            Item::Letter(c) => write!(f, "{c}"),
        }
    }
}

/// Build an array by pushing `items` in order.
pub fn array_of<T: Clone>(items: &[T]) -> ResizableArray<T> {
    let mut arr = ResizableArray::new();
    for item in items {
        arr.push(item.clone());
    }
    arr
}

/// Read every live element of `arr` into a `Vec`, front to back.
pub fn contents<T: Clone>(arr: &ResizableArray<T>) -> Vec<T> {
    (0..arr.len())
        .map(|i| {
            arr.at(i)
                .cloned()
                .unwrap_or_else(|e| panic!("index {i} below len unreadable: {e}"))
        })
        .collect()
}

/// Assert the capacity invariants that must hold after every operation.
///
/// # Panics
///
/// Panics with a description of the first violated invariant.
pub fn assert_capacity_invariants<T>(arr: &ResizableArray<T>) {
    let cap = arr.capacity();
    assert!(cap >= 2, "capacity {cap} below floor of 2");
    assert!(cap.is_power_of_two(), "capacity {cap} is not a power of two");
    assert!(
        arr.len() < cap,
        "len {} has no free tail slot in capacity {cap}",
        arr.len()
    );
}
