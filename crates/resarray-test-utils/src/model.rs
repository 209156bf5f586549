//! A `Vec`-backed reference model of [`ResizableArray`] and proptest
//! strategies over sequences of operations.

use proptest::prelude::*;
use resarray::{ArrayError, RemovePolicy, ResizableArray};

/// One call against the public mutating API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op<T> {
    Push(T),
    Insert(usize, T),
    Prepend(T),
    Pop,
    Delete(usize),
    Remove(T, RemovePolicy),
    Clear,
}

/// What a call returned, normalised so array and model results compare.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Done,
    Value(T),
    Removed(usize),
    Failed(ArrayError),
}

/// Apply `op` to a real array.
pub fn apply<T: PartialEq>(arr: &mut ResizableArray<T>, op: Op<T>) -> Outcome<T> {
    match op {
        Op::Push(item) => {
            arr.push(item);
            Outcome::Done
        }
        Op::Insert(index, item) => match arr.insert(index, item) {
            Ok(()) => Outcome::Done,
            Err(e) => Outcome::Failed(e),
        },
        Op::Prepend(item) => {
            arr.prepend(item);
            Outcome::Done
        }
        Op::Pop => arr.pop().map_or_else(Outcome::Failed, Outcome::Value),
        Op::Delete(index) => arr.delete(index).map_or_else(Outcome::Failed, Outcome::Value),
        Op::Remove(item, policy) => Outcome::Removed(arr.remove_with(&item, policy)),
        Op::Clear => {
            arr.clear();
            Outcome::Done
        }
    }
}

/// Reference sequence with the same observable contract, built on `Vec`.
#[derive(Clone, Debug, Default)]
pub struct Model<T> {
    items: Vec<T>,
}

impl<T: PartialEq> Model<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn find(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|x| x == item)
    }

    pub fn apply(&mut self, op: Op<T>) -> Outcome<T> {
        let len = self.items.len();
        match op {
            Op::Push(item) => {
                self.items.push(item);
                Outcome::Done
            }
            Op::Insert(index, _) if index > len => {
                Outcome::Failed(ArrayError::OutOfBounds { index, len })
            }
            Op::Insert(index, item) => {
                self.items.insert(index, item);
                Outcome::Done
            }
            Op::Prepend(item) => {
                self.items.insert(0, item);
                Outcome::Done
            }
            Op::Pop => self
                .items
                .pop()
                .map_or(Outcome::Failed(ArrayError::Underflow), Outcome::Value),
            Op::Delete(index) if index >= len => {
                Outcome::Failed(ArrayError::OutOfBounds { index, len })
            }
            Op::Delete(index) => Outcome::Value(self.items.remove(index)),
            Op::Remove(item, RemovePolicy::Rescan) => {
                self.items.retain(|x| *x != item);
                Outcome::Removed(len - self.items.len())
            }
            Op::Remove(item, RemovePolicy::SkipShifted) => {
                // Within each run of matches, the 1st, 3rd, 5th... are removed.
                let mut removed = 0;
                let mut run = 0;
                let mut kept = Vec::with_capacity(len);
                for x in self.items.drain(..) {
                    if x == item {
                        run += 1;
                        if run % 2 == 1 {
                            removed += 1;
                            continue;
                        }
                    } else {
                        run = 0;
                    }
                    kept.push(x);
                }
                self.items = kept;
                Outcome::Removed(removed)
            }
            Op::Clear => {
                self.items.clear();
                Outcome::Done
            }
        }
    }
}

/// Either remove policy.
pub fn policy_strategy() -> impl Strategy<Value = RemovePolicy> {
    prop_oneof![Just(RemovePolicy::Rescan), Just(RemovePolicy::SkipShifted)]
}

/// A single op over values in `0..values`, with indices that are sometimes
/// out of range.
pub fn op_strategy(values: i64) -> impl Strategy<Value = Op<i64>> {
    let value = 0..values;
    prop_oneof![
        4 => value.clone().prop_map(Op::Push),
        2 => (0usize..24, value.clone()).prop_map(|(i, v)| Op::Insert(i, v)),
        1 => value.clone().prop_map(Op::Prepend),
        3 => Just(Op::Pop),
        2 => (0usize..24).prop_map(Op::Delete),
        1 => (value, policy_strategy()).prop_map(|(v, p)| Op::Remove(v, p)),
        1 => Just(Op::Clear),
    ]
}

/// Sequences of up to `max_len` ops.
pub fn ops_strategy(values: i64, max_len: usize) -> impl Strategy<Value = Vec<Op<i64>>> {
    proptest::collection::vec(op_strategy(values), 0..max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_skip_shifted_matches_single_pass_scan() {
        let mut model = Model::new();
        for n in [1, 1, 2, 1, 1, 1] {
            model.apply(Op::Push(n));
        }
        assert_eq!(
            model.apply(Op::Remove(1, RemovePolicy::SkipShifted)),
            Outcome::Removed(3)
        );
        assert_eq!(model.items(), &[1, 2, 1]);
    }

    #[test]
    fn model_rejects_like_the_array() {
        let mut model = Model::<i64>::new();
        assert_eq!(model.apply(Op::Pop), Outcome::Failed(ArrayError::Underflow));
        assert_eq!(
            model.apply(Op::Insert(1, 5)),
            Outcome::Failed(ArrayError::OutOfBounds { index: 1, len: 0 })
        );
        assert_eq!(
            model.apply(Op::Delete(0)),
            Outcome::Failed(ArrayError::OutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn apply_drives_the_array() {
        let mut arr = ResizableArray::new();
        assert_eq!(apply(&mut arr, Op::Push(3)), Outcome::Done);
        assert_eq!(apply(&mut arr, Op::Prepend(1)), Outcome::Done);
        assert_eq!(apply(&mut arr, Op::Insert(1, 2)), Outcome::Done);
        assert_eq!(apply(&mut arr, Op::Delete(0)), Outcome::Value(1));
        assert_eq!(apply(&mut arr, Op::Pop), Outcome::Value(3));
        assert_eq!(
            apply(&mut arr, Op::Remove(2, RemovePolicy::Rescan)),
            Outcome::Removed(1)
        );
        assert_eq!(apply(&mut arr, Op::Pop), Outcome::Failed(ArrayError::Underflow));
    }
}
