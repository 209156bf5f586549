//! Resarray exercise script: drives every operation on one array and
//! prints the size and capacity as it goes.
//!
//! Demonstrates:
//!   1. Growth on push (2 -> 4 -> 8)
//!   2. Shifting delete and insert
//!   3. Removing by value, with the resulting shrink
//!   4. Prepend and find-then-insert
//!   5. The two error cases: out-of-bounds and underflow
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example exercise
//!
//! `debug` logging shows every reallocation.

use resarray::{ArrayError, ResizableArray};
use resarray_test_utils::{contents, Item};

fn report(arr: &ResizableArray<Item>) {
    println!("Current size: {}", arr.len());
    println!("Current capacity: {}", arr.capacity());
}

fn show(arr: &ResizableArray<Item>) -> String {
    let items: Vec<String> = contents(arr).iter().map(Item::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn main() -> Result<(), ArrayError> {
    pretty_env_logger::init();

    println!("Executes test codes");

    let mut arr = ResizableArray::new();
    report(&arr);

    for n in 1..=5 {
        arr.push(Item::Num(n));
    }
    report(&arr);
    println!("Value of at 2: {}", arr.at(2)?);

    arr.delete(2)?;
    println!("Value of at 2: {}", arr.at(2)?);

    arr.insert(2, Item::Letter('C'))?;
    arr.push(Item::Letter('F'));
    for n in [1, 2, 4, 5] {
        arr.remove(&Item::Num(n));
    }
    report(&arr);

    arr.prepend(Item::Letter('B'));
    arr.prepend(Item::Letter('A'));

    if let Some(c) = arr.find(&Item::Letter('C')) {
        arr.insert(c + 1, Item::Letter('D'))?;
    }
    if let Some(d) = arr.find(&Item::Letter('D')) {
        arr.insert(d + 1, Item::Letter('E'))?;
    }
    println!("Contents: {}", show(&arr));
    report(&arr);

    match arr.at(arr.len()) {
        Err(e) => println!("at(len) rejected: {e}"),
        Ok(item) => println!("at(len) unexpectedly returned {item}"),
    }

    while arr.pop().is_ok() {}
    match arr.pop() {
        Err(e) => println!("pop on empty rejected: {e}"),
        Ok(item) => println!("pop on empty unexpectedly returned {item}"),
    }
    report(&arr);

    let m = arr.metrics();
    println!(
        "Reallocations: {} grows, {} shrinks, {} elements moved",
        m.grows, m.shrinks, m.elements_moved
    );
    Ok(())
}
