//! AFL Fuzz harness for GrowableArray
//!
//! Replays a byte stream as array operations against both a `GrowableArray`
//! and a `Vec` and checks they never disagree:
//! 1. Every operation returns the same value (or the same error)
//! 2. Lengths match after every operation
//! 3. Capacity never drops below length
//!
//! Indices are drawn from the full byte range, so many land past the end and
//! exercise the out-of-range paths.

use afl::fuzz;
use growable::{Config, Error, GrowableArray};

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Push(u8),
    Set { index: u8, value: u8 },
    Remove { index: u8 },
    Insert { index: u8, value: u8 },
    Pop,
    Sort,
    Reserve(u8),
    ShrinkToFit,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 8;
        let rest = &bytes[1..];

        match op_type {
            0 if !rest.is_empty() => Some((FuzzOp::Push(rest[0]), &rest[1..])),
            1 if rest.len() >= 2 => {
                let op = FuzzOp::Set { index: rest[0], value: rest[1] };
                Some((op, &rest[2..]))
            }
            2 if !rest.is_empty() => Some((FuzzOp::Remove { index: rest[0] }, &rest[1..])),
            3 if rest.len() >= 2 => {
                let op = FuzzOp::Insert { index: rest[0], value: rest[1] };
                Some((op, &rest[2..]))
            }
            4 => Some((FuzzOp::Pop, rest)),
            5 => Some((FuzzOp::Sort, rest)),
            6 if !rest.is_empty() => Some((FuzzOp::Reserve(rest[0]), &rest[1..])),
            7 => Some((FuzzOp::ShrinkToFit, rest)),
            _ => None,
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        // First byte picks the starting shape so zero and tiny capacities are covered
        let Some((&shape, mut remaining)) = data.split_first() else {
            return;
        };
        let config = Config::new()
            .with_initial_capacity((shape % 16) as usize)
            .with_growth_factor((shape >> 4) as usize);
        let mut array = GrowableArray::with_config(config);
        let mut model: Vec<u8> = Vec::new();

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;
            let len = model.len();

            match op {
                FuzzOp::Push(value) => {
                    array.push(value);
                    model.push(value);
                }
                FuzzOp::Set { index, value } => {
                    let index = index as usize;
                    let result = array.set(index, value);
                    if index < len {
                        assert_eq!(result, Ok(model[index]));
                        model[index] = value;
                    } else {
                        assert_eq!(result, Err(Error::OutOfRange { index, len }));
                    }
                }
                FuzzOp::Remove { index } => {
                    let index = index as usize;
                    let result = array.remove(index);
                    if index < len {
                        assert_eq!(result, Ok(model.remove(index)));
                    } else {
                        assert_eq!(result, Err(Error::OutOfRange { index, len }));
                    }
                }
                FuzzOp::Insert { index, value } => {
                    let index = index as usize;
                    let result = array.insert(index, value);
                    if index <= len {
                        assert_eq!(result, Ok(()));
                        model.insert(index, value);
                    } else {
                        assert_eq!(result, Err(Error::OutOfRange { index, len }));
                    }
                }
                FuzzOp::Pop => {
                    assert_eq!(array.pop(), model.pop());
                }
                FuzzOp::Sort => {
                    array.sort();
                    model.sort();
                }
                FuzzOp::Reserve(additional) => {
                    array.reserve(additional as usize);
                    assert!(array.capacity() >= len + additional as usize);
                }
                FuzzOp::ShrinkToFit => {
                    array.shrink_to_fit();
                    assert_eq!(array.capacity(), len);
                }
            }

            assert_eq!(array.len(), model.len(), "Length mismatch after {:?}", op);
            assert!(array.capacity() >= array.len(), "Capacity below length after {:?}", op);
        }

        // Verify final contents
        let contents: Vec<u8> = array.iter().copied().collect();
        assert_eq!(contents, model, "Content mismatch");
    });
}
