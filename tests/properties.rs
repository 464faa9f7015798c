//! Property-based tests checking `GrowBuf` against `std::vec::Vec` as a
//! reference model.

use growbuf::{Error, GrowBuf, SHRINK_SLACK_RATIO};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(u32),
    Pop,
    Remove(usize),
    SwapRemove(usize),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        2 => any::<usize>().prop_map(Op::Remove),
        2 => any::<usize>().prop_map(Op::SwapRemove),
        1 => Just(Op::Clear),
    ]
}

fn arb_factor() -> impl Strategy<Value = f32> {
    1.0f32..3.0
}

proptest! {
    #[test]
    fn pushes_keep_len_within_capacity(
        values in proptest::collection::vec(any::<u32>(), 0..200),
        capacity in 1usize..16,
        factor in arb_factor(),
    ) {
        let mut buf = GrowBuf::<u32>::with_growth_factor(capacity, factor).unwrap();
        for (i, &v) in values.iter().enumerate() {
            buf.try_push(v).unwrap();
            prop_assert_eq!(buf.len(), i + 1);
            prop_assert!(buf.len() <= buf.capacity());
        }
        prop_assert_eq!(buf.as_slice(), values.as_slice());
    }

    #[test]
    fn pop_then_push_restores_the_element(
        values in proptest::collection::vec(any::<u32>(), 1..50),
    ) {
        let mut buf = GrowBuf::<u32>::with_capacity(1).unwrap();
        buf.extend_from_slice(&values).unwrap();

        let popped = buf.pop().unwrap();
        prop_assert_eq!(popped, *values.last().unwrap());

        buf.try_push(popped).unwrap();
        prop_assert_eq!(buf.as_slice(), values.as_slice());
    }

    #[test]
    fn ordered_removal_preserves_relative_order(
        values in proptest::collection::vec(any::<u32>(), 1..50),
        index in any::<usize>(),
    ) {
        let index = index % values.len();
        let mut model = values.clone();
        let mut buf = GrowBuf::<u32>::with_capacity(values.len()).unwrap();
        buf.extend_from_slice(&values).unwrap();

        prop_assert_eq!(buf.try_remove(index), Ok(model.remove(index)));
        prop_assert_eq!(buf.as_slice(), model.as_slice());
    }

    #[test]
    fn unordered_removal_preserves_the_element_set(
        values in proptest::collection::vec(any::<u32>(), 1..50),
        index in any::<usize>(),
    ) {
        let index = index % values.len();
        let mut model = values.clone();
        let mut buf = GrowBuf::<u32>::with_capacity(values.len()).unwrap();
        buf.extend_from_slice(&values).unwrap();

        // Vec::swap_remove has the same replace-with-last semantics.
        prop_assert_eq!(buf.try_swap_remove(index), Ok(model.swap_remove(index)));
        prop_assert_eq!(buf.as_slice(), model.as_slice());
    }

    #[test]
    fn shrink_to_fit_only_changes_capacity(
        values in proptest::collection::vec(any::<u32>(), 0..50),
        capacity in 1usize..64,
    ) {
        let mut buf = GrowBuf::<u32>::with_capacity(capacity).unwrap();
        buf.extend_from_slice(&values).unwrap();

        buf.shrink_to_fit().unwrap();
        prop_assert_eq!(buf.len(), values.len());
        prop_assert_eq!(buf.capacity(), values.len().max(1));
        prop_assert_eq!(buf.as_slice(), values.as_slice());
    }

    #[test]
    fn growth_never_loses_elements(
        values in proptest::collection::vec(any::<u64>(), 1..300),
        factor in arb_factor(),
    ) {
        let mut buf = GrowBuf::<u64>::with_growth_factor(1, factor).unwrap();
        for &v in &values {
            buf.try_push(v).unwrap();
        }
        prop_assert_eq!(buf.as_slice(), values.as_slice());
    }

    #[test]
    fn cursor_yields_every_element_in_index_order(
        values in proptest::collection::vec(any::<u32>(), 0..50),
    ) {
        let mut buf = GrowBuf::<u32>::with_capacity(8).unwrap();
        buf.extend_from_slice(&values).unwrap();

        buf.reset_cursor();
        let mut seen = Vec::new();
        while let Some(&v) = buf.next_item() {
            seen.push(v);
        }
        prop_assert_eq!(seen.as_slice(), values.as_slice());
        prop_assert!(!buf.has_next());
        prop_assert_eq!(buf.next_item(), None);
    }

    #[test]
    fn behaves_like_a_vec_under_mixed_operations(
        ops in proptest::collection::vec(arb_op(), 0..200),
        capacity in 1usize..16,
        factor in arb_factor(),
    ) {
        let mut buf = GrowBuf::<u32>::with_growth_factor(capacity, factor).unwrap();
        let mut model: Vec<u32> = Vec::new();

        for op in ops {
            let mut removed_one = false;
            match op {
                Op::Push(v) => {
                    buf.try_push(v).unwrap();
                    model.push(v);
                }
                Op::Pop => {
                    let popped = buf.pop();
                    removed_one = popped.is_some();
                    prop_assert_eq!(popped, model.pop());
                }
                Op::Remove(i) => {
                    if model.is_empty() {
                        prop_assert_eq!(buf.try_remove(i), Err(Error::IndexOutOfBounds));
                    } else {
                        let i = i % model.len();
                        prop_assert_eq!(buf.try_remove(i), Ok(model.remove(i)));
                        removed_one = true;
                    }
                }
                Op::SwapRemove(i) => {
                    if model.is_empty() {
                        prop_assert_eq!(buf.try_swap_remove(i), Err(Error::IndexOutOfBounds));
                    } else {
                        let i = i % model.len();
                        prop_assert_eq!(buf.try_swap_remove(i), Ok(model.swap_remove(i)));
                        removed_one = true;
                    }
                }
                Op::Clear => {
                    buf.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(buf.as_slice(), model.as_slice());
            prop_assert!(buf.capacity() >= 1);
            prop_assert!(buf.len() <= buf.capacity());

            // The shrink hysteresis bounds slack after every
            // length-decreasing operation.
            if removed_one {
                if buf.is_empty() {
                    prop_assert_eq!(buf.capacity(), 1);
                } else {
                    prop_assert!(buf.capacity() - buf.len() < buf.len() * SHRINK_SLACK_RATIO);
                }
            }
        }
    }
}
