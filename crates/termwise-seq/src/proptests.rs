//! Property-based tests for the sequence primitives.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::list::SeqList;
    use crate::merge::{insert_sorted, merge_resolve};

    fn small_vec() -> impl Strategy<Value = Vec<i32>> {
        proptest::collection::vec(-50i32..50, 0..16)
    }

    fn sorted_vec() -> impl Strategy<Value = Vec<i32>> {
        small_vec().prop_map(|mut v| {
            v.sort_unstable();
            v
        })
    }

    proptest! {
        #[test]
        fn merge_is_sorted_and_length_preserving(a in sorted_vec(), b in sorted_vec()) {
            let merged = merge_resolve(
                &a,
                &b,
                |x, y| if x <= y { std::cmp::Ordering::Less } else { std::cmp::Ordering::Greater },
                |x, _| *x,
            );

            prop_assert_eq!(merged.len(), a.len() + b.len());
            prop_assert!(merged.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn merge_matches_sort_of_concatenation(a in sorted_vec(), b in sorted_vec()) {
            let merged = merge_resolve(
                &a,
                &b,
                |x, y| if x <= y { std::cmp::Ordering::Less } else { std::cmp::Ordering::Greater },
                |x, _| *x,
            );

            let mut expected = a.clone();
            expected.extend_from_slice(&b);
            expected.sort_unstable();

            prop_assert_eq!(merged, expected);
        }

        #[test]
        fn insert_sorted_preserves_order(v in sorted_vec(), x in -50i32..50) {
            let mut v = v;
            insert_sorted(&mut v, x);
            prop_assert!(v.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn list_sort_matches_std_sort(v in small_vec()) {
            let mut list: SeqList<_> = v.iter().copied().collect();
            list.sort();

            let mut expected = v;
            expected.sort_unstable();
            prop_assert_eq!(list.as_slice(), expected.as_slice());
        }

        #[test]
        fn list_reverse_is_involutive(v in small_vec()) {
            let mut list: SeqList<_> = v.iter().copied().collect();
            list.reverse();
            list.reverse();
            prop_assert_eq!(list.as_slice(), v.as_slice());
        }

        #[test]
        fn list_merge_sorted_is_sorted(a in sorted_vec(), b in sorted_vec()) {
            let left: SeqList<_> = a.iter().copied().collect();
            let right: SeqList<_> = b.iter().copied().collect();

            let merged = left.merge_sorted(&right);
            prop_assert_eq!(merged.len(), a.len() + b.len());
            prop_assert!(merged.as_slice().windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
