//! Two-cursor merging of independently sorted sequences.

use std::cmp::Ordering;

/// Merges two sorted slices into one sorted `Vec`.
///
/// `cmp` orders elements across the two inputs. While neither cursor is
/// exhausted, the smaller element is emitted and its cursor advances; on
/// `Ordering::Equal` the colliding pair is collapsed into the single
/// element produced by `resolve` and both cursors advance. Once one side
/// is exhausted the remainder of the other is appended verbatim.
///
/// Both inputs must already be sorted under `cmp`; the output is then
/// sorted under `cmp` as well. Runs in O(`left.len()` + `right.len()`).
pub fn merge_resolve<T, F, G>(left: &[T], right: &[T], mut cmp: F, mut resolve: G) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    G: FnMut(&T, &T) -> T,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        match cmp(&left[i], &right[j]) {
            Ordering::Less => {
                out.push(left[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                out.push(right[j].clone());
                j += 1;
            }
            Ordering::Equal => {
                out.push(resolve(&left[i], &right[j]));
                i += 1;
                j += 1;
            }
        }
    }

    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

/// Inserts `value` into an already sorted `Vec`, keeping it sorted.
///
/// Insertion is stable: the new value lands after any elements equal to it.
pub fn insert_sorted<T: Ord>(vec: &mut Vec<T>, value: T) {
    let at = vec.partition_point(|x| *x <= value);
    vec.insert(at, value);
}
