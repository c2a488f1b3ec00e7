//! Ordered set operations over sorted, duplicate-free slices.
//!
//! Buckets and bags are kept sorted at all times; these merge-based helpers preserve that
//! without hashing and run in `O(|a| + |b|)`.
use core::cmp::Ordering;

/// Merge two sorted, duplicate-free slices into their sorted union.
pub fn union<T: Ord + Copy>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len().max(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Replace `target` by `target ∪ other`.
pub fn union_into<T: Ord + Copy>(target: &mut Vec<T>, other: &[T]) {
    if other.is_empty() {
        return;
    }
    *target = union(target, other);
}

/// Number of elements common to both slices.
pub fn intersection_size<T: Ord>(a: &[T], b: &[T]) -> usize {
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}

/// Elements of `a` not in `b`, in order.
pub fn difference<T: Ord + Copy>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len());
    let mut j = 0;
    for &x in a {
        while j < b.len() && b[j] < x {
            j += 1;
        }
        if j == b.len() || b[j] != x {
            out.push(x);
        }
    }
    out
}

/// `true` if every element of `sub` occurs in `sup`.
pub fn is_subset<T: Ord>(sub: &[T], sup: &[T]) -> bool {
    if sub.len() > sup.len() {
        return false;
    }
    let mut j = 0;
    for x in sub {
        while j < sup.len() && sup[j] < *x {
            j += 1;
        }
        if j == sup.len() || sup[j] != *x {
            return false;
        }
        j += 1;
    }
    true
}

/// `true` if the slice is strictly increasing.
pub fn is_sorted_set<T: Ord>(a: &[T]) -> bool {
    a.windows(2).all(|w| w[0] < w[1])
}
