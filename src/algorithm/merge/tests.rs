use super::*;
use crate::cursor::{Cursors, Stream};
use crate::test_helpers::test_rng;
use crate::testing::{
    by_key, cursors_mut, is_stably_sorted, keys, random_vec, tagged, ForwardOnly, Tagged,
};
use crate::Greater;
use rand::Rng;

#[test]
fn test_merge_seed() {
    let (a, b) = ([1, 3, 5], [2, 4, 6]);
    let ((f1, l1), (f2, l2)) = (a.cursors(), b.cursors());
    assert_eq!(merge(f1, l1, f2, l2, Vec::new()), [1, 2, 3, 4, 5, 6]);

    let mut out = [0; 6];
    let rest = merge(f2, l2, f1, l1, out.iter_mut());
    assert_eq!(rest.len(), 0);
    assert_eq!(out, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_merge_uneven() {
    let (a, b) = ([1, 2, 10, 11], [5]);
    let ((f1, l1), (f2, l2)) = (a.cursors(), b.cursors());
    assert_eq!(merge(f1, l1, f2, l2, Vec::new()), [1, 2, 5, 10, 11]);
    assert_eq!(merge(f1, f1, f2, l2, Vec::new()), [5]);
    assert_eq!(merge(f1, l1, f2, f2, Vec::new()), a);
}

#[test]
fn test_merge_ties_prefer_first_range() {
    let a = tagged(&[1, 2, 2]);
    let b: Vec<Tagged> = tagged(&[2, 2, 3])
        .into_iter()
        .map(|t| Tagged { index: t.index + 10, ..t })
        .collect();
    let ((f1, l1), (f2, l2)) = (a.cursors(), b.cursors());
    let out = merge_by(f1, l1, f2, l2, Vec::new(), by_key);
    let indices: Vec<usize> = out.iter().map(|t| t.index).collect();
    assert_eq!(indices, [0, 1, 2, 10, 11, 12]);
}

#[test]
fn test_merge_streams_descending() {
    let out = merge_by(
        Stream::new([9, 4, 1]),
        Stream::end(),
        Stream::new([8, 7, 0]),
        Stream::end(),
        Vec::new(),
        Greater,
    );
    assert_eq!(out, [9, 8, 7, 4, 1, 0]);
}

#[test]
fn test_rotate() {
    for k in 0..=10 {
        let mut v: Vec<i32> = (0..10).collect();
        let (first, last) = cursors_mut(&mut v);
        let ret = rotate(first, crate::cursor::next(&first, k as isize), last).index();
        let mut expected: Vec<i32> = (0..10).collect();
        expected.rotate_left(k);
        assert_eq!(v, expected);
        let expected_ret = if k == 0 { 10 } else { 10 - k };
        assert_eq!(ret, expected_ret, "rotating by {k}");
    }
}

#[test]
fn test_rotate_seed() {
    let mut v = [0, 1, 2, 3, 4];
    let (first, last) = cursors_mut(&mut v);
    let n_first = crate::cursor::next(&first, 2);
    let ret = rotate(ForwardOnly(first), ForwardOnly(n_first), ForwardOnly(last));
    assert_eq!(ret.0.index(), 3);
    assert_eq!(v, [2, 3, 4, 0, 1]);
}

#[test]
fn test_rotate_randomized() {
    let mut rng = test_rng();
    for len in 0..50usize {
        let v = random_vec(&mut rng, len, 1000);
        let k = rng.gen_range(0..=len);
        let mut w = v.clone();
        let (first, last) = cursors_mut(&mut w);
        rotate(first, crate::cursor::next(&first, k as isize), last);
        let mut expected = v.clone();
        expected.rotate_left(k);
        assert_eq!(w, expected);
    }
}

#[test]
fn test_rotate_copy() {
    let src: Vec<i32> = (0..10).collect();
    let (first, last) = src.cursors();
    for k in 0..=10 {
        let out = rotate_copy(first, crate::cursor::next(&first, k), last, Vec::new());
        let mut expected = src.clone();
        expected.rotate_left(k as usize);
        assert_eq!(out, expected);
    }
}

#[test]
fn test_inplace_merge() {
    let mut v = [1, 4, 7, 9, 2, 3, 8];
    let (first, last) = cursors_mut(&mut v);
    inplace_merge(first, crate::cursor::next(&first, 4), last);
    assert_eq!(v, [1, 2, 3, 4, 7, 8, 9]);
}

#[test]
fn test_inplace_merge_randomized_stable() {
    let mut rng = test_rng();
    for len in 0..60usize {
        let mid = rng.gen_range(0..=len);
        let mut raw = random_vec(&mut rng, len, 6);
        raw[..mid].sort();
        raw[mid..].sort();
        let mut v = tagged(&raw);
        let (first, last) = cursors_mut(&mut v);
        let middle = crate::cursor::next(&first, mid as isize);
        inplace_merge_by(ForwardOnly(first), ForwardOnly(middle), ForwardOnly(last), by_key);
        assert!(is_stably_sorted(&v), "{raw:?} split at {mid}");
    }
}

#[test]
fn test_stable_sort() {
    let mut v = tagged(&[3, 1, 2, 1, 3, 0, 2]);
    let (first, last) = cursors_mut(&mut v);
    stable_sort_by(first, last, by_key);
    assert_eq!(keys(&v), [0, 1, 1, 2, 2, 3, 3]);
    assert!(is_stably_sorted(&v));
}

#[test]
fn test_stable_sort_small() {
    for raw in [&[][..], &[1][..], &[2, 1][..], &[1, 2][..], &[1, 1][..]] {
        let mut v = raw.to_vec();
        let (first, last) = cursors_mut(&mut v);
        stable_sort(first, last);
        let mut expected = raw.to_vec();
        expected.sort();
        assert_eq!(v, expected);
    }
}

#[test]
fn test_stable_sort_randomized() {
    let mut rng = test_rng();
    for len in 0..150 {
        let raw = random_vec(&mut rng, len, 10);
        let mut v = tagged(&raw);
        let (first, last) = cursors_mut(&mut v);
        stable_sort_by(first, last, by_key);
        let mut expected = tagged(&raw);
        expected.sort_by_key(|t| t.key);
        assert_eq!(v, expected);
    }
}

#[test]
fn test_stable_sort_descending() {
    let mut v = vec![2, 7, 1, 8, 2, 8];
    let (first, last) = cursors_mut(&mut v);
    stable_sort_by(first, last, Greater);
    assert_eq!(v, [8, 8, 7, 2, 2, 1]);
}
