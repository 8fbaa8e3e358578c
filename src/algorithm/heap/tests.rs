use super::*;
use crate::cursor::{Cursors, Stream};
use crate::test_helpers::test_rng;
use crate::testing::{cursors_mut, is_permutation_of, random_vec};
use crate::Greater;
use rand::Rng;

fn check_heap(v: &[i32]) {
    for i in 1..v.len() {
        assert!(v[(i - 1) / 2] >= v[i], "{v:?} violates the heap property at {i}");
    }
}

#[test]
fn test_make_heap_seed() {
    let mut v = [3, 1, 4, 1, 5];
    let (first, last) = cursors_mut(&mut v);
    make_heap(first, last);
    assert!(is_heap(first, last));
    assert_eq!(v[0], 5);
    check_heap(&v);
    assert!(is_permutation_of(&v, &[3, 1, 4, 1, 5]));
}

#[test]
fn test_is_heap_until() {
    let v = [9, 5, 4, 1, 1, 3, 8, 2];
    let (first, last) = v.cursors();
    // 8 at offset 6 exceeds its parent 4 at offset 2
    assert_eq!(is_heap_until(first, last).index(), 6);
    assert!(!is_heap(first, last));
    assert!(is_heap(first, crate::cursor::next(&first, 6)));

    let e: [i32; 0] = [];
    let (first, last) = e.cursors();
    assert!(is_heap(first, last));
    assert_eq!(is_heap_until_by(first, last, Greater), last);
}

#[test]
fn test_push_pop() {
    let mut v = Vec::new();
    let mut rng = test_rng();
    for _ in 0..50 {
        v.push(rng.gen_range(0..100));
        let (first, last) = cursors_mut(&mut v);
        push_heap(first, last);
        check_heap(&v);
    }
    let mut expected = v.clone();
    expected.sort();
    while let Some(&top) = expected.last() {
        let (first, last) = cursors_mut(&mut v);
        pop_heap(first, last);
        assert_eq!(v.pop(), Some(top));
        check_heap(&v);
        expected.pop();
    }
}

#[test]
fn test_heap_round_trip() {
    let mut rng = test_rng();
    for len in 0..100 {
        let mut v = random_vec(&mut rng, len, 30);
        let mut expected = v.clone();
        expected.sort();
        let (first, last) = cursors_mut(&mut v);
        make_heap(first, last);
        assert!(is_heap(first, last));
        sort_heap(first, last);
        assert_eq!(v, expected);
    }
}

#[test]
fn test_heap_by_min_order() {
    let mut v = vec![4, 8, 1, 9, 3];
    let (first, last) = cursors_mut(&mut v);
    make_heap_by(first, last, Greater);
    assert!(is_heap_by(first, last, Greater));
    sort_heap_by(first, last, Greater);
    assert_eq!(v, [9, 8, 4, 3, 1]);
}

#[test]
fn test_heap_small() {
    let mut v = [1];
    let (first, last) = cursors_mut(&mut v);
    make_heap(first, last);
    pop_heap(first, last);
    push_heap(first, last);
    sort_heap(first, last);
    assert_eq!(v, [1]);

    let mut v: [i32; 0] = [];
    let (first, last) = cursors_mut(&mut v);
    make_heap(first, last);
    pop_heap(first, last);
    sort_heap(first, last);
}

#[test]
fn test_partial_sort() {
    let mut rng = test_rng();
    for len in 0..60 {
        let v = random_vec(&mut rng, len, 25);
        let mut expected = v.clone();
        expected.sort();
        let k = rng.gen_range(0..=len);
        let mut w = v.clone();
        let (first, last) = cursors_mut(&mut w);
        partial_sort(first, crate::cursor::next(&first, k as isize), last);
        assert_eq!(w[..k], expected[..k]);
        assert!(is_permutation_of(&v, &w));
    }
}

#[test]
fn test_partial_sort_strings() {
    let mut v: Vec<String> = ["delta", "alpha", "echo", "charlie", "bravo"]
        .into_iter()
        .map(String::from)
        .collect();
    let (first, last) = cursors_mut(&mut v);
    partial_sort_by(first, crate::cursor::next(&first, 2), last, Greater);
    assert_eq!(v[..2], ["echo", "delta"]);
}

#[test]
fn test_partial_sort_copy() {
    let mut dest = [0; 3];
    let (d_first, d_last) = cursors_mut(&mut dest);
    let end = partial_sort_copy(Stream::new([7, 3, 9, 1, 5, 2]), Stream::end(), d_first, d_last);
    assert_eq!(end, d_last);
    assert_eq!(dest, [1, 2, 3]);

    // fewer inputs than room
    let mut dest = [0; 5];
    let (d_first, d_last) = cursors_mut(&mut dest);
    let src = [4, 2];
    let (first, last) = src.cursors();
    let end = partial_sort_copy(first, last, d_first, d_last).index();
    assert_eq!(end, 2);
    assert_eq!(dest[..2], [2, 4]);

    // no room
    let mut dest: [i32; 0] = [];
    let (d_first, d_last) = cursors_mut(&mut dest);
    let end = partial_sort_copy(first, last, d_first, d_last);
    assert_eq!(end, d_first);
}

#[test]
fn test_partial_sort_copy_randomized() {
    let mut rng = test_rng();
    for len in 0..40 {
        let src = random_vec(&mut rng, len, 50);
        let room = rng.gen_range(0..45);
        let mut dest = vec![-1; room];
        let (d_first, d_last) = cursors_mut(&mut dest);
        let end = partial_sort_copy_by(
            Stream::new(src.iter().copied()),
            Stream::end(),
            d_first,
            d_last,
            Greater,
        )
        .index();
        let mut expected = src.clone();
        expected.sort_by(|a, b| b.cmp(a));
        expected.truncate(room);
        assert_eq!(end, expected.len());
        assert_eq!(dest[..end], expected[..]);
    }
}
