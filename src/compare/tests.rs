use super::*;

fn check_strict<C: Compare<i32>>(comp: &C, lo: i32, hi: i32) {
    assert!(comp.less(&lo, &hi));
    assert!(!comp.less(&hi, &lo));
    assert!(!comp.less(&lo, &lo));
}

#[test]
fn test_natural_orders() {
    check_strict(&Less, 1, 2);
    check_strict(&Greater, 2, 1);
    assert!(Compare::<str>::less(&Less, "abc", "abd"));
}

#[test]
fn test_borrowed() {
    let by_len = |a: &String, b: &String| a.len() < b.len();
    let (short, long) = (String::from("ab"), String::from("abc"));
    assert!(Borrowed(&by_len).less(&short, &long));
    assert!(!Borrowed(&Borrowed(&by_len)).less(&long, &short));
}

#[test]
fn test_inverse() {
    check_strict(&Inverse(&Less), 2, 1);
    check_strict(&Inverse(&Inverse(&Less)), 1, 2);
    let by_abs = |a: &i32, b: &i32| a.abs() < b.abs();
    check_strict(&Inverse(&by_abs), -5, 3);
}

#[test]
fn test_closures_and_adapters() {
    check_strict(&|a: &i32, b: &i32| a < b, -1, 0);
    check_strict(&ByOrdering(|a: &i32, b: &i32| b.cmp(a)), 9, 4);
    check_strict(&ByKey(|x: &i32| x.rem_euclid(10)), 21, 13);
    // keys compare equal: neither precedes the other
    let by_last_digit = ByKey(|x: &i32| x % 10);
    assert!(!by_last_digit.less(&12, &2));
    assert!(!by_last_digit.less(&2, &12));
}

#[test]
fn test_floats_by_total_cmp() {
    let comp = ByOrdering(f64::total_cmp);
    assert!(comp.less(&-0.0, &0.0));
    assert!(comp.less(&1.0, &f64::NAN));
}
