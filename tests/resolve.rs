extern crate locate_ith;
extern crate rand;

use locate_ith::{Error, Index, resolve, resolve_many, resolve_uniform};
use rand::Rng;

#[test]
fn test_resolve_within_range() {
    for m in 1..20 {
        for i in 1..m + 1 {
            assert_eq!(resolve(Some(i as i32), m), Ok(i));
        }
    }
}

#[test]
fn test_resolve_past_last_clamps() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let m: usize = rng.gen_range(1, 50);
        let i: i32 = rng.gen_range(m as i32 + 1, 1000);
        assert_eq!(resolve(Some(i), m), Ok(m));
    }
}

#[test]
fn test_resolve_minus_one_is_last() {
    for m in 1..50 {
        assert_eq!(resolve(Some(-1), m), Ok(m));
    }
}

#[test]
fn test_resolve_before_first_clamps() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let m: usize = rng.gen_range(1, 50);
        let i: i32 = rng.gen_range(-1000, -(m as i32) + 1);
        assert_eq!(resolve(Some(i), m), Ok(1));
    }
}

#[test]
fn test_resolve_zero_or_missing() {
    for m in 0..5 {
        assert_eq!(resolve(Some(0), m), Err(Error::InvalidArgument));
        assert_eq!(resolve(None, m), Err(Error::InvalidArgument));
    }
}

#[test]
fn test_resolve_uniform_last() {
    assert_eq!(resolve_uniform(Some(-1), &[3, 1, 5]), Ok(vec![3, 1, 5]));
}

#[test]
fn test_resolve_uniform_second() {
    assert_eq!(resolve_uniform(Some(2), &[3, 1, 5]), Ok(vec![2, 1, 2]));
}

#[test]
fn test_resolve_uniform_invalid() {
    assert_eq!(resolve_uniform(Some(0), &[3, 1, 5]), Err(Error::InvalidArgument));
    assert_eq!(resolve_uniform(None, &[3, 1, 5]), Err(Error::InvalidArgument));
}

#[test]
fn test_resolve_many() {
    assert_eq!(resolve_many(&[Some(1), Some(-1), Some(2)], &[4, 4, 1]), Ok(vec![1, 4, 1]));
}

#[test]
fn test_resolve_many_any_invalid_fails_all() {
    assert_eq!(resolve_many(&[Some(1), None, Some(2)], &[4, 4, 1]), Err(Error::InvalidArgument));
    assert_eq!(resolve_many(&[Some(1), Some(2), Some(0)], &[4, 4, 1]), Err(Error::InvalidArgument));
}

#[test]
fn test_resolve_many_length_mismatch() {
    assert_eq!(
        resolve_many(&[Some(1)], &[4, 4]),
        Err(Error::LengthMismatch{expected: 2, found: 1}));
    // length is checked before the entries
    assert_eq!(
        resolve_many(&[None, None, None], &[4, 4]),
        Err(Error::LengthMismatch{expected: 2, found: 3}));
}

#[test]
fn test_index_resolve() {
    let counts = [3, 1, 5];
    assert_eq!(Index::from(-1i32).resolve(&counts), Ok(vec![3, 1, 5]));
    assert_eq!(Index::from(vec![1i32, -1, 9]).resolve(&counts), Ok(vec![1, 1, 5]));
    assert_eq!(Index::from(vec![Some(1), None, Some(9)]).resolve(&counts), Err(Error::InvalidArgument));
}
