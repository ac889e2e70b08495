//! Catch-ignore, blocking forms.

mod common;

use catch_this::{catch_ignore, catch_ignore_kind, catch_ignore_kind_or, catch_ignore_or, Failure, OperationExt};
use common::{Arithmetic, InvalidCast, OutOfRange, Overflow};

#[test]
fn test_ignore_swallows_failure() {
    catch_ignore(|| Err::<(), _>(InvalidCast(1)));
}

#[test]
fn test_ignore_passes_value_through() {
    assert_eq!(catch_ignore(|| Ok::<_, InvalidCast>(5)), 5);
}

#[test]
fn test_ignore_returns_default() {
    let value: Vec<u8> = catch_ignore(|| Err(InvalidCast(2)));
    assert!(value.is_empty());
    assert_eq!(catch_ignore_or(|| Err::<&str, _>(InvalidCast(3)), "fallback"), "fallback");
}

#[test]
fn test_ignore_runs_operation_once() {
    let mut runs = 0;
    catch_ignore(|| {
        runs += 1;
        Err::<(), _>(Failure::msg("once"))
    });
    assert_eq!(runs, 1);
}

#[test]
fn test_typed_ignore_matching() {
    let value = catch_ignore_kind::<InvalidCast, _>(|| Err::<i32, _>(InvalidCast(4))).unwrap();
    assert_eq!(value, 0);

    let value = catch_ignore_kind_or::<InvalidCast, _>(|| Err::<i32, _>(InvalidCast(5)), -1).unwrap();
    assert_eq!(value, -1);
}

#[test]
fn test_typed_ignore_mismatch_propagates_original() {
    let failure = Failure::new(OutOfRange(6));
    let id = failure.id();

    let result = catch_ignore_kind::<InvalidCast, _>(move || Err::<(), _>(failure));
    let back = result.unwrap_err();
    assert_eq!(back.id(), id);
    assert!(back.is::<OutOfRange>());
}

#[test]
fn test_typed_ignore_family() {
    let result = catch_ignore_kind::<Arithmetic, _>(|| Err::<(), _>(Overflow { bits: 16 }));
    assert!(result.is_ok());
}

#[test]
fn test_method_forms() {
    assert_eq!((|| Err::<u8, _>(InvalidCast(7))).catch_ignore(), 0);
    assert_eq!((|| Err::<u8, _>(InvalidCast(8))).catch_ignore_or(3), 3);
}
