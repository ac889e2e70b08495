//! Catch and typed catch, blocking forms.

mod common;

use catch_this::{catch, catch_kind, catch_kind_or, catch_or, Failure, FailureId, OperationExt};
use common::{Arithmetic, Calls, DivideByZero, InvalidCast, OutOfRange, Overflow};

#[test]
fn test_success_returns_value_without_handler() {
    let calls = Calls::default();
    let value = catch(|| Ok::<_, InvalidCast>(42), |_| calls.hit("catch")).unwrap();
    assert_eq!(value, 42);
    assert_eq!(calls.log(), Vec::<&str>::new());
}

#[test]
fn test_failure_reaches_handler_once_with_same_instance() {
    let calls = Calls::default();
    let mut origin: Option<FailureId> = None;
    let mut seen: Option<FailureId> = None;

    catch(
        || {
            let failure = Failure::new(InvalidCast(1));
            origin = Some(failure.id());
            Err::<(), _>(failure)
        },
        |e| {
            calls.hit("catch");
            seen = Some(e.id());
            assert_eq!(e.downcast_ref::<InvalidCast>(), Some(&InvalidCast(1)));
        },
    )
    .unwrap();

    assert_eq!(calls.count("catch"), 1);
    assert_eq!(origin, seen);
}

#[test]
fn test_void_catch_returns_unit() {
    let result: catch_this::Result<()> = catch(|| Err(InvalidCast(2)), |_| ());
    assert!(result.is_ok());
}

#[test]
fn test_catch_returns_default_value() {
    let value: String = catch(|| Err(InvalidCast(3)), |_| ()).unwrap();
    assert_eq!(value, "");
}

#[test]
fn test_catch_or_returns_given_default() {
    let calls = Calls::default();
    let value = catch_or(
        || Err::<String, _>(InvalidCast(4)),
        |_| calls.hit("catch"),
        "X".to_string(),
    )
    .unwrap();
    assert_eq!(value, "X");
    assert_eq!(calls.count("catch"), 1);
}

#[test]
fn test_catch_or_ignores_default_on_success() {
    let value = catch_or(|| Ok::<_, InvalidCast>("real"), |_| (), "X").unwrap();
    assert_eq!(value, "real");
}

#[test]
fn test_failing_handler_propagates() {
    let result = catch(
        || Err::<(), _>(InvalidCast(5)),
        |_| Err::<(), _>(OutOfRange(5)),
    );
    let failure = result.unwrap_err();
    assert!(failure.is::<OutOfRange>());
}

#[test]
fn test_typed_match_invokes_handler() {
    let calls = Calls::default();
    let value = catch_kind(
        || Err::<i32, _>(InvalidCast(6)),
        |e: InvalidCast| {
            calls.hit("catch");
            assert_eq!(e, InvalidCast(6));
        },
    )
    .unwrap();
    assert_eq!(value, 0);
    assert_eq!(calls.count("catch"), 1);
}

#[test]
fn test_typed_mismatch_propagates_original() {
    let calls = Calls::default();
    let mut origin = None;

    let result = catch_kind(
        || {
            let failure = Failure::new(OutOfRange(7));
            origin = Some((failure.id(), failure.kind()));
            Err::<(), _>(failure)
        },
        |_: InvalidCast| calls.hit("catch"),
    );

    let failure = result.unwrap_err();
    assert_eq!(calls.log(), Vec::<&str>::new());
    assert_eq!(Some((failure.id(), failure.kind())), origin);
    assert_eq!(failure.downcast::<OutOfRange>().unwrap(), OutOfRange(7));
}

#[test]
fn test_typed_catch_of_failure_is_any() {
    let calls = Calls::default();
    catch_kind(|| Err::<(), _>(OutOfRange(8)), |_: Failure| calls.hit("catch")).unwrap();
    assert_eq!(calls.count("catch"), 1);
}

#[test]
fn test_family_filter_matches_each_member() {
    let caught = std::cell::RefCell::new(Vec::new());

    catch_kind(
        || Err::<(), _>(DivideByZero { numerator: 10 }),
        |e: Arithmetic| caught.borrow_mut().push(e),
    )
    .unwrap();
    catch_kind(
        || Err::<(), _>(Overflow { bits: 8 }),
        |e: Arithmetic| caught.borrow_mut().push(e),
    )
    .unwrap();

    assert_eq!(
        caught.into_inner(),
        vec![
            Arithmetic::DivideByZero(DivideByZero { numerator: 10 }),
            Arithmetic::Overflow(Overflow { bits: 8 }),
        ]
    );
}

#[test]
fn test_family_filter_rejects_outsiders() {
    let result = catch_kind(|| Err::<(), _>(InvalidCast(9)), |_: Arithmetic| ());
    assert!(result.unwrap_err().is::<InvalidCast>());
}

#[test]
fn test_typed_catch_or_default() {
    let value = catch_kind_or(|| Err::<u32, _>(InvalidCast(10)), |_: InvalidCast| (), 99).unwrap();
    assert_eq!(value, 99);
}

#[test]
fn test_question_mark_inside_operation() {
    let calls = Calls::default();
    let value: i32 = catch(
        || -> catch_this::Result<i32> {
            let n: i32 = "not a number".parse()?;
            Ok(n)
        },
        |e| {
            calls.hit("catch");
            assert!(e.is::<std::num::ParseIntError>());
        },
    )
    .unwrap();
    assert_eq!(value, 0);
    assert_eq!(calls.count("catch"), 1);
}

#[test]
fn test_method_forms() {
    let calls = Calls::default();

    let value = (|| Err::<u8, _>(InvalidCast(11))).catch(|_| calls.hit("catch")).unwrap();
    assert_eq!(value, 0);

    let value = (|| Err::<u8, _>(InvalidCast(12))).catch_or(|_| calls.hit("catch"), 7).unwrap();
    assert_eq!(value, 7);

    let result = (|| Err::<u8, _>(OutOfRange(13))).catch_kind(|_: InvalidCast| calls.hit("typed"));
    assert!(result.unwrap_err().is::<OutOfRange>());

    assert_eq!(calls.log(), vec!["catch", "catch"]);
}

#[test]
fn test_unmatched_failure_crosses_boxed_error_boundary() {
    fn load() -> Result<u8, Box<dyn std::error::Error + Send + Sync>> {
        let value = catch_kind(|| Err::<u8, _>(OutOfRange(14)), |_: InvalidCast| ())?;
        Ok(value)
    }

    let error = load().unwrap_err();
    assert_eq!(error.downcast_ref::<OutOfRange>(), Some(&OutOfRange(14)));
}
