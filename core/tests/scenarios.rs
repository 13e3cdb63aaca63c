use maybe_core::{AccessFault, Absent, Failure, Fallible, Optional, Present, Success};

#[derive(Clone, Eq, PartialEq, Debug)]
struct ErrorCode {
  code: u32,
}

fn give_result(input: i32) -> Fallible<i32, ErrorCode> {
  if input < 0 {
    Failure(ErrorCode { code: 430 })
  } else {
    Success(input)
  }
}

#[test]
fn unwrap_present_or_fault_on_absent() {
  for value in [0, 1, -7, i32::MAX] {
    assert_eq!(Present(value).unwrap(), value);
  }
  assert_eq!(AccessFault::catch(|| Absent::<i32>.unwrap()), Err(AccessFault::EmptyValue));
}

#[test]
fn map_applies_on_success_and_is_identity_on_failure() {
  let f = |v: i32| v.wrapping_mul(3) - 1;
  for value in [0, 2, 100] {
    assert_eq!(Success::<_, ErrorCode>(value).map(f).unwrap(), f(value));
  }
  assert_eq!(Failure::<i32, _>("e").map(f), Failure("e"));
}

#[test]
fn optional_fallible_round_trip() {
  assert_eq!(Present(9).to_fallible("absent").to_optional_success(), Present(9));
  assert_eq!(Absent::<i32>.to_fallible("absent").to_optional_success(), Absent);
}

#[test]
fn inspect_never_changes_state() {
  let optionals = [Present(1), Absent];
  for optional in optionals {
    assert_eq!(optional.inspect(|_| {}), optional);
  }
  let fallibles: [Fallible<i32, &str>; 2] = [Success(1), Failure("e")];
  for fallible in fallibles {
    assert_eq!(fallible.inspect(|_| {}).inspect_err(|_| {}), fallible);
  }
}

#[test]
fn take_is_a_fixed_point_on_absent() {
  let mut optional = Present("v");
  assert_eq!(optional.take(), Present("v"));
  assert_eq!(optional, Absent);
  assert_eq!(optional.take(), Absent);
  assert_eq!(optional, Absent);
}

#[test]
fn insert_into_absent() {
  let mut optional: Optional<i32> = Absent;
  assert_eq!(*optional.insert(5), 5);
  assert_eq!(optional, Present(5));
}

#[test]
fn xor_laws() {
  assert_eq!(Present(2).xor(Absent), Present(2));
  assert_eq!(Present(2).xor(Present(2)), Absent);
  assert_eq!(Absent::<i32>.xor(Absent), Absent);
}

#[test]
fn give_result_scenario() {
  let result = give_result(-1);
  assert_eq!(result, Failure(ErrorCode { code: 430 }));
  let code = result.map_err(|e| e.code);
  assert_eq!(code, Failure(430));
  assert_eq!(code.unwrap_or(0), 0);
}

#[test]
fn filter_scenario() {
  assert_eq!(Present(4).filter(|v| v % 2 == 0), Present(4));
  assert_eq!(Present(3).filter(|v| v % 2 == 0), Absent);
}

#[test]
fn rendering() {
  assert_eq!(give_result(-1).map_err(|e| e.code).to_string(), "Failure(430)");
  assert_eq!(give_result(3).to_optional_success().to_string(), "Present(3)");
  assert_eq!(give_result(-3).to_optional_success().to_string(), "Absent");
}

#[test]
fn checked_access_never_faults() {
  let absent: Optional<i32> = Absent;
  let fault = AccessFault::catch(|| {
    if absent.is_present() { absent.unwrap() } else { absent.unwrap_or(-1) }
  });
  assert_eq!(fault, Ok(-1));
}
