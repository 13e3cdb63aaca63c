use std::fmt::{self, Debug, Display, Formatter};

use crate::fallible::{Failure, Fallible, Success};
use crate::optional::{Absent, Optional, Present};

impl<T> Optional<T> {
  /// Converts into [`Success`] with the present value, or [`Failure`] with `error` if absent.
  #[inline]
  pub fn to_fallible<E>(self, error: E) -> Fallible<T, E> {
    match self {
      Present(value) => Success(value),
      Absent => Failure(error),
    }
  }

  /// Converts into [`Success`] with the present value, or [`Failure`] with the error computed by `error` if absent.
  #[inline]
  pub fn to_fallible_with<E>(self, error: impl FnOnce() -> E) -> Fallible<T, E> {
    match self {
      Present(value) => Success(value),
      Absent => Failure(error()),
    }
  }
}

impl<T, E> Fallible<T, E> {
  #[inline]
  pub fn to_optional_success(self) -> Optional<T> {
    match self {
      Success(value) => Present(value),
      Failure(_) => Absent,
    }
  }

  #[inline]
  pub fn to_optional_failure(self) -> Optional<E> {
    match self {
      Success(_) => Absent,
      Failure(error) => Present(error),
    }
  }
}


impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Some(value) => Present(value),
      None => Absent,
    }
  }
}
impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self {
    match optional {
      Present(value) => Some(value),
      Absent => None,
    }
  }
}

impl<T, E> From<Result<T, E>> for Fallible<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Success(value),
      Err(error) => Failure(error),
    }
  }
}
impl<T, E> From<Fallible<T, E>> for Result<T, E> {
  #[inline]
  fn from(fallible: Fallible<T, E>) -> Self {
    match fallible {
      Success(value) => Ok(value),
      Failure(error) => Err(error),
    }
  }
}


impl<T: Debug> Display for Optional<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Present(value) => write!(f, "Present({:?})", value),
      Absent => f.write_str("Absent"),
    }
  }
}

impl<T: Debug, E: Debug> Display for Fallible<T, E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Success(value) => write!(f, "Success({:?})", value),
      Failure(error) => write!(f, "Failure({:?})", error),
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn optional_round_trips_through_fallible() {
    assert_eq!(Present(3).to_fallible("missing").to_optional_success(), Present(3));
    assert_eq!(Absent::<i32>.to_fallible("missing").to_optional_success(), Absent);
    assert_eq!(Absent::<i32>.to_fallible("missing").to_optional_failure(), Present("missing"));
  }

  #[test]
  fn to_fallible_with_is_lazy() {
    assert_eq!(Present(1).to_fallible_with(|| -> u16 { panic!("error computed for present value") }), Success(1));
    assert_eq!(Absent::<i32>.to_fallible_with(|| 404), Failure(404));
  }

  #[test]
  fn fallible_to_optional() {
    assert_eq!(Success::<_, ()>(1).to_optional_success(), Present(1));
    assert_eq!(Success::<_, ()>(1).to_optional_failure(), Absent);
    assert_eq!(Failure::<(), _>("bad").to_optional_success(), Absent);
    assert_eq!(Failure::<(), _>("bad").to_optional_failure(), Present("bad"));
  }

  #[test]
  fn std_interop() {
    assert_eq!(Optional::from(Some(1)), Present(1));
    assert_eq!(Optional::<i32>::from(None), Absent);
    assert_eq!(Option::<i32>::from(Present(1)), Some(1));
    assert_eq!(Fallible::from(Ok::<_, ()>(1)), Success(1));
    assert_eq!(Result::<(), i32>::from(Failure(2)), Err(2));
  }

  #[test]
  fn question_mark_through_std_result() {
    fn double(fallible: Fallible<i32, String>) -> Result<i32, String> {
      let value = Result::<i32, String>::from(fallible)?;
      Ok(value * 2)
    }
    assert_eq!(double(Success(2)), Ok(4));
    assert_eq!(double(Failure("no".to_string())), Err("no".to_string()));
  }

  #[test]
  fn display_renders_variant_and_payload() {
    assert_eq!(Present(5).to_string(), "Present(5)");
    assert_eq!(Present("text").to_string(), "Present(\"text\")");
    assert_eq!(Absent::<i32>.to_string(), "Absent");
    assert_eq!(Success::<_, ()>(vec![1, 2]).to_string(), "Success([1, 2])");
    assert_eq!(Failure::<(), _>(430).to_string(), "Failure(430)");
  }
}
