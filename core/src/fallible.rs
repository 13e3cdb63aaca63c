//! Fallible value: either [`Success`] with a value, or [`Failure`] with an error.
//!
//! Unlike [`Optional`](crate::Optional), a fallible value has no operations that change its variant in place. Every
//! combinator consumes the value and produces a new one.

use std::fmt::Debug;

use crate::fault::AccessFault;
use crate::sequence::{IntoIter, Iter, IterMut};

pub use Fallible::{Failure, Success};

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[must_use = "this `Fallible` may be a `Failure`, which should be handled"]
pub enum Fallible<T, E> {
  Success(T),
  Failure(E),
}

impl<T, E> Fallible<T, E> {
  #[inline]
  pub const fn is_success(&self) -> bool { matches!(self, Success(_)) }
  #[inline]
  pub const fn is_failure(&self) -> bool { !self.is_success() }

  #[inline]
  pub fn is_success_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
    match self {
      Success(value) => predicate(value),
      Failure(_) => false,
    }
  }
  #[inline]
  pub fn is_failure_and(self, predicate: impl FnOnce(E) -> bool) -> bool {
    match self {
      Success(_) => false,
      Failure(error) => predicate(error),
    }
  }


  #[inline]
  pub const fn as_ref(&self) -> Fallible<&T, &E> {
    match self {
      Success(value) => Success(value),
      Failure(error) => Failure(error),
    }
  }

  #[inline]
  pub fn as_mut(&mut self) -> Fallible<&mut T, &mut E> {
    match self {
      Success(value) => Success(value),
      Failure(error) => Failure(error),
    }
  }


  /// Returns the success value.
  ///
  /// # Panics
  ///
  /// Raises [`AccessFault::WrongVariant`] carrying the rendered error if this is a failure.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T where E: Debug {
    match self {
      Success(value) => value,
      Failure(error) => AccessFault::wrong_variant("called `unwrap` on a `Failure` value", &error).raise(),
    }
  }

  /// Returns the error.
  ///
  /// # Panics
  ///
  /// Raises [`AccessFault::WrongVariant`] carrying the rendered value if this is a success.
  #[inline]
  #[track_caller]
  pub fn unwrap_err(self) -> E where T: Debug {
    match self {
      Success(value) => AccessFault::wrong_variant("called `unwrap_err` on a `Success` value", &value).raise(),
      Failure(error) => error,
    }
  }

  /// Returns the success value.
  ///
  /// # Panics
  ///
  /// Raises [`AccessFault::WrongVariant`] with `message` prefixed to the rendered error if this is a failure.
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T where E: Debug {
    match self {
      Success(value) => value,
      Failure(error) => AccessFault::wrong_variant(message, &error).raise(),
    }
  }

  /// Returns the error.
  ///
  /// # Panics
  ///
  /// Raises [`AccessFault::WrongVariant`] with `message` prefixed to the rendered value if this is a success.
  #[inline]
  #[track_caller]
  pub fn expect_err(self, message: &str) -> E where T: Debug {
    match self {
      Success(value) => AccessFault::wrong_variant(message, &value).raise(),
      Failure(error) => error,
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Success(value) => value,
      Failure(_) => default,
    }
  }

  /// Returns the success value, or computes one from the error.
  #[inline]
  pub fn unwrap_or_else(self, default: impl FnOnce(E) -> T) -> T {
    match self {
      Success(value) => value,
      Failure(error) => default(error),
    }
  }

  #[inline]
  pub fn unwrap_or_default(self) -> T where T: Default {
    self.unwrap_or_else(|_| T::default())
  }


  /// Maps the success value with `f`. A failure passes through with the same error.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fallible<U, E> {
    match self {
      Success(value) => Success(f(value)),
      Failure(error) => Failure(error),
    }
  }

  /// Maps the error with `f`. A success passes through with the same value.
  #[inline]
  pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Fallible<T, F> {
    match self {
      Success(value) => Success(value),
      Failure(error) => Failure(f(error)),
    }
  }

  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Success(value) => f(value),
      Failure(_) => default,
    }
  }

  #[inline]
  pub fn map_or_else<U>(self, failure: impl FnOnce(E) -> U, success: impl FnOnce(T) -> U) -> U {
    match self {
      Success(value) => success(value),
      Failure(error) => failure(error),
    }
  }


  #[inline]
  pub fn and<U>(self, other: Fallible<U, E>) -> Fallible<U, E> {
    match self {
      Success(_) => other,
      Failure(error) => Failure(error),
    }
  }

  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Fallible<U, E>) -> Fallible<U, E> {
    match self {
      Success(value) => f(value),
      Failure(error) => Failure(error),
    }
  }

  #[inline]
  pub fn or<F>(self, other: Fallible<T, F>) -> Fallible<T, F> {
    match self {
      Success(value) => Success(value),
      Failure(_) => other,
    }
  }

  #[inline]
  pub fn or_else<F>(self, f: impl FnOnce(E) -> Fallible<T, F>) -> Fallible<T, F> {
    match self {
      Success(value) => Success(value),
      Failure(error) => f(error),
    }
  }


  #[inline]
  pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
    if let Success(value) = &self {
      f(value);
    }
    self
  }

  #[inline]
  pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
    if let Failure(error) = &self {
      f(error);
    }
    self
  }


  /// Sequence of the success value: one element on success, empty on failure. Can be called any number of times, and
  /// the returned sequence can be cloned to restart it.
  #[inline]
  pub fn iter(&self) -> Iter<'_, T> { Iter::new(self.as_ref().success()) }

  #[inline]
  pub fn iter_mut(&mut self) -> IterMut<'_, T> { IterMut::new(self.as_mut().success()) }

  #[inline]
  fn success(self) -> Option<T> {
    match self {
      Success(value) => Some(value),
      Failure(_) => None,
    }
  }
}

impl<T, E> IntoIterator for Fallible<T, E> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { IntoIter::new(self.success()) }
}

impl<'a, T, E> IntoIterator for &'a Fallible<T, E> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T, E> IntoIterator for &'a mut Fallible<T, E> {
  type Item = &'a mut T;
  type IntoIter = IterMut<'a, T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}
