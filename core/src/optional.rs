//! Optional value: either [`Present`] with a value, or [`Absent`].
//!
//! The variant of an optional only changes through the `&mut self` operations [`insert`](Optional::insert),
//! [`get_or_insert`](Optional::get_or_insert), [`get_or_insert_with`](Optional::get_or_insert_with),
//! [`take`](Optional::take), [`take_if`](Optional::take_if), and [`replace`](Optional::replace). Each of them moves the
//! old value out of the slot and stores the new one. Because they require exclusive access, a reference that was
//! narrowed to a variant (for example a `&T` obtained through [`as_ref`](Optional::as_ref)) cannot outlive the
//! mutation: code must re-query the variant afterwards. An optional has a single writer at any time; no locking is
//! done.

use std::mem;

use crate::fault::AccessFault;
use crate::sequence::{IntoIter, Iter, IterMut};

pub use Optional::{Absent, Present};

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Optional<T> {
  Present(T),
  Absent,
}

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Absent }
}

impl<T> Optional<T> {
  #[inline]
  pub const fn is_present(&self) -> bool { matches!(self, Present(_)) }
  #[inline]
  pub const fn is_absent(&self) -> bool { !self.is_present() }

  /// Returns `true` if present and `predicate` holds for the value. `predicate` is not called when absent.
  #[inline]
  pub fn is_present_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
    match self {
      Present(value) => predicate(value),
      Absent => false,
    }
  }


  #[inline]
  pub const fn as_ref(&self) -> Optional<&T> {
    match self {
      Present(value) => Present(value),
      Absent => Absent,
    }
  }

  #[inline]
  pub fn as_mut(&mut self) -> Optional<&mut T> {
    match self {
      Present(value) => Present(value),
      Absent => Absent,
    }
  }


  /// Returns the present value.
  ///
  /// # Panics
  ///
  /// Raises [`AccessFault::EmptyValue`] if absent.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Present(value) => value,
      Absent => AccessFault::EmptyValue.raise(),
    }
  }

  /// Returns the present value.
  ///
  /// # Panics
  ///
  /// Raises [`AccessFault::WrongVariant`] carrying `message` if absent.
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self {
      Present(value) => value,
      Absent => AccessFault::WrongVariant(message.to_string()).raise(),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Present(value) => value,
      Absent => default,
    }
  }

  #[inline]
  pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
    match self {
      Present(value) => value,
      Absent => default(),
    }
  }

  #[inline]
  pub fn unwrap_or_default(self) -> T where T: Default {
    self.unwrap_or_else(T::default)
  }


  /// Maps the present value with `f`, keeping an absent optional absent.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
    match self {
      Present(value) => Present(f(value)),
      Absent => Absent,
    }
  }

  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Present(value) => f(value),
      Absent => default,
    }
  }

  #[inline]
  pub fn map_or_else<U>(self, absent: impl FnOnce() -> U, present: impl FnOnce(T) -> U) -> U {
    match self {
      Present(value) => present(value),
      Absent => absent(),
    }
  }

  /// Keeps the value only if `predicate` holds for it.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    if let Present(value) = self {
      if predicate(&value) {
        return Present(value);
      }
    }
    Absent
  }


  #[inline]
  pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
    match self {
      Present(_) => other,
      Absent => Absent,
    }
  }

  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
    match self {
      Present(value) => f(value),
      Absent => Absent,
    }
  }

  #[inline]
  pub fn or(self, other: Self) -> Self {
    match self {
      Present(_) => self,
      Absent => other,
    }
  }

  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
    match self {
      Present(_) => self,
      Absent => f(),
    }
  }

  /// Returns whichever of `self` and `other` is present if exactly one of them is, otherwise [`Absent`].
  #[inline]
  pub fn xor(self, other: Self) -> Self {
    match (self, other) {
      (present @ Present(_), Absent) | (Absent, present @ Present(_)) => present,
      _ => Absent,
    }
  }


  /// Stores `value`, dropping any previous value, and returns a mutable reference to it.
  #[inline]
  pub fn insert(&mut self, value: T) -> &mut T {
    *self = Present(value);
    match self {
      Present(value) => value,
      Absent => unreachable!("optional was just made present"),
    }
  }

  /// Stores `value` if absent. Returns a mutable reference to the held value; an existing value is left unchanged.
  #[inline]
  pub fn get_or_insert(&mut self, value: T) -> &mut T {
    self.get_or_insert_with(|| value)
  }

  #[inline]
  pub fn get_or_insert_with(&mut self, f: impl FnOnce() -> T) -> &mut T {
    if let Absent = self {
      *self = Present(f());
    }
    match self {
      Present(value) => value,
      Absent => unreachable!("optional was just made present"),
    }
  }

  /// Moves the value out, leaving [`Absent`] in its place. Taking from an absent optional returns [`Absent`].
  #[inline]
  pub fn take(&mut self) -> Self {
    mem::take(self)
  }

  /// [Takes](Self::take) the value only if `predicate` holds for it. Otherwise `self` is left untouched and [`Absent`]
  /// is returned.
  #[inline]
  pub fn take_if(&mut self, predicate: impl FnOnce(&T) -> bool) -> Self {
    if self.as_ref().is_present_and(predicate) {
      self.take()
    } else {
      Absent
    }
  }

  /// Stores `value` and returns the previous state.
  #[inline]
  pub fn replace(&mut self, value: T) -> Self {
    mem::replace(self, Present(value))
  }


  /// Calls `f` with a reference to the value if present, then returns `self` unchanged.
  #[inline]
  pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
    if let Present(value) = &self {
      f(value);
    }
    self
  }


  #[inline]
  pub fn iter(&self) -> Iter<'_, T> { Iter::new(self.as_ref().into()) }

  #[inline]
  pub fn iter_mut(&mut self) -> IterMut<'_, T> { IterMut::new(self.as_mut().into()) }
}

impl<T> IntoIterator for Optional<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { IntoIter::new(self.into()) }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut Optional<T> {
  type Item = &'a mut T;
  type IntoIter = IterMut<'a, T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}
