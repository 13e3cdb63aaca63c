//! Sequences of at most one element, produced by iterating over an [`Optional`](crate::Optional) or
//! [`Fallible`](crate::Fallible).
//!
//! These are plain values: [`Iter`] can be cloned to restart the sequence from the beginning. They hold the element
//! in a plain `Option`, so neither container depends on the other to be iterated.

use std::iter::FusedIterator;

/// Sequence of a reference to the held value, if any.
#[derive(Debug)]
pub struct Iter<'a, T> {
  inner: Option<&'a T>,
}
impl<'a, T> Iter<'a, T> {
  #[inline]
  pub(crate) fn new(inner: Option<&'a T>) -> Self { Self { inner } }
}
impl<T> Clone for Iter<'_, T> {
  #[inline]
  fn clone(&self) -> Self { Self { inner: self.inner } }
}
impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline]
  fn next(&mut self) -> Option<&'a T> { self.inner.take() }
  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) { size_hint(self.inner.is_some()) }
}
impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
  #[inline]
  fn next_back(&mut self) -> Option<&'a T> { self.next() }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Sequence of a mutable reference to the held value, if any.
#[derive(Debug)]
pub struct IterMut<'a, T> {
  inner: Option<&'a mut T>,
}
impl<'a, T> IterMut<'a, T> {
  #[inline]
  pub(crate) fn new(inner: Option<&'a mut T>) -> Self { Self { inner } }
}
impl<'a, T> Iterator for IterMut<'a, T> {
  type Item = &'a mut T;

  #[inline]
  fn next(&mut self) -> Option<&'a mut T> { self.inner.take() }
  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) { size_hint(self.inner.is_some()) }
}
impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
  #[inline]
  fn next_back(&mut self) -> Option<&'a mut T> { self.next() }
}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Sequence of the held value, if any, taken by value.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
  inner: Option<T>,
}
impl<T> IntoIter<T> {
  #[inline]
  pub(crate) fn new(inner: Option<T>) -> Self { Self { inner } }
}
impl<T> Iterator for IntoIter<T> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> Option<T> { self.inner.take() }
  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) { size_hint(self.inner.is_some()) }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
  #[inline]
  fn next_back(&mut self) -> Option<T> { self.next() }
}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

#[inline]
fn size_hint(present: bool) -> (usize, Option<usize>) {
  let len = if present { 1 } else { 0 };
  (len, Some(len))
}


#[cfg(test)]
mod tests {
  use crate::fallible::{Failure, Fallible, Success};
  use crate::optional::{Absent, Present};

  #[test]
  fn length_is_zero_or_one() {
    assert_eq!(Present(1).iter().len(), 1);
    assert_eq!(Absent::<i32>.iter().len(), 0);
    assert_eq!(Present(1).into_iter().len(), 1);
  }

  #[test]
  fn exhausted_sequence_stays_exhausted() {
    let optional = Present(1);
    let mut iter = optional.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.len(), 0);
  }

  #[test]
  fn cloned_sequence_restarts() {
    let optional = Present("value");
    let iter = optional.iter();
    assert_eq!(iter.clone().collect::<Vec<_>>(), vec![&"value"]);
    assert_eq!(iter.clone().collect::<Vec<_>>(), vec![&"value"]);
    assert_eq!(iter.rev().count(), 1);
  }

  #[test]
  fn fallible_sequence_follows_success() {
    let success: Fallible<i32, &str> = Success(2);
    let failure: Fallible<i32, &str> = Failure("e");
    assert_eq!(success.iter().len(), 1);
    assert_eq!(failure.iter().len(), 0);
    assert_eq!(success.into_iter().next_back(), Some(2));
    assert_eq!(failure.into_iter().next(), None);
  }
}
