//! Element access over sequences.
//!
//! [SliceExt] reads slices by index. [IteratorExt] works on any iterator in a single pass,
//! leaning on `nth`, `last` and `size_hint`, which indexable iterators answer without walking.

use crate::error::{MaybeError, MaybeResult};
use crate::util::coreext::*;
use crate::Maybe;

const MORE_THAN_ONE_ELEMENT: &str = "The input sequence contains more than one element.";
const MORE_THAN_ONE_MATCH: &str = "The input sequence contains more than one matching element.";

fn ambiguous<T>(msg: &'static str) -> MaybeResult<T> {
	tracing::debug!(target: "maybe::collections", "{msg}");
	MaybeError::ambiguous(msg)
}

pub trait IteratorExt: Iterator + Sized {
	/// Returns the element at `index`. Negative indices are out of range.
	///
	/// For `Option` elements, [present](crate::Maybe::present) turns a `None` element into None.
	fn element_at_or_none(mut self, index: isize) -> Maybe<Self::Item> {
		usize::try_from(index)
			.ok()
			.and_then(|index| self.nth(index))
			.into_maybe()
	}

	/// Returns the first element.
	///
	/// For `Option` elements, [present](crate::Maybe::present) turns a `None` element into None.
	fn first_or_none(mut self) -> Maybe<Self::Item> {
		self.next().into_maybe()
	}

	fn first_or_none_by<P>(mut self, predicate: P) -> Maybe<Self::Item>
	where
		P: FnMut(&Self::Item) -> bool,
	{
		self.find(predicate).into_maybe()
	}

	/// Returns the last element.
	///
	/// For `Option` elements, [present](crate::Maybe::present) turns a `None` element into None.
	fn last_or_none(self) -> Maybe<Self::Item> {
		self.last().into_maybe()
	}

	fn last_or_none_by<P>(self, mut predicate: P) -> Maybe<Self::Item>
	where
		P: FnMut(&Self::Item) -> bool,
	{
		self.fold(None, |last, item| if predicate(&item) { Some(item) } else { last })
			.into_maybe()
	}

	/// Returns the only element, None for an empty sequence, or
	/// [MaybeError::AmbiguousMatch] when there is more than one.
	///
	/// For `Option` elements, [present](crate::Maybe::present) turns a `None` element into None.
	fn single_or_none(mut self) -> MaybeResult<Maybe<Self::Item>> {
		match self.size_hint() {
			(_, Some(0)) => return Ok(Maybe::none()),
			(lower, _) if lower > 1 => return ambiguous(MORE_THAN_ONE_ELEMENT),
			_ => (),
		}
		let Some(first) = self.next() else {
			return Ok(Maybe::none());
		};
		match self.next() {
			Some(_) => ambiguous(MORE_THAN_ONE_ELEMENT),
			None => Ok(Maybe::some(first)),
		}
	}

	/// Returns the only element matching `predicate`. Stops at the second match.
	fn single_or_none_by<P>(mut self, mut predicate: P) -> MaybeResult<Maybe<Self::Item>>
	where
		P: FnMut(&Self::Item) -> bool,
	{
		let Some(found) = self.find(&mut predicate) else {
			return Ok(Maybe::none());
		};
		match self.find(&mut predicate) {
			Some(_) => ambiguous(MORE_THAN_ONE_MATCH),
			None => Ok(Maybe::some(found)),
		}
	}
}

impl<I: Iterator> IteratorExt for I {}

/// Slice versions of [IteratorExt], reading by index. Same rules for `Option` elements: call
/// [present](crate::Maybe::present) on the result to collapse a `None` element.
pub trait SliceExt<T> {
	fn element_at_or_none(&self, index: isize) -> Maybe<&T>;
	fn first_or_none(&self) -> Maybe<&T>;
	fn first_or_none_by<P: FnMut(&T) -> bool>(&self, predicate: P) -> Maybe<&T>;
	fn last_or_none(&self) -> Maybe<&T>;
	fn last_or_none_by<P: FnMut(&T) -> bool>(&self, predicate: P) -> Maybe<&T>;
	fn single_or_none(&self) -> MaybeResult<Maybe<&T>>;
	fn single_or_none_by<P: FnMut(&T) -> bool>(&self, predicate: P) -> MaybeResult<Maybe<&T>>;
}

impl<T> SliceExt<T> for [T] {
	#[inline]
	fn element_at_or_none(&self, index: isize) -> Maybe<&T> {
		usize::try_from(index)
			.ok()
			.and_then(|index| self.get(index))
			.into_maybe()
	}

	#[inline]
	fn first_or_none(&self) -> Maybe<&T> {
		self.first().into_maybe()
	}

	fn first_or_none_by<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Maybe<&T> {
		self.iter().find(|item| predicate(*item)).into_maybe()
	}

	#[inline]
	fn last_or_none(&self) -> Maybe<&T> {
		self.last().into_maybe()
	}

	/// Walks backwards from the end, so only the tail past the last match is visited.
	fn last_or_none_by<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Maybe<&T> {
		self.iter().rev().find(|item| predicate(*item)).into_maybe()
	}

	fn single_or_none(&self) -> MaybeResult<Maybe<&T>> {
		match self {
			[] => Ok(Maybe::none()),
			[only] => Ok(Maybe::some(only)),
			_ => ambiguous(MORE_THAN_ONE_ELEMENT),
		}
	}

	fn single_or_none_by<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> MaybeResult<Maybe<&T>> {
		self.iter().single_or_none_by(|item| predicate(*item))
	}
}
