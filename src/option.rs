//! The optional value type and its combinators.

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use crate::error::{MaybeError, MaybeResult};
use crate::nullable::Nullable;

/// Zero or one value of type `T`.
///
/// A [Maybe] is created through [Maybe::some] or [Maybe::none] (or one of the conversions built
/// on them) and never changes afterwards. The payload is only reachable through [Maybe::value],
/// which refuses to read it when there is none, or through the combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Maybe<T>(Option<T>);

impl<T> Maybe<T> {
	/// Some value holding `value`.
	#[inline]
	pub const fn some(value: T) -> Self {
		Self(Some(value))
	}

	/// The None value.
	#[inline]
	pub const fn none() -> Self {
		Self(None)
	}

	/// The monad zero. Same value as [Maybe::none] and [Default::default].
	#[inline]
	pub const fn mzero() -> Self {
		Self(None)
	}

	/// Wraps a value that may be the absence sentinel of its type.
	///
	/// Returns [MaybeError::InvalidArgument] if `value` is the sentinel, since a Some holding
	/// "nothing" would be a second, different empty state.
	pub fn try_some<N>(value: N) -> MaybeResult<Self>
	where N: Nullable<Present = T> {
		match value.into_present() {
			Some(present) => Ok(Self::some(present)),
			None => Err(MaybeError::InvalidArgument("value")),
		}
	}

	/// Some if `value` is present, None if it is the sentinel.
	pub fn from_nullable<N>(value: N) -> Self
	where N: Nullable<Present = T> {
		Self(value.into_present())
	}

	#[inline]
	pub const fn has_value(&self) -> bool {
		self.0.is_some()
	}

	/// Gets the payload.
	///
	/// Reading the payload of None is a programming error and returns
	/// [MaybeError::InvalidOperation].
	pub fn value(&self) -> MaybeResult<&T> {
		self.0.as_ref().ok_or(MaybeError::InvalidOperation("Option object must have a value."))
	}

	/// Owning version of [Maybe::value].
	pub fn into_value(self) -> MaybeResult<T> {
		self.0.ok_or(MaybeError::InvalidOperation("Option object must have a value."))
	}

	/// Applies `function` to the payload. `function` is never called on None.
	#[inline]
	pub fn bind<U, F>(self, function: F) -> Maybe<U>
	where F: FnOnce(T) -> Maybe<U> {
		match self.0 {
			Some(value) => function(value),
			None => Maybe::none(),
		}
	}

	/// Same as [Maybe::bind].
	#[inline]
	pub fn select<U, F>(self, function: F) -> Maybe<U>
	where F: FnOnce(T) -> Maybe<U> {
		self.bind(function)
	}

	/// Plain projection of the payload.
	#[inline]
	pub fn map<U, F>(self, function: F) -> Maybe<U>
	where F: FnOnce(T) -> U {
		Maybe(self.0.map(function))
	}

	/// Binds `other_selector`, then combines both payloads with `result_selector`.
	///
	/// Some only if the source and the bound value are both Some.
	pub fn select_many<O, R, S, F>(self, other_selector: S, result_selector: F) -> Maybe<R>
	where
	T: Clone,
	S: FnOnce(T) -> Maybe<O>,
	F: FnOnce(T, O) -> R {
		self.select_many_nullable(other_selector, |source, other| Some(result_selector(source, other)))
	}

	/// Like [Maybe::select_many], but the result selector may produce the absence sentinel,
	/// which turns into None.
	pub fn select_many_nullable<O, N, S, F>(self, other_selector: S, result_selector: F) -> Maybe<N::Present>
	where
	T: Clone,
	N: Nullable,
	S: FnOnce(T) -> Maybe<O>,
	F: FnOnce(T, O) -> N {
		let source = match self.0 {
			Some(source) => source,
			None => return Maybe::none(),
		};
		let other = Maybe::some(source.clone()).bind(other_selector);
		match other.0 {
			Some(other) => Maybe::from_nullable(result_selector(source, other)),
			None => Maybe::none(),
		}
	}

	/// Returns `self` if it is Some, otherwise `other`.
	#[inline]
	pub fn mplus(self, other: Self) -> Self {
		if self.has_value() {
			self
		} else {
			other
		}
	}

	/// Same as [Maybe::mplus].
	#[inline]
	pub fn or(self, other: Self) -> Self {
		self.mplus(other)
	}

	/// Lazy version of [Maybe::or]. `other` runs only when `self` is None.
	#[inline]
	pub fn or_else_with<F>(self, other: F) -> Self
	where F: FnOnce() -> Self {
		if self.has_value() {
			self
		} else {
			other()
		}
	}

	/// The payload if Some, otherwise `fallback`.
	#[inline]
	pub fn or_value(self, fallback: T) -> T {
		self.0.unwrap_or(fallback)
	}

	/// Borrows the payload.
	#[inline]
	pub const fn as_ref(&self) -> Maybe<&T> {
		match &self.0 {
			Some(value) => Maybe(Some(value)),
			None => Maybe(None),
		}
	}

	/// Iterates over the payload (zero or one item).
	pub fn iter(&self) -> std::option::Iter<'_, T> {
		self.0.iter()
	}

	/// Converts to the standard library's optional type.
	#[inline]
	pub fn to_nullable(self) -> Option<T> {
		self.0
	}
}

impl<N: Nullable> Maybe<N> {
	/// Collapses a payload that is itself the absence sentinel into None.
	pub fn present(self) -> Maybe<N::Present> {
		self.bind(Maybe::from_nullable)
	}
}

impl<T> Default for Maybe<T> {
	fn default() -> Self {
		Self::mzero()
	}
}

impl<T: Hash> Hash for Maybe<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		match &self.0 {
			Some(value) => value.hash(state),
			None => 0u64.hash(state),
		}
	}
}

impl<T: Display> Display for Maybe<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.0 {
			Some(value) => write!(f, "Some({value})"),
			None => f.write_str("None"),
		}
	}
}

impl<T> From<Option<T>> for Maybe<T> {
	#[inline]
	fn from(value: Option<T>) -> Self {
		Self(value)
	}
}

impl<T> From<Maybe<T>> for Option<T> {
	#[inline]
	fn from(value: Maybe<T>) -> Self {
		value.0
	}
}

impl<T> IntoIterator for Maybe<T> {
	type Item = T;
	type IntoIter = std::option::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
	type Item = &'a T;
	type IntoIter = std::option::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
