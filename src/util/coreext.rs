//! Extensions to Rust core stuff, like Result and Option.
//! These are the bridges every adapter uses to land in [Maybe].

use std::fmt::Debug;

use crate::Maybe;

pub trait ResultExtension<T> {
	/// Turns a failed try-operation into None, tracing what was thrown away.
	fn maybe_ok(self) -> Maybe<T>;
}

impl<T, E: Debug> ResultExtension<T> for Result<T, E> {
	fn maybe_ok(self) -> Maybe<T> {
		match self {
			Ok(value) => Maybe::some(value),
			Err(err) => {
				tracing::trace!(target: "maybe::adapter", error = ?err, "try-operation failed");
				Maybe::none()
			}
		}
	}
}

pub trait OptionExtension<T> {
	fn into_maybe(self) -> Maybe<T>;
}

impl<T> OptionExtension<T> for Option<T> {
	#[inline]
	fn into_maybe(self) -> Maybe<T> {
		Maybe::from(self)
	}
}
