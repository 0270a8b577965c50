use thiserror::Error;

/// The master error type.
///
/// Expected absence is never an error in this crate, it is [Maybe::none](crate::Maybe::none).
/// Every variant here is a broken precondition at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaybeError {
	#[error("Value cannot be null. Parameter name: {0}")]
	InvalidArgument(&'static str),
	#[error("Invalid operation: {0}")]
	InvalidOperation(&'static str),
	#[error("Ambiguous match: {0}")]
	AmbiguousMatch(&'static str),
}

impl MaybeError {
	/// Returns `true` for the precondition kinds ([MaybeError::InvalidArgument] and
	/// [MaybeError::InvalidOperation]), `false` for [MaybeError::AmbiguousMatch].
	pub fn is_precondition(&self) -> bool {
		matches!(self, MaybeError::InvalidArgument(_) | MaybeError::InvalidOperation(_))
	}

	#[inline(always)]
	pub fn ambiguous<T>(msg: &'static str) -> Result<T, Self> {
		Err(MaybeError::AmbiguousMatch(msg))
	}
}

pub type MaybeResult<T> = Result<T, MaybeError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kinds_are_distinguishable() {
		let invalid = MaybeError::InvalidOperation("Option object must have a value.");
		let ambiguous = MaybeError::ambiguous::<()>("The input sequence contains more than one element.");
		assert!(invalid.is_precondition());
		assert!(!ambiguous.clone().unwrap_err().is_precondition());
		assert_ne!(invalid, ambiguous.unwrap_err());
		assert_eq!(
			MaybeError::InvalidArgument("value").to_string(),
			"Value cannot be null. Parameter name: value"
		);
	}
}
