//! Values that carry their own "absent" sentinel.
//!
//! A plain `T` can never be null in Rust, so the sentinel only shows up in a few shapes:
//! [Option::None], a reference to one, or a null raw pointer. [Nullable] names those shapes
//! so that [Maybe](crate::Maybe) can refuse them as a payload.

/// A value that is either present or the absence sentinel of its type.
pub trait Nullable {
	/// The value left over once the sentinel has been ruled out.
	type Present;

	/// Returns the present value, or `None` for the sentinel.
	fn into_present(self) -> Option<Self::Present>;

	fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
	type Present = T;

	#[inline]
	fn into_present(self) -> Option<T> {
		self
	}

	#[inline]
	fn is_null(&self) -> bool {
		self.is_none()
	}
}

impl<'a, T> Nullable for &'a Option<T> {
	type Present = &'a T;

	#[inline]
	fn into_present(self) -> Option<&'a T> {
		self.as_ref()
	}

	#[inline]
	fn is_null(&self) -> bool {
		self.is_none()
	}
}

impl<T> Nullable for *const T {
	type Present = *const T;

	fn into_present(self) -> Option<*const T> {
		(!self.is_null()).then_some(self)
	}

	fn is_null(&self) -> bool {
		<*const T>::is_null(*self)
	}
}

impl<T> Nullable for *mut T {
	type Present = *mut T;

	fn into_present(self) -> Option<*mut T> {
		(!self.is_null()).then_some(self)
	}

	fn is_null(&self) -> bool {
		<*mut T>::is_null(*self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sentinels() {
		assert!(Nullable::is_null(&None::<i32>));
		assert!(!Nullable::is_null(&Some(1)));
		assert_eq!((&Some(3)).into_present(), Some(&3));
		assert_eq!(std::ptr::null::<u8>().into_present(), None);
		let value = 5u8;
		let ptr: *const u8 = &value;
		assert_eq!(ptr.into_present(), Some(ptr));
	}
}
