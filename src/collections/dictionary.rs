use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::nullable::Nullable;
use crate::Maybe;

/// A map that can be asked for the value stored under a key.
pub trait Dictionary<Q: ?Sized> {
	type Value;

	fn try_get_value(&self, key: &Q) -> Option<&Self::Value>;
}

impl<K, V, Q, S> Dictionary<Q> for HashMap<K, V, S>
where
	K: Borrow<Q> + Hash + Eq,
	Q: Hash + Eq + ?Sized,
	S: BuildHasher,
{
	type Value = V;

	#[inline]
	fn try_get_value(&self, key: &Q) -> Option<&V> {
		self.get(key)
	}
}

impl<K, V, Q> Dictionary<Q> for BTreeMap<K, V>
where
	K: Borrow<Q> + Ord,
	Q: Ord + ?Sized,
{
	type Value = V;

	#[inline]
	fn try_get_value(&self, key: &Q) -> Option<&V> {
		self.get(key)
	}
}

#[cfg(feature = "preserve_order")]
impl<K, V, Q, S> Dictionary<Q> for indexmap::IndexMap<K, V, S>
where
	K: Hash + Eq,
	Q: Hash + indexmap::Equivalent<K> + ?Sized,
	S: BuildHasher,
{
	type Value = V;

	#[inline]
	fn try_get_value(&self, key: &Q) -> Option<&V> {
		self.get(key)
	}
}

/// Looks `key` up in `dict`.
pub fn get_value<'a, D, Q>(dict: &'a D, key: &Q) -> Maybe<&'a D::Value>
where
	D: Dictionary<Q> + ?Sized,
	Q: ?Sized,
{
	match dict.try_get_value(key) {
		Some(value) => Maybe::some(value),
		None => {
			tracing::trace!(target: "maybe::collections", "key not found");
			Maybe::none()
		}
	}
}

pub trait DictionaryExt<Q: ?Sized>: Dictionary<Q> {
	/// Returns the value stored under `key`, or None if the key is missing.
	///
	/// A stored `None` comes back as `Some(&None)`. Use
	/// [maybe_get_present_value](DictionaryExt::maybe_get_present_value) or
	/// [present](crate::Maybe::present) to read it as missing.
	fn maybe_get_value(&self, key: &Q) -> Maybe<&Self::Value> {
		get_value(self, key)
	}

	/// Like [DictionaryExt::maybe_get_value], but a stored sentinel (such as `None`) is
	/// reported as missing too.
	fn maybe_get_present_value<'a>(&'a self, key: &Q) -> Maybe<<&'a Self::Value as Nullable>::Present>
	where
		&'a Self::Value: Nullable,
	{
		self.maybe_get_value(key).present()
	}
}

impl<Q: ?Sized, D: Dictionary<Q> + ?Sized> DictionaryExt<Q> for D {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hash_map() {
		let mut dict = HashMap::new();
		dict.insert("foo".to_owned(), 1);
		assert_eq!(dict.maybe_get_value("foo"), Maybe::some(&1));
		assert_eq!(dict.maybe_get_value("missing"), Maybe::none());
		assert_eq!(get_value(&dict, "foo").map(|x| x + 1), Maybe::some(2));
	}

	#[test]
	fn absent_values_read_as_none() {
		let dict: BTreeMap<&str, Option<i32>> = [("foo", None), ("bar", Some(2))].into_iter().collect();
		assert_eq!(dict.maybe_get_present_value("foo"), Maybe::none());
		assert_eq!(dict.maybe_get_present_value("missing"), Maybe::none());
		assert_eq!(dict.maybe_get_present_value("bar"), Maybe::some(&2));
		// The stored value itself is still reachable.
		assert_eq!(dict.maybe_get_value("foo"), Maybe::some(&None));
		assert_eq!(dict.maybe_get_value("foo").present(), Maybe::none());
	}

	#[cfg(feature = "preserve_order")]
	#[test]
	fn index_map() {
		let mut dict = indexmap::IndexMap::new();
		dict.insert("foo".to_owned(), Some(1));
		dict.insert("bar".to_owned(), None);
		assert_eq!(dict.maybe_get_present_value("foo"), Maybe::some(&1));
		assert_eq!(dict.maybe_get_present_value("bar"), Maybe::none());
		assert_eq!(dict.maybe_get_value("baz"), Maybe::none());
	}
}
