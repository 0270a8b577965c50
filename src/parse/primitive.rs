use crate::util::coreext::*;
use crate::Maybe;

/// Parses `true` or `false`, ignoring ASCII case and surrounding whitespace or NULs.
pub fn parse_boolean(value: &str) -> Maybe<bool> {
	value
		.trim_matches(|c: char| c.is_whitespace() || c == '\0')
		.to_ascii_lowercase()
		.parse::<bool>()
		.maybe_ok()
}

/// Parses a string holding exactly one character.
pub fn parse_char(s: &str) -> Maybe<char> {
	s.parse::<char>().maybe_ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn boolean() {
		assert_eq!(parse_boolean("true"), Maybe::some(true));
		assert_eq!(parse_boolean("FALSE"), Maybe::some(false));
		assert_eq!(parse_boolean(" True \0"), Maybe::some(true));
		assert_eq!(parse_boolean("foo"), Maybe::none());
		assert_eq!(parse_boolean("1"), Maybe::none());
	}

	#[test]
	fn character() {
		assert_eq!(parse_char("a"), Maybe::some('a'));
		assert_eq!(parse_char("\u{3042}"), Maybe::some('\u{3042}'));
		assert_eq!(parse_char("ab"), Maybe::none());
		assert_eq!(parse_char(""), Maybe::none());
	}
}
