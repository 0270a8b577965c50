//! Style flags accepted by the parsing adapters.

use bitflags::bitflags;

bitflags! {
	/// Which elements may appear in a numeric literal.
	#[derive(Default)]
	pub struct NumberStyles: u32 {
		const NONE = 0;
		const ALLOW_LEADING_WHITE = 1 << 0;
		const ALLOW_TRAILING_WHITE = 1 << 1;
		const ALLOW_LEADING_SIGN = 1 << 2;
		const ALLOW_TRAILING_SIGN = 1 << 3;
		const ALLOW_PARENTHESES = 1 << 4;
		const ALLOW_DECIMAL_POINT = 1 << 5;
		const ALLOW_THOUSANDS = 1 << 6;
		const ALLOW_EXPONENT = 1 << 7;
		const ALLOW_CURRENCY_SYMBOL = 1 << 8;
		const ALLOW_HEX_SPECIFIER = 1 << 9;

		const INTEGER = Self::ALLOW_LEADING_WHITE.bits
			| Self::ALLOW_TRAILING_WHITE.bits
			| Self::ALLOW_LEADING_SIGN.bits;
		const HEX_NUMBER = Self::ALLOW_LEADING_WHITE.bits
			| Self::ALLOW_TRAILING_WHITE.bits
			| Self::ALLOW_HEX_SPECIFIER.bits;
		const NUMBER = Self::INTEGER.bits
			| Self::ALLOW_TRAILING_SIGN.bits
			| Self::ALLOW_DECIMAL_POINT.bits
			| Self::ALLOW_THOUSANDS.bits;
		const FLOAT = Self::INTEGER.bits
			| Self::ALLOW_DECIMAL_POINT.bits
			| Self::ALLOW_EXPONENT.bits;
		const CURRENCY = Self::NUMBER.bits
			| Self::ALLOW_PARENTHESES.bits
			| Self::ALLOW_CURRENCY_SYMBOL.bits;
		const ANY = Self::CURRENCY.bits
			| Self::ALLOW_EXPONENT.bits;
	}
}

bitflags! {
	/// How date and time text is interpreted.
	#[derive(Default)]
	pub struct DateTimeStyles: u32 {
		const NONE = 0;
		const ALLOW_LEADING_WHITE = 1 << 0;
		const ALLOW_TRAILING_WHITE = 1 << 1;
		const ALLOW_INNER_WHITE = 1 << 2;
		/// Time-only text is dated 0001-01-01 instead of today.
		const NO_CURRENT_DATE_DEFAULT = 1 << 3;
		/// Converts the result to UTC. Only changes anything together with `ASSUME_LOCAL`,
		/// text carrying an offset is always normalized to UTC.
		const ADJUST_TO_UNIVERSAL = 1 << 4;
		const ASSUME_LOCAL = 1 << 5;
		const ASSUME_UNIVERSAL = 1 << 6;

		const ALLOW_WHITE_SPACES = Self::ALLOW_LEADING_WHITE.bits
			| Self::ALLOW_TRAILING_WHITE.bits
			| Self::ALLOW_INNER_WHITE.bits;
	}
}

bitflags! {
	/// How time interval text is interpreted by the exact parsers.
	#[derive(Default)]
	pub struct TimeSpanStyles: u32 {
		const NONE = 0;
		/// Negates what a custom format parsed.
		const ASSUME_NEGATIVE = 1 << 0;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn composites() {
		assert!(NumberStyles::NUMBER.contains(NumberStyles::INTEGER));
		assert!(NumberStyles::ANY.contains(NumberStyles::FLOAT));
		assert!(!NumberStyles::ANY.contains(NumberStyles::ALLOW_HEX_SPECIFIER));
		assert!(DateTimeStyles::ALLOW_WHITE_SPACES.contains(DateTimeStyles::ALLOW_INNER_WHITE));
		assert_eq!(TimeSpanStyles::default(), TimeSpanStyles::NONE);
	}
}
