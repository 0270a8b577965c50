//! Numeric parsing adapters.
//!
//! One generic implementation, [parse_number_with], covers every numeric type. The text is first
//! reduced to a canonical literal according to the [NumberStyles] and [Culture], then handed to
//! the type's own parser. The named adapters (`parse_int32` and friends) are thin instantiations.

use num_traits::Num;
use rust_decimal::Decimal;

use crate::culture::Culture;
use crate::styles::NumberStyles;
use crate::util::coreext::*;
use crate::Maybe;

/// A numeric type the parsing adapters can produce.
pub trait ParseNumber: Num + Sized {
	/// Styles used by the overloads that don't take any.
	const DEFAULT_STYLES: NumberStyles;
	/// Integral types reject fractional digits and accept hexadecimal.
	const INTEGRAL: bool;

	/// Parses a canonical literal: an optional `-`, ASCII digits, an optional `.` fraction and an
	/// optional `e` exponent (the last two only for non-integral types).
	fn from_canonical(text: &str, radix: u32) -> Option<Self> {
		Self::from_str_radix(text, radix).ok()
	}

	/// Culture symbols that stand for a value on their own, like `NaN`.
	fn from_symbol(_text: &str, _styles: NumberStyles, _culture: &Culture) -> Option<Self> {
		None
	}
}

macro_rules! __parse_number_int_impls {
	($type:ty) => {
		impl ParseNumber for $type {
			const DEFAULT_STYLES: NumberStyles = NumberStyles::INTEGER;
			const INTEGRAL: bool = true;
		}
	};
}

crate::for_each_int_type!(__parse_number_int_impls);

macro_rules! __parse_number_float_impls {
	($type:ty) => {
		impl ParseNumber for $type {
			const DEFAULT_STYLES: NumberStyles = NumberStyles::from_bits_truncate(
				NumberStyles::FLOAT.bits() | NumberStyles::ALLOW_THOUSANDS.bits()
			);
			const INTEGRAL: bool = false;

			fn from_canonical(text: &str, _radix: u32) -> Option<Self> {
				text.parse().ok()
			}

			/// Symbols are only read where a fractional literal would be.
			fn from_symbol(text: &str, styles: NumberStyles, culture: &Culture) -> Option<Self> {
				if !styles.intersects(NumberStyles::ALLOW_DECIMAL_POINT | NumberStyles::ALLOW_EXPONENT) {
					return None;
				}
				if text.eq_ignore_ascii_case(&culture.nan_symbol) {
					Some(<$type>::NAN)
				} else if text.eq_ignore_ascii_case(&culture.positive_infinity_symbol) {
					Some(<$type>::INFINITY)
				} else if styles.contains(NumberStyles::ALLOW_LEADING_SIGN)
				&& text.eq_ignore_ascii_case(&culture.negative_infinity_symbol) {
					Some(<$type>::NEG_INFINITY)
				} else {
					None
				}
			}
		}
	};
}

__parse_number_float_impls!(f32);
__parse_number_float_impls!(f64);

impl ParseNumber for Decimal {
	const DEFAULT_STYLES: NumberStyles = NumberStyles::NUMBER;
	const INTEGRAL: bool = false;

	fn from_canonical(text: &str, radix: u32) -> Option<Self> {
		if radix != 10 {
			return Decimal::from_str_radix(text, radix).ok();
		}
		if text.contains('e') {
			Decimal::from_scientific(text).ok()
		} else {
			text.parse().ok()
		}
	}
}

/// Parses `s` with the type's default styles and the invariant culture.
pub fn parse_number<N: ParseNumber>(s: &str) -> Maybe<N> {
	parse_number_with(s, N::DEFAULT_STYLES, &Culture::invariant())
}

/// Parses `s` as an `N`, allowing only what `styles` permits, with the symbols of `culture`.
pub fn parse_number_with<N: ParseNumber>(s: &str, styles: NumberStyles, culture: &Culture) -> Maybe<N> {
	let trimmed = trim_white(s, styles);
	if let Some(value) = N::from_symbol(trimmed, styles, culture) {
		return Maybe::some(value);
	}
	canonicalize(trimmed, styles, culture, N::INTEGRAL)
		.ok_or(s)
		.maybe_ok()
		.bind(|(text, radix)| {
			N::from_canonical(&text, radix)
				.ok_or(text)
				.maybe_ok()
		})
}

fn trim_white(s: &str, styles: NumberStyles) -> &str {
	let mut s = s;
	if styles.contains(NumberStyles::ALLOW_LEADING_WHITE) {
		s = s.trim_start();
	}
	if styles.contains(NumberStyles::ALLOW_TRAILING_WHITE) {
		s = s.trim_end();
	}
	s
}

fn strip_prefix(s: &mut &str, prefix: &str) -> bool {
	if prefix.is_empty() {
		return false;
	}
	match (*s).strip_prefix(prefix) {
		Some(rest) => {
			*s = rest;
			true
		}
		None => false,
	}
}

fn strip_suffix(s: &mut &str, suffix: &str) -> bool {
	if suffix.is_empty() {
		return false;
	}
	match (*s).strip_suffix(suffix) {
		Some(rest) => {
			*s = rest;
			true
		}
		None => false,
	}
}

fn all_digits(s: &str) -> bool {
	s.bytes().all(|b| b.is_ascii_digit())
}

fn all_zeros(s: &str) -> bool {
	s.bytes().all(|b| b == b'0')
}

/// Reduces `s` to a literal `from_canonical` understands, along with its radix.
fn canonicalize(s: &str, styles: NumberStyles, culture: &Culture, integral: bool) -> Option<(String, u32)> {
	if styles.contains(NumberStyles::ALLOW_HEX_SPECIFIER) {
		if !integral || s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
			return None;
		}
		return Some((s.to_owned(), 16));
	}

	let mut body = s;
	let mut negative = false;
	let mut signed = false;
	let currency = styles.contains(NumberStyles::ALLOW_CURRENCY_SYMBOL);

	if styles.contains(NumberStyles::ALLOW_PARENTHESES) && body.starts_with('(') && body.ends_with(')') && body.len() >= 2 {
		body = &body[1..body.len() - 1];
		negative = true;
		signed = true;
	}
	if currency {
		strip_prefix(&mut body, &culture.currency_symbol);
	}
	if styles.contains(NumberStyles::ALLOW_LEADING_SIGN) && !signed {
		if strip_prefix(&mut body, &culture.negative_sign) {
			negative = true;
			signed = true;
		} else if strip_prefix(&mut body, &culture.positive_sign) {
			signed = true;
		}
	}
	if currency {
		strip_prefix(&mut body, &culture.currency_symbol);
		strip_suffix(&mut body, &culture.currency_symbol);
	}
	if styles.contains(NumberStyles::ALLOW_TRAILING_SIGN) && !signed {
		if strip_suffix(&mut body, &culture.negative_sign) {
			negative = true;
		} else {
			strip_suffix(&mut body, &culture.positive_sign);
		}
	}
	if currency {
		strip_suffix(&mut body, &culture.currency_symbol);
	}

	let (mantissa, exponent) = match styles.contains(NumberStyles::ALLOW_EXPONENT) {
		true => match body.find(['e', 'E']) {
			Some(at) => (&body[..at], Some(&body[at + 1..])),
			None => (body, None),
		},
		false => (body, None),
	};
	let (whole, fraction) = match styles.contains(NumberStyles::ALLOW_DECIMAL_POINT) {
		true => match mantissa.split_once(culture.decimal_separator.as_str()) {
			Some((whole, fraction)) => (whole, fraction),
			None => (mantissa, ""),
		},
		false => (mantissa, ""),
	};

	let whole = if styles.contains(NumberStyles::ALLOW_THOUSANDS) && !culture.group_separator.is_empty() {
		if whole.starts_with(culture.group_separator.as_str()) {
			return None;
		}
		whole.replace(culture.group_separator.as_str(), "")
	} else {
		whole.to_owned()
	};
	if !all_digits(&whole) || !all_digits(fraction) || (whole.is_empty() && fraction.is_empty()) {
		return None;
	}

	let exponent = match exponent {
		Some(text) => {
			let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
			if digits.is_empty() || !all_digits(digits) {
				return None;
			}
			// too many digits for an i32 saturates, floats turn that into infinity or zero
			let saturated = if text.starts_with('-') { i32::MIN } else { i32::MAX };
			Some(text.parse::<i32>().unwrap_or(saturated))
		}
		None => None,
	};

	let mut digits = if whole.is_empty() { "0".to_owned() } else { whole };
	if integral && all_zeros(&digits) && all_zeros(fraction) {
		digits = "0".to_owned();
	} else if integral {
		// value = digits.fraction * 10^exponent, which must land on a whole number
		let fraction = fraction.trim_end_matches('0');
		digits.push_str(fraction);
		let scale = i64::from(exponent.unwrap_or(0)) - fraction.len() as i64;
		if scale > 64 {
			return None;
		} else if scale > 0 {
			digits.extend(std::iter::repeat('0').take(scale as usize));
		} else if scale < 0 {
			let keep = digits.len().saturating_sub(scale.unsigned_abs() as usize);
			if !digits[keep..].bytes().all(|b| b == b'0') {
				return None;
			}
			digits.truncate(keep);
			if digits.is_empty() {
				digits.push('0');
			}
		}
	} else {
		if !fraction.is_empty() {
			digits.push('.');
			digits.push_str(fraction);
		}
		if let Some(exponent) = exponent {
			digits.push('e');
			digits.push_str(&exponent.to_string());
		}
	}

	if negative && !digits.bytes().all(|b| b == b'0' || b == b'.') {
		digits.insert(0, '-');
	}
	Some((digits, 10))
}

/// Generates the named adapter pair for each numeric type.
macro_rules! parse_adapters {
	($($name:ident, $with:ident => $type:ty;)+) => {
		$(
			#[doc = concat!("Parses a `", stringify!($type), "` with its default styles and the invariant culture.")]
			pub fn $name(s: &str) -> Maybe<$type> {
				parse_number(s)
			}

			#[doc = concat!("Parses a `", stringify!($type), "` with the given styles and culture.")]
			pub fn $with(s: &str, styles: NumberStyles, culture: &Culture) -> Maybe<$type> {
				parse_number_with(s, styles, culture)
			}
		)+
	};
}

parse_adapters! {
	parse_byte, parse_byte_with => u8;
	parse_int16, parse_int16_with => i16;
	parse_int32, parse_int32_with => i32;
	parse_int64, parse_int64_with => i64;
	parse_single, parse_single_with => f32;
	parse_double, parse_double_with => f64;
	parse_decimal, parse_decimal_with => Decimal;
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use super::*;

	#[test]
	fn int32() {
		assert_eq!(parse_int32("123"), Maybe::some(123));
		assert_eq!(parse_int32("  -42 "), Maybe::some(-42));
		assert_eq!(parse_int32("+7"), Maybe::some(7));
		assert_eq!(parse_int32("foo"), Maybe::none());
		assert_eq!(parse_int32(""), Maybe::none());
		assert_eq!(parse_int32("1.0"), Maybe::none());
		assert_eq!(parse_int32("2147483648"), Maybe::none());
	}

	#[test]
	fn byte_and_int16_and_int64() {
		assert_eq!(parse_byte("255"), Maybe::some(255));
		assert_eq!(parse_byte("256"), Maybe::none());
		assert_eq!(parse_byte("-0"), Maybe::some(0));
		assert_eq!(parse_byte("-1"), Maybe::none());
		assert_eq!(parse_int16("-32768"), Maybe::some(i16::MIN));
		assert_eq!(parse_int16("32768"), Maybe::none());
		assert_eq!(parse_int64("9223372036854775807"), Maybe::some(i64::MAX));
		assert_eq!(parse_int64("foo"), Maybe::none());
	}

	#[test]
	fn floats() {
		assert_eq!(parse_double("1.5"), Maybe::some(1.5));
		assert_eq!(parse_double("1,234.5"), Maybe::some(1234.5));
		assert_eq!(parse_double("-2.5e3"), Maybe::some(-2500.0));
		assert_eq!(parse_double(".25"), Maybe::some(0.25));
		assert_eq!(parse_double("foo"), Maybe::none());
		assert_eq!(parse_double("1e"), Maybe::none());
		assert_eq!(parse_single("Infinity"), Maybe::some(f32::INFINITY));
		assert_eq!(parse_single("-Infinity"), Maybe::some(f32::NEG_INFINITY));
		assert!(parse_double("NaN").into_value().unwrap().is_nan());
	}

	#[test]
	fn exponent_extremes() {
		let culture = Culture::invariant();
		assert_eq!(parse_int32_with("0e100", NumberStyles::ANY, &culture), Maybe::some(0));
		assert_eq!(parse_int32_with("0.000e99999999999", NumberStyles::ANY, &culture), Maybe::some(0));
		assert_eq!(parse_int32_with("1e100", NumberStyles::ANY, &culture), Maybe::none());
		assert_eq!(parse_double("1e99999999999"), Maybe::some(f64::INFINITY));
		assert_eq!(parse_double("-1e99999999999"), Maybe::some(f64::NEG_INFINITY));
		assert_eq!(parse_double("1e-99999999999"), Maybe::some(0.0));
	}

	#[test]
	fn symbols_follow_styles() {
		let culture = Culture::invariant();
		assert_eq!(parse_double_with("Infinity", NumberStyles::NONE, &culture), Maybe::none());
		assert_eq!(parse_double_with("NaN", NumberStyles::INTEGER, &culture), Maybe::none());
		assert_eq!(parse_double_with("Infinity", NumberStyles::FLOAT, &culture), Maybe::some(f64::INFINITY));
		assert_eq!(
			parse_double_with("-Infinity", NumberStyles::ALLOW_DECIMAL_POINT, &culture),
			Maybe::none()
		);
	}

	#[test]
	fn decimal() {
		assert_eq!(parse_decimal("1,000.25"), Maybe::some(Decimal::from_str("1000.25").unwrap()));
		assert_eq!(parse_decimal("5-"), Maybe::some(Decimal::from(-5)));
		assert_eq!(parse_decimal("1e3"), Maybe::none());
		assert_eq!(
			parse_decimal_with("1e3", NumberStyles::ANY, &Culture::invariant()),
			Maybe::some(Decimal::from(1000))
		);
		assert_eq!(parse_decimal("foo"), Maybe::none());
	}

	#[test]
	fn styles() {
		let culture = Culture::invariant();
		assert_eq!(parse_int32_with("1A", NumberStyles::HEX_NUMBER, &culture), Maybe::some(26));
		assert_eq!(parse_int32_with("1G", NumberStyles::HEX_NUMBER, &culture), Maybe::none());
		assert_eq!(parse_double_with("1A", NumberStyles::HEX_NUMBER, &culture), Maybe::none());
		assert_eq!(parse_int32_with(" 1", NumberStyles::NONE, &culture), Maybe::none());
		assert_eq!(parse_int32_with("-1", NumberStyles::NONE, &culture), Maybe::none());
		assert_eq!(parse_int32_with("(12)", NumberStyles::CURRENCY, &culture), Maybe::some(-12));
		assert_eq!(parse_int32_with("\u{a4}1,000", NumberStyles::CURRENCY, &culture), Maybe::some(1000));
		assert_eq!(parse_int32_with("12.00", NumberStyles::NUMBER, &culture), Maybe::some(12));
		assert_eq!(parse_int32_with("12.50", NumberStyles::NUMBER, &culture), Maybe::none());
		assert_eq!(parse_int32_with("1.5e1", NumberStyles::ANY, &culture), Maybe::some(15));
		assert_eq!(parse_int32_with("1e2", NumberStyles::ANY, &culture), Maybe::some(100));
	}

	#[test]
	fn culture_separators() {
		let culture = Culture {
			decimal_separator: ",".to_owned(),
			group_separator: ".".to_owned(),
			..Culture::invariant()
		};
		assert_eq!(parse_double_with("1.234,5", NumberStyles::NUMBER, &culture), Maybe::some(1234.5));
		assert_eq!(parse_number_with::<u32>("4.096", NumberStyles::NUMBER, &culture), Maybe::some(4096));
	}

	#[test]
	fn generic() {
		assert_eq!(parse_number::<u128>("340282366920938463463374607431768211455"), Maybe::some(u128::MAX));
		assert_eq!(parse_number::<i8>("-129"), Maybe::none());
	}
}
