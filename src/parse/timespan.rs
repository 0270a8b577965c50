//! Time interval parsing adapters.
//!
//! The general grammar is `[ws][-]{ d | [d.]h:m[:s[.f]] }[ws]`. Exact parsing supports the
//! standard formats `c` (also `t` and `T`), `g` and `G`, and custom formats built from
//! `d h m s f F` fields.

use chrono::Duration;
use chumsky::prelude::*;

use crate::culture::Culture;
use crate::parse::format::{self, FormatToken, Scanner};
use crate::styles::TimeSpanStyles;
use crate::util::coreext::*;
use crate::Maybe;

/// Largest day count a time interval may hold.
pub const MAX_DAYS: u64 = 10_675_199;

/// Largest time interval, `10675199.02:48:05.4775807`. The negative bound is one tick (100ns)
/// further out.
pub fn max_span() -> Duration {
	Duration::seconds(922_337_203_685) + Duration::nanoseconds(477_580_700)
}

/// Raw pieces of a time interval, before range checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Clock {
	negative: bool,
	days: Option<String>,
	hours: Option<String>,
	minutes: Option<String>,
	seconds: Option<String>,
	fraction: Option<String>,
}

fn bounded(text: &Option<String>, max: u64) -> Option<u64> {
	match text {
		Some(text) => text.parse::<u64>().ok().filter(|value| *value <= max),
		None => Some(0),
	}
}

impl Clock {
	fn to_duration(&self) -> Option<Duration> {
		let nanos = match &self.fraction {
			Some(fraction) if fraction.len() <= 7 => format::fraction_to_nanos(fraction.parse().ok()?, fraction.len())?,
			Some(_) => return None,
			None => 0,
		};
		span(
			self.negative,
			bounded(&self.days, MAX_DAYS)?,
			bounded(&self.hours, 23)?,
			bounded(&self.minutes, 59)?,
			bounded(&self.seconds, 59)?,
			nanos,
		)
	}
}

/// Builds a duration from range-checked parts.
fn span(negative: bool, days: u64, hours: u64, minutes: u64, seconds: u64, nanos: u32) -> Option<Duration> {
	if days > MAX_DAYS || hours > 23 || minutes > 59 || seconds > 59 || nanos >= 1_000_000_000 {
		return None;
	}
	let total = Duration::days(days as i64)
		+ Duration::hours(hours as i64)
		+ Duration::minutes(minutes as i64)
		+ Duration::seconds(seconds as i64)
		+ Duration::nanoseconds(nanos as i64);
	let limit = if negative { max_span() + Duration::nanoseconds(100) } else { max_span() };
	if total > limit {
		return None;
	}
	Some(if negative { -total } else { total })
}

fn number() -> impl Parser<char, String, Error = Simple<char>> {
	filter(char::is_ascii_digit)
		.repeated().at_least(1)
		.collect::<String>()
		.labelled("Number")
}

/// `[ws][-]{ d | [d.]h:m[:s[.f]] }[ws]`
fn constant_parser(time_separator: &str, decimal_separator: &str) -> impl Parser<char, Clock, Error = Simple<char>> {
	let fraction = just(decimal_separator.to_owned()).ignore_then(number());
	let seconds = just(time_separator.to_owned())
		.ignore_then(number())
		.then(fraction.or_not());
	let clock = number().then_ignore(just('.')).or_not()
		.then(number())
		.then_ignore(just(time_separator.to_owned()))
		.then(number())
		.then(seconds.or_not())
		.map(|(((days, hours), minutes), seconds)| {
			let (seconds, fraction) = match seconds {
				Some((seconds, fraction)) => (Some(seconds), fraction),
				None => (None, None),
			};
			Clock {
				negative: false,
				days,
				hours: Some(hours),
				minutes: Some(minutes),
				seconds,
				fraction,
			}
		});
	let days_only = number().map(|days| Clock {
		days: Some(days),
		..Clock::default()
	});
	just('-').or_not()
		.then(clock.or(days_only))
		.padded()
		.then_ignore(end())
		.map(|(sign, clock)| Clock {
			negative: sign.is_some(),
			..clock
		})
}

/// `[ws][-][d:]h:m:s[.f][ws]`, every part separated by the time separator.
fn general_parser(time_separator: &str, decimal_separator: &str) -> impl Parser<char, (bool, Vec<String>, Option<String>), Error = Simple<char>> {
	just('-').or_not()
		.then(number().separated_by(just(time_separator.to_owned())).at_least(1))
		.then(just(decimal_separator.to_owned()).ignore_then(number()).or_not())
		.padded()
		.then_ignore(end())
		.map(|((sign, parts), fraction)| (sign.is_some(), parts, fraction))
}

fn parse_constant(s: &str, time_separator: &str, decimal_separator: &str) -> Maybe<Duration> {
	constant_parser(time_separator, decimal_separator)
		.parse(s)
		.maybe_ok()
		.bind(|clock| clock.to_duration().into_maybe())
}

/// `long` requires all four parts and a fraction, as in `d:hh:mm:ss.fffffff`.
fn parse_general(s: &str, culture: &Culture, long: bool) -> Maybe<Duration> {
	general_parser(&culture.time_separator, &culture.decimal_separator)
		.parse(s)
		.maybe_ok()
		.bind(|(negative, mut parts, fraction)| {
			if long && (parts.len() != 4 || fraction.is_none()) {
				return Maybe::none();
			}
			// a fraction belongs to the seconds
			if fraction.is_some() && parts.len() < 3 {
				return Maybe::none();
			}
			let mut clock = Clock {
				negative,
				fraction,
				..Clock::default()
			};
			let count = parts.len();
			let mut next = || parts.pop();
			match count {
				1 => clock.days = next(),
				2 => {
					clock.minutes = next();
					clock.hours = next();
				}
				3 | 4 => {
					clock.seconds = next();
					clock.minutes = next();
					clock.hours = next();
					clock.days = next();
				}
				_ => return Maybe::none(),
			}
			clock.to_duration().into_maybe()
		})
}

/// Parses a time interval with the invariant culture, in the `[-][d.]hh:mm[:ss[.fffffff]]` or
/// the general `[-][d:]h:mm:ss[.f]` form.
pub fn parse_timespan(s: &str) -> Maybe<Duration> {
	parse_timespan_with(s, &Culture::invariant())
}

/// Parses a time interval using the separators of `culture`, also accepting the general
/// `[-][d:]h:mm:ss[.f]` form.
pub fn parse_timespan_with(s: &str, culture: &Culture) -> Maybe<Duration> {
	parse_constant(s, &culture.time_separator, &culture.decimal_separator)
		.or_else_with(|| parse_general(s, culture, false))
}

/// Parses a time interval that matches `format` exactly.
pub fn parse_timespan_exact(s: &str, format: &str, culture: &Culture) -> Maybe<Duration> {
	parse_timespan_exact_with(s, format, culture, TimeSpanStyles::NONE)
}

/// Parses a time interval that matches `format` exactly, with `styles`.
pub fn parse_timespan_exact_with(
	s: &str,
	format: &str,
	culture: &Culture,
	styles: TimeSpanStyles,
) -> Maybe<Duration> {
	match format {
		"c" | "t" | "T" => parse_constant(s, ":", "."),
		"g" => parse_general(s, culture, false),
		"G" => parse_general(s, culture, true),
		custom => format::tokenize(custom)
			.maybe_ok()
			.bind(|tokens| match_tokens(s, &tokens, styles).into_maybe()),
	}
}

/// Parses a time interval that matches one of `formats` exactly. The first match wins.
pub fn parse_timespan_exact_any<S: AsRef<str>>(s: &str, formats: &[S], culture: &Culture) -> Maybe<Duration> {
	parse_timespan_exact_any_with(s, formats, culture, TimeSpanStyles::NONE)
}

/// Parses a time interval that matches one of `formats` exactly, with `styles`.
pub fn parse_timespan_exact_any_with<S: AsRef<str>>(
	s: &str,
	formats: &[S],
	culture: &Culture,
	styles: TimeSpanStyles,
) -> Maybe<Duration> {
	formats.iter()
		.map(|format| parse_timespan_exact_with(s, format.as_ref(), culture, styles))
		.find(Maybe::has_value)
		.unwrap_or_default()
}

fn match_tokens(s: &str, tokens: &[FormatToken], styles: TimeSpanStyles) -> Option<Duration> {
	if tokens.is_empty() {
		return None;
	}
	let mut scanner = Scanner::new(s);
	let (mut days, mut hours, mut minutes, mut seconds, mut nanos) = (0, 0, 0, 0, 0);
	for token in tokens {
		match token {
			FormatToken::Field('d', count) if *count <= 8 => {
				days = scanner.digits(*count, 8)?.0;
			}
			FormatToken::Field(letter @ ('h' | 'm' | 's'), count) if *count <= 2 => {
				let width = if *count == 1 { (1, 2) } else { (2, 2) };
				let (value, _) = scanner.digits(width.0, width.1)?;
				match *letter {
					'h' => hours = value,
					'm' => minutes = value,
					_ => seconds = value,
				}
			}
			FormatToken::Field(letter @ ('f' | 'F'), count) if *count <= 7 => {
				let min = if *letter == 'f' { *count } else { 0 };
				let (value, digits) = scanner.digits(min, *count)?;
				nanos = format::fraction_to_nanos(value, digits)?;
			}
			FormatToken::Literal(literal) => {
				if !scanner.literal(literal) {
					return None;
				}
			}
			FormatToken::DateSeparator => {
				if !scanner.literal("/") {
					return None;
				}
			}
			FormatToken::TimeSeparator => {
				if !scanner.literal(":") {
					return None;
				}
			}
			_ => return None,
		}
	}
	if !scanner.is_empty() {
		return None;
	}
	span(styles.contains(TimeSpanStyles::ASSUME_NEGATIVE), days, hours, minutes, seconds, nanos)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn hms(h: i64, m: i64, s: i64) -> Duration {
		Duration::hours(h) + Duration::minutes(m) + Duration::seconds(s)
	}

	#[test]
	fn general() {
		assert_eq!(parse_timespan("01:02:03"), Maybe::some(hms(1, 2, 3)));
		assert_eq!(parse_timespan("foo"), Maybe::none());
		assert_eq!(parse_timespan(" 1.02:03 "), Maybe::some(Duration::days(1) + hms(2, 3, 0)));
		assert_eq!(parse_timespan("-00:00:01.5"), Maybe::some(-Duration::milliseconds(1500)));
		assert_eq!(parse_timespan("3"), Maybe::some(Duration::days(3)));
		assert_eq!(parse_timespan("24:00:00"), Maybe::none());
		assert_eq!(parse_timespan("00:60"), Maybe::none());
		assert_eq!(parse_timespan("00:00:00.12345678"), Maybe::none());
		assert_eq!(parse_timespan("10675200"), Maybe::none());
		assert_eq!(parse_timespan("1.5"), Maybe::none());
		assert_eq!(parse_timespan("1:02:03:04"), Maybe::some(Duration::days(1) + hms(2, 3, 4)));
	}

	#[test]
	fn range_limits() {
		let max = Duration::days(10_675_199) + hms(2, 48, 5) + Duration::nanoseconds(477_580_700);
		assert_eq!(max, max_span());
		assert_eq!(parse_timespan("10675199.02:48:05.4775807"), Maybe::some(max));
		assert_eq!(
			parse_timespan("-10675199.02:48:05.4775808"),
			Maybe::some(-(max + Duration::nanoseconds(100)))
		);
		assert_eq!(parse_timespan("10675199.02:48:05.4775808"), Maybe::none());
		assert_eq!(parse_timespan("10675199.23:59:59"), Maybe::none());
		assert_eq!(parse_timespan("10675199.02:48"), Maybe::some(Duration::days(10_675_199) + hms(2, 48, 0)));
		let culture = Culture::invariant();
		assert_eq!(parse_timespan_exact("10675199:03", "d\\:hh", &culture), Maybe::none());
	}

	#[test]
	fn with_culture() {
		let culture = Culture::invariant();
		assert_eq!(parse_timespan_with("1:02:03:04", &culture), Maybe::some(Duration::days(1) + hms(2, 3, 4)));
		assert_eq!(parse_timespan_with("02:03", &culture), Maybe::some(hms(2, 3, 0)));
		let comma = Culture {
			decimal_separator: ",".to_owned(),
			..Culture::invariant()
		};
		assert_eq!(parse_timespan_with("00:00:01,25", &comma), Maybe::some(Duration::milliseconds(1250)));
	}

	#[test]
	fn exact() {
		let culture = Culture::invariant();
		assert_eq!(parse_timespan_exact("010203", "hhmmss", &culture), Maybe::some(hms(1, 2, 3)));
		assert_eq!(parse_timespan_exact("foo", "hhmmss", &culture), Maybe::none());
		assert_eq!(parse_timespan_exact("01:02", "hh\\:mm", &culture), Maybe::some(hms(1, 2, 0)));
		assert_eq!(parse_timespan_exact("1.02:03:04", "c", &culture), Maybe::some(Duration::days(1) + hms(2, 3, 4)));
		assert_eq!(
			parse_timespan_exact("1:02:03:04.5000000", "G", &culture),
			Maybe::some(Duration::days(1) + hms(2, 3, 4) + Duration::milliseconds(500))
		);
		assert_eq!(parse_timespan_exact("02:03:04", "G", &culture), Maybe::none());
		assert_eq!(parse_timespan_exact("2:03:04", "g", &culture), Maybe::some(hms(2, 3, 4)));
		assert_eq!(parse_timespan_exact("2024", "yyyy", &culture), Maybe::none());
		assert_eq!(
			parse_timespan_exact_with("0130", "hhmm", &culture, TimeSpanStyles::ASSUME_NEGATIVE),
			Maybe::some(-hms(1, 30, 0))
		);
	}

	#[test]
	fn exact_any() {
		let culture = Culture::invariant();
		let formats = ["hhmmss", "hh'h'mm'm'"];
		assert_eq!(parse_timespan_exact_any("01h30m", &formats, &culture), Maybe::some(hms(1, 30, 0)));
		assert_eq!(parse_timespan_exact_any("01-30", &formats, &culture), Maybe::none());
		assert_eq!(
			parse_timespan_exact_any_with("013000", &formats, &culture, TimeSpanStyles::ASSUME_NEGATIVE),
			Maybe::some(-hms(1, 30, 0))
		);
	}
}
