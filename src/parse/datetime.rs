//! Date and time parsing adapters.
//!
//! Everything funnels into [parse_datetime_exact_any]: the general overloads just try the
//! culture's patterns in order. Text carrying an offset (`zzz` or `K`) is converted to UTC.

use chrono::{
	Datelike,
	FixedOffset,
	Local,
	NaiveDate,
	NaiveDateTime,
	NaiveTime,
	TimeZone,
	Weekday,
};

use crate::culture::Culture;
use crate::parse::format::{self, FormatToken, Scanner};
use crate::styles::DateTimeStyles;
use crate::util::coreext::*;
use crate::Maybe;

const MONTH_NAMES: [&str; 12] = [
	"January", "February", "March", "April", "May", "June",
	"July", "August", "September", "October", "November", "December",
];

const MONTH_ABBREVIATIONS: [&str; 12] = [
	"Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DAY_NAMES: [&str; 7] = [
	"Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

const DAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const WEEKDAYS: [Weekday; 7] = [
	Weekday::Sun,
	Weekday::Mon,
	Weekday::Tue,
	Weekday::Wed,
	Weekday::Thu,
	Weekday::Fri,
	Weekday::Sat,
];

/// Parses a date and/or time with the invariant culture, allowing surrounding and inner whitespace.
pub fn parse_datetime(s: &str) -> Maybe<NaiveDateTime> {
	parse_datetime_with(s, &Culture::invariant(), DateTimeStyles::ALLOW_WHITE_SPACES)
}

/// Parses a date and/or time using the general patterns of `culture`.
///
/// Unlike the exact parsers, a space in a pattern needs at least one whitespace character in the
/// text even under [DateTimeStyles::ALLOW_INNER_WHITE], so fields can't run together.
pub fn parse_datetime_with(s: &str, culture: &Culture, styles: DateTimeStyles) -> Maybe<NaiveDateTime> {
	parse_any(s, &culture.general_datetime_patterns(), culture, styles, true)
}

/// Parses a date and/or time that matches `format` exactly.
pub fn parse_datetime_exact(
	s: &str,
	format: &str,
	culture: &Culture,
	styles: DateTimeStyles,
) -> Maybe<NaiveDateTime> {
	parse_one(s, format, culture, styles, false)
}

/// Parses a date and/or time that matches one of `formats` exactly. The first match wins.
pub fn parse_datetime_exact_any<S: AsRef<str>>(
	s: &str,
	formats: &[S],
	culture: &Culture,
	styles: DateTimeStyles,
) -> Maybe<NaiveDateTime> {
	parse_any(s, formats, culture, styles, false)
}

/// `separated` makes a space in the format match one or more whitespace characters, never zero.
fn parse_one(
	s: &str,
	format: &str,
	culture: &Culture,
	styles: DateTimeStyles,
	separated: bool,
) -> Maybe<NaiveDateTime> {
	format::tokenize(format)
		.maybe_ok()
		.bind(|tokens| match_tokens(s, &tokens, culture, styles, separated).into_maybe())
}

fn parse_any<S: AsRef<str>>(
	s: &str,
	formats: &[S],
	culture: &Culture,
	styles: DateTimeStyles,
	separated: bool,
) -> Maybe<NaiveDateTime> {
	let parsed = formats.iter()
		.map(|format| parse_one(s, format.as_ref(), culture, styles, separated))
		.find(Maybe::has_value)
		.unwrap_or_default();
	if !parsed.has_value() {
		tracing::trace!(target: "maybe::parse", input = s, formats = formats.len(), "no date/time format matched");
	}
	parsed
}

/// Field values collected while scanning.
#[derive(Debug, Default)]
struct DateFields {
	year: Option<i32>,
	month: Option<u32>,
	day: Option<u32>,
	weekday: Option<Weekday>,
	hour: Option<u32>,
	hour12: Option<u32>,
	pm: Option<bool>,
	minute: Option<u32>,
	second: Option<u32>,
	nanosecond: Option<u32>,
	offset: Option<i32>,
}

fn two_digit_year(year: u64) -> i32 {
	if year <= 49 {
		2000 + year as i32
	} else {
		1900 + year as i32
	}
}

/// Reads `+hh:mm`, `+hhmm` or `+hh` and returns seconds east of UTC.
fn read_offset(scanner: &mut Scanner<'_>, hour_digits: (usize, usize), minutes: bool) -> Option<i32> {
	let sign = scanner.sign()?;
	let (hours, _) = scanner.digits(hour_digits.0, hour_digits.1)?;
	let mut seconds = hours as i32 * 3600;
	if minutes {
		scanner.literal(":");
		let (minutes, _) = scanner.digits(2, 2)?;
		seconds += minutes as i32 * 60;
	}
	Some(sign * seconds)
}

fn read_field(
	scanner: &mut Scanner<'_>,
	fields: &mut DateFields,
	letter: char,
	count: usize,
	culture: &Culture,
) -> Option<()> {
	let width = if count == 1 { (1, 2) } else { (2, 2) };
	match letter {
		'y' => {
			fields.year = Some(match count {
				1 | 2 => two_digit_year(scanner.digits(width.0, width.1)?.0),
				_ => scanner.digits(count.min(4), 4)?.0 as i32,
			});
		}
		'M' => {
			fields.month = Some(match count {
				1 | 2 => scanner.digits(width.0, width.1)?.0 as u32,
				3 => scanner.name(&MONTH_ABBREVIATIONS)? as u32 + 1,
				_ => scanner.name(&MONTH_NAMES)? as u32 + 1,
			});
		}
		'd' => match count {
			1 | 2 => fields.day = Some(scanner.digits(width.0, width.1)?.0 as u32),
			3 => fields.weekday = Some(WEEKDAYS[scanner.name(&DAY_ABBREVIATIONS)?]),
			_ => fields.weekday = Some(WEEKDAYS[scanner.name(&DAY_NAMES)?]),
		},
		'H' => fields.hour = Some(scanner.digits(width.0, width.1)?.0 as u32),
		'h' => fields.hour12 = Some(scanner.digits(width.0, width.1)?.0 as u32),
		'm' => fields.minute = Some(scanner.digits(width.0, width.1)?.0 as u32),
		's' => fields.second = Some(scanner.digits(width.0, width.1)?.0 as u32),
		'f' | 'F' => {
			if count > 7 {
				return None;
			}
			let min = if letter == 'f' { count } else { 0 };
			let (value, digits) = scanner.digits(min, count)?;
			fields.nanosecond = Some(format::fraction_to_nanos(value, digits)?);
		}
		't' => {
			let designators = if count == 1 {
				[
					culture.am_designator.chars().take(1).collect::<String>(),
					culture.pm_designator.chars().take(1).collect::<String>(),
				]
			} else {
				[culture.am_designator.clone(), culture.pm_designator.clone()]
			};
			fields.pm = Some(scanner.name(&designators)? == 1);
		}
		'z' => {
			fields.offset = Some(match count {
				1 => read_offset(scanner, (1, 2), false)?,
				2 => read_offset(scanner, (2, 2), false)?,
				_ => read_offset(scanner, (2, 2), true)?,
			});
		}
		_ => return None,
	}
	Some(())
}

fn match_tokens(
	s: &str,
	tokens: &[FormatToken],
	culture: &Culture,
	styles: DateTimeStyles,
	separated: bool,
) -> Option<NaiveDateTime> {
	if tokens.is_empty() {
		return None;
	}
	let mut text = s;
	if styles.contains(DateTimeStyles::ALLOW_LEADING_WHITE) {
		text = text.trim_start();
	}
	if styles.contains(DateTimeStyles::ALLOW_TRAILING_WHITE) {
		text = text.trim_end();
	}
	let inner_white = styles.contains(DateTimeStyles::ALLOW_INNER_WHITE);

	let mut scanner = Scanner::new(text);
	let mut fields = DateFields::default();
	// whitespace already skipped after the previous token
	let mut skipped = false;
	for token in tokens {
		match token {
			FormatToken::Field(letter, count) => {
				read_field(&mut scanner, &mut fields, *letter, *count, culture)?;
			}
			FormatToken::Offset => {
				if scanner.literal("Z") || scanner.literal("z") {
					fields.offset = Some(0);
				} else if scanner.rest().starts_with(['+', '-']) {
					fields.offset = Some(read_offset(&mut scanner, (2, 2), true)?);
				}
			}
			FormatToken::DateSeparator => {
				if !scanner.literal(&culture.date_separator) {
					return None;
				}
			}
			FormatToken::TimeSeparator => {
				if !scanner.literal(&culture.time_separator) {
					return None;
				}
			}
			FormatToken::Literal(literal) if literal.trim().is_empty() && inner_white => {
				let found = scanner.skip_whitespace();
				if separated && !skipped && !found {
					return None;
				}
			}
			FormatToken::Literal(literal) => {
				if !scanner.literal(literal) {
					return None;
				}
			}
		}
		skipped = inner_white && scanner.skip_whitespace();
	}
	if !scanner.is_empty() {
		return None;
	}
	fields.build(styles)
}

impl DateFields {
	fn build(self, styles: DateTimeStyles) -> Option<NaiveDateTime> {
		let no_current_date = styles.contains(DateTimeStyles::NO_CURRENT_DATE_DEFAULT);
		let date = if self.year.is_none() && self.month.is_none() && self.day.is_none() {
			if no_current_date {
				NaiveDate::from_ymd_opt(1, 1, 1)?
			} else {
				Local::now().date_naive()
			}
		} else {
			let year = match self.year {
				Some(year) => year,
				None if no_current_date => 1,
				None => Local::now().year(),
			};
			NaiveDate::from_ymd_opt(year, self.month.unwrap_or(1), self.day.unwrap_or(1))?
		};
		if let Some(weekday) = self.weekday {
			if date.weekday() != weekday {
				return None;
			}
		}

		let hour = match (self.hour, self.hour12) {
			(Some(hour), _) => hour,
			(None, Some(hour)) => {
				if !(1..=12).contains(&hour) {
					return None;
				}
				match self.pm {
					Some(true) => hour % 12 + 12,
					_ => hour % 12,
				}
			}
			(None, None) => 0,
		};
		let time = NaiveTime::from_hms_nano_opt(
			hour,
			self.minute.unwrap_or(0),
			self.second.unwrap_or(0),
			self.nanosecond.unwrap_or(0),
		)?;
		let datetime = date.and_time(time);

		if let Some(offset) = self.offset {
			return FixedOffset::east_opt(offset)?
				.from_local_datetime(&datetime)
				.single()
				.map(|datetime| datetime.naive_utc());
		}
		if styles.contains(DateTimeStyles::ASSUME_LOCAL | DateTimeStyles::ADJUST_TO_UNIVERSAL)
		&& !styles.contains(DateTimeStyles::ASSUME_UNIVERSAL) {
			return Local.from_local_datetime(&datetime)
				.earliest()
				.map(|datetime| datetime.naive_utc());
		}
		Some(datetime)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ymd_hms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
		NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, s).unwrap()
	}

	#[test]
	fn general() {
		assert_eq!(parse_datetime("2000/01/02 03:04:05"), Maybe::some(ymd_hms(2000, 1, 2, 3, 4, 5)));
		assert_eq!(parse_datetime("  2000/1/2 3:04 "), Maybe::some(ymd_hms(2000, 1, 2, 3, 4, 0)));
		assert_eq!(parse_datetime("01/02/2000"), Maybe::some(ymd_hms(2000, 1, 2, 0, 0, 0)));
		assert_eq!(parse_datetime("2000-01-02T03:04:05"), Maybe::some(ymd_hms(2000, 1, 2, 3, 4, 5)));
		assert_eq!(parse_datetime("2000/01/02 03:04:05 PM"), Maybe::some(ymd_hms(2000, 1, 2, 15, 4, 5)));
		assert_eq!(parse_datetime("foo"), Maybe::none());
		assert_eq!(parse_datetime("2000/02/30"), Maybe::none());
	}

	#[test]
	fn general_needs_separating_whitespace() {
		assert_eq!(parse_datetime("2000/01/0203:04:05"), Maybe::none());
		assert_eq!(parse_datetime("2000/01/02 03:04:05PM"), Maybe::none());
		assert_eq!(parse_datetime("2000/01/02 \t 03:04:05"), Maybe::some(ymd_hms(2000, 1, 2, 3, 4, 5)));
		// the exact parsers stay lenient
		let culture = Culture::invariant();
		assert_eq!(
			parse_datetime_exact("2000/01/0203:04", "yyyy/MM/dd HH:mm", &culture, DateTimeStyles::ALLOW_WHITE_SPACES),
			Maybe::some(ymd_hms(2000, 1, 2, 3, 4, 0))
		);
	}

	#[test]
	fn offsets_become_utc() {
		assert_eq!(parse_datetime("2000-01-02T03:04:05Z"), Maybe::some(ymd_hms(2000, 1, 2, 3, 4, 5)));
		assert_eq!(parse_datetime("2000-01-02T03:04:05+09:00"), Maybe::some(ymd_hms(2000, 1, 1, 18, 4, 5)));
		assert_eq!(
			parse_datetime("2000-01-02T03:04:05.5-01:30"),
			Maybe::some(NaiveDate::from_ymd_opt(2000, 1, 2).unwrap().and_hms_milli_opt(4, 34, 5, 500).unwrap())
		);
	}

	#[test]
	fn exact() {
		let culture = Culture::invariant();
		assert_eq!(
			parse_datetime_exact("20000102030405", "yyyyMMddHHmmss", &culture, DateTimeStyles::NONE),
			Maybe::some(ymd_hms(2000, 1, 2, 3, 4, 5))
		);
		assert_eq!(
			parse_datetime_exact("foo", "yyyyMMddHHmmss", &culture, DateTimeStyles::NONE),
			Maybe::none()
		);
		assert_eq!(
			parse_datetime_exact(" 20000102", "yyyyMMdd", &culture, DateTimeStyles::NONE),
			Maybe::none()
		);
		assert_eq!(
			parse_datetime_exact(" 20000102", "yyyyMMdd", &culture, DateTimeStyles::ALLOW_LEADING_WHITE),
			Maybe::some(ymd_hms(2000, 1, 2, 0, 0, 0))
		);
		assert_eq!(
			parse_datetime_exact("Sunday, 02 January 2000", "dddd, dd MMMM yyyy", &culture, DateTimeStyles::NONE),
			Maybe::some(ymd_hms(2000, 1, 2, 0, 0, 0))
		);
		assert_eq!(
			parse_datetime_exact("Monday, 02 January 2000", "dddd, dd MMMM yyyy", &culture, DateTimeStyles::NONE),
			Maybe::none()
		);
		assert_eq!(
			parse_datetime_exact("12:30 am", "hh:mm tt", &culture, DateTimeStyles::NO_CURRENT_DATE_DEFAULT),
			Maybe::some(ymd_hms(1, 1, 1, 0, 30, 0))
		);
		assert_eq!(
			parse_datetime_exact("99-1-2", "yy-M-d", &culture, DateTimeStyles::NONE),
			Maybe::some(ymd_hms(1999, 1, 2, 0, 0, 0))
		);
		assert_eq!(parse_datetime_exact("x", "'unterminated", &culture, DateTimeStyles::NONE), Maybe::none());
	}

	#[test]
	fn exact_any() {
		let culture = Culture::invariant();
		let formats = ["yyyyMMdd", "yyyy.MM.dd"];
		assert_eq!(
			parse_datetime_exact_any("2000.01.02", &formats, &culture, DateTimeStyles::NONE),
			Maybe::some(ymd_hms(2000, 1, 2, 0, 0, 0))
		);
		assert_eq!(
			parse_datetime_exact_any("2000-01-02", &formats, &culture, DateTimeStyles::NONE),
			Maybe::none()
		);
	}

	#[test]
	fn culture_separators() {
		let culture = Culture {
			date_separator: ".".to_owned(),
			date_order: crate::culture::DateOrder::DayMonthYear,
			..Culture::invariant()
		};
		assert_eq!(
			parse_datetime_with("02.01.2000 03:04", &culture, DateTimeStyles::ALLOW_WHITE_SPACES),
			Maybe::some(ymd_hms(2000, 1, 2, 3, 4, 0))
		);
		assert_eq!(
			parse_datetime_with("2000/01/02", &culture, DateTimeStyles::ALLOW_WHITE_SPACES),
			Maybe::none()
		);
	}
}
