//! Custom format strings (`yyyyMMdd HH:mm:ss`, `hh\:mm`, ...) and the scanner that matches
//! text against them.

use chumsky::prelude::*;

/// A piece of a custom format string.
///
/// Runs of `y M d H h m s f F t z` are fields, any other unquoted character is a literal.
#[derive(PartialEq, Eq, Clone, Hash, Debug)]
pub enum FormatToken {
	/// A field letter and how many times it was repeated.
	Field(char, usize),
	/// `K`: an optional `Z` or `+hh:mm` offset.
	Offset,
	/// `/`, replaced by the culture's date separator.
	DateSeparator,
	/// `:`, replaced by the culture's time separator.
	TimeSeparator,
	Literal(String),
}

fn field_run(letter: char) -> impl Parser<char, FormatToken, Error = Simple<char>> {
	just(letter)
		.repeated().at_least(1)
		.map(move |run: Vec<char>| FormatToken::Field(letter, run.len()))
}

fn quoted(quote: char) -> impl Parser<char, FormatToken, Error = Simple<char>> {
	just(quote)
		.ignore_then(none_of(quote).repeated())
		.then_ignore(just(quote))
		.collect::<String>()
		.map(FormatToken::Literal)
		.labelled("Quoted Literal")
}

fn format_parser() -> impl Parser<char, Vec<FormatToken>, Error = Simple<char>> {
	let escaped = just('\\')
		.ignore_then(any())
		.map(|c: char| FormatToken::Literal(c.to_string()))
		.labelled("Escaped Literal");
	choice((
		field_run('y'),
		field_run('M'),
		field_run('d'),
		field_run('H'),
		field_run('h'),
		field_run('m'),
		field_run('s'),
		field_run('f'),
		field_run('F'),
		field_run('t'),
		field_run('z'),
		just('K').to(FormatToken::Offset),
		just('/').to(FormatToken::DateSeparator),
		just(':').to(FormatToken::TimeSeparator),
		escaped,
		quoted('\''),
		quoted('"'),
		none_of("\\'\"").map(|c: char| FormatToken::Literal(c.to_string())),
	))
	.repeated()
	.then_ignore(end())
}

/// Splits a custom format string into tokens.
///
/// Fails on an unterminated quote or a trailing `\`.
pub fn tokenize<S: AsRef<str>>(format: S) -> Result<Vec<FormatToken>, Vec<Simple<char>>> {
	format_parser().parse(format.as_ref())
}

/// Forward-only cursor over the text being parsed.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
	rest: &'a str,
}

impl<'a> Scanner<'a> {
	pub fn new(text: &'a str) -> Self {
		Self { rest: text }
	}

	pub fn is_empty(&self) -> bool {
		self.rest.is_empty()
	}

	pub fn rest(&self) -> &'a str {
		self.rest
	}

	/// Reads between `min` and `max` ASCII digits. Returns the value and the digit count.
	pub fn digits(&mut self, min: usize, max: usize) -> Option<(u64, usize)> {
		let count = self.rest.bytes()
			.take(max)
			.take_while(u8::is_ascii_digit)
			.count();
		if count < min {
			return None;
		}
		let value = if count == 0 {
			0
		} else {
			self.rest[..count].parse().ok()?
		};
		self.rest = &self.rest[count..];
		Some((value, count))
	}

	/// Consumes `text` if the input starts with it.
	pub fn literal(&mut self, text: &str) -> bool {
		match self.rest.strip_prefix(text) {
			Some(rest) => {
				self.rest = rest;
				true
			}
			None => false,
		}
	}

	/// Consumes the longest of `names` (ASCII case-insensitive) and returns its index.
	pub fn name<S: AsRef<str>>(&mut self, names: &[S]) -> Option<usize> {
		let (index, len) = names.iter()
			.enumerate()
			.map(|(index, name)| (index, name.as_ref()))
			.filter(|(_, name)| !name.is_empty())
			.filter(|(_, name)| {
				self.rest.get(..name.len())
					.map_or(false, |prefix| prefix.eq_ignore_ascii_case(name))
			})
			.map(|(index, name)| (index, name.len()))
			.max_by_key(|&(_, len)| len)?;
		self.rest = &self.rest[len..];
		Some(index)
	}

	/// Consumes a leading `+` or `-` and returns `1` or `-1`.
	pub fn sign(&mut self) -> Option<i32> {
		if self.literal("+") {
			Some(1)
		} else if self.literal("-") {
			Some(-1)
		} else {
			None
		}
	}

	/// Returns `true` if any whitespace was skipped.
	pub fn skip_whitespace(&mut self) -> bool {
		let trimmed = self.rest.trim_start();
		let skipped = trimmed.len() != self.rest.len();
		self.rest = trimmed;
		skipped
	}
}

/// Scales `value`, read from `digits` fractional digits, to nanoseconds.
pub fn fraction_to_nanos(value: u64, digits: usize) -> Option<u32> {
	if digits == 0 {
		return Some(0);
	}
	if digits > 9 {
		return None;
	}
	u32::try_from(value * 10u64.pow(9 - digits as u32)).ok()
}
