//! Culture-sensitive symbols used by the parsing adapters.
//!
//! This is a format provider, not a locale database: it carries just the separators, signs and
//! patterns the adapters need. [Culture::invariant] is what the overloads without a culture use.

/// Order of the day, month and year fields in short dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOrder {
	YearMonthDay,
	MonthDayYear,
	DayMonthYear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Culture {
	pub decimal_separator: String,
	pub group_separator: String,
	pub positive_sign: String,
	pub negative_sign: String,
	pub currency_symbol: String,
	pub positive_infinity_symbol: String,
	pub negative_infinity_symbol: String,
	pub nan_symbol: String,
	pub date_separator: String,
	pub time_separator: String,
	pub am_designator: String,
	pub pm_designator: String,
	pub date_order: DateOrder,
}

impl Culture {
	/// The culture-independent symbols.
	pub fn invariant() -> Self {
		Self {
			decimal_separator: ".".to_owned(),
			group_separator: ",".to_owned(),
			positive_sign: "+".to_owned(),
			negative_sign: "-".to_owned(),
			currency_symbol: "\u{a4}".to_owned(),
			positive_infinity_symbol: "Infinity".to_owned(),
			negative_infinity_symbol: "-Infinity".to_owned(),
			nan_symbol: "NaN".to_owned(),
			date_separator: "/".to_owned(),
			time_separator: ":".to_owned(),
			am_designator: "AM".to_owned(),
			pm_designator: "PM".to_owned(),
			date_order: DateOrder::MonthDayYear,
		}
	}

	/// Short date patterns for this culture, most specific first. Custom format syntax.
	pub fn short_date_patterns(&self) -> Vec<&'static str> {
		let mut patterns = vec!["yyyy/M/d"];
		match self.date_order {
			DateOrder::YearMonthDay => (),
			DateOrder::MonthDayYear => patterns.push("M/d/yyyy"),
			DateOrder::DayMonthYear => patterns.push("d/M/yyyy"),
		}
		patterns
	}

	/// Every pattern [parse_datetime](crate::parse::datetime::parse_datetime) tries, in order.
	pub fn general_datetime_patterns(&self) -> Vec<String> {
		const TIMES: [&str; 6] = [
			"H:m:s.FFFFFFF",
			"H:m:s",
			"H:m",
			"h:m:s tt",
			"h:m tt",
			"",
		];
		let mut patterns = Vec::new();
		for date in self.short_date_patterns() {
			for time in TIMES {
				if time.is_empty() {
					patterns.push(date.to_owned());
				} else {
					patterns.push(format!("{date} {time}"));
				}
			}
		}
		for iso in [
			"yyyy'-'MM'-'dd'T'HH':'mm':'ss.FFFFFFFK",
			"yyyy'-'MM'-'dd'T'HH':'mm':'ssK",
			"yyyy'-'MM'-'dd'T'HH':'mm':'ss.FFFFFFF",
			"yyyy'-'MM'-'dd'T'HH':'mm':'ss",
			"yyyy'-'MM'-'dd'T'HH':'mm",
			"yyyy'-'MM'-'dd HH':'mm':'ss.FFFFFFF",
			"yyyy'-'MM'-'dd HH':'mm':'ss",
			"yyyy'-'MM'-'dd HH':'mm",
			"yyyy'-'MM'-'dd",
			"H:m:s.FFFFFFF",
			"H:m:s",
			"H:m",
			"h:m:s tt",
			"h:m tt",
		] {
			patterns.push(iso.to_owned());
		}
		patterns
	}
}

impl Default for Culture {
	fn default() -> Self {
		Self::invariant()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invariant_patterns() {
		let culture = Culture::default();
		let patterns = culture.general_datetime_patterns();
		assert_eq!(patterns[0], "yyyy/M/d H:m:s.FFFFFFF");
		assert!(patterns.iter().any(|p| p == "M/d/yyyy"));
		assert!(!patterns.iter().any(|p| p == "d/M/yyyy"));
	}
}
