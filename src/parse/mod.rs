//! Total parsing adapters: each one returns [Maybe](crate::Maybe) instead of an error.

pub mod format;
pub mod number;
pub mod primitive;
pub mod datetime;
pub mod timespan;

pub use number::{
	parse_number,
	parse_number_with,
	parse_byte,
	parse_byte_with,
	parse_int16,
	parse_int16_with,
	parse_int32,
	parse_int32_with,
	parse_int64,
	parse_int64_with,
	parse_single,
	parse_single_with,
	parse_double,
	parse_double_with,
	parse_decimal,
	parse_decimal_with,
	ParseNumber,
};
pub use primitive::{parse_boolean, parse_char};
pub use datetime::{
	parse_datetime,
	parse_datetime_with,
	parse_datetime_exact,
	parse_datetime_exact_any,
};
pub use timespan::{
	parse_timespan,
	parse_timespan_with,
	parse_timespan_exact,
	parse_timespan_exact_with,
	parse_timespan_exact_any,
	parse_timespan_exact_any_with,
};
