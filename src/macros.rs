/// The purpose of this macro is to be able to generate code for each
/// primitive integer type (this means no f32 or f64).
/// You invoke the macro with the path to another macro that you would
/// like to invoke for each type.
/// Optionally you can restrict generation to either unsigned or signed
/// by typing `;unsigned` or `;signed` after the provided macro argument.
#[macro_export]
macro_rules! for_each_int_type {
	($macro:path) => {
		$crate::for_each_int_type!($macro;unsigned);
		$crate::for_each_int_type!($macro;signed);
	};
	($macro:path;unsigned) => {
		$macro!{usize}
		$macro!{u128}
		$macro!{u64}
		$macro!{u32}
		$macro!{u16}
		$macro!{u8}
	};
	($macro:path;signed) => {
		$macro!{isize}
		$macro!{i128}
		$macro!{i64}
		$macro!{i32}
		$macro!{i16}
		$macro!{i8}
	}
}

/// Comprehension syntax over [Maybe](crate::Maybe).
///
/// Each `name <- expr;` line binds the payload of `expr`, `let` lines bind plain values,
/// `where cond;` filters, and the block ends with `=> result`, which is wrapped in Some.
/// The first None ends the whole block with None, and nothing after it is evaluated.
/// ```rust
/// use maybe::{maybe, Maybe};
/// use maybe::parse::parse_int32;
///
/// let sum = maybe! {
/// 	x <- parse_int32("1");
/// 	y <- parse_int32("2");
/// 	where x < y;
/// 	=> x + y
/// };
/// assert_eq!(sum, Maybe::some(3));
/// ```
/// Two `<-` lines in a row behave like [Maybe::select_many](crate::Maybe::select_many):
/// both payloads must be present before the result is built.
#[macro_export]
macro_rules! maybe {
	(=> $result:expr) => {
		$crate::Maybe::some($result)
	};
	(let $name:pat = $value:expr; $($rest:tt)+) => {
		{
			let $name = $value;
			$crate::maybe!($($rest)+)
		}
	};
	(where $condition:expr; $($rest:tt)+) => {
		if $condition {
			$crate::maybe!($($rest)+)
		} else {
			$crate::Maybe::none()
		}
	};
	($name:ident <- $source:expr; $($rest:tt)+) => {
		$crate::Maybe::bind($source, |$name| $crate::maybe!($($rest)+))
	};
}
