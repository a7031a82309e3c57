/// Numeric formatting helpers.
///
/// This module turns computed `f64` values into the text printed after
/// `Result: `. The output is the shortest representation that reads back to
/// the same value.
pub mod num;
