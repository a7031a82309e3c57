/// Smallest magnitude printed without an exponent.
pub const MIN_PLAIN_MAGNITUDE: f64 = 1e-4;
/// Magnitude from which values are printed with an exponent.
pub const MAX_PLAIN_MAGNITUDE: f64 = 1e16;

/// Formats a result value in its shortest round-tripping form.
///
/// Integral values keep a trailing `.0`. Values whose magnitude is below
/// [`MIN_PLAIN_MAGNITUDE`] or at least [`MAX_PLAIN_MAGNITUDE`] are written in
/// scientific notation with a signed exponent of at least two digits.
/// Non-finite values are written as `inf`, `-inf` and `nan`.
///
/// ## Parameters
/// - `value`: The value to format.
///
/// ## Returns
/// A string that parses back to exactly `value` (except for `nan`, which
/// parses back to a NaN).
///
/// ## Example
/// ```
/// use prioricalc::util::num::format_real;
///
/// assert_eq!(format_real(27.0), "27.0");
/// assert_eq!(format_real(-0.5), "-0.5");
/// assert_eq!(format_real(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_real(1e16), "1e+16");
/// assert_eq!(format_real(0.000015), "1.5e-05");
/// assert_eq!(format_real(f64::INFINITY), "inf");
/// assert_eq!(format_real(f64::NAN), "nan");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }

    // `Debug` switches to exponent form at the same magnitudes.
    let repr = format!("{value:?}");

    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent.strip_prefix('-')
                                         .map_or(('+', exponent), |digits| ('-', digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        },
        None => repr,
    }
}
