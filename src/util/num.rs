/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond 2^53 lose precision, which is the promotion rule for mixed
/// integer and double arithmetic.
///
/// ## Example
/// ```
/// use sprig::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Reduces a shift distance to the six bits a 64 bit shift uses.
///
/// ## Example
/// ```
/// use sprig::util::num::shift_distance;
///
/// assert_eq!(shift_distance(3), 3);
/// assert_eq!(shift_distance(65), 1);
/// assert_eq!(shift_distance(-1), 63);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub const fn shift_distance(value: i64) -> u32 {
    (value & 0x3f) as u32
}
