/// Numeric conversion helpers.
///
/// Conversions between integer and floating-point types that the clippy
/// casting lints would otherwise flag at every call site. Each helper
/// documents how it treats values that do not convert exactly.
pub mod num;
