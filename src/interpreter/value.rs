/// Runtime values and their types.
///
/// Declares the `Value` enum produced by evaluation, the `ValueType` names
/// used by `typeof` and in error messages, and numeric promotion between
/// integers and doubles.
pub mod core;
