// ============================================================================
// Money Module
// Fixed-point money value with minor-unit storage
// ============================================================================
//
// This module provides:
// - Money: amount stored in minor units (cents), scale fixed at 100
// - MoneyError: error types for the strict parsing/conversion paths
//
// Design principles:
// - All arithmetic happens on the minor-unit value
// - Immutable chaining: every operation returns a new value
// - Native IEEE semantics, no overflow or division-by-zero guards

mod errors;
mod value;

pub use errors::{MoneyError, MoneyResult};
pub use value::Money;
