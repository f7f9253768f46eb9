// ============================================================================
// Format Module
// Locale-aware rendering of major-unit amounts
// ============================================================================
//
// This module provides:
// - FormatOptions/FormatSpec: per-value display configuration
// - LocaleConventions: built-in separator/grouping table for common tags
// - render: the decimal-to-text pipeline (round, trim, group, sign, symbol)

pub mod locale;
mod options;
mod render;

pub use locale::{DigitGrouping, LocaleConventions, SymbolPlacement};
pub use options::{FormatOptions, FormatSpec};
pub use render::render;
