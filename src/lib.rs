// ============================================================================
// Fixed Money Library
// Fixed-point money values with locale-aware formatting
// ============================================================================

//! # Fixed Money
//!
//! A small value type for monetary amounts that avoids floating-point drift
//! by storing amounts as minor units (cents, scale fixed at 100) and only
//! converting to major units at the edges.
//!
//! ## Features
//!
//! - **Minor-unit storage** so arithmetic never re-rounds a dollar value
//! - **Immutable chaining**: every operation returns a new value
//! - **Locale-aware formatting** with a built-in conventions table
//! - **Lenient text intake** that strips currency symbols and separators,
//!   plus a strict `FromStr` that surfaces parse failures
//! - **Optional serde** support (amounts serialize as plain numbers)
//!
//! ## Example
//!
//! ```rust
//! use fixed_money::prelude::*;
//!
//! let total = Money::from_major(9.99).add(1.01);
//! assert_eq!(total.to_number(), 11.0);
//! assert_eq!(total.to_string(), "11");
//!
//! let price = Money::from_text("$1023.99");
//! assert_eq!(price.to_string(), "1,023.99");
//!
//! let de = price.with_locale("de-DE");
//! assert_eq!(de.to_string(), "1.023,99");
//! ```

pub mod format;
pub mod money;

// Re-exports for convenience
pub use format::{FormatOptions, FormatSpec};
pub use money::{Money, MoneyError, MoneyResult};

pub mod prelude {
    pub use crate::format::{
        DigitGrouping, FormatOptions, FormatSpec, LocaleConventions, SymbolPlacement,
    };
    pub use crate::money::{Money, MoneyError, MoneyResult};
}
