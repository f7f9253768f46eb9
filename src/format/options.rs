// ============================================================================
// Format Options
// Display configuration carried by every money value
// ============================================================================

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::locale::{self, LocaleConventions};
use super::render;

// ============================================================================
// Formatting Options
// ============================================================================

/// Options controlling how an amount is rendered as text.
///
/// Defaults mirror a plain decimal formatter: grouping on, no forced
/// fraction digits, at most three fraction digits, no currency symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// Insert group separators between integer digit groups
    pub use_grouping: bool,

    /// Fraction digits always shown, padding with zeros if needed
    pub minimum_fraction_digits: u8,

    /// Fraction digits the amount is rounded to before display.
    /// When set below `minimum_fraction_digits`, the minimum wins.
    pub maximum_fraction_digits: u8,

    /// Optional currency symbol, placed per locale convention.
    /// The symbol text is caller-supplied; there is no ISO 4217 lookup.
    pub currency_symbol: Option<String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            use_grouping: true,
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 3,
            currency_symbol: None,
        }
    }
}

impl FormatOptions {
    /// Builder method: Enable or disable digit grouping
    pub fn with_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = use_grouping;
        self
    }

    /// Builder method: Set the minimum number of fraction digits
    pub fn with_minimum_fraction_digits(mut self, digits: u8) -> Self {
        self.minimum_fraction_digits = digits;
        self
    }

    /// Builder method: Set the maximum number of fraction digits
    pub fn with_maximum_fraction_digits(mut self, digits: u8) -> Self {
        self.maximum_fraction_digits = digits;
        self
    }

    /// Builder method: Set a currency symbol to display
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = Some(symbol.into());
        self
    }

    /// The fraction-digit count amounts are rounded to (never below the minimum).
    pub fn effective_maximum_fraction_digits(&self) -> u8 {
        self.maximum_fraction_digits
            .max(self.minimum_fraction_digits)
    }
}

// ============================================================================
// Format Spec (locales + options)
// ============================================================================

/// Complete formatting configuration: an ordered locale preference list
/// plus rendering options.
///
/// An empty locale list means the default locale, en-US. Lists longer than
/// one entry act as a fallback chain; the first recognized tag wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatSpec {
    locales: SmallVec<[String; 2]>,
    options: FormatOptions,
}

impl FormatSpec {
    /// Create a spec with the default locale and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set a single locale tag
    pub fn with_locale(self, tag: impl Into<String>) -> Self {
        self.with_locales([tag.into()])
    }

    /// Builder method: Replace the locale preference list
    pub fn with_locales<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: Replace the rendering options
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// The configured locale preference list (may be empty).
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// The configured rendering options.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Resolve the locale list to concrete formatting conventions.
    pub fn conventions(&self) -> &'static LocaleConventions {
        locale::resolve(self.locales.iter().map(String::as_str))
    }

    /// Render a major-unit amount under this configuration.
    pub fn render(&self, value: f64) -> String {
        render::render(value, self.conventions(), &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = FormatOptions::default();
        assert!(opts.use_grouping);
        assert_eq!(opts.minimum_fraction_digits, 0);
        assert_eq!(opts.maximum_fraction_digits, 3);
        assert_eq!(opts.currency_symbol, None);
    }

    #[test]
    fn test_builder_pattern() {
        let opts = FormatOptions::default()
            .with_grouping(false)
            .with_minimum_fraction_digits(2)
            .with_currency_symbol("$");

        assert!(!opts.use_grouping);
        assert_eq!(opts.minimum_fraction_digits, 2);
        assert_eq!(opts.currency_symbol.as_deref(), Some("$"));
    }

    #[test]
    fn test_effective_maximum_clamps_to_minimum() {
        let opts = FormatOptions::default()
            .with_minimum_fraction_digits(4)
            .with_maximum_fraction_digits(2);
        assert_eq!(opts.effective_maximum_fraction_digits(), 4);
    }

    #[test]
    fn test_spec_resolves_default_locale() {
        let spec = FormatSpec::new();
        assert!(spec.locales().is_empty());
        assert_eq!(spec.conventions().tag, "en-US");
    }

    #[test]
    fn test_spec_locale_fallback_chain() {
        let spec = FormatSpec::new().with_locales(["xx-XX", "sv-SE"]);
        assert_eq!(spec.conventions().tag, "sv-SE");
    }

    #[test]
    fn test_spec_render_uses_options() {
        let spec = FormatSpec::new()
            .with_options(FormatOptions::default().with_grouping(false));
        assert_eq!(spec.render(1023.99), "1023.99");
    }
}
