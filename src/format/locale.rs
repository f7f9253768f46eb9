// ============================================================================
// Locale Conventions
// Built-in separator and grouping conventions for common locale tags
// ============================================================================
//
// This is deliberately a small static table, not an ICU binding: the crate
// only ever renders plain decimal numbers with two-decimal money semantics,
// so the full CLDR machinery would be dead weight. Unknown tags fall back
// to en-US conventions.

/// How integer digits are grouped when grouping is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitGrouping {
    /// Groups of three from the right: 1,234,567
    Thousands,
    /// South Asian scheme, three then twos: 12,34,567
    SouthAsian,
}

/// Where a configured currency symbol is placed relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// Directly before the digits: $1,023.99
    Prefix,
    /// After the digits, separated by a no-break space: 1.023,99 €
    SuffixSpaced,
}

/// Number-formatting conventions for a single locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleConventions {
    /// BCP 47-style tag this entry answers to (language-REGION)
    pub tag: &'static str,
    /// Separator between the integer and fraction digits
    pub decimal_separator: char,
    /// Separator between integer digit groups
    pub group_separator: char,
    /// Digit grouping scheme
    pub grouping: DigitGrouping,
    /// Currency symbol placement
    pub symbol_placement: SymbolPlacement,
}

/// Default conventions (en-US), used when no requested tag is recognized.
pub const EN_US: LocaleConventions = LocaleConventions {
    tag: "en-US",
    decimal_separator: '.',
    group_separator: ',',
    grouping: DigitGrouping::Thousands,
    symbol_placement: SymbolPlacement::Prefix,
};

static LOCALES: &[LocaleConventions] = &[
    EN_US,
    LocaleConventions {
        tag: "en-GB",
        decimal_separator: '.',
        group_separator: ',',
        grouping: DigitGrouping::Thousands,
        symbol_placement: SymbolPlacement::Prefix,
    },
    LocaleConventions {
        tag: "en-IN",
        decimal_separator: '.',
        group_separator: ',',
        grouping: DigitGrouping::SouthAsian,
        symbol_placement: SymbolPlacement::Prefix,
    },
    LocaleConventions {
        tag: "de-DE",
        decimal_separator: ',',
        group_separator: '.',
        grouping: DigitGrouping::Thousands,
        symbol_placement: SymbolPlacement::SuffixSpaced,
    },
    LocaleConventions {
        tag: "de-CH",
        decimal_separator: '.',
        group_separator: '\u{2019}', // right single quotation mark: 1’234.56
        grouping: DigitGrouping::Thousands,
        symbol_placement: SymbolPlacement::Prefix,
    },
    LocaleConventions {
        tag: "fr-FR",
        decimal_separator: ',',
        group_separator: '\u{202F}', // narrow no-break space: 1 234,56
        grouping: DigitGrouping::Thousands,
        symbol_placement: SymbolPlacement::SuffixSpaced,
    },
    LocaleConventions {
        tag: "es-ES",
        decimal_separator: ',',
        group_separator: '.',
        grouping: DigitGrouping::Thousands,
        symbol_placement: SymbolPlacement::SuffixSpaced,
    },
    LocaleConventions {
        tag: "it-IT",
        decimal_separator: ',',
        group_separator: '.',
        grouping: DigitGrouping::Thousands,
        symbol_placement: SymbolPlacement::SuffixSpaced,
    },
    LocaleConventions {
        tag: "nl-NL",
        decimal_separator: ',',
        group_separator: '.',
        grouping: DigitGrouping::Thousands,
        symbol_placement: SymbolPlacement::Prefix,
    },
    LocaleConventions {
        tag: "pt-BR",
        decimal_separator: ',',
        group_separator: '.',
        grouping: DigitGrouping::Thousands,
        symbol_placement: SymbolPlacement::Prefix,
    },
    LocaleConventions {
        tag: "sv-SE",
        decimal_separator: ',',
        group_separator: '\u{00A0}', // no-break space: 1 234,56
        grouping: DigitGrouping::Thousands,
        symbol_placement: SymbolPlacement::SuffixSpaced,
    },
    LocaleConventions {
        tag: "ja-JP",
        decimal_separator: '.',
        group_separator: ',',
        grouping: DigitGrouping::Thousands,
        symbol_placement: SymbolPlacement::Prefix,
    },
];

fn language_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

/// Look up a single tag, case-insensitively.
///
/// Tries the full tag first, then the bare language subtag ("de" matches
/// "de-DE"). Returns `None` for unrecognized tags.
pub fn lookup(tag: &str) -> Option<&'static LocaleConventions> {
    let tag = tag.trim();
    if let Some(exact) = LOCALES
        .iter()
        .find(|c| c.tag.eq_ignore_ascii_case(tag))
    {
        return Some(exact);
    }
    let language = language_subtag(tag);
    if language.is_empty() {
        return None;
    }
    LOCALES
        .iter()
        .find(|c| language_subtag(c.tag).eq_ignore_ascii_case(language))
}

/// Resolve an ordered list of requested tags to conventions.
///
/// The first recognized tag wins; an empty or fully-unrecognized list
/// falls back to en-US.
pub fn resolve<'a, I>(tags: I) -> &'static LocaleConventions
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter().find_map(lookup).unwrap_or(&EN_US)
}
