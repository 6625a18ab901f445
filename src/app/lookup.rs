pub const DEFAULT_CURRENCY: &str = "USD";
pub const GLOBE: &str = "🌍";

/// Display symbol for a 3-letter currency code. Case-sensitive.
///
/// Unknown codes fall back to the code followed by a space, e.g. `"CHF "`.
pub fn currency_symbol(code: &str) -> String {
    match code {
        "USD" => "$",
        "INR" => "₹",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        _ => return format!("{} ", code),
    }
    .to_string()
}

pub fn region_glyph_for_currency(code: &str) -> &'static str {
    match code {
        "USD" => "🇺🇸",
        "INR" => "🇮🇳",
        "EUR" => "🇪🇺",
        "GBP" => "🇬🇧",
        "JPY" => "🇯🇵",
        _ => GLOBE,
    }
}

pub fn region_glyph_for_country(country: &str) -> &'static str {
    match country {
        "United States" => "🇺🇸",
        "India" => "🇮🇳",
        "Germany" => "🇩🇪",
        "Japan" => "🇯🇵",
        "United Kingdom" => "🇬🇧",
        _ => GLOBE,
    }
}
