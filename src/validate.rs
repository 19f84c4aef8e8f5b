use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEX_RE: Regex =
        Regex::new(r"^(?i)(?:[0-9a-f]{3}|[0-9a-f]{6}|[0-9a-f]{8})$").unwrap();
    // ASCII digits only; `\d` would also match other Unicode digits.
    pub(crate) static ref RGB_RE: Regex = Regex::new(concat!(
        r"^rgba?\(\s*([0-9]{1,3}%?)\s*,\s*([0-9]{1,3}%?)\s*,\s*([0-9]{1,3}%?)\s*",
        r"(?:,\s*(0|1(?:\.0+)?|0?\.[0-9]+)\s*)?\)$",
    ))
    .unwrap();
}

/// Tests whether `input` is a HEX color: 3, 6 or 8 hex digits, optionally
/// prefixed by a single `#`.
pub fn is_valid_hex(input: &str) -> bool {
    let digits = input.strip_prefix('#').unwrap_or(input);
    HEX_RE.is_match(digits)
}

/// Syntactic check for `rgb(r, g, b)` / `rgba(r, g, b, a)`.
///
/// Components are 1-3 digits with an optional `%`; they are not range
/// checked here, so `rgb(999,0,0)` passes.
pub fn is_valid_rgb(input: &str) -> bool {
    RGB_RE.is_match(input)
}
