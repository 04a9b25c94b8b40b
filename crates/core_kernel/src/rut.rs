//! RUT normalization and check-digit helpers
//!
//! The RUT is the national identifier used as the unique policy-holder key.
//! Callers may supply it in any human-readable form: with or without
//! thousands separators, with or without the check-digit dash, and with the
//! `k` check character in either case. Storage and equality comparison use
//! the canonical form produced by [`normalize`].
//!
//! Format validation is a concern of the API boundary; these helpers never
//! reject input.

/// Produces the canonical form of a RUT: separators stripped, uppercased.
///
/// Total over all strings; malformed input passes through unchanged apart
/// from separator removal.
///
/// # Example
///
/// ```
/// use core_kernel::rut::normalize;
///
/// assert_eq!(normalize("13.757.397-0"), "137573970");
/// assert_eq!(normalize("12.345.678-k"), "12345678K");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '.' && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Computes the modulo-11 check digit for a RUT body.
///
/// Returns `'0'`-`'9'` or `'K'`. Backs request validation at the API
/// boundary and the test-data generators; the domain service itself never
/// checks digits.
pub fn check_digit(body: u32) -> char {
    let mut sum: u32 = 0;
    let mut factor: u32 = 2;
    let mut rest = body;
    while rest > 0 {
        sum += (rest % 10) * factor;
        factor = if factor == 7 { 2 } else { factor + 1 };
        rest /= 10;
    }
    match 11 - (sum % 11) {
        11 => '0',
        10 => 'K',
        d => char::from_digit(d, 10).unwrap_or('0'),
    }
}

/// Formats a RUT body with thousands separators and its check digit,
/// e.g. `13757397` -> `"13.757.397-0"`.
pub fn format(body: u32) -> String {
    let digits = body.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped.push('-');
    grouped.push(check_digit(body));
    grouped
}
