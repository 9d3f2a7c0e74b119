/// Parses the leading integer of `s`, ignoring leading whitespace and any
/// trailing non-digit text. `"12"`, `" 12"` and `"12abc"` all yield `12`;
/// `""`, `"abc"` and `"-"` yield `None`.
pub fn parse_int(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Integer value of an optional string as `f64`, or NaN when absent or unparseable.
///
/// NaN is deliberately carried into scores and sort keys instead of a default.
pub fn int_or_nan(value: Option<&str>) -> f64 {
    value
        .and_then(parse_int)
        .map(|v| v as f64)
        .unwrap_or(f64::NAN)
}
