//! Number formatting shared by every textual rendering.
//!
//! Numbers print with at most five fractional digits, trailing zeros and a
//! dangling decimal point trimmed; `1.50000` prints as `1.5`, `3.0` as `3`.

const FRACTION_DIGITS: usize = 5;

/// Formats `v` with up to five fractional digits, trailing zeros trimmed.
///
/// A value that rounds to zero prints as `0`, never `-0`.
pub fn format_number(v: f64) -> String {
    let mut s = format!("{:.*}", FRACTION_DIGITS, v);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// Same as [`format_number`], with `,` separating thousands in the integer part.
///
/// Used by the divided-difference table printer, where columns hold values
/// of very different magnitude.
pub fn format_grouped(v: f64) -> String {
    let plain = format_number(v);
    if !v.is_finite() {
        return plain;
    }

    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None       => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(idx) => unsigned.split_at(idx),
        None      => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(plain.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push_str(frac_part);
    grouped
}
