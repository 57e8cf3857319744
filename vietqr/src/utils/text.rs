//! Character-level string helpers.

/// Split `s` after its first `n` characters.
///
/// Returns `None` when `s` holds fewer than `n` characters. The split always
/// lands on a char boundary.
///
/// Example: `split_chars("3805", 2)` -> `Some(("38", "05"))`
pub fn split_chars(s: &str, n: usize) -> Option<(&str, &str)> {
    if n == 0 {
        return Some(("", s));
    }
    match s.char_indices().nth(n) {
        Some((idx, _)) => Some(s.split_at(idx)),
        None if s.chars().count() == n => Some((s, "")),
        None => None,
    }
}

/// Number of characters (Unicode scalar values) in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Keep only ASCII digits.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Insert `sep` between every group of three digits, counting from the right.
///
/// Example: `group_thousands("1234567", ',')` -> `"1,234,567"`
pub fn group_thousands(digits: &str, sep: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}
