//! GS1 two-digit year window

/// Expand a two-digit GS1 year.
///
/// `50..=99` map to the 1900s and `00..=49` to the 2000s. The threshold is
/// fixed and does not depend on the current date.
pub const fn expand_year(yy: u8) -> u16 {
    if yy >= 50 {
        1900 + yy as u16
    } else {
        2000 + yy as u16
    }
}

/// Reformat a `YYMMDD` value as `YYYY-MM-DD`.
///
/// Returns `None` unless given exactly six ASCII digits. Month and day are
/// copied as written; a day of `00` is kept.
pub fn format_expiry(yymmdd: &str) -> Option<String> {
    if yymmdd.len() != 6 || !yymmdd.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let yy: u8 = yymmdd[..2].parse().ok()?;
    Some(format!(
        "{}-{}-{}",
        expand_year(yy),
        &yymmdd[2..4],
        &yymmdd[4..6]
    ))
}
