//! GS1 mod-10 check digit

/// Compute the check digit for the digits preceding it.
///
/// Weights alternate 3, 1, ... starting from the rightmost digit. Returns
/// `None` if `digits` contains anything but ASCII digits.
pub fn check_digit(digits: &str) -> Option<u8> {
    let mut sum = 0u32;
    for (i, b) in digits.bytes().rev().enumerate() {
        if !b.is_ascii_digit() {
            return None;
        }
        let d = u32::from(b - b'0');
        sum += if i % 2 == 0 { d * 3 } else { d };
    }
    Some(((10 - sum % 10) % 10) as u8)
}

/// Whether `gtin` is all digits and ends in a correct check digit
pub fn is_valid_gtin(gtin: &str) -> bool {
    if gtin.is_empty() || !gtin.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let (body, last) = gtin.split_at(gtin.len() - 1);
    check_digit(body) == Some(last.as_bytes()[0] - b'0')
}
