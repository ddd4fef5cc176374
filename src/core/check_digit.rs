//! ICAO 9303 7-3-1 check digits.

const WEIGHTS: [u32; 3] = [7, 3, 1];

/// Numeric value of an MRZ character.
///
/// `0`–`9` map to 0–9, `A`–`Z` to 10–35. The filler `<` and every other
/// character (lowercase included) count as 0.
pub fn char_value(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A'..='Z' => c as u32 - 'A' as u32 + 10,
        _ => 0,
    }
}

/// Compute the ICAO 7-3-1 check digit of `text`.
///
/// Total over any input: the empty string yields `'0'`.
///
/// ```
/// use mrzkit::check_digit;
///
/// assert_eq!(check_digit("L898902C3"), '6');
/// assert_eq!(check_digit(""), '0');
/// ```
pub fn check_digit(text: &str) -> char {
    let sum: u32 = text
        .chars()
        .zip(WEIGHTS.iter().cycle())
        .map(|(c, w)| char_value(c) * w)
        .fold(0, |acc, v| (acc + v) % 10);
    char::from(b'0' + sum as u8)
}

/// Whether `digit` is the check digit of `text`.
pub fn verify_check_digit(text: &str, digit: char) -> bool {
    check_digit(text) == digit
}
