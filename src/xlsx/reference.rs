//! Cell reference column decoding.

/// Last column a worksheet can hold (`XFD`).
pub const MAX_COLUMN: usize = 16_383;

/// Decode the column of a cell reference such as `"C7"` or `"AB12"`.
///
/// Columns are bijective base-26 (`A` = 1 .. `Z` = 26); the result is
/// zero-based. Only uppercase ASCII letters count, and a reference without a
/// leading letter decodes to column 0.
pub fn column_index(reference: &str) -> usize {
    let value = reference
        .bytes()
        .take_while(u8::is_ascii_uppercase)
        .fold(0usize, |acc, b| {
            acc.saturating_mul(26)
                .saturating_add(usize::from(b - b'A' + 1))
        });
    value.saturating_sub(1)
}

/// Encode a zero-based column index as letters (`0` -> `"A"`, `26` -> `"AA"`).
pub fn column_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}
