//! A1 notation helpers for the Sheets API.

/// 1 -> "A", 26 -> "Z", 27 -> "AA".
pub fn column_letters(mut col: usize) -> String {
    let mut out = Vec::new();
    while col > 0 {
        let rem = (col - 1) % 26;
        out.push(b'A' + rem as u8);
        col = (col - 1) / 26;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Sheet names are always quoted so spaces and punctuation survive.
pub fn quote_sheet(name: &str) -> String {
    format!("'{}'", name.replace('\'', "''"))
}

pub fn cell_range(sheet: &str, row: usize, col: usize) -> String {
    format!("{}!{}{}", quote_sheet(sheet), column_letters(col), row)
}
