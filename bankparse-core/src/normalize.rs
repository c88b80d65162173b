//! Line canonicalization: whitespace, Unicode punctuation, mojibake repair.

/// UTF-8 accented characters that were decoded as Latin-1 somewhere upstream.
/// Seen in Spanish-language statements ("llÃ¡menos", "compensaciÃ³n").
const MOJIBAKE: &[(&str, &str)] = &[
    ("Ã¡", "á"),
    ("Ã©", "é"),
    ("Ã­", "í"),
    ("Ã³", "ó"),
    ("Ãº", "ú"),
    ("Ã±", "ñ"),
    ("Ã¼", "ü"),
    ("Ã‰", "É"),
    ("Ã“", "Ó"),
    ("Ã‘", "Ñ"),
];

/// Canonicalize one raw line. Pure and total: never fails.
pub fn normalize_line(s: &str) -> String {
    let mut out = s
        .replace('\u{00A0}', " ")
        .replace('\u{2013}', "-")
        .replace('\u{2014}', "-")
        .replace('\u{2212}', "-");
    for (bad, good) in MOJIBAKE {
        if out.contains(bad) {
            out = out.replace(bad, good);
        }
    }
    out.trim().to_string()
}
