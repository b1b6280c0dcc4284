use std::collections::BTreeSet;

/// Placeholder shown in place of a hidden letter or digit
pub const MASK_GLYPH: char = '█';

/// Canonicalize a phrase for forgiving comparison. Case, punctuation and
/// whitespace runs are insignificant; letters and digits are not.
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{02BC}' | '`' => '\'',
            c if c.is_whitespace() => ' ',
            c => c,
        })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect();

    // Stripping punctuation can leave doubled spaces behind ("a - b")
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Two phrases are the same answer iff their normalized forms are identical.
/// A guess that normalizes to nothing never matches.
pub fn is_phrase_match(guess: &str, target: &str) -> bool {
    let guess = normalize(guess);
    !guess.is_empty() && guess == normalize(target)
}

/// Hide every letter and digit, keeping spaces and punctuation so the shape stays visible
pub fn mask(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_alphanumeric() { MASK_GLYPH } else { c })
        .collect()
}

/// Board rendering during play: revealed letters show through, the rest is masked
pub fn reveal(text: &str, revealed: &BTreeSet<char>, solved: bool) -> String {
    text.chars()
        .map(|c| {
            if !c.is_alphanumeric() || solved || revealed.contains(&c.to_ascii_lowercase()) {
                c
            } else {
                MASK_GLYPH
            }
        })
        .collect()
}
