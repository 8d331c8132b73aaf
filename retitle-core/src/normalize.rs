//! Canonical title normalization.
//!
//! A free-form folder title is broken into word runs and reassembled as
//! `Pascal_Case_With_Underscores`:
//! - `"team offsite"` → `"Team_Offsite"`
//! - `"My-Great Idea!"` → `"My_Great_Idea"`
//! - `"USA trip"` → `"USA_Trip"`
//! - `"mcDonald farm"` → `"McDonald_Farm"`

/// Classification of a single character for tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Letters (including accented Latin), digits and underscore
    Word,
    /// `-`, `/`, `,` and `&`, treated as spaces
    Separator,
    Whitespace,
    /// Punctuation and symbols, also treated as spaces
    Other,
}

/// Latin-1 Supplement and Latin Extended-A, kept as word characters verbatim.
const EXTENDED_LATIN: std::ops::RangeInclusive<char> = '\u{00C0}'..='\u{017F}';

pub fn classify(c: char) -> CharClass {
    match c {
        '-' | '/' | ',' | '&' => CharClass::Separator,
        '_' => CharClass::Word,
        c if c.is_alphanumeric() || EXTENDED_LATIN.contains(&c) => CharClass::Word,
        c if c.is_whitespace() => CharClass::Whitespace,
        _ => CharClass::Other,
    }
}

pub fn is_word_char(c: char) -> bool {
    classify(c) == CharClass::Word
}

/// Split a title into its maximal runs of word characters.
///
/// Separators, whitespace and any other character all end the current run,
/// so `"rock&roll"` yields `["rock", "roll"]` rather than one merged word.
pub fn tokenize(title: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, c) in title.char_indices() {
        if is_word_char(c) {
            if start.is_none() {
                start = Some(idx);
            }
        } else if let Some(begin) = start.take() {
            tokens.push(&title[begin..idx]);
        }
    }

    if let Some(begin) = start {
        tokens.push(&title[begin..]);
    }

    tokens
}

/// Apply the canonical casing to a single token.
///
/// Casing is decided per underscore-delimited segment, and underscores are
/// kept verbatim, so `"random_folder"` becomes `"Random_Folder"`.
pub fn case_token(token: &str) -> String {
    token
        .split('_')
        .map(case_segment)
        .collect::<Vec<_>>()
        .join("_")
}

/// All-uppercase segments (acronyms) and segments without letters are kept as
/// is. Everything else only has its first character uppercased; the remainder
/// is never touched, so `"mcDonald"` becomes `"McDonald"`.
fn case_segment(segment: &str) -> String {
    if segment.chars().any(char::is_lowercase) {
        uppercase_first(segment)
    } else {
        segment.to_string()
    }
}

/// Uppercase the first character, unless its uppercase form contains a
/// non-word character (`ǰ` → `J` + U+030C). A combining mark would split the
/// token on the next pass, so such letters are kept as they are.
fn uppercase_first(token: &str) -> String {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut output = String::with_capacity(token.len());
    if first.to_uppercase().all(is_word_char) {
        output.extend(first.to_uppercase());
    } else {
        output.push(first);
    }
    output.extend(chars);
    output
}

/// Convert a free-form title into its canonical underscore-joined form.
///
/// Never fails; a title without any word characters yields an empty string.
pub fn normalize_title(title: &str) -> String {
    tokenize(title)
        .into_iter()
        .map(case_token)
        .collect::<Vec<_>>()
        .join("_")
}
