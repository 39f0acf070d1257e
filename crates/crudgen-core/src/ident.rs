//! Go identifier derivation from schema-cased names.
//!
//! Column and table names arrive snake_case, occasionally digit-leading,
//! and full of abbreviations that Go convention wants upper-cased
//! (`user_id` → `UserID`). The corrections here are literal substring
//! replacements applied in a fixed order; `url` and `uid` match inside
//! longer tokens too. Generated code in the wild depends on that exact
//! matching, so it stays as-is.

/// Converts a raw schema name into a Go identifier.
///
/// The pipeline: lower-case, spell out a leading digit run, special-case
/// `dob`, split on underscores, apply the acronym corrections, title-case
/// each word, and join.
#[must_use]
pub fn go_ident(raw: &str) -> String {
    let mut name = raw.to_lowercase();
    name = spell_leading_digits(&name);
    if name == "dob" {
        name = "DOB".to_string();
    }
    name = name.replace('_', " ");
    // Ordered, substring-semantics replacements. " id" matches the token
    // boundary left by an underscore; "url"/"uid" match anywhere.
    name = name.replace(" id", "ID");
    name = name.replace("url", "URL");
    name = name.replace("uid", "UID");
    name = name.replace(" api", "API");
    name = name.replace(" ip", "IP");
    name = title_words(&name);
    name.replace(' ', "")
}

/// Replaces a leading run of ASCII digits with their spelled-out English
/// words, each digit independently ("123abc" → "onetwothreeabc"). Names
/// not starting with a digit pass through unchanged.
fn spell_leading_digits(name: &str) -> String {
    if !name.starts_with(|c: char| c.is_ascii_digit()) {
        return name.to_string();
    }
    let mut out = String::new();
    for (i, c) in name.char_indices() {
        let word = match c {
            '0' => "zero",
            '1' => "one",
            '2' => "two",
            '3' => "three",
            '4' => "four",
            '5' => "five",
            '6' => "six",
            '7' => "seven",
            '8' => "eight",
            '9' => "nine",
            _ => {
                out.push_str(&name[i..]);
                return out;
            }
        };
        out.push_str(word);
    }
    out
}

/// Upper-cases the first character of each space-delimited word, leaving
/// the rest of the word untouched (so "userID" becomes "UserID").
fn title_words(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
