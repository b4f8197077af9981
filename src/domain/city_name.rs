//! Presentation-layer city name formatting.
//!
//! Cities are stored exactly as the caller typed them. Both read paths
//! format them with [`title_case`] on the way out.

/// Capitalizes every word of `input` and lowercases the rest.
///
/// A word starts at any cased letter that does not directly follow another
/// cased letter, so `"new york"` becomes `"New York"`, `"o'higgins"` becomes
/// `"O'Higgins"` and `"SAINT-ÉTIENNE"` becomes `"Saint-Étienne"`.
///
/// Word-initial letters take their titlecase form rather than their
/// uppercase form: `"ßtadt"` becomes `"Sstadt"` and `"ǆemal"` becomes
/// `"ǅemal"`. Following letters are lowercased one character at a time,
/// so word-final sigma is not context-sensitive.
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_cased = false;

    for ch in input.chars() {
        let cased = is_cased(ch);
        if cased && previous_cased {
            out.extend(ch.to_lowercase());
        } else if cased {
            push_titlecase(&mut out, ch);
        } else {
            out.push(ch);
        }
        previous_cased = cased;
    }

    out
}

fn is_cased(ch: char) -> bool {
    ch.is_uppercase() || ch.is_lowercase() || single_titlecase(ch).is_some()
}

/// Appends the titlecase form of `ch`.
///
/// When the uppercase form expands to several characters, only the first
/// cased one stays uppercase (`ß` → `Ss`, `ﬁ` → `Fi`, `ŉ` → `ʼN`).
fn push_titlecase(out: &mut String, ch: char) {
    if let Some(title) = single_titlecase(ch) {
        out.push(title);
        return;
    }
    let mut seen_cased = false;
    for upper in ch.to_uppercase() {
        if seen_cased {
            out.extend(upper.to_lowercase());
        } else {
            out.push(upper);
            seen_cased = upper.is_uppercase() || upper.is_lowercase();
        }
    }
}

/// Letters whose titlecase form is a single character different from
/// their uppercase form: Latin digraphs and Greek letters with iota
/// subscript.
fn single_titlecase(ch: char) -> Option<char> {
    match ch {
        'Ǆ' | 'ǅ' | 'ǆ' => Some('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => Some('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => Some('ǋ'),
        'Ǳ' | 'ǲ' | 'ǳ' => Some('ǲ'),
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(u32::from(ch) + 8)
        }
        '\u{1F88}'..='\u{1F8F}'
        | '\u{1F98}'..='\u{1F9F}'
        | '\u{1FA8}'..='\u{1FAF}'
        | '\u{1FBC}'
        | '\u{1FCC}'
        | '\u{1FFC}' => Some(ch),
        '\u{1FB3}' => Some('\u{1FBC}'),
        '\u{1FC3}' => Some('\u{1FCC}'),
        '\u{1FF3}' => Some('\u{1FFC}'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_single_word() {
        assert_eq!(title_case("london"), "London");
    }

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("rio de janeiro"), "Rio De Janeiro");
    }

    #[test]
    fn lowercases_shouting() {
        assert_eq!(title_case("PARIS"), "Paris");
        assert_eq!(title_case("sAN fRANCISCO"), "San Francisco");
    }

    #[test]
    fn punctuation_starts_a_new_word() {
        assert_eq!(title_case("o'higgins"), "O'Higgins");
        assert_eq!(title_case("stratford-upon-avon"), "Stratford-Upon-Avon");
    }

    #[test]
    fn handles_non_ascii_letters() {
        assert_eq!(title_case("SAINT-ÉTIENNE"), "Saint-Étienne");
        assert_eq!(title_case("münchen"), "München");
    }

    #[test]
    fn expanding_uppercase_keeps_one_capital() {
        assert_eq!(title_case("ßtadt"), "Sstadt");
        assert_eq!(title_case("ﬁji"), "Fiji");
        assert_eq!(title_case("ŉ"), "ʼN");
    }

    #[test]
    fn digraphs_use_titlecase_form() {
        assert_eq!(title_case("ǆemal"), "ǅemal");
        assert_eq!(title_case("ǄEMAL"), "ǅemal");
        assert_eq!(title_case("ǉubljana"), "ǈubljana");
    }

    #[test]
    fn titlecase_letter_counts_as_cased() {
        // The digraph is already cased, so the next letter is lowercased.
        assert_eq!(title_case("ǅA"), "ǅa");
        assert_eq!(title_case("aǅ"), "Aǆ");
    }

    #[test]
    fn greek_iota_subscript_titlecases() {
        assert_eq!(title_case("ᾳ"), "ᾼ");
        assert_eq!(title_case("ᾀ"), "ᾈ");
    }

    #[test]
    fn preserves_whitespace_and_digits() {
        assert_eq!(title_case("  la paz "), "  La Paz ");
        assert_eq!(title_case("district 9"), "District 9");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(title_case(""), "");
    }
}
