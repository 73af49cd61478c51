// File: src/fold.rs
// Purpose: Strip diacritics from Latin text

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Base letters and the accented forms that fold onto them.
static FOLD_TABLE: &[(&str, &str)] = &[
    ("A", "ÀÁÂÃÄÅĀĂĄǍǞǠǺȀȂȦȺḀẠẢẤẦẨẪẬẮẰẲẴẶ"),
    ("a", "àáâãäåāăąǎǟǡǻȁȃȧḁạảấầẩẫậắằẳẵặ"),
    ("AE", "ÆǢǼ"),
    ("ae", "æǣǽ"),
    ("B", "ḂḄḆƁ"),
    ("b", "ḃḅḇƀɓ"),
    ("C", "ÇĆĈĊČƇȻḈ"),
    ("c", "çćĉċčƈȼḉ"),
    ("D", "ĎĐƊḊḌḎḐḒÐ"),
    ("d", "ďđɗḋḍḏḑḓð"),
    ("E", "ÈÉÊËĒĔĖĘĚȄȆȨɆḔḖḘḚḜẸẺẼẾỀỂỄỆ"),
    ("e", "èéêëēĕėęěȅȇȩɇḕḗḙḛḝẹẻẽếềểễệ"),
    ("F", "ḞƑ"),
    ("f", "ḟƒ"),
    ("G", "ĜĞĠĢƓǤǦǴḠ"),
    ("g", "ĝğġģɠǥǧǵḡ"),
    ("H", "ĤĦȞḢḤḦḨḪ"),
    ("h", "ĥħȟḣḥḧḩḫẖ"),
    ("I", "ÌÍÎÏĨĪĬĮİƗǏȈȊḬḮỈỊ"),
    ("i", "ìíîïĩīĭįıɨǐȉȋḭḯỉị"),
    ("IJ", "Ĳ"),
    ("ij", "ĳ"),
    ("J", "ĴɈ"),
    ("j", "ĵǰɉ"),
    ("K", "ĶƘǨḰḲḴ"),
    ("k", "ķƙǩḱḳḵĸ"),
    ("L", "ĹĻĽĿŁȽḶḸḺḼ"),
    ("l", "ĺļľŀłƚḷḹḻḽ"),
    ("M", "ḾṀṂ"),
    ("m", "ḿṁṃ"),
    ("N", "ÑŃŅŇǸṄṆṈṊ"),
    ("n", "ñńņňŉǹṅṇṉṋ"),
    ("O", "ÒÓÔÕÖØŌŎŐƟƠǑǪǬǾȌȎȪȬȮȰṌṎṐṒỌỎỐỒỔỖỘỚỜỞỠỢ"),
    ("o", "òóôõöøōŏőɵơǒǫǭǿȍȏȫȭȯȱṍṏṑṓọỏốồổỗộớờởỡợ"),
    ("OE", "Œ"),
    ("oe", "œ"),
    ("P", "ṔṖƤ"),
    ("p", "ṕṗƥ"),
    ("R", "ŔŖŘȐȒɌṘṚṜṞ"),
    ("r", "ŕŗřȑȓɍṙṛṝṟ"),
    ("S", "ŚŜŞŠȘṠṢṤṦṨ"),
    ("s", "śŝşšșṡṣṥṧṩſ"),
    ("ss", "ß"),
    ("T", "ŢŤŦƬƮȚȾṪṬṮṰ"),
    ("t", "ţťŧƫƭțṫṭṯṱẗ"),
    ("TH", "Þ"),
    ("th", "þ"),
    ("U", "ÙÚÛÜŨŪŬŮŰŲƯǓǕǗǙǛȔȖɄṲṴṶṸṺỤỦỨỪỬỮỰ"),
    ("u", "ùúûüũūŭůűųưǔǖǘǚǜȕȗʉṳṵṷṹṻụủứừửữự"),
    ("V", "ṼṾƲ"),
    ("v", "ṽṿʋ"),
    ("W", "ŴẀẂẄẆẈ"),
    ("w", "ŵẁẃẅẇẉẘ"),
    ("X", "ẊẌ"),
    ("x", "ẋẍ"),
    ("Y", "ÝŶŸƳȲɎẎỲỴỶỸ"),
    ("y", "ýÿŷƴȳɏẏẙỳỵỷỹ"),
    ("Z", "ŹŻŽƵȤẐẒẔ"),
    ("z", "źżžƶȥẑẓẕ"),
];

static FOLD_MAP: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    FOLD_TABLE
        .iter()
        .flat_map(|(base, accented)| accented.chars().map(move |c| (c, *base)))
        .collect()
});

/// Replace every accented Latin letter in `text` with its base letter.
///
/// Precomposed letters are looked up in the fold table ("é" becomes "e",
/// "æ" becomes "ae"). Combining marks that follow a Latin letter are
/// dropped, so decomposed input folds the same way. Everything else,
/// including non-Latin scripts, passes through unchanged.
///
/// ```
/// assert_eq!(valinator_checks::fold("Zoë Łukasz-Brontë"), "Zoe Lukasz-Bronte");
/// assert_eq!(valinator_checks::fold("Ελένη"), "Ελένη");
/// ```
pub fn fold(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());

    for c in text.chars() {
        if is_combining_mark(c) && folded.ends_with(|prev: char| prev.is_ascii_alphabetic()) {
            continue;
        }

        match FOLD_MAP.get(&c) {
            Some(base) => folded.push_str(base),
            None => folded.push(c),
        }
    }

    folded
}

fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}' | '\u{1AB0}'..='\u{1AFF}' | '\u{1DC0}'..='\u{1DFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_precomposed() {
        assert_eq!(fold("é"), "e");
        assert_eq!(fold("José Ñúñez"), "Jose Nunez");
        assert_eq!(fold("Søren Ærø"), "Soren AEro");
        assert_eq!(fold("Straße"), "Strasse");
        assert_eq!(fold("Dvořák"), "Dvorak");
    }

    #[test]
    fn test_fold_decomposed() {
        assert_eq!(fold("e\u{0301}"), "e");
        assert_eq!(fold("Rene\u{0301}e"), "Renee");
    }

    #[test]
    fn test_fold_passes_through_other_text() {
        assert_eq!(fold("plain ascii 123"), "plain ascii 123");
        assert_eq!(fold("東京"), "東京");
        assert_eq!(fold("Ελένη"), "Ελένη");
        assert_eq!(fold(""), "");
    }

    #[test]
    fn test_fold_keeps_marks_on_non_latin_bases() {
        let greek = "\u{03B5}\u{0301}";
        assert_eq!(fold(greek), greek);
    }

    #[test]
    fn test_fold_table_has_no_conflicts() {
        let total: usize = FOLD_TABLE.iter().map(|(_, accented)| accented.chars().count()).sum();
        assert_eq!(FOLD_MAP.len(), total);
    }
}
