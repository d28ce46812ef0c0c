//! Cyrillic to Latin transliteration
//!
//! This module holds the fixed transliteration table and the string
//! transform built on top of it. The transform is pure: identical input
//! always yields identical output, with no locale or state involved.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The fixed Cyrillic to Latin mapping, one entry per letter and case.
///
/// Covers the 33 letters of the Russian alphabet in both cases. Case is
/// held per entry rather than derived, so an uppercase letter maps to its
/// capitalised Latin form directly. The soft and hard signs map to the
/// empty string since they carry no sound of their own.
static TRANSLIT_MAP: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    const ENTRIES: [(char, &str); 66] = [
        ('А', "A"),
        ('Б', "B"),
        ('В', "V"),
        ('Г', "G"),
        ('Д', "D"),
        ('Е', "E"),
        ('Ё', "E"),
        ('Ж', "Zh"),
        ('З', "Z"),
        ('И', "I"),
        ('Й', "Y"),
        ('К', "K"),
        ('Л', "L"),
        ('М', "M"),
        ('Н', "N"),
        ('О', "O"),
        ('П', "P"),
        ('Р', "R"),
        ('С', "S"),
        ('Т', "T"),
        ('У', "U"),
        ('Ф', "F"),
        ('Х', "Kh"),
        ('Ц', "Ts"),
        ('Ч', "Ch"),
        ('Ш', "Sh"),
        ('Щ', "Sch"),
        ('Ъ', ""),
        ('Ы', "Y"),
        ('Ь', ""),
        ('Э', "E"),
        ('Ю', "Yu"),
        ('Я', "Ya"),
        ('а', "a"),
        ('б', "b"),
        ('в', "v"),
        ('г', "g"),
        ('д', "d"),
        ('е', "e"),
        ('ё', "e"),
        ('ж', "zh"),
        ('з', "z"),
        ('и', "i"),
        ('й', "y"),
        ('к', "k"),
        ('л', "l"),
        ('м', "m"),
        ('н', "n"),
        ('о', "o"),
        ('п', "p"),
        ('р', "r"),
        ('с', "s"),
        ('т', "t"),
        ('у', "u"),
        ('ф', "f"),
        ('х', "kh"),
        ('ц', "ts"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "sch"),
        ('ъ', ""),
        ('ы', "y"),
        ('ь', ""),
        ('э', "e"),
        ('ю', "yu"),
        ('я', "ya"),
    ];

    ENTRIES.iter().copied().collect()
});

/// Transliterates the given string, replacing Cyrillic characters with
/// their Latin equivalents.
///
/// Characters without a mapping pass through unchanged, so digits,
/// punctuation, Latin letters, and Cyrillic-block characters outside the
/// Russian alphabet all survive as-is.
pub fn transliterate(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match TRANSLIT_MAP.get(&ch) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(ch),
        }
    }
    result
}

/// Transliterates an optional string, mapping an absent value to an empty
/// string rather than an error.
pub fn transliterate_opt(text: Option<&str>) -> String {
    text.map(transliterate).unwrap_or_default()
}
