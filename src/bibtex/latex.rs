//! LaTeX character decoding
//!
//! Decodes accent commands, named letters and escaped specials to Unicode so
//! that names like `M{\"u}ller` read as `Müller`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

// \"o  \'{e}  \^{\i}; the base must follow the accent directly
static SYMBOL_ACCENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\\([`'^"~=.])(?:\{\s*(\\i|\w)\s*\}|(\\i|\w))"#)
        .expect("Invalid accent regex pattern")
});
// \v{s}  \c c  \H o
static LETTER_ACCENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\([cvurkH])(?:\s*\{\s*(\\i|\w)\s*\}|\s+(\w))")
        .expect("Invalid accent regex pattern")
});
static NAMED_LETTER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\(ss|aa|AA|ae|AE|oe|OE|o|O|l|L|i|j)(?:\{\}| |\b)")
        .expect("Invalid named letter regex pattern")
});
static COMMAND_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\[a-zA-Z]+\s*").expect("Invalid command regex pattern")
});

/// (accent, base letter) -> precomposed character
static ACCENTS: Lazy<HashMap<(char, char), char>> = Lazy::new(|| {
    let table: [(char, &str); 13] = [
        ('\'', "aáeéiíoóuúyýAÁEÉIÍOÓUÚYÝcćCĆnńNŃsśSŚzźZŹ"),
        ('`', "aàeèiìoòuùAÀEÈIÌOÒUÙ"),
        ('^', "aâeêiîoôuûAÂEÊIÎOÔUÛ"),
        ('"', "aäeëiïoöuüyÿAÄEËIÏOÖUÜYŸ"),
        ('~', "aãnñoõAÃNÑOÕ"),
        ('=', "aāeēiīoōuūAĀEĒIĪOŌUŪ"),
        ('.', "zżZŻeėEĖ"),
        ('c', "cçCÇsşSŞ"),
        ('v', "cčCČsšSŠzžZŽrřRŘeěEĚnňNŇ"),
        ('u', "aăAĂgğGĞ"),
        ('r', "aåAÅuůUŮ"),
        ('k', "aąAĄeęEĘ"),
        ('H', "oőOŐuűUŰ"),
    ];

    let mut accents = HashMap::new();
    for (accent, pairs) in table {
        let chars: Vec<char> = pairs.chars().collect();
        for pair in chars.chunks(2) {
            accents.insert((accent, pair[0]), pair[1]);
        }
    }
    accents
});

fn named_letter(name: &str) -> &'static str {
    match name {
        "ss" => "ß",
        "aa" => "å",
        "AA" => "Å",
        "ae" => "æ",
        "AE" => "Æ",
        "oe" => "œ",
        "OE" => "Œ",
        "o" => "ø",
        "O" => "Ø",
        "l" => "ł",
        "L" => "Ł",
        "i" => "ı",
        "j" => "ȷ",
        _ => "",
    }
}

/// Accent, base letter and the precomposed character if one exists
fn compose(caps: &Captures) -> (char, char, Option<char>) {
    let accent = caps[1].chars().next().unwrap_or_default();
    let base = caps.get(2).or_else(|| caps.get(3)).map(|m| m.as_str()).unwrap_or_default();
    // Accented dotless i is written as a plain i
    let letter = if base == "\\i" { 'i' } else { base.chars().next().unwrap_or_default() };
    (accent, letter, ACCENTS.get(&(accent, letter)).copied())
}

// Unknown pairs keep the symbol, so an escaped quote before a word stays a quote
fn replace_symbol_accent(caps: &Captures) -> String {
    match compose(caps) {
        (_, _, Some(composed)) => composed.to_string(),
        (accent, letter, None) => format!("{}{}", accent, letter),
    }
}

fn replace_letter_accent(caps: &Captures) -> String {
    match compose(caps) {
        (_, _, Some(composed)) => composed.to_string(),
        (_, letter, None) => letter.to_string(),
    }
}

/// Decode LaTeX markup in a field value into plain Unicode text.
///
/// Grouping braces are removed and runs of whitespace collapse to one space.
/// Commands without a Unicode equivalent are dropped, keeping their argument.
pub fn decode_latex(input: &str) -> String {
    let decoded = SYMBOL_ACCENT_REGEX.replace_all(input, replace_symbol_accent);
    let decoded = LETTER_ACCENT_REGEX.replace_all(&decoded, replace_letter_accent);
    let decoded = NAMED_LETTER_REGEX.replace_all(&decoded, |caps: &Captures| {
        named_letter(&caps[1]).to_string()
    });
    let decoded = strip_commands_and_braces(&decoded);

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Escaped specials survive COMMAND_REGEX since it only matches letters
fn strip_commands_and_braces(input: &str) -> String {
    let without_commands = COMMAND_REGEX.replace_all(input, "");
    let mut result = String::with_capacity(without_commands.len());
    let mut chars = without_commands.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&next) if "&%$#_{}".contains(next) => {
                    result.push(next);
                    chars.next();
                }
                Some(&'\\') => {
                    result.push(' ');
                    chars.next();
                }
                _ => {}
            },
            '{' | '}' => {}
            '~' => result.push(' '),
            _ => result.push(c),
        }
    }

    result
}
