//! American Soundex encoding.

/// Code returned for words with no ASCII letters.
pub const SOUNDEX_EMPTY: &str = "0000";

/// Returns the digit class of an uppercase letter, or `None` for letters that carry
/// no code (vowels, H, W, Y).
fn digit_class(letter: char) -> Option<char> {
    match letter {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None,
    }
}

/// Encodes a word as a four-character Soundex code (a letter and three digits).
///
/// Non-letters are ignored. Adjacent letters of the same class collapse to one digit,
/// while a vowel, H, W or Y between them resets the tracker so the digit repeats.
/// Words without letters encode to [`SOUNDEX_EMPTY`].
pub fn soundex(word: &str) -> String {
    let mut letters = word
        .chars()
        .map(|ch| ch.to_ascii_uppercase())
        .filter(char::is_ascii_uppercase);

    let Some(first) = letters.next() else {
        return SOUNDEX_EMPTY.to_string();
    };

    let mut code = String::with_capacity(4);
    code.push(first);
    let mut previous = digit_class(first);

    for letter in letters {
        let class = digit_class(letter);
        if let Some(digit) = class
            && class != previous
        {
            code.push(digit);
            if code.len() == 4 {
                break;
            }
        }
        previous = class;
    }

    while code.len() < 4 {
        code.push('0');
    }
    code
}
