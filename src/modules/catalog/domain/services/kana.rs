/// Offset between a hiragana letter and its katakana counterpart
const KANA_OFFSET: u32 = 0x60;

const PROLONGED_SOUND_MARK: char = 'ー';

fn is_hiragana_letter(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}' | '\u{309D}'..='\u{309E}')
}

fn is_katakana_letter(c: char) -> bool {
    matches!(c, '\u{30A1}'..='\u{30FA}' | '\u{30FD}'..='\u{30FE}')
}

fn is_pure(s: &str, is_letter: fn(char) -> bool) -> bool {
    let mut saw_letter = false;
    for c in s.chars() {
        if is_letter(c) {
            saw_letter = true;
        } else if c != PROLONGED_SOUND_MARK {
            return false;
        }
    }
    saw_letter
}

/// True when `s` is non-empty and made only of hiragana letters.
///
/// The prolonged sound mark is shared by both kana scripts and is accepted,
/// but at least one actual hiragana letter must be present.
pub fn is_pure_hiragana(s: &str) -> bool {
    is_pure(s, is_hiragana_letter)
}

/// True when `s` is non-empty and made only of katakana letters (see `is_pure_hiragana`).
pub fn is_pure_katakana(s: &str) -> bool {
    is_pure(s, is_katakana_letter)
}

fn shift(c: char, up: bool) -> char {
    let code = c as u32;
    let shifted = if up {
        code + KANA_OFFSET
    } else {
        code - KANA_OFFSET
    };
    char::from_u32(shifted).unwrap_or(c)
}

pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{3041}'..='\u{3096}' | '\u{309D}'..='\u{309E}' => shift(c, true),
            _ => c,
        })
        .collect()
}

pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{30A1}'..='\u{30F6}' | '\u{30FD}'..='\u{30FE}' => shift(c, false),
            _ => c,
        })
        .collect()
}

/// The other-script form of `s` when `s` is pure hiragana or pure katakana.
///
/// Mixed-script and kanji strings yield `None`: converting them would change
/// meaning rather than spelling. So do kana with no counterpart in the other
/// script (ヷ..ヺ), where conversion leaves the string unchanged.
pub fn convert_pure_kana(s: &str) -> Option<String> {
    let converted = if is_pure_hiragana(s) {
        hiragana_to_katakana(s)
    } else if is_pure_katakana(s) {
        katakana_to_hiragana(s)
    } else {
        return None;
    };
    (converted != s).then_some(converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier() {
        assert!(is_pure_hiragana("はりー"));
        assert!(is_pure_katakana("ハリー"));
        assert!(!is_pure_hiragana("ハリー"));
        assert!(!is_pure_katakana("はりー"));
        assert!(!is_pure_hiragana(""));
        assert!(!is_pure_katakana("ー"));
        assert!(!is_pure_hiragana("進撃のきょじん"));
        assert!(!is_pure_katakana("ソード・アート"));
        assert!(!is_pure_katakana("ハリー ポッター"));
    }

    #[test]
    fn test_conversion_examples() {
        assert_eq!(hiragana_to_katakana("はりー"), "ハリー");
        assert_eq!(katakana_to_hiragana("ハリー"), "はりー");
        assert_eq!(katakana_to_hiragana("ヴ"), "ゔ");
        assert_eq!(hiragana_to_katakana("ゝゞ"), "ヽヾ");
        // Outside the source block passes through
        assert_eq!(hiragana_to_katakana("進撃のABC"), "進撃ノABC");
        assert_eq!(katakana_to_hiragana("ヷ漢"), "ヷ漢");
    }

    #[test]
    fn test_hiragana_round_trip_over_whole_block() {
        let block: String = ('\u{3040}'..='\u{309F}').collect();
        assert_eq!(katakana_to_hiragana(&hiragana_to_katakana(&block)), block);
    }

    #[test]
    fn test_katakana_round_trip_over_whole_block() {
        let block: String = ('\u{30A0}'..='\u{30FF}').collect();
        assert_eq!(hiragana_to_katakana(&katakana_to_hiragana(&block)), block);
    }

    #[test]
    fn test_convert_pure_kana() {
        assert_eq!(convert_pure_kana("しんげき").as_deref(), Some("シンゲキ"));
        assert_eq!(convert_pure_kana("シンゲキ").as_deref(), Some("しんげき"));
        assert_eq!(convert_pure_kana("進撃"), None);
        assert_eq!(convert_pure_kana("abc"), None);
    }

    #[test]
    fn test_convert_pure_kana_without_counterpart() {
        assert!(is_pure_katakana("ヷ"));
        assert_eq!(convert_pure_kana("ヷ"), None);
        assert_eq!(convert_pure_kana("ヷー"), None);
        assert_eq!(convert_pure_kana("ヷン").as_deref(), Some("ヷん"));
    }
}
