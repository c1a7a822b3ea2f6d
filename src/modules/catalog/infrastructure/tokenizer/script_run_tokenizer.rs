use crate::modules::catalog::application::ports::Tokenizer;
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptClass {
    Kanji,
    Hiragana,
    Katakana,
    Word,
    /// Prolonged sound mark, joins whichever kana run it follows
    KanaMark,
    Separator,
}

fn classify(c: char) -> ScriptClass {
    match c {
        'ー' | 'ｰ' => ScriptClass::KanaMark,
        '\u{3041}'..='\u{309F}' => ScriptClass::Hiragana,
        '\u{30A0}'..='\u{30FA}' | '\u{30FD}'..='\u{30FF}' | '\u{FF66}'..='\u{FF9F}' => {
            ScriptClass::Katakana
        }
        '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}' | '々' | '〆' => {
            ScriptClass::Kanji
        }
        c if c.is_alphanumeric() => ScriptClass::Word,
        _ => ScriptClass::Separator,
    }
}

/// Fallback tokenizer splitting text into runs of a single script
///
/// Runs break at whitespace, punctuation and wherever the script changes
/// between kanji, hiragana, katakana and latin/digit text. A prolonged sound
/// mark stays with the preceding kana run.
#[derive(Debug, Default, Clone)]
pub struct ScriptRunTokenizer;

impl ScriptRunTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for ScriptRunTokenizer {
    fn tokenize(&self, text: &str) -> AppResult<Vec<String>> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut current_class: Option<ScriptClass> = None;

        for c in text.chars() {
            let class = match (classify(c), current_class) {
                (ScriptClass::KanaMark, Some(prev @ (ScriptClass::Hiragana | ScriptClass::Katakana))) => prev,
                (ScriptClass::KanaMark, _) => ScriptClass::Katakana,
                (class, _) => class,
            };

            if class == ScriptClass::Separator {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                current_class = None;
                continue;
            }

            if current_class.is_some_and(|prev| prev != class) && !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            current.push(c);
            current_class = Some(class);
        }

        if !current.is_empty() {
            tokens.push(current);
        }

        log::debug!("Tokenized '{}' into {} tokens", text, tokens.len());
        Ok(tokens)
    }
}
