use std::sync::OnceLock;

static SEARCH_PIPELINE: OnceLock<TitleNormalizer> = OnceLock::new();

/// Canonical long-vowel mark (KATAKANA-HIRAGANA PROLONGED SOUND MARK)
pub const LONG_VOWEL_MARK: char = 'ー';
/// Canonical middle dot (KATAKANA MIDDLE DOT)
pub const MIDDLE_DOT: char = '・';

/// Transformation that can be applied to a title
///
/// Each transformation is composable and testable in isolation.
pub trait TitleTransformation: Send + Sync {
    fn transform(&self, title: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Locale-independent lowercase
#[derive(Debug, Clone)]
pub struct LowercaseTransform;

impl TitleTransformation for LowercaseTransform {
    fn transform(&self, title: &str) -> String {
        title.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "Lowercase"
    }
}

/// Collapses look-alike kana symbols and drops whitespace
///
/// `ー` / `-` / `ｰ` become `ー`, `・` / `･` become `・`, and every whitespace
/// character (including the ideographic space) is removed outright.
#[derive(Debug, Clone)]
pub struct UnifySymbolsTransform;

impl TitleTransformation for UnifySymbolsTransform {
    fn transform(&self, title: &str) -> String {
        title
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'ー' | '-' | 'ｰ' => LONG_VOWEL_MARK,
                '・' | '･' => MIDDLE_DOT,
                other => other,
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "UnifySymbols"
    }
}

/// Title normalizer that applies a pipeline of transformations
pub struct TitleNormalizer {
    transformations: Vec<Box<dyn TitleTransformation>>,
}

impl TitleNormalizer {
    /// Create a new empty normalizer
    pub fn new() -> Self {
        Self {
            transformations: Vec::new(),
        }
    }

    /// The pipeline used for search probes: lowercase, then symbol unification
    pub fn search_pipeline() -> Self {
        Self::new().with_lowercase().with_unify_symbols()
    }

    pub fn with_lowercase(mut self) -> Self {
        self.transformations.push(Box::new(LowercaseTransform));
        self
    }

    pub fn with_unify_symbols(mut self) -> Self {
        self.transformations.push(Box::new(UnifySymbolsTransform));
        self
    }

    /// Apply all transformations to the title
    pub fn normalize(&self, title: &str) -> String {
        let mut result = title.to_string();

        for transformation in &self.transformations {
            result = transformation.transform(&result);
            log::trace!("After {}: '{}'", transformation.name(), result);
        }

        result
    }

    pub fn transformation_count(&self) -> usize {
        self.transformations.len()
    }
}

impl Default for TitleNormalizer {
    fn default() -> Self {
        Self::search_pipeline()
    }
}

/// Normalize a string for probing: case-fold, unify symbols, strip whitespace.
///
/// Kana script is left alone; script conversion is a separate variant.
/// Idempotent.
pub fn normalize(s: &str) -> String {
    SEARCH_PIPELINE
        .get_or_init(TitleNormalizer::search_pipeline)
        .normalize(s)
}
