pub mod kana;
pub mod match_aggregator;
pub mod predicate_builder;
pub mod recency;
pub mod text_normalizer;
pub mod variant_expander;

pub use kana::{
    convert_pure_kana, hiragana_to_katakana, is_pure_hiragana, is_pure_katakana,
    katakana_to_hiragana,
};
pub use match_aggregator::SeriesMatchSet;
pub use predicate_builder::PredicateBuilder;
pub use recency::{dedupe_recent_series, RECENT_EPISODE_WINDOW};
pub use text_normalizer::{normalize, TitleNormalizer};
pub use variant_expander::{QueryVariants, VariantGroup};
