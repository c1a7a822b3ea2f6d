pub mod filter_expr;
pub mod search_field;

pub use filter_expr::{fold_contains, FilterExpr};
pub use search_field::{FieldSource, SearchField, SeasonField, SeriesField};
