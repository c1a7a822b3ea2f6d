/// Storage-agnostic boolean filter over the text fields of one entity kind
///
/// The search pipeline only ever builds these trees; evaluating them is the
/// job of the repository (SQL generation, in-memory scan, ...).
use super::search_field::{FieldSource, SearchField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterExpr<F: SearchField> {
    /// Case-insensitive substring containment on a single field
    Contains { field: F, value: String },
    And(Vec<FilterExpr<F>>),
    Or(Vec<FilterExpr<F>>),
}

impl<F: SearchField> FilterExpr<F> {
    pub fn contains(field: F, value: impl Into<String>) -> Self {
        Self::Contains {
            field,
            value: value.into(),
        }
    }

    /// Evaluate against an in-memory record.
    ///
    /// An empty `And` is true and an empty `Or` is false, matching the usual
    /// SQL identities. Absent optional fields never match.
    pub fn matches<S: FieldSource<F> + ?Sized>(&self, source: &S) -> bool {
        match self {
            Self::Contains { field, value } => source
                .field_value(*field)
                .is_some_and(|haystack| fold_contains(haystack, value)),
            Self::And(children) => children.iter().all(|child| child.matches(source)),
            Self::Or(children) => children.iter().any(|child| child.matches(source)),
        }
    }

    /// Number of leaf predicates in the tree
    pub fn predicate_count(&self) -> usize {
        match self {
            Self::Contains { .. } => 1,
            Self::And(children) | Self::Or(children) => {
                children.iter().map(Self::predicate_count).sum()
            }
        }
    }
}

/// Case-insensitive substring test
pub fn fold_contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
