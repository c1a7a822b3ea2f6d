use crate::modules::catalog::domain::value_objects::{FilterExpr, SearchField};

use super::variant_expander::QueryVariants;

/// Builds filter trees from query variants for any entity's field set
pub struct PredicateBuilder;

impl PredicateBuilder {
    /// AND over tokens, each conjunct an OR over (field x variant).
    ///
    /// Returns `None` when no token has a usable variant, so callers never
    /// run an AND of zero conjuncts (which would match everything).
    pub fn strict<F: SearchField>(variants: &QueryVariants) -> Option<FilterExpr<F>> {
        let conjuncts: Vec<FilterExpr<F>> = variants
            .usable_groups()
            .map(|group| Self::any_field_contains(&group.variants))
            .collect();

        if conjuncts.is_empty() {
            None
        } else {
            Some(FilterExpr::And(conjuncts))
        }
    }

    /// One OR over every field and every variant, whole-query ones included.
    pub fn broad<F: SearchField>(variants: &QueryVariants) -> Option<FilterExpr<F>> {
        let all = variants.all_variants();
        if all.is_empty() {
            None
        } else {
            Some(Self::any_field_contains(&all))
        }
    }

    fn any_field_contains<F: SearchField>(values: &[String]) -> FilterExpr<F> {
        let mut disjuncts = Vec::with_capacity(F::ALL.len() * values.len());
        for &field in F::ALL {
            for value in values {
                disjuncts.push(FilterExpr::contains(field, value.clone()));
            }
        }
        FilterExpr::Or(disjuncts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::entities::Series;
    use crate::modules::catalog::domain::value_objects::{SeasonField, SeriesField};

    fn expand(query: &str, tokens: &[&str]) -> QueryVariants {
        let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        QueryVariants::expand(query, &tokens)
    }

    #[test]
    fn test_strict_has_one_conjunct_per_token() {
        let variants = expand("進撃の巨人", &["進撃", "の", "巨人"]);
        let expr = PredicateBuilder::strict::<SeriesField>(&variants).unwrap();

        let FilterExpr::And(conjuncts) = &expr else {
            panic!("expected AND, got {:?}", expr);
        };
        assert_eq!(conjuncts.len(), 3);
        // "の" has two variants probed across three fields
        let FilterExpr::Or(disjuncts) = &conjuncts[1] else {
            panic!("expected OR conjunct");
        };
        assert_eq!(disjuncts.len(), 6);
        assert!(disjuncts.contains(&FilterExpr::contains(SeriesField::TitleEn, "ノ")));
    }

    #[test]
    fn test_season_expression_uses_season_fields_only() {
        let variants = expand("はりー", &["はりー"]);
        let expr = PredicateBuilder::strict::<SeasonField>(&variants).unwrap();
        // 2 fields x 2 variants
        assert_eq!(expr.predicate_count(), 4);
    }

    #[test]
    fn test_strict_is_none_without_usable_tokens() {
        assert!(PredicateBuilder::strict::<SeriesField>(&expand("!!!", &[])).is_none());
        assert!(PredicateBuilder::strict::<SeriesField>(&expand("x", &[""])).is_none());
    }

    #[test]
    fn test_and_of_tokens_differs_from_or_of_tokens() {
        let x = Series::new("x", "鋼の錬金術師");
        let y = Series::new("y", "魔法少女まどか");
        let variants = expand("錬金 魔法", &["錬金", "魔法"]);

        let strict = PredicateBuilder::strict::<SeriesField>(&variants).unwrap();
        assert!(!strict.matches(&x));
        assert!(!strict.matches(&y));

        let broad = PredicateBuilder::broad::<SeriesField>(&variants).unwrap();
        assert!(broad.matches(&x));
        assert!(broad.matches(&y));
    }

    #[test]
    fn test_broad_includes_whole_query_variants() {
        let variants = expand("Attack on Titan", &[]);
        let broad = PredicateBuilder::broad::<SeriesField>(&variants).unwrap();
        let series = Series::new("a", "進撃の巨人").with_title_en("Attack on Titan (2013)");
        assert!(broad.matches(&series));
    }
}
