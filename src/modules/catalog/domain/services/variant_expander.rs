use super::{kana::convert_pure_kana, text_normalizer::normalize};

/// Spelling alternatives of one tokenizer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantGroup {
    pub token: String,
    /// Distinct, non-empty probe strings; the token itself comes first when non-empty
    pub variants: Vec<String>,
}

impl VariantGroup {
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Every probe string derived from one search query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryVariants {
    /// Variants of the query as a whole; only the broad expression uses them
    pub whole_query: Vec<String>,
    /// One group per distinct token, in first-seen order
    pub token_groups: Vec<VariantGroup>,
}

impl QueryVariants {
    /// Expand a query and the tokens the tokenizer produced for the raw query.
    ///
    /// Tokens must come from the raw, unnormalized text.
    pub fn expand(query: &str, tokens: &[String]) -> Self {
        let mut whole_query = Vec::new();
        push_unique(&mut whole_query, query.to_string());
        let normalized_query = normalize(query);
        if let Some(converted) = convert_pure_kana(&normalized_query) {
            push_unique(&mut whole_query, normalized_query);
            push_unique(&mut whole_query, converted);
        } else {
            push_unique(&mut whole_query, normalized_query);
        }

        let mut token_groups: Vec<VariantGroup> = Vec::new();
        for token in tokens {
            if token_groups.iter().any(|group| &group.token == token) {
                continue;
            }
            token_groups.push(Self::expand_token(token));
        }

        Self {
            whole_query,
            token_groups,
        }
    }

    fn expand_token(token: &str) -> VariantGroup {
        let mut variants = Vec::new();
        let normalized = normalize(token);

        push_unique(&mut variants, token.to_string());
        if let Some(converted) = convert_pure_kana(token) {
            push_unique(&mut variants, converted);
        }
        if let Some(converted) = convert_pure_kana(&normalized) {
            push_unique(&mut variants, normalized.clone());
            push_unique(&mut variants, converted);
        } else {
            push_unique(&mut variants, normalized);
        }

        VariantGroup {
            token: token.to_string(),
            variants,
        }
    }

    /// Groups that carry at least one probe string
    pub fn usable_groups(&self) -> impl Iterator<Item = &VariantGroup> {
        self.token_groups.iter().filter(|group| !group.is_empty())
    }

    pub fn has_usable_tokens(&self) -> bool {
        self.usable_groups().next().is_some()
    }

    /// Whole-query variants followed by every token variant, deduplicated
    pub fn all_variants(&self) -> Vec<String> {
        let mut all = Vec::new();
        for variant in self
            .whole_query
            .iter()
            .chain(self.token_groups.iter().flat_map(|group| group.variants.iter()))
        {
            push_unique(&mut all, variant.clone());
        }
        all
    }
}

fn push_unique(variants: &mut Vec<String>, candidate: String) {
    if !candidate.is_empty() && !variants.contains(&candidate) {
        variants.push(candidate);
    }
}
