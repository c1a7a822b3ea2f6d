use serde::{Deserialize, Serialize};

/// Top-level catalog entry (a show), owning zero or more seasons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Opaque identity key, unique across the catalog
    pub series_id: String,
    pub title: String,
    /// Phonetic reading, usually kana
    pub title_yomi: Option<String>,
    /// Latin / English title
    pub title_en: Option<String>,
}

impl Series {
    pub fn new(series_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            series_id: series_id.into(),
            title: title.into(),
            title_yomi: None,
            title_en: None,
        }
    }

    pub fn with_title_yomi(mut self, title_yomi: impl Into<String>) -> Self {
        self.title_yomi = Some(title_yomi.into());
        self
    }

    pub fn with_title_en(mut self, title_en: impl Into<String>) -> Self {
        self.title_en = Some(title_en.into());
        self
    }
}
