use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::modules::catalog::domain::entities::{Season, Series};

/// A text field of a catalog entity that title search can probe
pub trait SearchField: Copy + Eq + Debug + Send + Sync + 'static {
    /// Every searchable field of the entity, in probe order
    const ALL: &'static [Self];
}

/// Searchable fields of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesField {
    Title,
    TitleYomi,
    TitleEn,
}

impl SearchField for SeriesField {
    const ALL: &'static [Self] = &[Self::Title, Self::TitleYomi, Self::TitleEn];
}

/// Searchable fields of a season (seasons carry no English title)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonField {
    Title,
    TitleYomi,
}

impl SearchField for SeasonField {
    const ALL: &'static [Self] = &[Self::Title, Self::TitleYomi];
}

/// Read access to the value of a search field; `None` for absent optional fields
pub trait FieldSource<F: SearchField> {
    fn field_value(&self, field: F) -> Option<&str>;
}

impl FieldSource<SeriesField> for Series {
    fn field_value(&self, field: SeriesField) -> Option<&str> {
        match field {
            SeriesField::Title => Some(self.title.as_str()),
            SeriesField::TitleYomi => self.title_yomi.as_deref(),
            SeriesField::TitleEn => self.title_en.as_deref(),
        }
    }
}

impl FieldSource<SeasonField> for Season {
    fn field_value(&self, field: SeasonField) -> Option<&str> {
        match field {
            SeasonField::Title => Some(self.season_title.as_str()),
            SeasonField::TitleYomi => self.season_title_yomi.as_deref(),
        }
    }
}
