/// Translation of `FilterExpr` trees into boxed diesel conditions
use diesel::dsl::sql;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Bool;

use crate::modules::catalog::domain::value_objects::{
    FilterExpr, SearchField, SeasonField, SeriesField,
};
use crate::schema::{seasons, series};

pub type Condition<QS> = Box<dyn BoxableExpression<QS, Pg, SqlType = Bool>>;

/// Escape LIKE metacharacters (backslash is the default escape in Postgres)
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `%value%` with metacharacters escaped
pub fn contains_pattern(value: &str) -> String {
    format!("%{}%", escape_like(value))
}

fn to_condition<F, QS>(expr: &FilterExpr<F>, leaf: &dyn Fn(F, String) -> Condition<QS>) -> Condition<QS>
where
    F: SearchField,
    QS: 'static,
{
    match expr {
        FilterExpr::Contains { field, value } => leaf(*field, contains_pattern(value)),
        FilterExpr::And(children) => children
            .iter()
            .map(|child| to_condition(child, leaf))
            .reduce(|left, right| Box::new(left.and(right)))
            .unwrap_or_else(|| Box::new(sql::<Bool>("TRUE"))),
        FilterExpr::Or(children) => children
            .iter()
            .map(|child| to_condition(child, leaf))
            .reduce(|left, right| Box::new(left.or(right)))
            .unwrap_or_else(|| Box::new(sql::<Bool>("FALSE"))),
    }
}

// Nullable columns are compared with `assume_not_null`: NULL ILIKE x is NULL,
// which never satisfies a WHERE clause built only from AND/OR.

fn series_leaf(field: SeriesField, pattern: String) -> Condition<series::table> {
    match field {
        SeriesField::Title => Box::new(series::title.ilike(pattern)),
        SeriesField::TitleYomi => Box::new(series::title_yomi.assume_not_null().ilike(pattern)),
        SeriesField::TitleEn => Box::new(series::title_en.assume_not_null().ilike(pattern)),
    }
}

fn season_leaf(field: SeasonField, pattern: String) -> Condition<seasons::table> {
    match field {
        SeasonField::Title => Box::new(seasons::season_title.ilike(pattern)),
        SeasonField::TitleYomi => {
            Box::new(seasons::season_title_yomi.assume_not_null().ilike(pattern))
        }
    }
}

pub fn series_condition(expr: &FilterExpr<SeriesField>) -> Condition<series::table> {
    to_condition(expr, &series_leaf)
}

pub fn season_condition(expr: &FilterExpr<SeasonField>) -> Condition<seasons::table> {
    to_condition(expr, &season_leaf)
}
