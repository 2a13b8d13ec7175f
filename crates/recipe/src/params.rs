use std::collections::BTreeSet;
use std::str::FromStr;

use mealtime_shared::Error;
use serde::Deserialize;

use crate::{
    DEFAULT_DIET_TYPE, DEFAULT_MAX_CAL, DEFAULT_MAX_TIME, DEFAULT_MIN_CAL, SearchQuery,
};

/// Search criteria exactly as a caller received them, before coercion.
/// `allergy_list` is comma-joined, e.g. `"1,4,10"`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub search_term: Option<String>,
    pub diet_type: Option<String>,
    pub allergy_list: Option<String>,
    pub min_cal: Option<String>,
    pub max_cal: Option<String>,
    pub max_time: Option<String>,
    pub page: Option<String>,
}

fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Calories are whole numbers on input, `"12.5"` falls back like any other
/// malformed value.
fn parse_calories(value: Option<&str>, default: f64) -> f64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .map(|calories| calories as f64)
        .unwrap_or(default)
}

/// Splits a comma-joined list of allergy ids. Empty segments are skipped.
pub fn parse_allergy_list(value: &str) -> mealtime_shared::Result<BTreeSet<i64>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment.parse::<i64>().map_err(|_| Error::InvalidParameter {
                name: "allergy_list",
                value: segment.to_owned(),
            })
        })
        .collect()
}

impl SearchParams {
    /// Numbers that do not parse fall back to their defaults. Only a malformed
    /// allergy id is rejected.
    pub fn to_search_query(&self) -> mealtime_shared::Result<SearchQuery> {
        let allergy_list = match self.allergy_list.as_deref() {
            Some(list) => parse_allergy_list(list)?,
            None => BTreeSet::new(),
        };

        Ok(SearchQuery {
            search_term: self.search_term.clone().unwrap_or_default(),
            diet_type: parse_or(self.diet_type.as_deref(), DEFAULT_DIET_TYPE),
            allergy_list,
            min_cal: parse_calories(self.min_cal.as_deref(), DEFAULT_MIN_CAL),
            max_cal: parse_calories(self.max_cal.as_deref(), DEFAULT_MAX_CAL),
            max_time: parse_or(self.max_time.as_deref(), DEFAULT_MAX_TIME),
        })
    }

    pub fn page(&self) -> i64 {
        parse_or(self.page.as_deref(), 1)
    }

    /// Query string carrying the same criteria for `page`, used to build
    /// previous and next links.
    pub fn to_query_string(&self, page: u64) -> String {
        let fields = [
            ("search_term", &self.search_term),
            ("diet_type", &self.diet_type),
            ("allergy_list", &self.allergy_list),
            ("min_cal", &self.min_cal),
            ("max_cal", &self.max_cal),
            ("max_time", &self.max_time),
        ];

        let mut pairs = fields
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(|value| format!("{key}={}", urlencoding::encode(value)))
            })
            .collect::<Vec<_>>();

        pairs.push(format!("page={page}"));
        pairs.join("&")
    }
}
