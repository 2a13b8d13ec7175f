use std::collections::BTreeSet;

use mealtime_recipe::{DEFAULT_DIET_TYPE, SearchParams, SearchQuery};
use mealtime_shared::{Allergy, DietType};
use serde::Serialize;

/// Saved search defaults of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub diet_type: i64,
    pub allergies: BTreeSet<i64>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            diet_type: DEFAULT_DIET_TYPE,
            allergies: BTreeSet::new(),
        }
    }
}

impl Preferences {
    /// Fills the diet type and allergy criteria `params` left out. Values the
    /// caller gave explicitly are kept.
    pub fn apply(&self, params: &SearchParams, mut query: SearchQuery) -> SearchQuery {
        if params.diet_type.is_none() {
            query.diet_type = self.diet_type;
        }
        if params.allergy_list.is_none() {
            query.allergy_list = self.allergies.clone();
        }

        query
    }

    /// Human readable description of the filters these preferences apply,
    /// one line per filter.
    pub fn summary(&self) -> Vec<String> {
        let diet = DietType::from_id(self.diet_type)
            .map(|d| d.to_string())
            .unwrap_or_else(|| self.diet_type.to_string());

        let allergies = if self.allergies.is_empty() {
            "none".to_owned()
        } else {
            self.allergies
                .iter()
                .map(|id| {
                    Allergy::from_id(*id)
                        .map(|a| a.to_string())
                        .unwrap_or_else(|| id.to_string())
                })
                .collect::<Vec<_>>()
                .join(", ")
        };

        vec![
            format!("Diet type: {diet}"),
            format!("Allergies: {allergies}"),
        ]
    }
}
