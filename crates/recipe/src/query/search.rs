use std::collections::BTreeSet;

use mealtime_db::table::{Blacklist, NutritionValues, RecipeDietTypes, Recipes};
use mealtime_shared::{Page, PageRequest};
use sea_query::{Expr, ExprTrait, JoinType, LikeExpr, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

use super::blacklist_statement;

pub const DEFAULT_DIET_TYPE: i64 = 1;
pub const DEFAULT_MIN_CAL: f64 = 0.0;
pub const DEFAULT_MAX_CAL: f64 = 1000.0;
pub const DEFAULT_MAX_TIME: i64 = 99999;

/// Criteria for a catalog search. Every field defaults to a value that
/// filters nothing out, and all supplied criteria must hold at once.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Substring of the recipe name; empty matches every name.
    pub search_term: String,
    /// Minimum diet type id, see [`mealtime_shared::diet_type_qualifies`].
    pub diet_type: i64,
    /// Allergen ids to avoid. A recipe tagged with any of them is excluded.
    pub allergy_list: BTreeSet<i64>,
    pub min_cal: f64,
    pub max_cal: f64,
    /// Upper bound on prep plus cook time, in minutes.
    pub max_time: i64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            diet_type: DEFAULT_DIET_TYPE,
            allergy_list: BTreeSet::new(),
            min_cal: DEFAULT_MIN_CAL,
            max_cal: DEFAULT_MAX_CAL,
            max_time: DEFAULT_MAX_TIME,
        }
    }
}

impl SearchQuery {
    pub fn term(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..Default::default()
        }
    }

    /// Replaces diet type and allergy criteria with a user's saved ones.
    pub fn with_preferences(
        mut self,
        diet_type: i64,
        allergies: impl IntoIterator<Item = i64>,
    ) -> Self {
        self.diet_type = diet_type;
        self.allergy_list = allergies.into_iter().collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct RecipeRow {
    pub recipe_id: i64,
    pub recipe_name: String,
    pub photo: Option<String>,
    pub serves: Option<i64>,
    pub cook_time: i64,
    pub prep_time: i64,
    pub total_time: i64,
    pub calories: f64,
    pub diet_type_id: i64,
}

/// SQL side of [`mealtime_shared::diet_type_qualifies`]: the recipe's diet
/// type must be at least as strict as the requested one.
pub fn diet_type_condition(diet_type: i64) -> Expr {
    Expr::col((RecipeDietTypes::Table, RecipeDietTypes::DietTypeId)).gte(diet_type)
}

const LIKE_ESCAPE: char = '!';

/// Pattern matching names that contain `search_term` literally.
fn name_contains(search_term: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(search_term.len() + 2);
    pattern.push('%');
    for c in search_term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}

/// Select statement for every recipe matching `query`, ordered by recipe id.
pub fn search_statement(query: &SearchQuery) -> SelectStatement {
    let mut statement = sea_query::Query::select()
        .columns([
            (Recipes::Table, Recipes::RecipeId),
            (Recipes::Table, Recipes::RecipeName),
            (Recipes::Table, Recipes::Photo),
            (Recipes::Table, Recipes::Serves),
            (Recipes::Table, Recipes::CookTime),
            (Recipes::Table, Recipes::PrepTime),
            (Recipes::Table, Recipes::TotalTime),
        ])
        .column((NutritionValues::Table, NutritionValues::Calories))
        .column((RecipeDietTypes::Table, RecipeDietTypes::DietTypeId))
        .from(Recipes::Table)
        .join(
            JoinType::InnerJoin,
            RecipeDietTypes::Table,
            Expr::col((Recipes::Table, Recipes::RecipeId))
                .equals((RecipeDietTypes::Table, RecipeDietTypes::RecipeId)),
        )
        .join(
            JoinType::InnerJoin,
            NutritionValues::Table,
            Expr::col((Recipes::Table, Recipes::RecipeId))
                .equals((NutritionValues::Table, NutritionValues::RecipeId)),
        )
        .to_owned();

    // Left join so recipes without any allergy tag survive, then keep only
    // the rows the blacklist did not match.
    if !query.allergy_list.is_empty() {
        statement
            .join_subquery(
                JoinType::LeftJoin,
                blacklist_statement(&query.allergy_list),
                Blacklist::Table,
                Expr::col((Recipes::Table, Recipes::RecipeId))
                    .equals((Blacklist::Table, Blacklist::RecipeId)),
            )
            .and_where(Expr::col((Blacklist::Table, Blacklist::RecipeId)).is_null());
    }

    statement.and_where(diet_type_condition(query.diet_type));

    if !query.search_term.is_empty() {
        statement.and_where(
            Expr::col((Recipes::Table, Recipes::RecipeName)).like(name_contains(&query.search_term)),
        );
    }

    statement
        .and_where(Expr::col((NutritionValues::Table, NutritionValues::Calories)).gte(query.min_cal))
        .and_where(Expr::col((NutritionValues::Table, NutritionValues::Calories)).lte(query.max_cal))
        .and_where(Expr::col((Recipes::Table, Recipes::TotalTime)).lte(query.max_time))
        .order_by((Recipes::Table, Recipes::RecipeId), Order::Asc);

    statement
}

impl super::Query {
    /// Every recipe matching `query`, ordered by recipe id.
    pub async fn search(&self, query: &SearchQuery) -> mealtime_shared::Result<Vec<RecipeRow>> {
        let (sql, values) = search_statement(query).build_sqlx(SqliteQueryBuilder);
        tracing::debug!(?query, "searching recipes");

        Ok(sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    /// One page of [`Query::search`](super::Query::search).
    pub async fn search_page(
        &self,
        query: &SearchQuery,
        request: PageRequest,
    ) -> mealtime_shared::Result<Page<RecipeRow>> {
        tracing::debug!(?query, page = request.page(), "searching recipes");

        mealtime_shared::page::fetch(&self.read_db, search_statement(query), request).await
    }
}
