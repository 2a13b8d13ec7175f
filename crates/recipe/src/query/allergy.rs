use std::collections::BTreeSet;

use mealtime_db::table::RecipeAllergies;
use sea_query::{Expr, ExprTrait, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

/// Distinct ids of every recipe tagged with at least one of `allergy_list`.
/// Unknown ids simply match nothing.
pub fn blacklist_statement(allergy_list: &BTreeSet<i64>) -> SelectStatement {
    sea_query::Query::select()
        .distinct()
        .column(RecipeAllergies::RecipeId)
        .from(RecipeAllergies::Table)
        .and_where(Expr::col(RecipeAllergies::AllergyId).is_in(allergy_list.iter().copied()))
        .to_owned()
}

impl super::Query {
    /// Recipes that must be excluded for someone avoiding `allergy_list`.
    pub async fn blacklist(
        &self,
        allergy_list: &BTreeSet<i64>,
    ) -> mealtime_shared::Result<BTreeSet<i64>> {
        if allergy_list.is_empty() {
            return Ok(BTreeSet::new());
        }

        let (sql, values) = blacklist_statement(allergy_list).build_sqlx(SqliteQueryBuilder);
        let ids = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(ids.into_iter().collect())
    }
}
