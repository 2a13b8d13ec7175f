use mealtime_db::table::{UserAllergies, UserDietPreferences};
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::Preferences;

impl super::Query {
    /// Saved preferences, or the classic diet with no allergies when the user
    /// never saved any.
    pub async fn preferences(&self, user_id: i64) -> mealtime_shared::Result<Preferences> {
        let (sql, values) = Query::select()
            .column(UserDietPreferences::DietTypeId)
            .from(UserDietPreferences::Table)
            .and_where(Expr::col(UserDietPreferences::UserId).eq(user_id))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        let diet_type = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        let (sql, values) = Query::select()
            .column(UserAllergies::AllergyId)
            .from(UserAllergies::Table)
            .and_where(Expr::col(UserAllergies::UserId).eq(user_id))
            .order_by(UserAllergies::AllergyId, Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let allergies = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let mut preferences = Preferences::default();
        if let Some(diet_type) = diet_type {
            preferences.diet_type = diet_type;
        }
        preferences.allergies.extend(allergies);

        Ok(preferences)
    }
}
