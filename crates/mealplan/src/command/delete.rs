use mealtime_db::table::{MealPlanRecipes, MealPlans};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::repository;

impl super::Command {
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, user_id: i64, mealplan_id: i64) -> mealtime_shared::Result<()> {
        let mut tx = self.write_db.begin().await?;

        repository::ensure_owner(&mut *tx, user_id, mealplan_id).await?;

        let (sql, values) = Query::delete()
            .from_table(MealPlanRecipes::Table)
            .and_where(Expr::col(MealPlanRecipes::MealplanId).eq(mealplan_id))
            .build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let (sql, values) = Query::delete()
            .from_table(MealPlans::Table)
            .and_where(Expr::col(MealPlans::MealplanId).eq(mealplan_id))
            .build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        tx.commit().await?;

        tracing::info!("meal plan deleted");

        Ok(())
    }
}
