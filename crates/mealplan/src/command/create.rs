use mealtime_db::table::MealPlans;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;

use crate::repository;

impl super::Command {
    /// Starts a new plan for the user. Refused while their most recent plan
    /// has no recipes in it.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, user_id: i64) -> mealtime_shared::Result<i64> {
        let mut tx = self.write_db.begin().await?;

        if let Some(latest) = repository::most_recent(&mut *tx, user_id).await? {
            let count = repository::recipe_count(&mut *tx, latest).await?;
            if count == 0 {
                mealtime_shared::bail!("Your most recent meal plan is still empty");
            }
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let (sql, values) = Query::insert()
            .into_table(MealPlans::Table)
            .columns([MealPlans::UserId, MealPlans::CreatedAt])
            .values_panic([user_id.into(), now.into()])
            .build_sqlx(SqliteQueryBuilder);

        let id = sqlx::query_with(&sql, values)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        tx.commit().await?;

        tracing::info!(mealplan_id = id, "meal plan created");

        Ok(id)
    }
}
