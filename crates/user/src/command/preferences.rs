use std::collections::BTreeSet;

use mealtime_db::table::{UserAllergies, UserDietPreferences};
use mealtime_shared::Allergy;
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

fn validate_allergies(allergies: &BTreeSet<i64>) -> Result<(), validator::ValidationError> {
    if allergies.iter().any(|id| Allergy::from_id(*id).is_none()) {
        return Err(validator::ValidationError::new("allergy_range")
            .with_message("Unknown allergy".into()));
    }

    Ok(())
}

#[derive(Validate)]
pub struct SetPreferencesInput {
    #[validate(range(min = 1, max = 4))]
    pub diet_type: i64,
    #[validate(custom(function = "validate_allergies"))]
    pub allergies: BTreeSet<i64>,
}

impl super::Command {
    /// Replaces the saved diet type and the whole allergy set of a user.
    #[tracing::instrument(skip(self, input))]
    pub async fn set_preferences(
        &self,
        user_id: i64,
        input: SetPreferencesInput,
    ) -> mealtime_shared::Result<()> {
        input.validate()?;

        let mut tx = self.write_db.begin().await?;

        let (sql, values) = Query::insert()
            .into_table(UserDietPreferences::Table)
            .columns([UserDietPreferences::UserId, UserDietPreferences::DietTypeId])
            .values_panic([user_id.into(), input.diet_type.into()])
            .on_conflict(
                OnConflict::column(UserDietPreferences::UserId)
                    .update_column(UserDietPreferences::DietTypeId)
                    .to_owned(),
            )
            .build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let (sql, values) = Query::delete()
            .from_table(UserAllergies::Table)
            .and_where(Expr::col(UserAllergies::UserId).eq(user_id))
            .build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if !input.allergies.is_empty() {
            let mut statement = Query::insert()
                .into_table(UserAllergies::Table)
                .columns([UserAllergies::UserId, UserAllergies::AllergyId])
                .to_owned();

            for allergy_id in &input.allergies {
                statement.values_panic([user_id.into(), (*allergy_id).into()]);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::info!(
            diet_type = input.diet_type,
            allergies = input.allergies.len(),
            "preferences saved"
        );

        Ok(())
    }
}
