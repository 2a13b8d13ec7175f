use mealtime_db::table::Users;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

#[derive(Validate)]
pub struct CreateUserInput {
    #[validate(length(min = 1, max = 40))]
    pub first_name: String,
    #[validate(length(min = 1, max = 40))]
    pub last_name: String,
    #[validate(email, length(max = 320))]
    pub email: String,
}

impl super::Command {
    /// Inserts a user profile and returns its id. The email is unique.
    #[tracing::instrument(skip_all, fields(email = %input.email))]
    pub async fn create_user(&self, input: CreateUserInput) -> mealtime_shared::Result<i64> {
        input.validate()?;

        let (sql, values) = Query::insert()
            .into_table(Users::Table)
            .columns([Users::FirstName, Users::LastName, Users::Email])
            .values_panic([
                input.first_name.into(),
                input.last_name.into(),
                input.email.to_lowercase().into(),
            ])
            .build_sqlx(SqliteQueryBuilder);

        let id = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await
            .map_err(mealtime_shared::Error::from_insert)?
            .last_insert_rowid();

        tracing::info!(user_id = id, "user created");

        Ok(id)
    }
}
