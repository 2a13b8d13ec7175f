use mealtime_db::table::Users;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl super::Query {
    pub async fn find(&self, user_id: i64) -> mealtime_shared::Result<Option<UserRow>> {
        let (sql, values) = Query::select()
            .columns([Users::Id, Users::FirstName, Users::LastName, Users::Email])
            .from(Users::Table)
            .and_where(Expr::col(Users::Id).eq(user_id))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }
}
