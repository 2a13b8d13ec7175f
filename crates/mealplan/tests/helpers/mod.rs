#![allow(dead_code)]

use mealtime_db::table::{RecipeIngredients, Recipes};
use mealtime_shared::State;
use mealtime_user::CreateUserInput;
use sea_query::SqliteQueryBuilder;
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use std::{path::PathBuf, str::FromStr};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    mealtime_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(State::new(pool))
}

pub async fn create_user(state: &State, email: &str) -> anyhow::Result<i64> {
    let id = mealtime_user::Command(state.clone())
        .create_user(CreateUserInput {
            first_name: "John".to_owned(),
            last_name: "Doe".to_owned(),
            email: email.to_owned(),
        })
        .await?;

    Ok(id)
}

pub async fn insert_recipe(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    ingredients: &[&str],
) -> anyhow::Result<()> {
    let (sql, values) = sea_query::Query::insert()
        .into_table(Recipes::Table)
        .columns([Recipes::RecipeId, Recipes::RecipeName, Recipes::TotalTime])
        .values_panic([id.into(), name.into(), 40.into()])
        .build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    for ingredient in ingredients {
        let (sql, values) = sea_query::Query::insert()
            .into_table(RecipeIngredients::Table)
            .columns([RecipeIngredients::RecipeId, RecipeIngredients::Ingredient])
            .values_panic([id.into(), (*ingredient).into()])
            .build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(pool).await?;
    }

    Ok(())
}
