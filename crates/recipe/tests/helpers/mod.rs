#![allow(dead_code)]

use mealtime_db::table::{
    NutritionValues, RecipeAllergies, RecipeDietTypes, RecipeIngredients, RecipeInstructions,
    Recipes,
};
use mealtime_shared::State;
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

pub struct Fixture {
    pub id: i64,
    pub name: &'static str,
    pub diet_type: i64,
    pub calories: f64,
    pub total_time: i64,
    pub allergies: Vec<i64>,
    pub ingredients: Vec<&'static str>,
    pub steps: Vec<&'static str>,
}

impl Fixture {
    pub fn new(id: i64, name: &'static str) -> Self {
        Self {
            id,
            name,
            diet_type: 1,
            calories: 500.0,
            total_time: 30,
            allergies: vec![],
            ingredients: vec![],
            steps: vec![],
        }
    }

    pub fn diet_type(mut self, diet_type: i64) -> Self {
        self.diet_type = diet_type;
        self
    }

    pub fn calories(mut self, calories: f64) -> Self {
        self.calories = calories;
        self
    }

    pub fn total_time(mut self, total_time: i64) -> Self {
        self.total_time = total_time;
        self
    }

    pub fn allergies(mut self, allergies: &[i64]) -> Self {
        self.allergies = allergies.to_vec();
        self
    }

    pub fn ingredients(mut self, ingredients: &[&'static str]) -> Self {
        self.ingredients = ingredients.to_vec();
        self
    }

    pub fn steps(mut self, steps: &[&'static str]) -> Self {
        self.steps = steps.to_vec();
        self
    }

    pub async fn insert(self, pool: &SqlitePool) -> anyhow::Result<i64> {
        let (sql, values) = sea_query::Query::insert()
            .into_table(Recipes::Table)
            .columns([
                Recipes::RecipeId,
                Recipes::RecipeName,
                Recipes::Serves,
                Recipes::CookTime,
                Recipes::PrepTime,
                Recipes::TotalTime,
            ])
            .values_panic([
                self.id.into(),
                self.name.into(),
                4.into(),
                (self.total_time / 2).into(),
                (self.total_time - self.total_time / 2).into(),
                self.total_time.into(),
            ])
            .build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(pool).await?;

        let (sql, values) = sea_query::Query::insert()
            .into_table(RecipeDietTypes::Table)
            .columns([RecipeDietTypes::RecipeId, RecipeDietTypes::DietTypeId])
            .values_panic([self.id.into(), self.diet_type.into()])
            .build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(pool).await?;

        let (sql, values) = sea_query::Query::insert()
            .into_table(NutritionValues::Table)
            .columns([
                NutritionValues::RecipeId,
                NutritionValues::Calories,
                NutritionValues::Fats,
                NutritionValues::Saturates,
                NutritionValues::Carbs,
                NutritionValues::Sugars,
                NutritionValues::Fibres,
                NutritionValues::Proteins,
                NutritionValues::Salts,
            ])
            .values_panic([
                self.id.into(),
                self.calories.into(),
                12.5.into(),
                3.0.into(),
                60.0.into(),
                8.0.into(),
                4.0.into(),
                20.0.into(),
                1.2.into(),
            ])
            .build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(pool).await?;

        for allergy_id in self.allergies {
            let (sql, values) = sea_query::Query::insert()
                .into_table(RecipeAllergies::Table)
                .columns([RecipeAllergies::RecipeId, RecipeAllergies::AllergyId])
                .values_panic([self.id.into(), allergy_id.into()])
                .build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(pool).await?;
        }

        for ingredient in self.ingredients {
            let (sql, values) = sea_query::Query::insert()
                .into_table(RecipeIngredients::Table)
                .columns([RecipeIngredients::RecipeId, RecipeIngredients::Ingredient])
                .values_panic([self.id.into(), ingredient.into()])
                .build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(pool).await?;
        }

        for (step_num, step) in self.steps.into_iter().enumerate() {
            let (sql, values) = sea_query::Query::insert()
                .into_table(RecipeInstructions::Table)
                .columns([
                    RecipeInstructions::RecipeInstructionId,
                    RecipeInstructions::RecipeId,
                    RecipeInstructions::StepNum,
                    RecipeInstructions::StepDescription,
                ])
                .values_panic([
                    self.id.into(),
                    self.id.into(),
                    (step_num as i64 + 1).into(),
                    step.into(),
                ])
                .build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(pool).await?;
        }

        Ok(self.id)
    }
}

pub async fn insert_all(
    pool: &SqlitePool,
    fixtures: impl IntoIterator<Item = Fixture>,
) -> anyhow::Result<()> {
    for fixture in fixtures {
        fixture.insert(pool).await?;
    }

    Ok(())
}
