use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{MealPlanRecipes, MealPlans, Recipes, Users};

/// `mealplan_id` is AUTOINCREMENT so the highest id is always the most recent plan.
pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(MealPlans::Table)
        .col(
            ColumnDef::new(MealPlans::MealplanId)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(MealPlans::UserId).integer().not_null())
        .col(
            ColumnDef::new(MealPlans::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_meal_plans_user")
                .from(MealPlans::Table, MealPlans::UserId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(MealPlans::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateIdx1;

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_meal_plans_user_id")
        .table(MealPlans::Table)
        .col(MealPlans::UserId)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_meal_plans_user_id")
        .table(MealPlans::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateRecipeTable;

fn create_recipe_table() -> TableCreateStatement {
    Table::create()
        .table(MealPlanRecipes::Table)
        .col(
            ColumnDef::new(MealPlanRecipes::MealplanId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(MealPlanRecipes::RecipeId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(MealPlanRecipes::SelectedServings)
                .integer()
                .not_null()
                .default(2),
        )
        .primary_key(
            Index::create()
                .col(MealPlanRecipes::MealplanId)
                .col(MealPlanRecipes::RecipeId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_meal_plan_recipes_meal_plan")
                .from(MealPlanRecipes::Table, MealPlanRecipes::MealplanId)
                .to(MealPlans::Table, MealPlans::MealplanId)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_meal_plan_recipes_recipe")
                .from(MealPlanRecipes::Table, MealPlanRecipes::RecipeId)
                .to(Recipes::Table, Recipes::RecipeId)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_recipe_table() -> TableDropStatement {
    Table::drop().table(MealPlanRecipes::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateRecipeTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_recipe_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_recipe_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
