use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{NutritionValues, Recipes};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(NutritionValues::Table)
        .col(
            ColumnDef::new(NutritionValues::NutritionValueId)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(NutritionValues::RecipeId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(NutritionValues::Calories)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(NutritionValues::Fats)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(NutritionValues::Saturates)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(NutritionValues::Carbs)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(NutritionValues::Sugars)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(NutritionValues::Fibres)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(NutritionValues::Proteins)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(NutritionValues::Salts)
                .double()
                .not_null()
                .default(0.0),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_nutrition_values_recipe")
                .from(NutritionValues::Table, NutritionValues::RecipeId)
                .to(Recipes::Table, Recipes::RecipeId)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(NutritionValues::Table).to_owned()
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

/// One nutrition row per recipe.
pub struct CreateIdx1;

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_nutrition_values_recipe_id")
        .table(NutritionValues::Table)
        .unique()
        .col(NutritionValues::RecipeId)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_nutrition_values_recipe_id")
        .table(NutritionValues::Table)
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
