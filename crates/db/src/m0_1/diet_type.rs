use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{DietTypes, RecipeDietTypes, Recipes};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(DietTypes::Table)
        .col(
            ColumnDef::new(DietTypes::DietTypeId)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(DietTypes::DietName)
                .string()
                .not_null()
                .string_len(40),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(DietTypes::Table).to_owned()
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

/// A recipe carries exactly one diet classification, so `recipe_id` alone is the key.
pub struct CreateRecipeTable;

fn create_recipe_table() -> TableCreateStatement {
    Table::create()
        .table(RecipeDietTypes::Table)
        .col(
            ColumnDef::new(RecipeDietTypes::RecipeId)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(RecipeDietTypes::DietTypeId)
                .integer()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_recipe_diet_types_recipe")
                .from(RecipeDietTypes::Table, RecipeDietTypes::RecipeId)
                .to(Recipes::Table, Recipes::RecipeId)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_recipe_diet_types_diet_type")
                .from(RecipeDietTypes::Table, RecipeDietTypes::DietTypeId)
                .to(DietTypes::Table, DietTypes::DietTypeId),
        )
        .to_owned()
}

fn drop_recipe_table() -> TableDropStatement {
    Table::drop().table(RecipeDietTypes::Table).to_owned()
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

pub struct CreateIdx1;

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_recipe_diet_types_diet_type_id")
        .table(RecipeDietTypes::Table)
        .col(RecipeDietTypes::DietTypeId)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_recipe_diet_types_diet_type_id")
        .table(RecipeDietTypes::Table)
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
