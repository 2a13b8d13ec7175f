use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Allergies, RecipeAllergies, Recipes};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Allergies::Table)
        .col(
            ColumnDef::new(Allergies::AllergyId)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Allergies::AllergyName)
                .string()
                .not_null()
                .string_len(40),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Allergies::Table).to_owned()
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

/// A row means the recipe contains the allergen.
pub struct CreateRecipeTable;

fn create_recipe_table() -> TableCreateStatement {
    Table::create()
        .table(RecipeAllergies::Table)
        .col(
            ColumnDef::new(RecipeAllergies::RecipeId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(RecipeAllergies::AllergyId)
                .integer()
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(RecipeAllergies::RecipeId)
                .col(RecipeAllergies::AllergyId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_recipe_allergies_recipe")
                .from(RecipeAllergies::Table, RecipeAllergies::RecipeId)
                .to(Recipes::Table, Recipes::RecipeId)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_recipe_allergies_allergy")
                .from(RecipeAllergies::Table, RecipeAllergies::AllergyId)
                .to(Allergies::Table, Allergies::AllergyId),
        )
        .to_owned()
}

fn drop_recipe_table() -> TableDropStatement {
    Table::drop().table(RecipeAllergies::Table).to_owned()
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
        .name("idx_recipe_allergies_allergy_id")
        .table(RecipeAllergies::Table)
        .col(RecipeAllergies::AllergyId)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_recipe_allergies_allergy_id")
        .table(RecipeAllergies::Table)
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
