use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::{RecipeInstructions, Recipes};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(RecipeInstructions::Table)
        .col(
            ColumnDef::new(RecipeInstructions::RecipeInstructionId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(RecipeInstructions::RecipeId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(RecipeInstructions::StepNum)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(RecipeInstructions::StepDescription)
                .string()
                .not_null()
                .string_len(2000),
        )
        .primary_key(
            Index::create()
                .col(RecipeInstructions::RecipeInstructionId)
                .col(RecipeInstructions::StepNum),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_recipe_instructions_recipe")
                .from(RecipeInstructions::Table, RecipeInstructions::RecipeId)
                .to(Recipes::Table, Recipes::RecipeId)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(RecipeInstructions::Table).to_owned()
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
