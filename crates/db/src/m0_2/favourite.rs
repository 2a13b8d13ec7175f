use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::{Recipes, UserFavouriteRecipes, Users};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(UserFavouriteRecipes::Table)
        .col(
            ColumnDef::new(UserFavouriteRecipes::UserId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(UserFavouriteRecipes::RecipeId)
                .integer()
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(UserFavouriteRecipes::UserId)
                .col(UserFavouriteRecipes::RecipeId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_user_favourite_recipes_user")
                .from(UserFavouriteRecipes::Table, UserFavouriteRecipes::UserId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_user_favourite_recipes_recipe")
                .from(UserFavouriteRecipes::Table, UserFavouriteRecipes::RecipeId)
                .to(Recipes::Table, Recipes::RecipeId)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(UserFavouriteRecipes::Table).to_owned()
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
