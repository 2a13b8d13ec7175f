use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::{Allergies, DietTypes, UserAllergies, UserDietPreferences, Users};

pub struct CreateDietTable;

fn create_diet_table() -> TableCreateStatement {
    Table::create()
        .table(UserDietPreferences::Table)
        .col(
            ColumnDef::new(UserDietPreferences::UserId)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(UserDietPreferences::DietTypeId)
                .integer()
                .not_null()
                .default(1),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_user_diet_preferences_user")
                .from(UserDietPreferences::Table, UserDietPreferences::UserId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_user_diet_preferences_diet_type")
                .from(UserDietPreferences::Table, UserDietPreferences::DietTypeId)
                .to(DietTypes::Table, DietTypes::DietTypeId),
        )
        .to_owned()
}

fn drop_diet_table() -> TableDropStatement {
    Table::drop().table(UserDietPreferences::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateDietTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_diet_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_diet_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateAllergyTable;

fn create_allergy_table() -> TableCreateStatement {
    Table::create()
        .table(UserAllergies::Table)
        .col(
            ColumnDef::new(UserAllergies::UserId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(UserAllergies::AllergyId)
                .integer()
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(UserAllergies::UserId)
                .col(UserAllergies::AllergyId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_user_allergies_user")
                .from(UserAllergies::Table, UserAllergies::UserId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_user_allergies_allergy")
                .from(UserAllergies::Table, UserAllergies::AllergyId)
                .to(Allergies::Table, Allergies::AllergyId),
        )
        .to_owned()
}

fn drop_allergy_table() -> TableDropStatement {
    Table::drop().table(UserAllergies::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateAllergyTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_allergy_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_allergy_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
