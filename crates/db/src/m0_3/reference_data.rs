use sea_query::{DeleteStatement, InsertStatement, Query};

use crate::table::{Allergies, DietTypes};

/// Ordered from least to most restrictive. A higher id admits a subset of
/// the ingredients admitted by a lower one.
pub const DIET_TYPES: [(i64, &str); 4] = [
    (1, "classic"),
    (2, "pescatarian"),
    (3, "vegetarian"),
    (4, "vegan"),
];

pub const ALLERGIES: [(i64, &str); 11] = [
    (1, "celery_free"),
    (2, "gluten_free"),
    (3, "seafood_free"),
    (4, "eggs_free"),
    (5, "lupin_free"),
    (6, "mustard_free"),
    (7, "tree_nuts_free"),
    (8, "peanuts_free"),
    (9, "sesame_seeds_free"),
    (10, "soybeans_free"),
    (11, "sulphur_sulphites_free"),
];

pub struct InsertDietTypes;

fn insert_diet_types() -> InsertStatement {
    let mut statement = Query::insert()
        .into_table(DietTypes::Table)
        .columns([DietTypes::DietTypeId, DietTypes::DietName])
        .to_owned();

    for (id, name) in DIET_TYPES {
        statement.values_panic([id.into(), name.into()]);
    }

    statement
}

fn delete_diet_types() -> DeleteStatement {
    Query::delete().from_table(DietTypes::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for InsertDietTypes {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = insert_diet_types().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = delete_diet_types().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct InsertAllergies;

fn insert_allergies() -> InsertStatement {
    let mut statement = Query::insert()
        .into_table(Allergies::Table)
        .columns([Allergies::AllergyId, Allergies::AllergyName])
        .to_owned();

    for (id, name) in ALLERGIES {
        statement.values_panic([id.into(), name.into()]);
    }

    statement
}

fn delete_allergies() -> DeleteStatement {
    Query::delete().from_table(Allergies::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for InsertAllergies {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = insert_allergies().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = delete_allergies().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
