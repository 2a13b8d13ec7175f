mod reference_data;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealtime",
    "m0_3",
    vec_box![crate::m0_1::Migration],
    vec_box![
        reference_data::InsertDietTypes,
        reference_data::InsertAllergies,
    ]
);
