use mealtime_db::table::{MealPlanRecipes, MealPlans};
use mealtime_shared::Error;
use sea_query::{Expr, ExprTrait, Func, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqliteExecutor;

/// Most recent plan of a user. Plan ids only grow, so the highest one wins.
pub(crate) async fn most_recent<'e>(
    executor: impl SqliteExecutor<'e>,
    user_id: i64,
) -> mealtime_shared::Result<Option<i64>> {
    let (sql, values) = Query::select()
        .column(MealPlans::MealplanId)
        .from(MealPlans::Table)
        .and_where(Expr::col(MealPlans::UserId).eq(user_id))
        .order_by(MealPlans::MealplanId, Order::Desc)
        .limit(1)
        .build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_scalar_with::<_, i64, _>(&sql, values)
        .fetch_optional(executor)
        .await?)
}

pub(crate) async fn recipe_count<'e>(
    executor: impl SqliteExecutor<'e>,
    mealplan_id: i64,
) -> mealtime_shared::Result<i64> {
    let (sql, values) = Query::select()
        .expr(Func::count(Expr::col(MealPlanRecipes::RecipeId)))
        .from(MealPlanRecipes::Table)
        .and_where(Expr::col(MealPlanRecipes::MealplanId).eq(mealplan_id))
        .build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_scalar_with::<_, i64, _>(&sql, values)
        .fetch_one(executor)
        .await?)
}

/// Fails with [`Error::NotFound`] for an unknown plan and with
/// [`Error::Forbidden`] when the plan belongs to someone else.
pub(crate) async fn ensure_owner<'e>(
    executor: impl SqliteExecutor<'e>,
    user_id: i64,
    mealplan_id: i64,
) -> mealtime_shared::Result<()> {
    let (sql, values) = Query::select()
        .column(MealPlans::UserId)
        .from(MealPlans::Table)
        .and_where(Expr::col(MealPlans::MealplanId).eq(mealplan_id))
        .limit(1)
        .build_sqlx(SqliteQueryBuilder);

    let owner = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
        .fetch_optional(executor)
        .await?;

    match owner {
        None => Err(Error::NotFound),
        Some(owner) if owner != user_id => {
            tracing::warn!(user_id, mealplan_id, "meal plan owned by another user");
            Err(Error::Forbidden)
        }
        Some(_) => Ok(()),
    }
}
