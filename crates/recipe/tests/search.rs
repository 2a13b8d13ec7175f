use std::collections::BTreeSet;

use mealtime_recipe::{SearchParams, SearchQuery};
use mealtime_shared::PageRequest;
use temp_dir::TempDir;

mod helpers;

use helpers::Fixture;

fn ids(rows: &[mealtime_recipe::RecipeRow]) -> Vec<i64> {
    rows.iter().map(|r| r.recipe_id).collect()
}

fn catalog() -> Vec<Fixture> {
    vec![
        Fixture::new(1, "Banana Bread").diet_type(3).allergies(&[2, 4]),
        Fixture::new(2, "Vegan Chili").diet_type(4).calories(420.0),
        Fixture::new(3, "Prawn Linguine").diet_type(2).allergies(&[2, 3]),
        Fixture::new(4, "Steak Frites").calories(900.0).total_time(50),
        Fixture::new(5, "Tofu Stir Fry").diet_type(4).allergies(&[10]),
    ]
}

#[tokio::test]
async fn test_default_query_returns_whole_catalog() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    helpers::insert_all(&state.write_db, catalog()).await?;
    let query = mealtime_recipe::Query(state);

    let rows = query.search(&SearchQuery::default()).await?;

    assert_eq!(ids(&rows), vec![1, 2, 3, 4, 5]);

    Ok(())
}

#[tokio::test]
async fn test_diet_type_is_hierarchical() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    helpers::insert_all(&state.write_db, catalog()).await?;
    let query = mealtime_recipe::Query(state);

    let mut previous: Option<BTreeSet<i64>> = None;
    for diet_type in 1..=4 {
        let rows = query
            .search(&SearchQuery::default().with_preferences(diet_type, []))
            .await?;
        assert!(
            rows.iter()
                .all(|r| mealtime_shared::diet_type_qualifies(r.diet_type_id, diet_type))
        );
        let current = ids(&rows).into_iter().collect::<BTreeSet<_>>();

        if let Some(previous) = previous {
            assert!(current.is_subset(&previous), "diet {diet_type} widened results");
        }
        previous = Some(current);
    }

    let vegetarian = query
        .search(&SearchQuery::default().with_preferences(3, []))
        .await?;
    assert_eq!(ids(&vegetarian), vec![1, 2, 5]);

    let vegan = query
        .search(&SearchQuery::default().with_preferences(4, []))
        .await?;
    assert_eq!(ids(&vegan), vec![2, 5]);

    Ok(())
}

#[tokio::test]
async fn test_out_of_range_diet_type_is_not_an_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    helpers::insert_all(&state.write_db, catalog()).await?;
    let query = mealtime_recipe::Query(state);

    let all = query
        .search(&SearchQuery::default().with_preferences(0, []))
        .await?;
    assert_eq!(all.len(), 5);

    let none = query
        .search(&SearchQuery::default().with_preferences(9, []))
        .await?;
    assert!(none.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_allergy_exclusion_keeps_untagged_recipes() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    helpers::insert_all(
        &state.write_db,
        [
            Fixture::new(1, "Seafood Paella").allergies(&[3]),
            Fixture::new(2, "Plain Rice"),
        ],
    )
    .await?;
    let query = mealtime_recipe::Query(state);

    let rows = query
        .search(&SearchQuery::default().with_preferences(1, [3]))
        .await?;

    assert_eq!(ids(&rows), vec![2]);
    assert_eq!(query.blacklist(&BTreeSet::from([3])).await?, BTreeSet::from([1]));
    assert!(query.blacklist(&BTreeSet::new()).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_allergy_exclusion_is_monotonic() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    helpers::insert_all(&state.write_db, catalog()).await?;
    let query = mealtime_recipe::Query(state);

    let lists: [&[i64]; 4] = [&[], &[3], &[3, 10], &[2, 3, 10]];
    let mut previous: Option<BTreeSet<i64>> = None;
    for list in lists {
        let rows = query
            .search(&SearchQuery::default().with_preferences(1, list.iter().copied()))
            .await?;
        let current = ids(&rows).into_iter().collect::<BTreeSet<_>>();

        if let Some(previous) = previous {
            assert!(current.is_subset(&previous), "{list:?} widened results");
        }
        previous = Some(current);
    }

    let rows = query
        .search(&SearchQuery::default().with_preferences(1, [2, 3, 10]))
        .await?;
    assert_eq!(ids(&rows), vec![2, 4]);

    let unknown = query
        .search(&SearchQuery::default().with_preferences(1, [42]))
        .await?;
    assert_eq!(unknown.len(), 5);

    Ok(())
}

#[tokio::test]
async fn test_calorie_bounds_are_inclusive() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    helpers::insert_all(
        &state.write_db,
        [
            Fixture::new(1, "Below").calories(199.0),
            Fixture::new(2, "Lower Edge").calories(200.0),
            Fixture::new(3, "Upper Edge").calories(600.0),
            Fixture::new(4, "Above").calories(601.0),
        ],
    )
    .await?;
    let query = mealtime_recipe::Query(state);

    let rows = query
        .search(&SearchQuery {
            min_cal: 200.0,
            max_cal: 600.0,
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&rows), vec![2, 3]);

    Ok(())
}

#[tokio::test]
async fn test_max_time_bound() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    helpers::insert_all(&state.write_db, catalog()).await?;
    let query = mealtime_recipe::Query(state);

    let rows = query
        .search(&SearchQuery {
            max_time: 30,
            ..Default::default()
        })
        .await?;

    assert_eq!(ids(&rows), vec![1, 2, 3, 5]);

    Ok(())
}

#[tokio::test]
async fn test_substring_match() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    helpers::insert_all(
        &state.write_db,
        [
            Fixture::new(1, "Banana Bread"),
            Fixture::new(2, "Vegan Chili"),
            Fixture::new(3, "Tomato Soup"),
        ],
    )
    .await?;
    let query = mealtime_recipe::Query(state);

    let rows = query.search(&SearchQuery::term("an")).await?;
    assert_eq!(ids(&rows), vec![1, 2]);

    let rows = query.search(&SearchQuery::term("soup")).await?;
    assert_eq!(ids(&rows), vec![3]);

    let rows = query.search(&SearchQuery::term("pizza")).await?;
    assert!(rows.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_wildcards_are_matched_literally() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    helpers::insert_all(
        &state.write_db,
        [
            Fixture::new(1, "100% Rye Loaf"),
            Fixture::new(2, "Rye Loaf"),
            Fixture::new(3, "Snack_Box"),
        ],
    )
    .await?;
    let query = mealtime_recipe::Query(state);

    let rows = query.search(&SearchQuery::term("%")).await?;
    assert_eq!(ids(&rows), vec![1]);

    let rows = query.search(&SearchQuery::term("_")).await?;
    assert_eq!(ids(&rows), vec![3]);

    Ok(())
}

#[tokio::test]
async fn test_pagination_boundaries() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    helpers::insert_all(
        &state.write_db,
        (1..=6).map(|id| Fixture::new(id, "Porridge")),
    )
    .await?;
    let query = mealtime_recipe::Query(state);
    let criteria = SearchQuery::default();

    let first = query.search_page(&criteria, PageRequest::new(1, 3)).await?;
    assert_eq!(ids(&first.items), vec![1, 2, 3]);
    assert!(first.has_next);
    assert!(!first.has_prev);

    let second = query.search_page(&criteria, PageRequest::new(2, 3)).await?;
    assert_eq!(ids(&second.items), vec![4, 5, 6]);
    assert!(!second.has_next);
    assert!(second.has_prev);

    let third = query.search_page(&criteria, PageRequest::new(3, 3)).await?;
    assert!(third.items.is_empty());
    assert!(!third.has_next);
    assert_eq!(third.total, 6);

    let normalized = query.search_page(&criteria, PageRequest::new(0, 3)).await?;
    assert_eq!(ids(&normalized.items), vec![1, 2, 3]);

    Ok(())
}

#[tokio::test]
async fn test_oversized_page_size() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    helpers::insert_all(
        &state.write_db,
        (1..=4).map(|id| Fixture::new(id, "Flapjack")),
    )
    .await?;
    let query = mealtime_recipe::Query(state);
    let criteria = SearchQuery::default();

    let all = query
        .search_page(&criteria, PageRequest::new(1, u64::MAX))
        .await?;
    assert_eq!(ids(&all.items), vec![1, 2, 3, 4]);
    assert!(!all.has_next);
    assert_eq!(all.page_size, i64::MAX as u64);

    let far = query
        .search_page(&criteria, PageRequest::new(i64::MAX, u64::MAX))
        .await?;
    assert!(far.items.is_empty());
    assert!(!far.has_next);
    assert_eq!(far.total, 4);

    Ok(())
}

#[tokio::test]
async fn test_search_from_raw_params() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    helpers::insert_all(&state.write_db, catalog()).await?;
    let query = mealtime_recipe::Query(state);

    let params = SearchParams {
        diet_type: Some("4".to_owned()),
        allergy_list: Some("10,".to_owned()),
        max_cal: Some("not a number".to_owned()),
        ..Default::default()
    };
    let rows = query.search(&params.to_search_query()?).await?;

    assert_eq!(ids(&rows), vec![2]);

    Ok(())
}

#[tokio::test]
async fn test_find_recipe_detail() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    Fixture::new(7, "Shakshuka")
        .diet_type(3)
        .calories(380.0)
        .allergies(&[4, 1])
        .ingredients(&["4 eggs", "1 tin tomatoes", "1 onion"])
        .steps(&["Fry the onion", "Add tomatoes", "Crack in the eggs"])
        .insert(&state.write_db)
        .await?;
    let query = mealtime_recipe::Query(state);

    let recipe = query.find(7).await?.unwrap();

    assert_eq!(recipe.recipe_name, "Shakshuka");
    assert_eq!(recipe.diet_type, Some(mealtime_shared::DietType::Vegetarian));
    assert_eq!(recipe.nutrition.unwrap().calories, 380.0);
    assert_eq!(
        recipe.allergies,
        vec![mealtime_shared::Allergy::Celery, mealtime_shared::Allergy::Eggs]
    );
    assert_eq!(recipe.ingredients, vec!["4 eggs", "1 tin tomatoes", "1 onion"]);
    assert_eq!(
        recipe
            .instructions
            .iter()
            .map(|i| i.step_num)
            .collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    assert!(query.find(8).await?.is_none());

    Ok(())
}
