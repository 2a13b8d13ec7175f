use mealtime_user::CreateUserInput;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_create_user() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let cmd = mealtime_user::Command(state.clone());
    let query = mealtime_user::Query(state);

    let id = cmd
        .create_user(CreateUserInput {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "Ada@Mealtime.localhost".to_owned(),
        })
        .await?;

    let user = query.find(id).await?.unwrap();
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.email, "ada@mealtime.localhost");

    assert!(query.find(id + 1).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn validate_unique_emails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;

    helpers::create_user(&state, "john.doe@mealtime.localhost").await?;
    let err = helpers::create_user(&state, "JOHN.DOE@mealtime.localhost")
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<mealtime_shared::Error>(),
        Some(mealtime_shared::Error::Conflict)
    ));

    Ok(())
}

#[tokio::test]
async fn validate_input() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let cmd = mealtime_user::Command(state);

    let err = cmd
        .create_user(CreateUserInput {
            first_name: "".to_owned(),
            last_name: "Doe".to_owned(),
            email: "not-an-email".to_owned(),
        })
        .await
        .unwrap_err();

    let mealtime_shared::Error::Validate(errors) = &err else {
        panic!("expected validation errors, got {err:?}");
    };
    let fields = errors.field_errors();
    assert!(fields.contains_key("first_name"));
    assert!(fields.contains_key("email"));

    Ok(())
}
