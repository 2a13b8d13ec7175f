use anyhow::Result;
use clap::{Parser, Subcommand};
use mealtime_recipe::SearchParams;
use mealtime_shared::{PageRequest, State};
use sqlx::migrate::MigrateDatabase;
use sqlx_migrator::{Migrate, Plan};

/// mealtime - Recipe search and meal planning
#[derive(Parser)]
#[command(name = "mealtime")]
#[command(about = "Recipe search and meal planning", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Search the recipe catalog and print one page as JSON
    Search {
        /// Substring of the recipe name
        #[arg(long)]
        term: Option<String>,

        /// Minimum diet type (1 classic, 2 pescatarian, 3 vegetarian, 4 vegan)
        #[arg(long)]
        diet_type: Option<String>,

        /// Comma separated allergy ids to avoid, e.g. "1,3"
        #[arg(long)]
        allergies: Option<String>,

        #[arg(long)]
        min_cal: Option<String>,

        #[arg(long)]
        max_cal: Option<String>,

        /// Maximum total time in minutes
        #[arg(long)]
        max_time: Option<String>,

        #[arg(long)]
        page: Option<String>,

        /// Fill omitted diet type and allergies from this user's preferences
        #[arg(long)]
        user_id: Option<i64>,
    },
    /// Print the grocery list of a meal plan as JSON
    GroceryList {
        #[arg(long)]
        user_id: i64,

        /// Defaults to the user's most recent meal plan
        #[arg(long)]
        mealplan_id: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealtime::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealtime::observability::init_observability(
        "mealtime",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Migrate => migrate_command(config).await,
        Commands::Reset => reset_command(config).await,
        Commands::Search {
            term,
            diet_type,
            allergies,
            min_cal,
            max_cal,
            max_time,
            page,
            user_id,
        } => {
            let params = SearchParams {
                search_term: term,
                diet_type,
                allergy_list: allergies,
                min_cal,
                max_cal,
                max_time,
                page,
            };
            search_command(config, params, user_id).await
        }
        Commands::GroceryList {
            user_id,
            mealplan_id,
        } => grocery_list_command(config, user_id, mealplan_id).await,
    }
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: mealtime::config::Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    let pool =
        mealtime::db::create_pool(&config.database.url, config.database.max_connections).await?;

    let mut conn = pool.acquire().await?;
    mealtime_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;
    drop(conn);

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn reset_command(config: mealtime::config::Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate_command(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn search_command(
    config: mealtime::config::Config,
    params: SearchParams,
    user_id: Option<i64>,
) -> Result<()> {
    let pool =
        mealtime::db::create_pool(&config.database.url, config.database.max_connections).await?;
    let state = State::new(pool);

    let mut query = params.to_search_query()?;

    if let Some(user_id) = user_id {
        let preferences = mealtime_user::Query(state.clone())
            .preferences(user_id)
            .await?;

        query = preferences.apply(&params, query);

        for line in preferences.summary() {
            tracing::info!("{line}");
        }
    }

    let request = PageRequest::new(params.page(), config.search.recipes_per_page);
    let page = mealtime_recipe::Query(state)
        .search_page(&query, request)
        .await?;

    if page.items.is_empty() {
        tracing::info!("No recipes found");
    }
    if let Some(next) = page.next_num() {
        tracing::info!(next = %params.to_query_string(next), "More results available");
    }

    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn grocery_list_command(
    config: mealtime::config::Config,
    user_id: i64,
    mealplan_id: Option<i64>,
) -> Result<()> {
    let pool =
        mealtime::db::create_pool(&config.database.url, config.database.max_connections).await?;
    let query = mealtime_mealplan::Query(State::new(pool));

    let mealplan_id = match mealplan_id {
        Some(id) => id,
        None => query
            .most_recent(user_id)
            .await?
            .ok_or(mealtime_shared::Error::NotFound)?,
    };

    let list = query.grocery_list(user_id, mealplan_id).await?;

    println!("{}", serde_json::to_string_pretty(&list.by_recipe())?);

    Ok(())
}
