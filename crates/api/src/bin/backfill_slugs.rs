//! Assign slugs to portfolio projects that do not have one yet.
//!
//! Safe to run repeatedly: projects that already carry a slug are never
//! touched. Typically run once after importing projects directly into the
//! database.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixelbox_db::repositories::PortfolioRepo;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixelbox_api=info,pixelbox_db=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = pixelbox_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    pixelbox_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let assigned = PortfolioRepo::backfill_slugs(&pool)
        .await
        .expect("Slug backfill failed");

    for entry in &assigned {
        tracing::info!(
            project_id = entry.project_id,
            title = %entry.title,
            slug = %entry.slug,
            "Generated slug",
        );
    }
    tracing::info!(count = assigned.len(), "Slug backfill complete");
}
