use backend::{
    build_rocket,
    config::Config,
    db,
    engine::VoteEngine,
    routes::AppState,
};
use sqlx::PgPool;
use tokio::time::{interval, Duration};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

async fn run_reconcile_task(pool: PgPool, every_secs: u64) {
    let mut interval = interval(Duration::from_secs(every_secs));
    info!("🧹 Vote count reconciliation service started (every {every_secs}s)");

    loop {
        interval.tick().await;
        match VoteEngine::reconcile_vote_counts(&pool).await {
            Ok(0) => debug!("vote counts consistent"),
            Ok(n) => warn!("repaired {n} drifted vote counter(s)"),
            Err(e) => error!("reconciliation failed: {e}"),
        }
    }
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚀 Starting feature vote server");

    let config = Config::from_env()?;
    let pool = db::connect(&config.database_url).await?;

    db::run_migrations(&pool).await?;
    info!("📋 Migrations complete");

    if config.reconcile_interval_secs > 0 {
        tokio::spawn(run_reconcile_task(
            pool.clone(),
            config.reconcile_interval_secs,
        ));
    } else {
        warn!("vote count reconciliation disabled");
    }

    let figment = rocket::Config::figment().merge(("port", config.port));
    let state = AppState::new(pool, config.api_keys.clone());

    build_rocket(figment, state).launch().await?;
    Ok(())
}
