//! Backend entry-point: loads settings, picks a tenant store and serves the
//! tenant API.

mod server;

use std::sync::Arc;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use color_eyre::eyre::{Result, WrapErr, eyre};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use menu_backend::domain::TenantService;
use menu_backend::domain::ports::{AllocationMetrics, TenantRepository};
use menu_backend::inbound::http::health::HealthState;
use menu_backend::inbound::http::state::HttpState;
use menu_backend::outbound::memory::InMemoryTenantRepository;
#[cfg(feature = "metrics")]
use menu_backend::outbound::metrics::PrometheusAllocationMetrics;
use menu_backend::outbound::persistence::{
    DbPool, DieselTenantRepository, PoolConfig, run_pending_migrations,
};
use menu_backend::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let bind_addr = settings.bind_addr()?;

    #[cfg(feature = "metrics")]
    let prometheus = make_metrics()?;
    #[cfg(feature = "metrics")]
    let allocation_metrics: Arc<dyn AllocationMetrics> = Arc::new(
        PrometheusAllocationMetrics::new(&prometheus.registry)
            .wrap_err("allocation metrics registration failed")?,
    );
    #[cfg(not(feature = "metrics"))]
    let allocation_metrics: Arc<dyn AllocationMetrics> =
        Arc::new(menu_backend::domain::ports::NoOpAllocationMetrics);

    let http_state = match settings.database_url() {
        Some(url) => {
            let applied = run_pending_migrations(url)
                .await
                .wrap_err("database migration failed")?;
            info!(applied, "database schema up to date");
            let pool = DbPool::new(
                PoolConfig::new(url).with_max_size(settings.db_max_connections()?),
            )
            .await
            .wrap_err("database pool setup failed")?;
            build_http_state(DieselTenantRepository::new(pool), &settings, allocation_metrics)?
        }
        None => {
            warn!("MENU_DATABASE_URL not set; tenants are kept in memory and lost on restart");
            build_http_state(InMemoryTenantRepository::new(), &settings, allocation_metrics)?
        }
    };

    let config = ServerConfig::new(bind_addr, http_state);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(prometheus));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "menu backend listening");
    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome.wrap_err("server terminated with an error")
}

fn build_http_state<R>(
    repository: R,
    settings: &AppSettings,
    metrics: Arc<dyn AllocationMetrics>,
) -> Result<HttpState>
where
    R: TenantRepository + 'static,
{
    let service = TenantService::new(Arc::new(repository), Arc::new(DefaultClock))
        .with_max_attempts(settings.allocation_attempts()?)
        .with_metrics(metrics);
    Ok(HttpState::from_service(Arc::new(service)))
}

#[cfg(feature = "metrics")]
fn make_metrics() -> Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("menu")
        .endpoint("/metrics")
        .build()
        .map_err(|err| eyre!("failed to configure Prometheus metrics: {err}"))
}
