//! Lectern server entry point.

use std::process;
use std::sync::Arc;

use jsonwebtoken::DecodingKey;
use tracing_subscriber::EnvFilter;

use lectern::adapters::email::SmtpMailer;
use lectern::adapters::http::{app_router, AppState};
use lectern::adapters::media::HttpMediaStorage;
use lectern::adapters::mongo::{
    self, MongoCourseRepository, MongoPaymentLedger, MongoUserRepository,
};
use lectern::adapters::razorpay::{RazorpayConfig, RazorpayGatewayAdapter};
use lectern::config::AppConfig;

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "invalid configuration");
        process::exit(1);
    }

    // A service without its document store is meaningless; bail out early.
    let database = match mongo::connect(&config.database).await {
        Ok(database) => database,
        Err(e) => {
            tracing::error!(error = %e, "database connection failed");
            process::exit(1);
        }
    };

    let mailer = match SmtpMailer::new(&config.email) {
        Ok(mailer) => mailer,
        Err(e) => {
            tracing::error!(error = %e, "mailer construction failed");
            process::exit(1);
        }
    };

    let gateway = RazorpayGatewayAdapter::new(RazorpayConfig::new(
        config.payment.key_id.clone(),
        config.payment.key_secret.clone(),
    ));

    let state = AppState {
        users: Arc::new(MongoUserRepository::new(&database)),
        courses: Arc::new(MongoCourseRepository::new(&database)),
        ledger: Arc::new(MongoPaymentLedger::new(&database)),
        gateway: Arc::new(gateway),
        media: Arc::new(HttpMediaStorage::new(&config.media)),
        mailer: Arc::new(mailer),
        jwt_decoding_key: Arc::new(DecodingKey::from_secret(
            config.auth.jwt_secret.as_bytes(),
        )),
        gateway_key_id: config.payment.key_id.clone(),
        gateway_plan_id: config.payment.plan_id.clone(),
        billing_cycles: config.payment.billing_cycles,
        hmac_secret: config.payment.hmac_secret.clone(),
    };

    let app = app_router(state, &config);
    let addr = config.server.socket_addr();

    tracing::info!(%addr, test_mode = config.payment.is_test_mode(), "starting server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "failed to bind listener");
            process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server exited with error");
        process::exit(1);
    }
}
