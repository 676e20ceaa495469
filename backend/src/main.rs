//! Backend entry-point: wires the authentication endpoints, health probes,
//! and OpenAPI docs.

use std::env;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use chrono::Duration;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use backend::inbound::http::auth::{login, profile, register};
use backend::inbound::http::health::{live, ready, HealthState};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::InMemoryUserStore;
use backend::outbound::token::JwtTokenService;
#[cfg(debug_assertions)]
use backend::ApiDoc;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let secret = load_token_secret()?;
    let ttl = token_ttl();
    let state = web::Data::new(HttpState::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(JwtTokenService::new(&secret, ttl)),
    ));

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays accessible.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(state.clone(), server_health_state.clone()))
        .bind(("0.0.0.0", 8080))?;

    health_state.mark_ready();
    server.run().await
}

/// Read the token signing secret from `TOKEN_SECRET_FILE`, falling back to an
/// ephemeral secret in development builds (or when `AUTH_ALLOW_EPHEMERAL=1`).
/// An ephemeral secret invalidates every outstanding token on restart.
fn load_token_secret() -> std::io::Result<Vec<u8>> {
    let secret_path =
        env::var("TOKEN_SECRET_FILE").unwrap_or_else(|_| "/var/run/secrets/token_secret".into());
    match std::fs::read(&secret_path) {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            let allow_dev = env::var("AUTH_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %secret_path, error = %e, "using ephemeral token secret (dev only)");
                Ok(generate_ephemeral_secret())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read token secret at {secret_path}: {e}"
                )))
            }
        }
    }
}

fn generate_ephemeral_secret() -> Vec<u8> {
    use argon2::password_hash::rand_core::{OsRng, RngCore};
    let mut secret = vec![0_u8; 64];
    OsRng.fill_bytes(&mut secret);
    secret
}

/// Token lifetime from `TOKEN_TTL_SECS`, defaulting to one hour.
fn token_ttl() -> Duration {
    env::var("TOKEN_TTL_SECS")
        .ok()
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|secs| *secs > 0)
        .map_or_else(|| Duration::seconds(3600), Duration::seconds)
}

fn build_app(
    state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .service(register)
        .service(login)
        .service(profile);

    #[allow(unused_mut, reason = "Swagger UI is appended in debug builds")]
    let mut app = App::new()
        .app_data(state)
        .app_data(health_state)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}
