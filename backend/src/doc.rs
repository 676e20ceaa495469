//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: the three authentication endpoints, the health probes,
//! the shared schemas, and the bearer-token security scheme. The generated
//! specification backs Swagger UI in debug builds.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, User};
use crate::inbound::http::auth::{AuthResponse, LoginRequest, RegisterRequest};

/// Enrich the generated document with the bearer-token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some(
                        "Session token issued by POST /api/v1/auth/register or /auth/login.",
                    ))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Expense tracker authentication API",
        description = "Account registration, login, and profile retrieval."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::auth::register,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::profile,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(RegisterRequest, LoginRequest, AuthResponse, User, Error)),
    tags(
        (name = "auth", description = "Account registration and authentication"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
