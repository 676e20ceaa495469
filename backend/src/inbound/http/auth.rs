//! Authentication API handlers.
//!
//! ```text
//! POST /api/v1/auth/register {"fullName":"Test User","email":"test@example.com","password":"password"}
//! POST /api/v1/auth/login    {"email":"test@example.com","password":"password"}
//! GET  /api/v1/auth/profile  (Authorization: Bearer <token>)
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    ApiResult, AuthenticatedSession, CredentialValidationError, Error, LoginCredentials,
    RegistrationDetails, User, UserId,
};

use super::identity::RequestIdentity;
use super::state::HttpState;

/// Fixed message for any missing/blank required field, register and login
/// alike. One text for every case so responses stay uniform.
const ALL_FIELDS_REQUIRED_MESSAGE: &str = "All fields are required";

/// Registration request body for `POST /api/v1/auth/register`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Name shown on the new user's profile.
    pub full_name: String,
    /// Unique login identifier.
    pub email: String,
    /// Plaintext password; hashed at the store boundary, never persisted.
    pub password: String,
    /// Optional avatar location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

/// Login request body for `POST /api/v1/auth/login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Login identifier.
    pub email: String,
    /// Password candidate.
    pub password: String,
}

/// Success body shared by register and login: `{id, user, token}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    /// The authenticated user's id, duplicated from `user` for convenience.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: UserId,
    /// The user record, without password material.
    pub user: User,
    /// Freshly signed session token.
    pub token: String,
}

impl From<AuthenticatedSession> for AuthResponse {
    fn from(session: AuthenticatedSession) -> Self {
        let (user, token) = session.into_parts();
        Self {
            id: user.id().clone(),
            user,
            token: token.into_string(),
        }
    }
}

fn validation_error(err: CredentialValidationError) -> Error {
    tracing::debug!(error = %err, "rejected auth payload");
    Error::invalid_request(ALL_FIELDS_REQUIRED_MESSAGE)
}

/// Register a new account and issue its first session token.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Missing fields or email already in use", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "register",
    security([])
)]
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let details = RegistrationDetails::try_from_parts(
        &body.full_name,
        &body.email,
        &body.password,
        body.profile_image_url.as_deref(),
    )
    .map_err(validation_error)?;

    let session = state.auth.register(details).await?;
    Ok(HttpResponse::Created().json(AuthResponse::from(session)))
}

/// Authenticate an existing account and issue a session token.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = AuthResponse),
        (status = 400, description = "Missing fields or invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let credentials =
        LoginCredentials::try_from_parts(&body.email, &body.password).map_err(validation_error)?;

    let session = state.auth.login(credentials).await?;
    Ok(HttpResponse::Ok().json(AuthResponse::from(session)))
}

/// Return the authenticated caller's profile.
#[utoipa::path(
    get,
    path = "/api/v1/auth/profile",
    responses(
        (status = 200, description = "The caller's user record", body = User),
        (status = 401, description = "Missing or invalid bearer token", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "getProfile"
)]
#[get("/auth/profile")]
pub async fn profile(
    state: web::Data<HttpState>,
    identity: RequestIdentity,
) -> ApiResult<web::Json<User>> {
    let user = state.auth.profile(identity.identity()).await?;
    Ok(web::Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::persistence::InMemoryUserStore;
    use crate::outbound::token::JwtTokenService;
    use actix_web::{test as actix_test, App};
    use rstest::rstest;
    use serde_json::Value;
    use std::sync::Arc;

    fn test_state() -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(JwtTokenService::with_default_ttl(b"handler-test-secret")),
        ))
    }

    fn test_app(
        state: web::Data<HttpState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(state).service(
            web::scope("/api/v1")
                .service(register)
                .service(login)
                .service(profile),
        )
    }

    fn register_body(full_name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            full_name: full_name.into(),
            email: email.into(),
            password: password.into(),
            profile_image_url: Some("url".into()),
        }
    }

    #[rstest]
    #[case::all_blank("", "", "")]
    #[case::blank_name("", "test@example.com", "password")]
    #[case::blank_email("Test User", "", "password")]
    #[case::blank_password("Test User", "test@example.com", "")]
    #[actix_rt::test]
    async fn register_rejects_missing_fields(
        #[case] full_name: &str,
        #[case] email: &str,
        #[case] password: &str,
    ) {
        let app = actix_test::init_service(test_app(test_state())).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(register_body(full_name, email, password))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("error payload");
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("All fields are required")
        );
        assert!(value.get("error").is_none());
    }

    #[actix_rt::test]
    async fn register_creates_user_with_201_and_token() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(register_body("Test User", "test@example.com", "password"))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::CREATED);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("auth payload");

        let id = value.get("id").and_then(Value::as_str).expect("id field");
        let user = value.get("user").expect("user field");
        assert_eq!(user.get("id").and_then(Value::as_str), Some(id));
        assert_eq!(
            user.get("fullName").and_then(Value::as_str),
            Some("Test User")
        );
        assert_eq!(
            user.get("email").and_then(Value::as_str),
            Some("test@example.com")
        );
        assert_eq!(user.get("profileImageUrl").and_then(Value::as_str), Some("url"));
        assert!(user.get("password").is_none());
        assert!(value
            .get("token")
            .and_then(Value::as_str)
            .is_some_and(|token| !token.is_empty()));
    }

    #[actix_rt::test]
    async fn register_conflicts_on_duplicate_email() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let first = actix_test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(register_body("Test User", "test@example.com", "password"))
            .to_request();
        assert!(actix_test::call_service(&app, first).await.status().is_success());

        let second = actix_test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(register_body("Other User", "test@example.com", "different"))
            .to_request();
        let response = actix_test::call_service(&app, second).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("error payload");
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Email already in use")
        );
    }

    #[rstest]
    #[case::blank_email("", "password")]
    #[case::blank_password("test@example.com", "")]
    #[actix_rt::test]
    async fn login_rejects_missing_fields(#[case] email: &str, #[case] password: &str) {
        let app = actix_test::init_service(test_app(test_state())).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(LoginRequest {
                email: email.into(),
                password: password.into(),
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("error payload");
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("All fields are required")
        );
    }

    #[actix_rt::test]
    async fn profile_requires_bearer_token() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/auth/profile")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_rt::test]
    async fn profile_rejects_garbage_token() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/auth/profile")
                .insert_header(("Authorization", "Bearer not-a-token"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
