//! Authentication handlers.

use actix_web::{HttpResponse, web};
use validator::Validate;

use flexa_core::domain::Credentials;
use flexa_shared::dto::{LoginRequest, LoginResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/auth/login
///
/// Checks the body's shape, then hands the credentials to the identity provider.
/// Provider failures of any kind come back as the same 401.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let credentials = Credentials::new(req.email, req.password);
    let token = state.identity.sign_in_with_password(&credentials).await?;

    Ok(HttpResponse::Ok().json(LoginResponse::bearer(token.into_inner())))
}
