//! Company settings endpoints.

use axum::{
    async_trait,
    extract::{FromRequest, Request, State},
    http::header,
    routing::get,
    Form, Json, Router,
};
use serde::Deserialize;

use ar_core::commands;

use crate::dto::CompanySettingsResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Creates settings routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/settings/company",
        get(get_company).post(rename_company),
    )
}

/// Body of the company rename (matches the HTML form field).
#[derive(Debug, Default, Deserialize)]
pub struct CompanyForm {
    #[serde(default)]
    pub name: String,
}

/// Extracts a [`CompanyForm`] from either a JSON or a form-encoded body.
///
/// JSON is chosen when the content type says so; anything else is read as a form.
#[derive(Debug)]
pub struct CompanyInput(pub CompanyForm);

#[async_trait]
impl<S> FromRequest<S> for CompanyInput
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(form) = Json::<CompanyForm>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
            Ok(Self(form))
        } else {
            let Form(form) = Form::<CompanyForm>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
            Ok(Self(form))
        }
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            let mime = value.split(';').next().unwrap_or_default().trim();
            mime.eq_ignore_ascii_case("application/json")
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

/// Get the current company name.
#[utoipa::path(
    get,
    path = "/settings/company",
    responses(
        (status = 200, description = "Current company name", body = CompanySettingsResponse)
    ),
    tag = "Settings"
)]
pub(crate) async fn get_company(State(state): State<AppState>) -> Json<CompanySettingsResponse> {
    Json(CompanySettingsResponse {
        success: true,
        company_name: state.settings.company_name().await,
    })
}

/// Rename the company.
///
/// A blank name keeps the current one and still reports success.
#[utoipa::path(
    post,
    path = "/settings/company",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "Form or JSON body with a `name` field"
    ),
    responses(
        (status = 200, description = "Company name after the rename", body = CompanySettingsResponse),
        (status = 400, description = "Malformed body", body = crate::error::ErrorResponse)
    ),
    tag = "Settings"
)]
pub(crate) async fn rename_company(
    State(state): State<AppState>,
    CompanyInput(form): CompanyInput,
) -> Json<CompanySettingsResponse> {
    let outcome = commands::rename_company(state.settings.as_ref(), &form.name).await;
    Json(outcome.into())
}
