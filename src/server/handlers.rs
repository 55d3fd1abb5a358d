//! HTTP handlers for the contact API.
//!
//! Handlers stay thin: they parse request input, call the matching service
//! operation, and wrap the result in the response envelope. Every body here
//! carries a `success` flag; errors inherit theirs from [`ApiError`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::query::{ContactFilter, Page};
use crate::server::extract::AuthUser;
use crate::server::AppState;

/// Credentials accepted by register and login.
///
/// Fields default to empty so missing keys surface as validation messages
/// rather than deserialization failures.
#[derive(Debug, Deserialize)]
pub struct CredentialsPayload {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Raw query string of a contact listing. Values are kept as text so range
/// and format checking happens in one place, with our own error envelope.
#[derive(Debug, Deserialize, Default)]
pub struct ListContactsQuery {
    pub search: Option<String>,
    pub favorite: Option<String>,
    pub tag: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

// Route captures arrive as text; anything non-numeric cannot name a row.
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::NotFound("Contact"))
}

/// GET / - liveness check.
pub async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Rolo API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> ApiResult<impl IntoResponse> {
    let session = state.auth.register(&payload.email, &payload.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "User registered successfully",
            "token": session.token,
            "user": { "id": session.user_id, "email": session.email },
        })),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> ApiResult<Json<Value>> {
    let session = state.auth.login(&payload.email, &payload.password).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Login successful",
        "token": session.token,
        "user": { "id": session.user_id, "email": session.email },
    })))
}

/// GET /api/auth/me
pub async fn current_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<Value>> {
    let user = state.auth.current_user(user_id).await?;
    Ok(Json(json!({ "success": true, "user": user })))
}

/// GET /api/contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(params): Query<ListContactsQuery>,
) -> ApiResult<Json<Value>> {
    let page = Page::from_params(params.page.as_deref(), params.limit.as_deref())?;
    let filter = ContactFilter::from_params(
        params.search.as_deref(),
        params.favorite.as_deref(),
        params.tag.as_deref(),
    );

    let listing = state.contacts.list(user_id, filter, page).await?;
    Ok(Json(json!({
        "success": true,
        "contacts": listing.contacts,
        "pagination": listing.pagination,
    })))
}

/// GET /api/contacts/{id}
pub async fn get_contact(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let contact = state.contacts.get(parse_id(&id)?, user_id).await?;
    Ok(Json(json!({ "success": true, "contact": contact })))
}

/// POST /api/contacts
pub async fn create_contact(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(draft): Json<crate::models::ContactDraft>,
) -> ApiResult<impl IntoResponse> {
    let contact = state.contacts.create(user_id, draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Contact created successfully",
            "contact": contact,
        })),
    ))
}

/// PUT /api/contacts/{id}
pub async fn update_contact(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
    Json(draft): Json<crate::models::ContactDraft>,
) -> ApiResult<Json<Value>> {
    let contact = state.contacts.update(parse_id(&id)?, user_id, draft).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Contact updated successfully",
        "contact": contact,
    })))
}

/// DELETE /api/contacts/{id}
pub async fn delete_contact(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    state.contacts.delete(parse_id(&id)?, user_id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Contact deleted successfully",
    })))
}

/// PATCH /api/contacts/{id}/favorite
pub async fn toggle_favorite(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let is_favorite = state
        .contacts
        .toggle_favorite(parse_id(&id)?, user_id)
        .await?;
    let message = if is_favorite {
        "Contact added to favorites"
    } else {
        "Contact removed from favorites"
    };
    Ok(Json(json!({
        "success": true,
        "message": message,
        "is_favorite": is_favorite,
    })))
}

/// GET /api/contacts/tags
pub async fn list_tags(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<Value>> {
    let tags = state.contacts.distinct_tags(user_id).await?;
    Ok(Json(json!({ "success": true, "tags": tags })))
}
