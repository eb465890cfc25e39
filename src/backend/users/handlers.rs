/**
 * User Handlers
 *
 * - `GET /users` - list every user, passwords blanked
 * - `POST /add/user` - create a user
 * - `GET /check/user?email=...` - whether any user has this exact email
 *
 * Emails are not unique: creation does not look for an existing user and
 * the existence check answers `true` for one or many matches.
 */
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::common::{create_one, created, list_all, read_json};
use crate::backend::error::BackendError;
use crate::backend::store::Repository;
use crate::shared::records::user::EMAIL_FIELD;
use crate::shared::records::User;

/// Query string of `GET /check/user`
#[derive(Debug, Default, Deserialize)]
pub struct CheckUserQuery {
    pub email: Option<String>,
}

/// Response of `GET /check/user`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserExists {
    pub exists: bool,
}

/// List every user
///
/// # Errors
///
/// * `500 Internal Server Error` - If the store fails or a stored user does not decode
pub async fn list_users(
    State(repository): State<Repository>,
) -> Result<Json<Vec<User>>, BackendError> {
    let users = list_all::<User>(&repository, "Users").await?;
    Ok(Json(users.into_iter().map(User::redacted).collect()))
}

/// Create a user
///
/// # Errors
///
/// * `400 Bad Request` - If the body is not a user, or `name`/`email` fail validation
/// * `500 Internal Server Error` - If the insert fails
///
/// # Example Response
///
/// ```json
/// {"user_id": "65f0c0ffee0000000000abcd"}
/// ```
pub async fn create_user(
    State(repository): State<Repository>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<Json<Value>, BackendError> {
    let user = read_json(payload)?;
    let id = create_one(&repository, user).await?;
    Ok(created::<User>(id))
}

/// Check whether a user with this email exists
///
/// The match is exact and case-sensitive. Nothing about the matching user
/// is returned.
///
/// # Errors
///
/// * `400 Bad Request` - If `email` is missing or empty
/// * `500 Internal Server Error` - If the lookup fails
///
/// # Example
///
/// ```http
/// GET /check/user?email=none@x.com HTTP/1.1
/// ```
///
/// ```json
/// {"exists": false}
/// ```
pub async fn check_user(
    State(repository): State<Repository>,
    query: Result<Query<CheckUserQuery>, QueryRejection>,
) -> Result<Json<UserExists>, BackendError> {
    let email = query
        .ok()
        .and_then(|Query(query)| query.email)
        .filter(|email| !email.is_empty())
        .ok_or_else(|| BackendError::bad_request("Email query parameter is required"))?;

    let exists = repository
        .exists_where::<User>(EMAIL_FIELD, email)
        .await
        .map_err(|e| BackendError::store("Error checking user existence", e))?;

    Ok(Json(UserExists { exists }))
}
