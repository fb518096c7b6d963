//! Users API handlers.
//!
//! ```text
//! GET    /api/users
//! GET    /api/users/{email}
//! POST   /api/users          {"name":"Alice","email":"alice@example.com"}
//! PUT    /api/users/{email}  {"name":"Alice B","email":"alice.b@example.com"}
//! DELETE /api/users/{email}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{EmailAddress, Error, User, UserName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{MessageResponse, roster_response};
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_email, parse_name};

const EMAIL: FieldName = FieldName::new("email");
const NAME: FieldName = FieldName::new("name");

/// Request body for registering or updating a user.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UserRequest {
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
}

impl UserRequest {
    fn parse(self) -> Result<(UserName, EmailAddress), Error> {
        Ok((parse_name(self.name, NAME)?, parse_email(self.email, EMAIL)?))
    }
}

/// Body of `GET /api/users`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersResponse {
    #[schema(value_type = Vec<UserSchema>)]
    pub users: Vec<User>,
}

/// Body of `GET /api/users/{email}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(value_type = UserSchema)]
    pub user: User,
}

/// Outcome message paired with the affected user.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserMessageResponse {
    pub message: String,
    #[schema(value_type = UserSchema)]
    pub user: User,
}

/// List every registered user.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Registered users", body = UsersResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    roster_response(state.users.list_users().await, |users| {
        HttpResponse::Ok().json(UsersResponse { users })
    })
}

/// Fetch one user by email.
#[utoipa::path(
    get,
    path = "/api/users/{email}",
    params(("email" = String, Path, description = "Email of the user")),
    responses(
        (status = 200, description = "The user, or a message when no user has this email", body = UserResponse),
        (status = 400, description = "Invalid email", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{email}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let email = parse_email(path.into_inner(), EMAIL)?;
    roster_response(state.users.find_user(&email).await, |user| {
        HttpResponse::Ok().json(UserResponse { user })
    })
}

/// Register a user with empty favourite lists.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User registered", body = UserMessageResponse),
        (status = 200, description = "Email already registered", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/users")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let (name, email) = payload.into_inner().parse()?;
    roster_response(state.users_command.register(name, email).await, |user| {
        HttpResponse::Created().json(UserMessageResponse {
            message: format!("user {} added", user.email()),
            user,
        })
    })
}

/// Rename a user and/or change their email.
#[utoipa::path(
    put,
    path = "/api/users/{email}",
    params(("email" = String, Path, description = "Current email of the user")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated, or a message explaining why not", body = UserMessageResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{email}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let current = parse_email(path.into_inner(), EMAIL)?;
    let (name, email) = payload.into_inner().parse()?;
    let result = state.users_command.update(&current, name, email).await;
    roster_response(result, |user| {
        HttpResponse::Ok().json(UserMessageResponse {
            message: format!("user with email {current} updated"),
            user,
        })
    })
}

/// Remove a user and their favourites.
#[utoipa::path(
    delete,
    path = "/api/users/{email}",
    params(("email" = String, Path, description = "Email of the user")),
    responses(
        (status = 200, description = "Outcome message", body = MessageResponse),
        (status = 400, description = "Invalid email", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{email}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let email = parse_email(path.into_inner(), EMAIL)?;
    roster_response(state.users_command.remove(&email).await, |()| {
        HttpResponse::Ok().json(MessageResponse::new(format!(
            "user with email {email} deleted"
        )))
    })
}

#[cfg(test)]
mod tests;
