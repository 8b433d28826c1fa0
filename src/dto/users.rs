use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// Every field is required; presence is checked explicitly so a missing
/// field answers 400 with a message instead of a deserializer rejection.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub telephone: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Whitelisted updatable columns. `id` and the password are deliberately
/// absent so a payload cannot mass-assign them.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub telephone: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.full_name.is_none()
            && self.telephone.is_none()
            && self.address.is_none()
            && self.email.is_none()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserList {
    pub items: Vec<User>,
}
