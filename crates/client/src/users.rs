use serde::Deserialize;

use crate::{Client, Result, Transport};

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: String,
    pub attributes: UserAttributes,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UserAttributes {
    pub username: String,
    pub formatted_name: Option<String>,
}

impl<T: Transport> Client<T> {
    /// Get the user we're authenticated as
    pub fn me(&self) -> Result<User> {
        const ROUTE: &str = "/users/me";
        self.get(ROUTE)?.into_result(ROUTE)
    }
}
