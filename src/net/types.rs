//! Wire DTOs for the resource server.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON exactly. List records implement
//! `RecordLine` so list views share one "primary - secondary" renderer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `GET /profile` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub message: String,
    /// Username of the token holder.
    pub user: String,
}

/// One entry of `GET /admin/users`.
///
/// The server also sends the password hash; it is ignored here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub username: String,
    pub role: String,
}

/// One entry of `GET /admin/warehousemanagers`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseManager {
    pub id: u64,
    pub name: String,
    pub contact: String,
}

/// Body for `POST /login` and `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// `POST /login` success payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
}

/// `POST /register` success payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
}

/// Error body the server attaches to non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A list record rendered as one line: `"<primary> - <secondary>"`.
pub trait RecordLine {
    /// Stable key for keyed list rendering.
    fn key(&self) -> u64;
    fn primary(&self) -> &str;
    fn secondary(&self) -> &str;

    fn line(&self) -> String {
        format!("{} - {}", self.primary(), self.secondary())
    }
}

impl RecordLine for UserRecord {
    fn key(&self) -> u64 {
        self.id
    }

    fn primary(&self) -> &str {
        &self.username
    }

    fn secondary(&self) -> &str {
        &self.role
    }
}

impl RecordLine for WarehouseManager {
    fn key(&self) -> u64 {
        self.id
    }

    fn primary(&self) -> &str {
        &self.name
    }

    fn secondary(&self) -> &str {
        &self.contact
    }
}
