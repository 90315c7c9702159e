//! Request and response bodies for the backend REST API.
//!
//! DESIGN
//! ======
//! The backend serialises some records straight from its ORM models, so
//! field names arrive either capitalised (`ID`, `Name`) or lowercase
//! depending on the endpoint. Deserializers accept both spellings, and list
//! envelopes treat a JSON `null` as an empty list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "captchaId")]
    pub captcha_id: String,
    #[serde(rename = "captchaSolution")]
    pub captcha_solution: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body for `POST /register` and the admin-only `POST /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewRole {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "Username")]
    pub username: String,
    #[serde(alias = "Role", default)]
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(alias = "ID", default)]
    pub id: u64,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Description", default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountingRule {
    #[serde(alias = "Endpoint")]
    pub endpoint: String,
    #[serde(alias = "Charge")]
    pub charge: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoleChange {
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChargeUpdate {
    pub charge: f64,
}

/// HTTP method a dynamic route answers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RouteMethod {
    #[default]
    Any,
    Get,
    Post,
    Put,
    Delete,
}

impl RouteMethod {
    pub const ALL: [Self; 5] = [Self::Any, Self::Get, Self::Post, Self::Put, Self::Delete];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Parse a `<select>` value; unknown values fall back to `ANY`.
    pub fn from_form_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(value.trim()))
            .unwrap_or_default()
    }
}

/// Body for `POST /admin/customendpoints`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DynamicRoute {
    pub path: String,
    pub method: RouteMethod,
    pub endpoints: Vec<String>,
    #[serde(rename = "needAccounting")]
    pub need_accounting: bool,
}

/// Body for `POST /sms/sendsms`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SmsBatch {
    pub senders: Vec<String>,
    pub receivers: Vec<String>,
    pub text: String,
    pub track_ids: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SmsReceipt {
    #[serde(rename = "message-id", default)]
    pub message_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CaptchaChallenge {
    #[serde(rename = "captchaId")]
    pub captcha_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UsersEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub users: Vec<User>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RolesEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub roles: Vec<Role>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RulesEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rules: Vec<AccountingRule>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PhonesEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phones: Vec<String>,
}

/// Error body the backend returns on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
