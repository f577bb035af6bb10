//! Wire types for the credential service API.
//!
//! Request payloads serialize with the exact camelCase field names the
//! server expects. Everything here is a transient projection of server
//! data; nothing is cached or mutated client-side.

use serde::{Deserialize, Serialize};

/// A stored system/login/password triple managed on behalf of a division.
///
/// Distinct from the user's own login credentials. Display-only on the
/// client; mutations go through a full round-trip to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub system: String,
    pub login: String,
    pub password: String,
}

/// A server-side grouping entity. Opaque identifier from the client's
/// perspective, used only as a selectable option.
///
/// The server sends Mongo-style `_id` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgUnit {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
}

/// Draft fields for adding a division credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialDraft {
    pub system: String,
    pub login: String,
    pub password: String,
    #[serde(rename = "divisionId")]
    pub division_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CredentialsResponse {
    pub credentials: Vec<Credential>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OusResponse {
    pub ous: Vec<OrgUnit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RolesResponse {
    pub roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddCredentialResponse {
    pub credential: Credential,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateCredentialsRequest<'a> {
    #[serde(rename = "newPassword")]
    pub new_password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssignDivisionRequest<'a> {
    #[serde(rename = "divisionId")]
    pub division_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChangeRoleRequest<'a> {
    #[serde(rename = "userId")]
    pub user_id: Option<&'a str>,
    #[serde(rename = "newRole")]
    pub new_role: &'a str,
}
