//! HTTP client for the credential service.
//!
//! One async operation per remote action. Every authenticated call carries
//! the stored token verbatim in the `Authorization` header (the server
//! expects the raw value, no `Bearer ` prefix). Failures surface as
//! [`ApiError`] in one of three shapes; callers decide what to tell the
//! user and never retry automatically.

pub mod error;
pub mod trace;
pub mod types;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use error::{ApiError, ApiErrorKind, ApiResult};
use trace::DebugTrace;
pub use types::{Credential, CredentialDraft, OrgUnit};
use types::{
    AddCredentialResponse, AssignDivisionRequest, ChangeRoleRequest, CredentialsResponse,
    LoginRequest, LoginResponse, OusResponse, RegisterResponse, RolesResponse,
    UpdateCredentialsRequest,
};

/// Standard User-Agent header for credvault API requests.
pub const USER_AGENT: &str = concat!("credvault/", env!("CARGO_PKG_VERSION"));

/// Client for the credential service API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a new client for the given base origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Authenticates with the server and returns the bearer token.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<String> {
        let body = LoginRequest { username, password };
        let response: LoginResponse = self
            .send("login", Method::POST, "/login", None, Some(&body))
            .await?;
        Ok(response.token)
    }

    /// Registers a new account and returns the server's confirmation message.
    pub async fn register(&self, username: &str, password: &str) -> ApiResult<String> {
        let body = LoginRequest { username, password };
        let response: RegisterResponse = self
            .send("register", Method::POST, "/register", None, Some(&body))
            .await?;
        Ok(response.message)
    }

    /// Lists the division credentials visible to the caller.
    pub async fn list_credentials(&self, token: &str) -> ApiResult<Vec<Credential>> {
        let response: CredentialsResponse = self
            .send(
                "list_credentials",
                Method::GET,
                "/division-credentials",
                Some(token),
                None::<&()>,
            )
            .await?;
        Ok(response.credentials)
    }

    /// Lists the organizational units.
    pub async fn list_ous(&self, token: &str) -> ApiResult<Vec<OrgUnit>> {
        let response: OusResponse = self
            .send("list_ous", Method::GET, "/ous", Some(token), None::<&()>)
            .await?;
        Ok(response.ous)
    }

    /// Lists the assignable role names.
    pub async fn list_roles(&self, token: &str) -> ApiResult<Vec<String>> {
        let response: RolesResponse = self
            .send("list_roles", Method::GET, "/roles", Some(token), None::<&()>)
            .await?;
        Ok(response.roles)
    }

    /// Adds a division credential and returns the stored record.
    ///
    /// The server answers 404 for an unknown division and 403 when the
    /// caller lacks rights over it; both arrive as `Status` errors.
    pub async fn add_credential(
        &self,
        token: &str,
        draft: &CredentialDraft,
    ) -> ApiResult<Credential> {
        let response: AddCredentialResponse = self
            .send(
                "add_credential",
                Method::POST,
                "/add-credential",
                Some(token),
                Some(draft),
            )
            .await?;
        Ok(response.credential)
    }

    /// Updates the caller's own password.
    pub async fn update_own_credentials(&self, token: &str, new_password: &str) -> ApiResult<()> {
        let body = UpdateCredentialsRequest { new_password };
        self.send_ack(
            "update_credentials",
            Method::PUT,
            "/update-credentials",
            Some(token),
            Some(&body),
        )
        .await
    }

    /// Assigns the caller to a division or OU by opaque id.
    pub async fn assign_division(&self, token: &str, division_id: &str) -> ApiResult<()> {
        let body = AssignDivisionRequest { division_id };
        self.send_ack(
            "assign_division",
            Method::PUT,
            "/assign-division",
            Some(token),
            Some(&body),
        )
        .await
    }

    /// Changes a user's role.
    pub async fn change_role(
        &self,
        token: &str,
        user_id: Option<&str>,
        new_role: &str,
    ) -> ApiResult<()> {
        let body = ChangeRoleRequest { user_id, new_role };
        self.send_ack(
            "change_role",
            Method::PUT,
            "/change-role",
            Some(token),
            Some(&body),
        )
        .await
    }

    /// Sends a request and decodes the JSON success payload.
    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        op: &str,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> ApiResult<T> {
        let text = self.send_raw(op, method, path, token, body).await?;
        serde_json::from_str(&text)
            .map_err(|e| ApiError::request(format!("Failed to decode response: {e}")))
    }

    /// Sends a request where only the status matters (PUT acks).
    async fn send_ack<B: Serialize>(
        &self,
        op: &str,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> ApiResult<()> {
        self.send_raw(op, method, path, token, body).await?;
        Ok(())
    }

    async fn send_raw<B: Serialize>(
        &self,
        op: &str,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> ApiResult<String> {
        let trace = DebugTrace::from_env(op);

        let url = format!("{}{}", self.base_url, path);
        let mut builder = self
            .http
            .request(method, &url)
            .header(reqwest::header::USER_AGENT, USER_AGENT);

        if let Some(token) = token {
            // Raw token pass-through, no "Bearer " prefix
            builder = builder.header(reqwest::header::AUTHORIZATION, token);
        }

        if let Some(body) = body {
            if let Some(trace) = &trace
                && let Ok(bytes) = serde_json::to_vec(body)
            {
                trace.write_request(&bytes);
            }
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;

        if let Some(trace) = &trace {
            trace.write_response(status.as_u16(), &text);
        }

        if !status.is_success() {
            return Err(ApiError::status(status.as_u16(), &text));
        }

        Ok(text)
    }
}
