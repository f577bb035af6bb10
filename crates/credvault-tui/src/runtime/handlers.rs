//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return `UiEvent`. The runtime
//! spawns them and routes the result through the inbox; they never touch
//! state. Fetch handlers take an optional cancellation token so a
//! sign-out can abandon them mid-flight.

use credvault_core::api::{ApiClient, ApiError, ApiResult, CredentialDraft};
use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;

pub async fn login(client: ApiClient, username: String, password: String) -> UiEvent {
    UiEvent::LoginResult(client.login(&username, &password).await)
}

pub async fn register(client: ApiClient, username: String, password: String) -> UiEvent {
    UiEvent::RegisterResult(client.register(&username, &password).await)
}

pub async fn fetch_credentials(
    client: ApiClient,
    token: String,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let result = cancellable(cancel, client.list_credentials(&token)).await;
    UiEvent::CredentialsLoaded(result)
}

pub async fn fetch_ous(
    client: ApiClient,
    token: String,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let result = cancellable(cancel, client.list_ous(&token)).await;
    UiEvent::OusLoaded(result)
}

pub async fn fetch_roles(
    client: ApiClient,
    token: String,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let result = cancellable(cancel, client.list_roles(&token)).await;
    UiEvent::RolesLoaded(result)
}

pub async fn add_credential(client: ApiClient, token: String, draft: CredentialDraft) -> UiEvent {
    UiEvent::CredentialAdded(client.add_credential(&token, &draft).await)
}

pub async fn update_password(client: ApiClient, token: String, new_password: String) -> UiEvent {
    UiEvent::PasswordUpdated(client.update_own_credentials(&token, &new_password).await)
}

pub async fn assign_division(client: ApiClient, token: String, division_id: String) -> UiEvent {
    UiEvent::DivisionAssigned(client.assign_division(&token, &division_id).await)
}

pub async fn change_role(
    client: ApiClient,
    token: String,
    user_id: Option<String>,
    new_role: String,
) -> UiEvent {
    UiEvent::RoleChanged(
        client
            .change_role(&token, user_id.as_deref(), &new_role)
            .await,
    )
}

/// Races a request against its cancellation token. The cancelled arm still
/// produces an event; the reducer drops it as stale.
async fn cancellable<T>(
    cancel: Option<CancellationToken>,
    fut: impl Future<Output = ApiResult<T>>,
) -> ApiResult<T> {
    match cancel {
        Some(cancel) => {
            tokio::select! {
                () = cancel.cancelled() => Err(ApiError::request("Cancelled")),
                result = fut => result,
            }
        }
        None => fut.await,
    }
}
