use crate::error_handler::ApiError;
use axum_extra::TypedHeader;
use headers::authorization::Bearer;
use headers::Authorization;
use menu_assistant::{AssistantError, Credential};

/// Takes the completion-service key from `Authorization: Bearer <key>`.
///
/// The key is only checked for presence; the completion service is the one
/// that decides whether it is valid.
pub fn bearer_credential(
    auth: Option<TypedHeader<Authorization<Bearer>>>,
) -> Result<Credential, ApiError> {
    let Some(TypedHeader(auth)) = auth else {
        log::warn!("Session request without Authorization header");
        return Err(AssistantError::MissingCredential.into());
    };

    Credential::new(auth.token()).ok_or_else(|| {
        log::warn!("Session request with empty bearer token");
        AssistantError::MissingCredential.into()
    })
}
