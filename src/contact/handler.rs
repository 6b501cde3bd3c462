use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, routing::post, Json, Router};

use super::{
    ContactForm, ContactResponse, Mailer, OutgoingEmail, CONTACT_PATH, FAILED_MESSAGE,
    MISSING_FIELDS_MESSAGE,
};

/// Everything the relay needs to forward one submission.
pub struct Relay<M> {
    pub mailer: M,
    pub from: String,
    pub to: String,
}

/// `POST /api/contact`, ready to merge into an app router of any state type.
pub fn contact_router<M, S>(relay: Relay<M>) -> Router<S>
where
    M: Mailer,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(CONTACT_PATH, post(contact_handler::<M>))
        .with_state(Arc::new(relay))
}

pub async fn contact_handler<M: Mailer>(
    State(relay): State<Arc<Relay<M>>>,
    body: Bytes,
) -> (StatusCode, Json<ContactResponse>) {
    let form = match serde_json::from_slice::<ContactForm>(&body) {
        Ok(form) => form,
        Err(e) => {
            tracing::error!(error = %e, "unreadable contact submission");
            return failed(StatusCode::INTERNAL_SERVER_ERROR, FAILED_MESSAGE);
        }
    };

    if form.validate().is_err() {
        return failed(StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE);
    }

    let email = OutgoingEmail::for_submission(&form, &relay.from, &relay.to);
    match relay.mailer.send(email).await {
        Ok(()) => {
            tracing::debug!(name = %form.name, "contact email sent");
            (StatusCode::OK, Json(ContactResponse::sent()))
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to send contact email");
            failed(StatusCode::INTERNAL_SERVER_ERROR, FAILED_MESSAGE)
        }
    }
}

fn failed(status: StatusCode, error: &str) -> (StatusCode, Json<ContactResponse>) {
    (status, Json(ContactResponse::failed(error)))
}
