//! Notification route handlers.
//!
//! The notification tray polls the fragment route; the store expires each
//! notification on its own timer, so a poll after expiry simply renders an
//! empty tray. Dismissal goes through the store's idempotent removal.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use avant_cart::Notification;
use avant_core::NotificationId;

use crate::state::AppState;

/// Notification display data for templates.
#[derive(Clone)]
pub struct NotificationView {
    pub id: String,
    pub message: String,
    /// CSS class hook: "success", "info", or "error".
    pub kind: &'static str,
}

impl From<&Notification> for NotificationView {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            message: notification.message.clone(),
            kind: notification.kind.as_str(),
        }
    }
}

/// Notifications tray fragment template (for HTMX polling).
#[derive(Template, WebTemplate)]
#[template(path = "partials/notifications.html")]
pub struct NotificationsTemplate {
    pub notifications: Vec<NotificationView>,
}

/// Dismiss form data.
#[derive(Debug, Deserialize)]
pub struct DismissForm {
    pub id: String,
}

fn tray(state: &AppState) -> NotificationsTemplate {
    NotificationsTemplate {
        notifications: state
            .cart()
            .notifications()
            .iter()
            .map(NotificationView::from)
            .collect(),
    }
}

/// Current notifications fragment.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    tray(&state)
}

/// Dismiss one notification and return the refreshed tray.
///
/// Dismissing an already-expired id is a no-op; the tray just re-renders.
#[instrument(skip(state))]
pub async fn dismiss(
    State(state): State<AppState>,
    Form(form): Form<DismissForm>,
) -> impl IntoResponse {
    state
        .cart()
        .remove_notification(&NotificationId::new(form.id));
    tray(&state)
}
