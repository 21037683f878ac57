//! Change-feed WebSocket upgrade handler.
//!
//! Clients connect with `GET /ws?token={jwt}` and receive every
//! [`DomainEvent`](clubforge_core::events::DomainEvent) as a JSON text
//! frame. The feed carries notifications, not state: on receipt a client
//! re-fetches whatever view it renders.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};
use uuid::Uuid;

use crate::dto::request::WsQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /ws?token={jwt}
pub async fn ws_upgrade(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
) -> Result<Response, ApiError> {
    // Authenticate before upgrade; a bad token never opens a socket.
    let claims = state.jwt_decoder.decode_access_token(&query.token)?;
    state
        .session_manager
        .validate_session(claims.session_id())
        .await?;

    let user_id = claims.user_id();
    Ok(ws.on_upgrade(move |socket| handle_ws_connection(state, user_id, socket)))
}

/// Forwards feed events to an established WebSocket connection.
async fn handle_ws_connection(state: AppState, user_id: Uuid, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let mut feed_rx = state.feed.subscribe();

    info!(user_id = %user_id, "Change-feed connection established");

    loop {
        tokio::select! {
            event = feed_rx.recv() => match event {
                Ok(event) => {
                    let json = match serde_json::to_string(&event) {
                        Ok(json) => json,
                        Err(e) => {
                            warn!(user_id = %user_id, error = %e, "Failed to encode event");
                            continue;
                        }
                    };
                    if ws_tx.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                // A lagged subscriber missed events; clients refetch on
                // the next one, so just keep going.
                Err(RecvError::Lagged(skipped)) => {
                    warn!(user_id = %user_id, skipped, "Change-feed subscriber lagged");
                }
                Err(RecvError::Closed) => break,
            },
            inbound = ws_rx.next() => match inbound {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!(user_id = %user_id, error = %e, "WebSocket error");
                    break;
                }
            },
        }
    }

    info!(user_id = %user_id, "Change-feed connection closed");
}
