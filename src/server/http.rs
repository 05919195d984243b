//! Plain HTTP handlers.
use actix_web::{web, HttpRequest, HttpResponse, http::header::ContentType};
use log::info;

use crate::server::moves::parse_move_query;
use crate::server::relay::messages::{Broadcast, ServerEvent, MOVE_PIECE};
use crate::server::state::AppState;
use crate::server::ws_error::MoveQueryError;

/// Body of the status page.
pub const STATUS_TEXT: &str = "Chessboard Socket.IO server is running.";

/// `GET /`: static status page.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(STATUS_TEXT)
}

/// `GET /move?start=E2&end=E4[&capture=..]`: broadcasts `move_piece` to every client.
///
/// The broadcast is queued on the relay and not awaited.
pub async fn relay_move(
    req: HttpRequest,
    data: web::Data<AppState>,
) -> Result<HttpResponse, MoveQueryError> {
    let piece_move = parse_move_query(req.query_string())?;

    info!("[HTTP] Request to move: {}", piece_move);

    let body = format!("Emitted {}: {}", MOVE_PIECE, piece_move);
    data.relay_addr.do_send(Broadcast(ServerEvent::MovePiece(piece_move)));

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(body))
}
