//! JSON-lines bridge: one client message per input line, one server message
//! per output line.
//!
//! A line that is not valid UTF-8 or not a valid message is answered with a
//! `BAD_MESSAGE` error and the loop keeps going.

use crate::handlers::handle_message;
use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::AppState;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Serve messages from `reader` until it is closed
pub async fn run<R, W>(mut reader: R, mut writer: W, state: &Arc<AppState>) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }

        let line = buf.trim_ascii();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_slice::<ClientMessage>(line) {
            Ok(msg) => handle_message(msg, state).await,
            Err(e) => {
                tracing::warn!("Failed to parse message: {}", e);
                ServerMessage::Error {
                    code: "BAD_MESSAGE".to_string(),
                    msg: e.to_string(),
                }
            }
        };

        let mut out = serde_json::to_vec(&response).map_err(std::io::Error::other)?;
        out.push(b'\n');
        writer.write_all(&out).await?;
        writer.flush().await?;
    }
}
