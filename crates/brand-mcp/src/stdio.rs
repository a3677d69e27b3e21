//! Stdio transport
//!
//! One JSON-RPC message per line in each direction. Every request runs in
//! its own task, so a slow upstream call never holds up the others; responses
//! are written as they finish and matched to requests by `id`.

use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::Result;
use crate::protocol::{RpcError, error_response};
use crate::server::BrandServer;

/// Serve MCP until the reader reaches EOF
///
/// In-flight requests are drained before returning.
pub async fn serve<R, W>(server: Arc<BrandServer>, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!(tools = server.registry().len(), "Serving MCP over stdio");

    let mut lines = reader.split(b'\n');
    let mut in_flight: JoinSet<Option<Value>> = JoinSet::new();
    let mut reading = true;

    loop {
        tokio::select! {
            segment = lines.next_segment(), if reading => {
                match segment? {
                    Some(bytes) => match String::from_utf8(bytes) {
                        Ok(line) if line.trim().is_empty() => {}
                        Ok(line) => {
                            let server = Arc::clone(&server);
                            in_flight.spawn(async move {
                                server.handle_line(line.trim_end()).await
                            });
                        }
                        Err(e) => {
                            debug!(error = %e, "Input line is not UTF-8");
                            let response = error_response(
                                Value::Null,
                                RpcError::parse_error(format!("Parse error: {e}")),
                            );
                            write_message(&mut writer, &response).await?;
                        }
                    },
                    None => {
                        debug!(pending = in_flight.len(), "Input closed");
                        reading = false;
                    }
                }
            }
            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                match joined {
                    Ok(Some(response)) => write_message(&mut writer, &response).await?,
                    Ok(None) => {}
                    Err(e) => error!(error = %e, "Request task failed"),
                }
            }
            else => break,
        }
    }

    writer.flush().await?;
    info!("MCP session ended");
    Ok(())
}

async fn write_message<W>(writer: &mut W, message: &Value) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut bytes = serde_json::to_vec(message)?;
    bytes.push(b'\n');
    writer.write_all(&bytes).await?;
    writer.flush().await?;
    Ok(())
}
