use super::*;
use thou_dto::ClientMessage;
use thou_dto::ServerMessage;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncWriteExt;
use tokio::io::BufReader;
use tokio::net::TcpStream;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::unbounded_channel;

/// One outbound frame: the message as JSON plus a newline.
pub fn frame(msg: &ClientMessage) -> String {
    format!("{}\n", msg.to_json())
}

/// Decodes one inbound line. Blank lines and frames that fail to decode
/// are dropped with a warning.
pub fn parse(line: &str) -> Option<ServerMessage> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match ServerMessage::from_json(line) {
        Ok(msg) => Some(msg),
        Err(e) => {
            log::warn!("[tcp] dropping frame {:?}: {}", line, e);
            None
        }
    }
}

/// Connects to a server speaking newline-delimited JSON. Spawns a reader
/// task and a writer task on the current runtime; the returned receiver
/// closes when the server hangs up.
pub async fn connect(addr: &str) -> anyhow::Result<(Link, UnboundedReceiver<ServerMessage>)> {
    let stream = TcpStream::connect(addr).await?;
    stream.set_nodelay(true)?;
    log::info!("[tcp] connected to {}", addr);
    let (reader, mut writer) = stream.into_split();
    let (tx_outgoing, mut rx_outgoing) = unbounded_channel::<ClientMessage>();
    let (tx_incoming, rx_incoming) = unbounded_channel::<ServerMessage>();
    tokio::spawn(async move {
        while let Some(msg) = rx_outgoing.recv().await {
            if let Err(e) = writer.write_all(frame(&msg).as_bytes()).await {
                log::warn!("[tcp] write failed: {}", e);
                break;
            }
        }
        log::debug!("[tcp] writer done");
    });
    tokio::spawn(async move {
        let mut lines = BufReader::new(reader).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => match parse(&line) {
                    Some(msg) => {
                        if tx_incoming.send(msg).is_err() {
                            break;
                        }
                    }
                    None => continue,
                },
                Ok(None) => break,
                Err(e) => {
                    log::warn!("[tcp] read failed: {}", e);
                    break;
                }
            }
        }
        log::info!("[tcp] server hung up");
    });
    Ok((Link::new(tx_outgoing), rx_incoming))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;
    #[test]
    fn frames_are_single_lines() {
        let line = frame(&ClientMessage::RollDice {
            room_id: "ABCD".to_string(),
        });
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
    }
    #[test]
    fn bad_frames_are_skipped() {
        assert_eq!(parse("   "), None);
        assert_eq!(parse("{not json"), None);
        assert_eq!(parse(r#"{"event":"reset-game"}"#), Some(ServerMessage::ResetGame));
    }
    #[tokio::test]
    async fn loopback_round_trip() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let (reader, mut writer) = socket.into_split();
            writer
                .write_all(b"garbage\n{\"event\":\"room-joined\",\"data\":{\"roomId\":\"WXYZ\"}}\n")
                .await
                .unwrap();
            let mut lines = BufReader::new(reader).lines();
            lines.next_line().await.unwrap()
        });
        let (link, mut inbox) = connect(&addr).await.unwrap();
        assert_eq!(
            inbox.recv().await,
            Some(ServerMessage::RoomJoined {
                room_id: "WXYZ".to_string()
            })
        );
        link.emit(ClientMessage::CreateRoom).unwrap();
        let line = server.await.unwrap().unwrap();
        assert_eq!(line, r#"{"event":"create-room"}"#);
        assert_eq!(inbox.recv().await, None);
    }
}
