use super::*;
use thou_dto::ClientMessage;
use thou_dto::ServerMessage;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Outbound half of a game channel.
pub trait Channel {
    fn emit(&self, msg: ClientMessage) -> Result<(), ChannelError>;
}

/// Sending end handed to the shell. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Link {
    tx: UnboundedSender<ClientMessage>,
}

/// Both ends of an in-memory channel.
pub struct Endpoints {
    /// Client sends through this.
    pub link: Link,
    /// Client reads server events from this.
    pub inbox: UnboundedReceiver<ServerMessage>,
    /// Server pushes events through this.
    pub server: UnboundedSender<ServerMessage>,
    /// Server reads client intents from this.
    pub outbox: UnboundedReceiver<ClientMessage>,
}

impl Link {
    pub fn new(tx: UnboundedSender<ClientMessage>) -> Self {
        Self { tx }
    }
    /// Creates paired channels: the client side (link, inbox) and the
    /// server side (server, outbox).
    pub fn pair() -> Endpoints {
        let (tx_outgoing, rx_outgoing) = unbounded_channel::<ClientMessage>();
        let (tx_incoming, rx_incoming) = unbounded_channel::<ServerMessage>();
        Endpoints {
            link: Link::new(tx_outgoing),
            inbox: rx_incoming,
            server: tx_incoming,
            outbox: rx_outgoing,
        }
    }
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl Channel for Link {
    fn emit(&self, msg: ClientMessage) -> Result<(), ChannelError> {
        log::debug!("[link] -> {}", msg);
        self.tx.send(msg).map_err(|_| ChannelError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[tokio::test]
    async fn pair_carries_both_directions() {
        let mut ends = Link::pair();
        ends.link.emit(ClientMessage::CreateRoom).unwrap();
        assert_eq!(ends.outbox.recv().await, Some(ClientMessage::CreateRoom));
        ends.server
            .send(ServerMessage::RoomCreated {
                room_id: "ABCD".to_string(),
            })
            .unwrap();
        assert_eq!(
            ends.inbox.recv().await,
            Some(ServerMessage::RoomCreated {
                room_id: "ABCD".to_string()
            })
        );
    }
    #[tokio::test]
    async fn emit_fails_once_server_drops() {
        let ends = Link::pair();
        drop(ends.outbox);
        assert!(ends.link.is_closed());
        assert_eq!(
            ends.link.emit(ClientMessage::CreateRoom),
            Err(ChannelError::Closed)
        );
    }
}
