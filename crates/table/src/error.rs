/// Local precondition failures. The `Display` text is what the player sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientError {
    NoRoom,
    NotSeated,
    EmptyRoomCode,
    EmptyName,
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRoom => write!(f, "Create or join a room first."),
            Self::NotSeated => write!(f, "Join a seat first."),
            Self::EmptyRoomCode => write!(f, "Please enter a room code"),
            Self::EmptyName => write!(f, "Please enter your name"),
        }
    }
}

impl std::error::Error for ClientError {}
