use clap::Parser;
use thou_core::*;
use thou_dto::TripleChoice;
use thou_table::Intent;

/// REPL commands typed at the prompt.
#[derive(Parser, Debug, PartialEq)]
#[command(about = "Thousanaire table commands")]
pub enum Command {
    #[command(about = "Create a room and become its host", alias = "new")]
    Create,
    #[command(about = "Enter a room by code")]
    Join {
        #[arg(required = true)]
        code: String,
    },
    #[command(about = "Take a seat in the current room")]
    Sit {
        #[arg(required = true)]
        name: String,
        #[arg(long, default_value = "")]
        avatar: String,
        #[arg(long, default_value = "")]
        color: String,
    },
    #[command(about = "Roll the dice on your turn", alias = "r")]
    Roll,
    #[command(about = "Reset the table for everyone")]
    Reset,
    #[command(about = "Close the game-over banner and reset")]
    Again,
    #[command(about = "Send a chat line")]
    Say {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },
    #[command(about = "Spend a Wild to cancel a direction")]
    Cancel {
        #[arg(value_parser = direction)]
        direction: Direction,
    },
    #[command(about = "Spend a Wild to steal from a player (1-4)")]
    Steal {
        #[arg(value_parser = player)]
        seat: Seat,
    },
    #[command(about = "Submit your Wild choices")]
    Confirm,
    #[command(about = "Triple Wilds: take the whole hub pot")]
    Pot,
    #[command(about = "Triple Wilds: steal chips from opponents")]
    Steal3,
    #[command(about = "Leave the table", alias = "exit")]
    Quit,
}

impl Command {
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(std::iter::once("> ").chain(line.split_whitespace()))
    }
    /// The gesture this command stands for. `Quit` has none.
    pub fn intent(self) -> Option<Intent> {
        match self {
            Self::Create => Some(Intent::CreateRoom),
            Self::Join { code } => Some(Intent::JoinRoom { code }),
            Self::Sit {
                name,
                avatar,
                color,
            } => Some(Intent::JoinSeat {
                name,
                avatar,
                color,
            }),
            Self::Roll => Some(Intent::Roll),
            Self::Reset => Some(Intent::Reset),
            Self::Again => Some(Intent::PlayAgain),
            Self::Say { text } => Some(Intent::Chat {
                text: text.join(" "),
            }),
            Self::Cancel { direction } => Some(Intent::Cancel { direction }),
            Self::Steal { seat } => Some(Intent::Steal { seat }),
            Self::Confirm => Some(Intent::Confirm),
            Self::Pot => Some(Intent::Triple {
                choice: TripleChoice::TakePot,
            }),
            Self::Steal3 => Some(Intent::Triple {
                choice: TripleChoice::Steal3,
            }),
            Self::Quit => None,
        }
    }
}

fn direction(s: &str) -> Result<Direction, String> {
    Direction::try_from(s)
}

/// Player numbers are one-based at the prompt.
fn player(s: &str) -> Result<Seat, String> {
    match s.parse::<usize>() {
        Ok(n) if (1..=N).contains(&n) => Ok(n - 1),
        _ => Err(format!("expected a player number from 1 to {}", N)),
    }
}
