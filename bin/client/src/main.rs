//! Terminal Client Binary
//!
//! Connects to a Thousanaire server over TCP and plays one seat from the
//! command line. Reads commands from stdin, server events from the socket,
//! and wakes for idle dice and delayed reveals.
mod args;
mod command;
mod screen;

use args::Args;
use clap::Parser;
use command::Command;
use thou_channel::Channel;
use thou_channel::Link;
use thou_table::*;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tokio::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    thou_core::log();
    let args = Args::parse();
    let start = Instant::now();
    let mut session = Session::new(args.settings(), start.elapsed());
    let (link, mut inbox) = thou_channel::connect(&args.addr).await?;
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    screen::draw(&session.view(start.elapsed()));
    screen::prompt();
    'repl: loop {
        let wake = session.deadline().map(|d| start + d);
        let effects = tokio::select! {
            msg = inbox.recv() => match msg {
                Some(msg) => session.receive(msg, start.elapsed()),
                None => {
                    screen::alert("Server closed the connection.");
                    break 'repl;
                }
            },
            line = stdin.next_line() => match line? {
                Some(line) if line.trim().is_empty() => vec![Effect::Redraw],
                Some(line) => match Command::parse_line(&line) {
                    Ok(Command::Quit) => break 'repl,
                    Ok(cmd) => match cmd.intent().map(|i| session.dispatch(i, start.elapsed())) {
                        Some(Ok(effects)) => effects,
                        Some(Err(e)) => {
                            screen::alert(&e.to_string());
                            vec![]
                        }
                        None => vec![],
                    },
                    Err(e) => {
                        eprintln!("{}", e);
                        vec![]
                    }
                },
                None => break 'repl,
            },
            _ = async {
                match wake {
                    Some(at) => tokio::time::sleep_until(at).await,
                    None => std::future::pending::<()>().await,
                }
            } => quiet(session.tick(start.elapsed()), &session),
        };
        if perform(effects, &link, &session)? {
            screen::draw(&session.view(start.elapsed()));
            screen::prompt();
        }
    }
    log::info!("leaving table");
    Ok(())
}

/// Idle dice frames are not drawn in the terminal.
fn quiet(effects: Vec<Effect>, session: &Session) -> Vec<Effect> {
    let idle = effects
        .iter()
        .all(|e| matches!(e, Effect::Dice(_) | Effect::Redraw));
    match idle && session.idle().animating() {
        true => vec![],
        false => effects,
    }
}

/// Carries out effects in order. Returns whether the view needs drawing.
fn perform(effects: Vec<Effect>, link: &Link, session: &Session) -> anyhow::Result<bool> {
    let mut redraw = false;
    for effect in effects {
        match effect {
            Effect::Emit(msg) => link.emit(msg)?,
            Effect::Cue(cue) => screen::cue(cue),
            Effect::Alert(text) => screen::alert(&text),
            Effect::Dice(faces) if !session.idle().animating() => screen::dice(&faces),
            Effect::Dice(_) => {}
            Effect::Flight { from, to } => screen::flight(from, to),
            Effect::Redraw => redraw = true,
        }
    }
    Ok(redraw)
}
