use colored::ColoredString;
use colored::Colorize;
use std::io::Write;
use thou_table::*;

/// Paints text in a `#rgb` or `#rrggbb` color; other values leave it plain.
pub fn paint(text: &str, hex: &str) -> ColoredString {
    match rgb(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

fn rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    let digit = |i: usize, w: usize| u8::from_str_radix(hex.get(i..i + w)?, 16).ok();
    match hex.len() {
        3 => Some((digit(0, 1)? * 17, digit(1, 1)? * 17, digit(2, 1)? * 17)),
        6 => Some((digit(0, 2)?, digit(2, 2)?, digit(4, 2)?)),
        _ => None,
    }
}

pub fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

pub fn alert(text: &str) {
    println!("{}", text.bold().yellow());
}

pub fn cue(cue: Cue) {
    match cue {
        Cue::Nope | Cue::Win => print!("\x07"),
        _ => {}
    }
    log::debug!("[screen] cue {:?}", cue);
}

pub fn flight(from: usize, to: Landing) {
    let to = match to {
        Landing::Slot(slot) => format!("slot {}", slot),
        Landing::Pot => "hub pot".to_string(),
    };
    println!("{}", format!("  chip: slot {} -> {}", from, to).dimmed());
}

pub fn dice(faces: &[String]) {
    println!("  {}", format!("[ {} ]", faces.join(" | ")).bold());
}

/// Full redraw of the session view.
pub fn draw(view: &View) {
    println!();
    match view.screen {
        Screen::Intro => println!("{}", "create | join <code>".dimmed()),
        Screen::Lobby => {
            println!("Room {}", view.room.as_deref().unwrap_or("?").bold());
            println!("{}  {}", view.lobby, "sit <name> [--avatar a] [--color #hex]".dimmed());
        }
        Screen::Table => table(view),
    }
}

fn table(view: &View) {
    println!(
        "{} {}   {}   {}",
        "Room".dimmed(),
        view.room.as_deref().unwrap_or("?").bold(),
        view.table.turn,
        view.table.pot.yellow()
    );
    for seat in view.table.seats.iter() {
        let marker = if seat.active { ">" } else { " " };
        let name = match seat.border.as_deref() {
            Some(color) => paint(&seat.name, color),
            None => seat.name.normal(),
        };
        let chips = match seat.status {
            Status::Eliminated => seat.chips.red().bold(),
            Status::Danger => seat.chips.yellow(),
            Status::Normal | Status::Empty => seat.chips.normal(),
        };
        let you = if view.seat == Some(seat.seat) { " (you)" } else { "" };
        match seat.status {
            Status::Empty => println!(" {} P{} {}", marker, seat.seat + 1, "empty".dimmed()),
            _ => println!(" {} P{} {:<12} {}{}", marker, seat.seat + 1, name, chips, you),
        }
    }
    if !view.dice.is_empty() {
        println!("  dice: {}", view.dice.join(" "));
    }
    if let Some((text, tone)) = &view.results {
        let text = match tone {
            Tone::Plain => text.normal(),
            Tone::Warning => text.truecolor(0xff, 0x98, 0x00).bold(),
            Tone::Danger => text.truecolor(0xf4, 0x43, 0x36).bold(),
        };
        println!("  {}", text);
    }
    if let Some(panel) = &view.panel {
        println!("  {}", panel.title.bold().magenta());
        println!("  {}", panel.prompt);
        for (i, option) in panel.options.iter().enumerate() {
            match option.locked {
                true => println!("    [{}] {}", i, option.label.green()),
                false => println!("    [{}] {}", i, option.label),
            }
        }
    }
    for entry in view.history.iter().take(3) {
        match entry.mine {
            true => println!("  {}", entry.text.bold()),
            false => println!("  {}", entry.text.dimmed()),
        }
    }
    let skip = view.chat.len().saturating_sub(5);
    for line in view.chat.iter().skip(skip) {
        println!("  {}: {}", paint(&line.name, line.color), line.text);
    }
    if let Some(banner) = &view.overlay {
        println!("{}", banner.title.bold().yellow());
        println!("{}", banner.text.bold());
        println!("{}", "again | quit".dimmed());
    }
    if view.table.roll {
        println!("{}", "your turn: roll".green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn parses_hex_colors() {
        assert_eq!(rgb("#ff4081"), Some((0xff, 0x40, 0x81)));
        assert_eq!(rgb("#666"), Some((0x66, 0x66, 0x66)));
        assert_eq!(rgb("transparent"), None);
        assert_eq!(rgb("#12345"), None);
    }
}
