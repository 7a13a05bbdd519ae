//! User-facing status lines. Each line carries the tone of the form's
//! feedback area: blue notes, green confirmations, yellow notices, red
//! errors on stderr.

use ansi_term::{Colour, Style};
use std::fmt;

#[derive(Clone, Copy)]
enum Tone {
    Note,
    Done,
    Notice,
    Failure,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Tone::Note => Colour::Blue.bold(),
            Tone::Done => Colour::Green.bold(),
            Tone::Notice => Colour::Yellow.bold(),
            Tone::Failure => Colour::Red.bold(),
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Note => "ℹ️",
            Tone::Done => "✅",
            Tone::Notice => "⚠️",
            Tone::Failure => "❌",
        }
    }
}

fn line(tone: Tone, msg: impl fmt::Display) {
    let icon = tone.style().paint(tone.icon());
    match tone {
        Tone::Failure => eprintln!("{icon} {msg}"),
        _ => println!("{icon} {msg}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    line(Tone::Note, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    line(Tone::Done, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    line(Tone::Notice, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    line(Tone::Failure, msg);
}

/// Section title of a form card or report tab, underlined to its width.
pub fn header<T: fmt::Display>(title: T) {
    let title = title.to_string();
    let rule = "─".repeat(crate::utils::table::visible_width(&title).max(4));
    let style = Tone::Note.style();
    println!("{}", style.paint(title));
    println!("{}", style.paint(rule));
}

/// Shown above every view while no backend is configured.
pub fn demo_banner() {
    warning("Demo Mode: backend not configured. Data will be saved locally only.");
}
