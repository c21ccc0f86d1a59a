//! Console output with colored status prefixes

use std::io::{self, Write};

/// ANSI color codes
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
    pub const DIM: &str = "\x1b[2m";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

fn supports_color(stream: Stream) -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    match stream {
        Stream::Stdout => atty::is(atty::Stream::Stdout),
        Stream::Stderr => atty::is(atty::Stream::Stderr),
    }
}

fn paint(text: &str, color: &str, stream: Stream) -> String {
    if supports_color(stream) {
        format!("{}{}{}", color, text, colors::RESET)
    } else {
        text.to_string()
    }
}

pub fn info(message: &str) {
    println!("{} {}", paint("[*]", colors::CYAN, Stream::Stdout), message);
}

pub fn success(message: &str) {
    println!("{} {}", paint("[+]", colors::GREEN, Stream::Stdout), message);
}

pub fn warn(message: &str) {
    eprintln!("{} {}", paint("[!]", colors::YELLOW, Stream::Stderr), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", paint("[-]", colors::RED, Stream::Stderr), message);
}

/// Secondary detail, dimmed
pub fn dim(message: &str) {
    println!("{}", paint(message, colors::DIM, Stream::Stdout));
}

/// Print without newline and flush, for lines redrawn in place
pub fn print_inline(message: &str) {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "{}", message);
    let _ = stdout.flush();
}
