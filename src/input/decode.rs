//! Raw terminal byte decoding
//!
//! A read from the tty may carry any number of logical events back to back:
//! typed characters, CSI/SS3 key sequences, SGR mouse reports and bracketed
//! pastes. Decoding is a pure function of one read's bytes. Nothing is
//! carried over between reads, so a sequence split across two reads is
//! dropped rather than reassembled.
//!
//! The buffer is first cut into [`Token`]s (at every ESC byte, or one token
//! per character when the read holds no ESC at all), then every token is
//! matched against the [`Sequence`] grammar. Tokens that match nothing are
//! discarded; malformed input never produces an error.

use std::path::PathBuf;

use super::event::{InputEvent, Key, MouseAction, MouseKind};

/// Bytes requested per read. Comfortably larger than any single escape
/// sequence a terminal emits.
pub const READ_BUFFER_SIZE: usize = 2048;

const ESC: u8 = 0x1b;
const NUL: u8 = 0x00;

const PASTE_START: &str = "[200~";
const PASTE_END: &str = "[201~";

/// SGR mouse button codes we act on
const MOUSE_LEFT: u16 = 0;
const MOUSE_WHEEL_UP: u16 = 64;
const MOUSE_WHEEL_DOWN: u16 = 65;

/// Candidate token cut from a read
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// One character of an escape-free read
    Char(char),
    /// Text in front of the first ESC of a read
    Run(String),
    /// A segment that started with ESC, ESC and NUL bytes removed
    Escaped(String),
}

/// What a token turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
enum Sequence {
    Key(Key),
    Mouse(MouseAction),
    Drop(PathBuf),
    /// Printable run (may still hold control bytes, split later)
    Run(String),
    /// Recognised shape, unsupported content (mouse release, unknown CSI)
    Unknown,
}

/// Decode one read into an ordered sequence of input events.
pub fn decode(buf: &[u8]) -> impl Iterator<Item = InputEvent> {
    tokenize(buf).into_iter().flat_map(classify)
}

fn tokenize(buf: &[u8]) -> Vec<Token> {
    if !buf.contains(&ESC) {
        return String::from_utf8_lossy(buf)
            .chars()
            .filter(|c| *c != '\0')
            .map(Token::Char)
            .collect();
    }

    split_at_escape(buf)
        .into_iter()
        .map(|segment| {
            let escaped = segment.first() == Some(&ESC);
            let cleaned: Vec<u8> = segment
                .iter()
                .copied()
                .filter(|b| *b != ESC && *b != NUL)
                .collect();
            let text = String::from_utf8_lossy(&cleaned).into_owned();
            if escaped {
                Token::Escaped(text)
            } else {
                Token::Run(text)
            }
        })
        .collect()
}

/// Split so that every segment except possibly the first starts with ESC.
fn split_at_escape(buf: &[u8]) -> Vec<&[u8]> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (i, &byte) in buf.iter().enumerate() {
        if byte == ESC && i > start {
            segments.push(&buf[start..i]);
            start = i;
        }
    }
    if start < buf.len() {
        segments.push(&buf[start..]);
    }
    segments
}

fn classify(token: Token) -> Vec<InputEvent> {
    let mut events = Vec::new();
    match token {
        Token::Char(c) => push_plain(&c.to_string(), &mut events),
        Token::Run(text) => push_sequence(&text, false, &mut events),
        // A lone ESC byte is the Escape key itself
        Token::Escaped(text) if text.is_empty() => events.push(InputEvent::Key(Key::Escape)),
        Token::Escaped(text) => {
            if let Some(content) = text.strip_prefix(PASTE_START) {
                push_paste(content, &mut events);
            } else if let Some(rest) = text.strip_prefix(PASTE_END) {
                push_plain(rest, &mut events);
            } else {
                push_sequence(&text, true, &mut events);
            }
        }
    }
    events
}

fn push_sequence(text: &str, escaped: bool, out: &mut Vec<InputEvent>) {
    let (sequence, rest) = Sequence::parse(text, escaped);
    match sequence {
        Sequence::Key(key) => out.push(InputEvent::Key(key)),
        Sequence::Mouse(mouse) => out.push(InputEvent::Mouse(mouse)),
        Sequence::Drop(path) => out.push(InputEvent::PathDrop(path)),
        Sequence::Run(run) => push_run(&run, out),
        Sequence::Unknown => tracing::trace!(token = %text.escape_debug(), "discarding token"),
    }
    push_plain(rest, out);
}

/// A printable run stays one event unless it carries control bytes.
fn push_run(run: &str, out: &mut Vec<InputEvent>) {
    if run.chars().count() <= 1 || run.chars().any(char::is_control) {
        push_plain(run, out);
    } else {
        out.push(InputEvent::Text(run.to_string()));
    }
}

/// One event per character.
fn push_plain(text: &str, out: &mut Vec<InputEvent>) {
    for c in text.chars() {
        if let Some(key) = control_key(c) {
            out.push(InputEvent::Key(key));
        } else if !c.is_control() {
            out.push(InputEvent::Text(c.to_string()));
        }
    }
}

fn push_paste(content: &str, out: &mut Vec<InputEvent>) {
    // The closing marker sits in the next ESC segment
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return;
    }
    if is_quoted(trimmed, '\'') || is_quoted(trimmed, '"') || trimmed.starts_with("file://") {
        if let Some(path) = normalize_dropped_path(trimmed) {
            out.push(InputEvent::PathDrop(path));
            return;
        }
    }
    let text: String = content.chars().filter(|c| !c.is_control()).collect();
    if !text.is_empty() {
        out.push(InputEvent::Text(text));
    }
}

impl Sequence {
    /// Match the front of a token, returning the unconsumed tail.
    fn parse(text: &str, escaped: bool) -> (Sequence, &str) {
        if is_quoted(text, '\'') {
            return match normalize_dropped_path(text) {
                Some(path) => (Sequence::Drop(path), ""),
                None => (Sequence::Unknown, ""),
            };
        }
        if escaped {
            if let Some(body) = text.strip_prefix("[<") {
                return parse_mouse(body);
            }
            if let Some(body) = text.strip_prefix('[') {
                if !body.is_empty() {
                    return parse_csi(body);
                }
            }
            if let Some(body) = text.strip_prefix('O') {
                if let Some(key) = body.chars().next().and_then(ss3_key) {
                    return (Sequence::Key(key), &body[1..]);
                }
            }
        }

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => match control_key(c) {
                Some(key) => (Sequence::Key(key), ""),
                None if c.is_control() => (Sequence::Unknown, ""),
                None => (Sequence::Run(text.to_string()), ""),
            },
            _ => (Sequence::Run(text.to_string()), ""),
        }
    }
}

/// `action;column;row` followed by `M` (press) or `m` (release)
fn parse_mouse(body: &str) -> (Sequence, &str) {
    let Some(end) = body.find(['M', 'm']) else {
        // Truncated report
        return (Sequence::Unknown, "");
    };
    let terminator = &body[end..end + 1];
    let rest = &body[end + 1..];

    let mut fields = body[..end].split(';').map(|f| f.parse::<u16>().ok());
    let (Some(Some(code)), Some(Some(column)), Some(Some(row)), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return (Sequence::Unknown, rest);
    };

    if terminator != "M" {
        return (Sequence::Unknown, rest);
    }
    let kind = match code {
        MOUSE_LEFT => MouseKind::Click,
        MOUSE_WHEEL_UP => MouseKind::ScrollUp,
        MOUSE_WHEEL_DOWN => MouseKind::ScrollDown,
        _ => return (Sequence::Unknown, rest),
    };
    (Sequence::Mouse(MouseAction { kind, column, row }), rest)
}

/// CSI body after `[`: parameter bytes then one final byte in `@`..=`~`
fn parse_csi(body: &str) -> (Sequence, &str) {
    for (i, c) in body.char_indices() {
        match c {
            '@'..='~' => {
                let rest = &body[i + 1..];
                return match csi_key(&body[..i], c) {
                    Some(key) => (Sequence::Key(key), rest),
                    None => (Sequence::Unknown, rest),
                };
            }
            ' '..='?' => continue,
            _ => return (Sequence::Unknown, &body[i..]),
        }
    }
    (Sequence::Unknown, "")
}

fn csi_key(params: &str, final_char: char) -> Option<Key> {
    match final_char {
        'A' => Some(Key::Up),
        'B' => Some(Key::Down),
        'C' => Some(Key::Right),
        'D' => Some(Key::Left),
        'H' => Some(Key::Home),
        'F' => Some(Key::End),
        '~' => {
            let n: u8 = params.split(';').next()?.parse().ok()?;
            match n {
                1 | 7 => Some(Key::Home),
                2 => Some(Key::Insert),
                3 => Some(Key::Delete),
                4 | 8 => Some(Key::End),
                5 => Some(Key::PageUp),
                6 => Some(Key::PageDown),
                11..=15 => Some(Key::F(n - 10)),
                17..=21 => Some(Key::F(n - 11)),
                23 | 24 => Some(Key::F(n - 12)),
                _ => None,
            }
        }
        _ => None,
    }
}

fn ss3_key(c: char) -> Option<Key> {
    match c {
        'A' => Some(Key::Up),
        'B' => Some(Key::Down),
        'C' => Some(Key::Right),
        'D' => Some(Key::Left),
        'H' => Some(Key::Home),
        'F' => Some(Key::End),
        'P' => Some(Key::F(1)),
        'Q' => Some(Key::F(2)),
        'R' => Some(Key::F(3)),
        'S' => Some(Key::F(4)),
        _ => None,
    }
}

fn control_key(c: char) -> Option<Key> {
    match c {
        '\r' | '\n' => Some(Key::Enter),
        '\t' => Some(Key::Tab),
        '\x7f' | '\x08' => Some(Key::Backspace),
        ' ' => Some(Key::Space),
        '\x01'..='\x1a' => Some(Key::Ctrl((c as u8 + 0x60) as char)),
        _ => None,
    }
}

fn is_quoted(text: &str, quote: char) -> bool {
    text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote)
}

/// Undo the quoting terminals apply to dropped paths
fn normalize_dropped_path(input: &str) -> Option<PathBuf> {
    let s = input.trim();
    let s = match (s.chars().next(), s.chars().last()) {
        (Some(q @ ('"' | '\'')), Some(end)) if q == end && s.len() > 1 => &s[1..s.len() - 1],
        _ => s,
    };

    let mut unescaped = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if " '\"\\()[]&;!$`".contains(next) {
                    unescaped.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        unescaped.push(c);
    }

    let path = unescaped
        .strip_prefix("file://")
        .unwrap_or(&unescaped)
        .replace("%20", " ")
        .replace("%23", "#")
        .replace("%5B", "[")
        .replace("%5D", "]")
        .replace("%25", "%");

    (!path.is_empty()).then(|| PathBuf::from(path))
}
