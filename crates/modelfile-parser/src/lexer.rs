//! Modelfile lexer — a single-pass state machine over a character stream.
//!
//! One character is read, classified, and dispatched at a time; there is
//! no look-ahead and no backtracking.  Instructions surface lazily through
//! the [`Lexer`] iterator, so a consumer that stops pulling also stops the
//! underlying reads.

use std::io::{self, BufReader, Read};

use tracing::{debug, trace};

use crate::types::{Command, ModelfileError, Result};

//  Character classes

fn alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn space(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn newline(c: char) -> bool {
    c == '\r' || c == '\n'
}

fn valid_role(role: &str) -> bool {
    role == "system" || role == "user" || role == "assistant"
}

//  Lexer

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Reading an instruction keyword.
    Name,
    /// Reading a bare argument up to end of line.
    Args,
    /// Inside a quote-delimited block.
    Multiline,
    /// Reading a parameter's own keyword (same logic as `Name`; the
    /// sub-keyword becomes the emitted command name).
    Parameter,
    /// Reading a message role token.
    Message,
}

/// Lazy lexer over a Modelfile byte stream.
///
/// Yields one `Result<Command>` per instruction, in source order.  The
/// first error is terminal: it is yielded once and the iterator then
/// fuses to `None`.  Dropping the iterator cancels the scan; no further
/// bytes are read.
pub struct Lexer<R: Read> {
    reader: BufReader<R>,
    state: State,
    /// Keyword finalized for the instruction currently being read.
    name: String,
    /// Working buffer: keyword, role token, or argument content.
    buf: String,
    /// `"<role>: "` prefix for message instructions, glued on at emission.
    prefix: String,
    /// Everything consumed for the current instruction, for diagnostics.
    raw: String,
    /// Delimiter width while opening, closing countdown afterwards.
    quotes: usize,
    /// Still widening the opening delimiter (no block content yet).
    opening: bool,
    done: bool,
}

impl<R: Read> Lexer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            state: State::Name,
            name: String::new(),
            buf: String::new(),
            prefix: String::new(),
            raw: String::new(),
            quotes: 0,
            opening: true,
            done: false,
        }
    }

    /// Decode the next UTF-8 scalar from the stream.
    ///
    /// Returns `Ok(None)` at end of input.  Invalid sequences decode to
    /// U+FFFD instead of aborting the scan.
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let mut bytes = [0u8; 4];
        if let Err(e) = self.reader.read_exact(&mut bytes[..1]) {
            return if e.kind() == io::ErrorKind::UnexpectedEof {
                Ok(None)
            } else {
                Err(e)
            };
        }

        let len = match bytes[0] {
            0x00..=0x7f => return Ok(Some(bytes[0] as char)),
            0xc0..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf7 => 4,
            _ => return Ok(Some('\u{fffd}')),
        };

        if let Err(e) = self.reader.read_exact(&mut bytes[1..len]) {
            return if e.kind() == io::ErrorKind::UnexpectedEof {
                Ok(Some('\u{fffd}'))
            } else {
                Err(e)
            };
        }

        Ok(Some(
            std::str::from_utf8(&bytes[..len])
                .ok()
                .and_then(|s| s.chars().next())
                .unwrap_or('\u{fffd}'),
        ))
    }

    /// Finalize the current instruction and reset for the next one.
    fn emit(&mut self) -> Command {
        let mut args = std::mem::take(&mut self.prefix);
        args.push_str(&self.buf);
        self.buf.clear();

        let cmd = Command {
            name: std::mem::take(&mut self.name),
            args,
        };
        trace!(name = %cmd.name, raw = %self.raw, "instruction emitted");

        self.raw.clear();
        self.quotes = 0;
        self.opening = true;
        self.state = State::Name;
        cmd
    }

    /// Lower-case and alias the keyword in `buf`, then pick the state
    /// that reads its argument.
    fn finish_keyword(&mut self) {
        let mut name = std::mem::take(&mut self.buf).to_ascii_lowercase();
        if name == "from" {
            name = "model".to_string();
        }
        self.state = match name.as_str() {
            "parameter" => State::Parameter,
            "message" => State::Message,
            _ => State::Args,
        };
        self.name = name;
    }

    /// Settle whatever instruction is in flight at end of input.
    fn finish(&mut self) -> Option<Result<Command>> {
        match self.state {
            // End of input terminates a pending bare argument like a newline.
            State::Args if !self.buf.is_empty() => Some(Ok(self.emit())),
            // The closing delimiter never arrived.
            State::Multiline => Some(Err(ModelfileError::UnterminatedBlock)),
            // Partial keyword or role tokens are dropped.
            _ => None,
        }
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = Result<Command>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let c = match self.read_char() {
                Ok(Some(c)) => c,
                Ok(None) => {
                    self.done = true;
                    return self.finish();
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            };

            self.raw.push(c);

            // Leading-whitespace trim: applies at the start of every
            // instruction and of every argument region.
            if (space(c) || newline(c)) && self.buf.is_empty() {
                continue;
            }

            match self.state {
                State::Name | State::Parameter => {
                    if alpha(c) || digit(c) {
                        self.buf.push(c);
                    } else if space(c) {
                        self.finish_keyword();
                    } else if newline(c) {
                        self.done = true;
                        let keyword = std::mem::take(&mut self.buf).to_ascii_lowercase();
                        return Some(Err(ModelfileError::MissingValue(keyword)));
                    }
                }
                State::Args => {
                    if c == '"' && self.buf.is_empty() {
                        // Argument region opens with a quote: delimited block.
                        self.quotes = 1;
                        self.opening = true;
                        self.state = State::Multiline;
                    } else if newline(c) {
                        return Some(Ok(self.emit()));
                    } else {
                        self.buf.push(c);
                    }
                }
                State::Multiline => {
                    if c == '"' {
                        if self.opening {
                            self.quotes += 1;
                        } else {
                            self.quotes -= 1;
                            if self.quotes == 0 {
                                return Some(Ok(self.emit()));
                            }
                        }
                    } else {
                        self.buf.push(c);
                        self.opening = false;
                    }
                }
                State::Message => {
                    if space(c) {
                        if !valid_role(&self.buf) {
                            self.done = true;
                            let role = std::mem::take(&mut self.buf);
                            return Some(Err(ModelfileError::InvalidRole(role)));
                        }
                        self.prefix = format!("{}: ", self.buf);
                        self.buf.clear();
                        self.state = State::Args;
                    } else {
                        self.buf.push(c);
                    }
                }
            }
        }
    }
}

//  Top-level parse

/// Parse a complete Modelfile document.
///
/// Drives the lexer to completion; the first lexing error aborts the
/// parse and is returned as the sole outcome.  A document that scans
/// cleanly but contains no `model` (`FROM`) instruction is rejected.
pub fn parse<R: Read>(reader: R) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for item in Lexer::new(reader) {
        commands.push(item?);
    }

    if !commands.iter().any(|c| c.name == "model") {
        return Err(ModelfileError::MissingFrom);
    }

    debug!(commands = commands.len(), "modelfile parsed");
    Ok(commands)
}

/// Parse a document held in memory.
pub fn parse_str(input: &str) -> Result<Vec<Command>> {
    parse(input.as_bytes())
}
