//! Terminal bell as the line-clear sound.

use std::io::{self, Write};

use crate::core::AudioNotifier;

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell once per line-clearing lock.
///
/// Write failures are logged and otherwise ignored; a missing beep never
/// interrupts play.
pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
    muted: bool,
    rung: u32,
}

impl TerminalBell<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalBell<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            muted: false,
            rung: 0,
        }
    }

    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Number of times the bell actually rang.
    pub fn rung(&self) -> u32 {
        self.rung
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn ring(&mut self) -> io::Result<()> {
        self.out.write_all(BEL)?;
        self.out.flush()
    }
}

impl<W: Write> AudioNotifier for TerminalBell<W> {
    fn lines_cleared(&mut self, count: u32) {
        if self.muted {
            return;
        }
        match self.ring() {
            Ok(()) => {
                self.rung += 1;
                log::debug!("bell: {count} line(s) cleared");
            }
            Err(err) => log::warn!("bell write failed: {err}"),
        }
    }
}
