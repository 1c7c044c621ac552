//! Terminal output: markdown through termimad, or plain text.

use std::io::Write;

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renders the markdown produced by the core's `Display` implementations.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Prints markdown to standard output.
    ///
    /// Header lines keep their `#` marks and are only colored, so the item
    /// IDs in `### 1001. UPS` stay visible.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        let mut stdout = std::io::stdout().lock();
        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(stdout, "\x1b[36m{line}\x1b[0m")?;
            } else if let Some(entry) = line.strip_prefix("- [") {
                // Dim the stamp of audit entries.
                match entry.split_once("] ") {
                    Some((stamp, message)) => writeln!(stdout, "- \x1b[2m[{stamp}]\x1b[0m {message}")?,
                    None => writeln!(stdout, "{}", self.skin.inline(line))?,
                }
            } else {
                writeln!(stdout, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }

    /// Prints data (exported documents, JSON) to standard output untouched.
    pub fn print_raw(&self, text: &str) {
        if text.ends_with('\n') {
            print!("{text}");
        } else {
            println!("{text}");
        }
    }

    /// Prints a status line to standard error, for commands whose standard
    /// output carries data.
    pub fn notice(&self, message: &str) {
        eprint!("{message}");
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
