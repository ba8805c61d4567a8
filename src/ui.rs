//! Terminal presentation: a top and bottom rule scaled to the terminal
//! width, the content line in cyan, and an attribution line whose color
//! depends on whether the piece is a hadith.

use std::io::{self, Write};

use crossterm::style::Stylize;
use crossterm::terminal;

use crate::models::Content;

/// Narrowest layout we will draw; anything smaller gets this.
pub const MIN_WIDTH: u16 = 40;
/// Widest layout; rules never stretch past this even on huge terminals.
pub const MAX_WIDTH: u16 = 80;

/// Query the terminal for its width, defaulting to the maximum when the
/// process has no terminal attached, then clamp into the supported range.
pub fn terminal_width() -> u16 {
    terminal::size()
        .map(|(width, _)| width)
        .unwrap_or(MAX_WIDTH)
        .clamp(MIN_WIDTH, MAX_WIDTH)
}

/// Print the content to stdout at the detected terminal width.
pub fn render(content: &Content) -> io::Result<()> {
    render_to(&mut io::stdout(), content, terminal_width())
}

/// Formatting core, split from [`render`] so tests can capture the byte
/// stream. `width` is assumed already clamped.
pub fn render_to(out: &mut impl Write, content: &Content, width: u16) -> io::Result<()> {
    let rule_len = usize::from(width.saturating_sub(8));
    let top = "▀".repeat(rule_len);
    let bottom = "▄".repeat(rule_len);

    writeln!(out)?;
    writeln!(out, "    {}", top.as_str().yellow().bold())?;
    writeln!(out, "      {}", content.text.as_str().cyan().bold())?;
    writeln!(out)?;

    let attribution = format!("{} | {}", content.author, content.sub);
    if content.is_hadith() {
        writeln!(out, "      {}", attribution.as_str().green().bold())?;
    } else {
        writeln!(out, "      {}", attribution.as_str().dark_grey())?;
    }

    writeln!(out, "    {}", bottom.as_str().yellow().bold())?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(sub: &str) -> Content {
        Content {
            text: "some wise words".to_string(),
            author: "Someone".to_string(),
            sub: sub.to_string(),
        }
    }

    fn rendered(content: &Content, width: u16) -> String {
        let mut buf = Vec::new();
        render_to(&mut buf, content, width).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn rules_scale_to_width_minus_eight() {
        let output = rendered(&sample("Wisdom"), 40);
        assert!(output.contains(&"▀".repeat(32)));
        assert!(output.contains(&"▄".repeat(32)));
        assert!(!output.contains(&"▀".repeat(33)));
    }

    #[test]
    fn attribution_joins_author_and_sub() {
        let output = rendered(&sample("Wisdom"), 60);
        assert!(output.contains("Someone | Wisdom"));
        assert!(output.contains("some wise words"));
    }

    #[test]
    fn hadith_attribution_uses_green() {
        let hadith = rendered(&sample("حديث نبوي"), 60);
        let wisdom = rendered(&sample("Wisdom"), 60);
        // Bright green vs dark grey escape sequences.
        assert!(hadith.contains("\u{1b}[38;5;10m") || hadith.contains("\u{1b}[32m"));
        assert_ne!(hadith.replace("حديث نبوي", "Wisdom"), wisdom);
    }
}
