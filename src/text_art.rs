//! Text-art rendering used by the decorated greeting.
//!
//! The greeting only depends on the [`TextArt`] trait; [`Cowsay`] is the
//! renderer wired in by default.

use unicode_width::UnicodeWidthStr;

/// Failure reported by a [`TextArt`] formatter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("balloon width must be greater than zero")]
    ZeroWidth,
    #[error("cow eyes must be exactly two characters, got {0:?}")]
    InvalidEyes(String),
    #[error("nothing to say")]
    EmptyMessage,
}

/// Turns plain text into decorated text
pub trait TextArt: Send + Sync {
    fn format(&self, text: &str) -> Result<String, FormatError>;
}

const DEFAULT_BALLOON_WIDTH: usize = 40;
const DEFAULT_EYES: &str = "oo";

/// A cow saying the text from inside a speech balloon
#[derive(Debug, Clone)]
pub struct Cowsay {
    pub balloon_width: usize,
    pub eyes: String,
}

impl Default for Cowsay {
    fn default() -> Self {
        Self {
            balloon_width: DEFAULT_BALLOON_WIDTH,
            eyes: DEFAULT_EYES.to_string(),
        }
    }
}

impl Cowsay {
    fn cow(&self) -> String {
        format!(
            concat!(
                "        \\   ^__^\n",
                "         \\  ({})\\_______\n",
                "            (__)\\       )\\/\\\n",
                "                ||----w |\n",
                "                ||     ||\n",
            ),
            self.eyes
        )
    }
}

impl TextArt for Cowsay {
    fn format(&self, text: &str) -> Result<String, FormatError> {
        if self.balloon_width == 0 {
            return Err(FormatError::ZeroWidth);
        }
        if self.eyes.chars().count() != 2 {
            return Err(FormatError::InvalidEyes(self.eyes.clone()));
        }

        let lines = wrap(text, self.balloon_width);
        if lines.is_empty() {
            return Err(FormatError::EmptyMessage);
        }

        let mut out = balloon(&lines);
        out.push_str(&self.cow());
        Ok(out)
    }
}

/// Wrap to `width` display columns, splitting words that don't fit on a line of their own
fn wrap(text: &str, width: usize) -> Vec<String> {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return Vec::new();
    }

    textwrap::wrap(&text, textwrap::Options::new(width).break_words(true))
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

fn balloon(lines: &[String]) -> String {
    let width = lines
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = format!(" {}\n", "_".repeat(width + 2));
    let last = lines.len() - 1;
    for (i, line) in lines.iter().enumerate() {
        let (open, close) = match (i, lines.len()) {
            (_, 1) => ('<', '>'),
            (0, _) => ('/', '\\'),
            (i, _) if i == last => ('\\', '/'),
            _ => ('|', '|'),
        };
        let pad = width - UnicodeWidthStr::width(line.as_str());
        out.push_str(&format!("{open} {line}{} {close}\n", " ".repeat(pad)));
    }
    out.push_str(&format!(" {}\n", "-".repeat(width + 2)));
    out
}
