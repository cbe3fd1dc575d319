//! The `/hello_world` greeting handler.
//!
//! Two payload strategies are available and the caller picks one:
//!
//! - [`GreetingStrategy::Static`] writes `hello world!`. If that write fails it
//!   tries `failed! :(` once and then gives up silently.
//! - [`GreetingStrategy::Decorated`] writes the text-art rendering of
//!   `Hello World`. Formatting and write failures are returned as
//!   [`GreetingError`] and nothing is retried.

use std::str::FromStr;

use crate::sink::{ResponseSink, WriteError};
use crate::text_art::{FormatError, TextArt};

pub const STATIC_GREETING: &str = "hello world!";
pub const STATIC_FALLBACK: &str = "failed! :(";
pub const DECORATED_INPUT: &str = "Hello World";

/// Unrecoverable failure of the decorated greeting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GreetingError {
    #[error("failed to format greeting: {0}")]
    Format(#[from] FormatError),
    #[error("failed to write greeting: {0}")]
    Write(#[from] WriteError),
}

/// A strategy name that is neither `static` nor `decorated`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown greeting strategy '{0}': expected 'static' or 'decorated'")]
pub struct UnknownStrategy(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GreetingStrategy {
    #[default]
    Static,
    Decorated,
}

impl GreetingStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            GreetingStrategy::Static => "static",
            GreetingStrategy::Decorated => "decorated",
        }
    }
}

impl FromStr for GreetingStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(GreetingStrategy::Static),
            "decorated" => Ok(GreetingStrategy::Decorated),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

/// Stateless greeting handler; the request is never inspected
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloWorld;

impl HelloWorld {
    pub fn serve<S: ResponseSink + ?Sized>(
        &self,
        strategy: GreetingStrategy,
        text_art: &dyn TextArt,
        sink: &mut S,
    ) -> Result<(), GreetingError> {
        match strategy {
            GreetingStrategy::Static => {
                self.serve_static(sink);
                Ok(())
            }
            GreetingStrategy::Decorated => self.serve_decorated(text_art, sink),
        }
    }

    pub fn serve_static<S: ResponseSink + ?Sized>(&self, sink: &mut S) {
        if let Err(e) = sink.write(STATIC_GREETING.as_bytes()) {
            tracing::warn!("Greeting write failed, sending fallback: {}", e);
            let _ = sink.write(STATIC_FALLBACK.as_bytes());
        }
    }

    pub fn serve_decorated<S: ResponseSink + ?Sized>(
        &self,
        text_art: &dyn TextArt,
        sink: &mut S,
    ) -> Result<(), GreetingError> {
        let message = text_art.format(DECORATED_INPUT)?;
        sink.write(message.as_bytes())?;
        Ok(())
    }
}
