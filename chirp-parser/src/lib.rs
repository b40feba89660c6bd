use std::fmt;

use smallvec::SmallVec;

mod parser;

pub use crate::parser::parse;

/// Middle parameters of a message. Most messages carry only a few, so they
/// stay inline.
pub type Parameters = SmallVec<[String; 4]>;

///
/// A parsed IRC message:
///   [":" prefix " "] command [" " params] [" :" text] crlf
///
/// See: https://modern.ircdocs.horse/#client-to-server-protocol-structure
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Command token or three-digit numeric reply code. Empty if the line
    /// was empty.
    pub command: String,
    /// Space-delimited middle parameters, without the trailing part.
    pub params: Parameters,
    /// Origin of the message, present only if the line began with `:`.
    pub prefix: Option<Prefix>,
    /// Trailing free-form payload. Empty string when absent.
    pub text: String,
    /// The original line, unmodified.
    pub raw: String,
}

/// Origin of a message: a server name, or a nickname with optional user and
/// host parts. `user` and `host` are empty when the corresponding separator
/// did not occur in the prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefix {
    pub name: String,
    pub user: String,
    pub host: String,
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.user.is_empty() {
            write!(f, "!{}", self.user)?;
        }
        if !self.host.is_empty() {
            write!(f, "@{}", self.host)?;
        }
        Ok(())
    }
}

impl fmt::Display for Message {
    /// Canonical re-serialization: one separating space per boundary. Not
    /// guaranteed to be byte-identical to `raw`, but re-parsing yields the
    /// same fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, ":{prefix} ")?;
        }
        f.write_str(&self.command)?;
        for param in &self.params {
            write!(f, " {param}")?;
        }
        if !self.text.is_empty() {
            write!(f, " :{}", self.text)?;
        }
        Ok(())
    }
}
