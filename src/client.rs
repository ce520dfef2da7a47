//! Client module.
//! Visitor profiles loaded from the sheet, plus the three boutiques they can be drawn into.

use std::fmt;
use std::str::FromStr;

/// Motif shown when a client has no emoji of its own.
pub const DEFAULT_EMOJI: &str = "🌸";

/// A visitor profile, one row of the sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub emoji: Option<String>,
    /// Owner of the boutique this client must be drawn into, if any.
    pub forced: Option<String>,
}

impl Client {
    pub fn new(id: &str, name: &str, image_url: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            image_url: image_url.to_string(),
            description: description.to_string(),
            emoji: None,
            forced: None,
        }
    }

    #[cfg(test)]
    pub fn with_forced(mut self, owner: &str) -> Self {
        self.forced = Some(owner.to_string());
        self
    }

    pub fn emoji_or_default(&self) -> &str {
        self.emoji
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_EMOJI)
    }

    /// Forced affinity, treating blank cells as unconstrained.
    pub fn forced_boutique(&self) -> Option<&str> {
        self.forced.as_deref().map(str::trim).filter(|f| !f.is_empty())
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let emoji = self.emoji_or_default();
        writeln!(f, "{} {} {}", emoji, self.name, emoji)?;
        if !self.image_url.is_empty() {
            writeln!(f, "   {}", self.image_url)?;
        }
        write!(f, "   {}", self.description)
    }
}

// *************** Boutiques ***************

/// The three shop identities a client can visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Boutique {
    Lisa,
    Morgane,
    Mildred,
}

impl Boutique {
    pub const ALL: [Boutique; 3] = [Boutique::Lisa, Boutique::Morgane, Boutique::Mildred];

    /// Owner name as it appears in the sheet's force column.
    pub fn owner(self) -> &'static str {
        match self {
            Boutique::Lisa => "Lisa",
            Boutique::Morgane => "Morgane",
            Boutique::Mildred => "Mildred",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Boutique::Lisa => 0,
            Boutique::Morgane => 1,
            Boutique::Mildred => 2,
        }
    }
}

impl fmt::Display for Boutique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.owner())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown boutique '{0}' (expected Lisa, Morgane or Mildred)")]
pub struct ParseBoutiqueError(String);

impl FromStr for Boutique {
    type Err = ParseBoutiqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Boutique::ALL
            .into_iter()
            .find(|b| b.owner().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseBoutiqueError(s.to_string()))
    }
}

/// A client as revealed to the visitor, tagged with the boutique it was drawn for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawnClient {
    pub client: Client,
    pub boutique: Option<Boutique>,
}

impl fmt::Display for DrawnClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(boutique) = self.boutique {
            writeln!(f, "[Boutique de {}]", boutique)?;
        }
        write!(f, "{}", self.client)
    }
}
