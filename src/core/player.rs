//! Player identity

use std::fmt;

/// Name used for anonymous play
pub const GUEST_NAME: &str = "guest";

/// Who is playing
///
/// A guest still has a session and a saved tier, but finished games are
/// not recorded and never set high scores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Player {
    Guest,
    Named(String),
}

impl Player {
    /// Build a player from a name, treating blank names and `guest` as anonymous
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Player;
    ///
    /// assert_eq!(Player::from_name("  "), Player::Guest);
    /// assert_eq!(Player::from_name("Guest"), Player::Guest);
    /// assert_eq!(Player::from_name("ada").key(), "ada");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case(GUEST_NAME) {
            Self::Guest
        } else {
            Self::Named(name.to_string())
        }
    }

    /// Key under which this player's records are stored
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Guest => GUEST_NAME,
            Self::Named(name) => name,
        }
    }

    #[must_use]
    pub const fn is_guest(&self) -> bool {
        matches!(self, Self::Guest)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
