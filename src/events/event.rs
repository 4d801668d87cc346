//! Change notification tags.
//!
//! Every successful mutation emits one of these. Tags carry no payload:
//! subscribers re-query the game for whatever they need.

use serde::{Deserialize, Serialize};

/// The fixed notification vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    /// Game constructed.
    Init,
    /// Coins tossed.
    Roll,
    /// A piece was seeded on its start cell during construction.
    EnterInit,
    /// A new piece entered the track.
    Enter,
    /// A piece advanced along the track.
    Move,
    /// A piece finished.
    Finish,
    /// The mover paid a triangle penalty.
    Penalty,
    /// The mover earned an extra turn.
    Bonus,
    /// The turn ended.
    Turn,
    /// Turn change suppressed because the current player is out of coins.
    NoCoins,
}

impl GameEvent {
    /// Every tag, in declaration order.
    pub const ALL: [GameEvent; 10] = [
        GameEvent::Init,
        GameEvent::Roll,
        GameEvent::EnterInit,
        GameEvent::Enter,
        GameEvent::Move,
        GameEvent::Finish,
        GameEvent::Penalty,
        GameEvent::Bonus,
        GameEvent::Turn,
        GameEvent::NoCoins,
    ];

    /// Wire-style tag name.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            GameEvent::Init => "INIT",
            GameEvent::Roll => "ROLL",
            GameEvent::EnterInit => "ENTER_INIT",
            GameEvent::Enter => "ENTER",
            GameEvent::Move => "MOVE",
            GameEvent::Finish => "FINISH",
            GameEvent::Penalty => "PENALTY",
            GameEvent::Bonus => "BONUS",
            GameEvent::Turn => "TURN",
            GameEvent::NoCoins => "NO_COINS",
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_unique() {
        let mut tags: Vec<_> = GameEvent::ALL.iter().map(|e| e.tag()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), GameEvent::ALL.len());
    }

    #[test]
    fn test_serde_uses_tag_names() {
        for event in GameEvent::ALL {
            let json = serde_json::to_string(&event).unwrap();
            assert_eq!(json, format!("\"{}\"", event.tag()));
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(back, event);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", GameEvent::EnterInit), "ENTER_INIT");
        assert_eq!(format!("{}", GameEvent::NoCoins), "NO_COINS");
    }
}
