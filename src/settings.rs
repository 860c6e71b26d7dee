//! Match settings
//!
//! Chosen from the settings screen. Lives for the process only.

use serde::{Deserialize, Serialize};

/// Score a side must reach to win the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WinningScore {
    #[default]
    Five,
    Ten,
    Fifteen,
}

impl WinningScore {
    /// All selectable values, in menu order
    pub const ALL: [WinningScore; 3] = [
        WinningScore::Five,
        WinningScore::Ten,
        WinningScore::Fifteen,
    ];

    pub fn value(&self) -> u32 {
        match self {
            WinningScore::Five => 5,
            WinningScore::Ten => 10,
            WinningScore::Fifteen => 15,
        }
    }

    pub fn from_value(value: u32) -> Option<Self> {
        match value {
            5 => Some(WinningScore::Five),
            10 => Some(WinningScore::Ten),
            15 => Some(WinningScore::Fifteen),
            _ => None,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// First side to reach this score wins
    pub winning_score: WinningScore,
}

impl Settings {
    pub fn with_winning_score(winning_score: WinningScore) -> Self {
        Self { winning_score }
    }
}
