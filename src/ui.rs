//! Score display and game-over banner
//!
//! Text is produced here; the DOM side only writes strings into elements.

use crate::sim::{GameState, Side};

/// Display language for the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Chinese,
    English,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Chinese => "zh",
            Locale::English => "en",
        }
    }

    /// Pick a locale from a BCP 47 tag such as `zh-CN` or `en`
    pub fn from_lang(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.trim().to_lowercase();
        match primary.as_str() {
            "zh" => Some(Locale::Chinese),
            "en" => Some(Locale::English),
            _ => None,
        }
    }

    /// Label in front of the human's score
    pub fn player_label(&self) -> &'static str {
        match self {
            Locale::Chinese => "玩家",
            Locale::English => "Player",
        }
    }

    pub fn win_message(&self) -> &'static str {
        match self {
            Locale::Chinese => "恭喜你获胜！",
            Locale::English => "You win!",
        }
    }

    pub fn lose_message(&self) -> &'static str {
        match self {
            Locale::Chinese => "AI 获胜，继续加油！",
            Locale::English => "AI wins, keep trying!",
        }
    }

    pub fn player_score_text(&self, score: u32) -> String {
        format!("{}: {}", self.player_label(), score)
    }

    pub fn ai_score_text(&self, score: u32) -> String {
        format!("AI: {}", score)
    }

    /// Banner text announcing `winner`
    pub fn banner_text(&self, winner: Side) -> String {
        match winner {
            Side::Player => format!("🎉 {}", self.win_message()),
            Side::Ai => format!("😵 {}", self.lose_message()),
        }
    }
}

/// Text outputs next to the field
pub trait Hud {
    fn set_player_score(&mut self, text: &str);
    fn set_ai_score(&mut self, text: &str);
    fn show_banner(&mut self, text: &str);
    fn hide_banner(&mut self);
}

/// Write scores and banner visibility for the current state
pub fn update_hud(state: &GameState, locale: Locale, hud: &mut impl Hud) {
    hud.set_player_score(&locale.player_score_text(state.scores.player));
    hud.set_ai_score(&locale.ai_score_text(state.scores.ai));
    match state.winner {
        Some(winner) => hud.show_banner(&locale.banner_text(winner)),
        None => hud.hide_banner(),
    }
}
