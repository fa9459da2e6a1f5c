//! Which side, if any, the engine controls, and how long it "thinks".
//!
//! Options can also be set by name, the same way a UCI `setoption` line
//! reaches an engine.

use std::time::Duration;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleConfig {
    pub engine_enabled: bool,
    pub engine_side: Color,
    /// Delay the caller should wait before playing an engine ticket.
    pub engine_delay_ms: u64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            engine_enabled: true,
            engine_side: Color::Black,
            engine_delay_ms: 300,
        }
    }
}

impl BattleConfig {
    /// Two human players.
    pub fn hot_seat() -> Self {
        Self {
            engine_enabled: false,
            ..Self::default()
        }
    }

    #[inline]
    pub fn engine_delay(&self) -> Duration {
        Duration::from_millis(self.engine_delay_ms)
    }

    /// Whether `color` is moved by the engine rather than a human.
    #[inline]
    pub fn engine_controls(&self, color: Color) -> bool {
        self.engine_enabled && self.engine_side == color
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let invalid = || ChessError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        let value_lc = value.trim().to_ascii_lowercase();

        match name.trim().to_ascii_lowercase().as_str() {
            "engineenabled" => {
                self.engine_enabled = match value_lc.as_str() {
                    "true" | "on" | "1" => true,
                    "false" | "off" | "0" => false,
                    _ => return Err(invalid()),
                };
            }
            "engineside" => {
                self.engine_side = match value_lc.as_str() {
                    "white" | "w" => Color::White,
                    "black" | "b" => Color::Black,
                    _ => return Err(invalid()),
                };
            }
            "enginedelayms" => {
                self.engine_delay_ms = value_lc.parse().map_err(|_| invalid())?;
            }
            _ => return Err(ChessError::UnknownOption(name.to_owned())),
        }
        Ok(())
    }
}
