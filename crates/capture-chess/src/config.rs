use crate::error::ConfigError;

/// Move allowances for a match.
///
/// The defaults are the capture-bonus variant: one ply to open the match, one
/// ply per ordinary turn and two plies after a turn that ended on a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Allowance of the first mover in a fresh match. Default: 1.
    pub initial_moves: u32,
    /// Allowance granted when the exhausting ply was not a capture. Default: 1.
    pub standard_moves: u32,
    /// Allowance granted when the exhausting ply was a capture. Default: 2.
    pub capture_bonus_moves: u32,
}

impl MatchConfig {
    /// Validate configuration values.
    ///
    /// Every allowance must be at least 1, otherwise a side could be handed
    /// the move with nothing to play.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_moves == 0 {
            return Err(ConfigError::Invalid {
                reason: "initial_moves must be >= 1".to_string(),
            });
        }
        if self.standard_moves == 0 {
            return Err(ConfigError::Invalid {
                reason: "standard_moves must be >= 1".to_string(),
            });
        }
        if self.capture_bonus_moves == 0 {
            return Err(ConfigError::Invalid {
                reason: "capture_bonus_moves must be >= 1".to_string(),
            });
        }
        Ok(())
    }

    /// Allowance for the next mover, given whether the exhausting ply captured.
    #[must_use]
    pub const fn rearm(&self, was_capture: bool) -> u32 {
        if was_capture {
            self.capture_bonus_moves
        } else {
            self.standard_moves
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            initial_moves: 1,
            standard_moves: 1,
            capture_bonus_moves: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = MatchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_moves, 1);
        assert_eq!(config.rearm(false), 1);
        assert_eq!(config.rearm(true), 2);
    }

    #[test]
    fn rejects_zero_allowances() {
        let cases = [
            MatchConfig {
                initial_moves: 0,
                ..MatchConfig::default()
            },
            MatchConfig {
                standard_moves: 0,
                ..MatchConfig::default()
            },
            MatchConfig {
                capture_bonus_moves: 0,
                ..MatchConfig::default()
            },
        ];
        for config in cases {
            let err = config.validate().unwrap_err();
            assert!(err.to_string().starts_with("invalid configuration:"));
        }
    }
}
