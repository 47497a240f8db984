//! Standard Connect-N legality rules.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::BoardOracle;
use crate::SettingsError;

/// Bounds a Connect-N board must respect.
///
/// Width and height must each fall in their inclusive range, and `n` must be
/// at least `min_n` and strictly smaller than the larger dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
#[serde(default)]
pub struct ConnectNRules {
    /// Smallest allowed width.
    min_width: i32,
    /// Largest allowed width.
    max_width: i32,
    /// Smallest allowed height.
    min_height: i32,
    /// Largest allowed height.
    max_height: i32,
    /// Smallest allowed run length.
    min_n: i32,
}

impl Default for ConnectNRules {
    fn default() -> Self {
        Self {
            min_width: 6,
            max_width: 16,
            min_height: 6,
            max_height: 16,
            min_n: 4,
        }
    }
}

impl ConnectNRules {
    /// Checks that these bounds admit at least one board.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if a minimum is non-positive, a range is
    /// inverted, or `min_n` cannot fit on the largest board.
    #[instrument]
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.min_width < 1 || self.min_height < 1 {
            return Err(SettingsError::new(
                "rules.min_width and rules.min_height must be >= 1",
            ));
        }
        if self.min_width > self.max_width {
            return Err(SettingsError::new(
                "rules.min_width must be <= rules.max_width",
            ));
        }
        if self.min_height > self.max_height {
            return Err(SettingsError::new(
                "rules.min_height must be <= rules.max_height",
            ));
        }
        if self.min_n < 1 {
            return Err(SettingsError::new("rules.min_n must be >= 1"));
        }
        if self.min_n > self.max_width.max(self.max_height) - 1 {
            return Err(SettingsError::new(
                "rules.min_n must be smaller than the largest allowed dimension",
            ));
        }
        Ok(())
    }

    /// One-line summary of the bounds, for help text.
    pub fn describe(&self) -> String {
        format!(
            "Width {}-{}, height {}-{}, N at least {} and below the larger dimension",
            self.min_width, self.max_width, self.min_height, self.max_height, self.min_n
        )
    }
}

impl BoardOracle for ConnectNRules {
    #[instrument]
    fn accepts(&self, width: i32, height: i32, n: i32) -> bool {
        if width < 1 || height < 1 || n < 1 {
            debug!("Non-positive board parameter");
            return false;
        }
        if !(self.min_width..=self.max_width).contains(&width) {
            debug!("Width out of range");
            return false;
        }
        if !(self.min_height..=self.max_height).contains(&height) {
            debug!("Height out of range");
            return false;
        }
        if n < self.min_n || n > width.max(height) - 1 {
            debug!("Run length out of range");
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_accept_classic_board() {
        let rules = ConnectNRules::default();
        assert!(rules.accepts(7, 6, 4));
        assert!(rules.accepts(16, 16, 15));
        assert!(rules.accepts(6, 6, 5));
    }

    #[test]
    fn default_rules_reject_out_of_range() {
        let rules = ConnectNRules::default();
        assert!(!rules.accepts(0, 6, 4));
        assert!(!rules.accepts(-7, 6, 4));
        assert!(!rules.accepts(5, 6, 4));
        assert!(!rules.accepts(17, 6, 4));
        assert!(!rules.accepts(7, 17, 4));
        assert!(!rules.accepts(7, 6, 3));
        assert!(!rules.accepts(7, 6, 7));
        assert!(!rules.accepts(7, 6, 99));
    }

    #[test]
    fn n_limit_uses_larger_dimension() {
        let rules = ConnectNRules::default();
        assert!(rules.accepts(6, 10, 9));
        assert!(!rules.accepts(6, 10, 10));
    }

    #[test]
    fn custom_rules_allow_small_boards() {
        let rules = ConnectNRules::new(3, 5, 3, 5, 3);
        rules.validate().expect("small rule set is consistent");
        assert!(rules.accepts(3, 4, 3));
        assert!(!rules.accepts(3, 3, 3));
    }

    #[test]
    fn validate_rejects_inconsistent_bounds() {
        assert!(ConnectNRules::new(0, 16, 6, 16, 4).validate().is_err());
        assert!(ConnectNRules::new(10, 6, 6, 16, 4).validate().is_err());
        assert!(ConnectNRules::new(6, 16, 12, 8, 4).validate().is_err());
        assert!(ConnectNRules::new(6, 16, 6, 16, 0).validate().is_err());
        assert!(ConnectNRules::new(6, 8, 6, 8, 8).validate().is_err());
        ConnectNRules::default().validate().expect("defaults are consistent");
    }

    #[test]
    fn describe_mentions_bounds() {
        let text = ConnectNRules::default().describe();
        assert!(text.contains("Width 6-16"));
        assert!(text.contains("N at least 4"));
    }
}
