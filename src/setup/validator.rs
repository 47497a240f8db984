//! Turns raw width/height/n text into a verdict.

use derive_new::new;
use tracing::{debug, instrument};

use crate::board::{BoardConfig, BoardOracle};
use crate::setup::fields::{FieldId, SetupFields};
use crate::{SetupError, SetupErrorKind};

/// Parses board text and defers legality to the injected oracle.
///
/// Parse failures and oracle rejections are reported by
/// [`check`](Self::check) as [`SetupError`]s and collapse to `false` in
/// [`is_valid`](Self::is_valid). Nothing else is caught.
#[derive(Debug, Clone, new)]
pub struct ConfigValidator<O> {
    oracle: O,
}

impl<O: BoardOracle> ConfigValidator<O> {
    /// The oracle consulted for legality.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Parses the three texts and asks the oracle for a board.
    ///
    /// # Errors
    ///
    /// Returns a `Parse` error naming the first field that is not a base-10
    /// `i32`, or an `Illegal` error if the oracle refuses the triple.
    #[instrument(skip(self))]
    pub fn check(&self, width: &str, height: &str, n: &str) -> Result<BoardConfig, SetupError> {
        let width = parse_field(FieldId::Width, width)?;
        let height = parse_field(FieldId::Height, height)?;
        let n = parse_field(FieldId::N, n)?;
        self.oracle
            .try_build(width, height, n)
            .ok_or_else(|| SetupError::new(SetupErrorKind::Illegal { width, height, n }))
    }

    /// Runs [`check`](Self::check) on the numeric fields of a field set.
    ///
    /// # Errors
    ///
    /// Same as [`check`](Self::check).
    #[instrument(skip(self, fields))]
    pub fn check_fields(&self, fields: &SetupFields) -> Result<BoardConfig, SetupError> {
        self.check(
            fields.get(FieldId::Width),
            fields.get(FieldId::Height),
            fields.get(FieldId::N),
        )
    }

    /// True iff all three texts parse and the oracle accepts them.
    #[instrument(skip(self))]
    pub fn is_valid(&self, width: &str, height: &str, n: &str) -> bool {
        match self.check(width, height, n) {
            Ok(board) => {
                debug!(?board, "Board configuration accepted");
                true
            }
            Err(e) => {
                debug!(error = %e.kind, "Board configuration rejected");
                false
            }
        }
    }

    /// [`is_valid`](Self::is_valid) over a field set.
    pub fn is_valid_fields(&self, fields: &SetupFields) -> bool {
        self.is_valid(
            fields.get(FieldId::Width),
            fields.get(FieldId::Height),
            fields.get(FieldId::N),
        )
    }
}

/// Parses one numeric field as a base-10 `i32`.
///
/// Accepts an optional sign; rejects whitespace, empty text and overflow.
///
/// # Errors
///
/// Returns a `Parse` error carrying the field and the offending text.
#[instrument]
pub fn parse_field(field: FieldId, text: &str) -> Result<i32, SetupError> {
    text.parse::<i32>().map_err(|_| {
        SetupError::new(SetupErrorKind::Parse {
            field,
            text: text.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConnectNRules;

    fn validator() -> ConfigValidator<ConnectNRules> {
        ConfigValidator::new(ConnectNRules::default())
    }

    #[test]
    fn parse_field_grammar() {
        assert_eq!(parse_field(FieldId::Width, "7").ok(), Some(7));
        assert_eq!(parse_field(FieldId::Width, "+7").ok(), Some(7));
        assert_eq!(parse_field(FieldId::Width, "-3").ok(), Some(-3));
        assert_eq!(parse_field(FieldId::Width, "007").ok(), Some(7));
        assert!(parse_field(FieldId::Width, "").is_err());
        assert!(parse_field(FieldId::Width, " 7").is_err());
        assert!(parse_field(FieldId::Width, "7.0").is_err());
        assert!(parse_field(FieldId::Width, "+").is_err());
        assert!(parse_field(FieldId::Width, "2147483648").is_err());
    }

    #[test]
    fn check_reports_first_bad_field() {
        let err = validator().check("7", "six", "x").unwrap_err();
        assert_eq!(
            err.kind,
            SetupErrorKind::Parse {
                field: FieldId::Height,
                text: "six".to_string()
            }
        );
    }

    #[test]
    fn check_reports_oracle_rejection() {
        let err = validator().check("7", "6", "99").unwrap_err();
        assert_eq!(
            err.kind,
            SetupErrorKind::Illegal {
                width: 7,
                height: 6,
                n: 99
            }
        );
    }

    #[test]
    fn is_valid_matches_check() {
        let v = validator();
        assert!(v.is_valid("7", "6", "4"));
        assert!(!v.is_valid("0", "6", "4"));
        assert!(!v.is_valid("abc", "6", "4"));
        assert!(!v.is_valid("", "", ""));
    }

    #[test]
    fn field_set_variant_ignores_names() {
        let v = validator();
        let fields = SetupFields::new("7", "6", "4", "", "not a number");
        assert!(v.is_valid_fields(&fields));
        assert_eq!(*v.check_fields(&fields).unwrap().n(), 4);
    }
}
