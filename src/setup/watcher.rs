//! Keeps the start action and error indicator in step with validity.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::board::BoardOracle;
use crate::setup::fields::{FieldId, SetupFields};
use crate::setup::validator::ConfigValidator;

/// The two UI affordances the setup flow drives.
pub trait SetupView {
    /// Enables or disables the start action.
    fn set_start_enabled(&mut self, enabled: bool);

    /// Shows or hides the invalid-configuration indicator.
    fn set_error_visible(&mut self, visible: bool);
}

/// Plain record of the affordance state, usable as a [`SetupView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Affordances {
    /// Whether the start action can be used.
    start_enabled: bool,
    /// Whether the invalid-configuration indicator is shown.
    error_visible: bool,
}

impl Affordances {
    /// The affordance state that corresponds to a validity verdict.
    pub fn for_validity(valid: bool) -> Self {
        Self {
            start_enabled: valid,
            error_visible: !valid,
        }
    }
}

impl Default for Affordances {
    fn default() -> Self {
        Self::for_validity(false)
    }
}

impl SetupView for Affordances {
    fn set_start_enabled(&mut self, enabled: bool) {
        self.start_enabled = enabled;
    }

    fn set_error_visible(&mut self, visible: bool) {
        self.error_visible = visible;
    }
}

/// Re-derives validity on every numeric edit and pushes it to a view.
///
/// Holds only the last verdict; repeated calls with the same fields give
/// the same result.
#[derive(Debug, Clone)]
pub struct InputWatcher<O> {
    validator: ConfigValidator<O>,
    valid: bool,
}

impl<O: BoardOracle> InputWatcher<O> {
    /// Creates a watcher that starts out invalid.
    pub fn new(validator: ConfigValidator<O>) -> Self {
        Self {
            validator,
            valid: false,
        }
    }

    /// Validator used for each recomputation.
    pub fn validator(&self) -> &ConfigValidator<O> {
        &self.validator
    }

    /// Last computed verdict.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Recomputes validity from `fields` and updates `view`.
    #[instrument(skip(self, fields, view))]
    pub fn on_fields_changed(&mut self, fields: &SetupFields, view: &mut dyn SetupView) -> bool {
        let valid = self.validator.is_valid_fields(fields);
        if valid != self.valid {
            info!(valid, "Setup validity changed");
        }
        self.valid = valid;
        view.set_start_enabled(valid);
        view.set_error_visible(!valid);
        valid
    }

    /// Reacts to an edit of `field`; name fields are ignored.
    ///
    /// Returns the new verdict, or `None` if the field does not gate validity.
    #[instrument(skip(self, fields, view))]
    pub fn on_field_edited(
        &mut self,
        field: FieldId,
        fields: &SetupFields,
        view: &mut dyn SetupView,
    ) -> Option<bool> {
        if !field.is_numeric() {
            debug!(%field, "Name field edited, validity unchanged");
            return None;
        }
        Some(self.on_fields_changed(fields, view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConnectNRules;

    #[derive(Debug, Default)]
    struct RecordingView {
        calls: Vec<(&'static str, bool)>,
    }

    impl SetupView for RecordingView {
        fn set_start_enabled(&mut self, enabled: bool) {
            self.calls.push(("start", enabled));
        }

        fn set_error_visible(&mut self, visible: bool) {
            self.calls.push(("error", visible));
        }
    }

    fn watcher() -> InputWatcher<ConnectNRules> {
        InputWatcher::new(ConfigValidator::new(ConnectNRules::default()))
    }

    #[test]
    fn default_affordances_are_invalid() {
        let a = Affordances::default();
        assert!(!a.start_enabled());
        assert!(*a.error_visible());
    }

    #[test]
    fn pushes_both_affordances_every_time() {
        let mut w = watcher();
        let mut view = RecordingView::default();
        let fields = SetupFields::new("7", "6", "4", "", "");
        assert!(w.on_fields_changed(&fields, &mut view));
        assert!(w.on_fields_changed(&fields, &mut view));
        assert_eq!(
            view.calls,
            vec![("start", true), ("error", false), ("start", true), ("error", false)]
        );
    }

    #[test]
    fn name_edits_do_not_revalidate() {
        let mut w = watcher();
        let mut view = RecordingView::default();
        let fields = SetupFields::new("7", "6", "4", "A", "");
        assert_eq!(w.on_field_edited(FieldId::Player1, &fields, &mut view), None);
        assert!(view.calls.is_empty());
        assert!(!w.is_valid());
        assert_eq!(w.on_field_edited(FieldId::N, &fields, &mut view), Some(true));
        assert!(w.is_valid());
    }

    #[test]
    fn affordances_stay_complementary() {
        let mut w = watcher();
        let mut a = Affordances::default();
        for (width, ok) in [("7", true), ("x", false), ("8", true), ("", false)] {
            let fields = SetupFields::new(width, "6", "4", "", "");
            assert_eq!(w.on_fields_changed(&fields, &mut a), ok);
            assert_eq!(*a.start_enabled(), ok);
            assert_ne!(a.start_enabled(), a.error_visible());
        }
    }
}
