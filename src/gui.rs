//! Checkbox control panel.
//!
//! The panel holds one bound boolean per solid. Changing a checkbox records a
//! [`ChangeEvent`]; the viewer drains those events once per frame and applies
//! them. Labels are resolved to a [`SolidType`] on entry, so nothing past this
//! module dispatches on strings.

use crate::errors::ViewerError;
use crate::solids::SolidType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub solid: SolidType,
    pub label: &'static str,
    pub checked: bool,
}

/// Emitted when a checkbox's value actually changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub solid: SolidType,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPanel {
    checkboxes: Vec<Checkbox>,
    pending: Vec<ChangeEvent>,
}

impl Default for ControlPanel {
    /// One unchecked box per solid, in [`SolidType::ALL`] order.
    fn default() -> Self {
        ControlPanel {
            checkboxes: SolidType::ALL
                .into_iter()
                .map(|solid| Checkbox {
                    solid,
                    label: solid.label(),
                    checked: false,
                })
                .collect(),
            pending: Vec::new(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checkboxes(&self) -> &[Checkbox] {
        &self.checkboxes
    }

    pub fn is_checked(&self, solid: SolidType) -> bool {
        self.checkbox(solid).is_some_and(|c| c.checked)
    }

    fn checkbox(&self, solid: SolidType) -> Option<&Checkbox> {
        self.checkboxes.iter().find(|c| c.solid == solid)
    }

    /// Set a checkbox. Returns `true` and queues an event if the value changed.
    pub fn set(&mut self, solid: SolidType, value: bool) -> bool {
        let Some(checkbox) = self.checkboxes.iter_mut().find(|c| c.solid == solid) else {
            return false;
        };
        if checkbox.checked == value {
            return false;
        }
        checkbox.checked = value;
        self.pending.push(ChangeEvent { solid, value });
        true
    }

    /// Flip a checkbox, as a click would.
    pub fn toggle(&mut self, solid: SolidType) {
        let value = !self.is_checked(solid);
        self.set(solid, value);
    }

    /// Set a checkbox by its label (case-insensitive).
    pub fn set_by_label(&mut self, label: &str, value: bool) -> Result<bool, ViewerError> {
        let solid: SolidType = label.parse()?;
        Ok(self.set(solid, value))
    }

    /// Bring a checkbox in line with state changed elsewhere. No event is queued.
    pub fn sync(&mut self, solid: SolidType, value: bool) {
        if let Some(checkbox) = self.checkboxes.iter_mut().find(|c| c.solid == solid) {
            checkbox.checked = value;
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<ChangeEvent> {
        std::mem::take(&mut self.pending)
    }
}
