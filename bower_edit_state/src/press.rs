// Copyright 2026 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press feedback helper: track which interactive sub-elements are held down.
//!
//! A form field has up to three pressable regions: the field itself plus the
//! confirm and cancel actions of its picker overlay. Each is toggled
//! independently on press-start/press-end pairs, and the flags feed style
//! resolution only; the edit machine never reads them.

use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    struct PressFlags: u8 {
        const FIELD = 1 << 0;
        const CONFIRM = 1 << 1;
        const CANCEL = 1 << 2;
    }
}

/// An interactive sub-element that can show press feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PressTarget {
    /// The pressable field area.
    Field,
    /// The action committing the pending selection.
    Confirm,
    /// The action dismissing the picker without committing.
    Cancel,
}

impl PressTarget {
    fn flag(self) -> PressFlags {
        match self {
            Self::Field => PressFlags::FIELD,
            Self::Confirm => PressFlags::CONFIRM,
            Self::Cancel => PressFlags::CANCEL,
        }
    }
}

/// Independent press flags for each [`PressTarget`].
///
/// ```rust
/// use bower_edit_state::press::{PressState, PressTarget};
///
/// let mut press = PressState::new();
///
/// press.toggle(PressTarget::Field); // press-start
/// assert!(press.is_pressed(PressTarget::Field));
///
/// press.toggle(PressTarget::Field); // press-end
/// assert!(!press.any_pressed());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PressState {
    flags: PressFlags,
}

impl PressState {
    /// Creates a state with nothing pressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the target's flag; call once on press-start and once on
    /// press-end.
    pub fn toggle(&mut self, target: PressTarget) {
        self.flags.toggle(target.flag());
    }

    /// Returns `true` while the target is pressed.
    pub fn is_pressed(&self, target: PressTarget) -> bool {
        self.flags.contains(target.flag())
    }

    /// Returns `true` while any target is pressed.
    pub fn any_pressed(&self) -> bool {
        !self.flags.is_empty()
    }

    /// Releases every target.
    pub fn clear(&mut self) {
        self.flags = PressFlags::empty();
    }
}
