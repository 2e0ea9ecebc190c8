// Copyright 2026 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The date field widget: mount, interaction handling, and write-back.

use alloc::boxed::Box;

use bower_edit_state::{CommitMode, EditState, PressState, PressTarget};
use bower_markup::{MarkupElement, ResolveStyle, attr};
use chrono::{DateTime, Utc};

use crate::format::{self, DateFormatter};
use crate::node::Node;
use crate::presentation::{
    DeferredPresentation, ImmediatePresentation, Presentation, RenderCx,
};

/// Mount-time configuration for a [`DateField`].
///
/// The commit mode comes from platform identity and is fixed for the
/// widget's lifetime. The bounds are fallbacks: an element's `min`/`max`
/// attributes, when present and parseable, take precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    /// Deferred (modal confirm) or immediate (inline) commits.
    pub mode: CommitMode,
    /// Earliest selectable date when the element has no `min` attribute.
    pub minimum: Option<DateTime<Utc>>,
    /// Latest selectable date when the element has no `max` attribute.
    pub maximum: Option<DateTime<Utc>>,
}

impl FieldConfig {
    /// An unbounded configuration for the given commit mode.
    #[must_use]
    pub fn new(mode: CommitMode) -> Self {
        Self {
            mode,
            minimum: None,
            maximum: None,
        }
    }
}

/// A user interaction dispatched by the host into the field.
///
/// The host derives these from the [`Node`] tree it realized: press
/// transitions and completed presses on [`Node::Touchable`] regions, change
/// events from [`Node::Picker`], and close requests from [`Node::Modal`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interaction {
    /// A press began on the target; toggles its visual feedback.
    PressStart(PressTarget),
    /// A press ended on the target; toggles its visual feedback back.
    PressEnd(PressTarget),
    /// A completed press on the target: the field opens the picker, confirm
    /// commits, cancel dismisses.
    Activate(PressTarget),
    /// The picker's selection changed.
    Change(DateTime<Utc>),
    /// The host asked to close the overlay (hardware back, outside tap);
    /// treated as cancel.
    DismissRequest,
}

/// A markup-driven date-selection form field.
///
/// Constructed once per mounted element, destroyed on unmount; a remount
/// re-reads the element as the new baseline. All state transitions happen
/// synchronously inside [`DateField::handle`]; the host re-renders by
/// calling [`DateField::render`] afterwards.
pub struct DateField<E, R, F>
where
    E: MarkupElement,
    R: ResolveStyle<E>,
    F: DateFormatter,
{
    element: E,
    resolver: R,
    formatter: F,
    edit: EditState<DateTime<Utc>>,
    press: PressState,
    minimum: Option<DateTime<Utc>>,
    maximum: Option<DateTime<Utc>>,
    presentation: Box<dyn Presentation<E, R, F>>,
}

impl<E, R, F> DateField<E, R, F>
where
    E: MarkupElement,
    R: ResolveStyle<E>,
    F: DateFormatter,
{
    /// Mounts a field on `element`.
    ///
    /// The element's `value` attribute is read once, here; an absent or
    /// unparseable value yields no committed value rather than an error. The
    /// pending selection starts at the committed value, falling back to
    /// `now`. The presentation is chosen from `config.mode` and never
    /// changes.
    pub fn mount(
        element: E,
        resolver: R,
        formatter: F,
        config: FieldConfig,
        now: DateTime<Utc>,
    ) -> Self {
        let committed = element.attribute(attr::VALUE).and_then(format::parse_date);
        let minimum = element
            .attribute(attr::MIN)
            .and_then(format::parse_date)
            .or(config.minimum);
        let maximum = element
            .attribute(attr::MAX)
            .and_then(format::parse_date)
            .or(config.maximum);
        let presentation: Box<dyn Presentation<E, R, F>> = match config.mode {
            CommitMode::Deferred => Box::new(DeferredPresentation),
            CommitMode::Immediate => Box::new(ImmediatePresentation),
        };
        Self {
            element,
            resolver,
            formatter,
            edit: EditState::new(config.mode, committed, now),
            press: PressState::new(),
            minimum,
            maximum,
            presentation,
        }
    }

    /// Mounts a field using the system clock for the pending fallback.
    #[cfg(feature = "std")]
    pub fn mount_now(element: E, resolver: R, formatter: F, config: FieldConfig) -> Self {
        Self::mount(element, resolver, formatter, config, Utc::now())
    }

    /// Applies one interaction.
    ///
    /// Returns the newly committed date when the interaction caused a
    /// commit; the element's `value` attribute has then already been written
    /// (once, as an RFC 3339 UTC string). All other interactions return
    /// `None` and leave the element untouched.
    pub fn handle(&mut self, interaction: Interaction) -> Option<DateTime<Utc>> {
        match interaction {
            Interaction::PressStart(target) | Interaction::PressEnd(target) => {
                self.press.toggle(target);
                None
            }
            Interaction::Activate(PressTarget::Field) => {
                if !self.hidden() {
                    self.edit.open();
                }
                None
            }
            Interaction::Activate(PressTarget::Confirm) => {
                let committed = self.edit.confirm();
                self.write_back(committed)
            }
            Interaction::Activate(PressTarget::Cancel) | Interaction::DismissRequest => {
                self.edit.cancel();
                None
            }
            Interaction::Change(date) => {
                let committed = self.edit.change(date);
                self.write_back(committed)
            }
        }
    }

    /// Renders the field's current state.
    ///
    /// `None` means the field produces no output at all (hidden).
    pub fn render(&self) -> Option<Node<R::Style, R::Props>> {
        let cx = RenderCx::new(
            &self.element,
            &self.resolver,
            &self.formatter,
            &self.edit,
            &self.press,
            self.minimum,
            self.maximum,
        );
        self.presentation.render_field(&cx)
    }

    /// The element this field renders from and writes back to.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// The committed value, if any.
    pub fn committed(&self) -> Option<&DateTime<Utc>> {
        self.edit.committed()
    }

    /// The in-progress picker selection.
    pub fn pending(&self) -> &DateTime<Utc> {
        self.edit.pending()
    }

    /// `true` while the picker overlay is open (deferred mode only).
    pub fn is_open(&self) -> bool {
        self.edit.is_open()
    }

    /// `true` while the target shows press feedback.
    pub fn is_pressed(&self, target: PressTarget) -> bool {
        self.press.is_pressed(target)
    }

    /// Unmounts the field, handing the element handle back to the host.
    pub fn into_element(self) -> E {
        self.element
    }

    fn hidden(&self) -> bool {
        self.edit.mode() == CommitMode::Deferred
            && self.element.attribute(attr::HIDE) == Some("true")
    }

    fn write_back(&mut self, committed: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
        if let Some(date) = committed {
            self.element
                .set_attribute(attr::VALUE, &format::iso_string(&date));
        }
        committed
    }
}

impl<E, R, F> core::fmt::Debug for DateField<E, R, F>
where
    E: MarkupElement,
    R: ResolveStyle<E>,
    F: DateFormatter,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DateField")
            .field("edit", &self.edit)
            .field("press", &self.press)
            .field("minimum", &self.minimum)
            .field("maximum", &self.maximum)
            .field("element", &core::any::type_name::<E>())
            .finish_non_exhaustive()
    }
}
