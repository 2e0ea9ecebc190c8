// Copyright 2026 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two platform presentation policies.
//!
//! A [`Presentation`] turns the field's current state into a [`Node`] tree.
//! Which one runs is decided once, at mount, from the field's commit mode —
//! never re-evaluated per render:
//!
//! - [`DeferredPresentation`]: a pressable label opening a modal overlay with
//!   cancel/confirm actions around the picker. Nothing commits until the
//!   confirm action.
//! - [`ImmediatePresentation`]: the picker inline in a container view, no
//!   label, no overlay; every change commits.

use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec;

use bower_edit_state::{EditState, PressState, PressTarget};
use bower_markup::{MarkupElement, ResolveStyle, StyleQuery, attr};
use chrono::{DateTime, Utc};
use smallvec::smallvec;

use crate::format::DateFormatter;
use crate::node::{Node, StyleStack};

/// Everything a presentation reads while rendering.
///
/// Borrowed from the field for the duration of one render; presentations
/// never mutate through it.
pub struct RenderCx<'a, E: MarkupElement, R: ResolveStyle<E>, F> {
    element: &'a E,
    resolver: &'a R,
    formatter: &'a F,
    edit: &'a EditState<DateTime<Utc>>,
    press: &'a PressState,
    minimum: Option<DateTime<Utc>>,
    maximum: Option<DateTime<Utc>>,
}

impl<'a, E, R: ResolveStyle<E>, F> RenderCx<'a, E, R, F>
where
    E: MarkupElement,
{
    pub(crate) fn new(
        element: &'a E,
        resolver: &'a R,
        formatter: &'a F,
        edit: &'a EditState<DateTime<Utc>>,
        press: &'a PressState,
        minimum: Option<DateTime<Utc>>,
        maximum: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            element,
            resolver,
            formatter,
            edit,
            press,
            minimum,
            maximum,
        }
    }

    /// The element being rendered.
    pub fn element(&self) -> &'a E {
        self.element
    }

    /// The host's style resolver.
    pub fn resolver(&self) -> &'a R {
        self.resolver
    }

    /// The injected label formatter.
    pub fn formatter(&self) -> &'a F {
        self.formatter
    }

    /// The field's commit machine.
    pub fn edit(&self) -> &'a EditState<DateTime<Utc>> {
        self.edit
    }

    /// The field's press feedback flags.
    pub fn press(&self) -> &'a PressState {
        self.press
    }

    /// Earliest selectable date, when bounded.
    pub fn minimum(&self) -> Option<DateTime<Utc>> {
        self.minimum
    }

    /// Latest selectable date, when bounded.
    pub fn maximum(&self) -> Option<DateTime<Utc>> {
        self.maximum
    }
}

impl<E: MarkupElement, R: ResolveStyle<E>, F> core::fmt::Debug for RenderCx<'_, E, R, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RenderCx")
            .field("edit", &self.edit)
            .field("press", &self.press)
            .field("minimum", &self.minimum)
            .field("maximum", &self.maximum)
            .finish_non_exhaustive()
    }
}

/// A rendering policy for the field.
///
/// Exactly one implementation is attached to a field at mount. The provided
/// [`Presentation::render_picker`] is shared: both policies show the same
/// inline picker, seeded with the pending value and the configured bounds.
pub trait Presentation<E, R, F>
where
    E: MarkupElement,
    R: ResolveStyle<E>,
    F: DateFormatter,
{
    /// Renders the whole field, or `None` when the field suppresses
    /// rendering entirely.
    fn render_field(&self, cx: &RenderCx<'_, E, R, F>) -> Option<Node<R::Style, R::Props>>;

    /// Renders the inline picker subcomponent.
    fn render_picker(&self, cx: &RenderCx<'_, E, R, F>) -> Node<R::Style, R::Props> {
        Node::Picker {
            value: *cx.edit().pending(),
            minimum: cx.minimum(),
            maximum: cx.maximum(),
        }
    }
}

/// Deferred-commit presentation: pressable label plus a confirm/cancel modal.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeferredPresentation;

/// Immediate-commit presentation: the picker inline, committing on change.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediatePresentation;

impl<E, R, F> Presentation<E, R, F> for DeferredPresentation
where
    E: MarkupElement,
    R: ResolveStyle<E>,
    F: DateFormatter,
{
    fn render_field(&self, cx: &RenderCx<'_, E, R, F>) -> Option<Node<R::Style, R::Props>> {
        let element = cx.element();
        if element.attribute(attr::HIDE) == Some("true") {
            return None;
        }

        let focused = cx.edit().is_open();
        let pressed = cx.press().is_pressed(PressTarget::Field);
        let props = cx.resolver().resolve_props(
            element,
            &StyleQuery::new(attr::FIELD_STYLE)
                .focused(focused)
                .pressed(pressed),
        );
        let label = render_label(cx, focused, pressed);
        let modal = render_modal(cx, self.render_picker(cx));

        Some(Node::Touchable {
            target: PressTarget::Field,
            child: Box::new(Node::View {
                style: StyleStack::new(),
                props: Some(props),
                children: vec![label, modal],
            }),
        })
    }
}

impl<E, R, F> Presentation<E, R, F> for ImmediatePresentation
where
    E: MarkupElement,
    R: ResolveStyle<E>,
    F: DateFormatter,
{
    fn render_field(&self, cx: &RenderCx<'_, E, R, F>) -> Option<Node<R::Style, R::Props>> {
        let style = cx
            .resolver()
            .resolve_style(cx.element(), &StyleQuery::new(attr::FIELD_STYLE));
        Some(Node::View {
            style: smallvec![style],
            props: None,
            children: vec![self.render_picker(cx)],
        })
    }
}

/// The field's label: the formatted committed value, or placeholder text
/// (with its optional color override) while nothing is committed.
fn render_label<E, R, F>(
    cx: &RenderCx<'_, E, R, F>,
    focused: bool,
    pressed: bool,
) -> Node<R::Style, R::Props>
where
    E: MarkupElement,
    R: ResolveStyle<E>,
    F: DateFormatter,
{
    let element = cx.element();
    let style = cx.resolver().resolve_style(
        element,
        &StyleQuery::new(attr::FIELD_TEXT_STYLE)
            .focused(focused)
            .pressed(pressed),
    );
    let (content, color) = match cx.edit().committed() {
        Some(date) => (
            cx.formatter().format(date, element.attribute(attr::FORMAT)),
            None,
        ),
        None => (
            element
                .attribute(attr::PLACEHOLDER)
                .unwrap_or_default()
                .to_string(),
            element.attribute(attr::PLACEHOLDER_COLOR).map(ToString::to_string),
        ),
    };
    Node::Text {
        style: smallvec![style],
        content,
        color,
    }
}

/// The picker overlay: an actions row (cancel, then confirm) above the
/// picker, visible while an editing session is open.
fn render_modal<E, R, F>(
    cx: &RenderCx<'_, E, R, F>,
    picker: Node<R::Style, R::Props>,
) -> Node<R::Style, R::Props>
where
    E: MarkupElement,
    R: ResolveStyle<E>,
    F: DateFormatter,
{
    let element = cx.element();
    let resolver = cx.resolver();

    let modal_style = resolver.resolve_style(element, &StyleQuery::new(attr::MODAL_STYLE));
    let cancel_style = resolver.resolve_style(
        element,
        &StyleQuery::new(attr::MODAL_TEXT_STYLE)
            .pressed(cx.press().is_pressed(PressTarget::Cancel)),
    );
    let confirm_style = resolver.resolve_style(
        element,
        &StyleQuery::new(attr::MODAL_TEXT_STYLE)
            .pressed(cx.press().is_pressed(PressTarget::Confirm)),
    );

    let cancel_label = element.attribute(attr::CANCEL_LABEL).unwrap_or("Cancel");
    let done_label = element.attribute(attr::DONE_LABEL).unwrap_or("Done");

    Node::Modal {
        visible: cx.edit().is_open(),
        style: smallvec![modal_style],
        children: vec![
            Node::View {
                style: StyleStack::new(),
                props: None,
                children: vec![
                    Node::Touchable {
                        target: PressTarget::Cancel,
                        child: Box::new(Node::Text {
                            style: smallvec![cancel_style],
                            content: cancel_label.to_string(),
                            color: None,
                        }),
                    },
                    Node::Touchable {
                        target: PressTarget::Confirm,
                        child: Box::new(Node::Text {
                            style: smallvec![confirm_style],
                            content: done_label.to_string(),
                            color: None,
                        }),
                    },
                ],
            },
            picker,
        ],
    }
}
