// Copyright 2026 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style and prop resolution contract.
//!
//! Widgets describe what they want resolved with a [`StyleQuery`]; the host's
//! resolver turns that into its own style and prop representations.

use crate::element::MarkupElement;

/// Inputs to a single style or prop resolution.
///
/// `style_attr` names the element attribute whose value selects the style
/// rules (for example `"field-style"`). The interaction flags select a visual
/// variant: `focused` while the field's picker is open, `pressed` while the
/// specific sub-element being styled is held down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleQuery<'a> {
    /// The style attribute to resolve.
    pub style_attr: &'a str,
    /// Whether the field currently has focus (its picker is open).
    pub focused: bool,
    /// Whether the styled sub-element is currently pressed.
    pub pressed: bool,
}

impl<'a> StyleQuery<'a> {
    /// Creates a query for `style_attr` with both interaction flags clear.
    #[must_use]
    pub fn new(style_attr: &'a str) -> Self {
        Self {
            style_attr,
            focused: false,
            pressed: false,
        }
    }

    /// Sets the focused flag.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Sets the pressed flag.
    #[must_use]
    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }
}

/// Resolves style queries against an element into host representations.
///
/// The associated types let hosts keep their native style objects end to end:
/// widgets embed `Style` and `Props` values in the render trees they produce
/// without ever looking inside them. Resolution is infallible; a query that
/// matches nothing resolves to whatever the host considers an empty style.
pub trait ResolveStyle<E: MarkupElement> {
    /// The host's resolved style representation.
    type Style;
    /// The host's prop-bag representation (accessibility, layout, handlers).
    type Props;

    /// Resolves a style attribute to a style object.
    fn resolve_style(&self, element: &E, query: &StyleQuery<'_>) -> Self::Style;

    /// Resolves a style attribute to a prop bag for a container element.
    fn resolve_props(&self, element: &E, query: &StyleQuery<'_>) -> Self::Props;
}
