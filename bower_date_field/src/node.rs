// Copyright 2026 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The renderable tree handed to the hosting render layer.
//!
//! A [`Node`] describes what to draw and which interactions each region
//! offers; it performs nothing itself. The host walks the tree, realizes it
//! with its own primitives, and dispatches the interactions back into the
//! widget (see `Interaction` in this crate). Style and prop payloads are the
//! host resolver's associated types, carried opaquely.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use bower_edit_state::PressTarget;
use chrono::{DateTime, Utc};
use smallvec::SmallVec;

/// A stack of resolved styles, applied in order.
///
/// Most elements carry zero or one resolved style; two covers a style plus a
/// local override without spilling.
pub type StyleStack<S> = SmallVec<[S; 2]>;

/// One element of the field's renderable tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node<S, P> {
    /// A plain container.
    View {
        /// Styles applied to the container.
        style: StyleStack<S>,
        /// Optional host prop bag (accessibility, layout) for the container.
        props: Option<P>,
        /// Child nodes, in paint order.
        children: Vec<Node<S, P>>,
    },
    /// A text run.
    Text {
        /// Styles applied to the text.
        style: StyleStack<S>,
        /// The text to display.
        content: String,
        /// Color override, set only for placeholder text; the raw attribute
        /// value, interpreted by the host.
        color: Option<String>,
    },
    /// A pressable region.
    ///
    /// The host should dispatch `PressStart`/`PressEnd` on press transitions
    /// and `Activate` for a completed press, all tagged with `target`.
    Touchable {
        /// Which interactive sub-element this region is.
        target: PressTarget,
        /// The pressable content.
        child: Box<Node<S, P>>,
    },
    /// A full-screen overlay.
    ///
    /// Present in the tree whenever the deferred presentation renders; shown
    /// only while `visible`. A host-initiated close (hardware back, outside
    /// tap) should be dispatched as `DismissRequest`.
    Modal {
        /// Whether the overlay is currently shown.
        visible: bool,
        /// Styles applied to the overlay's sheet container.
        style: StyleStack<S>,
        /// Overlay contents, in paint order.
        children: Vec<Node<S, P>>,
    },
    /// The platform date picker.
    ///
    /// Selection changes should be dispatched as `Change`.
    Picker {
        /// The date the picker currently shows.
        value: DateTime<Utc>,
        /// Earliest selectable date, when bounded.
        minimum: Option<DateTime<Utc>>,
        /// Latest selectable date, when bounded.
        maximum: Option<DateTime<Utc>>,
    },
}
