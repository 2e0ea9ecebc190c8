// Copyright 2026 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The markup element contract and a map-backed implementation.

use alloc::string::{String, ToString};

use hashbrown::HashMap;

/// Attribute names understood by bower form-field widgets.
///
/// Widgets look attributes up verbatim; hosts that generate markup should use
/// these constants rather than repeating the strings.
pub mod attr {
    /// The committed field value. Read once at mount, written on commit.
    pub const VALUE: &str = "value";
    /// Format pattern handed to the injected date formatter.
    pub const FORMAT: &str = "format";
    /// Label text shown while no value is committed.
    pub const PLACEHOLDER: &str = "placeholder";
    /// Color override applied to the label only while no value is committed.
    pub const PLACEHOLDER_COLOR: &str = "placeholder-color";
    /// `"true"` suppresses rendering of the field entirely.
    pub const HIDE: &str = "hide";
    /// Label for the action dismissing the picker without committing.
    pub const CANCEL_LABEL: &str = "cancel-label";
    /// Label for the action committing the pending selection.
    pub const DONE_LABEL: &str = "done-label";
    /// Earliest selectable date, same lenient syntax as `value`.
    pub const MIN: &str = "min";
    /// Latest selectable date, same lenient syntax as `value`.
    pub const MAX: &str = "max";
    /// Style attribute for the picker overlay container.
    pub const MODAL_STYLE: &str = "modal-style";
    /// Style attribute for the overlay's action labels.
    pub const MODAL_TEXT_STYLE: &str = "modal-text-style";
    /// Style attribute for the field container.
    pub const FIELD_STYLE: &str = "field-style";
    /// Style attribute for the field's label text.
    pub const FIELD_TEXT_STYLE: &str = "field-text-style";
}

/// Read/write access to a markup element's attributes.
///
/// The element backing a form field is the authoritative store for its
/// committed value: widgets read the [`attr::VALUE`] attribute once when they
/// mount and write it back exactly once per commit. All other attributes are
/// presentation inputs.
///
/// Implementations are expected to be cheap handles into the host's document
/// tree; [`AttrElement`] is a standalone owned implementation for hosts
/// without one (and for tests).
pub trait MarkupElement {
    /// Returns the attribute's current value, or `None` when absent.
    ///
    /// Names are compared verbatim; there is no case folding.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Sets an attribute, replacing any existing value.
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// An owned, map-backed [`MarkupElement`].
///
/// # Example
///
/// ```rust
/// use bower_markup::{AttrElement, MarkupElement, attr};
///
/// let mut element = AttrElement::from_attributes([
///     (attr::VALUE, "2024-03-01T00:00:00.000Z"),
///     (attr::PLACEHOLDER, "Select date"),
/// ]);
///
/// assert_eq!(element.attribute(attr::VALUE), Some("2024-03-01T00:00:00.000Z"));
///
/// element.set_attribute(attr::VALUE, "2024-04-15T00:00:00.000Z");
/// assert_eq!(element.attribute(attr::VALUE), Some("2024-04-15T00:00:00.000Z"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AttrElement {
    attributes: HashMap<String, String>,
}

impl AttrElement {
    /// Creates an element with no attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element from `(name, value)` pairs.
    ///
    /// Later pairs replace earlier ones with the same name.
    #[must_use]
    pub fn from_attributes<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut element = Self::new();
        for (name, value) in pairs {
            element.set_attribute(name, value);
        }
        element
    }

    /// Returns `true` if no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Returns the number of attributes set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }
}

impl MarkupElement for AttrElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_string(), value.to_string());
    }
}
