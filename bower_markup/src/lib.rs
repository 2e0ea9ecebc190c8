// Copyright 2026 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bower_markup --heading-base-level=0

//! Bower Markup: element and style resolution contracts for markup-driven widgets.
//!
//! Bower widgets render from a declarative markup element and write committed
//! form values back to it. This crate defines the two seams through which a
//! widget talks to its host:
//!
//! - [`MarkupElement`]: read/write access to an element's attributes. The
//!   element is the single source of truth for a field's committed value.
//! - [`ResolveStyle`]: resolution of a style attribute (plus interaction flags)
//!   into whatever style and prop representations the host's rendering layer
//!   uses. Widgets only carry the resolved values; they never interpret them.
//!
//! ## Design Philosophy
//!
//! The contracts here are deliberately host-shaped rather than widget-shaped:
//!
//! - **Generic**: a widget is generic over its element and resolver types, so
//!   hosts can plug in their own document representation and stylesheet engine
//!   without conversion layers.
//! - **String-keyed**: attributes are plain string pairs, matching the markup
//!   documents widgets are instantiated from. Known attribute names live in
//!   [`attr`] as constants.
//! - **Absence is not an error**: a missing attribute resolves to `None` and
//!   callers substitute defaults. Nothing in this crate can fail.
//!
//! ## Usage
//!
//! [`AttrElement`] is the simplest element implementation, an owned attribute
//! map. Hosts with a real document tree implement [`MarkupElement`] for their
//! own node handles instead.
//!
//! ```rust
//! use bower_markup::{AttrElement, MarkupElement, attr};
//!
//! let mut element = AttrElement::new();
//! element.set_attribute(attr::PLACEHOLDER, "Select date");
//!
//! assert_eq!(element.attribute(attr::PLACEHOLDER), Some("Select date"));
//! assert_eq!(element.attribute(attr::VALUE), None);
//! ```
//!
//! Style resolution is pull-based: the widget describes what it wants with a
//! [`StyleQuery`] (the style attribute to resolve and the current interaction
//! flags) and the host's resolver returns its own style object:
//!
//! ```rust
//! use bower_markup::{AttrElement, ResolveStyle, StyleQuery};
//!
//! /// A resolver that records the query; a real host would consult
//! /// stylesheets referenced by the element's attributes.
//! struct Recorder;
//!
//! impl ResolveStyle<AttrElement> for Recorder {
//!     type Style = (bool, bool);
//!     type Props = ();
//!
//!     fn resolve_style(&self, _element: &AttrElement, query: &StyleQuery<'_>) -> (bool, bool) {
//!         (query.focused, query.pressed)
//!     }
//!
//!     fn resolve_props(&self, _element: &AttrElement, _query: &StyleQuery<'_>) {}
//! }
//!
//! let element = AttrElement::new();
//! let style = Recorder.resolve_style(&element, &StyleQuery::new("field-style").pressed(true));
//! assert_eq!(style, (false, true));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod element;
mod resolve;

pub use element::{AttrElement, MarkupElement, attr};
pub use resolve::{ResolveStyle, StyleQuery};
