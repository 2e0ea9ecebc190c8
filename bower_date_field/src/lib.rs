// Copyright 2026 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bower_date_field --heading-base-level=0

//! Bower Date Field: a markup-driven date-selection form field.
//!
//! The field renders from a markup element's attributes and writes the
//! committed selection back to the element's `value` attribute, which stays
//! the single source of truth. Two presentation policies cover the two
//! platform conventions:
//!
//! - **Deferred**: a pressable label opens a picker overlay with explicit
//!   cancel/confirm actions; nothing is committed until confirm.
//! - **Immediate**: the picker renders inline and every selection change
//!   commits at once; no overlay ever appears.
//!
//! The policy is chosen once at mount from the injected [`CommitMode`] —
//! typically derived from platform identity — and never re-evaluated.
//!
//! ## Structure
//!
//! The widget is headless: [`DateField::render`] produces a [`Node`] tree
//! describing views, text, pressable regions, the overlay, and the picker;
//! the host realizes that tree with its own primitives and dispatches
//! [`Interaction`]s back into [`DateField::handle`]. Transitions are
//! synchronous; the host re-renders after each one.
//!
//! Collaborators are injected at mount and generic at the seams:
//!
//! - the element (`bower_markup::MarkupElement`),
//! - the style resolver (`bower_markup::ResolveStyle`), whose associated
//!   types flow opaquely into the rendered tree,
//! - the label formatter ([`DateFormatter`]; [`StrftimeFormatter`] is the
//!   out-of-the-box implementation),
//! - the pending-value fallback instant ("now"), keeping construction
//!   deterministic. With the `std` feature, [`DateField::mount_now`] reads
//!   the system clock instead.
//!
//! ## Example
//!
//! ```rust
//! use bower_date_field::{DateField, FieldConfig, Interaction, StrftimeFormatter};
//! use bower_edit_state::{CommitMode, PressTarget};
//! use bower_markup::{AttrElement, MarkupElement, ResolveStyle, StyleQuery, attr};
//! use chrono::{DateTime, Utc};
//!
//! // A host with no stylesheet engine resolves everything to unit.
//! struct NullResolver;
//!
//! impl ResolveStyle<AttrElement> for NullResolver {
//!     type Style = ();
//!     type Props = ();
//!
//!     fn resolve_style(&self, _element: &AttrElement, _query: &StyleQuery<'_>) {}
//!     fn resolve_props(&self, _element: &AttrElement, _query: &StyleQuery<'_>) {}
//! }
//!
//! let element = AttrElement::from_attributes([
//!     (attr::VALUE, "2024-03-01T00:00:00.000Z"),
//!     (attr::FORMAT, "%d %b %Y"),
//! ]);
//! let now: DateTime<Utc> = "2024-01-01T00:00:00.000Z".parse().unwrap();
//!
//! let mut field = DateField::mount(
//!     element,
//!     NullResolver,
//!     StrftimeFormatter,
//!     FieldConfig::new(CommitMode::Deferred),
//!     now,
//! );
//!
//! // Press the field, pick a new date, confirm.
//! field.handle(Interaction::Activate(PressTarget::Field));
//! field.handle(Interaction::Change("2024-04-15T00:00:00.000Z".parse().unwrap()));
//! let committed = field.handle(Interaction::Activate(PressTarget::Confirm));
//!
//! assert!(committed.is_some());
//! assert_eq!(
//!     field.element().attribute(attr::VALUE),
//!     Some("2024-04-15T00:00:00.000Z"),
//! );
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`); the default `std`
//! feature only adds the system clock convenience.

#![no_std]

extern crate alloc;

mod field;
mod format;
mod node;
mod presentation;

pub use field::{DateField, FieldConfig, Interaction};
pub use format::{DateFormatter, StrftimeFormatter, iso_string, parse_date};
pub use node::{Node, StyleStack};
pub use presentation::{DeferredPresentation, ImmediatePresentation, Presentation, RenderCx};
