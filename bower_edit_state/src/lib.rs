// Copyright 2026 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bower_edit_state --heading-base-level=0

//! Bower Edit State: commit state machines for form-field interactions.
//!
//! This crate provides small, focused state machines for form fields whose
//! value editing requires stateful tracking across multiple events. Each
//! module handles a specific interaction pattern:
//!
//! - [`edit`]: track a pending selection against a committed value, with
//!   deferred (confirm/cancel) and immediate commit modes
//! - [`press`]: track per-target press feedback for visual styling
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: each handles one specific interaction pattern
//! - **Stateful but simple**: track just enough state to compute transitions
//! - **Integration-friendly**: transitions *return* what happened (such as a
//!   newly committed value) instead of touching the outside world, so callers
//!   decide how to persist or render the result
//! - **Generic**: accept application-specific value types
//!
//! The crate does not assume any particular UI framework, document model, or
//! clock. The initial pending value's fallback (typically "now" for a date
//! field) is supplied by the caller, which keeps construction deterministic
//! and clock-free.
//!
//! ## Usage Patterns
//!
//! ### Deferred commit
//!
//! Under [`CommitMode::Deferred`] an editing session is opened explicitly,
//! edits accumulate in the pending value, and only a confirm transition
//! publishes them:
//!
//! ```rust
//! use bower_edit_state::{CommitMode, EditState};
//!
//! // Using &str as a stand-in for an application-specific value type.
//! let mut edit = EditState::new(CommitMode::Deferred, Some("march"), "march");
//!
//! assert!(edit.open());
//! assert_eq!(edit.change("april"), None); // pending only, nothing committed
//! assert_eq!(edit.committed(), Some(&"march"));
//!
//! // Confirm closes the session and hands the caller the value to persist.
//! assert_eq!(edit.confirm(), Some("april"));
//! assert_eq!(edit.committed(), Some(&"april"));
//! assert!(!edit.is_open());
//! ```
//!
//! Cancel closes the session without publishing:
//!
//! ```rust
//! use bower_edit_state::{CommitMode, EditState};
//!
//! let mut edit = EditState::new(CommitMode::Deferred, Some("march"), "march");
//! edit.open();
//! edit.change("april");
//! edit.cancel();
//!
//! assert_eq!(edit.committed(), Some(&"march"));
//! // The discarded edit is not rolled back; it persists as the pending
//! // value for the next session.
//! assert_eq!(edit.pending(), &"april");
//! ```
//!
//! ### Immediate commit
//!
//! Under [`CommitMode::Immediate`] there is no session: every change commits
//! atomically and `open`/`confirm`/`cancel` are no-ops:
//!
//! ```rust
//! use bower_edit_state::{CommitMode, EditState};
//!
//! let mut edit = EditState::new(CommitMode::Immediate, None, "fallback");
//!
//! assert!(!edit.open()); // never opens
//! assert_eq!(edit.change("april"), Some("april"));
//! assert_eq!(edit.committed(), Some(&"april"));
//! ```
//!
//! ### Press feedback
//!
//! Use [`press::PressState`] to track which interactive sub-elements are held
//! down, toggled on press-start/press-end pairs:
//!
//! ```rust
//! use bower_edit_state::press::{PressState, PressTarget};
//!
//! let mut press = PressState::new();
//! press.toggle(PressTarget::Confirm);
//! assert!(press.is_pressed(PressTarget::Confirm));
//! assert!(!press.is_pressed(PressTarget::Field));
//!
//! press.toggle(PressTarget::Confirm);
//! assert!(!press.any_pressed());
//! ```
//!
//! Press feedback is purely visual; it never affects the edit machine.
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod edit;
pub mod press;

pub use edit::{CommitMode, EditState};
pub use press::{PressState, PressTarget};
