// Copyright 2026 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edit state helper: track a pending selection against a committed value.
//!
//! ## Usage
//!
//! 1) Construct with [`EditState::new`], seeding the committed value from the
//!    backing store and a fallback for the pending value.
//! 2) Under [`CommitMode::Deferred`], call [`EditState::open`] when the user
//!    starts editing, [`EditState::change`] on every picker change, and close
//!    the session with [`EditState::confirm`] or [`EditState::cancel`].
//! 3) Under [`CommitMode::Immediate`], call only [`EditState::change`]; every
//!    change commits atomically.
//!
//! Transitions that commit return the committed value so the caller can
//! perform its single external write-back; nothing here touches storage.

/// When a change to the pending value becomes the committed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitMode {
    /// Edits accumulate in an explicit session and commit on
    /// [`EditState::confirm`].
    Deferred,
    /// Every [`EditState::change`] commits atomically; sessions never open.
    Immediate,
}

/// A two-state (idle/editing) commit machine over a pending/committed pair.
///
/// The machine owns the only mutable copies of the committed and pending
/// values; callers observe them through [`EditState::committed`] and
/// [`EditState::pending`] and mutate them only through transitions.
#[derive(Clone, Debug)]
pub struct EditState<V> {
    mode: CommitMode,
    committed: Option<V>,
    pending: V,
    open: bool,
}

impl<V: Clone> EditState<V> {
    /// Creates a machine in the idle state.
    ///
    /// The pending value starts as a copy of `committed`, or `fallback` when
    /// there is no committed value yet. For a date field the fallback is
    /// typically the current instant, supplied by the caller.
    pub fn new(mode: CommitMode, committed: Option<V>, fallback: V) -> Self {
        let pending = committed.clone().unwrap_or(fallback);
        Self {
            mode,
            committed,
            pending,
            open: false,
        }
    }

    /// The commit mode fixed at construction.
    pub fn mode(&self) -> CommitMode {
        self.mode
    }

    /// The committed value, if any.
    pub fn committed(&self) -> Option<&V> {
        self.committed.as_ref()
    }

    /// The in-progress selection.
    pub fn pending(&self) -> &V {
        &self.pending
    }

    /// `true` while a deferred editing session is open.
    ///
    /// Never `true` under [`CommitMode::Immediate`].
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens an editing session, returning whether one opened.
    ///
    /// The pending value is left at whatever it last was; it is not reset to
    /// the committed value. No-op under [`CommitMode::Immediate`] or when a
    /// session is already open.
    pub fn open(&mut self) -> bool {
        if self.mode == CommitMode::Immediate || self.open {
            return false;
        }
        self.open = true;
        true
    }

    /// Replaces the pending value, regardless of session state.
    ///
    /// Under [`CommitMode::Immediate`] the change also commits and the newly
    /// committed value is returned; the caller is expected to write it back
    /// to the backing store. Under [`CommitMode::Deferred`] this returns
    /// `None` and the store stays untouched until [`EditState::confirm`].
    pub fn change(&mut self, value: V) -> Option<V> {
        self.pending = value;
        match self.mode {
            CommitMode::Immediate => {
                self.committed = Some(self.pending.clone());
                Some(self.pending.clone())
            }
            CommitMode::Deferred => None,
        }
    }

    /// Commits the pending value and closes the session.
    ///
    /// Returns the newly committed value for the caller's write-back, or
    /// `None` when no session is open (including always under
    /// [`CommitMode::Immediate`], where commits happen in
    /// [`EditState::change`]).
    pub fn confirm(&mut self) -> Option<V> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.committed = Some(self.pending.clone());
        Some(self.pending.clone())
    }

    /// Closes the session without committing, returning whether one closed.
    ///
    /// The committed value is untouched. The pending value is *not* restored
    /// to its pre-open state: discarded edits remain visible as the pending
    /// value when the next session opens. Idempotent when idle.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }
}
