// Copyright 2026 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `bower_date_field` crate.
//!
//! These exercise the full widget against an attribute-map element and a
//! recording style resolver: mount-time value parsing, the deferred and
//! immediate commit flows, write-back discipline, and what each state
//! renders to.

use bower_date_field::{
    DateField, DateFormatter, FieldConfig, Interaction, Node, StrftimeFormatter,
};
use bower_edit_state::{CommitMode, PressTarget};
use bower_markup::{AttrElement, MarkupElement, ResolveStyle, StyleQuery, attr};
use chrono::{DateTime, Utc};

/// An element that counts attribute writes, so tests can assert the
/// exactly-once write-back discipline.
#[derive(Clone, Debug, Default)]
struct CountingElement {
    inner: AttrElement,
    writes: usize,
}

impl CountingElement {
    fn with_value(value: &str) -> Self {
        let mut element = Self::default();
        element.inner.set_attribute(attr::VALUE, value);
        element
    }
}

impl MarkupElement for CountingElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.inner.attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.writes += 1;
        self.inner.set_attribute(name, value);
    }
}

/// Resolver whose outputs record the query that produced them.
struct Recorder;

#[derive(Clone, Debug, PartialEq)]
struct Resolved {
    style_attr: String,
    focused: bool,
    pressed: bool,
}

impl ResolveStyle<CountingElement> for Recorder {
    type Style = Resolved;
    type Props = Resolved;

    fn resolve_style(&self, _element: &CountingElement, query: &StyleQuery<'_>) -> Resolved {
        Resolved {
            style_attr: query.style_attr.to_string(),
            focused: query.focused,
            pressed: query.pressed,
        }
    }

    fn resolve_props(&self, element: &CountingElement, query: &StyleQuery<'_>) -> Resolved {
        self.resolve_style(element, query)
    }
}

type Field = DateField<CountingElement, Recorder, StrftimeFormatter>;
type Rendered = Node<Resolved, Resolved>;

fn date(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("test dates are valid RFC 3339")
}

fn now() -> DateTime<Utc> {
    date("2024-01-01T00:00:00.000Z")
}

fn mount(element: CountingElement, mode: CommitMode) -> Field {
    DateField::mount(
        element,
        Recorder,
        StrftimeFormatter,
        FieldConfig::new(mode),
        now(),
    )
}

/// Digs the field container out of a deferred render.
fn deferred_parts(node: &Rendered) -> (&Resolved, &[Rendered]) {
    let Node::Touchable { target, child } = node else {
        panic!("deferred field must render as a touchable, got {node:?}");
    };
    assert_eq!(*target, PressTarget::Field);
    let Node::View { props, children, .. } = child.as_ref() else {
        panic!("touchable must wrap the field container");
    };
    (
        props.as_ref().expect("field container carries props"),
        children.as_slice(),
    )
}

fn label_of(node: &Rendered) -> (&str, Option<&str>) {
    let (_, children) = deferred_parts(node);
    let Node::Text { content, color, .. } = &children[0] else {
        panic!("label must be the container's first child");
    };
    (content.as_str(), color.as_deref())
}

fn modal_of(node: &Rendered) -> (bool, &[Rendered]) {
    let (_, children) = deferred_parts(node);
    let Node::Modal { visible, children, .. } = &children[1] else {
        panic!("modal must be the container's second child");
    };
    (*visible, children.as_slice())
}

#[test]
fn mount_with_valid_value_seeds_committed_and_pending() {
    let field = mount(
        CountingElement::with_value("2024-03-01T00:00:00.000Z"),
        CommitMode::Deferred,
    );

    let expected = date("2024-03-01T00:00:00.000Z");
    assert_eq!(field.committed(), Some(&expected));
    assert_eq!(field.pending(), &expected);
    assert!(!field.is_open());
}

#[test]
fn mount_with_invalid_value_falls_back_to_now() {
    let field = mount(
        CountingElement::with_value("not a date"),
        CommitMode::Deferred,
    );

    assert_eq!(field.committed(), None);
    assert_eq!(field.pending(), &now());
}

#[test]
fn mount_with_absent_value_falls_back_to_now() {
    let field = mount(CountingElement::default(), CommitMode::Deferred);

    assert_eq!(field.committed(), None);
    assert_eq!(field.pending(), &now());
}

#[test]
fn open_then_cancel_without_change_leaves_store_untouched() {
    let mut field = mount(
        CountingElement::with_value("2024-03-01T00:00:00.000Z"),
        CommitMode::Deferred,
    );

    field.handle(Interaction::Activate(PressTarget::Field));
    assert!(field.is_open());
    field.handle(Interaction::Activate(PressTarget::Cancel));

    assert!(!field.is_open());
    assert_eq!(field.committed(), Some(&date("2024-03-01T00:00:00.000Z")));
    assert_eq!(
        field.element().attribute(attr::VALUE),
        Some("2024-03-01T00:00:00.000Z")
    );
    assert_eq!(field.element().writes, 0);
}

#[test]
fn open_change_confirm_commits_and_writes_exactly_once() {
    let mut field = mount(
        CountingElement::with_value("2024-03-01T00:00:00.000Z"),
        CommitMode::Deferred,
    );

    field.handle(Interaction::Activate(PressTarget::Field));
    let picked = date("2024-04-15T00:00:00.000Z");
    assert_eq!(field.handle(Interaction::Change(picked)), None);
    assert_eq!(
        field.element().writes,
        0,
        "deferred changes must not reach the store"
    );

    let committed = field.handle(Interaction::Activate(PressTarget::Confirm));

    assert_eq!(committed, Some(picked));
    assert_eq!(field.committed(), Some(&picked));
    assert_eq!(
        field.element().attribute(attr::VALUE),
        Some("2024-04-15T00:00:00.000Z")
    );
    assert_eq!(field.element().writes, 1);

    // The label now shows the committed value through the formatter.
    let rendered = field.render().unwrap();
    assert_eq!(label_of(&rendered), ("2024-04-15", None));
}

#[test]
fn immediate_change_commits_without_any_modal() {
    let mut field = mount(CountingElement::default(), CommitMode::Immediate);
    assert!(!field.is_open());

    let picked = date("2024-04-15T00:00:00.000Z");
    let committed = field.handle(Interaction::Change(picked));

    assert_eq!(committed, Some(picked));
    assert!(!field.is_open(), "immediate mode never opens an overlay");
    assert_eq!(
        field.element().attribute(attr::VALUE),
        Some("2024-04-15T00:00:00.000Z")
    );
    assert_eq!(field.element().writes, 1);

    // And the rendered tree has no modal at all.
    let rendered = field.render().unwrap();
    let Node::View { children, .. } = &rendered else {
        panic!("immediate field must render as a plain container");
    };
    assert!(matches!(children[0], Node::Picker { .. }));
    assert_eq!(children.len(), 1);
}

#[test]
fn cancel_when_idle_is_a_noop() {
    let mut field = mount(
        CountingElement::with_value("2024-03-01T00:00:00.000Z"),
        CommitMode::Deferred,
    );

    field.handle(Interaction::Activate(PressTarget::Cancel));

    assert!(!field.is_open());
    assert_eq!(field.committed(), Some(&date("2024-03-01T00:00:00.000Z")));
    assert_eq!(field.element().writes, 0);
}

#[test]
fn placeholder_shows_while_uncommitted_and_store_stays_absent() {
    let mut element = CountingElement::default();
    element.inner.set_attribute(attr::PLACEHOLDER, "Select date");
    element
        .inner
        .set_attribute(attr::PLACEHOLDER_COLOR, "#999999");
    let mut field = mount(element, CommitMode::Deferred);

    field.handle(Interaction::Activate(PressTarget::Field));
    field.handle(Interaction::Activate(PressTarget::Cancel));

    let rendered = field.render().unwrap();
    assert_eq!(label_of(&rendered), ("Select date", Some("#999999")));
    assert_eq!(field.element().attribute(attr::VALUE), None);
    assert_eq!(field.element().writes, 0);
}

#[test]
fn placeholder_defaults_to_empty_string() {
    let field = mount(CountingElement::default(), CommitMode::Deferred);

    let rendered = field.render().unwrap();
    assert_eq!(label_of(&rendered), ("", None));
}

#[test]
fn hidden_deferred_field_renders_nothing() {
    let mut element = CountingElement::default();
    element.inner.set_attribute(attr::HIDE, "true");
    let field = mount(element, CommitMode::Deferred);

    assert_eq!(field.render(), None);
}

#[test]
fn modal_visibility_follows_the_editing_session() {
    let mut field = mount(CountingElement::default(), CommitMode::Deferred);

    let (visible, _) = modal_of(&field.render().unwrap());
    assert!(!visible);

    field.handle(Interaction::Activate(PressTarget::Field));
    let rendered = field.render().unwrap();
    let (visible, children) = modal_of(&rendered);
    assert!(visible);
    assert!(matches!(children[1], Node::Picker { .. }));

    field.handle(Interaction::DismissRequest);
    let (visible, _) = modal_of(&field.render().unwrap());
    assert!(!visible);
}

#[test]
fn field_press_feedback_reaches_the_field_props() {
    let mut field = mount(CountingElement::default(), CommitMode::Deferred);

    field.handle(Interaction::PressStart(PressTarget::Field));
    let rendered = field.render().unwrap();
    let (props, _) = deferred_parts(&rendered);
    assert_eq!(props.style_attr, attr::FIELD_STYLE);
    assert!(props.pressed);

    field.handle(Interaction::PressEnd(PressTarget::Field));
    let rendered = field.render().unwrap();
    let (props, _) = deferred_parts(&rendered);
    assert!(!props.pressed);
}

#[test]
fn open_session_marks_the_field_focused() {
    let mut field = mount(CountingElement::default(), CommitMode::Deferred);

    field.handle(Interaction::Activate(PressTarget::Field));
    let rendered = field.render().unwrap();
    let (props, _) = deferred_parts(&rendered);
    assert!(props.focused);
}

#[test]
fn discarded_edits_persist_into_the_next_session() {
    let mut field = mount(
        CountingElement::with_value("2024-03-01T00:00:00.000Z"),
        CommitMode::Deferred,
    );

    field.handle(Interaction::Activate(PressTarget::Field));
    let picked = date("2024-04-15T00:00:00.000Z");
    field.handle(Interaction::Change(picked));
    field.handle(Interaction::Activate(PressTarget::Cancel));

    // The discarded edit is still the pending value...
    assert_eq!(field.pending(), &picked);

    // ...so re-opening and confirming commits it.
    field.handle(Interaction::Activate(PressTarget::Field));
    let committed = field.handle(Interaction::Activate(PressTarget::Confirm));
    assert_eq!(committed, Some(picked));
    assert_eq!(field.element().writes, 1);
}

#[test]
fn injected_formatter_sees_the_format_attribute() {
    struct Tagging;

    impl DateFormatter for Tagging {
        fn format(&self, date: &DateTime<Utc>, pattern: Option<&str>) -> String {
            format!("{}|{}", date.format("%Y%m%d"), pattern.unwrap_or("none"))
        }
    }

    let mut element = CountingElement::with_value("2024-03-01T00:00:00.000Z");
    element.inner.set_attribute(attr::FORMAT, "%d %b %Y");
    let field = DateField::mount(
        element,
        Recorder,
        Tagging,
        FieldConfig::new(CommitMode::Deferred),
        now(),
    );

    let rendered = field.render().unwrap();
    let (content, _) = label_of(&rendered);
    assert_eq!(content, "20240301|%d %b %Y");
}

#[test]
fn picker_bounds_come_from_attributes_then_config() {
    let mut element = CountingElement::default();
    element.inner.set_attribute(attr::MIN, "2024-02-01");
    let mut config = FieldConfig::new(CommitMode::Deferred);
    config.maximum = Some(date("2030-01-01T00:00:00.000Z"));
    let field = DateField::mount(element, Recorder, StrftimeFormatter, config, now());

    let rendered = field.render().unwrap();
    let (_, modal_children) = modal_of(&rendered);
    let Node::Picker { minimum, maximum, .. } = &modal_children[1] else {
        panic!("picker must sit under the actions row");
    };
    assert_eq!(*minimum, Some(date("2024-02-01T00:00:00.000Z")));
    assert_eq!(*maximum, Some(date("2030-01-01T00:00:00.000Z")));
}
