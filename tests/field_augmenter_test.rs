//! Integration tests for field augmentation
//!
//! Runs the augmenter against a fake document that records every call the
//! augmenter makes on the field, so the DOM-side contract is checked without
//! a real page:
//! 1. Absent target field -> nothing happens
//! 2. Present field -> hidden, control mounted after it, seeded with its value
//! 3. Selecting a candidate -> field value becomes the candidate value

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use dirpick::api::DirectoryEntry;
use dirpick::field::{Document, FieldBinding};
use dirpick::form::{Form, FormItem};
use dirpick::logic::candidate::SelectOption;
use dirpick::services::SearchResult;
use dirpick::{AugmenterConfig, FieldAugmenter};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Value,
    SetValue(String),
    Hide,
    InsertAfter(String),
}

#[derive(Debug, Default)]
struct FakeFieldState {
    value: String,
    calls: Vec<Call>,
}

#[derive(Debug, Clone)]
struct FakeField {
    state: Rc<RefCell<FakeFieldState>>,
}

impl FieldBinding for FakeField {
    fn value(&self) -> String {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Value);
        state.value.clone()
    }

    fn set_value(&self, value: &str) {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::SetValue(value.to_string()));
        state.value = value.to_string();
    }

    fn hide(&self) {
        self.state.borrow_mut().calls.push(Call::Hide);
    }

    fn insert_after(&self, control_id: &str) {
        self.state
            .borrow_mut()
            .calls
            .push(Call::InsertAfter(control_id.to_string()));
    }
}

#[derive(Default)]
struct FakeDocument {
    fields: HashMap<String, Rc<RefCell<FakeFieldState>>>,
}

impl FakeDocument {
    fn with_field(id: &str, value: &str) -> Self {
        let mut doc = Self::default();
        doc.fields.insert(
            id.to_string(),
            Rc::new(RefCell::new(FakeFieldState {
                value: value.to_string(),
                calls: Vec::new(),
            })),
        );
        doc
    }

    fn calls(&self, id: &str) -> Vec<Call> {
        self.fields[id].borrow().calls.clone()
    }

    fn value(&self, id: &str) -> String {
        self.fields[id].borrow().value.clone()
    }
}

impl Document for FakeDocument {
    type Field = FakeField;

    fn field(&self, id: &str) -> Option<FakeField> {
        self.fields.get(id).map(|state| FakeField {
            state: Rc::clone(state),
        })
    }
}

fn augmenter() -> FieldAugmenter {
    FieldAugmenter::new(AugmenterConfig::default())
}

fn respond(seq: u64, term: &str, ids: &[&str]) -> SearchResult {
    SearchResult {
        seq,
        term: term.to_string(),
        entries: Ok(ids.iter().map(|id| DirectoryEntry::new(*id)).collect()),
    }
}

/// Test: missing target field is a silent no-op
#[test]
fn test_missing_target_is_noop() {
    let doc = FakeDocument::with_field("id_description", "Build team");

    assert!(augmenter().initialize(&doc).is_none());
    assert!(doc.calls("id_description").is_empty(), "Unrelated field must be untouched");
}

/// Test: empty document is a silent no-op
#[test]
fn test_empty_document_is_noop() {
    let doc = FakeDocument::default();
    assert!(augmenter().initialize(&doc).is_none());
}

/// Test: current value seeds the control with label == value
#[test]
fn test_seeds_current_value() {
    let doc = FakeDocument::with_field("id_name", "Engineers");

    let control = augmenter().initialize(&doc).expect("field exists");

    assert_eq!(control.selection(), Some(&SelectOption::plain("Engineers")));
    assert_eq!(control.selection().unwrap().label, "Engineers");
    assert_eq!(control.selection().unwrap().value, "Engineers");
}

/// Test: seeding round-trips arbitrary non-empty values
#[test]
fn test_seed_round_trips_values() {
    for value in ["Domain Admins", "TI-Support", "x", "  padded  ", "Équipe"] {
        let doc = FakeDocument::with_field("id_name", value);
        let control = augmenter().initialize(&doc).unwrap();

        let selection = control.selection().unwrap();
        assert_eq!(selection.label, value);
        assert_eq!(selection.value, value);
    }
}

/// Test: empty value leaves the control without a selection
#[test]
fn test_empty_value_not_seeded() {
    let doc = FakeDocument::with_field("id_name", "");

    let control = augmenter().initialize(&doc).unwrap();

    assert!(control.selection().is_none());
    assert_eq!(control.placeholder(), "Type to search for a directory group...");
}

/// Test: field is read once, hidden, then the control mounted after it; no writes
#[test]
fn test_dom_mutation_sequence() {
    let doc = FakeDocument::with_field("id_name", "Engineers");

    let control = augmenter().initialize(&doc).unwrap();

    assert_eq!(
        doc.calls("id_name"),
        vec![
            Call::Value,
            Call::Hide,
            Call::InsertAfter("id_name_picker".to_string()),
        ]
    );
    assert_eq!(control.id(), "id_name_picker");
}

/// Test: configurable target identifier
#[test]
fn test_custom_target_field() {
    let doc = FakeDocument::with_field("id_group", "Admins");
    let config = AugmenterConfig {
        target_field: "id_group".to_string(),
        ..AugmenterConfig::default()
    };

    let control = FieldAugmenter::new(config).initialize(&doc).unwrap();
    assert_eq!(control.id(), "id_group_picker");
    assert!(augmenter().initialize(&doc).is_none(), "Default target is absent here");
}

/// Test: selecting a candidate writes its value, never its display label
#[test]
fn test_selection_writes_value_not_label() {
    let start = Instant::now();
    let doc = FakeDocument::with_field("id_name", "");
    let mut control = augmenter().initialize(&doc).unwrap();

    control.on_input("en", start);
    let request = control.tick(start + Duration::from_millis(250)).unwrap();
    control.apply_result(respond(request.seq, "en", &["CN=Engineers,OU=Groups,DC=corp"]));

    let option = control.select_highlighted().unwrap();
    assert_eq!(option.label, "Engineers (CN=Engineers,OU=Groups,DC=corp)");
    assert_eq!(doc.value("id_name"), "Engineers");
    assert_eq!(
        doc.calls("id_name").last(),
        Some(&Call::SetValue("Engineers".to_string()))
    );
}

/// Test: typing and receiving results never writes the field
#[test]
fn test_no_write_without_selection() {
    let start = Instant::now();
    let doc = FakeDocument::with_field("id_name", "Engineers");
    let mut control = augmenter().initialize(&doc).unwrap();

    control.on_input("ad", start);
    let request = control.tick(start + Duration::from_millis(300)).unwrap();
    control.apply_result(respond(request.seq, "ad", &["CN=Domain Admins,CN=Users,DC=example,DC=com"]));

    assert_eq!(doc.value("id_name"), "Engineers");
    assert!(!doc
        .calls("id_name")
        .iter()
        .any(|c| matches!(c, Call::SetValue(_))));
}

/// Test: the host form submits the hidden field with the selected value
#[test]
fn test_form_submits_selected_value() {
    let start = Instant::now();
    let form = Form::new();
    form.add_field("id_name", "Name", "Engineers");
    form.add_field("id_description", "Description", "");

    let mut control = augmenter().initialize(&form).unwrap();

    // Picker replaces the field in page order
    let items = form.items();
    assert_eq!(items[0], FormItem::Control("id_name_picker".to_string()));

    // Untouched form submits the pre-augmentation value
    assert_eq!(form.submit()[0].value, "Engineers");

    control.on_input("ad", start);
    let request = control.tick(start + Duration::from_millis(250)).unwrap();
    control.apply_result(respond(
        request.seq,
        "ad",
        &[
            "CN=Domain Admins,CN=Users,DC=example,DC=com",
            "CN=Enterprise Admins,CN=Users,DC=example,DC=com",
        ],
    ));
    control.highlight_next();
    control.select_highlighted().unwrap();

    let submitted = form.submit();
    assert_eq!(submitted[0].id, "id_name");
    assert_eq!(submitted[0].value, "Enterprise Admins");
}
