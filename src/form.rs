//! Host form
//!
//! A one-page form whose fields the augmenter can bind to. Field state lives
//! behind a shared cell so bindings handed out to controls stay live.

use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

use crate::field::{Document, FieldBinding};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub id: String,
    pub label: String,
    pub value: String,
    pub hidden: bool,
}

/// A control mounted after a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedControl {
    pub control_id: String,
    pub after_field: usize,
}

#[derive(Debug, Default)]
struct FormState {
    fields: Vec<FieldState>,
    controls: Vec<MountedControl>,
}

/// One submitted name/value pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedField {
    pub id: String,
    pub value: String,
}

/// Page-level item in render order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormItem {
    Field(FieldState),
    Control(String),
}

#[derive(Debug, Clone, Default)]
pub struct Form {
    state: Rc<RefCell<FormState>>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_field(&self, id: &str, label: &str, value: &str) {
        self.state.borrow_mut().fields.push(FieldState {
            id: id.to_string(),
            label: label.to_string(),
            value: value.to_string(),
            hidden: false,
        });
    }

    pub fn label(&self, id: &str) -> Option<String> {
        self.state
            .borrow()
            .fields
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.label.clone())
    }

    /// Visible fields and mounted controls in page order
    pub fn items(&self) -> Vec<FormItem> {
        let state = self.state.borrow();
        let mut items = Vec::new();

        for (index, field) in state.fields.iter().enumerate() {
            if !field.hidden {
                items.push(FormItem::Field(field.clone()));
            }
            for control in state.controls.iter().filter(|c| c.after_field == index) {
                items.push(FormItem::Control(control.control_id.clone()));
            }
        }

        items
    }

    /// Values the form would submit. Hidden fields are included; controls are not.
    pub fn submit(&self) -> Vec<SubmittedField> {
        self.state
            .borrow()
            .fields
            .iter()
            .map(|f| SubmittedField {
                id: f.id.clone(),
                value: f.value.clone(),
            })
            .collect()
    }
}

impl Document for Form {
    type Field = FormField;

    fn field(&self, id: &str) -> Option<FormField> {
        let index = self.state.borrow().fields.iter().position(|f| f.id == id)?;
        Some(FormField {
            state: Rc::clone(&self.state),
            index,
        })
    }
}

/// Binding to one field of a [`Form`]
#[derive(Debug, Clone)]
pub struct FormField {
    state: Rc<RefCell<FormState>>,
    index: usize,
}

impl FieldBinding for FormField {
    fn value(&self) -> String {
        self.state.borrow().fields[self.index].value.clone()
    }

    fn set_value(&self, value: &str) {
        self.state.borrow_mut().fields[self.index].value = value.to_string();
    }

    fn hide(&self) {
        self.state.borrow_mut().fields[self.index].hidden = true;
    }

    fn insert_after(&self, control_id: &str) {
        let mut state = self.state.borrow_mut();
        // Directly after the field: ahead of anything mounted there earlier
        let insert_pos = state
            .controls
            .iter()
            .position(|c| c.after_field == self.index)
            .unwrap_or(state.controls.len());
        state.controls.insert(
            insert_pos,
            MountedControl {
                control_id: control_id.to_string(),
                after_field: self.index,
            },
        );
    }
}
