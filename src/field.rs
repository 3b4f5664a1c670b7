//! Field binding
//!
//! The narrow capability the augmenter needs from a page: find a field by
//! identifier, read and write its value, hide it, and mount a control after it.

/// Handle onto a text field owned by a document.
///
/// Methods take `&self`; the document owns the field state and a binding
/// only refers to it, the way an element reference does.
pub trait FieldBinding {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    fn hide(&self);
    /// Mount a control, identified by `control_id`, as the next sibling
    fn insert_after(&self, control_id: &str);
}

/// A page holding fields addressable by stable identifier
pub trait Document {
    type Field: FieldBinding;

    fn field(&self, id: &str) -> Option<Self::Field>;
}
