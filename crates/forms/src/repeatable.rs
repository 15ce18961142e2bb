//! Repeatable form sections (licenses, social media links).

use accredit_core::{StructureError, StructureResult};
use serde_json::Value;

use crate::group::FieldGroup;

/// Builds one fresh entry for a section.
pub type EntryTemplate = fn() -> FieldGroup;

/// An ordered, growable sequence of field-group entries.
///
/// Removal shifts every following entry down by one; there are never
/// gaps. Removing an out-of-range index is a caller bug and fails loudly.
#[derive(Debug)]
pub struct RepeatableSection {
    name: &'static str,
    template: EntryTemplate,
    entries: Vec<FieldGroup>,
}

impl RepeatableSection {
    pub fn new(name: &'static str, template: EntryTemplate) -> Self {
        Self {
            name,
            template,
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a fresh entry from the template; returns its index.
    pub fn append(&mut self) -> usize {
        self.entries.push((self.template)());
        self.entries.len() - 1
    }

    /// Remove the entry at `index`. The removed entry is never validated
    /// again; following entries shift down.
    pub fn remove_at(&mut self, index: usize) -> StructureResult<()> {
        if index >= self.entries.len() {
            return Err(StructureError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.entries.remove(index);
        Ok(())
    }

    pub fn entry(&self, index: usize) -> StructureResult<&FieldGroup> {
        self.entries.get(index).ok_or(StructureError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    pub fn entry_mut(&mut self, index: usize) -> StructureResult<&mut FieldGroup> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(StructureError::IndexOutOfRange { index, len })
    }

    pub fn entries(&self) -> &[FieldGroup] {
        &self.entries
    }

    /// All entries valid?
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|entry| entry.validate().group_valid)
    }

    pub fn mark_all_touched(&mut self) {
        for entry in &mut self.entries {
            entry.mark_all_touched();
        }
    }

    /// Payload as a JSON array of per-entry objects. Single-field entries
    /// collapse to the bare value (a list of links serializes as strings,
    /// not one-key objects).
    pub fn raw_value(&self) -> Value {
        let items: Vec<Value> = self
            .entries
            .iter()
            .map(|entry| {
                let mut object = entry.raw_value();
                if object.len() == 1 {
                    object.values_mut().next().map(Value::take).unwrap_or(Value::Null)
                } else {
                    Value::Object(object)
                }
            })
            .collect();
        Value::Array(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    fn link_template() -> FieldGroup {
        FieldGroup::new(vec![Field::text("link").required()])
    }

    fn license_template() -> FieldGroup {
        FieldGroup::new(vec![
            Field::text("licensingNumber").required(),
            Field::text("agency").required(),
            Field::date("dateIssued").required(),
            Field::date("expiration"),
        ])
    }

    #[test]
    fn append_returns_successive_indices() {
        let mut section = RepeatableSection::new("socialMediaLinks", link_template);
        assert_eq!(section.append(), 0);
        assert_eq!(section.append(), 1);
        assert_eq!(section.len(), 2);
    }

    #[test]
    fn removal_shifts_following_entries_down() {
        let mut section = RepeatableSection::new("socialMediaLinks", link_template);
        for text in ["a", "b", "c"] {
            let idx = section.append();
            section.entry_mut(idx).unwrap().set_value("link", text).unwrap();
        }

        section.remove_at(1).unwrap();
        assert_eq!(section.len(), 2);
        assert_eq!(section.entry(0).unwrap().text_of("link"), "a");
        assert_eq!(section.entry(1).unwrap().text_of("link"), "c");
    }

    #[test]
    fn out_of_range_removal_fails_loudly() {
        let mut section = RepeatableSection::new("licenses", license_template);
        section.append();
        assert_eq!(
            section.remove_at(3),
            Err(StructureError::IndexOutOfRange { index: 3, len: 1 })
        );
        // The section is untouched by the failed call.
        assert_eq!(section.len(), 1);
    }

    #[test]
    fn removing_an_invalid_entry_restores_validity() {
        let mut section = RepeatableSection::new("socialMediaLinks", link_template);
        section.append();
        assert!(!section.is_valid()); // required link empty
        section.remove_at(0).unwrap();
        assert!(section.is_valid());
    }

    #[test]
    fn single_field_entries_flatten_in_the_payload() {
        let mut section = RepeatableSection::new("socialMediaLinks", link_template);
        let idx = section.append();
        section
            .entry_mut(idx)
            .unwrap()
            .set_value("link", "https://example.com/biz")
            .unwrap();
        assert_eq!(
            section.raw_value(),
            serde_json::json!(["https://example.com/biz"])
        );
    }

    #[test]
    fn multi_field_entries_stay_objects() {
        let mut section = RepeatableSection::new("licenses", license_template);
        let idx = section.append();
        let entry = section.entry_mut(idx).unwrap();
        entry.set_value("licensingNumber", "L-100").unwrap();
        entry.set_value("agency", "State Board").unwrap();

        let payload = section.raw_value();
        assert_eq!(payload[0]["licensingNumber"], "L-100");
        assert_eq!(payload[0]["agency"], "State Board");
    }
}
