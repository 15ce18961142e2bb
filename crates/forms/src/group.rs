//! Field groups: ordered fields, conditional rules, group validators.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};

use accredit_core::{FieldValue, StructureError, StructureResult};

use crate::constraint;
use crate::field::Field;
use crate::rules::{ConditionalRule, PatchOp, Predicate};

/// Cascade passes allowed before declaring the rule set non-settling.
const MAX_CASCADE_PASSES: usize = 8;

/// Result of one group-level validator run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GroupOutcome {
    /// Synthetic errors attached to specific fields (merged into, never
    /// replacing, the fields' own constraint errors).
    pub field_errors: Vec<(&'static str, &'static str)>,
    pub group_errors: Vec<&'static str>,
}

/// A validator that inspects multiple fields at once.
pub type GroupValidator = fn(&FieldGroup) -> GroupOutcome;

/// Snapshot of a group's validity.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidityReport {
    /// Error keys per invalid field; valid fields have no entry.
    pub field_errors: BTreeMap<String, BTreeSet<&'static str>>,
    pub group_errors: BTreeSet<&'static str>,
    pub group_valid: bool,
    /// First invalid field: touched ones first, then declaration order.
    pub first_invalid: Option<String>,
}

impl ValidityReport {
    pub fn is_field_invalid(&self, name: &str) -> bool {
        self.field_errors.contains_key(name)
    }
}

/// An ordered mapping from field name to field, plus the conditional
/// rules and group validators registered at construction.
#[derive(Debug, Default)]
pub struct FieldGroup {
    fields: Vec<Field>,
    rules: Vec<ConditionalRule>,
    validators: Vec<GroupValidator>,
    /// Synthetic per-field errors from the last group-validator run.
    synthetic: BTreeMap<&'static str, BTreeSet<&'static str>>,
    group_errors: BTreeSet<&'static str>,
}

impl FieldGroup {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Register a conditional rule. Rules are evaluated in registration
    /// order and never expire.
    pub fn add_rule(&mut self, rule: ConditionalRule) {
        self.rules.push(rule);
    }

    pub fn add_validator(&mut self, validator: GroupValidator) {
        self.validators.push(validator);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn index_of(&self, name: &str) -> StructureResult<usize> {
        self.fields
            .iter()
            .position(|f| f.name() == name)
            .ok_or_else(|| StructureError::UnknownField(name.to_string()))
    }

    pub fn field(&self, name: &str) -> StructureResult<&Field> {
        self.index_of(name).map(|i| &self.fields[i])
    }

    pub fn value(&self, name: &str) -> StructureResult<&FieldValue> {
        self.field(name).map(Field::value)
    }

    /// Trimmed text of a field; empty for unknown names or non-text
    /// values. Convenience for group validators.
    pub fn text_of(&self, name: &str) -> &str {
        self.field(name)
            .map(|f| f.value().text_trimmed())
            .unwrap_or("")
    }

    /// Set a field's value, cascade conditional rules to a fixed point,
    /// then re-run group validators.
    ///
    /// Group validators run only after every constraint patch from this
    /// change has been applied, so a patch is never overwritten by a
    /// stale re-evaluation.
    pub fn set_value(&mut self, name: &str, value: impl Into<FieldValue>) -> StructureResult<()> {
        let idx = self.index_of(name)?;
        self.fields[idx].set_value(value.into());
        self.fields[idx].set_dirty(true);

        self.cascade(name)?;
        self.run_group_validators();
        Ok(())
    }

    /// Mark a field touched (e.g. on blur).
    pub fn touch(&mut self, name: &str) -> StructureResult<()> {
        let idx = self.index_of(name)?;
        self.fields[idx].set_touched(true);
        Ok(())
    }

    /// Mark every field touched so deferred errors become visible.
    pub fn mark_all_touched(&mut self) {
        for field in &mut self.fields {
            field.set_touched(true);
        }
    }

    /// Re-evaluate rules triggered by `changed` until no rule changes a
    /// value any more.
    fn cascade(&mut self, changed: &str) -> StructureResult<()> {
        let mut pending: BTreeSet<String> = BTreeSet::from([changed.to_string()]);
        let mut passes = 0;

        while !pending.is_empty() {
            passes += 1;
            if passes > MAX_CASCADE_PASSES {
                return Err(StructureError::CascadeDidNotSettle(MAX_CASCADE_PASSES));
            }

            let triggered: Vec<usize> = self
                .rules
                .iter()
                .enumerate()
                .filter(|(_, rule)| pending.iter().any(|name| rule.watches(name)))
                .map(|(i, _)| i)
                .collect();
            pending.clear();

            for rule_idx in triggered {
                let rule = self.rules[rule_idx].clone();
                let ops = if self.eval_predicate(&rule.predicate) {
                    rule.on_true
                } else {
                    rule.on_false
                };
                for op in ops {
                    if let Some(value_changed) = self.apply_op(&op) {
                        pending.insert(value_changed.to_string());
                    }
                }
            }
        }
        Ok(())
    }

    fn eval_predicate(&self, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::IsTrue(name) => {
                self.field(name).map(|f| f.value().as_bool()).unwrap_or(false)
            }
            Predicate::AnyNonEmpty(names) => names
                .iter()
                .any(|name| self.field(name).is_ok_and(|f| !f.value().is_blank())),
            Predicate::NonEmpty(name) => {
                self.field(name).is_ok_and(|f| !f.value().is_blank())
            }
        }
    }

    /// Apply a single patch; returns the target field's name when its
    /// *value* actually changed (constraint/mark/disable changes do not
    /// re-trigger rules).
    fn apply_op(&mut self, op: &PatchOp) -> Option<&'static str> {
        match op {
            PatchOp::SetConstraints(name, constraints) => {
                if let Ok(idx) = self.index_of(name) {
                    self.fields[idx].set_constraints(constraints.clone());
                }
                None
            }
            PatchOp::ClearValue(name) => {
                let idx = self.index_of(name).ok()?;
                let cleared = self.fields[idx].cleared_value();
                self.replace_value(idx, cleared)
            }
            PatchOp::CopyValue { from, to } => {
                let value = self.field(from).ok()?.value().clone();
                let idx = self.index_of(to).ok()?;
                self.replace_value(idx, value)
            }
            PatchOp::CopyFullName { first, last, to } => {
                let full = [self.text_of(first), self.text_of(last)]
                    .iter()
                    .filter(|part| !part.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" ");
                let idx = self.index_of(to).ok()?;
                self.replace_value(idx, FieldValue::Text(full))
            }
            PatchOp::RemoveListValue { value_of, from } => {
                let needle = self.text_of(value_of).to_string();
                if needle.is_empty() {
                    return None;
                }
                let idx = self.index_of(from).ok()?;
                let Some(items) = self.fields[idx].value().as_list() else {
                    return None;
                };
                if !items.iter().any(|item| *item == needle) {
                    return None;
                }
                let kept: Vec<String> =
                    items.iter().filter(|item| **item != needle).cloned().collect();
                self.replace_value(idx, FieldValue::List(kept))
            }
            PatchOp::Disable(name) => {
                if let Ok(idx) = self.index_of(name) {
                    self.fields[idx].set_disabled(true);
                }
                None
            }
            PatchOp::Enable(name) => {
                if let Ok(idx) = self.index_of(name) {
                    self.fields[idx].set_disabled(false);
                }
                None
            }
            PatchOp::MarkTouched(name) => {
                if let Ok(idx) = self.index_of(name) {
                    self.fields[idx].set_touched(true);
                    self.fields[idx].set_dirty(true);
                }
                None
            }
            PatchOp::MarkPristine(name) => {
                if let Ok(idx) = self.index_of(name) {
                    self.fields[idx].set_touched(false);
                    self.fields[idx].set_dirty(false);
                }
                None
            }
        }
    }

    fn replace_value(&mut self, idx: usize, value: FieldValue) -> Option<&'static str> {
        if *self.fields[idx].value() == value {
            return None;
        }
        self.fields[idx].set_value(value);
        Some(self.fields[idx].name())
    }

    fn run_group_validators(&mut self) {
        self.synthetic.clear();
        self.group_errors.clear();
        for validator in &self.validators {
            let outcome = validator(self);
            for (field, key) in outcome.field_errors {
                self.synthetic.entry(field).or_default().insert(key);
            }
            self.group_errors.extend(outcome.group_errors);
        }
    }

    /// Compute the group's validity. Pure: no side effects beyond what
    /// `set_value` already caused.
    pub fn validate(&self) -> ValidityReport {
        let mut field_errors: BTreeMap<String, BTreeSet<&'static str>> = BTreeMap::new();
        for field in &self.fields {
            if field.disabled() {
                continue;
            }
            let mut errors = constraint::check(field.value(), field.constraints());
            if let Some(extra) = self.synthetic.get(field.name()) {
                errors.extend(extra.iter().copied());
            }
            if !errors.is_empty() {
                field_errors.insert(field.name().to_string(), errors);
            }
        }

        let group_valid = field_errors.is_empty() && self.group_errors.is_empty();
        let first_invalid = self.first_invalid_name(&field_errors);

        ValidityReport {
            field_errors,
            group_errors: self.group_errors.clone(),
            group_valid,
            first_invalid,
        }
    }

    /// Touched invalid fields take priority, then any invalid field, both
    /// in declaration order.
    fn first_invalid_name(
        &self,
        field_errors: &BTreeMap<String, BTreeSet<&'static str>>,
    ) -> Option<String> {
        let invalid = |f: &&Field| field_errors.contains_key(f.name());
        self.fields
            .iter()
            .filter(invalid)
            .find(|f| f.touched())
            .or_else(|| self.fields.iter().find(invalid))
            .map(|f| f.name().to_string())
    }

    /// The raw submit payload: every field by name, disabled included.
    pub fn raw_value(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|f| {
                let json = serde_json::to_value(f.value()).unwrap_or(Value::Null);
                (f.name().to_string(), json)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{Constraint, keys};

    fn simple_group() -> FieldGroup {
        FieldGroup::new(vec![
            Field::text("first").required(),
            Field::text("second").email(),
            Field::text("third"),
        ])
    }

    #[test]
    fn unknown_field_fails_loudly() {
        let mut group = simple_group();
        let err = group.set_value("nope", "x").unwrap_err();
        assert_eq!(err, StructureError::UnknownField("nope".to_string()));
    }

    #[test]
    fn required_field_reported_invalid_iff_blank() {
        let mut group = simple_group();
        assert!(group.validate().is_field_invalid("first"));

        group.set_value("first", "Acme").unwrap();
        assert!(!group.validate().is_field_invalid("first"));

        group.set_value("first", "   ").unwrap();
        assert!(group.validate().is_field_invalid("first"));
    }

    #[test]
    fn first_invalid_follows_declaration_order() {
        let mut group = FieldGroup::new(vec![
            Field::text("a").required(),
            Field::text("b").required(),
        ]);
        assert_eq!(group.validate().first_invalid.as_deref(), Some("a"));

        group.set_value("a", "done").unwrap();
        assert_eq!(group.validate().first_invalid.as_deref(), Some("b"));
    }

    #[test]
    fn touched_invalid_fields_take_priority() {
        let mut group = FieldGroup::new(vec![
            Field::text("a").required(),
            Field::text("b").required(),
        ]);
        group.touch("b").unwrap();
        assert_eq!(group.validate().first_invalid.as_deref(), Some("b"));
    }

    #[test]
    fn rules_fire_only_for_watched_fields() {
        let mut group = FieldGroup::new(vec![
            Field::checkbox("toggle", false),
            Field::text("target"),
        ]);
        group.add_rule(ConditionalRule {
            watched: &["toggle"],
            predicate: Predicate::IsTrue("toggle"),
            on_true: vec![PatchOp::SetConstraints("target", vec![Constraint::Required])],
            on_false: vec![PatchOp::SetConstraints("target", vec![])],
        });

        // Changing an unwatched field leaves constraints alone.
        group.set_value("target", "").unwrap();
        assert!(group.validate().group_valid);

        group.set_value("toggle", true).unwrap();
        assert!(group.validate().is_field_invalid("target"));

        group.set_value("toggle", false).unwrap();
        assert!(group.validate().group_valid);
    }

    #[test]
    fn disabled_fields_are_excluded_from_validation_but_kept_in_payload() {
        let mut group = FieldGroup::new(vec![Field::text("locked").required()]);
        group.fields[0].set_disabled(true);

        assert!(group.validate().group_valid);
        assert!(group.raw_value().contains_key("locked"));
    }

    #[test]
    fn group_validator_errors_merge_into_field_errors() {
        fn always_flag_second(_group: &FieldGroup) -> GroupOutcome {
            GroupOutcome {
                field_errors: vec![("second", keys::DUPLICATE_WITH_PRIMARY)],
                group_errors: vec![keys::DUPLICATE_PRIMARY_SECONDARY],
            }
        }

        let mut group = simple_group();
        group.add_validator(always_flag_second);
        group.set_value("second", "not-an-email").unwrap();

        let report = group.validate();
        let errors = &report.field_errors["second"];
        // Merged: the constraint error and the synthetic error coexist.
        assert!(errors.contains(keys::EMAIL));
        assert!(errors.contains(keys::DUPLICATE_WITH_PRIMARY));
        assert!(report.group_errors.contains(keys::DUPLICATE_PRIMARY_SECONDARY));
    }

    #[test]
    fn cascade_chains_settle() {
        // a -> clears b; b -> clears c. Setting a must ripple to c.
        let mut group = FieldGroup::new(vec![
            Field::text("a"),
            Field::text("b"),
            Field::text("c"),
        ]);
        group.set_value("b", "bee").unwrap();
        group.set_value("c", "cee").unwrap();
        group.add_rule(ConditionalRule {
            watched: &["a"],
            predicate: Predicate::NonEmpty("a"),
            on_true: vec![PatchOp::ClearValue("b")],
            on_false: vec![],
        });
        group.add_rule(ConditionalRule {
            watched: &["b"],
            predicate: Predicate::NonEmpty("b"),
            on_true: vec![],
            on_false: vec![PatchOp::ClearValue("c")],
        });

        group.set_value("a", "trigger").unwrap();
        assert!(group.value("b").unwrap().is_blank());
        assert!(group.value("c").unwrap().is_blank());
    }

    #[test]
    fn non_settling_rules_error_out() {
        // A rule that rewrites its own watched field oscillates forever:
        // non-empty clears it, empty refills it from the seed.
        let mut group = FieldGroup::new(vec![Field::text("x"), Field::text("y")]);
        group.set_value("y", "seed").unwrap();
        group.add_rule(ConditionalRule {
            watched: &["x"],
            predicate: Predicate::NonEmpty("x"),
            on_true: vec![PatchOp::ClearValue("x")],
            on_false: vec![PatchOp::CopyValue { from: "y", to: "x" }],
        });

        let result = group.set_value("x", "ping");
        assert_eq!(
            result,
            Err(StructureError::CascadeDidNotSettle(MAX_CASCADE_PASSES))
        );
    }
}
