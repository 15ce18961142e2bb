//! The accreditation intake form.
//!
//! Declares every field with its initial constraints, wires the six
//! cross-field cascade policies, and owns submission: copy-on-submit of
//! the business address, full validation, and first-invalid-field
//! resolution for the failure message.

use serde_json::Value;
use tracing::debug;

use accredit_core::{FieldValue, StructureResult, normalize_email, normalize_phone};
use accredit_gateway::models::TobItem;

use crate::catalog::TobPicker;
use crate::constraint::{Constraint, Pattern, keys};
use crate::field::Field;
use crate::group::{FieldGroup, GroupOutcome};
use crate::repeatable::RepeatableSection;
use crate::rules::{ConditionalRule, PatchOp, Predicate};
use crate::wizard::{Wizard, step_title};

/// Field names, as the backend payload spells them.
pub mod names {
    // Step 1: business information
    pub const BUSINESS_NAME: &str = "businessName";
    pub const DOING_BUSINESS_AS: &str = "doingBusinessAs";
    pub const BUSINESS_ADDRESS: &str = "businessAddress";
    pub const BUSINESS_APT_SUITE: &str = "businessAptSuite";
    pub const BUSINESS_STATE: &str = "businessState";
    pub const BUSINESS_CITY: &str = "businessCity";
    pub const BUSINESS_ZIP: &str = "businessZip";
    pub const SAME_AS_BUSINESS_ADDRESS: &str = "sameAsBusinessAddress";
    pub const MAILING_ADDRESS: &str = "mailingAddress";
    pub const MAILING_APT_SUITE: &str = "mailingAptSuite";
    pub const MAILING_CITY: &str = "mailingCity";
    pub const MAILING_STATE: &str = "mailingState";
    pub const MAILING_ZIP: &str = "mailingZip";
    pub const HAS_MULTIPLE_LOCATIONS: &str = "hasMultipleLocations";
    pub const NUMBER_OF_LOCATIONS: &str = "numberOfLocations";

    // Step 2: contact information
    pub const PRIMARY_BUSINESS_PHONE: &str = "primaryBusinessPhone";
    pub const PRIMARY_BUSINESS_EMAIL: &str = "primaryBusinessEmail";
    pub const QUOTE_REQUEST_EMAIL: &str = "emailToReceiveQuoteRequestsFromCustomers";
    pub const WEBSITE: &str = "website";
    pub const PRIMARY_FIRST_NAME: &str = "primaryFirstName";
    pub const PRIMARY_LAST_NAME: &str = "primaryLastName";
    pub const PRIMARY_TITLE: &str = "primaryTitle";
    pub const PRIMARY_DATE_OF_BIRTH: &str = "primaryDateOfBirth";
    pub const PRIMARY_CONTACT_EMAIL: &str = "primaryContactEmail";
    pub const PRIMARY_CONTACT_NUMBER: &str = "primaryContactNumber";
    pub const PREFERRED_CONTACT_METHOD: &str = "preferredContactMethod";
    pub const PRIMARY_CONTACT_TYPES: &str = "primaryContactTypes";
    pub const SECONDARY_FIRST_NAME: &str = "secondaryFirstName";
    pub const SECONDARY_LAST_NAME: &str = "secondaryLastName";
    pub const SECONDARY_TITLE: &str = "secondaryTitle";
    pub const SECONDARY_EMAIL: &str = "secondaryEmail";
    pub const SECONDARY_CONTACT_TYPES: &str = "secondaryContactTypes";
    pub const SECONDARY_PHONE: &str = "secondaryPhone";
    pub const SECONDARY_PREFERRED_CONTACT_METHOD: &str = "secondaryPreferredContactMethod";

    // Step 3: business details and licensing
    pub const BUSINESS_DESCRIPTION: &str = "businessDescription";
    pub const BUSINESS_SERVICE_AREA: &str = "businessServiceArea";
    pub const EIN: &str = "ein";
    pub const BUSINESS_TYPE: &str = "businessType";
    pub const SECONDARY_BUSINESS_TYPES: &str = "secondaryBusinessTypes";
    pub const BUSINESS_ENTITY_TYPE: &str = "businessEntityType";
    pub const BUSINESS_START_DATE: &str = "businessStartDate";
    pub const FULL_TIME_EMPLOYEES: &str = "numberOfFullTimeEmployees";
    pub const PART_TIME_EMPLOYEES: &str = "numberOfPartTimeEmployees";
    pub const GROSS_ANNUAL_REVENUE: &str = "grossAnnualRevenue";
    pub const AVG_CUSTOMERS_PER_YEAR: &str = "avgCustomersPerYear";
    pub const ADDITIONAL_BUSINESS_INFORMATION: &str = "additionalBusinessInformation";

    // Step 4: agreement
    pub const PRINCIPAL_CONTACT_AGREEMENT: &str = "principalContactAgreement";
    pub const SUBMITTED_BY_NAME: &str = "submittedByName";
    pub const SUBMITTED_BY_TITLE: &str = "submittedByTitle";
    pub const SUBMITTED_BY_EMAIL: &str = "submittedByEmail";

    // Repeatable sections
    pub const SOCIAL_MEDIA_LINKS: &str = "socialMediaLinks";
    pub const LICENSES: &str = "licenses";
}

use names::*;

/// The five secondary contact text fields whose joint emptiness drives
/// the conditional requiredness of all of them.
const SECONDARY_TEXT_FIELDS: &[&str] = &[
    SECONDARY_FIRST_NAME,
    SECONDARY_LAST_NAME,
    SECONDARY_TITLE,
    SECONDARY_EMAIL,
    SECONDARY_PHONE,
];

const PRINCIPAL_MIRROR_SOURCES: &[&str] = &[
    PRIMARY_FIRST_NAME,
    PRIMARY_LAST_NAME,
    PRIMARY_TITLE,
    PRIMARY_CONTACT_EMAIL,
];

/// Which wizard step a field belongs to.
pub fn step_of(name: &str) -> Option<u8> {
    let step = match name {
        BUSINESS_NAME | DOING_BUSINESS_AS | BUSINESS_ADDRESS | BUSINESS_APT_SUITE
        | BUSINESS_STATE | BUSINESS_CITY | BUSINESS_ZIP | SAME_AS_BUSINESS_ADDRESS
        | MAILING_ADDRESS | MAILING_APT_SUITE | MAILING_CITY | MAILING_STATE | MAILING_ZIP
        | HAS_MULTIPLE_LOCATIONS | NUMBER_OF_LOCATIONS => 1,
        PRIMARY_BUSINESS_PHONE | PRIMARY_BUSINESS_EMAIL | QUOTE_REQUEST_EMAIL | WEBSITE
        | SOCIAL_MEDIA_LINKS | PRIMARY_FIRST_NAME | PRIMARY_LAST_NAME | PRIMARY_TITLE
        | PRIMARY_DATE_OF_BIRTH | PRIMARY_CONTACT_EMAIL | PRIMARY_CONTACT_NUMBER
        | PREFERRED_CONTACT_METHOD | PRIMARY_CONTACT_TYPES | SECONDARY_FIRST_NAME
        | SECONDARY_LAST_NAME | SECONDARY_TITLE | SECONDARY_EMAIL | SECONDARY_CONTACT_TYPES
        | SECONDARY_PHONE | SECONDARY_PREFERRED_CONTACT_METHOD => 2,
        BUSINESS_DESCRIPTION | BUSINESS_SERVICE_AREA | EIN | BUSINESS_TYPE
        | SECONDARY_BUSINESS_TYPES | BUSINESS_ENTITY_TYPE | BUSINESS_START_DATE | LICENSES
        | FULL_TIME_EMPLOYEES | PART_TIME_EMPLOYEES | GROSS_ANNUAL_REVENUE
        | AVG_CUSTOMERS_PER_YEAR | ADDITIONAL_BUSINESS_INFORMATION => 3,
        PRINCIPAL_CONTACT_AGREEMENT | SUBMITTED_BY_NAME | SUBMITTED_BY_TITLE
        | SUBMITTED_BY_EMAIL => 4,
        _ => return None,
    };
    Some(step)
}

/// Human-readable label for toasts and messages.
pub fn label_of(name: &str) -> &str {
    match name {
        BUSINESS_NAME => "Business Name",
        DOING_BUSINESS_AS => "Doing Business As",
        BUSINESS_ADDRESS => "Business Address",
        BUSINESS_APT_SUITE => "Business Apt/Suite",
        BUSINESS_STATE => "Business State",
        BUSINESS_CITY => "Business City",
        BUSINESS_ZIP => "Business ZIP Code",
        SAME_AS_BUSINESS_ADDRESS => "Mailing Address Same as Business Address",
        MAILING_ADDRESS => "Mailing Address",
        MAILING_APT_SUITE => "Mailing Apt/Suite",
        MAILING_CITY => "Mailing City",
        MAILING_STATE => "Mailing State",
        MAILING_ZIP => "Mailing ZIP Code",
        HAS_MULTIPLE_LOCATIONS => "Has Multiple Locations",
        NUMBER_OF_LOCATIONS => "Number of Locations",
        PRIMARY_BUSINESS_PHONE => "Primary Business Phone",
        PRIMARY_BUSINESS_EMAIL => "Primary Business Email",
        QUOTE_REQUEST_EMAIL => "Email to Receive Quote Requests",
        WEBSITE => "Website",
        PRIMARY_FIRST_NAME => "Primary First Name",
        PRIMARY_LAST_NAME => "Primary Last Name",
        PRIMARY_TITLE => "Primary Title",
        PRIMARY_DATE_OF_BIRTH => "Primary Date of Birth",
        PRIMARY_CONTACT_EMAIL => "Primary Contact Email",
        PRIMARY_CONTACT_NUMBER => "Primary Contact Number",
        PREFERRED_CONTACT_METHOD => "Preferred Contact Method",
        PRIMARY_CONTACT_TYPES => "Primary Contact Types",
        SECONDARY_FIRST_NAME => "Secondary First Name",
        SECONDARY_LAST_NAME => "Secondary Last Name",
        SECONDARY_TITLE => "Secondary Title",
        SECONDARY_EMAIL => "Secondary Email",
        SECONDARY_CONTACT_TYPES => "Secondary Contact Types",
        SECONDARY_PHONE => "Secondary Phone",
        SECONDARY_PREFERRED_CONTACT_METHOD => "Secondary Preferred Contact Method",
        BUSINESS_DESCRIPTION => "Business Description",
        BUSINESS_SERVICE_AREA => "Business Service Area",
        EIN => "EIN",
        BUSINESS_TYPE => "Type of Business",
        SECONDARY_BUSINESS_TYPES => "Secondary Business Types",
        BUSINESS_ENTITY_TYPE => "Business Entity Type",
        BUSINESS_START_DATE => "Business Start Date",
        FULL_TIME_EMPLOYEES => "Number of Full-Time Employees",
        PART_TIME_EMPLOYEES => "Number of Part-Time Employees",
        GROSS_ANNUAL_REVENUE => "Gross Annual Revenue",
        AVG_CUSTOMERS_PER_YEAR => "Average Customers Per Year",
        ADDITIONAL_BUSINESS_INFORMATION => "Additional Business Information",
        PRINCIPAL_CONTACT_AGREEMENT => "Principal Contact Agreement",
        SUBMITTED_BY_NAME => "Submitted By Name",
        SUBMITTED_BY_TITLE => "Submitted By Title",
        SUBMITTED_BY_EMAIL => "Submitted By Email",
        SOCIAL_MEDIA_LINKS => "Social Media Links",
        LICENSES => "Licenses",
        other => other,
    }
}

fn declare_fields() -> Vec<Field> {
    vec![
        // Business information
        Field::text(BUSINESS_NAME).required(),
        Field::text(DOING_BUSINESS_AS),
        Field::text(BUSINESS_ADDRESS).required(),
        Field::text(BUSINESS_APT_SUITE),
        Field::text(BUSINESS_STATE).required(),
        Field::text(BUSINESS_CITY).required(),
        Field::text(BUSINESS_ZIP).required(),
        Field::checkbox(SAME_AS_BUSINESS_ADDRESS, true),
        Field::text(MAILING_ADDRESS),
        Field::text(MAILING_APT_SUITE),
        Field::text(MAILING_CITY),
        Field::text(MAILING_STATE),
        Field::text(MAILING_ZIP),
        Field::checkbox(HAS_MULTIPLE_LOCATIONS, false),
        Field::text(NUMBER_OF_LOCATIONS),
        // Business contact information
        Field::text(PRIMARY_BUSINESS_PHONE).required().digits(10),
        Field::text(PRIMARY_BUSINESS_EMAIL).required().email(),
        Field::text(QUOTE_REQUEST_EMAIL),
        Field::text(WEBSITE),
        // Primary contact information
        Field::text(PRIMARY_FIRST_NAME).required(),
        Field::text(PRIMARY_LAST_NAME).required(),
        Field::text(PRIMARY_TITLE).required(),
        Field::date(PRIMARY_DATE_OF_BIRTH).required(),
        Field::text(PRIMARY_CONTACT_EMAIL).required().email(),
        Field::text(PRIMARY_CONTACT_NUMBER).required().digits(10),
        Field::text(PREFERRED_CONTACT_METHOD).required(),
        Field::list(PRIMARY_CONTACT_TYPES),
        // Secondary contact information: relaxed (format-only) until any
        // of its text fields is filled in.
        Field::text(SECONDARY_FIRST_NAME),
        Field::text(SECONDARY_LAST_NAME),
        Field::text(SECONDARY_TITLE),
        Field::text(SECONDARY_EMAIL).email(),
        Field::list(SECONDARY_CONTACT_TYPES),
        Field::text(SECONDARY_PHONE).digits(10),
        Field::text(SECONDARY_PREFERRED_CONTACT_METHOD),
        // Business details and licensing
        Field::text(BUSINESS_DESCRIPTION).required(),
        Field::text(BUSINESS_SERVICE_AREA).required(),
        Field::text(EIN),
        Field::text(BUSINESS_TYPE).required(),
        Field::list(SECONDARY_BUSINESS_TYPES),
        Field::text(BUSINESS_ENTITY_TYPE).required(),
        Field::date(BUSINESS_START_DATE).required(),
        // Business scale and operations
        Field::text(FULL_TIME_EMPLOYEES).required(),
        Field::text(PART_TIME_EMPLOYEES),
        Field::text(GROSS_ANNUAL_REVENUE).required(),
        Field::text(AVG_CUSTOMERS_PER_YEAR).required(),
        Field::text(ADDITIONAL_BUSINESS_INFORMATION),
        // Agreement
        Field::checkbox(PRINCIPAL_CONTACT_AGREEMENT, false),
        Field::text(SUBMITTED_BY_NAME).required(),
        Field::text(SUBMITTED_BY_TITLE).required(),
        Field::text(SUBMITTED_BY_EMAIL).required().email(),
    ]
}

fn mailing_address_rule() -> ConditionalRule {
    ConditionalRule {
        watched: &[SAME_AS_BUSINESS_ADDRESS],
        predicate: Predicate::IsTrue(SAME_AS_BUSINESS_ADDRESS),
        on_true: vec![
            PatchOp::SetConstraints(MAILING_ADDRESS, vec![]),
            PatchOp::SetConstraints(MAILING_CITY, vec![]),
            PatchOp::SetConstraints(MAILING_STATE, vec![]),
            PatchOp::SetConstraints(MAILING_ZIP, vec![]),
        ],
        on_false: vec![
            PatchOp::ClearValue(MAILING_ADDRESS),
            PatchOp::ClearValue(MAILING_APT_SUITE),
            PatchOp::ClearValue(MAILING_CITY),
            PatchOp::ClearValue(MAILING_STATE),
            PatchOp::ClearValue(MAILING_ZIP),
            PatchOp::SetConstraints(MAILING_ADDRESS, vec![Constraint::Required]),
            PatchOp::SetConstraints(MAILING_CITY, vec![Constraint::Required]),
            PatchOp::SetConstraints(MAILING_STATE, vec![Constraint::Required]),
            PatchOp::SetConstraints(MAILING_ZIP, vec![Constraint::Required]),
        ],
    }
}

fn multiple_locations_rule() -> ConditionalRule {
    ConditionalRule {
        watched: &[HAS_MULTIPLE_LOCATIONS],
        predicate: Predicate::IsTrue(HAS_MULTIPLE_LOCATIONS),
        on_true: vec![PatchOp::SetConstraints(
            NUMBER_OF_LOCATIONS,
            vec![Constraint::Required],
        )],
        on_false: vec![
            PatchOp::ClearValue(NUMBER_OF_LOCATIONS),
            PatchOp::SetConstraints(NUMBER_OF_LOCATIONS, vec![]),
        ],
    }
}

fn secondary_contact_rule() -> ConditionalRule {
    let required_email = vec![Constraint::Required, Constraint::Email];
    let required_phone = vec![
        Constraint::Required,
        Constraint::Pattern(Pattern::Digits(10)),
    ];
    ConditionalRule {
        watched: SECONDARY_TEXT_FIELDS,
        predicate: Predicate::AnyNonEmpty(SECONDARY_TEXT_FIELDS),
        on_true: vec![
            PatchOp::SetConstraints(SECONDARY_FIRST_NAME, vec![Constraint::Required]),
            PatchOp::SetConstraints(SECONDARY_LAST_NAME, vec![Constraint::Required]),
            PatchOp::SetConstraints(SECONDARY_TITLE, vec![Constraint::Required]),
            PatchOp::SetConstraints(SECONDARY_EMAIL, required_email),
            PatchOp::SetConstraints(SECONDARY_PHONE, required_phone),
            PatchOp::MarkTouched(SECONDARY_FIRST_NAME),
            PatchOp::MarkTouched(SECONDARY_LAST_NAME),
            PatchOp::MarkTouched(SECONDARY_TITLE),
            PatchOp::MarkTouched(SECONDARY_EMAIL),
            PatchOp::MarkTouched(SECONDARY_PHONE),
            PatchOp::SetConstraints(
                SECONDARY_PREFERRED_CONTACT_METHOD,
                vec![Constraint::Required],
            ),
            PatchOp::MarkTouched(SECONDARY_PREFERRED_CONTACT_METHOD),
        ],
        on_false: vec![
            PatchOp::SetConstraints(SECONDARY_FIRST_NAME, vec![]),
            PatchOp::SetConstraints(SECONDARY_LAST_NAME, vec![]),
            PatchOp::SetConstraints(SECONDARY_TITLE, vec![]),
            PatchOp::SetConstraints(SECONDARY_EMAIL, vec![Constraint::Email]),
            PatchOp::SetConstraints(
                SECONDARY_PHONE,
                vec![Constraint::Pattern(Pattern::Digits(10))],
            ),
            PatchOp::MarkPristine(SECONDARY_FIRST_NAME),
            PatchOp::MarkPristine(SECONDARY_LAST_NAME),
            PatchOp::MarkPristine(SECONDARY_TITLE),
            PatchOp::MarkPristine(SECONDARY_EMAIL),
            PatchOp::MarkPristine(SECONDARY_PHONE),
            PatchOp::SetConstraints(SECONDARY_PREFERRED_CONTACT_METHOD, vec![]),
            PatchOp::MarkPristine(SECONDARY_PREFERRED_CONTACT_METHOD),
        ],
    }
}

fn business_type_rule() -> ConditionalRule {
    ConditionalRule {
        watched: &[BUSINESS_TYPE],
        predicate: Predicate::NonEmpty(BUSINESS_TYPE),
        on_true: vec![PatchOp::RemoveListValue {
            value_of: BUSINESS_TYPE,
            from: SECONDARY_BUSINESS_TYPES,
        }],
        on_false: vec![PatchOp::ClearValue(SECONDARY_BUSINESS_TYPES)],
    }
}

fn principal_mirror_ops() -> Vec<PatchOp> {
    vec![
        PatchOp::CopyFullName {
            first: PRIMARY_FIRST_NAME,
            last: PRIMARY_LAST_NAME,
            to: SUBMITTED_BY_NAME,
        },
        PatchOp::CopyValue {
            from: PRIMARY_TITLE,
            to: SUBMITTED_BY_TITLE,
        },
        PatchOp::CopyValue {
            from: PRIMARY_CONTACT_EMAIL,
            to: SUBMITTED_BY_EMAIL,
        },
    ]
}

/// Toggling the agreement checkbox locks/unlocks the submitter fields.
fn principal_agreement_rule() -> ConditionalRule {
    let mut on_true = vec![
        PatchOp::Disable(SUBMITTED_BY_NAME),
        PatchOp::Disable(SUBMITTED_BY_TITLE),
        PatchOp::Disable(SUBMITTED_BY_EMAIL),
    ];
    on_true.extend(principal_mirror_ops());
    ConditionalRule {
        watched: &[PRINCIPAL_CONTACT_AGREEMENT],
        predicate: Predicate::IsTrue(PRINCIPAL_CONTACT_AGREEMENT),
        on_true,
        on_false: vec![
            PatchOp::Enable(SUBMITTED_BY_NAME),
            PatchOp::Enable(SUBMITTED_BY_TITLE),
            PatchOp::Enable(SUBMITTED_BY_EMAIL),
            PatchOp::ClearValue(SUBMITTED_BY_NAME),
            PatchOp::ClearValue(SUBMITTED_BY_TITLE),
            PatchOp::ClearValue(SUBMITTED_BY_EMAIL),
        ],
    }
}

/// While the agreement checkbox is checked, edits to the primary contact
/// keep flowing into the submitter fields. Unchecked, primary edits leave
/// the independently entered submitter fields alone.
fn principal_sync_rule() -> ConditionalRule {
    ConditionalRule {
        watched: PRINCIPAL_MIRROR_SOURCES,
        predicate: Predicate::IsTrue(PRINCIPAL_CONTACT_AGREEMENT),
        on_true: principal_mirror_ops(),
        on_false: vec![],
    }
}

/// Group validator: primary and secondary contact info must differ.
///
/// Duplicates land on the *secondary* fields (merged into whatever
/// errors they already carry) plus one group-level error.
fn unique_primary_secondary(group: &FieldGroup) -> GroupOutcome {
    let primary_email = normalize_email(group.text_of(PRIMARY_CONTACT_EMAIL));
    let secondary_email = normalize_email(group.text_of(SECONDARY_EMAIL));
    let primary_phone = normalize_phone(group.text_of(PRIMARY_CONTACT_NUMBER));
    let secondary_phone = normalize_phone(group.text_of(SECONDARY_PHONE));

    let email_duplicate =
        !primary_email.is_empty() && !secondary_email.is_empty() && primary_email == secondary_email;
    let phone_duplicate =
        !primary_phone.is_empty() && !secondary_phone.is_empty() && primary_phone == secondary_phone;

    let mut outcome = GroupOutcome::default();
    if email_duplicate {
        outcome
            .field_errors
            .push((SECONDARY_EMAIL, keys::DUPLICATE_WITH_PRIMARY));
    }
    if phone_duplicate {
        outcome
            .field_errors
            .push((SECONDARY_PHONE, keys::DUPLICATE_WITH_PRIMARY));
    }
    if email_duplicate || phone_duplicate {
        outcome.group_errors.push(keys::DUPLICATE_PRIMARY_SECONDARY);
    }
    outcome
}

fn social_media_link_template() -> FieldGroup {
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

/// Why a submission did not go out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRejection {
    /// First invalid field, when one is identifiable.
    pub field: Option<String>,
    /// Wizard step the field lives on.
    pub step: Option<u8>,
    /// Ready-to-display failure message.
    pub message: String,
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The serialized payload for `POST /application/submit-form`.
    Accepted(Value),
    Rejected(SubmitRejection),
}

/// The complete intake form: field group, repeatable sections, business
/// type picker, and wizard position.
#[derive(Debug)]
pub struct AccreditationForm {
    group: FieldGroup,
    social_media_links: RepeatableSection,
    licenses: RepeatableSection,
    picker: TobPicker,
    wizard: Wizard,
}

impl Default for AccreditationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AccreditationForm {
    pub fn new() -> Self {
        let mut group = FieldGroup::new(declare_fields());
        group.add_rule(mailing_address_rule());
        group.add_rule(multiple_locations_rule());
        group.add_rule(secondary_contact_rule());
        group.add_rule(business_type_rule());
        group.add_rule(principal_agreement_rule());
        group.add_rule(principal_sync_rule());
        group.add_validator(unique_primary_secondary);

        Self {
            group,
            social_media_links: RepeatableSection::new(
                SOCIAL_MEDIA_LINKS,
                social_media_link_template,
            ),
            licenses: RepeatableSection::new(LICENSES, license_template),
            picker: TobPicker::new(),
            wizard: Wizard::new(),
        }
    }

    pub fn group(&self) -> &FieldGroup {
        &self.group
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    pub fn picker(&self) -> &TobPicker {
        &self.picker
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<FieldValue>) -> StructureResult<()> {
        self.group.set_value(name, value)
    }

    pub fn touch(&mut self, name: &str) -> StructureResult<()> {
        self.group.touch(name)
    }

    pub fn value(&self, name: &str) -> StructureResult<&FieldValue> {
        self.group.value(name)
    }

    /// Load the business-type catalog (initial fetch or search result).
    pub fn set_type_catalog(&mut self, items: Vec<TobItem>) {
        self.picker.set_catalog(items);
    }

    /// Toggle the primary business type and propagate the selection into
    /// the form fields (which evicts it from the secondary set).
    pub fn toggle_primary_type(&mut self, item: &TobItem) -> StructureResult<()> {
        self.picker.toggle_primary(item);
        let primary_id = self
            .picker
            .primary()
            .map(|t| t.cbbb_id.clone())
            .unwrap_or_default();
        self.group.set_value(BUSINESS_TYPE, primary_id)?;
        self.group
            .set_value(SECONDARY_BUSINESS_TYPES, self.picker.secondary_ids())
    }

    /// Toggle membership in the secondary business-type set.
    pub fn toggle_secondary_type(&mut self, item: &TobItem) -> StructureResult<()> {
        self.picker.toggle_secondary(item);
        self.group
            .set_value(SECONDARY_BUSINESS_TYPES, self.picker.secondary_ids())
    }

    pub fn social_media_links(&self) -> &RepeatableSection {
        &self.social_media_links
    }

    pub fn social_media_links_mut(&mut self) -> &mut RepeatableSection {
        &mut self.social_media_links
    }

    pub fn licenses(&self) -> &RepeatableSection {
        &self.licenses
    }

    pub fn licenses_mut(&mut self) -> &mut RepeatableSection {
        &mut self.licenses
    }

    /// Attempt submission.
    ///
    /// With "same as business address" set, the business address is first
    /// copied over the mailing fields. A valid form yields the JSON
    /// payload; an invalid one marks everything touched, jumps the wizard
    /// to the first invalid field's step, and yields the failure message.
    pub fn submit(&mut self) -> StructureResult<SubmitOutcome> {
        if self.group.value(SAME_AS_BUSINESS_ADDRESS)?.as_bool() {
            for (from, to) in [
                (BUSINESS_ADDRESS, MAILING_ADDRESS),
                (BUSINESS_APT_SUITE, MAILING_APT_SUITE),
                (BUSINESS_CITY, MAILING_CITY),
                (BUSINESS_STATE, MAILING_STATE),
                (BUSINESS_ZIP, MAILING_ZIP),
            ] {
                let value = self.group.value(from)?.clone();
                self.group.set_value(to, value)?;
            }
        }

        let report = self.group.validate();
        let sections_valid = self.social_media_links.is_valid() && self.licenses.is_valid();
        if report.group_valid && sections_valid {
            let mut payload = self.group.raw_value();
            payload.insert(
                SOCIAL_MEDIA_LINKS.to_string(),
                self.social_media_links.raw_value(),
            );
            payload.insert(LICENSES.to_string(), self.licenses.raw_value());
            debug!("accreditation form accepted for submission");
            return Ok(SubmitOutcome::Accepted(Value::Object(payload)));
        }

        self.group.mark_all_touched();
        self.social_media_links.mark_all_touched();
        self.licenses.mark_all_touched();

        let first_invalid = report.first_invalid.clone().or_else(|| {
            [&self.social_media_links, &self.licenses]
                .into_iter()
                .find(|section| !section.is_valid())
                .map(|section| section.name().to_string())
        });

        let rejection = match first_invalid {
            Some(field) => {
                let step = step_of(&field);
                if let Some(step) = step {
                    self.wizard.go_to(step);
                }
                let message = match step {
                    Some(step) => format!(
                        "Please complete \"{}\" in {}.",
                        label_of(&field),
                        step_title(step)
                    ),
                    None => "Please review the form and fix highlighted fields.".to_string(),
                };
                SubmitRejection { field: Some(field), step, message }
            }
            None => SubmitRejection {
                field: None,
                step: None,
                message: "Please review the form and fix highlighted fields.".to_string(),
            },
        };
        Ok(SubmitOutcome::Rejected(rejection))
    }
}
