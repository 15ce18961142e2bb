//! Wire models for the dashboard list and detail endpoints.

use serde::{Deserialize, Serialize};

/// Row in the internal staff dashboard's application table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalApplicationRow {
    pub application_id: String,
    #[serde(rename = "blueApplicationID")]
    pub blue_application_id: Option<String>,
    #[serde(rename = "hubSpotApplicationID")]
    pub hub_spot_application_id: Option<String>,
    pub bid: Option<String>,
    #[serde(rename = "companyRecordID")]
    pub company_record_id: Option<String>,
    pub submitted_by_email: Option<String>,
    pub application_status_internal: Option<String>,
}

/// Row in the external partner dashboard's application table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalApplicationRow {
    pub application_id: String,
    pub company_name: Option<String>,
    pub submitted_by_email: Option<String>,
    pub application_status_external: Option<String>,
}

/// One entry in a status filter catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationStatus {
    pub id: u32,
    pub name: String,
}

/// A portal user as listed on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub user_id: String,
    pub email: String,
    pub is_active: bool,
    pub is_admin: bool,
    #[serde(rename = "isCSVSync")]
    pub is_csv_sync: bool,
}

/// Body for creating a single portal user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminUser {
    pub email: String,
    pub is_admin: bool,
    #[serde(rename = "isCSVSync")]
    pub is_csv_sync: bool,
}

/// Partial update for a portal user; omitted fields stay untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(rename = "isCSVSync", skip_serializing_if = "Option::is_none")]
    pub is_csv_sync: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// An item in the type-of-business catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TobItem {
    #[serde(rename = "cbbbId")]
    pub cbbb_id: String,
    pub name: String,
}
