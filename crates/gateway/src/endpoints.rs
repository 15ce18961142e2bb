//! Endpoint constructors for every backend call the portal makes.

use serde_json::{Value, json};

use crate::models::{CreateAdminUser, UpdateAdminUser};
use crate::pagination::{PaginationParams, UserListParams};
use crate::request::ApiRequest;

/// `GET /auth/{provider}-callback?code=&redirectUrl=` — OAuth code exchange.
///
/// `provider_slug` is `"google"` or `"microsoft"`.
pub fn oauth_callback(provider_slug: &str, code: &str, redirect_url: &str) -> ApiRequest {
    ApiRequest::get(format!("/auth/{provider_slug}-callback"))
        .with_query("code", code)
        .with_query("redirectUrl", redirect_url)
}

/// `POST /application/submit-form` — accreditation form submission.
pub fn submit_form(payload: Value) -> ApiRequest {
    ApiRequest::post("/application/submit-form", payload)
}

/// `GET /visualdata/type-of-business?searchTerm=` — business-type lookup.
///
/// An empty search term requests the full catalog.
pub fn type_of_business(search_term: Option<&str>) -> ApiRequest {
    let req = ApiRequest::get("/visualdata/type-of-business");
    match search_term {
        Some(term) if !term.trim().is_empty() => req.with_query("searchTerm", term),
        _ => req,
    }
}

/// `GET /application/internal-data` — paginated list for internal staff.
pub fn internal_applications(params: &PaginationParams) -> ApiRequest {
    ApiRequest::get("/application/internal-data").with_query_pairs(params.to_query())
}

/// `GET /application/internal-data/{id}` — per-application detail.
pub fn internal_application_details(application_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/application/internal-data/{application_id}"))
}

/// `GET /application/external-data` — paginated list for external partners.
pub fn external_applications(params: &PaginationParams) -> ApiRequest {
    ApiRequest::get("/application/external-data").with_query_pairs(params.to_query())
}

/// `GET /application/external-data/admins` — external admins listing.
pub fn external_admin_applications(params: &PaginationParams) -> ApiRequest {
    ApiRequest::get("/application/external-data/admins").with_query_pairs(params.to_query())
}

/// `GET /application/application-internal-status` — internal status catalog.
pub fn internal_statuses() -> ApiRequest {
    ApiRequest::get("/application/application-internal-status")
}

/// `GET /application/application-external-status` — external status catalog.
pub fn external_statuses() -> ApiRequest {
    ApiRequest::get("/application/application-external-status")
}

/// `POST /application/{id}/send-form-data` — push an application downstream.
pub fn send_form_data(application_id: &str) -> ApiRequest {
    ApiRequest::post(
        format!("/application/{application_id}/send-form-data"),
        Value::Null,
    )
}

/// `GET /user/admin-dashboard` — paginated portal-user list for admins.
pub fn admin_users(params: &UserListParams) -> ApiRequest {
    ApiRequest::get("/user/admin-dashboard").with_query_pairs(params.to_query())
}

/// `POST /user/admin-dashboard` — create one portal user.
pub fn create_admin_user(user: &CreateAdminUser) -> ApiRequest {
    ApiRequest::post("/user/admin-dashboard", json!(user))
}

/// `POST /user/admin-dashboard/batch` — bulk-create users from a CSV blob.
pub fn create_admin_users_batch(users_csv: &str) -> ApiRequest {
    ApiRequest::post("/user/admin-dashboard/batch", json!({ "usersCsv": users_csv }))
}

/// `PATCH /user/admin-dashboard/{id}` — partial user update.
pub fn update_admin_user(user_id: &str, update: &UpdateAdminUser) -> ApiRequest {
    ApiRequest::patch(format!("/user/admin-dashboard/{user_id}"), json!(update))
}

/// `DELETE /user/admin-dashboard/{id}` — remove a portal user.
pub fn delete_admin_user(user_id: &str) -> ApiRequest {
    ApiRequest::delete(format!("/user/admin-dashboard/{user_id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;

    #[test]
    fn oauth_callback_builds_exchange_request() {
        let req = oauth_callback("google", "abc123", "https://portal.example/auth/callback");
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/auth/google-callback");
        assert_eq!(req.query[0], ("code".to_string(), "abc123".to_string()));
        assert_eq!(req.query[1].0, "redirectUrl");
    }

    #[test]
    fn blank_search_term_requests_full_catalog() {
        assert!(type_of_business(None).query.is_empty());
        assert!(type_of_business(Some("  ")).query.is_empty());
        let filtered = type_of_business(Some("roof"));
        assert_eq!(filtered.query, vec![("searchTerm".to_string(), "roof".to_string())]);
    }

    #[test]
    fn list_endpoints_carry_pagination() {
        let req = internal_applications(&PaginationParams::page(1, 20));
        assert_eq!(req.path, "/application/internal-data");
        assert_eq!(req.query.len(), 2);
    }

    #[test]
    fn detail_path_embeds_the_id() {
        let req = internal_application_details("app-42");
        assert_eq!(req.path, "/application/internal-data/app-42");
    }

    #[test]
    fn user_update_is_a_patch_with_partial_body() {
        let update = UpdateAdminUser { is_admin: Some(true), ..Default::default() };
        let req = update_admin_user("u-9", &update);
        assert_eq!(req.method, Method::Patch);
        assert_eq!(req.path, "/user/admin-dashboard/u-9");
        assert_eq!(req.body, Some(serde_json::json!({ "isAdmin": true })));
    }

    #[test]
    fn user_removal_is_a_delete() {
        let req = delete_admin_user("u-9");
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.path, "/user/admin-dashboard/u-9");
        assert_eq!(req.body, None);
    }
}
