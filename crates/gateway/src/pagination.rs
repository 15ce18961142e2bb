//! Pagination and filter parameters for list endpoints.

/// Query parameters accepted by the paginated application lists.
///
/// Status filters are presented 1-based in the UI but transmitted 0-based;
/// `to_query` performs the shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationParams {
    pub page_number: u32,
    pub page_size: u32,
    pub search_term: Option<String>,
    pub internal_status: Option<u32>,
    pub external_status: Option<u32>,
    pub partnership_source: Option<u32>,
}

impl PaginationParams {
    pub fn page(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
            search_term: None,
            internal_status: None,
            external_status: None,
            partnership_source: None,
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("pageNumber".to_string(), self.page_number.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];
        if let Some(term) = &self.search_term
            && !term.is_empty()
        {
            pairs.push(("searchTerm".to_string(), term.clone()));
        }
        if let Some(status) = self.internal_status {
            pairs.push((
                "internalStatus".to_string(),
                status.saturating_sub(1).to_string(),
            ));
        }
        if let Some(status) = self.external_status {
            pairs.push((
                "externalStatus".to_string(),
                status.saturating_sub(1).to_string(),
            ));
        }
        if let Some(source) = self.partnership_source {
            pairs.push(("partnershipSource".to_string(), source.to_string()));
        }
        pairs
    }
}

/// Query parameters for the admin dashboard's user list.
///
/// Boolean filters are sent only when set, matching the backend's
/// tri-state (absent means "don't filter").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListParams {
    pub page_number: u32,
    pub page_size: u32,
    pub search_term: Option<String>,
    pub is_admin: Option<bool>,
    pub is_csv_sync: Option<bool>,
    pub is_active: Option<bool>,
}

impl UserListParams {
    pub fn page(page_number: u32, page_size: u32) -> Self {
        Self { page_number, page_size, ..Self::default() }
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("pageNumber".to_string(), self.page_number.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];
        if let Some(term) = &self.search_term
            && !term.is_empty()
        {
            pairs.push(("searchTerm".to_string(), term.clone()));
        }
        for (key, flag) in [
            ("isAdmin", self.is_admin),
            ("isCSVSync", self.is_csv_sync),
            ("isActive", self.is_active),
        ] {
            if let Some(flag) = flag {
                pairs.push((key.to_string(), flag.to_string()));
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_params_carry_page_info_only() {
        let query = PaginationParams::page(1, 10).to_query();
        assert_eq!(
            query,
            vec![
                ("pageNumber".to_string(), "1".to_string()),
                ("pageSize".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn status_filters_are_sent_zero_based() {
        let mut params = PaginationParams::page(2, 25);
        params.internal_status = Some(3);
        params.external_status = Some(1);
        let query = params.to_query();
        assert!(query.contains(&("internalStatus".to_string(), "2".to_string())));
        assert!(query.contains(&("externalStatus".to_string(), "0".to_string())));
    }

    #[test]
    fn empty_search_term_is_omitted() {
        let params = PaginationParams::page(1, 10).with_search("");
        assert!(!params.to_query().iter().any(|(k, _)| k == "searchTerm"));
    }

    #[test]
    fn unset_user_flags_are_omitted() {
        let mut params = UserListParams::page(1, 50);
        params.is_active = Some(true);
        let query = params.to_query();
        assert!(query.contains(&("isActive".to_string(), "true".to_string())));
        assert!(!query.iter().any(|(k, _)| k == "isAdmin" || k == "isCSVSync"));
    }
}
