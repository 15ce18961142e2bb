//! Business-type selection model.
//!
//! One primary type plus any number of secondary types, chosen from the
//! backend's type-of-business catalog. The secondary choices may never
//! include the primary; selecting a primary silently evicts it from the
//! secondary set.

use accredit_gateway::models::TobItem;

/// Primary/secondary business-type picker state.
#[derive(Debug, Default, Clone)]
pub struct TobPicker {
    catalog: Vec<TobItem>,
    primary: Option<TobItem>,
    secondary: Vec<TobItem>,
}

impl TobPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog (initial load or a completed search lookup).
    pub fn set_catalog(&mut self, items: Vec<TobItem>) {
        self.catalog = items;
    }

    pub fn catalog(&self) -> &[TobItem] {
        &self.catalog
    }

    pub fn primary(&self) -> Option<&TobItem> {
        self.primary.as_ref()
    }

    pub fn secondary(&self) -> &[TobItem] {
        &self.secondary
    }

    pub fn secondary_ids(&self) -> Vec<String> {
        self.secondary.iter().map(|t| t.cbbb_id.clone()).collect()
    }

    /// Case-insensitive substring filter over the catalog.
    pub fn search(&self, term: &str) -> Vec<TobItem> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.catalog.clone();
        }
        self.catalog
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Candidates for the secondary multi-select: the filtered catalog
    /// minus the current primary.
    pub fn secondary_options(&self, term: &str) -> Vec<TobItem> {
        let primary_id = self.primary.as_ref().map(|t| t.cbbb_id.clone());
        self.search(term)
            .into_iter()
            .filter(|item| Some(&item.cbbb_id) != primary_id.as_ref())
            .collect()
    }

    /// Toggle the primary selection. Re-selecting the current primary
    /// clears it (and with it the entire secondary set); selecting a new
    /// one evicts it from the secondary set.
    pub fn toggle_primary(&mut self, item: &TobItem) {
        if self.primary.as_ref().is_some_and(|p| p.cbbb_id == item.cbbb_id) {
            self.primary = None;
            self.secondary.clear();
        } else {
            self.primary = Some(item.clone());
            self.secondary.retain(|t| t.cbbb_id != item.cbbb_id);
        }
    }

    /// Toggle membership in the secondary set.
    pub fn toggle_secondary(&mut self, item: &TobItem) {
        if let Some(pos) = self.secondary.iter().position(|t| t.cbbb_id == item.cbbb_id) {
            self.secondary.remove(pos);
        } else {
            self.secondary.push(item.clone());
        }
    }

    pub fn remove_secondary(&mut self, cbbb_id: &str) {
        self.secondary.retain(|t| t.cbbb_id != cbbb_id);
    }

    pub fn is_secondary_selected(&self, cbbb_id: &str) -> bool {
        self.secondary.iter().any(|t| t.cbbb_id == cbbb_id)
    }

    /// Trigger label for the secondary multi-select.
    pub fn secondary_display_text(&self) -> String {
        match self.secondary.len() {
            0 => "Select Secondary Business Types...".to_string(),
            1 => self.secondary[0].name.clone(),
            n => format!("{n} types selected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str) -> TobItem {
        TobItem { cbbb_id: id.to_string(), name: name.to_string() }
    }

    fn picker() -> TobPicker {
        let mut picker = TobPicker::new();
        picker.set_catalog(vec![
            item("1", "Roofing Contractor"),
            item("2", "General Contractor"),
            item("3", "Plumbing"),
        ]);
        picker
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let picker = picker();
        let hits = picker.search("CONTRACT");
        assert_eq!(hits.len(), 2);
        assert!(picker.search("  ").len() == 3);
        assert!(picker.search("zzz").is_empty());
    }

    #[test]
    fn selecting_primary_evicts_it_from_secondary() {
        let mut picker = picker();
        picker.toggle_secondary(&item("1", "Roofing Contractor"));
        picker.toggle_secondary(&item("3", "Plumbing"));

        picker.toggle_primary(&item("1", "Roofing Contractor"));
        assert_eq!(picker.primary().unwrap().cbbb_id, "1");
        assert_eq!(picker.secondary_ids(), vec!["3".to_string()]);
    }

    #[test]
    fn reselecting_primary_clears_everything() {
        let mut picker = picker();
        picker.toggle_primary(&item("2", "General Contractor"));
        picker.toggle_secondary(&item("3", "Plumbing"));

        picker.toggle_primary(&item("2", "General Contractor"));
        assert_eq!(picker.primary(), None);
        assert!(picker.secondary().is_empty());
    }

    #[test]
    fn secondary_options_exclude_the_primary() {
        let mut picker = picker();
        picker.toggle_primary(&item("3", "Plumbing"));
        let options = picker.secondary_options("");
        assert!(options.iter().all(|t| t.cbbb_id != "3"));
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn secondary_toggle_adds_and_removes() {
        let mut picker = picker();
        let plumbing = item("3", "Plumbing");
        picker.toggle_secondary(&plumbing);
        assert!(picker.is_secondary_selected("3"));
        picker.toggle_secondary(&plumbing);
        assert!(!picker.is_secondary_selected("3"));
    }

    #[test]
    fn display_text_counts_selections() {
        let mut picker = picker();
        assert_eq!(picker.secondary_display_text(), "Select Secondary Business Types...");
        picker.toggle_secondary(&item("3", "Plumbing"));
        assert_eq!(picker.secondary_display_text(), "Plumbing");
        picker.toggle_secondary(&item("1", "Roofing Contractor"));
        assert_eq!(picker.secondary_display_text(), "2 types selected");
    }
}
