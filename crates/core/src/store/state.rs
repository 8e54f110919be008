//! Observable state of the case list store

use jurisrem_domain::{Case, CaseFilters, CaseStatus, CaseType};

/// Snapshot of the case list store
///
/// The four pagination fields always come from the same successful
/// response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseState {
    /// Cases in fetch order.
    pub cases: Vec<Case>,
    /// Case whose detail is loaded, if any.
    pub current: Option<Case>,
    pub loading_list: bool,
    pub loading_more: bool,
    pub loading_detail: bool,
    pub saving: bool,
    /// Message of the last failed action.
    pub error: Option<String>,
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub filters: CaseFilters,
    /// Filters the loaded list was fetched with; `load_more` continues these.
    pub(crate) listed_filters: CaseFilters,
}

impl CaseState {
    pub fn new(per_page: u32) -> Self {
        Self {
            cases: Vec::new(),
            current: None,
            loading_list: false,
            loading_more: false,
            loading_detail: false,
            saving: false,
            error: None,
            page: 1,
            per_page,
            total_items: 0,
            total_pages: 0,
            filters: CaseFilters::default(),
            listed_filters: CaseFilters::default(),
        }
    }

    /// Display order: most recently updated first.
    pub fn sorted_cases(&self) -> Vec<Case> {
        let mut sorted = self.cases.clone();
        sorted.sort_by(|a, b| a.updated_at.cmp_newest_first(&b.updated_at));
        sorted
    }

    /// Whether the loaded list holds any case.
    pub fn has_cases(&self) -> bool {
        !self.cases.is_empty()
    }

    /// Whether the server reported pages beyond the last one loaded.
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Case> {
        self.cases.iter().find(|c| c.id == id)
    }

    /// Cases whose status is in `statuses`; an empty slice keeps everything.
    pub fn filter_by_status(&self, statuses: &[CaseStatus]) -> Vec<Case> {
        if statuses.is_empty() {
            return self.cases.clone();
        }
        self.cases.iter().filter(|c| statuses.contains(&c.status)).cloned().collect()
    }

    /// Cases whose type is in `types`; an empty slice keeps everything.
    pub fn filter_by_type(&self, types: &[CaseType]) -> Vec<Case> {
        if types.is_empty() {
            return self.cases.clone();
        }
        self.cases.iter().filter(|c| types.contains(&c.case_type)).cloned().collect()
    }
}

impl Default for CaseState {
    fn default() -> Self {
        Self::new(jurisrem_domain::constants::DEFAULT_PAGE_SIZE)
    }
}
