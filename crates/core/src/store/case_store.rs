//! Case list store
//!
//! Holds the case list, the selected case, pagination and filters, and
//! exposes the actions that change them. State is published through a
//! `tokio::sync::watch` channel so views can react to every change.
//!
//! Each action has its own busy flag. Apart from `load_more`, which ignores
//! calls while a list fetch is running, two concurrent calls of the same
//! action both run to completion and the one that finishes last wins.

use std::sync::Arc;

use jurisrem_domain::{
    Case, CaseFilters, CaseStatus, CaseType, CaseUpdate, JurisError, NewCase, PageRequest, Result,
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::state::CaseState;
use crate::cases::CaseService;

type FlagSelector = fn(&mut CaseState) -> &mut bool;

/// Clears a busy flag when dropped, whatever the outcome of the action.
struct BusyGuard<'a> {
    state: &'a watch::Sender<CaseState>,
    flag: FlagSelector,
}

impl<'a> BusyGuard<'a> {
    /// Raise the flag and clear the previous error.
    fn raise(state: &'a watch::Sender<CaseState>, flag: FlagSelector) -> Self {
        state.send_modify(|s| {
            *flag(s) = true;
            s.error = None;
        });
        Self { state, flag }
    }

    /// For a flag that was already raised by the caller.
    fn adopt(state: &'a watch::Sender<CaseState>, flag: FlagSelector) -> Self {
        Self { state, flag }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let flag = self.flag;
        self.state.send_modify(|s| *flag(s) = false);
    }
}

fn loading_list(s: &mut CaseState) -> &mut bool {
    &mut s.loading_list
}

fn loading_more(s: &mut CaseState) -> &mut bool {
    &mut s.loading_more
}

fn loading_detail(s: &mut CaseState) -> &mut bool {
    &mut s.loading_detail
}

fn saving(s: &mut CaseState) -> &mut bool {
    &mut s.saving
}

/// Case list store
pub struct CaseStore {
    service: Arc<CaseService>,
    state: watch::Sender<CaseState>,
}

impl CaseStore {
    /// Create a store with an empty list and the given page size
    pub fn new(service: Arc<CaseService>, per_page: u32) -> Self {
        let (state, _) = watch::channel(CaseState::new(per_page));
        Self { service, state }
    }

    /// Receive every state change
    pub fn subscribe(&self) -> watch::Receiver<CaseState> {
        self.state.subscribe()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> CaseState {
        self.state.borrow().clone()
    }

    /// Load the first page. Given filters replace the current ones.
    ///
    /// Pagination is written only from a successful response. On failure
    /// the error message is stored and the previous list, pagination and
    /// cursor are kept.
    pub async fn load_cases(&self, filters: Option<CaseFilters>) {
        let _busy = BusyGuard::raise(&self.state, loading_list);

        let (filters, per_page) = {
            let mut query = (CaseFilters::default(), 0);
            self.state.send_modify(|s| {
                if let Some(filters) = filters {
                    s.filters = filters;
                }
                query = (s.filters.clone(), s.per_page);
            });
            query
        };

        match self.service.list_cases(Some(&filters), Some(PageRequest::new(1, per_page))).await {
            Ok(page) => {
                info!(count = page.items.len(), total = page.total, "Case list loaded");
                self.state.send_modify(|s| {
                    s.cases = page.items;
                    s.total_items = page.total;
                    s.total_pages = page.total_pages;
                    s.page = page.page;
                    s.per_page = page.per_page;
                    s.listed_filters = filters;
                });
            }
            Err(err) => {
                warn!(error = %err, "Failed to load case list");
                self.state.send_modify(|s| s.error = Some(err.to_string()));
            }
        }
    }

    /// Append the next page of the loaded list, fetched with the filters
    /// that list came from. No-op without further pages or while a list
    /// fetch is running.
    pub async fn load_more(&self) {
        let mut next = None;
        let started = self.state.send_if_modified(|s| {
            if s.loading_list || s.loading_more || !s.has_more() {
                return false;
            }
            s.loading_more = true;
            s.error = None;
            next = Some((s.listed_filters.clone(), PageRequest::new(s.page + 1, s.per_page)));
            true
        });
        let Some((filters, request)) = next.filter(|_| started) else {
            debug!("Nothing more to load");
            return;
        };
        let _busy = BusyGuard::adopt(&self.state, loading_more);

        match self.service.list_cases(Some(&filters), Some(request)).await {
            Ok(page) => {
                info!(page = page.page, count = page.items.len(), "Next case page loaded");
                self.state.send_modify(|s| {
                    s.cases.extend(page.items);
                    s.total_items = page.total;
                    s.total_pages = page.total_pages;
                    s.page = page.page;
                    s.per_page = page.per_page;
                });
            }
            Err(err) => {
                warn!(error = %err, "Failed to load next case page");
                self.state.send_modify(|s| s.error = Some(err.to_string()));
            }
        }
    }

    /// Load a case with its movements and documents and make it current.
    pub async fn load_case_detail(&self, id: &str) {
        let _busy = BusyGuard::raise(&self.state, loading_detail);

        match self.service.get_case_detail(id).await {
            Ok(case) => {
                info!(case_id = id, "Case detail loaded");
                self.state.send_modify(|s| {
                    if let Some(entry) = s.cases.iter_mut().find(|c| c.id == id) {
                        *entry = case.clone();
                    }
                    s.current = Some(case);
                });
            }
            Err(err) => {
                warn!(case_id = id, error = %err, "Failed to load case detail");
                self.state.send_modify(|s| s.error = Some(err.to_string()));
            }
        }
    }

    /// Create a case and put it at the head of the list.
    pub async fn create_case(&self, input: &NewCase) -> Result<Case> {
        let _busy = BusyGuard::raise(&self.state, saving);

        match self.service.create_case(input).await {
            Ok(case) => {
                info!(case_id = %case.id, "Case created");
                self.state.send_modify(|s| {
                    s.cases.insert(0, case.clone());
                    s.total_items += 1;
                });
                Ok(case)
            }
            Err(err) => Err(self.record_failure("create case", err)),
        }
    }

    /// Update a case in the list and, if it is the current one, there too.
    ///
    /// Movements and documents already held locally are kept when the
    /// server response does not carry them.
    pub async fn update_case(&self, id: &str, update: &CaseUpdate) -> Result<Case> {
        let _busy = BusyGuard::raise(&self.state, saving);

        match self.service.update_case(id, update).await {
            Ok(updated) => {
                info!(case_id = id, "Case updated");
                self.state.send_modify(|s| {
                    if let Some(entry) = s.cases.iter_mut().find(|c| c.id == id) {
                        *entry = merge_sub_collections(updated.clone(), entry);
                    }
                    if let Some(current) = s.current.as_mut().filter(|c| c.id == id) {
                        *current = merge_sub_collections(updated.clone(), current);
                    }
                });
                Ok(updated)
            }
            Err(err) => Err(self.record_failure("update case", err)),
        }
    }

    /// Delete a case, dropping it from the list and from `current`.
    pub async fn delete_case(&self, id: &str) -> Result<()> {
        let _busy = BusyGuard::raise(&self.state, saving);

        match self.service.delete_case(id).await {
            Ok(()) => {
                info!(case_id = id, "Case deleted");
                self.state.send_modify(|s| {
                    if let Some(index) = s.cases.iter().position(|c| c.id == id) {
                        s.cases.remove(index);
                        s.total_items = s.total_items.saturating_sub(1);
                    }
                    if s.current.as_ref().is_some_and(|c| c.id == id) {
                        s.current = None;
                    }
                });
                Ok(())
            }
            Err(err) => Err(self.record_failure("delete case", err)),
        }
    }

    /// Drop the last error message
    pub fn clear_error(&self) {
        self.state.send_modify(|s| s.error = None);
    }

    /// Deselect the current case
    pub fn clear_current(&self) {
        self.state.send_modify(|s| s.current = None);
    }

    /// Replace the filters and reload from the first page
    pub async fn apply_filters(&self, filters: CaseFilters) {
        self.load_cases(Some(filters)).await;
    }

    /// Drop all filters and reload from the first page
    pub async fn clear_filters(&self) {
        self.load_cases(Some(CaseFilters::default())).await;
    }

    /// Look up a loaded case by id
    pub fn find_by_id(&self, id: &str) -> Option<Case> {
        self.state.borrow().find_by_id(id).cloned()
    }

    /// Loaded cases whose status is in `statuses`, all of them when empty
    pub fn filter_by_status(&self, statuses: &[CaseStatus]) -> Vec<Case> {
        self.state.borrow().filter_by_status(statuses)
    }

    /// Loaded cases whose type is in `types`, all of them when empty
    pub fn filter_by_type(&self, types: &[CaseType]) -> Vec<Case> {
        self.state.borrow().filter_by_type(types)
    }

    /// Loaded cases, most recently updated first
    pub fn sorted_cases(&self) -> Vec<Case> {
        self.state.borrow().sorted_cases()
    }

    /// Whether another page can be appended
    pub fn has_more(&self) -> bool {
        self.state.borrow().has_more()
    }

    fn record_failure(&self, action: &'static str, err: JurisError) -> JurisError {
        warn!(action, error = %err, "Case store action failed");
        let message = err.to_string();
        self.state.send_modify(|s| s.error = Some(message));
        err
    }
}

fn merge_sub_collections(mut updated: Case, previous: &Case) -> Case {
    if updated.movements.is_none() {
        updated.movements.clone_from(&previous.movements);
    }
    if updated.documents.is_none() {
        updated.documents.clone_from(&previous.documents);
    }
    updated
}
