//! Case list store state transitions

mod support;

use std::sync::Arc;

use jurisrem_core::CaseStore;
use jurisrem_domain::{CaseFilters, CaseStatus, CaseType, CaseUpdate, JurisError, NewCase};
use support::{documento, movimentacao, processos, server_error, Harness, MockCaseApi, MockDocumentApi, MockMovementApi};
use tokio_test::{assert_err, assert_ok};

fn store_over(harness: &Harness, per_page: u32) -> CaseStore {
    CaseStore::new(Arc::clone(&harness.service), per_page)
}

fn ids(cases: &[jurisrem_domain::Case]) -> Vec<&str> {
    cases.iter().map(|c| c.id.as_str()).collect()
}

#[tokio::test]
async fn load_cases_replaces_list_and_pagination() {
    let harness = Harness::with_cases(processos(6));
    let store = store_over(&harness, 2);

    store.load_cases(None).await;

    let state = store.snapshot();
    assert_eq!(ids(&state.cases), vec!["c1", "c2"]);
    assert_eq!((state.page, state.per_page, state.total_items, state.total_pages), (1, 2, 6, 3));
    assert!(state.has_more());
    assert!(!state.loading_list);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn load_more_appends_pages_in_fetch_order() {
    let harness = Harness::with_cases(processos(6));
    let store = store_over(&harness, 2);

    store.load_cases(None).await;
    store.load_more().await;
    store.load_more().await;

    let state = store.snapshot();
    assert_eq!(ids(&state.cases), vec!["c1", "c2", "c3", "c4", "c5", "c6"]);
    assert_eq!(state.page, 3);
    assert!(!state.has_more());

    store.load_more().await;
    assert_eq!(harness.cases.calls(), vec!["list:1", "list:2", "list:3"]);
    assert_eq!(store.snapshot(), state);
}

#[tokio::test]
async fn sorted_view_is_newest_first_without_touching_fetch_order() {
    let harness = Harness::with_cases(processos(4));
    let store = store_over(&harness, 10);

    store.load_cases(None).await;

    assert_eq!(ids(&store.sorted_cases()), vec!["c4", "c3", "c2", "c1"]);
    assert_eq!(ids(&store.snapshot().cases), vec!["c1", "c2", "c3", "c4"]);
}

#[tokio::test]
async fn load_more_without_further_pages_makes_no_call() {
    let harness = Harness::with_cases(processos(2));
    let store = store_over(&harness, 10);

    store.load_more().await;
    assert!(harness.cases.calls().is_empty());

    store.load_cases(None).await;
    store.load_more().await;
    assert_eq!(harness.cases.calls(), vec!["list:1"]);
}

#[tokio::test]
async fn failed_reload_keeps_previous_list() {
    let harness = Harness::with_cases(processos(3));
    let store = store_over(&harness, 10);
    store.load_cases(None).await;

    harness.cases.fail_with(server_error());
    store.load_cases(None).await;

    let state = store.snapshot();
    assert_eq!(state.cases.len(), 3);
    assert_eq!(state.error.as_deref(), Some("Não foi possível carregar a lista de processos"));
    assert!(!state.loading_list);

    harness.cases.recover();
    store.clear_error();
    assert!(store.snapshot().error.is_none());
}

#[tokio::test]
async fn failed_filter_reload_then_load_more_adds_no_duplicates() {
    let harness = Harness::with_cases(processos(6));
    let store = store_over(&harness, 2);
    store.load_cases(None).await;
    store.load_more().await;
    store.load_more().await;
    let loaded = store.snapshot();
    assert_eq!((loaded.page, loaded.total_pages), (3, 3));

    harness.cases.fail_with(server_error());
    let filters = CaseFilters { client: Some("Cliente".into()), ..Default::default() };
    store.apply_filters(filters.clone()).await;

    let state = store.snapshot();
    assert_eq!(state.filters, filters);
    assert_eq!(ids(&state.cases), ids(&loaded.cases));
    assert_eq!(
        (state.page, state.per_page, state.total_items, state.total_pages),
        (loaded.page, loaded.per_page, loaded.total_items, loaded.total_pages)
    );
    assert!(!state.has_more());

    harness.cases.recover();
    store.load_more().await;

    assert_eq!(ids(&store.snapshot().cases), vec!["c1", "c2", "c3", "c4", "c5", "c6"]);
    assert_eq!(harness.cases.calls(), vec!["list:1", "list:2", "list:3", "list:1"]);
}

#[tokio::test]
async fn load_more_after_failed_filter_reload_continues_loaded_list() {
    let harness = Harness::with_cases(processos(6));
    let store = store_over(&harness, 2);
    store.load_cases(None).await;

    harness.cases.fail_with(server_error());
    store.apply_filters(CaseFilters { statuses: vec![CaseStatus::Suspended], ..Default::default() }).await;
    harness.cases.recover();
    store.load_more().await;

    let state = store.snapshot();
    assert_eq!(ids(&state.cases), vec!["c1", "c2", "c3", "c4"]);
    assert_eq!(state.page, 2);
    let last_query = harness.cases.queries.lock().last().cloned().unwrap();
    assert!(last_query.status.is_empty());
    assert_eq!(last_query.pagina, Some(2));
}

#[tokio::test]
async fn load_more_is_ignored_while_list_reload_runs() {
    let harness = Harness::with_cases(processos(6));
    let store = Arc::new(store_over(&harness, 2));
    store.load_cases(None).await;
    assert!(store.has_more());

    let gate = harness.cases.hold_next_list();
    let reload = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.load_cases(None).await }
    });
    gate.entered.notified().await;
    assert!(store.snapshot().loading_list);

    store.load_more().await;
    assert_eq!(harness.cases.calls(), vec!["list:1", "list:1"]);

    gate.release.notify_one();
    reload.await.unwrap();
    assert_eq!(ids(&store.snapshot().cases), vec!["c1", "c2"]);
}

#[tokio::test]
async fn load_more_is_single_flight() {
    let harness = Harness::with_cases(processos(6));
    let store = Arc::new(store_over(&harness, 2));
    store.load_cases(None).await;

    let gate = harness.cases.hold_next_list();
    let first = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.load_more().await }
    });
    gate.entered.notified().await;
    assert!(store.snapshot().loading_more);

    store.load_more().await;
    assert_eq!(harness.cases.calls(), vec!["list:1", "list:2"]);

    gate.release.notify_one();
    first.await.unwrap();
    let state = store.snapshot();
    assert_eq!(ids(&state.cases), vec!["c1", "c2", "c3", "c4"]);
    assert!(!state.loading_more);
}

#[tokio::test]
async fn apply_filters_resets_to_first_page() {
    let harness = Harness::with_cases(processos(6));
    let store = store_over(&harness, 2);
    store.load_cases(None).await;
    store.load_more().await;

    let filters = CaseFilters { statuses: vec![CaseStatus::Active], ..Default::default() };
    store.apply_filters(filters.clone()).await;

    let state = store.snapshot();
    assert_eq!(state.filters, filters);
    assert_eq!(state.page, 1);
    assert_eq!(ids(&state.cases), vec!["c1", "c2"]);

    let last_query = harness.cases.queries.lock().last().cloned().unwrap();
    assert_eq!(last_query.status, vec!["ativo"]);
    assert_eq!(last_query.pagina, Some(1));

    store.clear_filters().await;
    assert_eq!(store.snapshot().filters, CaseFilters::default());
    assert!(harness.cases.queries.lock().last().unwrap().status.is_empty());
}

#[tokio::test]
async fn detail_replaces_list_entry_and_sets_current() {
    let harness = Harness::new(
        MockCaseApi::with_records(processos(3)),
        MockMovementApi::with_records(vec![movimentacao("m1", "c2")]),
        MockDocumentApi::with_records(vec![documento("d1", "c2")]),
    );
    let store = store_over(&harness, 10);
    store.load_cases(None).await;

    store.load_case_detail("c2").await;

    let state = store.snapshot();
    let current = state.current.clone().unwrap();
    assert_eq!(current.id, "c2");
    assert_eq!(current.movements.as_ref().map(Vec::len), Some(1));
    assert_eq!(state.find_by_id("c2"), Some(&current));
    assert!(!state.loading_detail);
}

#[tokio::test]
async fn detail_failure_sets_error() {
    let harness = Harness::with_cases(Vec::new());
    let store = store_over(&harness, 10);

    store.load_case_detail("missing").await;

    let state = store.snapshot();
    assert!(state.current.is_none());
    assert_eq!(state.error.as_deref(), Some("Não foi possível carregar os detalhes do processo"));
}

#[tokio::test]
async fn create_inserts_at_head_and_counts() {
    let harness = Harness::with_cases(processos(2));
    let store = store_over(&harness, 10);
    store.load_cases(None).await;

    let created = assert_ok!(
        store
            .create_case(&NewCase {
                case_number: "0005555-00.2024.5.02.0001".into(),
                title: "Reclamação trabalhista".into(),
                description: String::new(),
                case_type: CaseType::Labor,
                client: "João Lima".into(),
                opposing_party: None,
                claim_value_cents: None,
                court: None,
            })
            .await
    );

    let state = store.snapshot();
    assert_eq!(state.cases[0], created);
    assert_eq!(state.total_items, 3);
    assert!(!state.saving);
}

#[tokio::test]
async fn create_validation_failure_is_stored_and_returned() {
    let harness = Harness::with_cases(processos(1));
    let store = store_over(&harness, 10);
    store.load_cases(None).await;

    let err = assert_err!(
        store
            .create_case(&NewCase {
                case_number: String::new(),
                title: "Sem número".into(),
                description: String::new(),
                case_type: CaseType::Civil,
                client: "Ana".into(),
                opposing_party: None,
                claim_value_cents: None,
                court: None,
            })
            .await
    );

    assert_eq!(err, JurisError::Validation("Número do processo é obrigatório".into()));
    let state = store.snapshot();
    assert_eq!(state.error.as_deref(), Some("Número do processo é obrigatório"));
    assert_eq!(state.total_items, 1);
    assert!(!state.saving);
}

#[tokio::test]
async fn update_syncs_list_and_current() {
    let harness = Harness::new(
        MockCaseApi::with_records(processos(3)),
        MockMovementApi::with_records(vec![movimentacao("m1", "c1")]),
        MockDocumentApi::default(),
    );
    let store = store_over(&harness, 10);
    store.load_cases(None).await;
    store.load_case_detail("c1").await;
    let before = store.snapshot().current.unwrap();

    assert_ok!(store.update_case("c1", &CaseUpdate { title: Some("X".into()), ..Default::default() }).await);

    let state = store.snapshot();
    let current = state.current.clone().unwrap();
    assert_eq!(current.title, "X");
    assert_eq!(current.client, before.client);
    assert_eq!(current.case_number, before.case_number);
    assert_eq!(current.movements, before.movements);
    assert_eq!(state.find_by_id("c1"), Some(&current));
    assert_eq!(state.find_by_id("c2").unwrap().title, "Processo c2");
}

#[tokio::test]
async fn delete_removes_entry_and_clears_current() {
    let harness = Harness::with_cases(processos(3));
    let store = store_over(&harness, 10);
    store.load_cases(None).await;
    store.load_case_detail("c2").await;

    assert_ok!(store.delete_case("c2").await);

    let state = store.snapshot();
    assert_eq!(ids(&state.cases), vec!["c1", "c3"]);
    assert_eq!(state.total_items, 2);
    assert!(state.current.is_none());
}

#[tokio::test]
async fn delete_of_unlisted_case_keeps_total() {
    let harness = Harness::with_cases(processos(4));
    let store = store_over(&harness, 2);
    store.load_cases(None).await;

    assert_ok!(store.delete_case("c4").await);

    let state = store.snapshot();
    assert_eq!(ids(&state.cases), vec!["c1", "c2"]);
    assert_eq!(state.total_items, 4);
}

#[tokio::test]
async fn delete_failure_keeps_list() {
    let harness = Harness::with_cases(processos(2));
    let store = store_over(&harness, 10);
    store.load_cases(None).await;
    harness.cases.fail_with(server_error());

    let err = assert_err!(store.delete_case("c1").await);

    assert_eq!(err.to_string(), "Não foi possível remover o processo");
    let state = store.snapshot();
    assert_eq!(state.cases.len(), 2);
    assert_eq!(state.error.as_deref(), Some("Não foi possível remover o processo"));
}

#[tokio::test]
async fn local_queries_do_not_hit_the_network() {
    let mut records = processos(3);
    records[1].status = "suspenso".into();
    records[2].area_juridica = "familia".into();
    let harness = Harness::with_cases(records);
    let store = store_over(&harness, 10);
    store.load_cases(None).await;
    let calls = harness.cases.calls().len();

    assert_eq!(ids(&store.filter_by_status(&[CaseStatus::Suspended])), vec!["c2"]);
    assert_eq!(store.filter_by_status(&[]).len(), 3);
    assert_eq!(ids(&store.filter_by_type(&[CaseType::Family])), vec!["c3"]);
    assert_eq!(store.filter_by_type(&[]).len(), 3);
    assert!(store.find_by_id("c9").is_none());
    assert_eq!(harness.cases.calls().len(), calls);
}

#[tokio::test]
async fn subscribers_observe_changes() {
    let harness = Harness::with_cases(processos(2));
    let store = store_over(&harness, 10);
    let mut rx = store.subscribe();

    store.load_cases(None).await;

    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().cases.len(), 2);

    store.clear_current();
    assert!(rx.has_changed().unwrap());
}
