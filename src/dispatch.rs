//! Action Flows
//!
//! What each view does for an action: which requests go out, in which
//! order, and what comes back. Components only apply the outcome to
//! their signals.

use crate::api::TodoBackend;
use crate::guard::RequestGuard;
use crate::models::{EntityId, ListDetail, ListSummary};
use crate::state::{normalize_input, toggle_action, Action, DetailAction, Failure, ListsAction};

/// Result of a root-view action
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListsOutcome {
    /// A create request succeeded, the name field can be cleared
    pub created: bool,
    /// Fresh summaries; `None` keeps whatever is on screen
    pub summaries: Option<Vec<ListSummary>>,
    pub failure: Option<Failure<ListsAction>>,
}

/// Run a root-view action: the mutation (if any), then a re-fetch of all
/// summaries. A failed mutation skips the re-fetch.
pub async fn run_lists_action<B: TodoBackend>(
    backend: &B,
    guard: &RequestGuard,
    action: ListsAction,
) -> ListsOutcome {
    let mut outcome = ListsOutcome::default();

    let action = match action {
        ListsAction::Create { name } => match normalize_input(&name) {
            Some(name) => ListsAction::Create { name },
            None => {
                log::debug!("[APP] Ignoring empty list name");
                return outcome;
            }
        },
        other => other,
    };

    let result = match &action {
        ListsAction::Reload => Ok(()),
        ListsAction::Create { name } => backend.create_list(name).await.map(|created| {
            if let Some(created) = created {
                log::info!("[APP] Created list {} ({})", created.name, created.id);
            }
        }),
        ListsAction::Delete { id } => backend.delete_list(id).await.map(|_| {
            log::info!("[APP] Deleted list {}", id);
        }),
    };

    if let Err(err) = result {
        log::error!("[APP] Failed to {}: {}", action.describe(), err);
        outcome.failure = Some(Failure::new(action, &err));
        return outcome;
    }
    outcome.created = matches!(action, ListsAction::Create { .. });

    // Only the most recently started reload may write
    guard.invalidate();
    let ticket = guard.ticket();
    let result = backend.list_summaries().await;
    if !guard.is_current(ticket) {
        log::debug!("[APP] Superseded reload ignored");
        return outcome;
    }

    match result {
        Ok(loaded) => {
            log::info!("[APP] Loaded {} lists", loaded.len());
            outcome.summaries = Some(loaded);
        }
        Err(err) => {
            log::error!("[APP] Error loading lists: {}", err);
            outcome.failure = Some(Failure::new(ListsAction::Reload, &err));
        }
    }
    outcome
}

/// Result of a detail-view action
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    /// Nothing was sent
    Skipped,
    /// The response belongs to a list the view no longer shows
    Stale,
    /// Authoritative list from the server, replacing local state
    Loaded { detail: ListDetail, clear_input: bool },
    Failed(Failure<DetailAction>),
}

/// Run a detail-view action against `list_id`
pub async fn run_detail_action<B: TodoBackend>(
    backend: &B,
    guard: &RequestGuard,
    list_id: &EntityId,
    action: DetailAction,
) -> DetailOutcome {
    let action = match action {
        DetailAction::CreateItem { label } => match normalize_input(&label) {
            Some(label) => DetailAction::CreateItem { label },
            None => {
                log::debug!("[DETAIL] Ignoring empty label");
                return DetailOutcome::Skipped;
            }
        },
        other => other,
    };

    let ticket = guard.ticket();
    let result = match &action {
        DetailAction::Load => backend.get_list(list_id).await,
        DetailAction::CreateItem { label } => backend.create_item(list_id, label).await,
        DetailAction::DeleteItem { item_id } => backend.delete_item(list_id, item_id).await,
        DetailAction::SetChecked { item_id, checked } => {
            backend.set_checked_state(list_id, item_id, *checked).await
        }
    };

    if !guard.is_current(ticket) {
        log::debug!("[DETAIL] Dropping stale response for list {}", list_id);
        return DetailOutcome::Stale;
    }

    match result {
        Ok(detail) => {
            log::debug!("[DETAIL] List {} now has {} items", detail.id, detail.items.len());
            DetailOutcome::Loaded {
                detail,
                clear_input: matches!(action, DetailAction::CreateItem { .. }),
            }
        }
        Err(err) => {
            if err.status() == Some(404) {
                log::warn!("[DETAIL] List {} no longer exists on the server", list_id);
            }
            log::error!("[DETAIL] Failed to {}: {}", action.describe(), err);
            DetailOutcome::Failed(Failure::new(action, &err))
        }
    }
}

/// Flip the checked state of `item_id` as found in `current`
pub async fn toggle_item<B: TodoBackend>(
    backend: &B,
    guard: &RequestGuard,
    list_id: &EntityId,
    current: Option<&ListDetail>,
    item_id: &EntityId,
) -> DetailOutcome {
    match current.and_then(|detail| toggle_action(detail, item_id)) {
        Some(action) => run_detail_action(backend, guard, list_id, action).await,
        None => {
            log::warn!("[DETAIL] Item {} is not in the loaded list", item_id);
            DetailOutcome::Skipped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::models::{Item, NewListResponse};
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        ListSummaries,
        CreateList(String),
        DeleteList(EntityId),
        GetList(EntityId),
        CreateItem(EntityId, String),
        DeleteItem(EntityId, EntityId),
        SetChecked(EntityId, EntityId, bool),
    }

    /// In-memory backend that records every call
    #[derive(Default)]
    struct RecordingBackend {
        calls: RefCell<Vec<Call>>,
        summaries: RefCell<Vec<ListSummary>>,
        detail: RefCell<ListDetail>,
        /// Name of the call that answers 500
        failing: Option<&'static str>,
        /// Invalidated while a request is in flight, like a navigation
        navigate_during: Option<RequestGuard>,
    }

    impl RecordingBackend {
        fn with_detail(detail: ListDetail) -> Self {
            Self { detail: RefCell::new(detail), ..Default::default() }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: Call, name: &'static str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            if let Some(guard) = &self.navigate_during {
                guard.invalidate();
            }
            if self.failing == Some(name) {
                return Err(ApiError::Status { status: 500, url: format!("http://test/{}", name) });
            }
            Ok(())
        }
    }

    impl TodoBackend for RecordingBackend {
        async fn list_summaries(&self) -> Result<Vec<ListSummary>, ApiError> {
            self.record(Call::ListSummaries, "list_summaries")?;
            Ok(self.summaries.borrow().clone())
        }

        async fn create_list(&self, name: &str) -> Result<Option<NewListResponse>, ApiError> {
            self.record(Call::CreateList(name.to_string()), "create_list")?;
            let id = EntityId::from(self.summaries.borrow().len() as u64 + 1);
            self.summaries.borrow_mut().push(ListSummary {
                id: id.clone(),
                name: name.to_string(),
                item_count: Some(0),
            });
            Ok(Some(NewListResponse { id, name: name.to_string() }))
        }

        async fn delete_list(&self, id: &EntityId) -> Result<(), ApiError> {
            self.record(Call::DeleteList(id.clone()), "delete_list")?;
            self.summaries.borrow_mut().retain(|s| &s.id != id);
            Ok(())
        }

        async fn get_list(&self, id: &EntityId) -> Result<ListDetail, ApiError> {
            self.record(Call::GetList(id.clone()), "get_list")?;
            Ok(self.detail.borrow().clone())
        }

        async fn create_item(&self, list_id: &EntityId, label: &str) -> Result<ListDetail, ApiError> {
            self.record(Call::CreateItem(list_id.clone(), label.to_string()), "create_item")?;
            let mut detail = self.detail.borrow_mut();
            let id = EntityId::from(format!("i{}", detail.items.len() + 1));
            detail.items.push(Item { id, label: label.to_string(), checked: false });
            Ok(detail.clone())
        }

        async fn delete_item(&self, list_id: &EntityId, item_id: &EntityId) -> Result<ListDetail, ApiError> {
            self.record(Call::DeleteItem(list_id.clone(), item_id.clone()), "delete_item")?;
            let mut detail = self.detail.borrow_mut();
            detail.items.retain(|item| &item.id != item_id);
            Ok(detail.clone())
        }

        async fn set_checked_state(
            &self,
            list_id: &EntityId,
            item_id: &EntityId,
            checked_state: bool,
        ) -> Result<ListDetail, ApiError> {
            self.record(
                Call::SetChecked(list_id.clone(), item_id.clone(), checked_state),
                "set_checked_state",
            )?;
            let mut detail = self.detail.borrow_mut();
            if let Some(item) = detail.items.iter_mut().find(|item| &item.id == item_id) {
                item.checked = checked_state;
            }
            Ok(detail.clone())
        }
    }

    fn groceries() -> ListDetail {
        ListDetail {
            id: EntityId::from(3u64),
            name: "Groceries".into(),
            items: vec![
                Item { id: "i1".into(), label: "Milk".into(), checked: false },
                Item { id: "i2".into(), label: "Eggs".into(), checked: true },
            ],
        }
    }

    // ========================
    // Root view
    // ========================

    #[tokio::test]
    async fn test_reload_hands_over_exactly_the_backend_summaries() {
        let backend = RecordingBackend::default();
        let lists = vec![ListSummary { id: EntityId::from(1u64), name: "A".into(), item_count: None }];
        *backend.summaries.borrow_mut() = lists.clone();

        let outcome = run_lists_action(&backend, &RequestGuard::new(), ListsAction::Reload).await;

        assert_eq!(backend.calls(), vec![Call::ListSummaries]);
        assert_eq!(outcome.summaries, Some(lists));
        assert!(outcome.failure.is_none());
        assert!(!outcome.created);
    }

    #[tokio::test]
    async fn test_create_posts_then_refetches() {
        let backend = RecordingBackend::default();
        let action = ListsAction::Create { name: "Groceries".into() };

        let outcome = run_lists_action(&backend, &RequestGuard::new(), action).await;

        assert_eq!(
            backend.calls(),
            vec![Call::CreateList("Groceries".into()), Call::ListSummaries]
        );
        assert!(outcome.created);
        let names: Vec<String> = outcome.summaries.unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Groceries"]);
    }

    #[tokio::test]
    async fn test_failed_create_skips_refetch() {
        let backend = RecordingBackend { failing: Some("create_list"), ..Default::default() };
        let action = ListsAction::Create { name: "Groceries".into() };

        let outcome = run_lists_action(&backend, &RequestGuard::new(), action.clone()).await;

        assert_eq!(backend.calls(), vec![Call::CreateList("Groceries".into())]);
        assert!(!outcome.created);
        assert!(outcome.summaries.is_none());
        assert_eq!(outcome.failure.map(|f| f.action), Some(action));
    }

    #[tokio::test]
    async fn test_empty_list_name_sends_nothing() {
        let backend = RecordingBackend::default();
        let action = ListsAction::Create { name: "   ".into() };

        let outcome = run_lists_action(&backend, &RequestGuard::new(), action).await;

        assert!(backend.calls().is_empty());
        assert_eq!(outcome, ListsOutcome::default());
    }

    #[tokio::test]
    async fn test_delete_then_refetch() {
        let backend = RecordingBackend::default();
        *backend.summaries.borrow_mut() = vec![
            ListSummary { id: "a".into(), name: "A".into(), item_count: Some(1) },
            ListSummary { id: "b".into(), name: "B".into(), item_count: Some(0) },
        ];

        let outcome = run_lists_action(&backend, &RequestGuard::new(), ListsAction::Delete { id: "a".into() }).await;

        assert_eq!(backend.calls(), vec![Call::DeleteList("a".into()), Call::ListSummaries]);
        let ids: Vec<String> = outcome.summaries.unwrap().into_iter().map(|s| s.id.to_string()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[tokio::test]
    async fn test_failed_refetch_after_create_still_clears_name() {
        let backend = RecordingBackend { failing: Some("list_summaries"), ..Default::default() };

        let outcome = run_lists_action(
            &backend,
            &RequestGuard::new(),
            ListsAction::Create { name: "Chores".into() },
        )
        .await;

        assert!(outcome.created);
        assert!(outcome.summaries.is_none());
        assert_eq!(outcome.failure.map(|f| f.action), Some(ListsAction::Reload));
    }

    // ========================
    // Detail view
    // ========================

    #[tokio::test]
    async fn test_load_fetches_selected_list() {
        let backend = RecordingBackend::with_detail(groceries());
        let list_id = EntityId::from(3u64);

        let outcome = run_detail_action(&backend, &RequestGuard::new(), &list_id, DetailAction::Load).await;

        assert_eq!(backend.calls(), vec![Call::GetList(list_id)]);
        assert_eq!(outcome, DetailOutcome::Loaded { detail: groceries(), clear_input: false });
    }

    #[tokio::test]
    async fn test_response_after_list_change_is_dropped() {
        let guard = RequestGuard::new();
        let backend = RecordingBackend {
            navigate_during: Some(guard.clone()),
            ..RecordingBackend::with_detail(groceries())
        };

        let outcome = run_detail_action(&backend, &guard, &EntityId::from(3u64), DetailAction::Load).await;

        assert_eq!(backend.calls().len(), 1);
        assert_eq!(outcome, DetailOutcome::Stale);
    }

    #[tokio::test]
    async fn test_empty_label_sends_nothing() {
        let backend = RecordingBackend::with_detail(groceries());
        let action = DetailAction::CreateItem { label: " \t".into() };

        let outcome = run_detail_action(&backend, &RequestGuard::new(), &EntityId::from(3u64), action).await;

        assert!(backend.calls().is_empty());
        assert_eq!(outcome, DetailOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_create_item_replaces_state_and_clears_input() {
        let backend = RecordingBackend::with_detail(groceries());
        let list_id = EntityId::from(3u64);
        let action = DetailAction::CreateItem { label: " Bread ".into() };

        let outcome = run_detail_action(&backend, &RequestGuard::new(), &list_id, action).await;

        assert_eq!(backend.calls(), vec![Call::CreateItem(list_id, "Bread".into())]);
        match outcome {
            DetailOutcome::Loaded { detail, clear_input } => {
                assert!(clear_input);
                assert_eq!(detail.items.len(), 3);
                assert_eq!(detail.items[2].label, "Bread");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_create_item_keeps_input() {
        let backend = RecordingBackend { failing: Some("create_item"), ..RecordingBackend::with_detail(groceries()) };
        let action = DetailAction::CreateItem { label: "Bread".into() };

        let outcome = run_detail_action(&backend, &RequestGuard::new(), &EntityId::from(3u64), action.clone()).await;

        assert!(matches!(outcome, DetailOutcome::Failed(ref f) if f.action == action));
    }

    #[tokio::test]
    async fn test_deleted_item_disappears() {
        let backend = RecordingBackend::with_detail(groceries());
        let list_id = EntityId::from(3u64);
        let item_id = EntityId::from("i1");

        let outcome = run_detail_action(
            &backend,
            &RequestGuard::new(),
            &list_id,
            DetailAction::DeleteItem { item_id: item_id.clone() },
        )
        .await;

        assert_eq!(backend.calls(), vec![Call::DeleteItem(list_id, item_id.clone())]);
        match outcome {
            DetailOutcome::Loaded { detail, .. } => assert!(detail.item(&item_id).is_none()),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_toggle_sends_negated_state() {
        let backend = RecordingBackend::with_detail(groceries());
        let guard = RequestGuard::new();
        let list_id = EntityId::from(3u64);
        let current = groceries();

        toggle_item(&backend, &guard, &list_id, Some(&current), &"i1".into()).await;
        toggle_item(&backend, &guard, &list_id, Some(&current), &"i2".into()).await;

        assert_eq!(
            backend.calls(),
            vec![
                Call::SetChecked(list_id.clone(), "i1".into(), true),
                Call::SetChecked(list_id, "i2".into(), false),
            ]
        );
    }

    #[tokio::test]
    async fn test_toggle_unknown_item_sends_nothing() {
        let backend = RecordingBackend::with_detail(groceries());
        let current = groceries();

        let outcome = toggle_item(&backend, &RequestGuard::new(), &EntityId::from(3u64), Some(&current), &"gone".into()).await;
        let before_load = toggle_item(&backend, &RequestGuard::new(), &EntityId::from(3u64), None, &"i1".into()).await;

        assert!(backend.calls().is_empty());
        assert_eq!(outcome, DetailOutcome::Skipped);
        assert_eq!(before_load, DetailOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_retry_of_failed_toggle_resends_same_target() {
        let failing = RecordingBackend { failing: Some("set_checked_state"), ..RecordingBackend::with_detail(groceries()) };
        let list_id = EntityId::from(3u64);
        let current = groceries();

        let outcome = toggle_item(&failing, &RequestGuard::new(), &list_id, Some(&current), &"i1".into()).await;
        let DetailOutcome::Failed(failure) = outcome else {
            panic!("toggle should have failed");
        };

        let backend = RecordingBackend::with_detail(groceries());
        let outcome = run_detail_action(&backend, &RequestGuard::new(), &list_id, failure.action).await;

        assert_eq!(backend.calls(), vec![Call::SetChecked(list_id, "i1".into(), true)]);
        match outcome {
            DetailOutcome::Loaded { detail, .. } => assert!(detail.item(&"i1".into()).unwrap().checked),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
