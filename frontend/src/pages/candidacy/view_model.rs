use chrono::NaiveDate;
use chrono_tz::Tz;
use leptos::*;
use std::future::Future;

use super::repository::{ApplicationQueryService, ApplicationsRepository};
use super::types::{filter_rows_by_email, map_records, ApplicationRow};
use crate::api::{ApiClient, ApiError, ApplicationPage, ApplicationQuery, ApplicationStatus};
use crate::components::data_table::{clamp_page, FilterKind, FilterOption, TableFilter};
use crate::config;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationFilters {
    /// Narrows the loaded rows only; never sent to the service.
    pub email: String,
    pub status: Option<ApplicationStatus>,
    pub created_at: Option<NaiveDate>,
}

impl ApplicationFilters {
    pub fn status_value(&self) -> String {
        self.status
            .map(|status| status.as_str())
            .unwrap_or(ApplicationStatus::FILTER_ALL)
            .to_string()
    }

    pub fn date_value(&self) -> String {
        self.created_at
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed,
    Superseded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingState {
    pub rows: Vec<ApplicationRow>,
    pub loading: bool,
    pub total_pages: u32,
    latest: u64,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            loading: true,
            total_pages: 1,
            latest: 0,
        }
    }
}

impl ListingState {
    pub fn begin(&mut self) -> LoadTicket {
        self.latest += 1;
        self.loading = true;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Settles a load cycle. Only the latest ticket may touch the state; on
    /// failure the previous rows stay on screen.
    pub fn finish(
        &mut self,
        ticket: LoadTicket,
        result: Result<ApplicationPage, ApiError>,
        tz: Tz,
    ) -> LoadOutcome {
        if !self.is_current(ticket) {
            log::debug!(
                "Ignoring superseded applications response #{} (latest #{})",
                ticket.0,
                self.latest
            );
            return LoadOutcome::Superseded;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.rows = map_records(&page.records, tz);
                self.total_pages = page.total_pages.max(1);
                LoadOutcome::Applied
            }
            Err(err) => {
                log::error!("Erro ao carregar candidaturas: {} ({})", err, err.code);
                LoadOutcome::Failed
            }
        }
    }
}

pub async fn run_load_cycle<S>(
    service: &S,
    listing: RwSignal<ListingState>,
    query: ApplicationQuery,
    tz: Tz,
) -> LoadOutcome
where
    S: ApplicationQueryService,
{
    let Some(ticket) = listing.try_update(ListingState::begin) else {
        return LoadOutcome::Superseded;
    };
    let result = service.fetch_applications(&query).await;
    listing
        .try_update(|state| state.finish(ticket, result, tz))
        .unwrap_or(LoadOutcome::Superseded)
}

#[derive(Clone, Copy)]
pub struct ApplicationsViewModel {
    pub page: RwSignal<u32>,
    pub limit: RwSignal<u32>,
    pub filters: RwSignal<ApplicationFilters>,
    pub listing: RwSignal<ListingState>,
    pub query: Memo<ApplicationQuery>,
    pub visible_rows: Memo<Vec<ApplicationRow>>,
}

impl ApplicationsViewModel {
    pub fn new<S>(service: S) -> Self
    where
        S: ApplicationQueryService + Clone + 'static,
    {
        let page = create_rw_signal(1u32);
        let limit = create_rw_signal(DEFAULT_PAGE_SIZE);
        let filters = create_rw_signal(ApplicationFilters::default());
        let listing = create_rw_signal(ListingState::default());

        let query = create_memo(move |_| {
            let (status, created_at) = filters.with(|f| (f.status, f.created_at));
            ApplicationQuery::new(page.get(), limit.get())
                .with_status(status)
                .with_created_at(created_at)
        });

        let visible_rows = create_memo(move |_| {
            let email = filters.with(|f| f.email.clone());
            listing.with(|state| filter_rows_by_email(&state.rows, &email))
        });

        let vm = Self {
            page,
            limit,
            filters,
            listing,
            query,
            visible_rows,
        };

        create_effect(move |_| {
            let load = vm.load_current_query(service.clone());
            spawn_local(async move {
                load.await;
            });
        });

        vm
    }

    /// Snapshots the current query (tracked) and returns the load cycle for it.
    pub fn load_current_query<S>(
        &self,
        service: S,
    ) -> impl Future<Output = LoadOutcome> + 'static
    where
        S: ApplicationQueryService + 'static,
    {
        let listing = self.listing;
        let query = self.query.get();
        let tz = config::current_time_zone();
        async move { run_load_cycle(&service, listing, query, tz).await }
    }

    pub fn set_page(&self, page: u32) {
        let total_pages = self.listing.with_untracked(|state| state.total_pages);
        self.page.set(clamp_page(page, total_pages));
    }

    pub fn set_page_size(&self, size: u32) {
        batch(|| {
            self.limit.set(size);
            self.page.set(1);
        });
    }

    pub fn set_email_filter(&self, value: String) {
        self.filters.update(|f| f.email = value);
    }

    pub fn set_status_filter(&self, value: &str) {
        let status = ApplicationStatus::from_filter_value(value);
        batch(|| {
            self.filters.update(|f| f.status = status);
            self.page.set(1);
        });
    }

    pub fn set_date_filter(&self, value: &str) {
        let created_at = crate::utils::time::parse_filter_date(value);
        batch(|| {
            self.filters.update(|f| f.created_at = created_at);
            self.page.set(1);
        });
    }

    pub fn filter_descriptors(&self) -> Vec<TableFilter> {
        let vm = *self;
        let filters = self.filters;

        let mut status_options = vec![FilterOption {
            label: "Todos",
            value: ApplicationStatus::FILTER_ALL,
        }];
        status_options.extend(ApplicationStatus::ALL.into_iter().map(|status| FilterOption {
            label: status.label(),
            value: status.as_str(),
        }));

        vec![
            TableFilter {
                kind: FilterKind::Input,
                column: Some("email"),
                placeholder: "Filtrar emails...",
                value: Signal::derive(move || filters.with(|f| f.email.clone())),
                on_change: Callback::new(move |value: String| vm.set_email_filter(value)),
            },
            TableFilter {
                kind: FilterKind::Select(status_options),
                column: None,
                placeholder: "Filtrar status",
                value: Signal::derive(move || filters.with(ApplicationFilters::status_value)),
                on_change: Callback::new(move |value: String| vm.set_status_filter(&value)),
            },
            TableFilter {
                kind: FilterKind::Date,
                column: Some("createdAt"),
                placeholder: "Filtrar por data...",
                value: Signal::derive(move || filters.with(ApplicationFilters::date_value)),
                on_change: Callback::new(move |value: String| vm.set_date_filter(&value)),
            },
        ]
    }
}

pub fn use_applications_view_model() -> ApplicationsViewModel {
    match use_context::<ApplicationsViewModel>() {
        Some(vm) => vm,
        None => {
            let api = use_context::<ApiClient>().unwrap_or_default();
            let vm = ApplicationsViewModel::new(ApplicationsRepository::new(api));
            provide_context(vm);
            vm
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::NO_LIMIT;
    use crate::test_support::helpers::{page_of, query_failed, FakeApplicationService};
    use crate::test_support::ssr::with_runtime;
    use futures::{channel::oneshot, executor::block_on, FutureExt};
    use std::{cell::RefCell, collections::HashMap};

    const TZ: Tz = chrono_tz::UTC;

    #[test]
    fn default_query_is_first_page_of_ten_without_filters() {
        with_runtime(|| {
            let vm = ApplicationsViewModel::new(FakeApplicationService::default());
            assert_eq!(vm.query.get_untracked(), ApplicationQuery::new(1, 10));
        });
    }

    #[test]
    fn status_selection_updates_query_and_resets_page() {
        with_runtime(|| {
            let vm = ApplicationsViewModel::new(FakeApplicationService::default());
            vm.page.set(3);
            vm.set_status_filter("ACCEPTED");
            let query = vm.query.get_untracked();
            assert_eq!(query.status, Some(ApplicationStatus::Accepted));
            assert_eq!(query.page, 1);

            vm.set_status_filter("all");
            assert_eq!(vm.query.get_untracked().status, None);
        });
    }

    #[test]
    fn zero_page_size_drops_limit_from_query() {
        with_runtime(|| {
            let vm = ApplicationsViewModel::new(FakeApplicationService::default());
            vm.set_page_size(NO_LIMIT);
            assert_eq!(vm.query.get_untracked().limit, None);
            vm.set_page_size(50);
            assert_eq!(vm.query.get_untracked().limit, Some(50));
        });
    }

    #[test]
    fn date_filter_is_parsed_and_cleared() {
        with_runtime(|| {
            let vm = ApplicationsViewModel::new(FakeApplicationService::default());
            vm.set_date_filter("2025-01-15");
            assert_eq!(
                vm.query.get_untracked().created_at,
                NaiveDate::from_ymd_opt(2025, 1, 15)
            );
            vm.set_date_filter("");
            assert_eq!(vm.query.get_untracked().created_at, None);
        });
    }

    #[test]
    fn email_filter_narrows_rows_without_touching_query() {
        with_runtime(|| {
            let vm = ApplicationsViewModel::new(FakeApplicationService::default());
            vm.listing.update(|state| {
                let ticket = state.begin();
                state.finish(ticket, Ok(page_of(&["ana", "rui"], 1)), TZ);
            });
            let before = vm.query.get_untracked();

            vm.set_email_filter("rui".into());
            assert_eq!(vm.query.get_untracked(), before);
            let visible = vm.visible_rows.get_untracked();
            assert_eq!(visible.len(), 1);
            assert_eq!(visible[0].id, "rui");
        });
    }

    #[test]
    fn page_changes_are_clamped_to_known_pages() {
        with_runtime(|| {
            let vm = ApplicationsViewModel::new(FakeApplicationService::default());
            vm.listing.update(|state| {
                let ticket = state.begin();
                state.finish(ticket, Ok(page_of(&["a1"], 3)), TZ);
            });
            vm.set_page(7);
            assert_eq!(vm.page.get_untracked(), 3);
            vm.set_page(0);
            assert_eq!(vm.page.get_untracked(), 1);
        });
    }

    #[test]
    fn filter_descriptor_callbacks_drive_view_model() {
        with_runtime(|| {
            let vm = ApplicationsViewModel::new(FakeApplicationService::default());
            let descriptors = vm.filter_descriptors();
            assert_eq!(descriptors.len(), 3);
            assert_eq!(descriptors[0].column, Some("email"));
            assert_eq!(descriptors[2].column, Some("createdAt"));
            match &descriptors[1].kind {
                FilterKind::Select(options) => {
                    assert_eq!(options.len(), 6);
                    assert_eq!(options[0].value, "all");
                }
                other => panic!("expected select filter, got {:?}", other),
            }

            descriptors[1].on_change.call("INTERVIEW".to_string());
            assert_eq!(
                vm.query.get_untracked().status,
                Some(ApplicationStatus::Interview)
            );
            assert_eq!(descriptors[1].value.get_untracked(), "INTERVIEW");

            descriptors[1].on_change.call("all".to_string());
            assert_eq!(vm.query.get_untracked().status, None);
            assert_eq!(descriptors[1].value.get_untracked(), "all");
        });
    }

    #[test]
    fn load_cycle_maps_three_records_into_rows() {
        with_runtime(|| {
            let service =
                FakeApplicationService::with_responses(vec![Ok(page_of(&["a1", "a2", "a3"], 1))]);
            let listing = create_rw_signal(ListingState::default());

            let outcome = block_on(run_load_cycle(
                &service,
                listing,
                ApplicationQuery::new(1, 10),
                TZ,
            ));

            assert_eq!(outcome, LoadOutcome::Applied);
            let state = listing.get_untracked();
            assert_eq!(state.rows.len(), 3);
            assert_eq!(state.total_pages, 1);
            assert!(!state.loading);
            assert_eq!(service.calls(), vec![ApplicationQuery::new(1, 10)]);
        });
    }

    #[test]
    fn load_cycle_failure_keeps_rows_and_clears_loading() {
        with_runtime(|| {
            let service = FakeApplicationService::with_responses(vec![
                Ok(page_of(&["a1", "a2"], 1)),
                Err(query_failed()),
            ]);
            let listing = create_rw_signal(ListingState::default());
            let query = ApplicationQuery::new(1, 10);

            block_on(run_load_cycle(&service, listing, query.clone(), TZ));
            let outcome = block_on(run_load_cycle(&service, listing, query, TZ));

            assert_eq!(outcome, LoadOutcome::Failed);
            let state = listing.get_untracked();
            assert!(!state.loading);
            assert_eq!(state.rows.len(), 2);
        });
    }

    #[test]
    fn status_change_refetch_replaces_rows() {
        with_runtime(|| {
            let service = FakeApplicationService::with_responses(vec![
                Ok(page_of(&["a1", "a2", "a3"], 2)),
                Ok(page_of(&["accepted-1"], 1)),
            ]);
            let vm = ApplicationsViewModel::new(service.clone());

            assert_eq!(
                block_on(vm.load_current_query(service.clone())),
                LoadOutcome::Applied
            );
            vm.set_status_filter("ACCEPTED");
            assert_eq!(
                block_on(vm.load_current_query(service.clone())),
                LoadOutcome::Applied
            );

            let calls = service.calls();
            assert_eq!(calls[1].status, Some(ApplicationStatus::Accepted));
            let rows = vm.listing.get_untracked().rows;
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].id, "accepted-1");
        });
    }

    #[test]
    fn current_query_load_sends_filters_and_page_size() {
        with_runtime(|| {
            let service =
                FakeApplicationService::with_responses(vec![Ok(page_of(&["a1"], 1))]);
            let vm = ApplicationsViewModel::new(service.clone());
            vm.page.set(4);
            vm.set_page_size(NO_LIMIT);
            vm.set_date_filter("2025-01-15");

            block_on(vm.load_current_query(service.clone()));

            let expected = ApplicationQuery::new(1, NO_LIMIT)
                .with_created_at(NaiveDate::from_ymd_opt(2025, 1, 15));
            assert_eq!(service.calls(), vec![expected]);
            assert!(!vm.listing.get_untracked().loading);
        });
    }

    /// Each page waits on its own channel so tests can pick the completion order.
    struct GatedService {
        gates: RefCell<HashMap<u32, oneshot::Receiver<Result<ApplicationPage, ApiError>>>>,
    }

    impl ApplicationQueryService for GatedService {
        async fn fetch_applications(
            &self,
            query: &ApplicationQuery,
        ) -> Result<ApplicationPage, ApiError> {
            let gate = self.gates.borrow_mut().remove(&query.page);
            match gate {
                Some(rx) => rx.await.unwrap_or_else(|_| Err(query_failed())),
                None => Err(query_failed()),
            }
        }
    }

    #[test]
    fn older_response_arriving_last_does_not_overwrite_newer_rows() {
        with_runtime(|| {
            let (tx_first, rx_first) = oneshot::channel();
            let (tx_second, rx_second) = oneshot::channel();
            let service = GatedService {
                gates: RefCell::new(HashMap::from([(1, rx_first), (2, rx_second)])),
            };
            let listing = create_rw_signal(ListingState::default());

            let mut first = Box::pin(run_load_cycle(
                &service,
                listing,
                ApplicationQuery::new(1, 10),
                TZ,
            ));
            let mut second = Box::pin(run_load_cycle(
                &service,
                listing,
                ApplicationQuery::new(2, 10),
                TZ,
            ));
            assert!(first.as_mut().now_or_never().is_none());
            assert!(second.as_mut().now_or_never().is_none());

            tx_second.send(Ok(page_of(&["page-2"], 2))).unwrap();
            assert_eq!(second.as_mut().now_or_never(), Some(LoadOutcome::Applied));

            tx_first.send(Ok(page_of(&["page-1"], 2))).unwrap();
            assert_eq!(first.as_mut().now_or_never(), Some(LoadOutcome::Superseded));

            let state = listing.get_untracked();
            assert!(!state.loading);
            assert_eq!(state.rows.len(), 1);
            assert_eq!(state.rows[0].id, "page-2");
        });
    }
}
