//! The list reducer.

use crate::catalog::{Beer, CatalogError, PageNumber, PageRequest, PerPage};

/// Monotonic request sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// Returns the following sequence number.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the raw sequence number.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Why a request was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchIntent {
    /// First load after mount.
    Initial,
    /// User-initiated reload from page 1.
    Refresh,
    /// Next page appended at the end of the list.
    LoadMore,
}

impl FetchIntent {
    /// Returns true for intents that replace the list from page 1.
    #[must_use]
    pub const fn resets_list(self) -> bool {
        matches!(self, Self::Initial | Self::Refresh)
    }

    /// Short label for logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Refresh => "refresh",
            Self::LoadMore => "load_more",
        }
    }
}

/// A request the reducer wants issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: RequestSeq,
    intent: FetchIntent,
    request: PageRequest,
}

impl FetchTicket {
    /// Sequence number identifying this request.
    #[must_use]
    pub const fn seq(&self) -> RequestSeq {
        self.seq
    }

    /// Why the request was issued.
    #[must_use]
    pub const fn intent(&self) -> FetchIntent {
        self.intent
    }

    /// Page being requested.
    #[must_use]
    pub const fn page(&self) -> PageNumber {
        self.request.page()
    }

    /// Full request parameters.
    #[must_use]
    pub const fn request(&self) -> &PageRequest {
        &self.request
    }
}

/// A finished request, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCompletion {
    /// The ticket the request was issued for.
    pub ticket: FetchTicket,
    /// Decoded page or the error that prevented it.
    pub result: Result<Vec<Beer>, CatalogError>,
}

impl FetchCompletion {
    /// Successful completion carrying `beers`.
    #[must_use]
    pub const fn success(ticket: FetchTicket, beers: Vec<Beer>) -> Self {
        Self {
            ticket,
            result: Ok(beers),
        }
    }

    /// Failed completion carrying `error`.
    #[must_use]
    pub const fn failure(ticket: FetchTicket, error: CatalogError) -> Self {
        Self {
            ticket,
            result: Err(error),
        }
    }
}

/// The most recent failed request, kept for the retry affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// Ticket of the failed request.
    pub ticket: FetchTicket,
    /// Error that ended it.
    pub error: CatalogError,
}

/// What [`ListState::apply`] did with a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Page 1 arrived and replaced the list.
    Replaced {
        /// Number of items now in the list.
        count: usize,
    },
    /// A later page arrived and was appended.
    Appended {
        /// Number of items appended.
        count: usize,
    },
    /// The request failed; the list is unchanged.
    Failed {
        /// Ticket of the failed request.
        ticket: FetchTicket,
        /// Error that ended it.
        error: CatalogError,
    },
    /// A newer request superseded this one; nothing changed.
    Stale {
        /// Ticket of the discarded request.
        ticket: FetchTicket,
    },
}

impl FetchOutcome {
    /// Returns true when the completion changed the list.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Replaced { .. } | Self::Appended { .. })
    }
}

/// Pagination cursor and list contents.
///
/// Reducer methods take the state by value and hand back the next state; the
/// caller stores whichever version it gets back.
///
/// # Example
///
/// ```
/// use taplist::catalog::models::test_support::page_of;
/// use taplist::listing::{FetchCompletion, FetchOutcome, ListState};
///
/// let (state, ticket) = ListState::default().initialize();
/// assert!(state.is_loading());
///
/// let (state, outcome) = state.apply(FetchCompletion::success(ticket, page_of(1, 10)));
/// assert_eq!(outcome, FetchOutcome::Replaced { count: 10 });
/// assert!(!state.is_loading());
///
/// let (state, next) = state.load_more();
/// assert_eq!(next.map(|t| t.page().value()), Some(2));
/// assert_eq!(state.page().value(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    items: Vec<Beer>,
    page: PageNumber,
    per_page: PerPage,
    loading: bool,
    refreshing: bool,
    exhausted: bool,
    last_issued: RequestSeq,
    pending_reset: Option<RequestSeq>,
    pending_load_more: Option<RequestSeq>,
    last_failure: Option<FetchFailure>,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(PerPage::default())
    }
}

impl ListState {
    /// Creates the mount-time state: empty list, page 1, first load pending.
    #[must_use]
    pub const fn new(per_page: PerPage) -> Self {
        Self {
            items: Vec::new(),
            page: PageNumber::FIRST,
            per_page,
            loading: true,
            refreshing: false,
            exhausted: false,
            last_issued: RequestSeq(0),
            pending_reset: None,
            pending_load_more: None,
            last_failure: None,
        }
    }

    /// Starts the first load of page 1.
    ///
    /// Supersedes anything already in flight.
    #[must_use]
    pub fn initialize(mut self) -> (Self, FetchTicket) {
        self.loading = true;
        self.refreshing = false;
        let ticket = self.begin_reset(FetchIntent::Initial);
        (self, ticket)
    }

    /// Reloads from page 1, replacing the list when the response arrives.
    ///
    /// Ignored while the first load or another refresh is still running.
    #[must_use]
    pub fn refresh(mut self) -> (Self, Option<FetchTicket>) {
        if self.loading || self.refreshing {
            return (self, None);
        }
        self.refreshing = true;
        let ticket = self.begin_reset(FetchIntent::Refresh);
        (self, Some(ticket))
    }

    /// Requests the page after the current one.
    ///
    /// Returns no ticket while the first load or a refresh is running, while
    /// another load-more is pending, when the list is empty, once a short
    /// page showed the catalog is exhausted, or after a failed refresh (the
    /// cursor no longer matches the list until page 1 loads again). After a
    /// failed load-more the same page is requested again instead of skipping
    /// past it.
    #[must_use]
    pub fn load_more(mut self) -> (Self, Option<FetchTicket>) {
        if !self.can_load_more() {
            return (self, None);
        }
        if !self.failed_load_more_pending_retry() {
            self.page = self.page.next();
        }
        let ticket = self.issue(FetchIntent::LoadMore, self.page);
        self.pending_load_more = Some(ticket.seq);
        (self, Some(ticket))
    }

    /// Re-issues the most recent failed request.
    ///
    /// A failed first load or refresh is retried as a refresh; a failed
    /// load-more requests the same page again.
    #[must_use]
    pub fn retry(self) -> (Self, Option<FetchTicket>) {
        match self.last_failure.as_ref().map(|f| f.ticket.intent) {
            None => (self, None),
            Some(FetchIntent::LoadMore) => self.load_more(),
            Some(FetchIntent::Initial | FetchIntent::Refresh) => self.refresh(),
        }
    }

    /// Folds a completed request into the state.
    ///
    /// Completions that are not the latest request for their intent are
    /// reported as [`FetchOutcome::Stale`] and change nothing. Every other
    /// completion clears both `loading` and `refreshing`.
    #[must_use]
    pub fn apply(mut self, completion: FetchCompletion) -> (Self, FetchOutcome) {
        let FetchCompletion { ticket, result } = completion;
        if !self.is_current(&ticket) {
            return (self, FetchOutcome::Stale { ticket });
        }

        if ticket.intent.resets_list() {
            self.pending_reset = None;
        } else {
            self.pending_load_more = None;
        }
        self.loading = false;
        self.refreshing = false;

        let outcome = match result {
            Ok(beers) => {
                self.last_failure = None;
                self.exhausted = beers.len() < self.per_page.as_len();
                let count = beers.len();
                if ticket.page().is_first() {
                    self.items = beers;
                    FetchOutcome::Replaced {
                        count: self.items.len(),
                    }
                } else {
                    self.items.extend(beers);
                    FetchOutcome::Appended { count }
                }
            }
            Err(error) => {
                self.last_failure = Some(FetchFailure {
                    ticket,
                    error: error.clone(),
                });
                FetchOutcome::Failed { ticket, error }
            }
        };
        (self, outcome)
    }

    /// Items in arrival order.
    #[must_use]
    pub fn items(&self) -> &[Beer] {
        &self.items
    }

    /// Number of items loaded so far.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Current page cursor.
    #[must_use]
    pub const fn page(&self) -> PageNumber {
        self.page
    }

    /// Configured page size.
    #[must_use]
    pub const fn per_page(&self) -> PerPage {
        self.per_page
    }

    /// True only until the first load completes.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// True while a user-initiated refresh is in flight.
    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// True once a page returned fewer items than the page size.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// True while a load-more request is pending.
    #[must_use]
    pub const fn is_loading_more(&self) -> bool {
        self.pending_load_more.is_some()
    }

    /// The most recent failure, cleared by the next successful completion.
    #[must_use]
    pub const fn last_failure(&self) -> Option<&FetchFailure> {
        self.last_failure.as_ref()
    }

    fn can_load_more(&self) -> bool {
        !self.loading
            && !self.refreshing
            && self.pending_load_more.is_none()
            && !self.exhausted
            && !self.items.is_empty()
            && !self.reset_failed()
    }

    fn reset_failed(&self) -> bool {
        self.last_failure
            .as_ref()
            .is_some_and(|failure| failure.ticket.intent.resets_list())
    }

    fn failed_load_more_pending_retry(&self) -> bool {
        self.last_failure.as_ref().is_some_and(|failure| {
            failure.ticket.intent == FetchIntent::LoadMore && failure.ticket.page() == self.page
        })
    }

    fn begin_reset(&mut self, intent: FetchIntent) -> FetchTicket {
        self.page = PageNumber::FIRST;
        self.exhausted = false;
        self.pending_load_more = None;
        let ticket = self.issue(intent, PageNumber::FIRST);
        self.pending_reset = Some(ticket.seq);
        ticket
    }

    fn issue(&mut self, intent: FetchIntent, page: PageNumber) -> FetchTicket {
        self.last_issued = self.last_issued.next();
        FetchTicket {
            seq: self.last_issued,
            intent,
            request: PageRequest::new(page, self.per_page),
        }
    }

    fn is_current(&self, ticket: &FetchTicket) -> bool {
        let pending = if ticket.intent.resets_list() {
            self.pending_reset
        } else {
            self.pending_load_more
        };
        pending == Some(ticket.seq)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
