//! Scenario state and runtime/server initialisation for the list pagination
//! BDD tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use taplist::catalog::HttpCatalogGateway;
use taplist::listing::{FetchCompletion, FetchOutcome, FetchTicket, ListState, fetch_page};
use taplist::telemetry::NoopTelemetrySink;
use tokio::runtime::Runtime;
use wiremock::MockServer;

pub(crate) type StepResult = Result<(), Box<dyn std::error::Error>>;

/// Shared runtime wrapper that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub(crate) fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

#[derive(ScenarioState, Default)]
pub(crate) struct PaginationState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) per_page: Slot<u8>,
    pub(crate) list: Slot<ListState>,
    pub(crate) in_flight: Slot<FetchTicket>,
    pub(crate) issued_load_more: Slot<usize>,
    pub(crate) last_outcome: Slot<FetchOutcome>,
}

/// Ensures the runtime and server are initialised in `PaginationState`.
pub(crate) fn ensure_runtime_and_server(
    state: &PaginationState,
) -> Result<SharedRuntime, Box<dyn std::error::Error>> {
    if state.runtime.with_ref(|_| ()).is_none() {
        state.runtime.set(SharedRuntime::new(Runtime::new()?));
    }

    let shared_runtime = state
        .runtime
        .get()
        .ok_or("runtime not initialised after set")?;

    if state.server.with_ref(|_| ()).is_none() {
        state.server.set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}

/// Sends the request for `ticket` to the mock server.
pub(crate) fn run_ticket(
    state: &PaginationState,
    ticket: FetchTicket,
) -> Result<FetchCompletion, Box<dyn std::error::Error>> {
    let runtime = state.runtime.get().ok_or("runtime not initialised")?;
    let server_url = state
        .server
        .with_ref(MockServer::uri)
        .ok_or("mock server URL missing")?;
    let gateway = HttpCatalogGateway::new(&server_url, Duration::from_secs(5))?;

    Ok(runtime.block_on(fetch_page(&gateway, ticket, &NoopTelemetrySink)))
}

/// Folds `completion` into the stored list and remembers the outcome.
pub(crate) fn apply_completion(state: &PaginationState, completion: FetchCompletion) -> StepResult {
    let list = state.list.take().ok_or("list not initialised")?;
    let (list, outcome) = list.apply(completion);
    state.list.set(list);
    state.last_outcome.set(outcome);
    Ok(())
}
