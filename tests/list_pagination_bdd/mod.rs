//! Support modules for the list pagination BDD tests.

pub(crate) mod harness;
pub(crate) mod state;

pub(crate) use harness::{mount_catalogue, mount_failure};
pub(crate) use state::{
    PaginationState, StepResult, apply_completion, ensure_runtime_and_server, run_ticket,
};
