//! Scripted interaction with a mounted [`App`](crate::App).

use std::str::FromStr;

use snapshot::Runtime;
use thiserror::Error;
use tracing::debug;

use crate::{App, INCREMENT, INCREMENT_AND_LOG, LOG, MEMOIZED_LOG};

/// One user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Click `Increment` and let the runtime settle
    Increment,
    /// Click `Log` and let the runtime settle
    Log,
    /// Click `Log (memoized)` and let the runtime settle
    MemoizedLog,
    /// Click `Increment and log` and let the runtime settle
    IncrementAndLog,
    /// Commit whatever is queued
    Settle,
    /// Click a control by label without settling
    Dispatch(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStepError {
    #[error("empty step in script")]
    Empty,
    #[error("unknown step `{0}`, expected inc, log, memo-log, inc-log, settle or dispatch:<label>")]
    Unknown(String),
}

impl FromStr for Step {
    type Err = ParseStepError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if let Some(label) = raw.strip_prefix("dispatch:") {
            let label = label.trim();
            if label.is_empty() {
                return Err(ParseStepError::Empty);
            }
            return Ok(Step::Dispatch(label.to_owned()));
        }

        match raw {
            "" => Err(ParseStepError::Empty),
            "inc" => Ok(Step::Increment),
            "log" => Ok(Step::Log),
            "memo-log" => Ok(Step::MemoizedLog),
            "inc-log" => Ok(Step::IncrementAndLog),
            "settle" => Ok(Step::Settle),
            other => Err(ParseStepError::Unknown(other.to_owned())),
        }
    }
}

/// Parse a comma-separated script such as `inc,inc,log,memo-log`
pub fn parse_script(raw: &str) -> Result<Vec<Step>, ParseStepError> {
    raw.split(',').map(str::parse).collect()
}

/// Apply one step, returning how many queued updates were committed
pub fn run_step(runtime: &mut Runtime<App>, step: &Step) -> snapshot::Result<usize> {
    debug!(?step, "running step");
    match step {
        Step::Increment => runtime.click(INCREMENT),
        Step::Log => runtime.click(LOG),
        Step::MemoizedLog => runtime.click(MEMOIZED_LOG),
        Step::IncrementAndLog => runtime.click(INCREMENT_AND_LOG),
        Step::Settle => runtime.settle(),
        Step::Dispatch(label) => runtime.dispatch(label).map(|()| 0),
    }
}
