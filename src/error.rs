//! Soft-fault and run-outcome types.
//!
//! Nothing in this crate's executor is a fatal error: every instruction word
//! has defined semantics, every memory address is defined, and every port
//! read is defined. `Fault` exists so the two conditions that spec'd soft
//! faults (call stack overflow/underflow) can be logged with structure
//! instead of an ad-hoc string, not so callers can propagate them with `?`.

use thiserror::Error;

/// A soft fault: reported to the host (via a `tracing::warn!` at the call
/// site), never returned from `step()` or `run()`, and never fatal.
#[derive(Debug, Error, Eq, PartialEq, Copy, Clone)]
pub enum Fault {
    /// `CAL` executed with the call stack already at depth 16. The call is
    /// not performed; PC simply advances to PC+1.
    #[error("call stack overflow at pc={pc}")]
    CallStackOverflow { pc: u16 },

    /// `RET` executed with an empty call stack. PC advances to PC+1.
    #[error("call stack underflow")]
    CallStackUnderflow,
}

/// The terminal state of a `run()` call.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum RunOutcome {
    /// The CPU halted (via `HLT` or PC running past the end of the program).
    Halted,
    /// `run()` retired `max_steps` instructions without halting.
    BudgetExhausted,
}
