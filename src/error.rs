//! Non-fatal lowering diagnostics.
//!
//! Lowering is total by contract: none of these are ever surfaced as a hard
//! `Result::Err` from [`crate::lower::lower`]. Each is logged once via
//! `tracing::warn!` and paired with the degraded-but-valid IR node the
//! design calls for — `InterpreterError` plays the equivalent "named error
//! variants via thiserror" role in the teacher crate, except here the
//! "error" never actually aborts anything.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoweringDiagnostic {
    /// A method's declared parameter list needs more registers than the
    /// instruction supplied. The invoke is still lowered, with an empty
    /// argument list.
    #[error("argument count mismatch: method declares {declared} parameter(s), instruction supplied {supplied} register(s)")]
    ArgCountMismatch { declared: usize, supplied: usize },

    /// The dispatch index fell on a reserved/unused slot, or outside the
    /// table's declared domain. Lowered as a no-op.
    #[error("unknown or reserved opcode 0x{opcode:02x}")]
    UnknownOpcode { opcode: u8 },

    /// `fill-array-data` resolved without a payload blob from the CFG
    /// builder. Lowered with `payload: None` as a sentinel.
    #[error("fill-array-data at vreg {dst_vreg} resolved without a payload")]
    MissingPayload { dst_vreg: u16 },
}
