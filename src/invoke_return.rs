//! The invoke-return binding (C6): brokers destination variables between an
//! `invoke*` and the `move-result*` that follows it in the same block.
//!
//! Replaces the source's implicit, stateful `ret` object passed by shared
//! mutation with an explicit `&mut InvokeReturn` parameter threaded by the
//! dispatch layer to exactly the opcodes that need it.

use std::rc::Rc;

use crate::ir::{IrNode, Operand};

/// Per-invocation return-name generator.
///
/// `new()` mints a placeholder operand the pending invoke's result flows
/// through, not tied to any real vreg (synthetic identity only — the vreg
/// field is a counter private to this generator, never installed into a
/// `RegisterMap`); `set_to` instead pins the generator to an
/// already-existing operand (used for the constructor-call special case in
/// §4.7, where the "result" of a void `invoke-direct <init>` is the
/// receiver itself).
#[derive(Debug, Default)]
pub struct InvokeReturn {
    pending: Option<Operand>,
    next_placeholder: u16,
}

impl InvokeReturn {
    pub fn new() -> Self {
        InvokeReturn::default()
    }

    /// Mints a fresh placeholder and remembers it as the pending return
    /// binding. Placeholders never collide with each other (monotonic
    /// counter) but are deliberately outside the real vreg namespace
    /// tracked by `RegisterMap`.
    pub fn new_placeholder(&mut self) -> Operand {
        let placeholder = Rc::new(IrNode::Variable {
            vreg: self.next_placeholder,
        });
        self.next_placeholder += 1;
        self.pending = Some(placeholder.clone());
        placeholder
    }

    /// Pins the generator to an existing operand without minting a new one.
    pub fn set_to(&mut self, operand: Operand) {
        self.pending = Some(operand);
    }

    /// The operand a following `move-result*` should bind to, if any.
    pub fn pending(&self) -> Option<Operand> {
        self.pending.clone()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
