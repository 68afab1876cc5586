//! The per-method register map (C2).
//!
//! A dense `Vec` indexed by vreg rather than a `HashMap`, per the source
//! pattern rewrite: the vreg space is small (Dalvik methods rarely use more
//! than a few hundred registers) and bounded, so a growable vector is both
//! simpler and faster than hashing.

use std::rc::Rc;

use crate::ir::{IrNode, Operand};

/// Maps virtual-register indices to their `Variable` operand, handing out
/// the *same* `Rc` on every subsequent lookup of a given vreg.
///
/// Confined to one method lowering; not `Send`/`Sync` and does not need to
/// be (see the crate's concurrency model: no sharing across methods).
#[derive(Debug, Default)]
pub struct RegisterMap {
    slots: Vec<Option<Operand>>,
}

impl RegisterMap {
    pub fn new() -> Self {
        RegisterMap::default()
    }

    /// Returns the existing `Variable(vreg)` operand if one has been
    /// installed, otherwise creates, installs, and returns a fresh one.
    pub fn lookup_one(&mut self, vreg: u16) -> Operand {
        let index = vreg as usize;
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }

        self.slots[index]
            .get_or_insert_with(|| Rc::new(IrNode::Variable { vreg }))
            .clone()
    }

    /// Looks up several vregs at once, preserving order. Equivalent to
    /// calling `lookup_one` for each, but avoids ad-hoc single-vs-tuple
    /// return-type polymorphism.
    pub fn lookup_many(&mut self, vregs: &[u16]) -> Vec<Operand> {
        vregs.iter().map(|&v| self.lookup_one(v)).collect()
    }

    /// Seeds `vreg` with a `ThisParam` operand instead of a plain
    /// `Variable`. Called by the CFG builder before lowering begins, for
    /// whichever vreg the method's receiver occupies on entry — this crate
    /// has no way to know that on its own (it depends on the method's
    /// static-ness and register count, both CFG-builder knowledge). Has no
    /// effect if `vreg` was already looked up.
    pub fn install_this_param(&mut self, vreg: u16) {
        let index = vreg as usize;
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }

        if self.slots[index].is_none() {
            self.slots[index] = Some(Rc::new(IrNode::ThisParam { vreg }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn lookup_is_idempotent_and_identity_preserving() {
        let mut map = RegisterMap::new();
        let a = map.lookup_one(3);
        let b = map.lookup_one(3);
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn distinct_vregs_yield_distinct_variables() {
        let mut map = RegisterMap::new();
        let a = map.lookup_one(0);
        let b = map.lookup_one(1);
        assert!(!Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn lookup_many_preserves_order_and_shares_identity() {
        let mut map = RegisterMap::new();
        let first = map.lookup_one(5);
        let many = map.lookup_many(&[5, 6, 5]);
        assert!(Rc::ptr_eq(&many[0], &first));
        assert!(Rc::ptr_eq(&many[2], &first));
        assert!(!Rc::ptr_eq(&many[0], &many[1]));
    }

    #[test]
    fn install_this_param_seeds_the_receiver_slot() {
        let mut map = RegisterMap::new();
        map.install_this_param(0);
        let receiver = map.lookup_one(0);
        assert!(matches!(*receiver, IrNode::ThisParam { vreg: 0 }));
    }

    #[test]
    fn install_this_param_is_a_no_op_once_looked_up() {
        let mut map = RegisterMap::new();
        let looked_up = map.lookup_one(0);
        map.install_this_param(0);
        let again = map.lookup_one(0);
        assert!(Rc::ptr_eq(&looked_up, &again));
        assert!(matches!(*again, IrNode::Variable { vreg: 0 }));
    }
}
