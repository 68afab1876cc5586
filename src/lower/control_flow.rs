//! `goto*`, `if-<cond>`, `if-<cond>z`, `packed-switch`/`sparse-switch`
//! (spec §4.6). Branch edges themselves are the CFG builder's concern; none
//! of these opcodes carry a jump target in their IR shape.

use crate::ir::{CondOp, IrNode, Operand};
use crate::regmap::RegisterMap;

/// `goto`, `goto/16`, `goto/32` all lower to a no-op; the CFG builder
/// materializes the edge itself from the raw branch offset.
pub fn lower_goto() -> Operand {
    IrNode::NopExpression.into_operand()
}

pub fn lower_if_cond(op: CondOp, lhs: u16, rhs: u16, regs: &mut RegisterMap) -> Operand {
    let lhs = regs.lookup_one(lhs);
    let rhs = regs.lookup_one(rhs);
    IrNode::ConditionalExpression { op, lhs, rhs }.into_operand()
}

pub fn lower_if_condz(op: CondOp, vreg: u16, regs: &mut RegisterMap) -> Operand {
    let operand = regs.lookup_one(vreg);
    IrNode::ConditionalZExpression { op, operand }.into_operand()
}

pub fn lower_switch(vreg: u16, payload_offset: i32, regs: &mut RegisterMap) -> Operand {
    let operand = regs.lookup_one(vreg);
    IrNode::SwitchExpression {
        operand,
        payload_offset,
    }
    .into_operand()
}
