//! `move*`, `return*`, `move-result*`, `move-exception` (spec §4.3).

use crate::ir::{IrNode, Operand};
use crate::invoke_return::InvokeReturn;
use crate::regmap::RegisterMap;

/// `move`, `move-wide`, `move-object` and their `/from16`, `/16` widenings
/// all lower identically — width/object-ness is recovered later from type
/// inference, not encoded in the IR. They differ only in which raw fields
/// name `dst`/`src`, which the caller has already resolved into `dst`/`src`.
pub fn lower_move(dst: u16, src: u16, regs: &mut RegisterMap) -> Operand {
    let dst = regs.lookup_one(dst);
    let src = regs.lookup_one(src);
    IrNode::MoveExpression { dst, src }.into_operand()
}

pub fn lower_return_void() -> Operand {
    IrNode::ReturnInstruction { operand: None }.into_operand()
}

pub fn lower_return(vreg: u16, regs: &mut RegisterMap) -> Operand {
    let operand = regs.lookup_one(vreg);
    IrNode::ReturnInstruction {
        operand: Some(operand),
    }
    .into_operand()
}

pub fn lower_move_result(dst: u16, regs: &mut RegisterMap, ret: &mut InvokeReturn) -> Operand {
    let dst = regs.lookup_one(dst);
    let result_source = ret.pending().unwrap_or_else(|| dst.clone());
    ret.clear();
    IrNode::MoveResultExpression { dst, result_source }.into_operand()
}

pub fn lower_move_exception(dst: u16, exception_type: &str, regs: &mut RegisterMap) -> Operand {
    let dst = regs.lookup_one(dst);
    IrNode::MoveExceptionExpression {
        dst,
        exception_type: exception_type.to_string(),
    }
    .into_operand()
}
