//! Array operations (spec §4.5): `new-array`, `filled-new-array(/range)`,
//! `fill-array-data`, `aget*`/`aput*`, `array-length`.

use crate::ir::{ArrayElements, ArrayPayload, IrNode, Operand};
use crate::regmap::RegisterMap;
use crate::types::ElementTypeTag;

pub fn lower_new_array(dst: u16, size: u16, array_type: &str, regs: &mut RegisterMap) -> Operand {
    let size = regs.lookup_one(size);
    let rhs = IrNode::NewArrayExpression {
        size,
        array_type: array_type.to_string(),
    }
    .into_operand();
    let lhs = regs.lookup_one(dst);
    IrNode::AssignExpression {
        lhs: Some(lhs),
        rhs,
    }
    .into_operand()
}

/// `filled-new-array {vD,vE,vF,vG,vA}`: the first `count` registers of the
/// quintet, in order.
pub fn lower_filled_new_array(vregs: &[u16], array_type: &str, regs: &mut RegisterMap) -> Operand {
    let elements = ArrayElements::List(regs.lookup_many(vregs));
    IrNode::FilledArrayExpression {
        elements,
        array_type: array_type.to_string(),
    }
    .into_operand()
}

/// `filled-new-array/range`: stores the `[start, end]` register-range
/// shortcut rather than an expanded element list; the CFG builder expands
/// it when needed (spec §9 open question).
pub fn lower_filled_new_array_range(start: u16, end: u16, array_type: &str) -> Operand {
    IrNode::FilledArrayExpression {
        elements: ArrayElements::Range { start, end },
        array_type: array_type.to_string(),
    }
    .into_operand()
}

pub fn lower_fill_array_data(dst: u16, payload: Option<ArrayPayload>, regs: &mut RegisterMap) -> Operand {
    let dst = regs.lookup_one(dst);
    IrNode::FillArrayExpression { dst, payload }.into_operand()
}

pub fn lower_array_load(dst: u16, array: u16, index: u16, elem_type_tag: Option<ElementTypeTag>, regs: &mut RegisterMap) -> Operand {
    let array_var = regs.lookup_one(array);
    let index_var = regs.lookup_one(index);
    let rhs = IrNode::ArrayLoadExpression {
        array: array_var,
        index: index_var,
        elem_type_tag,
    }
    .into_operand();
    let lhs = regs.lookup_one(dst);
    IrNode::AssignExpression {
        lhs: Some(lhs),
        rhs,
    }
    .into_operand()
}

pub fn lower_array_store(
    value: u16,
    array: u16,
    index: u16,
    elem_type_tag: Option<ElementTypeTag>,
    regs: &mut RegisterMap,
) -> Operand {
    let value = regs.lookup_one(value);
    let array = regs.lookup_one(array);
    let index = regs.lookup_one(index);
    IrNode::ArrayStoreInstruction {
        value,
        array,
        index,
        elem_type_tag,
    }
    .into_operand()
}

pub fn lower_array_length(dst: u16, array: u16, regs: &mut RegisterMap) -> Operand {
    let array = regs.lookup_one(array);
    let rhs = IrNode::ArrayLengthExpression { array }.into_operand();
    let lhs = regs.lookup_one(dst);
    IrNode::AssignExpression {
        lhs: Some(lhs),
        rhs,
    }
    .into_operand()
}
