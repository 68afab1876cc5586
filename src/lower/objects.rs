//! `new-instance`, `instance-of`, `check-cast`, `monitor-enter/exit`,
//! `throw` (spec §4.5, §4.6).

use crate::ir::{BinaryOp, IrNode, Operand};
use crate::regmap::RegisterMap;
use crate::types::TypeTag;

pub fn lower_new_instance(dst: u16, type_name: &str, regs: &mut RegisterMap) -> Operand {
    let rhs = IrNode::NewInstance {
        type_name: type_name.to_string(),
    }
    .into_operand();
    let lhs = regs.lookup_one(dst);
    IrNode::AssignExpression {
        lhs: Some(lhs),
        rhs,
    }
    .into_operand()
}

/// `instance-of vA, vB, type@CCCC` → `BinaryExpression("instanceof", vB,
/// BaseClass(type, descriptor=raw), "Z")`. `raw_kind` is the instruction's
/// translated (unresolved) type descriptor, kept alongside the resolved
/// `type_name` for later printing.
pub fn lower_instance_of(dst: u16, src: u16, type_name: &str, raw_kind: &str, regs: &mut RegisterMap) -> Operand {
    let src_var = regs.lookup_one(src);
    let base_class = IrNode::BaseClass {
        name: type_name.to_string(),
        descriptor: Some(raw_kind.to_string()),
    }
    .into_operand();
    let rhs = IrNode::BinaryExpression {
        op: BinaryOp::InstanceOf,
        lhs: src_var,
        rhs: base_class,
        type_tag: TypeTag::Boolean,
    }
    .into_operand();
    let lhs = regs.lookup_one(dst);
    IrNode::AssignExpression {
        lhs: Some(lhs),
        rhs,
    }
    .into_operand()
}

/// `check-cast vAA, type`: the lhs and the operand inside the
/// `CheckCastExpression` are the **same** `Variable`, reflecting Dalvik's
/// in-place cast.
pub fn lower_check_cast(vreg: u16, type_name: &str, raw_kind: &str, regs: &mut RegisterMap) -> Operand {
    let var = regs.lookup_one(vreg);
    let rhs = IrNode::CheckCastExpression {
        operand: var.clone(),
        type_name: type_name.to_string(),
        descriptor: raw_kind.to_string(),
    }
    .into_operand();
    IrNode::AssignExpression {
        lhs: Some(var),
        rhs,
    }
    .into_operand()
}

pub fn lower_monitor_enter(vreg: u16, regs: &mut RegisterMap) -> Operand {
    let operand = regs.lookup_one(vreg);
    IrNode::MonitorEnterExpression { operand }.into_operand()
}

pub fn lower_monitor_exit(vreg: u16, regs: &mut RegisterMap) -> Operand {
    let operand = regs.lookup_one(vreg);
    IrNode::MonitorExitExpression { operand }.into_operand()
}

pub fn lower_throw(vreg: u16, regs: &mut RegisterMap) -> Operand {
    let operand = regs.lookup_one(vreg);
    IrNode::ThrowExpression { operand }.into_operand()
}
