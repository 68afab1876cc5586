//! Three-address / 2addr binary ops, comparisons, unary ops, and primitive
//! conversions (spec §4.4).

use crate::ir::{BinaryOp, CompOp, IrNode, Operand, UnaryOp};
use crate::regmap::RegisterMap;
use crate::types::TypeTag;

/// `add-int vAA, vBB, vCC` and family:
/// `AssignExpression(Variable(dst), BinaryExpression(op, Variable(lhs), Variable(rhs), type_tag))`.
pub fn lower_binary_three_addr(
    op: BinaryOp,
    type_tag: TypeTag,
    dst: u16,
    lhs: u16,
    rhs: u16,
    regs: &mut RegisterMap,
) -> Operand {
    let lhs_var = regs.lookup_one(lhs);
    let rhs_var = regs.lookup_one(rhs);
    let rhs_expr = IrNode::BinaryExpression {
        op,
        lhs: lhs_var,
        rhs: rhs_var,
        type_tag,
    }
    .into_operand();
    let lhs_var = regs.lookup_one(dst);
    IrNode::AssignExpression {
        lhs: Some(lhs_var),
        rhs: rhs_expr,
    }
    .into_operand()
}

/// `add-int/2addr vA, vB`: the lhs of the `BinaryExpression2Addr` **is**
/// the destination register itself — intentional self-reference, preserved
/// for later printing.
pub fn lower_binary_2addr(op: BinaryOp, type_tag: TypeTag, dst: u16, src: u16, regs: &mut RegisterMap) -> Operand {
    let dst_var = regs.lookup_one(dst);
    let src_var = regs.lookup_one(src);
    let rhs_expr = IrNode::BinaryExpression2Addr {
        op,
        lhs: dst_var.clone(),
        rhs: src_var,
        type_tag,
    }
    .into_operand();
    IrNode::AssignExpression {
        lhs: Some(dst_var),
        rhs: rhs_expr,
    }
    .into_operand()
}

/// `cmpl-float`/`cmpg-float`/`cmpl-double`/`cmpg-double`/`cmp-long` all
/// lower to the same `"cmp"` token — the NaN-handling distinction between
/// `cmpl`/`cmpg` is not preserved in the IR.
pub fn lower_cmp(op: CompOp, type_tag: TypeTag, dst: u16, lhs: u16, rhs: u16, regs: &mut RegisterMap) -> Operand {
    let lhs_var = regs.lookup_one(lhs);
    let rhs_var = regs.lookup_one(rhs);
    let rhs_expr = IrNode::BinaryCompExpression {
        op,
        lhs: lhs_var,
        rhs: rhs_var,
        type_tag,
    }
    .into_operand();
    let dst_var = regs.lookup_one(dst);
    IrNode::AssignExpression {
        lhs: Some(dst_var),
        rhs: rhs_expr,
    }
    .into_operand()
}

/// `neg-*` / `not-*` (format 12x: vA, vB).
pub fn lower_unary(op: UnaryOp, type_tag: TypeTag, dst: u16, src: u16, regs: &mut RegisterMap) -> Operand {
    let operand = regs.lookup_one(src);
    let rhs = IrNode::UnaryExpression {
        op,
        operand,
        type_tag,
    }
    .into_operand();
    let lhs = regs.lookup_one(dst);
    IrNode::AssignExpression {
        lhs: Some(lhs),
        rhs,
    }
    .into_operand()
}

/// Primitive conversions (`int-to-long`, `float-to-int`, `int-to-byte`, ...).
/// `syntactic_cast` is the printable cast string, e.g. `"(long)"`.
pub fn lower_cast(syntactic_cast: &str, type_tag: TypeTag, dst: u16, src: u16, regs: &mut RegisterMap) -> Operand {
    let operand = regs.lookup_one(src);
    let rhs = IrNode::CastExpression {
        syntactic_cast: syntactic_cast.to_string(),
        type_tag,
        operand,
    }
    .into_operand();
    let lhs = regs.lookup_one(dst);
    IrNode::AssignExpression {
        lhs: Some(lhs),
        rhs,
    }
    .into_operand()
}
