//! Constant and literal assembly (spec §4.2, §4.4 lit16/lit8 families).

use crate::constant_pool::ConstantPool;
use crate::ir::{BinaryOp, ConstantValue, IrNode, Operand};
use crate::raw_instruction::RawInstruction;
use crate::regmap::RegisterMap;
use crate::types::TypeTag;

/// Sign-extends a 4-bit nibble (`const/4`'s literal field) to `i32`.
pub fn sign_extend_nibble(v: u8) -> i32 {
    let v = (v & 0x0f) as i32;
    if v & 0x08 != 0 {
        v - 16
    } else {
        v
    }
}

fn assign_const(dst: u16, value: ConstantValue, type_tag: TypeTag, descriptor: Option<String>, regs: &mut RegisterMap) -> Operand {
    let lhs = regs.lookup_one(dst);
    let rhs = IrNode::Constant {
        value,
        type_tag,
        descriptor,
    }
    .into_operand();
    IrNode::AssignExpression {
        lhs: Some(lhs),
        rhs,
    }
    .into_operand()
}

pub fn lower_const4(dst: u16, literal_nibble: u8, regs: &mut RegisterMap) -> Operand {
    assign_const(dst, ConstantValue::Int(sign_extend_nibble(literal_nibble)), TypeTag::Int, None, regs)
}

pub fn lower_const16(dst: u16, literal: u16, regs: &mut RegisterMap) -> Operand {
    assign_const(dst, ConstantValue::Int(literal as i16 as i32), TypeTag::Int, None, regs)
}

pub fn lower_const(dst: u16, literal: u32, regs: &mut RegisterMap) -> Operand {
    assign_const(dst, ConstantValue::Int(literal as i32), TypeTag::Int, None, regs)
}

pub fn lower_const_high16(dst: u16, raw_bits: u16, regs: &mut RegisterMap) -> Operand {
    assign_const(dst, ConstantValue::RawHighBits(raw_bits as i64), TypeTag::Int, None, regs)
}

pub fn lower_const_wide16(dst: u16, literal: u16, regs: &mut RegisterMap) -> Operand {
    assign_const(dst, ConstantValue::Long(literal as i16 as i64), TypeTag::Long, None, regs)
}

pub fn lower_const_wide32(dst: u16, literal: u32, regs: &mut RegisterMap) -> Operand {
    assign_const(dst, ConstantValue::Long(literal as i32 as i64), TypeTag::Long, None, regs)
}

pub fn lower_const_wide(dst: u16, literal: u64, regs: &mut RegisterMap) -> Operand {
    assign_const(dst, ConstantValue::Long(literal as i64), TypeTag::Long, None, regs)
}

pub fn lower_const_wide_high16(dst: u16, raw_bits: u16, regs: &mut RegisterMap) -> Operand {
    assign_const(dst, ConstantValue::RawHighBits(raw_bits as i64), TypeTag::Long, None, regs)
}

pub fn lower_const_string(dst: u16, ins: &RawInstruction, regs: &mut RegisterMap) -> Operand {
    let s = ins.raw_string().unwrap_or_default().to_string();
    assign_const(
        dst,
        ConstantValue::String(s),
        TypeTag::Object,
        Some("Ljava/lang/String;".to_string()),
        regs,
    )
}

pub fn lower_const_class(dst: u16, type_index: u32, pool: &dyn ConstantPool, regs: &mut RegisterMap) -> Operand {
    let descriptor = pool.get_type(type_index);
    assign_const(
        dst,
        ConstantValue::Class(descriptor.clone()),
        TypeTag::Object,
        Some(descriptor),
        regs,
    )
}

/// `assign_lit`: `AssignExpression(Variable(dst), BinaryExpressionLit(op,
/// Variable(src), Constant(literal, I)))`.
fn assign_lit(op: BinaryOp, dst: u16, src: u16, literal: i32, regs: &mut RegisterMap) -> Operand {
    let lhs = regs.lookup_one(dst);
    let operand = regs.lookup_one(src);
    let constant = IrNode::Constant {
        value: ConstantValue::Int(literal),
        type_tag: TypeTag::Int,
        descriptor: None,
    }
    .into_operand();
    let rhs = IrNode::BinaryExpressionLit {
        op,
        operand,
        constant,
    }
    .into_operand();
    IrNode::AssignExpression {
        lhs: Some(lhs),
        rhs,
    }
    .into_operand()
}

/// `rsub-int`/`rsub-int/lit8`: operand order is reversed — the constant is
/// on the left, the register on the right.
fn assign_rsub(dst: u16, src: u16, literal: i32, regs: &mut RegisterMap) -> Operand {
    let lhs = regs.lookup_one(dst);
    let constant = IrNode::Constant {
        value: ConstantValue::Int(literal),
        type_tag: TypeTag::Int,
        descriptor: None,
    }
    .into_operand();
    let operand = regs.lookup_one(src);
    let rhs = IrNode::BinaryExpressionLit {
        op: BinaryOp::Sub,
        operand: constant,
        constant: operand,
    }
    .into_operand();
    IrNode::AssignExpression {
        lhs: Some(lhs),
        rhs,
    }
    .into_operand()
}

/// `add-int/lit16`, `mul-int/lit16`, `div-int/lit16`, `rem-int/lit16`,
/// `and-int/lit16`, `or-int/lit16`, `xor-int/lit16` (`rsub-int` is handled
/// separately via [`lower_rsub_int`]).
pub fn lower_binary_lit16(op: BinaryOp, dst: u16, src: u16, literal: u16, regs: &mut RegisterMap) -> Operand {
    assign_lit(op, dst, src, literal as i16 as i32, regs)
}

pub fn lower_rsub_int(dst: u16, src: u16, literal: u16, regs: &mut RegisterMap) -> Operand {
    assign_rsub(dst, src, literal as i16 as i32, regs)
}

/// `add-int/lit8` folds a negative literal into a `SUB` of its absolute
/// value; no other lit8 opcode performs this folding.
pub fn lower_add_int_lit8(dst: u16, src: u16, literal: u8, regs: &mut RegisterMap) -> Operand {
    let literal = literal as i8 as i32;
    if literal < 0 {
        assign_lit(BinaryOp::Sub, dst, src, literal.unsigned_abs() as i32, regs)
    } else {
        assign_lit(BinaryOp::Add, dst, src, literal, regs)
    }
}

pub fn lower_rsub_int_lit8(dst: u16, src: u16, literal: u8, regs: &mut RegisterMap) -> Operand {
    assign_rsub(dst, src, literal as i8 as i32, regs)
}

/// The remaining lit8 family: `mul`, `div`, `rem`, `and`, `or`, `xor`,
/// `shl`, `shr`, `ushr` — no sign folding, no operand reversal.
pub fn lower_binary_lit8(op: BinaryOp, dst: u16, src: u16, literal: u8, regs: &mut RegisterMap) -> Operand {
    assign_lit(op, dst, src, literal as i8 as i32, regs)
}
