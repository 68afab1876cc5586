//! `iget*`/`iput*`/`sget*`/`sput*` (spec §4.5). The field-type tag encoded
//! in the opcode suffix is ignored in favor of the descriptor resolved from
//! the constant pool.

use crate::constant_pool::{ConstantPool, FieldRef};
use crate::ir::{IrNode, Operand};
use crate::regmap::RegisterMap;

fn resolve_field(field_index: u32, pool: &dyn ConstantPool) -> FieldRef {
    pool.get_field(field_index)
}

pub fn lower_instance_get(dst: u16, object: u16, field_index: u32, pool: &dyn ConstantPool, regs: &mut RegisterMap) -> Operand {
    let field = resolve_field(field_index, pool);
    let object = regs.lookup_one(object);
    let rhs = IrNode::InstanceExpression {
        object,
        class: field.class_name,
        field_type: field.field_type,
        field_name: field.field_name,
    }
    .into_operand();
    let lhs = regs.lookup_one(dst);
    IrNode::AssignExpression {
        lhs: Some(lhs),
        rhs,
    }
    .into_operand()
}

pub fn lower_instance_put(value: u16, object: u16, field_index: u32, pool: &dyn ConstantPool, regs: &mut RegisterMap) -> Operand {
    let field = resolve_field(field_index, pool);
    let value = regs.lookup_one(value);
    let object = regs.lookup_one(object);
    IrNode::InstanceInstruction {
        value,
        object,
        class: field.class_name,
        field_type: field.field_type,
        field_name: field.field_name,
    }
    .into_operand()
}

pub fn lower_static_get(dst: u16, field_index: u32, pool: &dyn ConstantPool, regs: &mut RegisterMap) -> Operand {
    let field = resolve_field(field_index, pool);
    let rhs = IrNode::StaticExpression {
        class: field.class_name,
        field_type: field.field_type,
        field_name: field.field_name,
    }
    .into_operand();
    let lhs = regs.lookup_one(dst);
    IrNode::AssignExpression {
        lhs: Some(lhs),
        rhs,
    }
    .into_operand()
}

pub fn lower_static_put(value: u16, field_index: u32, pool: &dyn ConstantPool, regs: &mut RegisterMap) -> Operand {
    let field = resolve_field(field_index, pool);
    let value = regs.lookup_one(value);
    IrNode::StaticInstruction {
        value,
        class: field.class_name,
        field_type: field.field_type,
        field_name: field.field_name,
    }
    .into_operand()
}
