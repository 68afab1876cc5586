#![allow(clippy::too_many_arguments)]

pub mod constant_pool;
pub mod error;
pub mod invoke_return;
pub mod ir;
pub mod lower;
pub mod opcode;
pub mod raw_instruction;
pub mod regmap;
pub mod types;

pub mod prelude {
    pub use crate::constant_pool::{ConstantPool, FieldRef, MethodProto, MethodRef};
    pub use crate::error::LoweringDiagnostic;
    pub use crate::invoke_return::InvokeReturn;
    pub use crate::ir::{ArrayElements, ArrayPayload, BinaryOp, CompOp, CondOp, ConstantValue, IrNode, Operand, UnaryOp};
    pub use crate::lower::{lower, LowerExtra};
    pub use crate::opcode::Opcode;
    pub use crate::raw_instruction::RawInstruction;
    pub use crate::regmap::RegisterMap;
    pub use crate::types::{pack_argument_slots, ElementTypeTag, TypeTag};
}
