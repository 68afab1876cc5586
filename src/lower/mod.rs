//! Per-opcode lowering rules (C4) and the opcode dispatch entry point (C5).
//!
//! Grounded on `fuel-vm`'s `interpreter/executors/instruction.rs`, whose
//! `_instruction` function is one big `match op { OpcodeRepr::ADD => {...},
//! ... }` over every opcode the VM executes. This module plays the same
//! role for lowering instead of execution.

mod arithmetic;
mod arrays;
mod control_flow;
mod fields;
mod invoke;
mod literals;
mod moves;
mod objects;

use tracing::warn;

use crate::constant_pool::ConstantPool;
use crate::error::LoweringDiagnostic;
use crate::invoke_return::InvokeReturn;
use crate::ir::{ArrayPayload, BinaryOp, CompOp, CondOp, IrNode, Operand, UnaryOp};
use crate::opcode::Opcode;
use crate::raw_instruction::RawInstruction;
use crate::regmap::RegisterMap;
use crate::types::{ElementTypeTag, TypeTag};

use arithmetic::{lower_binary_2addr, lower_binary_three_addr, lower_cast, lower_cmp, lower_unary};
use arrays::{lower_array_length, lower_array_load, lower_array_store, lower_fill_array_data, lower_filled_new_array, lower_filled_new_array_range, lower_new_array};
use control_flow::{lower_goto, lower_if_cond, lower_if_condz, lower_switch};
use fields::{lower_instance_get, lower_instance_put, lower_static_get, lower_static_put};
use invoke::{lower_invoke, DispatchKind};
use literals::{
    lower_add_int_lit8, lower_binary_lit16, lower_binary_lit8, lower_const, lower_const16, lower_const4, lower_const_class, lower_const_high16, lower_const_string, lower_const_wide,
    lower_const_wide16, lower_const_wide32, lower_const_wide_high16, lower_rsub_int, lower_rsub_int_lit8,
};
use moves::{lower_move, lower_move_exception, lower_move_result, lower_return, lower_return_void};
use objects::{lower_check_cast, lower_instance_of, lower_monitor_enter, lower_monitor_exit, lower_new_instance, lower_throw};

/// The "extra argument" the dispatch layer threads to opcodes that need
/// more than `(instruction, register map, constant pool)` — the source
/// pattern rewrite from spec §9 replacing an implicitly-shared, stateful
/// `ret` object with an explicit, classified parameter.
pub enum LowerExtra<'a> {
    None,
    Ret(&'a mut InvokeReturn),
    ExceptionType(&'a str),
    Payload(Option<ArrayPayload>),
}

impl<'a> LowerExtra<'a> {
    fn into_ret(self) -> Option<&'a mut InvokeReturn> {
        match self {
            LowerExtra::Ret(r) => Some(r),
            _ => None,
        }
    }

    fn into_exception_type(self) -> Option<&'a str> {
        match self {
            LowerExtra::ExceptionType(s) => Some(s),
            _ => None,
        }
    }

    fn into_payload(self) -> Option<ArrayPayload> {
        match self {
            LowerExtra::Payload(p) => p,
            _ => None,
        }
    }
}

/// The dispatch entry point: `lower(ins, vmap, cm, extra) -> ir_node`.
///
/// Total over the whole `0x00..=0xE2` opcode space: a byte outside that
/// range, or landing on a reserved slot, is logged as `UnknownOpcode` and
/// lowered as a no-op rather than rejected.
pub fn lower(ins: &RawInstruction, regs: &mut RegisterMap, pool: &dyn ConstantPool, extra: LowerExtra) -> Operand {
    let opcode = match Opcode::try_from(ins.opcode) {
        Ok(op) if !op.is_reserved() => op,
        _ => {
            warn!(
                diagnostic = %LoweringDiagnostic::UnknownOpcode { opcode: ins.opcode },
                "reserved or out-of-range opcode"
            );
            return IrNode::NopExpression.into_operand();
        }
    };

    use Opcode::*;
    match opcode {
        Nop => IrNode::NopExpression.into_operand(),

        Move | MoveWide | MoveObject => lower_move(ins.a as u16, ins.b as u16, regs),
        MoveFrom16 | MoveWideFrom16 | MoveObjectFrom16 => lower_move(ins.aa as u16, ins.bbbb, regs),
        Move16 | MoveWide16 | MoveObject16 => lower_move(ins.aaaa, ins.bbbb, regs),

        MoveResult | MoveResultWide | MoveResultObject => {
            let mut dummy = InvokeReturn::new();
            let ret = extra.into_ret().unwrap_or(&mut dummy);
            lower_move_result(ins.aa as u16, regs, ret)
        }
        MoveException => {
            let ty = extra.into_exception_type().unwrap_or("");
            lower_move_exception(ins.aa as u16, ty, regs)
        }

        ReturnVoid => lower_return_void(),
        Return | ReturnWide | ReturnObject => lower_return(ins.aa as u16, regs),

        Const4 => lower_const4(ins.a as u16, ins.b, regs),
        Const16 => lower_const16(ins.aa as u16, ins.bbbb, regs),
        Const => lower_const(ins.aa as u16, ins.bbbbbbbb, regs),
        ConstHigh16 => lower_const_high16(ins.aa as u16, ins.bbbb, regs),
        ConstWide16 => lower_const_wide16(ins.aa as u16, ins.bbbb, regs),
        ConstWide32 => lower_const_wide32(ins.aa as u16, ins.bbbbbbbb, regs),
        ConstWide => lower_const_wide(ins.aa as u16, ins.bbbbbbbbbbbbbbbb, regs),
        ConstWideHigh16 => lower_const_wide_high16(ins.aa as u16, ins.bbbb, regs),
        ConstString | ConstStringJumbo => lower_const_string(ins.aa as u16, ins, regs),
        ConstClass => lower_const_class(ins.aa as u16, ins.bbbb as u32, pool, regs),

        MonitorEnter => lower_monitor_enter(ins.aa as u16, regs),
        MonitorExit => lower_monitor_exit(ins.aa as u16, regs),

        CheckCast => lower_check_cast(ins.aa as u16, &pool.get_type(ins.bbbb as u32), ins.translated_kind().unwrap_or(""), regs),
        InstanceOf => lower_instance_of(
            ins.a as u16,
            ins.b as u16,
            &pool.get_type(ins.cccc as u32),
            ins.translated_kind().unwrap_or(""),
            regs,
        ),
        ArrayLength => lower_array_length(ins.a as u16, ins.b as u16, regs),

        NewInstance => lower_new_instance(ins.aa as u16, &pool.get_type(ins.bbbb as u32), regs),
        NewArray => lower_new_array(ins.a as u16, ins.b as u16, &pool.get_type(ins.cccc as u32), regs),
        FilledNewArray => {
            let vregs = ins.arg_group(ins.a);
            lower_filled_new_array(&vregs, &pool.get_type(ins.bbbb as u32), regs)
        }
        FilledNewArrayRange => lower_filled_new_array_range(ins.cccc, ins.nnnn, &pool.get_type(ins.bbbb as u32)),
        FillArrayData => {
            let payload = extra.into_payload();
            if payload.is_none() {
                warn!(
                    diagnostic = %LoweringDiagnostic::MissingPayload { dst_vreg: ins.aa as u16 },
                    "fill-array-data resolved without a payload"
                );
            }
            lower_fill_array_data(ins.aa as u16, payload, regs)
        }

        Throw => lower_throw(ins.aa as u16, regs),
        Goto | Goto16 | Goto32 => lower_goto(),
        PackedSwitch | SparseSwitch => lower_switch(ins.aa as u16, ins.bbbbbbbb as i32, regs),

        CmplFloat => lower_cmp(CompOp::Cmp, TypeTag::Float, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        CmpgFloat => lower_cmp(CompOp::Cmp, TypeTag::Float, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        CmplDouble => lower_cmp(CompOp::Cmp, TypeTag::Double, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        CmpgDouble => lower_cmp(CompOp::Cmp, TypeTag::Double, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        CmpLong => lower_cmp(CompOp::Cmp, TypeTag::Long, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),

        IfEq => lower_if_cond(CondOp::Eq, ins.a as u16, ins.b as u16, regs),
        IfNe => lower_if_cond(CondOp::Ne, ins.a as u16, ins.b as u16, regs),
        IfLt => lower_if_cond(CondOp::Lt, ins.a as u16, ins.b as u16, regs),
        IfGe => lower_if_cond(CondOp::Ge, ins.a as u16, ins.b as u16, regs),
        IfGt => lower_if_cond(CondOp::Gt, ins.a as u16, ins.b as u16, regs),
        IfLe => lower_if_cond(CondOp::Le, ins.a as u16, ins.b as u16, regs),
        IfEqz => lower_if_condz(CondOp::Eq, ins.aa as u16, regs),
        IfNez => lower_if_condz(CondOp::Ne, ins.aa as u16, regs),
        IfLtz => lower_if_condz(CondOp::Lt, ins.aa as u16, regs),
        IfGez => lower_if_condz(CondOp::Ge, ins.aa as u16, regs),
        IfGtz => lower_if_condz(CondOp::Gt, ins.aa as u16, regs),
        IfLez => lower_if_condz(CondOp::Le, ins.aa as u16, regs),

        AGet => lower_array_load(ins.aa as u16, ins.bb as u16, ins.cc as u16, None, regs),
        AGetWide => lower_array_load(ins.aa as u16, ins.bb as u16, ins.cc as u16, Some(ElementTypeTag::Wide), regs),
        AGetObject => lower_array_load(ins.aa as u16, ins.bb as u16, ins.cc as u16, Some(ElementTypeTag::Object), regs),
        AGetBoolean => lower_array_load(ins.aa as u16, ins.bb as u16, ins.cc as u16, Some(ElementTypeTag::Boolean), regs),
        AGetByte => lower_array_load(ins.aa as u16, ins.bb as u16, ins.cc as u16, Some(ElementTypeTag::Byte), regs),
        AGetChar => lower_array_load(ins.aa as u16, ins.bb as u16, ins.cc as u16, Some(ElementTypeTag::Char), regs),
        AGetShort => lower_array_load(ins.aa as u16, ins.bb as u16, ins.cc as u16, Some(ElementTypeTag::Short), regs),
        APut => lower_array_store(ins.aa as u16, ins.bb as u16, ins.cc as u16, None, regs),
        APutWide => lower_array_store(ins.aa as u16, ins.bb as u16, ins.cc as u16, Some(ElementTypeTag::Wide), regs),
        APutObject => lower_array_store(ins.aa as u16, ins.bb as u16, ins.cc as u16, Some(ElementTypeTag::Object), regs),
        APutBoolean => lower_array_store(ins.aa as u16, ins.bb as u16, ins.cc as u16, Some(ElementTypeTag::Boolean), regs),
        APutByte => lower_array_store(ins.aa as u16, ins.bb as u16, ins.cc as u16, Some(ElementTypeTag::Byte), regs),
        APutChar => lower_array_store(ins.aa as u16, ins.bb as u16, ins.cc as u16, Some(ElementTypeTag::Char), regs),
        APutShort => lower_array_store(ins.aa as u16, ins.bb as u16, ins.cc as u16, Some(ElementTypeTag::Short), regs),

        IGet | IGetWide | IGetObject | IGetBoolean | IGetByte | IGetChar | IGetShort => {
            lower_instance_get(ins.a as u16, ins.b as u16, ins.cccc as u32, pool, regs)
        }
        IPut | IPutWide | IPutObject | IPutBoolean | IPutByte | IPutChar | IPutShort => {
            lower_instance_put(ins.a as u16, ins.b as u16, ins.cccc as u32, pool, regs)
        }
        SGet | SGetWide | SGetObject | SGetBoolean | SGetByte | SGetChar | SGetShort => lower_static_get(ins.aa as u16, ins.bbbb as u32, pool, regs),
        SPut | SPutWide | SPutObject | SPutBoolean | SPutByte | SPutChar | SPutShort => lower_static_put(ins.aa as u16, ins.bbbb as u32, pool, regs),

        InvokeVirtual => invoke_with_ret(DispatchKind::Virtual, false, ins, ins.bbbb as u32, pool, regs, extra),
        InvokeSuper => invoke_with_ret(DispatchKind::Super, false, ins, ins.bbbb as u32, pool, regs, extra),
        InvokeDirect => invoke_with_ret(DispatchKind::Direct, false, ins, ins.bbbb as u32, pool, regs, extra),
        InvokeStatic => invoke_with_ret(DispatchKind::Static, false, ins, ins.bbbb as u32, pool, regs, extra),
        InvokeInterface => invoke_with_ret(DispatchKind::Interface, false, ins, ins.bbbb as u32, pool, regs, extra),
        InvokeVirtualRange => invoke_with_ret(DispatchKind::Virtual, true, ins, ins.bbbb as u32, pool, regs, extra),
        InvokeSuperRange => invoke_with_ret(DispatchKind::Super, true, ins, ins.bbbb as u32, pool, regs, extra),
        InvokeDirectRange => invoke_with_ret(DispatchKind::Direct, true, ins, ins.bbbb as u32, pool, regs, extra),
        InvokeStaticRange => invoke_with_ret(DispatchKind::Static, true, ins, ins.bbbb as u32, pool, regs, extra),
        InvokeInterfaceRange => invoke_with_ret(DispatchKind::Interface, true, ins, ins.bbbb as u32, pool, regs, extra),

        NegInt => lower_unary(UnaryOp::Neg, TypeTag::Int, ins.a as u16, ins.b as u16, regs),
        NotInt => lower_unary(UnaryOp::Not, TypeTag::Int, ins.a as u16, ins.b as u16, regs),
        NegLong => lower_unary(UnaryOp::Neg, TypeTag::Long, ins.a as u16, ins.b as u16, regs),
        NotLong => lower_unary(UnaryOp::Not, TypeTag::Long, ins.a as u16, ins.b as u16, regs),
        NegFloat => lower_unary(UnaryOp::Neg, TypeTag::Float, ins.a as u16, ins.b as u16, regs),
        NegDouble => lower_unary(UnaryOp::Neg, TypeTag::Double, ins.a as u16, ins.b as u16, regs),

        IntToLong => lower_cast("(long)", TypeTag::Long, ins.a as u16, ins.b as u16, regs),
        IntToFloat => lower_cast("(float)", TypeTag::Float, ins.a as u16, ins.b as u16, regs),
        IntToDouble => lower_cast("(double)", TypeTag::Double, ins.a as u16, ins.b as u16, regs),
        LongToInt => lower_cast("(int)", TypeTag::Int, ins.a as u16, ins.b as u16, regs),
        LongToFloat => lower_cast("(float)", TypeTag::Float, ins.a as u16, ins.b as u16, regs),
        LongToDouble => lower_cast("(double)", TypeTag::Double, ins.a as u16, ins.b as u16, regs),
        FloatToInt => lower_cast("(int)", TypeTag::Int, ins.a as u16, ins.b as u16, regs),
        FloatToLong => lower_cast("(long)", TypeTag::Long, ins.a as u16, ins.b as u16, regs),
        FloatToDouble => lower_cast("(double)", TypeTag::Double, ins.a as u16, ins.b as u16, regs),
        DoubleToInt => lower_cast("(int)", TypeTag::Int, ins.a as u16, ins.b as u16, regs),
        DoubleToLong => lower_cast("(long)", TypeTag::Long, ins.a as u16, ins.b as u16, regs),
        DoubleToFloat => lower_cast("(float)", TypeTag::Float, ins.a as u16, ins.b as u16, regs),
        IntToByte => lower_cast("(byte)", TypeTag::Byte, ins.a as u16, ins.b as u16, regs),
        IntToChar => lower_cast("(char)", TypeTag::Char, ins.a as u16, ins.b as u16, regs),
        IntToShort => lower_cast("(short)", TypeTag::Short, ins.a as u16, ins.b as u16, regs),

        AddInt => lower_binary_three_addr(BinaryOp::Add, TypeTag::Int, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        SubInt => lower_binary_three_addr(BinaryOp::Sub, TypeTag::Int, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        MulInt => lower_binary_three_addr(BinaryOp::Mul, TypeTag::Int, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        DivInt => lower_binary_three_addr(BinaryOp::Div, TypeTag::Int, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        RemInt => lower_binary_three_addr(BinaryOp::Rem, TypeTag::Int, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        AndInt => lower_binary_three_addr(BinaryOp::And, TypeTag::Int, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        OrInt => lower_binary_three_addr(BinaryOp::Or, TypeTag::Int, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        XorInt => lower_binary_three_addr(BinaryOp::Xor, TypeTag::Int, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        ShlInt => lower_binary_three_addr(BinaryOp::Shl, TypeTag::Int, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        ShrInt | UshrInt => lower_binary_three_addr(BinaryOp::IntShr, TypeTag::Int, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        AddLong => lower_binary_three_addr(BinaryOp::Add, TypeTag::Long, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        SubLong => lower_binary_three_addr(BinaryOp::Sub, TypeTag::Long, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        MulLong => lower_binary_three_addr(BinaryOp::Mul, TypeTag::Long, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        DivLong => lower_binary_three_addr(BinaryOp::Div, TypeTag::Long, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        RemLong => lower_binary_three_addr(BinaryOp::Rem, TypeTag::Long, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        AndLong => lower_binary_three_addr(BinaryOp::And, TypeTag::Long, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        OrLong => lower_binary_three_addr(BinaryOp::Or, TypeTag::Long, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        XorLong => lower_binary_three_addr(BinaryOp::Xor, TypeTag::Long, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        ShlLong => lower_binary_three_addr(BinaryOp::Shl, TypeTag::Long, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        ShrLong | UshrLong => lower_binary_three_addr(BinaryOp::LongShr, TypeTag::Long, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        AddFloat => lower_binary_three_addr(BinaryOp::Add, TypeTag::Float, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        SubFloat => lower_binary_three_addr(BinaryOp::Sub, TypeTag::Float, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        MulFloat => lower_binary_three_addr(BinaryOp::Mul, TypeTag::Float, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        DivFloat => lower_binary_three_addr(BinaryOp::Div, TypeTag::Float, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        RemFloat => lower_binary_three_addr(BinaryOp::Rem, TypeTag::Float, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        AddDouble => lower_binary_three_addr(BinaryOp::Add, TypeTag::Double, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        SubDouble => lower_binary_three_addr(BinaryOp::Sub, TypeTag::Double, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        MulDouble => lower_binary_three_addr(BinaryOp::Mul, TypeTag::Double, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        DivDouble => lower_binary_three_addr(BinaryOp::Div, TypeTag::Double, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),
        RemDouble => lower_binary_three_addr(BinaryOp::Rem, TypeTag::Double, ins.aa as u16, ins.bb as u16, ins.cc as u16, regs),

        AddInt2Addr => lower_binary_2addr(BinaryOp::Add, TypeTag::Int, ins.a as u16, ins.b as u16, regs),
        SubInt2Addr => lower_binary_2addr(BinaryOp::Sub, TypeTag::Int, ins.a as u16, ins.b as u16, regs),
        MulInt2Addr => lower_binary_2addr(BinaryOp::Mul, TypeTag::Int, ins.a as u16, ins.b as u16, regs),
        DivInt2Addr => lower_binary_2addr(BinaryOp::Div, TypeTag::Int, ins.a as u16, ins.b as u16, regs),
        RemInt2Addr => lower_binary_2addr(BinaryOp::Rem, TypeTag::Int, ins.a as u16, ins.b as u16, regs),
        AndInt2Addr => lower_binary_2addr(BinaryOp::And, TypeTag::Int, ins.a as u16, ins.b as u16, regs),
        OrInt2Addr => lower_binary_2addr(BinaryOp::Or, TypeTag::Int, ins.a as u16, ins.b as u16, regs),
        XorInt2Addr => lower_binary_2addr(BinaryOp::Xor, TypeTag::Int, ins.a as u16, ins.b as u16, regs),
        ShlInt2Addr => lower_binary_2addr(BinaryOp::Shl, TypeTag::Int, ins.a as u16, ins.b as u16, regs),
        ShrInt2Addr | UshrInt2Addr => lower_binary_2addr(BinaryOp::IntShr, TypeTag::Int, ins.a as u16, ins.b as u16, regs),
        AddLong2Addr => lower_binary_2addr(BinaryOp::Add, TypeTag::Long, ins.a as u16, ins.b as u16, regs),
        SubLong2Addr => lower_binary_2addr(BinaryOp::Sub, TypeTag::Long, ins.a as u16, ins.b as u16, regs),
        MulLong2Addr => lower_binary_2addr(BinaryOp::Mul, TypeTag::Long, ins.a as u16, ins.b as u16, regs),
        DivLong2Addr => lower_binary_2addr(BinaryOp::Div, TypeTag::Long, ins.a as u16, ins.b as u16, regs),
        RemLong2Addr => lower_binary_2addr(BinaryOp::Rem, TypeTag::Long, ins.a as u16, ins.b as u16, regs),
        AndLong2Addr => lower_binary_2addr(BinaryOp::And, TypeTag::Long, ins.a as u16, ins.b as u16, regs),
        OrLong2Addr => lower_binary_2addr(BinaryOp::Or, TypeTag::Long, ins.a as u16, ins.b as u16, regs),
        XorLong2Addr => lower_binary_2addr(BinaryOp::Xor, TypeTag::Long, ins.a as u16, ins.b as u16, regs),
        ShlLong2Addr => lower_binary_2addr(BinaryOp::Shl, TypeTag::Long, ins.a as u16, ins.b as u16, regs),
        ShrLong2Addr | UshrLong2Addr => lower_binary_2addr(BinaryOp::LongShr, TypeTag::Long, ins.a as u16, ins.b as u16, regs),
        AddFloat2Addr => lower_binary_2addr(BinaryOp::Add, TypeTag::Float, ins.a as u16, ins.b as u16, regs),
        SubFloat2Addr => lower_binary_2addr(BinaryOp::Sub, TypeTag::Float, ins.a as u16, ins.b as u16, regs),
        MulFloat2Addr => lower_binary_2addr(BinaryOp::Mul, TypeTag::Float, ins.a as u16, ins.b as u16, regs),
        DivFloat2Addr => lower_binary_2addr(BinaryOp::Div, TypeTag::Float, ins.a as u16, ins.b as u16, regs),
        RemFloat2Addr => lower_binary_2addr(BinaryOp::Rem, TypeTag::Float, ins.a as u16, ins.b as u16, regs),
        AddDouble2Addr => lower_binary_2addr(BinaryOp::Add, TypeTag::Double, ins.a as u16, ins.b as u16, regs),
        SubDouble2Addr => lower_binary_2addr(BinaryOp::Sub, TypeTag::Double, ins.a as u16, ins.b as u16, regs),
        MulDouble2Addr => lower_binary_2addr(BinaryOp::Mul, TypeTag::Double, ins.a as u16, ins.b as u16, regs),
        DivDouble2Addr => lower_binary_2addr(BinaryOp::Div, TypeTag::Double, ins.a as u16, ins.b as u16, regs),
        RemDouble2Addr => lower_binary_2addr(BinaryOp::Rem, TypeTag::Double, ins.a as u16, ins.b as u16, regs),

        AddIntLit16 => lower_binary_lit16(BinaryOp::Add, ins.a as u16, ins.b as u16, ins.cccc, regs),
        RsubInt => lower_rsub_int(ins.a as u16, ins.b as u16, ins.cccc, regs),
        MulIntLit16 => lower_binary_lit16(BinaryOp::Mul, ins.a as u16, ins.b as u16, ins.cccc, regs),
        DivIntLit16 => lower_binary_lit16(BinaryOp::Div, ins.a as u16, ins.b as u16, ins.cccc, regs),
        RemIntLit16 => lower_binary_lit16(BinaryOp::Rem, ins.a as u16, ins.b as u16, ins.cccc, regs),
        AndIntLit16 => lower_binary_lit16(BinaryOp::And, ins.a as u16, ins.b as u16, ins.cccc, regs),
        OrIntLit16 => lower_binary_lit16(BinaryOp::Or, ins.a as u16, ins.b as u16, ins.cccc, regs),
        XorIntLit16 => lower_binary_lit16(BinaryOp::Xor, ins.a as u16, ins.b as u16, ins.cccc, regs),

        AddIntLit8 => lower_add_int_lit8(ins.aa as u16, ins.bb as u16, ins.cc, regs),
        RsubIntLit8 => lower_rsub_int_lit8(ins.aa as u16, ins.bb as u16, ins.cc, regs),
        MulIntLit8 => lower_binary_lit8(BinaryOp::Mul, ins.aa as u16, ins.bb as u16, ins.cc, regs),
        DivIntLit8 => lower_binary_lit8(BinaryOp::Div, ins.aa as u16, ins.bb as u16, ins.cc, regs),
        RemIntLit8 => lower_binary_lit8(BinaryOp::Rem, ins.aa as u16, ins.bb as u16, ins.cc, regs),
        AndIntLit8 => lower_binary_lit8(BinaryOp::And, ins.aa as u16, ins.bb as u16, ins.cc, regs),
        OrIntLit8 => lower_binary_lit8(BinaryOp::Or, ins.aa as u16, ins.bb as u16, ins.cc, regs),
        XorIntLit8 => lower_binary_lit8(BinaryOp::Xor, ins.aa as u16, ins.bb as u16, ins.cc, regs),
        ShlIntLit8 => lower_binary_lit8(BinaryOp::Shl, ins.aa as u16, ins.bb as u16, ins.cc, regs),
        ShrIntLit8 | UshrIntLit8 => lower_binary_lit8(BinaryOp::IntShr, ins.aa as u16, ins.bb as u16, ins.cc, regs),

        Unused3e | Unused3f | Unused40 | Unused41 | Unused42 | Unused43 | Unused73 | Unused79 | Unused7a => unreachable!("reserved slots are filtered out above"),
    }
}

#[allow(clippy::too_many_arguments)]
fn invoke_with_ret(kind: DispatchKind, is_range: bool, ins: &RawInstruction, method_index: u32, pool: &dyn ConstantPool, regs: &mut RegisterMap, extra: LowerExtra) -> Operand {
    let mut dummy = InvokeReturn::new();
    let ret = extra.into_ret().unwrap_or(&mut dummy);
    lower_invoke(kind, is_range, ins, method_index, pool, regs, ret)
}
