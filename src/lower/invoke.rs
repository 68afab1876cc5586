//! Invocation lowering and the return-name generator (spec §4.7).

use tracing::warn;

use crate::constant_pool::{ConstantPool, MethodRef};
use crate::error::LoweringDiagnostic;
use crate::invoke_return::InvokeReturn;
use crate::ir::{IrNode, Operand};
use crate::raw_instruction::RawInstruction;
use crate::regmap::RegisterMap;
use crate::types::pack_argument_slots;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchKind {
    Virtual,
    Super,
    Direct,
    Static,
    Interface,
}

impl DispatchKind {
    fn has_implicit_receiver(self) -> bool {
        !matches!(self, DispatchKind::Static)
    }
}

fn raw_registers(ins: &RawInstruction, is_range: bool) -> Vec<u16> {
    if is_range {
        ins.arg_range()
    } else {
        ins.arg_group(ins.a)
    }
}

/// Slot-packs the declared parameters against whatever raw argument
/// registers remain after the receiver (if any) is peeled off. On mismatch,
/// logs `ArgCountMismatch` and continues lowering with an empty arg list —
/// lowering stays total.
fn packed_args(param_types: &[String], raw_params: &[u16], regs: &mut RegisterMap) -> Vec<Operand> {
    match pack_argument_slots(param_types, raw_params) {
        Ok(slots) => regs.lookup_many(&slots),
        Err(()) => {
            warn!(
                diagnostic = %LoweringDiagnostic::ArgCountMismatch {
                    declared: param_types.len(),
                    supplied: raw_params.len(),
                },
                "argument count mismatch while lowering invoke"
            );
            Vec::new()
        }
    }
}

/// Degenerate fallback for a non-static invoke decoded with zero argument
/// registers — syntactically valid, semantically malformed input. Not
/// looked up through `RegisterMap`, so it can't alias a legitimate vreg 0
/// variable elsewhere; lowering stays total rather than panicking.
fn missing_receiver_placeholder() -> Operand {
    warn!(
        diagnostic = %LoweringDiagnostic::ArgCountMismatch { declared: 1, supplied: 0 },
        "non-static invoke decoded with no receiver register"
    );
    IrNode::Variable { vreg: 0 }.into_operand()
}

fn select_receiver(kind: DispatchKind, method: &MethodRef, receiver_vreg: Option<u16>, regs: &mut RegisterMap) -> Operand {
    match kind {
        DispatchKind::Virtual | DispatchKind::Interface | DispatchKind::Direct => match receiver_vreg {
            Some(vreg) => regs.lookup_one(vreg),
            None => missing_receiver_placeholder(),
        },
        DispatchKind::Super => IrNode::BaseClass {
            name: "super".to_string(),
            descriptor: None,
        }
        .into_operand(),
        DispatchKind::Static => IrNode::BaseClass {
            name: method.class_name.clone(),
            descriptor: Some(method.class_name.clone()),
        }
        .into_operand(),
    }
}

fn wrap(kind: DispatchKind, is_range: bool, class: String, name: String, receiver: Operand, ret_type: String, param_types: Vec<String>, args: Vec<Operand>, triple: MethodRef) -> Operand {
    if is_range {
        let mut positional = Vec::with_capacity(args.len() + 1);
        if kind.has_implicit_receiver() {
            positional.push(receiver.clone());
        }
        positional.extend(args);
        IrNode::InvokeRangeInstruction {
            class,
            name,
            receiver,
            ret_type,
            param_types,
            args: positional,
            triple,
        }
        .into_operand()
    } else {
        match kind {
            DispatchKind::Direct => IrNode::InvokeDirectInstruction {
                class,
                name,
                receiver,
                ret_type,
                param_types,
                args,
                triple,
            }
            .into_operand(),
            DispatchKind::Static => IrNode::InvokeStaticInstruction {
                class,
                name,
                receiver,
                ret_type,
                param_types,
                args,
                triple,
            }
            .into_operand(),
            DispatchKind::Virtual | DispatchKind::Super | DispatchKind::Interface => IrNode::InvokeInstruction {
                class,
                name,
                receiver,
                ret_type,
                param_types,
                args,
                triple,
            }
            .into_operand(),
        }
    }
}

/// The §4.7 return-name-generator rules: decides the `lhs` of the enclosing
/// `AssignExpression` and whether `ret` should be pinned to the receiver
/// (the constructor-call special case).
fn invoke_lhs(kind: DispatchKind, is_range: bool, ret_type: &str, receiver: &Operand, ret: &mut InvokeReturn) -> Option<Operand> {
    if ret_type != "V" {
        return Some(ret.new_placeholder());
    }

    let is_constructor_shaped = matches!(
        (kind, is_range),
        (DispatchKind::Direct, _) | (DispatchKind::Super, true)
    );

    if is_constructor_shaped {
        if matches!(**receiver, IrNode::ThisParam { .. }) {
            None
        } else {
            ret.set_to(receiver.clone());
            Some(receiver.clone())
        }
    } else {
        None
    }
}

#[allow(clippy::too_many_arguments)]
pub fn lower_invoke(
    kind: DispatchKind,
    is_range: bool,
    ins: &RawInstruction,
    method_index: u32,
    pool: &dyn ConstantPool,
    regs: &mut RegisterMap,
    ret: &mut InvokeReturn,
) -> Operand {
    let method = pool.get_method_ref(method_index);
    let raw = raw_registers(ins, is_range);

    let (receiver_vreg, raw_params): (Option<u16>, &[u16]) = if kind.has_implicit_receiver() {
        match raw.split_first() {
            Some((&first, rest)) => (Some(first), rest),
            None => (None, &[]),
        }
    } else {
        (None, &raw[..])
    };

    let receiver = select_receiver(kind, &method, receiver_vreg, regs);
    let args = packed_args(&method.proto.param_types, raw_params, regs);
    let lhs = invoke_lhs(kind, is_range, &method.proto.return_type, &receiver, ret);

    let rhs = wrap(
        kind,
        is_range,
        method.class_name.clone(),
        method.name.clone(),
        receiver,
        method.proto.return_type.clone(),
        method.proto.param_types.clone(),
        args,
        method.clone(),
    );

    IrNode::AssignExpression { lhs, rhs }.into_operand()
}
