//! The closed IR node taxonomy produced by opcode lowering.
//!
//! Every node lives behind [`Operand`] (an `Rc<IrNode>`) rather than being
//! nested by value: the register map hands out clones of the *same* `Rc` for
//! a given vreg, so two IR nodes that reference the same register share
//! identity (`Rc::ptr_eq`), not just structural equality. See `regmap.rs`.

use std::rc::Rc;

use crate::constant_pool::MethodRef;
use crate::types::{ElementTypeTag, TypeTag};

/// Shared handle to an IR node. Cheap to clone (refcount bump only).
pub type Operand = Rc<IrNode>;

/// A resolved `fill-array-data` payload blob. Opaque to this crate; the DEX
/// parser / CFG builder own the interpretation of the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayPayload {
    pub element_width: u32,
    pub data: Vec<u8>,
}

/// Either the fully expanded element list of `filled-new-array`, or the
/// `[start, end]` register-range shortcut `filled-new-array/range` stores.
/// Expanding the range form into individual vregs is the CFG builder's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayElements {
    List(Vec<Operand>),
    Range { start: u16, end: u16 },
}

/// Binary arithmetic/logic operators as used by the three-address,
/// 2addr, and literal binary forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Xor,
    /// Shift-left; the token does not distinguish int vs. long, both shift
    /// left identically.
    Shl,
    /// `shr-int` and `ushr-int` both lower to this token; signedness is
    /// recovered later from type context (known ambiguity, not a bug).
    IntShr,
    /// `shr-long` and `ushr-long` both lower to this token, for the same
    /// reason as `IntShr`.
    LongShr,
    /// `instance-of`'s `BinaryExpression` operator.
    InstanceOf,
}

/// Compare-and-produce-tri-state operator used by `cmp*`.
///
/// `cmpl-float`/`cmpg-float`/`cmpl-double`/`cmpg-double`/`cmp-long` all
/// lower to this single token — the `cmpl`/`cmpg` NaN-handling distinction
/// is not preserved in the IR, matching the original lowering table's
/// `assign_cmp` (which uses the literal `"cmp"` unconditionally).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompOp {
    Cmp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CondOp {
    Eq,
    Ne,
    Lt,
    Ge,
    Gt,
    Le,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Int(i32),
    Long(i64),
    /// `const/high16`/`const-wide/high16` keep the raw immediate as given;
    /// shifting it into position is a printing concern, not a lowering one.
    RawHighBits(i64),
    String(String),
    Class(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum IrNode {
    Variable {
        vreg: u16,
    },
    Constant {
        value: ConstantValue,
        type_tag: TypeTag,
        descriptor: Option<String>,
    },
    ThisParam {
        vreg: u16,
    },
    BaseClass {
        name: String,
        descriptor: Option<String>,
    },
    AssignExpression {
        lhs: Option<Operand>,
        rhs: Operand,
    },
    MoveExpression {
        dst: Operand,
        src: Operand,
    },
    MoveResultExpression {
        dst: Operand,
        result_source: Operand,
    },
    MoveExceptionExpression {
        dst: Operand,
        exception_type: String,
    },
    BinaryExpression {
        op: BinaryOp,
        lhs: Operand,
        rhs: Operand,
        type_tag: TypeTag,
    },
    BinaryExpression2Addr {
        op: BinaryOp,
        lhs: Operand,
        rhs: Operand,
        type_tag: TypeTag,
    },
    BinaryExpressionLit {
        op: BinaryOp,
        operand: Operand,
        constant: Operand,
    },
    BinaryCompExpression {
        op: CompOp,
        lhs: Operand,
        rhs: Operand,
        type_tag: TypeTag,
    },
    UnaryExpression {
        op: UnaryOp,
        operand: Operand,
        type_tag: TypeTag,
    },
    CastExpression {
        syntactic_cast: String,
        type_tag: TypeTag,
        operand: Operand,
    },
    CheckCastExpression {
        operand: Operand,
        type_name: String,
        descriptor: String,
    },
    ArrayLoadExpression {
        array: Operand,
        index: Operand,
        elem_type_tag: Option<ElementTypeTag>,
    },
    ArrayStoreInstruction {
        value: Operand,
        array: Operand,
        index: Operand,
        elem_type_tag: Option<ElementTypeTag>,
    },
    ArrayLengthExpression {
        array: Operand,
    },
    NewInstance {
        type_name: String,
    },
    NewArrayExpression {
        size: Operand,
        array_type: String,
    },
    FilledArrayExpression {
        elements: ArrayElements,
        array_type: String,
    },
    FillArrayExpression {
        dst: Operand,
        payload: Option<ArrayPayload>,
    },
    InstanceExpression {
        object: Operand,
        class: String,
        field_type: String,
        field_name: String,
    },
    InstanceInstruction {
        value: Operand,
        object: Operand,
        class: String,
        field_type: String,
        field_name: String,
    },
    StaticExpression {
        class: String,
        field_type: String,
        field_name: String,
    },
    StaticInstruction {
        value: Operand,
        class: String,
        field_type: String,
        field_name: String,
    },
    InvokeInstruction {
        class: String,
        name: String,
        receiver: Operand,
        ret_type: String,
        param_types: Vec<String>,
        args: Vec<Operand>,
        triple: MethodRef,
    },
    InvokeDirectInstruction {
        class: String,
        name: String,
        receiver: Operand,
        ret_type: String,
        param_types: Vec<String>,
        args: Vec<Operand>,
        triple: MethodRef,
    },
    InvokeStaticInstruction {
        class: String,
        name: String,
        receiver: Operand,
        ret_type: String,
        param_types: Vec<String>,
        args: Vec<Operand>,
        triple: MethodRef,
    },
    InvokeRangeInstruction {
        class: String,
        name: String,
        receiver: Operand,
        ret_type: String,
        param_types: Vec<String>,
        args: Vec<Operand>,
        triple: MethodRef,
    },
    ConditionalExpression {
        op: CondOp,
        lhs: Operand,
        rhs: Operand,
    },
    ConditionalZExpression {
        op: CondOp,
        operand: Operand,
    },
    SwitchExpression {
        operand: Operand,
        payload_offset: i32,
    },
    MonitorEnterExpression {
        operand: Operand,
    },
    MonitorExitExpression {
        operand: Operand,
    },
    ThrowExpression {
        operand: Operand,
    },
    ReturnInstruction {
        operand: Option<Operand>,
    },
    NopExpression,
}

impl IrNode {
    /// Convenience: wrap `self` in a fresh `Operand` handle.
    pub fn into_operand(self) -> Operand {
        Rc::new(self)
    }
}
