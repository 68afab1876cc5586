//! `RawInstruction`: the decoded-instruction record this crate consumes.
//!
//! The real record is produced by the DEX parser (out of scope for this
//! crate); this type is the typed stand-in for it, carrying exactly the
//! fields named by the data model, using Dalvik's own format-letter naming
//! convention rather than inventing new field names.

/// One decoded Dalvik instruction, with every operand field any format
/// might populate. A given opcode only ever reads a subset of these; which
/// subset is determined by the opcode's instruction format, not by this
/// struct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInstruction {
    pub opcode: u8,

    pub a: u8,
    pub b: u8,
    pub aa: u8,
    pub bb: u8,
    pub cc: u8,

    pub aaaa: u16,
    pub bbbb: u16,
    pub cccc: u16,

    pub bbbbbbbb: u32,
    pub bbbbbbbbbbbbbbbb: u64,

    /// Format-35c invoke register group (also reused by
    /// `filled-new-array`'s {vD,vE,vF,vG,vA} quintet, where `a` supplies the
    /// fifth register and the argument count).
    pub c: u16,
    pub d: u16,
    pub e: u16,
    pub f: u16,
    pub g: u16,

    /// Last register of a `/range` format's contiguous argument span.
    pub nnnn: u16,

    raw_string: Option<String>,
    translated_kind: Option<String>,
}

impl RawInstruction {
    /// Debug-oriented textual rendering of this instruction, for tracing.
    pub fn output(&self) -> String {
        format!("opcode=0x{:02x}", self.opcode)
    }

    /// The literal string referenced by `const-string`/`const-string/jumbo`.
    pub fn raw_string(&self) -> Option<&str> {
        self.raw_string.as_deref()
    }

    /// The raw (unresolved) type descriptor used by `check-cast` and
    /// `instance-of` for their `BaseClass`/descriptor field.
    pub fn translated_kind(&self) -> Option<&str> {
        self.translated_kind.as_deref()
    }

    pub fn with_raw_string(mut self, s: impl Into<String>) -> Self {
        self.raw_string = Some(s.into());
        self
    }

    pub fn with_translated_kind(mut self, s: impl Into<String>) -> Self {
        self.translated_kind = Some(s.into());
        self
    }

    /// The format-35c register group as a slice, truncated to `count`
    /// entries (`a` for non-range invoke forms, or the quintet count for
    /// `filled-new-array`).
    pub fn arg_group(&self, count: u8) -> Vec<u16> {
        [self.c, self.d, self.e, self.f, self.g]
            .into_iter()
            .take(count as usize)
            .collect()
    }

    /// The contiguous `[cccc, nnnn]` register range of a `/range` format.
    pub fn arg_range(&self) -> Vec<u16> {
        (self.cccc..=self.nnnn).collect()
    }
}
