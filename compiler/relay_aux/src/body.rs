//! Forwarding bodies for accessor methods.
//!
//! An accessor does exactly one thing: load its arguments, invoke the
//! resolved method and return the result. [`ForwardingBody`] records that as
//! a short instruction list that a class-file emitter lowers one to one.
//! When the resolved method returns a different erased reference type than
//! the accessor declares, the result is cast before it is returned.

use std::fmt;

use relay_ir::{MethodDescriptor, Primitive, TypeDesc};

// ── Instruction kinds ───────────────────────────────────────────────

/// How the resolved method is invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum InvokeKind {
    /// `invokestatic`
    Static,
    /// `invokespecial`, for private targets.
    Special,
    /// `invokevirtual`
    Virtual,
}

impl InvokeKind {
    /// Pick the invocation for a resolved target.
    pub fn for_target(method: &MethodDescriptor) -> Self {
        if method.is_static() {
            InvokeKind::Static
        } else if method.is_private() {
            InvokeKind::Special
        } else {
            InvokeKind::Virtual
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            InvokeKind::Static => "invokestatic",
            InvokeKind::Special => "invokespecial",
            InvokeKind::Virtual => "invokevirtual",
        }
    }
}

/// Load/return category of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    Void,
    /// `boolean`, `byte`, `char`, `short` and `int`.
    Int,
    Long,
    Float,
    Double,
    Reference,
}

impl ValueKind {
    pub fn of(ty: &TypeDesc) -> Self {
        match ty {
            TypeDesc::Primitive(Primitive::Void) => ValueKind::Void,
            TypeDesc::Primitive(
                Primitive::Boolean
                | Primitive::Byte
                | Primitive::Char
                | Primitive::Short
                | Primitive::Int,
            ) => ValueKind::Int,
            TypeDesc::Primitive(Primitive::Long) => ValueKind::Long,
            TypeDesc::Primitive(Primitive::Float) => ValueKind::Float,
            TypeDesc::Primitive(Primitive::Double) => ValueKind::Double,
            _ => ValueKind::Reference,
        }
    }

    /// Opcode prefix (`i`, `l`, `f`, `d`, `a`); empty for `void`.
    fn prefix(self) -> &'static str {
        match self {
            ValueKind::Void => "",
            ValueKind::Int => "i",
            ValueKind::Long => "l",
            ValueKind::Float => "f",
            ValueKind::Double => "d",
            ValueKind::Reference => "a",
        }
    }
}

// ── Instructions ────────────────────────────────────────────────────

/// One step of a forwarding body.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ForwardInstr {
    /// Push the local at `slot`.
    LoadArg { slot: u16, kind: ValueKind },
    /// Call the resolved method.
    Invoke {
        kind: InvokeKind,
        method: MethodDescriptor,
    },
    /// Cast the top of stack to an erased reference type.
    CheckCast(TypeDesc),
    /// Return the top of stack (or nothing for `void`).
    Return(ValueKind),
}

impl fmt::Display for ForwardInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForwardInstr::LoadArg { slot, kind } => write!(f, "{}load {slot}", kind.prefix()),
            ForwardInstr::Invoke { kind, method } => write!(
                f,
                "{} {}.{}{}",
                kind.mnemonic(),
                method.declaring_type().internal_name(),
                method.name(),
                method.descriptor()
            ),
            ForwardInstr::CheckCast(ty) => write!(f, "checkcast {}", ty.internal_form()),
            ForwardInstr::Return(kind) => write!(f, "{}return", kind.prefix()),
        }
    }
}

// ── Body ────────────────────────────────────────────────────────────

/// Load every accessor argument, invoke, return.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ForwardingBody {
    instrs: Vec<ForwardInstr>,
    max_locals: u16,
}

impl ForwardingBody {
    /// Build the body of a static accessor whose parameters are
    /// `accessor_params`, which returns `returns` and forwards to `resolved`.
    ///
    /// `returns` must have the same value kind as the resolved return type.
    pub fn forward(
        accessor_params: &[TypeDesc],
        resolved: &MethodDescriptor,
        returns: &TypeDesc,
    ) -> Self {
        let mut instrs = Vec::with_capacity(accessor_params.len() + 3);
        let mut slot: u16 = 0;
        for param in accessor_params {
            instrs.push(ForwardInstr::LoadArg {
                slot,
                kind: ValueKind::of(param),
            });
            slot += param.slot_size();
        }
        instrs.push(ForwardInstr::Invoke {
            kind: InvokeKind::for_target(resolved),
            method: resolved.clone(),
        });
        let erased = returns.erasure();
        if erased.is_reference() && erased != resolved.return_type().erasure() {
            instrs.push(ForwardInstr::CheckCast(erased));
        }
        instrs.push(ForwardInstr::Return(ValueKind::of(returns)));
        Self {
            instrs,
            max_locals: slot,
        }
    }

    #[inline]
    pub fn instructions(&self) -> &[ForwardInstr] {
        &self.instrs
    }

    /// Local variable slots used by the arguments.
    #[inline]
    pub fn max_locals(&self) -> u16 {
        self.max_locals
    }

    /// The method this body invokes.
    pub fn invoked(&self) -> Option<&MethodDescriptor> {
        self.instrs.iter().find_map(|instr| match instr {
            ForwardInstr::Invoke { method, .. } => Some(method),
            _ => None,
        })
    }
}
