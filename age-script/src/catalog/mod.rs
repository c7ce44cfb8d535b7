//! The fixed instruction set.
//!
//! Most entries carry only an arity; the engine's handler address doubles as the mnemonic for
//! opcodes nobody has named yet (`u0041A7B0`, ...).

mod table;

use table::DEFINITIONS;

pub const OP_CALL_SCRIPT: u32 = 0x03;
pub const OP_MOV: u32 = 0x55;
pub const OP_COPY_LOCAL_ARRAY: u32 = 0x64;
pub const OP_TABLE_1: u32 = 0x71;
pub const OP_MULTI_TARGET_7B: u32 = 0x7B;
pub const OP_JMP: u32 = 0x8C;
pub const OP_CALL: u32 = 0x8F;
pub const OP_MULTI_TARGET_90: u32 = 0x90;
pub const OP_JCC: u32 = 0xA0;
pub const OP_MOUSE_CALLBACK: u32 = 0xCC;
pub const OP_LOOP_SETUP: u32 = 0xD4;
pub const OP_JOY_CALLBACK: u32 = 0xFB;

/// Raw value of an address slot that points nowhere.
pub const NO_TARGET: u32 = 0xFFFF_FFFF;

/// Argument index of the footer array reference in [`OP_COPY_LOCAL_ARRAY`].
pub const ARRAY_ARGUMENT_INDEX: usize = 1;

/// Opcodes whose positions are recorded in the three footer index tables, in table order.
pub const INDEXED_OPCODES: [u32; 3] = [OP_TABLE_1, OP_CALL_SCRIPT, OP_CALL];

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct InstructionDefinition {
    pub opcode: u32,
    pub mnemonic: &'static str,
    pub argument_count: u32,
}

impl InstructionDefinition {
    /// Encoded size: the opcode word plus a `(type, raw)` pair per argument.
    #[inline]
    pub fn encoded_len(&self) -> u32 {
        4 + 8 * self.argument_count
    }

    #[inline]
    pub fn is_control_flow(&self) -> bool {
        is_control_flow(self.opcode)
    }
}

pub fn definitions() -> &'static [InstructionDefinition] {
    &DEFINITIONS
}

pub fn lookup_by_opcode(opcode: u32) -> Option<&'static InstructionDefinition> {
    DEFINITIONS
        .binary_search_by_key(&opcode, |d| d.opcode)
        .ok()
        .map(|idx| &DEFINITIONS[idx])
}

/// Linear scan; only the reassembler needs it, once per line.
pub fn lookup_by_mnemonic(mnemonic: &str) -> Option<&'static InstructionDefinition> {
    DEFINITIONS.iter().find(|d| d.mnemonic == mnemonic)
}

pub fn is_control_flow(opcode: u32) -> bool {
    matches!(
        opcode,
        OP_JMP
            | OP_CALL
            | OP_JCC
            | OP_MOUSE_CALLBACK
            | OP_JOY_CALLBACK
            | OP_LOOP_SETUP
            | OP_MULTI_TARGET_90
            | OP_MULTI_TARGET_7B
    )
}

/// Whether argument `index` of `opcode` holds a code address rather than a plain integer.
pub fn is_address_slot(opcode: u32, index: usize) -> bool {
    match opcode {
        OP_JMP | OP_CALL | OP_MULTI_TARGET_7B => true,
        OP_JCC | OP_MOUSE_CALLBACK | OP_JOY_CALLBACK => index >= 1,
        OP_LOOP_SETUP => index >= 2,
        OP_MULTI_TARGET_90 => index >= 4,
        _ => false,
    }
}

/// [`is_address_slot`] plus the [`NO_TARGET`] sentinel check.
pub fn is_address_argument(opcode: u32, index: usize, raw: u32) -> bool {
    raw != NO_TARGET && is_address_slot(opcode, index)
}
