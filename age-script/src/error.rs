use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unrecognized file magic {magic:02x?}")]
    BadMagic { magic: [u8; 4] },

    #[error("signature {signature:?} is not 8 ASCII characters")]
    BadSignature { signature: String },

    #[error("unknown opcode 0x{opcode:X} at offset 0x{offset:X}")]
    UnknownOpcode { opcode: u32, offset: u64 },

    #[error(
        "unknown argument type 0x{tag:X} (value 0x{raw:X}) for argument {index} of opcode 0x{opcode:X} at offset 0x{offset:X}"
    )]
    UnknownArgumentType {
        tag: u32,
        raw: u32,
        opcode: u32,
        index: usize,
        offset: u64,
    },

    #[error("string at offset 0x{offset:X} is not valid {encoding}")]
    InvalidText { offset: u64, encoding: &'static str },

    #[error("string at offset 0x{offset:X} cannot be written as one quoted argument: {text:?}")]
    UnquotableText { offset: u64, text: String },

    #[error("{what} at offset 0x{offset:X} points outside the file")]
    OutOfBounds { what: &'static str, offset: u64 },

    #[error("header prologue, line {line}: {message}")]
    BadPrologue { line: usize, message: String },

    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("line {line}: unknown mnemonic `{mnemonic}`")]
    UnknownMnemonic { line: usize, mnemonic: String },

    #[error("line {line}: unknown variable type `{name}`")]
    UnknownScopeType { line: usize, name: String },

    #[error("line {line}: `{mnemonic}` expects {expected} arguments but found {found}")]
    ArgumentCountMismatch {
        line: usize,
        mnemonic: &'static str,
        expected: u32,
        found: usize,
    },

    #[error("line {line}: label_{label:08x} is already defined on line {first}")]
    DuplicateLabel { line: usize, label: u32, first: usize },

    #[error("line {line}: label_{label:08x} is never defined")]
    UnresolvedLabel { line: usize, label: u32 },

    #[error("script is too large: {what} overflows 32 bits")]
    TooLarge { what: &'static str },
}

/// Broad category, mirroring how the driver reports failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Syntax,
    Resolution,
    Io,
}

impl ScriptError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScriptError::Io(_) => ErrorKind::Io,
            ScriptError::BadMagic { .. }
            | ScriptError::BadSignature { .. }
            | ScriptError::UnknownOpcode { .. }
            | ScriptError::UnknownArgumentType { .. }
            | ScriptError::InvalidText { .. }
            | ScriptError::UnquotableText { .. }
            | ScriptError::OutOfBounds { .. }
            | ScriptError::TooLarge { .. } => ErrorKind::Format,
            ScriptError::BadPrologue { .. }
            | ScriptError::Syntax { .. }
            | ScriptError::UnknownMnemonic { .. }
            | ScriptError::UnknownScopeType { .. }
            | ScriptError::ArgumentCountMismatch { .. }
            | ScriptError::DuplicateLabel { .. } => ErrorKind::Syntax,
            ScriptError::UnresolvedLabel { .. } => ErrorKind::Resolution,
        }
    }

    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        ScriptError::Syntax {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScriptError>;
