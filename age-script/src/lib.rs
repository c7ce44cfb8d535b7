//! age-script
//!
//! Disassembler and reassembler for AGE engine script bytecode (`SYS4`/`SYS5` files).
//!
//! A binary script is a fixed header, a stream of `opcode (type raw)*` words, a pool of
//! inverted strings and a footer of arrays and index tables. [`disassemble`] turns it into an
//! editable text listing with symbolic labels; [`assemble`] lays the text out again and produces
//! the same bytes.
//!
//! ```no_run
//! let text = age_script::disassemble_bytes(&std::fs::read("START.BIN")?)?;
//! let bytes = age_script::assemble_str(&text)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod argument;
pub mod catalog;
pub mod disassembler;
pub mod error;
pub mod header;
pub mod instruction;
pub mod pool;
pub mod reassembler;

use age_nls::Encoding;
use serde::{Deserialize, Serialize};

pub use argument::{Argument, ArgumentType};
pub use catalog::InstructionDefinition;
pub use disassembler::{disassemble, disassemble_bytes};
pub use error::{ErrorKind, Result, ScriptError};
pub use header::{Generation, Header};
pub use instruction::{Instruction, Script};
pub use reassembler::{assemble, assemble_str};

/// Knobs shared by both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Codepage of generation 4 strings. Generation 5 strings are always UTF-16LE.
    #[serde(rename = "lang")]
    pub encoding: Encoding,
}

impl CodecOptions {
    pub fn new(encoding: Encoding) -> Self {
        Self { encoding }
    }
}
