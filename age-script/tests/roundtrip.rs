mod common;

use std::io::Cursor;

use age_script::catalog::{self, NO_TARGET, OP_COPY_LOCAL_ARRAY};
use age_script::reassembler::{layout, parse_script, write_script};
use age_script::{
    assemble_str, disassemble_bytes, Argument, ArgumentType, CodecOptions, ErrorKind, Generation,
    Header, Instruction, Script, ScriptError,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use common::{prologue, sample, sample_text, Image};

const SCOPED: [ArgumentType; 8] = [
    ArgumentType::Float,
    ArgumentType::GlobalInt,
    ArgumentType::GlobalStringPtr,
    ArgumentType::LocalInt,
    ArgumentType::LocalFloatPtr,
    ArgumentType::LocalString,
    ArgumentType::Unknown8003,
    ArgumentType::Unknown800B,
];

// mov, add, show-text, comment, jmp, call, jcc, call-script, 0x71, copy-local-array, ret,
// mouse_callback, multi-target 0x90
const OPCODES: [u32; 13] = [
    0x55, 0x50, 0x6E, 0x1A7, 0x8C, 0x8F, 0xA0, 0x03, 0x71, 0x64, 0x05, 0xCC, 0x90,
];

const WORDS: [&str; 8] = ["a", "text", "two words", "あいう", "漢字", "x y z ", "", "123"];

fn random_text(rng: &mut StdRng) -> String {
    let n = rng.gen_range(0..4);
    (0..n)
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a random, well-formed script directly, bypassing the text form.
fn random_script(rng: &mut StdRng, generation: Generation) -> Script {
    let count = rng.gen_range(0..60);
    let definitions: Vec<_> = (0..count)
        .map(|_| {
            let op = OPCODES[rng.gen_range(0..OPCODES.len())];
            catalog::lookup_by_opcode(op).unwrap()
        })
        .collect();

    let mut starts = Vec::with_capacity(count);
    let mut cursor = 0u32;
    for d in &definitions {
        starts.push(cursor);
        cursor += d.encoded_len() / 4;
    }

    let instructions = definitions
        .iter()
        .zip(&starts)
        .map(|(&definition, &word_offset)| {
            let arguments = (0..definition.argument_count as usize)
                .map(|index| {
                    if definition.opcode == OP_COPY_LOCAL_ARRAY && index == 1 {
                        let n = rng.gen_range(0..5);
                        return Argument::Array {
                            elements: (0..n).map(|_| rng.gen()).collect(),
                            raw: 0,
                        };
                    }
                    if catalog::is_address_slot(definition.opcode, index) {
                        return match rng.gen_range(0..4) {
                            0 => Argument::plain(NO_TARGET),
                            1 => Argument::plain(cursor + 0x1000),
                            _ => Argument::plain(starts[rng.gen_range(0..starts.len())]),
                        };
                    }
                    match rng.gen_range(0..3) {
                        0 => Argument::plain(rng.gen()),
                        1 => Argument::Value {
                            ty: SCOPED[rng.gen_range(0..SCOPED.len())],
                            raw: rng.gen_range(0..0x400),
                        },
                        _ => Argument::Text {
                            text: random_text(rng),
                            raw: 0,
                        },
                    }
                })
                .collect();
            Instruction {
                definition,
                arguments,
                word_offset,
            }
        })
        .collect();

    let signature = match generation {
        Generation::Gen4 => *b"SYS4R000",
        Generation::Gen5 => *b"SYS5R000",
    };
    let local_vars = [(); 6].map(|_| rng.gen_range(0..0x200));
    Script {
        header: Header::new(generation, signature, local_vars),
        instructions,
    }
}

fn binary_of(mut script: Script) -> Vec<u8> {
    let footer = layout(&mut script, &CodecOptions::default()).unwrap();
    let mut out = Cursor::new(Vec::new());
    write_script(&script, &footer, &mut out).unwrap();
    out.into_inner()
}

#[test]
fn random_scripts_roundtrip() {
    let mut rng = StdRng::seed_from_u64(0xA6E_5C21);
    for round in 0..200 {
        let generation = if round % 2 == 0 {
            Generation::Gen4
        } else {
            Generation::Gen5
        };
        let binary = binary_of(random_script(&mut rng, generation));

        let text = disassemble_bytes(&binary).unwrap();
        let reassembled = assemble_str(&text).unwrap();
        assert_eq!(hex::encode(&reassembled), hex::encode(&binary), "round {round}");
        assert_eq!(disassemble_bytes(&reassembled).unwrap(), text, "round {round}");
    }
}

#[test]
fn labels_land_on_instruction_starts() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let binary = binary_of(random_script(&mut rng, Generation::Gen4));
        let text = disassemble_bytes(&binary).unwrap();
        let script = parse_script(&text).unwrap();
        for argument in script.instructions.iter().flat_map(|i| &i.arguments) {
            if let Argument::Label { target } = argument {
                assert!(script.instruction_at(*target).is_some(), "label to word {target}");
            }
        }
    }
}

#[test]
fn sample_is_stable_both_ways() {
    for gen5 in [false, true] {
        let bytes = sample(gen5).to_bytes();
        let text = sample_text(gen5);
        assert_eq!(assemble_str(&disassemble_bytes(&bytes).unwrap()).unwrap(), bytes);
        assert_eq!(disassemble_bytes(&assemble_str(&text).unwrap()).unwrap(), text);
    }
}

#[test]
fn string_pool_stays_aligned() {
    let mut rng = StdRng::seed_from_u64(99);
    for generation in [Generation::Gen4, Generation::Gen5] {
        for _ in 0..20 {
            let mut script = random_script(&mut rng, generation);
            layout(&mut script, &CodecOptions::default()).unwrap();
            for argument in script.instructions.iter().flat_map(|i| &i.arguments) {
                if let Argument::Text { raw, .. } = argument {
                    // word offsets are aligned by construction; the first one starts at code end
                    assert!(*raw >= script.code_end());
                }
            }
            let binary = binary_of(script);
            assert_eq!(binary.len() % 4, 0);
        }
    }
}

#[test]
fn error_kinds() {
    let bad_magic = [&b"SYS3"[..], &[0u8; 56][..]].concat();
    let err = disassemble_bytes(&bad_magic).unwrap_err();
    assert!(matches!(err, ScriptError::BadMagic { .. }));
    assert_eq!(err.kind(), ErrorKind::Format);

    // tables claim 10 words of code, the file has 3
    let mut truncated = Image::gen4(&[0x8C, 0, 0]);
    truncated.tables = [(0, 10); 3];
    let err = disassemble_bytes(&truncated.to_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);

    let err = assemble_str(&format!("{}fly 1 2\n", prologue("SYS40000"))).unwrap_err();
    assert!(matches!(err, ScriptError::UnknownMnemonic { line: 6, .. }));
    assert_eq!(err.kind(), ErrorKind::Syntax);

    let err = assemble_str(&format!("{}jmp label_1234\n", prologue("SYS40000"))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Resolution);
    assert_eq!(err.to_string(), "line 6: label_00001234 is never defined");

    let err = assemble_str("signature = SYS40000\n").unwrap_err();
    assert!(matches!(err, ScriptError::BadPrologue { line: 1, .. }));

    let err = assemble_str(&prologue("ABCD0000")).unwrap_err();
    assert!(matches!(err, ScriptError::BadPrologue { line: 2, .. }));
}
