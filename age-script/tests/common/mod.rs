#![allow(dead_code)]

/// Hand-rolled binary image, independent of the crate's own header writer.
pub struct Image {
    pub gen5: bool,
    pub signature: [u8; 8],
    pub local_vars: [u32; 6],
    pub code: Vec<u32>,
    pub strings: Vec<u8>,
    pub footer: Vec<u32>,
    /// `(length, offset)` per index table.
    pub tables: [(u32, u32); 3],
}

impl Image {
    pub fn gen4(code: &[u32]) -> Self {
        let end = code.len() as u32;
        Self {
            gen5: false,
            signature: *b"SYS40000",
            local_vars: [0; 6],
            code: code.to_vec(),
            strings: Vec::new(),
            footer: Vec::new(),
            tables: [(0, end); 3],
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        if self.gen5 {
            for &b in &self.signature {
                out.extend_from_slice(&u16::from(b).to_le_bytes());
            }
        } else {
            out.extend_from_slice(&self.signature);
        }
        for v in self.local_vars {
            out.extend_from_slice(&v.to_le_bytes());
        }
        out.extend_from_slice(&0x1Cu32.to_le_bytes());
        for (length, offset) in self.tables {
            out.extend_from_slice(&length.to_le_bytes());
            out.extend_from_slice(&offset.to_le_bytes());
        }
        for w in &self.code {
            out.extend_from_slice(&w.to_le_bytes());
        }
        out.extend_from_slice(&self.strings);
        for w in &self.footer {
            out.extend_from_slice(&w.to_le_bytes());
        }
        out
    }
}

/// Prologue text for a header with the given signature and zeroed locals.
pub fn prologue(signature: &str) -> String {
    format!(
        "==Binary Information - do not edit==\nsignature = {signature}\nlocal_vars = {{ 0 0 0 0 0 0 }}\n====\n\n"
    )
}

/// A small program touching every payload kind:
///
/// ```text
/// w0   call-script "a"
/// w3   copy-local-array (local-int 0) [7 8]
/// w8   jcc (local-int 1) -> w21, no second target
/// w15  call -> w24
/// w18  u0041A7B0 1
/// w21  comment "bcd"
/// w24  ret
/// ```
pub fn sample(gen5: bool) -> Image {
    // Strings start at word 25. Generation 4: "a" takes 1 word, "bcd" 2. Generation 5: 2 and 3.
    let (s1, array, strings) = if gen5 {
        let mut strings = vec![!b'a', 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
        strings.extend_from_slice(&[!b'b', 0xFF, !b'c', 0xFF, !b'd', 0xFF]);
        strings.extend_from_slice(&[0xFF; 6]);
        (27, 30, strings)
    } else {
        let strings = vec![
            !b'a', 0xFF, 0xFF, 0xFF, //
            !b'b', !b'c', !b'd', 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        (26, 28, strings)
    };

    let code = vec![
        0x3, 2, 25, //
        0x64, 9, 0, 0, array, //
        0xA0, 9, 1, 0, 21, 0, 0xFFFF_FFFF, //
        0x8F, 0, 24, //
        0x71, 0, 1, //
        0x1A7, 2, s1, //
        0x5,
    ];
    let tables_at = array + 3;

    Image {
        gen5,
        signature: if gen5 { *b"SYS5501 " } else { *b"SYS4415 " },
        local_vars: [1, 2, 3, 0x10, 0, 0xabc],
        code,
        strings,
        footer: vec![2, 7, 8, 18, 0, 15],
        tables: [(1, tables_at), (1, tables_at + 1), (1, tables_at + 2)],
    }
}

pub fn sample_text(gen5: bool) -> String {
    let (signature, jcc_label, call_label) = if gen5 {
        ("SYS5501 ", "label_00000098", "label_000000a4")
    } else {
        ("SYS4415 ", "label_00000090", "label_0000009c")
    };
    format!(
        "==Binary Information - do not edit==\n\
         signature = {signature}\n\
         local_vars = {{ 1 2 3 10 0 abc }}\n\
         ====\n\
         \n\
         call-script \"a\"\n\
         copy-local-array (local-int 0) [7 8]\n\
         jcc (local-int 1) {jcc_label} ffffffff\n\
         call {call_label}\n\
         u0041A7B0 1\n\
         \n\
         {jcc_label}\n\
         comment \"bcd\"\n\
         \n\
         {call_label}\n\
         ret\n"
    )
}
