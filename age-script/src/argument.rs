use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// Argument type tag, the first word of every `(type, raw)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
pub enum ArgumentType {
    Plain = 0x0,
    Float = 0x1,
    String = 0x2,
    GlobalInt = 0x3,
    GlobalFloat = 0x4,
    GlobalString = 0x5,
    GlobalPtr = 0x6,
    GlobalFloatPtr = 0x7,
    GlobalStringPtr = 0x8,
    LocalInt = 0x9,
    LocalFloat = 0xA,
    LocalString = 0xB,
    LocalPtr = 0xC,
    LocalFloatPtr = 0xD,
    LocalStringPtr = 0xE,
    // Later titles only; meaning unknown.
    Unknown8003 = 0x8003,
    Unknown8005 = 0x8005,
    Unknown8009 = 0x8009,
    Unknown800B = 0x800B,
}

const SCOPED: [(ArgumentType, &str); 17] = [
    (ArgumentType::Float, "float"),
    (ArgumentType::GlobalInt, "global-int"),
    (ArgumentType::GlobalFloat, "global-float"),
    (ArgumentType::GlobalString, "global-string"),
    (ArgumentType::GlobalPtr, "global-ptr"),
    (ArgumentType::GlobalFloatPtr, "global-float-ptr"),
    (ArgumentType::GlobalStringPtr, "global-string-ptr"),
    (ArgumentType::LocalInt, "local-int"),
    (ArgumentType::LocalFloat, "local-float"),
    (ArgumentType::LocalString, "local-string"),
    (ArgumentType::LocalPtr, "local-ptr"),
    (ArgumentType::LocalFloatPtr, "local-float-ptr"),
    (ArgumentType::LocalStringPtr, "local-string-ptr"),
    (ArgumentType::Unknown8003, "unknown0x8003"),
    (ArgumentType::Unknown8005, "unknown0x8005"),
    (ArgumentType::Unknown8009, "unknown0x8009"),
    (ArgumentType::Unknown800B, "unknown0x800B"),
];

impl ArgumentType {
    pub fn from_tag(tag: u32) -> Option<Self> {
        Self::from_u32(tag)
    }

    pub fn tag(self) -> u32 {
        self as u32
    }

    /// Name used inside `(name value)` in the text form. `None` for the plain and string tags,
    /// which have their own syntax.
    pub fn scope_name(self) -> Option<&'static str> {
        SCOPED
            .iter()
            .find(|(ty, _)| *ty == self)
            .map(|(_, name)| *name)
    }

    pub fn from_scope_name(name: &str) -> Option<Self> {
        SCOPED
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(ty, _)| *ty)
    }
}

/// One decoded argument.
///
/// `raw` in `Text` and `Array` is the word offset of the payload inside the file. The
/// reassembler recomputes it during layout, so parsed arguments carry 0 until then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Value { ty: ArgumentType, raw: u32 },
    Text { text: String, raw: u32 },
    Array { elements: Vec<u32>, raw: u32 },
    /// Code address, as a word offset. Encoded with the plain tag.
    Label { target: u32 },
}

impl Argument {
    pub fn plain(raw: u32) -> Self {
        Argument::Value {
            ty: ArgumentType::Plain,
            raw,
        }
    }

    pub fn ty(&self) -> ArgumentType {
        match self {
            Argument::Value { ty, .. } => *ty,
            Argument::Text { .. } => ArgumentType::String,
            Argument::Array { .. } | Argument::Label { .. } => ArgumentType::Plain,
        }
    }

    pub fn raw(&self) -> u32 {
        match self {
            Argument::Value { raw, .. } | Argument::Text { raw, .. } | Argument::Array { raw, .. } => {
                *raw
            }
            Argument::Label { target } => *target,
        }
    }

    /// The `(type, raw)` pair as it appears in the instruction stream.
    pub fn encoded_pair(&self) -> (u32, u32) {
        (self.ty().tag(), self.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_roundtrip() {
        for tag in (0..=0xE).chain([0x8003, 0x8005, 0x8009, 0x800B]) {
            let ty = ArgumentType::from_tag(tag).unwrap();
            assert_eq!(ty.tag(), tag);
        }
        for tag in [0xF, 0x10, 0x8000, 0x8004, 0x800C, 0xFFFF_FFFF] {
            assert_eq!(ArgumentType::from_tag(tag), None, "tag 0x{tag:X}");
        }
    }

    #[test]
    fn scope_names() {
        assert_eq!(ArgumentType::LocalInt.scope_name(), Some("local-int"));
        assert_eq!(ArgumentType::Plain.scope_name(), None);
        assert_eq!(ArgumentType::String.scope_name(), None);
        for (ty, name) in SCOPED {
            assert_eq!(ArgumentType::from_scope_name(name), Some(ty));
        }
        assert_eq!(ArgumentType::from_scope_name("string"), None);
    }

    #[test]
    fn labels_encode_as_plain() {
        assert_eq!(Argument::Label { target: 7 }.encoded_pair(), (0, 7));
        assert_eq!(
            Argument::Text {
                text: "a".into(),
                raw: 3
            }
            .encoded_pair(),
            (2, 3)
        );
    }
}
