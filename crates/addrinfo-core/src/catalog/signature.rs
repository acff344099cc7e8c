use std::fmt;

/// A named literal byte sequence matched verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub name: &'static str,
    pub bytes: &'static [u8],
}

impl Signature {
    pub const fn new(name: &'static str, bytes: &'static [u8]) -> Self {
        Self { name, bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether `bytes` starts with this signature
    pub fn matches_at(&self, bytes: &[u8]) -> bool {
        bytes.starts_with(self.bytes)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, format_bytes(self.bytes))
    }
}

/// Render bytes as space-separated uppercase hex
pub fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(&[0x0B, 0x82, 0x44, 0xFD]), "0B 82 44 FD");
        assert_eq!(format_bytes(&[]), "");
    }

    #[test]
    fn test_display_includes_name_and_bytes() {
        let sig = Signature::new("KEYS", b"KEYS");
        assert_eq!(sig.to_string(), "KEYS [4B 45 59 53]");
    }

    #[test]
    fn test_matches_at() {
        let sig = Signature::new("BSA", b"BSA_");
        assert!(sig.matches_at(b"BSA_data"));
        assert!(!sig.matches_at(b"BSA"));
        assert!(!sig.matches_at(b"XBSA_"));
    }
}
