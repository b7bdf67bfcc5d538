//! UUID-shaped identifiers drawn from the seeded stream
//!
//! These are version-4 shaped but not globally unique: two runs with the
//! same seed produce the same identifiers in the same positions.

use super::SeededStream;
use crate::error::Result;
use uuid::Uuid;

/// Draw 16 bytes from the stream and format them as a v4/variant-1 UUID
pub fn deterministic_uuid(stream: &mut SeededStream) -> Result<String> {
    let mut bytes = [0u8; 16];
    stream.fill_bytes(&mut bytes)?;

    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

    Ok(Uuid::from_bytes(bytes).hyphenated().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_deterministic() {
        let mut s1 = SeededStream::new(42);
        let mut s2 = SeededStream::new(42);
        assert_eq!(
            deterministic_uuid(&mut s1).unwrap(),
            deterministic_uuid(&mut s2).unwrap()
        );
    }

    #[test]
    fn test_uuid_shape() {
        let mut stream = SeededStream::new(42);
        let id = deterministic_uuid(&mut stream).unwrap();

        assert_eq!(id.len(), 36);
        let groups: Vec<&str> = id.split('-').collect();
        assert_eq!(
            groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12]
        );
        assert!(id.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
        assert!(!id.chars().any(|c| c.is_ascii_uppercase()));

        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn test_uuid_advances_stream() {
        let mut stream = SeededStream::new(42);
        let first = deterministic_uuid(&mut stream).unwrap();
        let second = deterministic_uuid(&mut stream).unwrap();
        assert_ne!(first, second);
    }
}
