//! Device identifier generation.

use uuid::Uuid;

use callerinfo_core::DeviceIdentifierGenerator;

/// Generates random (v4) UUIDs in hyphenated lowercase form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl DeviceIdentifierGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_identifiers_parse_as_uuid_and_differ() {
        let gen = UuidGenerator;
        let a = gen.generate();
        let b = gen.generate();
        assert!(Uuid::parse_str(&a).is_ok());
        assert_ne!(a, b);
    }
}
