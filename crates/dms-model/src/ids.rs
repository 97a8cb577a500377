//! Identifier newtypes.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::ModelError;

/// A data module code (DMC).
///
/// Identifies a logical data module; together with the information variant it
/// forms the unique key of a stored module record.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Dmc(String);

impl Dmc {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidDmc(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Construct from a value already known to be well formed.
    pub(crate) fn from_trusted(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Dmc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A deterministic source-document identifier.
///
/// A short, fixed-size binary ID derived from the document content and
/// rendered as lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId([u8; 16]);

impl DocumentId {
    /// Derive an id from the raw bytes of the source document.
    pub fn from_content(bytes: &[u8]) -> Self {
        let digest: [u8; 32] = Sha256::digest(bytes).into();
        let mut out = [0u8; 16];
        out.copy_from_slice(&digest[..16]);
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::str::FromStr for DocumentId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| ModelError::InvalidDocumentId(s.to_string()))?;
        if bytes.len() != 16 {
            return Err(ModelError::InvalidDocumentId(s.to_string()));
        }
        let mut out = [0u8; 16];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }
}

impl serde::Serialize for DocumentId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for DocumentId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::Deserialize;
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dmc_rejects_blank_input() {
        assert!(Dmc::new("  ").is_err());
        assert!(Dmc::new("DMC-X-00").is_ok());
    }

    #[test]
    fn dmc_trims_whitespace() {
        let dmc = Dmc::new(" DMC-X-00 ").expect("valid dmc");
        assert_eq!(dmc.as_str(), "DMC-X-00");
    }

    #[test]
    fn document_id_is_content_derived_and_stable() {
        let a = DocumentId::from_content(b"engine manual");
        let b = DocumentId::from_content(b"engine manual");
        let c = DocumentId::from_content(b"wing manual");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_hex().len(), 32);
    }

    #[test]
    fn document_id_round_trips_through_hex() {
        let id = DocumentId::from_content(b"doc");
        let parsed: DocumentId = id.to_hex().parse().expect("parse hex id");
        assert_eq!(parsed, id);
        assert!("not-hex".parse::<DocumentId>().is_err());
        assert!("abcd".parse::<DocumentId>().is_err());
    }
}
