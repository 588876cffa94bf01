use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::descriptor::{qualify, TypeDescriptor};
use crate::errors::{CompatError, Result};
use crate::{log_op_end, log_op_error, log_op_start};

/// Documentation captured alongside a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    /// Doc comment text without comment markers
    #[serde(default)]
    pub text: String,
    /// Declaration source as written, e.g. `type Config struct { ... }`
    pub decl: String,
}

/// One observed type declaration at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSnapshot {
    /// Import path of the owning package; used for qualification and rendering
    #[serde(default)]
    pub package: String,
    pub name: String,
    /// The declared type, usually a [`TypeDescriptor::Named`]
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    #[serde(default)]
    pub doc: Option<Documentation>,
}

impl TypeSnapshot {
    pub fn new(package: impl Into<String>, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            ty,
            doc: None,
        }
    }

    pub fn with_doc(mut self, doc: Documentation) -> Self {
        self.doc = Some(doc);
        self
    }

    /// Fully qualified `package.Name`
    pub fn qualified_name(&self) -> String {
        qualify(&self.package, &self.name)
    }

    /// The declared type with all naming stripped
    pub fn underlying(&self) -> &TypeDescriptor {
        self.ty.underlying()
    }

    /// Canonical identity of the declaration: `type pkg.Name <underlying>`
    pub fn canonical_identity(&self) -> String {
        format!(
            "type {} {}",
            self.qualified_name(),
            self.underlying().canonical()
        )
    }

    /// Decode a snapshot from JSON bytes
    ///
    /// # Errors
    ///
    /// - `InvalidSnapshot`: bytes are not UTF-8 JSON, or the root is not an object
    /// - `EmptyTypeName`: `name` is missing or empty
    /// - `Serialization`: the object does not match the snapshot schema
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        let start = Instant::now();
        log_op_start!("decode_snapshot", bytes = bytes.len());

        match Self::decode(bytes) {
            Ok(snapshot) => {
                log_op_end!(
                    "decode_snapshot",
                    duration_ms = start.elapsed().as_millis() as u64,
                    type_name = %snapshot.qualified_name()
                );
                Ok(snapshot)
            }
            Err(err) => {
                log_op_error!(
                    "decode_snapshot",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| CompatError::InvalidSnapshot {
            message: format!("snapshot is not valid UTF-8: {}", e),
        })?;

        let raw: Value = serde_json::from_str(text).map_err(|e| CompatError::InvalidSnapshot {
            message: format!("snapshot is not valid JSON: {}", e),
        })?;

        let obj = raw.as_object().ok_or_else(|| CompatError::InvalidSnapshot {
            message: "snapshot JSON root must be an object".to_string(),
        })?;

        match obj.get("name").and_then(Value::as_str) {
            Some(name) if !name.is_empty() => {}
            _ => return Err(CompatError::EmptyTypeName),
        }

        Ok(serde_json::from_value(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::basic::{BasicKind, BasicType};
    use crate::model::descriptor::{Field, NamedType, StructType};

    fn config_snapshot() -> TypeSnapshot {
        let underlying: TypeDescriptor = StructType {
            fields: vec![Field::new("Port", BasicType::typed(BasicKind::Int).into())],
        }
        .into();
        let ty = NamedType {
            package: "example.com/srv".to_string(),
            name: "Config".to_string(),
            underlying: Box::new(underlying),
            methods: vec![],
        };
        TypeSnapshot::new("example.com/srv", "Config", ty.into())
    }

    #[test]
    fn test_canonical_identity() {
        assert_eq!(
            config_snapshot().canonical_identity(),
            "type example.com/srv.Config struct{Port int}"
        );
    }

    #[test]
    fn test_json_round_trip_preserves_identity() {
        let snap = config_snapshot();
        let bytes = serde_json::to_vec(&snap).unwrap();
        let decoded = TypeSnapshot::from_json_bytes(&bytes).unwrap();
        assert_eq!(decoded, snap);
    }

    #[test]
    fn test_rejects_non_object_root() {
        let err = TypeSnapshot::from_json_bytes(b"[1, 2]").unwrap_err();
        assert!(matches!(err, CompatError::InvalidSnapshot { .. }));
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let err = TypeSnapshot::from_json_bytes(&[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, CompatError::InvalidSnapshot { .. }));
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = TypeSnapshot::from_json_bytes(br#"{"name": "", "type": {"shape": "opaque", "repr": "x"}}"#)
            .unwrap_err();
        assert_eq!(err, CompatError::EmptyTypeName);
    }

    #[test]
    fn test_schema_mismatch_is_serialization_error() {
        let err = TypeSnapshot::from_json_bytes(br#"{"name": "T", "type": {"shape": "tuple"}}"#)
            .unwrap_err();
        assert!(matches!(err, CompatError::Serialization { .. }));
    }
}
