//! The Participant entity and its validation rules.

use serde::{Deserialize, Serialize};

use crate::error::{StorageResult, ValidationError};

/// A Super League participant.
///
/// The identifier is server-assigned: it is `None` if and only if the entity
/// has never been persisted. The string fields are required and must be
/// non-empty. Missing fields deserialize to empty strings so that omission
/// and an explicit empty value are rejected by the same validation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Server-assigned identifier; absent until first persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Employee identifier (required).
    #[serde(default)]
    pub emp_id: String,

    /// Display name (required).
    #[serde(default)]
    pub name: String,

    /// Email address (required).
    #[serde(default)]
    pub email: String,
}

impl Participant {
    /// Creates an unpersisted participant with the given fields.
    pub fn new(
        emp_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            emp_id: emp_id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Validates the required fields.
    ///
    /// Returns the first missing field as a
    /// [`ValidationError::MissingRequiredField`].
    pub fn validate(&self) -> StorageResult<()> {
        for (field, value) in [
            ("empId", &self.emp_id),
            ("name", &self.name),
            ("email", &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingRequiredField {
                    field: field.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Validates an entity submitted for creation.
    ///
    /// A new participant must not carry a pre-assigned identifier.
    pub fn validate_new(&self) -> StorageResult<()> {
        if self.id.is_some() {
            return Err(ValidationError::IdAlreadyAssigned.into());
        }
        self.validate()
    }

    /// Validates an entity submitted for update.
    ///
    /// Updates require an identifier that was previously assigned.
    pub fn validate_update(&self) -> StorageResult<()> {
        if self.id.is_none() {
            return Err(ValidationError::MissingId.into());
        }
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;

    fn participant() -> Participant {
        Participant::new("EMP-001", "Ada Lovelace", "ada@superleague.example")
    }

    #[test]
    fn test_valid_participant() {
        assert!(participant().validate_new().is_ok());
    }

    #[test]
    fn test_new_with_id_rejected() {
        let mut p = participant();
        p.id = Some(1);
        let err = p.validate_new().unwrap_err();
        assert!(matches!(
            err,
            StorageError::Validation(ValidationError::IdAlreadyAssigned)
        ));
    }

    #[test]
    fn test_update_without_id_rejected() {
        let err = participant().validate_update().unwrap_err();
        assert!(matches!(
            err,
            StorageError::Validation(ValidationError::MissingId)
        ));
    }

    #[test]
    fn test_empty_fields_rejected() {
        for field in ["empId", "name", "email"] {
            let mut p = participant();
            match field {
                "empId" => p.emp_id.clear(),
                "name" => p.name.clear(),
                _ => p.email.clear(),
            }
            let err = p.validate().unwrap_err();
            match err {
                StorageError::Validation(ValidationError::MissingRequiredField { field: f }) => {
                    assert_eq!(f, field)
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_json_field_names_are_camel_case() {
        let mut p = participant();
        p.id = Some(7);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["empId"], "EMP-001");
        assert_eq!(json["name"], "Ada Lovelace");
        assert_eq!(json["email"], "ada@superleague.example");
    }

    #[test]
    fn test_missing_fields_deserialize_to_empty() {
        let p: Participant = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(p.id, None);
        assert!(p.emp_id.is_empty());
        assert!(p.email.is_empty());
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_unpersisted_id_not_serialized() {
        let json = serde_json::to_value(participant()).unwrap();
        assert!(json.get("id").is_none());
    }
}
