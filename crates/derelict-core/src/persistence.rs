//! Save/Load functionality for session snapshots.
//!
//! Binary snapshots use bincode with a version header; JSON export and
//! import use serde_json for the transport-facing boundary (the REST
//! layer speaks JSON to clients).

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::session::SessionBundle;

/// Version number for the save format (increment when the format changes)
const SAVE_VERSION: u32 = 1;

/// Serializable snapshot wrapper.
#[derive(Serialize, Deserialize)]
struct SaveData {
    version: u32,
    bundle: SessionBundle,
}

/// Errors raised while saving or loading a session snapshot.
#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Bincode(Box<bincode::ErrorKind>),
    Json(serde_json::Error),
    VersionMismatch { expected: u32, found: u32 },
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<Box<bincode::ErrorKind>> for SaveError {
    fn from(e: Box<bincode::ErrorKind>) -> Self {
        SaveError::Bincode(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Json(e)
    }
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Bincode(e) => write!(f, "Serialization error: {}", e),
            SaveError::Json(e) => write!(f, "JSON error: {}", e),
            SaveError::VersionMismatch { expected, found } => {
                write!(f, "Save version mismatch: expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for SaveError {}

/// Write a binary snapshot of a session to a writer.
pub fn save_session<W: Write>(writer: W, bundle: &SessionBundle) -> Result<(), SaveError> {
    let data = SaveData {
        version: SAVE_VERSION,
        bundle: bundle.clone(),
    };
    bincode::serialize_into(writer, &data)?;
    Ok(())
}

/// Load a binary session snapshot from a reader.
pub fn load_session<R: Read>(reader: R) -> Result<SessionBundle, SaveError> {
    let data: SaveData = bincode::deserialize_from(reader)?;
    if data.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: data.version,
        });
    }
    Ok(data.bundle)
}

/// Render a session as JSON for the transport boundary.
pub fn session_to_json(bundle: &SessionBundle) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(bundle)?)
}

/// Parse a session from its JSON form.
pub fn session_from_json(json: &str) -> Result<SessionBundle, SaveError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::GameContent;
    use derelict_logic::difficulty::Difficulty;
    use derelict_logic::topology::Coord;

    fn sample_bundle() -> SessionBundle {
        let content = GameContent::standard();
        let mut bundle = SessionBundle::create(3, 8, Difficulty::Hard, &content);
        bundle.session.activation_codes = 2;
        bundle.session.passengers = 1;
        bundle.map.explored.insert(Coord::new(0, 1));
        bundle.attributes.oxygen = 7;
        bundle
    }

    #[test]
    fn test_binary_roundtrip() {
        let bundle = sample_bundle();
        let mut buffer = Vec::new();
        save_session(&mut buffer, &bundle).unwrap();
        let loaded = load_session(buffer.as_slice()).unwrap();
        assert_eq!(loaded, bundle);
    }

    #[test]
    fn test_version_mismatch_is_detected() {
        let data = SaveData {
            version: 99,
            bundle: sample_bundle(),
        };
        let bytes = bincode::serialize(&data).unwrap();
        match load_session(bytes.as_slice()) {
            Err(SaveError::VersionMismatch { expected, found }) => {
                assert_eq!(expected, SAVE_VERSION);
                assert_eq!(found, 99);
            }
            other => panic!("expected version mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_snapshot_fails() {
        let bundle = sample_bundle();
        let mut buffer = Vec::new();
        save_session(&mut buffer, &bundle).unwrap();
        buffer.truncate(buffer.len() / 2);
        assert!(load_session(buffer.as_slice()).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let bundle = sample_bundle();
        let json = session_to_json(&bundle).unwrap();
        let parsed = session_from_json(&json).unwrap();
        assert_eq!(parsed, bundle);
    }

    #[test]
    fn test_json_rejects_garbage() {
        assert!(session_from_json("{\"not\": \"a session\"}").is_err());
    }
}
