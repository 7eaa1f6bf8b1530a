use super::tree::MenuTree;
use crate::error::ArtifactError;
use crate::matcher::MatchingMode;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// A compiled menu together with the matching mode it was built for.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CompiledMenu {
    pub matching_mode: MatchingMode,
    pub tree: MenuTree,
}

impl CompiledMenu {
    pub fn new(tree: MenuTree, matching_mode: MatchingMode) -> Self {
        Self {
            matching_mode,
            tree,
        }
    }

    /// Saves the compiled menu to a file using the bincode format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ArtifactError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| {
            ArtifactError::Io(format!("Could not create file '{}': {}", path.display(), e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            ArtifactError::Io(format!("Could not write to file '{}': {}", path.display(), e))
        })?;
        Ok(())
    }

    /// Loads a compiled menu from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let mut file = fs::File::open(path).map_err(|e| {
            ArtifactError::Io(format!("Could not open file '{}': {}", path.display(), e))
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            ArtifactError::Io(format!("Could not read from file '{}': {}", path.display(), e))
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Encoding(format!("Serialization failed: {}", e)))
    }

    /// Deserializes a compiled menu and re-checks the tree invariants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let (menu, _): (Self, usize) = decode_from_slice(bytes, standard())
            .map_err(|e| ArtifactError::Encoding(format!("Deserialization failed: {}", e)))?;
        menu.tree.verify()?;
        Ok(menu)
    }
}
