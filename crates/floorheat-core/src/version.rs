//! Encoding version tags and their inverse value transforms.

use crate::DecodeError;
use serde::{Deserialize, Serialize};

/// Selects the transform that maps an encoded byte back to a float.
///
/// Serialized as its integer tag, so `"version": 1` in JSON configs maps to
/// [`EncodingVersion::V1`] and any other tag fails deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum EncodingVersion {
    /// `value = byte / 100`, covering `[0.0, 2.55]` in steps of `0.01`.
    #[default]
    V1,
}

impl EncodingVersion {
    /// Integer tag of this version.
    #[inline]
    pub fn tag(self) -> u32 {
        match self {
            EncodingVersion::V1 => 1,
        }
    }

    /// Recover the float value stored in an encoded channel byte.
    #[inline]
    pub fn to_value(self, byte: u8) -> f64 {
        match self {
            EncodingVersion::V1 => f64::from(byte) / 100.0,
        }
    }
}

impl TryFrom<u32> for EncodingVersion {
    type Error = DecodeError;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(EncodingVersion::V1),
            other => Err(DecodeError::UnsupportedVersion(other)),
        }
    }
}

impl From<EncodingVersion> for u32 {
    fn from(version: EncodingVersion) -> Self {
        version.tag()
    }
}
