//! Key codec for creator ids in keyed storage.
//!
//! Big-endian encoding keeps numeric ordering and lexicographic key ordering
//! identical, so range scans over id-keyed trees walk ids in order.

use crate::ConvertError;
use crate::CreatorId;

/// Converts a creator id to an 8-byte big-endian key.
///
/// # Examples
/// ```
/// use creatordex::utils::convert::creator_key;
///
/// let key = creator_key(0x1234_5678_9ABC_DEF0);
/// assert_eq!(key, [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0]);
/// ```
pub const fn creator_key(id: CreatorId) -> [u8; 8] {
    id.to_be_bytes()
}

/// Recovers a creator id from a stored key.
pub fn creator_id_from_key<K: AsRef<[u8]>>(bytes: K) -> Result<CreatorId, ConvertError> {
    let bytes = bytes.as_ref();
    let array: [u8; 8] =
        bytes.try_into().map_err(|_| ConvertError::InvalidLength(bytes.len()))?;
    Ok(CreatorId::from_be_bytes(array))
}
