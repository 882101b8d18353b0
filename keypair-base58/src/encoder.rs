use log::debug;

use crate::errors::{KeypairError, KeypairResult};

/// Byte length of a seed only secret key.
pub const SEED_LEN: usize = 32;
/// Byte length of a full keypair, the seed followed by its public key.
pub const KEYPAIR_LEN: usize = 64;

/// Validates a 32 or 64 element integer list and encodes it as base58.
///
/// The length is checked before the values, so a list that is both the
/// wrong size and out of range reports the length mismatch.
pub fn list_to_base58(ints: &[i64]) -> KeypairResult<String> {
    if ints.len() != SEED_LEN && ints.len() != KEYPAIR_LEN {
        return Err(KeypairError::InvalidLength(ints.len()));
    }
    if !ints.iter().all(|&n| (0..=255).contains(&n)) {
        return Err(KeypairError::ValueOutOfRange);
    }

    let form = if ints.len() == SEED_LEN {
        "seed"
    } else {
        "keypair"
    };
    debug!("encoding {} byte {}", ints.len(), form);

    let bytes = ints.iter().map(|&n| n as u8).collect::<Vec<_>>();
    Ok(bs58::encode(bytes).into_string())
}
