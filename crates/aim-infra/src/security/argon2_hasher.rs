//! Argon2id password encoding for the preference store.
//!
//! Encoded form: hex of `version (1 byte) ‖ salt (16 bytes) ‖ hash (32 bytes)`.

use aim_core::ports::{CredentialHashError, CredentialHasherPort};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;
use subtle::ConstantTimeEq;

pub const HASH_VERSION: u8 = 0x01;
pub const SALT_SIZE: usize = 16;
pub const HASH_SIZE: usize = 32;
pub const ENCODED_SIZE: usize = 1 + SALT_SIZE + HASH_SIZE;

pub struct Argon2CredentialHasher {
    params: Params,
}

impl Argon2CredentialHasher {
    /// Hasher with the argon2 crate's recommended parameters.
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Custom cost parameters (memory in KiB, iterations, lanes).
    pub fn with_params(m_cost: u32, t_cost: u32, p_cost: u32) -> Result<Self, CredentialHashError> {
        let params = Params::new(m_cost, t_cost, p_cost, Some(HASH_SIZE))
            .map_err(|e| CredentialHashError::Hash(e.to_string()))?;
        Ok(Self { params })
    }

    fn derive(&self, password: &str, salt: &[u8; SALT_SIZE]) -> Result<[u8; HASH_SIZE], CredentialHashError> {
        let mut output = [0u8; HASH_SIZE];
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
            .hash_password_into(password.as_bytes(), salt, &mut output)
            .map_err(|e| CredentialHashError::Hash(format!("Argon2id hashing failed: {e}")))?;
        Ok(output)
    }
}

impl Default for Argon2CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasherPort for Argon2CredentialHasher {
    fn hash(&self, password: &str) -> Result<String, CredentialHashError> {
        let salt = generate_salt();
        let hash = self.derive(password, &salt)?;

        let mut encoded = Vec::with_capacity(ENCODED_SIZE);
        encoded.push(HASH_VERSION);
        encoded.extend_from_slice(&salt);
        encoded.extend_from_slice(&hash);
        Ok(hex::encode(encoded))
    }

    fn verify(&self, password: &str, encoded: &str) -> Result<bool, CredentialHashError> {
        let bytes = hex::decode(encoded).map_err(|_| CredentialHashError::InvalidFormat)?;
        if bytes.len() != ENCODED_SIZE || bytes[0] != HASH_VERSION {
            return Err(CredentialHashError::InvalidFormat);
        }

        let mut salt = [0u8; SALT_SIZE];
        salt.copy_from_slice(&bytes[1..1 + SALT_SIZE]);
        let computed = self.derive(password, &salt)?;

        Ok(computed.ct_eq(&bytes[1 + SALT_SIZE..]).into())
    }
}

fn generate_salt() -> [u8; SALT_SIZE] {
    let mut salt = [0u8; SALT_SIZE];
    rand::rng().fill_bytes(&mut salt);
    salt
}
