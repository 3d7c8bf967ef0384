//! API key generation

use orion_core::IdCodec;
use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};

/// Length of the random tail of a key
const API_KEY_RANDOM_LEN: usize = 24;

/// Generate an API key `{id hashed with salt}.{1 hashed with email}.{random}`
///
/// The first two segments tie the key to its owner; only the random tail
/// carries secrecy.
#[must_use]
pub fn generate_api_key(salt: &str, usuario_id: i32, email: &str) -> String {
    let propietario = IdCodec::new(salt).encode_id(usuario_id);
    let correo = IdCodec::new(email).encode(1);
    let aleatorio: String = OsRng
        .sample_iter(&Alphanumeric)
        .take(API_KEY_RANDOM_LEN)
        .map(char::from)
        .collect();
    format!("{propietario}.{correo}.{aleatorio}")
}
