//! Random token generation

use rand::Rng;

use crate::constants::EVENT_PIN_LENGTH;

/// Generate a random alphanumeric token
pub fn generate_secure_token(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Generate the pin handed out for a new event
pub fn generate_event_pin() -> String {
    generate_secure_token(EVENT_PIN_LENGTH)
}
