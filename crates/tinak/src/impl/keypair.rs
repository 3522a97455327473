use ed25519_dalek::SigningKey;
use rand_core::OsRng;

use crate::models::{Keypair, SecretKey};

/// Strkey version byte for account ids (`G...`)
const VERSION_ACCOUNT_ID: u8 = 6 << 3;
/// Strkey version byte for secret seeds (`S...`)
const VERSION_SEED: u8 = 18 << 3;

/// CRC16-XModem, the strkey checksum
fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for byte in data {
        crc ^= (*byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }

    crc
}

fn encode_strkey(version: u8, payload: &[u8; 32]) -> String {
    let mut data = Vec::with_capacity(35);
    data.push(version);
    data.extend_from_slice(payload);

    let checksum = crc16_xmodem(&data);
    data.extend_from_slice(&checksum.to_le_bytes());

    base32::encode(base32::Alphabet::RFC4648 { padding: false }, &data)
}

impl Keypair {
    /// Generate a new random ed25519 keypair
    pub fn random() -> Keypair {
        let signing_key = SigningKey::generate(&mut OsRng);

        Keypair {
            public_key: encode_strkey(VERSION_ACCOUNT_ID, signing_key.verifying_key().as_bytes()),
            secret_key: SecretKey::new(encode_strkey(VERSION_SEED, &signing_key.to_bytes())),
        }
    }
}
