//! Wallet data types.

use std::fmt;

/// A freshly generated wallet key with its derived artifacts.
///
/// The WIF string is sensitive: callers decide where it goes, and
/// `Debug` output never includes it.
#[derive(Clone)]
pub struct KeyPair {
    /// The private key in Wallet Import Format (compressed).
    pub wif: String,
    /// The compressed public key as lowercase hex.
    pub public_key_hex: String,
    /// The P2PKH address derived from the public key.
    pub address: String,
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("wif", &"<redacted>")
            .field("public_key_hex", &self.public_key_hex)
            .field("address", &self.address)
            .finish()
    }
}

/// Parameters for a [`send_coin`](crate::Wallet::send_coin) spend.
#[derive(Clone)]
pub struct SendCoinRequest {
    /// WIF-encoded private key controlling the sender's outputs.
    pub sender_wif: String,
    /// The sender's P2PKH address, used to select UTXOs.
    pub sender_address: String,
    /// The recipient's P2PKH address.
    pub recipient_address: String,
    /// Amount to send, in satoshis.
    pub amount: u64,
}

impl fmt::Debug for SendCoinRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SendCoinRequest")
            .field("sender_wif", &"<redacted>")
            .field("sender_address", &self.sender_address)
            .field("recipient_address", &self.recipient_address)
            .field("amount", &self.amount)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_prints_key_material() {
        let pair = KeyPair {
            wif: "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn".to_string(),
            public_key_hex: "02".repeat(33),
            address: "1BitcoinEaterAddressDontSendf59kuE".to_string(),
        };
        let out = format!("{:?}", pair);
        assert!(!out.contains("KwDiBf89"));
        assert!(out.contains("<redacted>"));

        let request = SendCoinRequest {
            sender_wif: pair.wif.clone(),
            sender_address: pair.address.clone(),
            recipient_address: pair.address.clone(),
            amount: 1000,
        };
        let out = format!("{:?}", request);
        assert!(!out.contains("KwDiBf89"));
    }
}
