use proptest::prelude::*;

use btc_primitives::base58;
use btc_primitives::chainhash::TxHash;
use btc_primitives::ec::PrivateKey;
use btc_primitives::hash::sha256;
use btc_primitives::wire::{VarInt, WireReader};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn wif_roundtrip(seed in prop::array::uniform32(any::<u8>()), prefix in any::<u8>()) {
        // Not all 32-byte arrays are valid private keys (must be < curve order, nonzero).
        if let Ok(key) = PrivateKey::from_bytes(&seed) {
            let wif = key.to_wif(prefix);
            let key2 = PrivateKey::from_wif(&wif).unwrap();
            prop_assert_eq!(key.to_hex(), key2.to_hex());
        }
    }

    #[test]
    fn ecdsa_sign_verify_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        msg in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        if let Ok(key) = PrivateKey::from_bytes(&seed) {
            let hash = sha256(&msg);
            let sig = key.sign(&hash).unwrap();
            prop_assert!(key.public_key().verify(&hash, &sig));
        }
    }

    #[test]
    fn base58check_roundtrip(payload in prop::collection::vec(any::<u8>(), 1..64)) {
        let encoded = base58::checksum_encode(&payload);
        let decoded = base58::checksum_decode(&encoded).unwrap();
        prop_assert_eq!(decoded, payload);
    }

    #[test]
    fn txhash_hex_roundtrip(bytes in prop::array::uniform32(any::<u8>())) {
        let hash = TxHash::new(bytes);
        let hash2 = TxHash::from_hex(&hash.to_string()).unwrap();
        prop_assert_eq!(hash.as_bytes(), hash2.as_bytes());
    }

    #[test]
    fn varint_roundtrip(value in any::<u64>()) {
        let encoded = VarInt(value).to_bytes();
        let mut reader = WireReader::new(&encoded);
        prop_assert_eq!(reader.read_varint().unwrap().value(), value);
        prop_assert_eq!(reader.remaining(), 0);
    }
}
