use proptest::prelude::*;

use btc_script::{Address, Network, Script};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn script_hex_roundtrip(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let script = Script::from_bytes(&data);
        let hex_str = script.to_hex();
        let script2 = Script::from_hex(&hex_str).unwrap();
        prop_assert_eq!(script.to_bytes(), script2.to_bytes());
    }

    #[test]
    fn push_data_prefix_matches_payload(data in prop::collection::vec(any::<u8>(), 0..600)) {
        let mut script = Script::new();
        script.append_push_data(&data).unwrap();
        let bytes = script.to_bytes();
        // The pushed payload always sits at the tail of the script.
        prop_assert_eq!(&bytes[bytes.len() - data.len()..], &data[..]);
    }

    #[test]
    fn address_decode_recovers_hash(hash in prop::array::uniform20(any::<u8>())) {
        for network in [Network::Mainnet, Network::Testnet] {
            let addr = Address::from_public_key_hash(&hash, network);
            let parsed = Address::from_string(&addr.address_string, network).unwrap();
            prop_assert_eq!(parsed.public_key_hash, hash);
        }
    }

    #[test]
    fn p2pkh_script_shape_is_recognized(hash in prop::array::uniform20(any::<u8>())) {
        use btc_script::opcodes::{OP_CHECKSIG, OP_DUP, OP_EQUALVERIFY, OP_HASH160};
        let mut script = Script::new();
        script.append_opcodes(&[OP_DUP, OP_HASH160]).unwrap();
        script.append_push_data(&hash).unwrap();
        script.append_opcodes(&[OP_EQUALVERIFY, OP_CHECKSIG]).unwrap();
        prop_assert!(script.is_p2pkh());
        prop_assert_eq!(script.len(), 25);
    }
}
