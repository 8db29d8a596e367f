use proptest::prelude::*;

use btc_primitives::chainhash::TxHash;
use btc_primitives::ec::PrivateKey;
use btc_script::{Address, Network};
use btc_wallet::assembler::{assemble, Outpoint};

fn arb_outpoint() -> impl Strategy<Value = Outpoint> {
    (prop::array::uniform32(any::<u8>()), any::<u32>())
        .prop_map(|(bytes, vout)| Outpoint { txid: TxHash::new(bytes), vout })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn assembled_transaction_spends_every_outpoint(
        outpoints in prop::collection::vec(arb_outpoint(), 1..8),
        hash in prop::array::uniform20(any::<u8>()),
        amount in 1u64..21_000_000 * 100_000_000,
    ) {
        let recipient = Address::from_public_key_hash(&hash, Network::Testnet);
        let tx = assemble(&outpoints, &recipient, amount).unwrap();

        prop_assert_eq!(tx.input_count(), outpoints.len());
        for (input, outpoint) in tx.inputs.iter().zip(&outpoints) {
            prop_assert_eq!(&input.source_txid, outpoint.txid.as_bytes());
            prop_assert_eq!(input.source_tx_out_index, outpoint.vout);
        }
        prop_assert_eq!(tx.output_count(), 1);
        prop_assert_eq!(tx.outputs[0].satoshis, amount);
        prop_assert!(tx.outputs[0].locking_script.is_p2pkh());
    }

    #[test]
    fn key_roundtrips_through_wif_for_any_network(
        seed in prop::array::uniform32(any::<u8>()),
    ) {
        if let Ok(key) = PrivateKey::from_bytes(&seed) {
            for network in [Network::Mainnet, Network::Testnet, Network::Regtest] {
                let wif = key.to_wif(network.wif_prefix());
                let decoded = PrivateKey::from_wif(&wif).unwrap();
                prop_assert_eq!(&decoded, &key);
            }
        }
    }
}
