use proptest::prelude::*;

use btc_script::Script;
use btc_transaction::{Transaction, TransactionInput, TransactionOutput};

/// Strategy to generate a structurally valid random transaction.
fn arb_transaction() -> impl Strategy<Value = Transaction> {
    let arb_input = (
        prop::array::uniform32(any::<u8>()),
        any::<u32>(),
        prop::collection::vec(any::<u8>(), 1..64),
        any::<u32>(),
    )
        .prop_map(|(hash, idx, script_bytes, seq)| {
            let mut input = TransactionInput::from_outpoint(hash, idx);
            input.unlocking_script = Some(Script::from_bytes(&script_bytes));
            input.sequence_number = seq;
            input
        });

    let arb_output = (any::<u64>(), prop::collection::vec(any::<u8>(), 0..64)).prop_map(
        |(satoshis, script_bytes)| TransactionOutput {
            satoshis,
            locking_script: Script::from_bytes(&script_bytes),
        },
    );

    (
        any::<u32>(),
        prop::collection::vec(arb_input, 1..4),
        prop::collection::vec(arb_output, 1..4),
        any::<u32>(),
    )
        .prop_map(|(version, inputs, outputs, locktime)| {
            let mut tx = Transaction::new();
            tx.version = version;
            tx.lock_time = locktime;
            for i in inputs {
                tx.add_input(i);
            }
            for o in outputs {
                tx.add_output(o);
            }
            tx
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn transaction_serialize_deserialize_roundtrip(tx in arb_transaction()) {
        let bytes = tx.to_bytes();
        let tx2 = Transaction::from_bytes(&bytes).unwrap();
        prop_assert_eq!(bytes, tx2.to_bytes());
    }

    #[test]
    fn txid_is_stable_across_reserialization(tx in arb_transaction()) {
        let tx2 = Transaction::from_bytes(&tx.to_bytes()).unwrap();
        prop_assert_eq!(tx.tx_id_hex(), tx2.tx_id_hex());
    }

    #[test]
    fn trailing_garbage_is_rejected(tx in arb_transaction(), extra in prop::collection::vec(any::<u8>(), 1..8)) {
        let mut bytes = tx.to_bytes();
        bytes.extend_from_slice(&extra);
        prop_assert!(Transaction::from_bytes(&bytes).is_err());
    }
}
