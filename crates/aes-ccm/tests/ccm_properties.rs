//! Property-based tests for the CTR, CBC-MAC and CCM layers.

use aes_ccm::{apply_keystream, cbc_mac, pad_to_block, Ccm, Error, TAG_LEN};
use aes_core::{decrypt_block, expand_key, inv_mix_column, mix_column, Aes128Key};
use proptest::prelude::*;

/// Generate data that's a multiple of 16 bytes (AES block size)
fn block_aligned_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<[u8; 16]>(), 0..=8).prop_map(|blocks| blocks.concat())
}

proptest! {
    #[test]
    fn block_cipher_round_trip(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let rks = expand_key(&Aes128Key::from(key));
        let ct = aes_core::encrypt_block(&block, &rks);
        prop_assert_eq!(decrypt_block(&ct, &rks), block);
    }

    #[test]
    fn key_schedule_is_deterministic(key in any::<[u8; 16]>()) {
        let key = Aes128Key::from(key);
        prop_assert_eq!(expand_key(&key), expand_key(&key));
        let rks = expand_key(&key);
        prop_assert_eq!(rks.get(0), &key.0);
    }

    #[test]
    fn mix_columns_inverse_law(column in any::<[u8; 4]>()) {
        prop_assert_eq!(inv_mix_column(mix_column(column)), column);
        prop_assert_eq!(mix_column(inv_mix_column(column)), column);
    }

    #[test]
    fn ctr_is_an_involution(
        key in any::<[u8; 16]>(),
        counter in any::<u64>(),
        message in prop::collection::vec(any::<u8>(), 0..=200)
    ) {
        let rks = expand_key(&Aes128Key::from(key));
        let once = apply_keystream(&message, &rks, counter);
        prop_assert_eq!(apply_keystream(&once, &rks, counter), pad_to_block(&message));
    }

    #[test]
    fn cbc_mac_accepts_aligned_input(key in any::<[u8; 16]>(), data in block_aligned_data()) {
        let rks = expand_key(&Aes128Key::from(key));
        prop_assert_eq!(cbc_mac(&data, &rks).unwrap(), cbc_mac(&data, &rks).unwrap());
    }

    #[test]
    fn ccm_round_trip(
        key in any::<[u8; 16]>(),
        counter in any::<u64>(),
        message in prop::collection::vec(any::<u8>(), 0..=200)
    ) {
        let ccm = Ccm::new(&Aes128Key::from(key));
        let sealed = ccm.seal(&message, counter);
        prop_assert_eq!(ccm.open(&sealed, counter).unwrap(), pad_to_block(&message));

        let envelope = ccm.seal_envelope(&message, counter);
        prop_assert_eq!(ccm.open_envelope(&envelope).unwrap(), message);
    }

    #[test]
    fn ccm_detects_any_single_bit_flip(
        key in any::<[u8; 16]>(),
        counter in any::<u64>(),
        message in prop::collection::vec(any::<u8>(), 0..=96),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let ccm = Ccm::new(&Aes128Key::from(key));
        let mut sealed = ccm.seal(&message, counter);
        let idx = position.index(sealed.len());
        sealed[idx] ^= 1 << bit;
        prop_assert!(matches!(ccm.open(&sealed, counter), Err(Error::TamperedCiphertext)));
    }

    #[test]
    fn sealed_length_is_padded_plus_tag(message in prop::collection::vec(any::<u8>(), 0..=100)) {
        let ccm = Ccm::new(&Aes128Key::from([0u8; 16]));
        prop_assert_eq!(ccm.seal(&message, 0).len(), pad_to_block(&message).len() + TAG_LEN);
    }
}
