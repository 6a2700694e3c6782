use hill_crypto::errors::HillCryptoError;
use hill_crypto::preset::reference::{REFERENCE_CIPHERTEXT, REFERENCE_MODULUS, reference_key};
use hill_crypto::ring::matrix_ops::{identity_matrix, matrix_mul};
use hill_crypto::{Alphabet, HillConfig, HillKey, Ring};

const REFERENCE_PLAINTEXT: &str = "i have told you these things so that in me you may have peace. \
in this world you will have trouble but take heart, i have overcome the world";

#[test]
fn reference_ciphertext_decrypts() -> Result<(), HillCryptoError> {
    let ring = Ring::try_prime(REFERENCE_MODULUS)?;
    let key = HillKey::try_with(reference_key(), ring)?;
    let alphabet = Alphabet::default();

    let plaintext = key.decrypt(REFERENCE_CIPHERTEXT, &alphabet)?;

    assert_eq!(plaintext, REFERENCE_PLAINTEXT);
    assert_eq!(plaintext.chars().count(), REFERENCE_CIPHERTEXT.chars().count());
    Ok(())
}

#[test]
fn reference_key_inverse_is_exact() -> Result<(), HillCryptoError> {
    let ring = Ring::try_prime(REFERENCE_MODULUS)?;
    let key = HillKey::try_with(reference_key(), ring)?;

    assert_eq!(matrix_mul(key.matrix(), key.inverse(), &ring)?, identity_matrix(10));
    assert_eq!(matrix_mul(key.inverse(), key.matrix(), &ring)?, identity_matrix(10));
    assert_ne!(key.determinant()?, 0);
    Ok(())
}

#[test]
fn reference_plaintext_encrypts_back() -> Result<(), HillCryptoError> {
    let (key, alphabet) = HillConfig::default().build()?;

    assert_eq!(key.encrypt(REFERENCE_PLAINTEXT, &alphabet)?, REFERENCE_CIPHERTEXT);
    Ok(())
}

#[test]
fn first_block_matches_hand_computation() -> Result<(), HillCryptoError> {
    let (key, alphabet) = HillConfig::default().build()?;

    // "i have told you" padded with spaces to two blocks of ten
    let cipher = key.encrypt_padded("i have told you", &alphabet, ' ')?;
    assert_eq!(cipher, "rhb zptudgth,qsodudk");
    Ok(())
}

#[test]
fn truncated_ciphertext_is_rejected() -> Result<(), HillCryptoError> {
    let (key, alphabet) = HillConfig::default().build()?;
    let truncated: String = REFERENCE_CIPHERTEXT.chars().take(137).collect();

    match key.decrypt(&truncated, &alphabet) {
        Err(HillCryptoError::MisalignedInput { length, block_size }) => {
            assert_eq!(length, 137);
            assert_eq!(block_size, 10);
        }
        other => panic!("expected MisalignedInput, got {:?}", other),
    }
    Ok(())
}

#[test]
fn unsupported_characters_are_rejected() -> Result<(), HillCryptoError> {
    let (key, alphabet) = HillConfig::default().build()?;

    let result = key.decrypt("Rhb zptudg", &alphabet);
    assert!(matches!(
        result,
        Err(HillCryptoError::UnknownSymbol {
            symbol: 'R',
            position: 0
        })
    ));

    let err = key.decrypt("rhb zptud!", &alphabet).unwrap_err();
    assert!(err.to_string().contains("'!'"));
    Ok(())
}

#[test]
fn concrete_two_by_two_scenario() -> Result<(), HillCryptoError> {
    let ring = Ring::try_prime(29)?;
    let key = HillKey::try_with(vec![vec![1, 2], vec![3, 5]], ring)?;

    assert_eq!(matrix_mul(key.matrix(), key.inverse(), &ring)?, identity_matrix(2));

    // [4*1 + 7*3, 4*2 + 7*5] mod 29
    let cipher = key.encode_numbers(&[4, 7])?;
    assert_eq!(cipher, vec![25, 43 % 29]);
    assert_eq!(key.decode_numbers(&cipher)?, vec![4, 7]);
    Ok(())
}
