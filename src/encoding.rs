//! Encoding and decoding methods for the SMILES encoder.

use rayon::prelude::*;

use crate::constants::OneHot;
use crate::error::{Error, Result};
use crate::tokenizer::split_smiles;
use crate::vocabulary::Vocabulary;

/// Encode a SMILES string into one one-hot vector per element.
///
/// Every element must already be in the vocabulary; there is no fallback
/// vector for unknown elements.
pub(crate) fn encode(smiles: &str, vocab: &Vocabulary) -> Result<Vec<OneHot>> {
    split_smiles(smiles)?
        .iter()
        .map(|element| vocab.vector(element).cloned())
        .collect()
}

/// Decode one-hot vectors back to a SMILES string.
///
/// Each vector is looked up by comparing it with every vocabulary entry.
pub(crate) fn decode(vectors: &[OneHot], vocab: &Vocabulary) -> Result<String> {
    let mut result = String::new();

    for vector in vectors {
        match vocab.find_vector(vector) {
            Some(element) => result.push_str(element),
            None => {
                return Err(Error::UnknownVector {
                    vector: vector.clone(),
                })
            }
        }
    }

    Ok(result)
}

/// Encode multiple SMILES strings in parallel using rayon.
///
/// Results keep the input order; the error reported is the one of the first
/// failing string by position.
pub(crate) fn batch_encode<S>(smiles_list: &[S], vocab: &Vocabulary) -> Result<Vec<Vec<OneHot>>>
where
    S: AsRef<str> + Sync,
{
    encode_each(smiles_list, vocab).into_iter().collect()
}

/// Decode multiple vector sequences in parallel, first failure by position wins.
pub(crate) fn batch_decode(encoded: &[Vec<OneHot>], vocab: &Vocabulary) -> Result<Vec<String>> {
    decode_each(encoded, vocab).into_iter().collect()
}

/// Encode every string, keeping each outcome.
pub(crate) fn encode_each<S>(smiles_list: &[S], vocab: &Vocabulary) -> Vec<Result<Vec<OneHot>>>
where
    S: AsRef<str> + Sync,
{
    let results: Vec<_> = smiles_list
        .par_iter()
        .map(|smi| encode(smi.as_ref(), vocab))
        .collect();

    log::debug!(
        "Encoded {} SMILES strings ({} failed)",
        results.len(),
        results.iter().filter(|r| r.is_err()).count()
    );
    results
}

/// Decode every vector sequence, keeping each outcome.
pub(crate) fn decode_each(encoded: &[Vec<OneHot>], vocab: &Vocabulary) -> Vec<Result<String>> {
    let results: Vec<_> = encoded
        .par_iter()
        .map(|vectors| decode(vectors, vocab))
        .collect();

    log::debug!(
        "Decoded {} SMILES strings ({} failed)",
        results.len(),
        results.iter().filter(|r| r.is_err()).count()
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_vocabulary() -> Vocabulary {
        // C=0, (=1, ==2, O=3, )=4, c1=5, c=6
        Vocabulary::build(["CC(=O)O", "c1ccccc1"]).unwrap()
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let vocab = Vocabulary::build(["CC", "CO"]).unwrap();

        let vectors = encode("CO", &vocab).unwrap();
        assert_eq!(vectors, vec![vec![1, 0], vec![0, 1]]);

        let decoded = decode(&vectors, &vocab).unwrap();
        assert_eq!(decoded, "CO");
    }

    #[test]
    fn test_encode_shape() {
        let vocab = setup_vocabulary();
        let vectors = encode("CC(=O)O", &vocab).unwrap();

        assert_eq!(vectors.len(), 7);
        assert!(vectors.iter().all(|v| v.len() == vocab.vocab_size()));
        assert_eq!(vectors[2], *vocab.vector("(").unwrap());
    }

    #[test]
    fn test_encode_empty_smiles() {
        let vocab = setup_vocabulary();
        assert!(encode("", &vocab).unwrap().is_empty());
        assert_eq!(decode(&[], &vocab).unwrap(), "");
    }

    #[test]
    fn test_encode_unknown_token() {
        let vocab = setup_vocabulary();

        let result = encode("CN", &vocab);
        assert_eq!(
            result,
            Err(Error::UnknownToken {
                token: "N".to_string()
            })
        );
    }

    #[test]
    fn test_encode_tokenizer_error() {
        let vocab = setup_vocabulary();
        assert!(matches!(
            encode("C?", &vocab),
            Err(Error::MalformedInput { character: '?', .. })
        ));
    }

    #[test]
    fn test_decode_unknown_vector() {
        let vocab = setup_vocabulary();
        let bogus = vec![1; vocab.vocab_size()];

        let result = decode(&[bogus.clone()], &vocab);
        assert_eq!(result, Err(Error::UnknownVector { vector: bogus }));
    }

    #[test]
    fn test_roundtrip_reconstructs_input() {
        let corpus = ["CC(=O)Oc1ccccc1C(=O)O", "BrC1CCC(Cl)CC1", "[Na+].[Cl-]", "C%10CC%10"];
        let vocab = Vocabulary::build(corpus).unwrap();

        for smiles in corpus {
            let vectors = encode(smiles, &vocab).unwrap();
            assert_eq!(decode(&vectors, &vocab).unwrap(), smiles);
        }
    }

    #[test]
    fn test_batch_encode_decode() {
        let vocab = setup_vocabulary();
        let smiles = vec!["CC(=O)O".to_string(), "c1ccccc1".to_string(), "".to_string()];

        let encoded = batch_encode(&smiles, &vocab).unwrap();
        assert_eq!(encoded.len(), 3);
        assert_eq!(encoded[0], encode("CC(=O)O", &vocab).unwrap());
        assert!(encoded[2].is_empty());

        let decoded = batch_decode(&encoded, &vocab).unwrap();
        assert_eq!(decoded, smiles);
    }

    #[test]
    fn test_batch_encode_reports_first_failure() {
        let vocab = setup_vocabulary();
        let smiles = ["CC", "CN", "C?", "CS"];

        let result = batch_encode(&smiles, &vocab);
        assert_eq!(
            result,
            Err(Error::UnknownToken {
                token: "N".to_string()
            })
        );
    }

    #[test]
    fn test_batch_decode_reports_first_failure() {
        let vocab = Vocabulary::build(["CO"]).unwrap();
        let encoded = vec![
            vec![vec![1, 0]],
            vec![vec![0, 0]],
            vec![vec![1, 1]],
        ];

        let result = batch_decode(&encoded, &vocab);
        assert_eq!(result, Err(Error::UnknownVector { vector: vec![0, 0] }));
    }

    #[test]
    fn test_encode_each_keeps_every_outcome() {
        let vocab = setup_vocabulary();
        let results = encode_each(&["CO", "CN", "C["], &vocab);

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(Error::UnknownToken { .. })));
        assert!(matches!(results[2], Err(Error::UnterminatedBracket { .. })));

        let decoded = decode_each(&[results[0].clone().unwrap(), vec![vec![9]]], &vocab);
        assert_eq!(decoded[0], Ok("CO".to_string()));
        assert!(decoded[1].is_err());
    }
}
