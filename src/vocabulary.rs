//! Vocabulary construction and query methods.

use ahash::AHashMap;

use crate::constants::{OneHot, Token};
use crate::error::{Error, Result};
use crate::tokenizer::split_smiles;

/// One-hot dictionary of SMILES elements.
///
/// Built once from a corpus and immutable afterwards. An element's index is
/// the order in which it was first seen across the corpus, and its vector has
/// a single 1 at that index.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// Maps element strings to their index
    element_to_id: AHashMap<Token, usize>,
    /// Elements with their one-hot vectors, in index order
    entries: Vec<(Token, OneHot)>,
}

impl Vocabulary {
    /// Build a vocabulary from SMILES strings.
    ///
    /// Strings are split in the given order and elements are numbered by first
    /// appearance. Fails on the first string the tokenizer rejects.
    pub fn build<I, S>(corpus: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut element_to_id: AHashMap<Token, usize> = AHashMap::new();
        let mut unique: Vec<Token> = Vec::new();
        let mut n_strings = 0usize;

        for smiles in corpus {
            for element in split_smiles(smiles.as_ref())? {
                if element_to_id.contains_key(&element) {
                    continue;
                }
                log::debug!("New element {} at index {}", element, unique.len());
                element_to_id.insert(element.clone(), unique.len());
                unique.push(element);
            }
            n_strings += 1;
        }

        let n_elements = unique.len();
        let entries = unique
            .into_iter()
            .enumerate()
            .map(|(id, element)| {
                let mut vector = vec![0; n_elements];
                vector[id] = 1;
                (element, vector)
            })
            .collect();

        log::info!(
            "Built vocabulary: {} unique elements from {} SMILES strings",
            n_elements,
            n_strings
        );

        Ok(Self {
            element_to_id,
            entries,
        })
    }

    /// Number of unique elements, which is also the length of every vector
    pub fn vocab_size(&self) -> usize {
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.element_to_id.contains_key(token)
    }

    /// Elements in index order
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(element, _)| element.as_str())
    }

    /// Elements with their vectors, in index order
    pub fn entries(&self) -> &[(Token, OneHot)] {
        &self.entries
    }

    /// Return the vocabulary as a list of (token, index) tuples in index order.
    pub fn get_vocabulary(&self) -> Vec<(String, usize)> {
        self.tokens()
            .enumerate()
            .map(|(id, token)| (token.to_string(), id))
            .collect()
    }

    /// Get the index of a token.
    pub fn token_to_id(&self, token: &str) -> Result<usize> {
        self.element_to_id
            .get(token)
            .copied()
            .ok_or_else(|| Error::UnknownToken {
                token: token.to_string(),
            })
    }

    /// Get the token at an index.
    pub fn id_to_token(&self, id: usize) -> Option<&str> {
        self.entries.get(id).map(|(element, _)| element.as_str())
    }

    /// One-hot vector of a token.
    pub fn vector(&self, token: &str) -> Result<&OneHot> {
        let id = self.token_to_id(token)?;
        Ok(&self.entries[id].1)
    }

    /// Token whose vector equals `vector`.
    ///
    /// This compares against every entry in turn rather than reading the
    /// position of the 1, so a vector of the wrong length or with more than
    /// one bit set never matches.
    pub fn find_vector(&self, vector: &[u32]) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, candidate)| candidate.as_slice() == vector)
            .map(|(element, _)| element.as_str())
    }
}
