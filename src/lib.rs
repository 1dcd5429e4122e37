//! One-hot encoding for simple molecular-input line-entry system (SMILES) strings.
//!
//! A SMILES string is split into elements (atoms, bonds, branches, bracket
//! atoms, with ring closure digits attached to the element before them) by
//! [`split_smiles`]. A [`SmilesEncoder`] built from a corpus gives every unique
//! element a one-hot vector and converts strings to and from those vectors.

pub mod constants;
mod encoding;
pub mod error;
pub mod tokenizer;
pub mod vocabulary;

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::PyDict;

pub use constants::{OneHot, Token};
pub use error::{Error, Result};
pub use tokenizer::split_smiles;
pub use vocabulary::Vocabulary;

/// One-hot encoder for SMILES strings.
///
/// The vocabulary is built from the strings given at construction and cannot
/// grow afterwards; encoding an element it has never seen is an error.
/// All methods take `&self`, so one encoder can be shared between threads.
#[cfg_attr(feature = "python", pyclass(module = "smiles_encoder", frozen))]
#[derive(Clone, Debug)]
pub struct SmilesEncoder {
    vocabulary: Vocabulary,
}

impl SmilesEncoder {
    /// Build an encoder whose vocabulary holds every element of `smiles_strings`.
    pub fn new<I, S>(smiles_strings: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            vocabulary: Vocabulary::build(smiles_strings)?,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of unique elements, i.e. the length of every vector
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.vocab_size()
    }

    /// Encode a SMILES string, shape `[n_elements, vocab_size]`.
    pub fn encode(&self, smiles: &str) -> Result<Vec<OneHot>> {
        encoding::encode(smiles, &self.vocabulary)
    }

    /// Encode several SMILES strings, shape `[n_strings, n_elements, vocab_size]`.
    ///
    /// Stops at the first string (by position) that fails.
    pub fn encode_many<S>(&self, smiles_strings: &[S]) -> Result<Vec<Vec<OneHot>>>
    where
        S: AsRef<str> + Sync,
    {
        encoding::batch_encode(smiles_strings, &self.vocabulary)
    }

    /// Like [`encode_many`](Self::encode_many), but returns the outcome of
    /// every string instead of stopping at the first failure.
    pub fn encode_each<S>(&self, smiles_strings: &[S]) -> Vec<Result<Vec<OneHot>>>
    where
        S: AsRef<str> + Sync,
    {
        encoding::encode_each(smiles_strings, &self.vocabulary)
    }

    /// Decode one-hot vectors back to a SMILES string.
    pub fn decode(&self, encoded: &[OneHot]) -> Result<String> {
        encoding::decode(encoded, &self.vocabulary)
    }

    /// Decode several encoded strings, stopping at the first failure.
    pub fn decode_many(&self, encoded: &[Vec<OneHot>]) -> Result<Vec<String>> {
        encoding::batch_decode(encoded, &self.vocabulary)
    }

    /// Like [`decode_many`](Self::decode_many), keeping every outcome.
    pub fn decode_each(&self, encoded: &[Vec<OneHot>]) -> Vec<Result<String>> {
        encoding::decode_each(encoded, &self.vocabulary)
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl SmilesEncoder {
    /// Create a SmilesEncoder from a list of SMILES strings
    #[new]
    #[pyo3(signature = (smiles_strings))]
    fn py_new(smiles_strings: Vec<String>) -> PyResult<Self> {
        Ok(Self::new(smiles_strings)?)
    }

    /// Number of unique SMILES elements
    #[getter(vocab_size)]
    fn py_vocab_size(&self) -> usize {
        self.vocab_size()
    }

    /// Dictionary of SMILES elements to one-hot vectors, in index order
    #[getter]
    fn element_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        for (element, vector) in self.vocabulary.entries() {
            dict.set_item(element.as_str(), vector.clone())?;
        }
        Ok(dict)
    }

    /// Return the vocabulary as a list of (token, index) tuples
    #[pyo3(name = "get_vocabulary")]
    fn py_get_vocabulary(&self) -> Vec<(String, usize)> {
        self.vocabulary.get_vocabulary()
    }

    /// Encode a SMILES string into a list of one-hot vectors
    #[pyo3(name = "encode", signature = (smiles_str))]
    fn py_encode(&self, smiles_str: &str) -> PyResult<Vec<OneHot>> {
        Ok(self.encode(smiles_str)?)
    }

    /// Encode multiple SMILES strings in parallel
    #[pyo3(name = "encode_many", signature = (smiles_strings))]
    fn py_encode_many(
        &self,
        py: Python<'_>,
        smiles_strings: Vec<String>,
    ) -> PyResult<Vec<Vec<OneHot>>> {
        Ok(py.detach(|| self.encode_many(&smiles_strings))?)
    }

    /// Decode a list of one-hot vectors into a SMILES string
    #[pyo3(name = "decode", signature = (encoded_smiles))]
    fn py_decode(&self, encoded_smiles: Vec<OneHot>) -> PyResult<String> {
        Ok(self.decode(&encoded_smiles)?)
    }

    /// Decode multiple encoded SMILES strings in parallel
    #[pyo3(name = "decode_many", signature = (encoded_smiles))]
    fn py_decode_many(
        &self,
        py: Python<'_>,
        encoded_smiles: Vec<Vec<OneHot>>,
    ) -> PyResult<Vec<String>> {
        Ok(py.detach(|| self.decode_many(&encoded_smiles))?)
    }

    fn __len__(&self) -> usize {
        self.vocab_size()
    }

    fn __repr__(&self) -> String {
        format!("SmilesEncoder(vocab_size={})", self.vocab_size())
    }
}

/// One-hot encoding for SMILES strings with Python bindings
#[cfg(feature = "python")]
#[pymodule]
fn smiles_encoder(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_class::<SmilesEncoder>()?;
    m.add_function(wrap_pyfunction!(tokenizer::split_smiles_py, m)?)?;
    Ok(())
}

// ============================================================================
// RUST TESTS
// ============================================================================
