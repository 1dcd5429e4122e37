//! Single-pass SMILES tokenizer.

#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::constants::{
    is_standalone, Token, BRACKET_CLOSE, BRACKET_OPEN, BROMINE_CONTINUATION,
    CHLORINE_CONTINUATION, PERCENT_ESCAPE,
};
use crate::error::{Error, Result};

/// Split a SMILES string into its elements.
///
/// Elements are:
/// - Organic atoms `B C N O P S F I`, plus `Cl` and `Br`
/// - Aromatic atoms `b c n o p s`
/// - Bonds `. - = # $ : / \`
/// - Branches `(` and `)`
/// - Bracket atoms, kept opaque (`[Au]`, `[C@@H]`, `[Na+]`)
///
/// Ring closure digits (and the `%` of a two-digit closure) are appended to
/// the element before them, so `c1ccccc1` gives `c1 c c c c c1`.
/// Concatenating the elements always reproduces the input.
///
/// # Errors
/// [`Error::MalformedInput`] for a character no rule accepts at its position,
/// [`Error::UnterminatedBracket`] when a `[` is never closed.
pub fn split_smiles(smiles: &str) -> Result<Vec<Token>> {
    let mut elements: Vec<Token> = Vec::new();
    // Index of the last emitted element, target of ring digits and halogen continuations
    let mut last: Option<usize> = None;
    let mut bracket = Token::default();
    let mut in_bracket = false;

    let mut chars = smiles.chars().peekable();
    while let Some(c) = chars.next() {
        if is_standalone(c) && !in_bracket {
            elements.push([c].into_iter().collect());
            last = Some(elements.len() - 1);
        } else if c == BRACKET_OPEN {
            in_bracket = true;
            bracket.push(c);
        } else if c == BRACKET_CLOSE {
            bracket.push(c);
            elements.push(std::mem::take(&mut bracket));
            last = Some(elements.len() - 1);
            in_bracket = false;
        } else if in_bracket {
            bracket.push(c);
        } else if c.is_ascii_digit() {
            append_to_last(&mut elements, last, c, smiles)?;
        } else if c == PERCENT_ESCAPE && chars.peek().is_some_and(char::is_ascii_digit) {
            // Only the '%' here; the digits follow through the ring-digit rule
            append_to_last(&mut elements, last, c, smiles)?;
        } else if continues(&elements, last, c, BROMINE_CONTINUATION)
            || continues(&elements, last, c, CHLORINE_CONTINUATION)
        {
            append_to_last(&mut elements, last, c, smiles)?;
        } else {
            return Err(Error::malformed(c, smiles));
        }
    }

    if in_bracket {
        return Err(Error::UnterminatedBracket {
            smiles: smiles.to_string(),
        });
    }
    Ok(elements)
}

#[inline]
fn continues(elements: &[Token], last: Option<usize>, c: char, rule: (&str, char)) -> bool {
    let (symbol, letter) = rule;
    c == letter && last.is_some_and(|i| elements[i].as_str() == symbol)
}

#[inline]
fn append_to_last(
    elements: &mut [Token],
    last: Option<usize>,
    c: char,
    smiles: &str,
) -> Result<()> {
    match last {
        Some(i) => {
            elements[i].push(c);
            Ok(())
        }
        None => Err(Error::malformed(c, smiles)),
    }
}

/// Split a SMILES string into its elements (exposed to Python)
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "split_smiles")]
pub fn split_smiles_py(smiles: &str) -> PyResult<Vec<String>> {
    Ok(split_smiles(smiles)?
        .into_iter()
        .map(|s| s.to_string())
        .collect())
}
