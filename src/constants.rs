//! Character classes and type aliases for the SMILES tokenizer.

use compact_str::CompactString;

/// Organic-subset atoms written without brackets.
/// `Cl` and `Br` are formed by continuation, see [`CHLORINE_CONTINUATION`]
/// and [`BROMINE_CONTINUATION`].
pub const ORGANIC_SUBSET: [char; 8] = ['B', 'C', 'N', 'O', 'P', 'S', 'F', 'I'];

/// Aromatic organic-subset atoms
pub const ORGANIC_AROMATIC: [char; 6] = ['b', 'c', 'n', 'o', 'p', 's'];

/// Bond symbols, including the disconnection `.` and the directional slashes
pub const BONDS: [char; 8] = ['.', '-', '=', '#', '$', ':', '/', '\\'];

/// Branch open / close
pub const BRANCHES: [char; 2] = ['(', ')'];

pub const BRACKET_OPEN: char = '[';
pub const BRACKET_CLOSE: char = ']';

/// Prefix of a two-digit ring closure (`%12`)
pub const PERCENT_ESCAPE: char = '%';

/// `B` followed by `r` reads as bromine
pub const BROMINE_CONTINUATION: (&str, char) = ("B", 'r');

/// `C` followed by `l` reads as chlorine
pub const CHLORINE_CONTINUATION: (&str, char) = ("C", 'l');

/// One syntactic unit of a SMILES string
pub type Token = CompactString;

/// One-hot vector identifying a vocabulary entry
pub type OneHot = Vec<u32>;

/// True for characters that always start a token of their own outside brackets.
#[inline]
pub(crate) fn is_standalone(c: char) -> bool {
    ORGANIC_SUBSET.contains(&c)
        || ORGANIC_AROMATIC.contains(&c)
        || BONDS.contains(&c)
        || BRANCHES.contains(&c)
}
