//! Error types for SMILES parsing.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SmilesError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SmilesError {
    #[error("empty SMILES string")]
    Empty,

    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),

    #[error("unknown element '{0}'")]
    UnknownElement(String),

    #[error("unclosed bracket atom")]
    UnclosedBracket,

    #[error("malformed bracket atom '[{0}]'")]
    MalformedBracket(String),

    #[error("unmatched ring closure {0}")]
    UnclosedRing(u8),

    #[error("conflicting bond orders on ring closure {0}")]
    RingBondMismatch(u8),

    #[error("ring closure {0} bonds an atom to itself")]
    RingSelfBond(u8),

    #[error("unmatched ')'")]
    UnmatchedBranchClose,

    #[error("unclosed branch")]
    UnclosedBranch,

    #[error("branch opened before any atom")]
    BranchWithoutAtom,

    #[error("bond with no following atom")]
    DanglingBond,
}
