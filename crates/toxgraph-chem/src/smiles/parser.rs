use std::collections::HashMap;

use crate::error::{Result, SmilesError};
use crate::molecule::BondKind;
use crate::smiles::scanner::{AtomSpec, Token};

/// Raw connectivity out of the parser: atoms as written plus undirected
/// bonds between atom indices.
#[derive(Debug)]
pub(crate) struct ParsedMolecule {
    pub atoms: Vec<AtomSpec>,
    pub bonds: Vec<(usize, usize, BondKind)>,
}

/// Thread connectivity through a token stream.
///
/// Tracks the previous atom for chain bonds, a stack of branch points, and
/// the set of open ring closures. A `.` breaks the chain for disconnected
/// components (salts).
pub(crate) fn parse_tokens(tokens: Vec<Token>) -> Result<ParsedMolecule> {
    let mut atoms: Vec<AtomSpec> = Vec::new();
    let mut bonds: Vec<(usize, usize, BondKind)> = Vec::new();
    let mut prev: Option<usize> = None;
    let mut branch_stack: Vec<Option<usize>> = Vec::new();
    let mut pending_bond: Option<BondKind> = None;
    // ring id -> (opening atom, bond kind written at the opening side)
    let mut open_rings: HashMap<u8, (usize, Option<BondKind>)> = HashMap::new();

    for token in tokens {
        match token {
            Token::Atom(spec) => {
                let idx = atoms.len();
                let aromatic = spec.aromatic;
                atoms.push(spec);
                if let Some(p) = prev {
                    let kind = resolve_bond(pending_bond.take(), atoms[p].aromatic && aromatic);
                    bonds.push((p, idx, kind));
                }
                prev = Some(idx);
            }
            Token::Bond(kind) => {
                if pending_bond.is_some() {
                    return Err(SmilesError::DanglingBond);
                }
                pending_bond = Some(kind);
            }
            Token::Ring(id) => {
                let here = prev.ok_or(SmilesError::DanglingBond)?;
                match open_rings.remove(&id) {
                    None => {
                        open_rings.insert(id, (here, pending_bond.take()));
                    }
                    Some((there, opened_kind)) => {
                        if there == here {
                            return Err(SmilesError::RingSelfBond(id));
                        }
                        let closed_kind = pending_bond.take();
                        let kind = match (opened_kind, closed_kind) {
                            (Some(a), Some(b)) if a != b => {
                                return Err(SmilesError::RingBondMismatch(id))
                            }
                            (Some(k), _) | (_, Some(k)) => k,
                            (None, None) => resolve_bond(
                                None,
                                atoms[there].aromatic && atoms[here].aromatic,
                            ),
                        };
                        bonds.push((there, here, kind));
                    }
                }
            }
            Token::OpenBranch => {
                if prev.is_none() {
                    return Err(SmilesError::BranchWithoutAtom);
                }
                branch_stack.push(prev);
            }
            Token::CloseBranch => {
                if pending_bond.is_some() {
                    return Err(SmilesError::DanglingBond);
                }
                prev = branch_stack
                    .pop()
                    .ok_or(SmilesError::UnmatchedBranchClose)?;
            }
            Token::Dot => {
                if pending_bond.is_some() {
                    return Err(SmilesError::DanglingBond);
                }
                prev = None;
            }
        }
    }

    if pending_bond.is_some() {
        return Err(SmilesError::DanglingBond);
    }
    if !branch_stack.is_empty() {
        return Err(SmilesError::UnclosedBranch);
    }
    if let Some(&id) = open_rings.keys().next() {
        return Err(SmilesError::UnclosedRing(id));
    }
    if atoms.is_empty() {
        return Err(SmilesError::Empty);
    }

    Ok(ParsedMolecule { atoms, bonds })
}

fn resolve_bond(explicit: Option<BondKind>, both_aromatic: bool) -> BondKind {
    match explicit {
        Some(kind) => kind,
        None if both_aromatic => BondKind::Aromatic,
        None => BondKind::Single,
    }
}
