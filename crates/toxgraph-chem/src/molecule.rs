//! Parsed molecules with perceived atom properties.

use serde::{Deserialize, Serialize};

use crate::elements::{atomic_number, default_valences};
use crate::error::{Result, SmilesError};
use crate::smiles::{parser::parse_tokens, scanner::scan};

/// Bond multiplicity as written in SMILES.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BondKind {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondKind {
    /// Contribution to an atom's explicit valence. Aromatic bonds count
    /// 1.5, matching the usual perception model for the organic subset.
    pub fn order(self) -> f32 {
        match self {
            BondKind::Single => 1.0,
            BondKind::Double => 2.0,
            BondKind::Triple => 3.0,
            BondKind::Aromatic => 1.5,
        }
    }
}

/// An atom with both written and perceived properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atom {
    pub atomic_num: u8,
    pub aromatic: bool,
    pub formal_charge: i8,
    pub isotope: Option<u16>,
    /// Hydrogens written inside a bracket atom. Bracket atoms get no
    /// implicit hydrogens on top of these.
    pub explicit_h: Option<u8>,
    /// Number of explicit neighbors.
    pub degree: u8,
    /// Implicit hydrogen count derived from default valences.
    pub implicit_h: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    pub a: usize,
    pub b: usize,
    pub kind: BondKind,
}

/// A molecule parsed from SMILES: atoms plus undirected bonds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl Molecule {
    /// Parse a SMILES string and perceive degrees and implicit hydrogens.
    pub fn parse(smiles: &str) -> Result<Self> {
        let parsed = parse_tokens(scan(smiles)?)?;

        let mut atoms = Vec::with_capacity(parsed.atoms.len());
        for spec in parsed.atoms {
            let atomic_num = atomic_number(&spec.symbol)
                .ok_or_else(|| SmilesError::UnknownElement(spec.symbol.clone()))?;
            atoms.push(Atom {
                atomic_num,
                aromatic: spec.aromatic,
                formal_charge: spec.charge,
                isotope: spec.isotope,
                explicit_h: spec.h_count,
                degree: 0,
                implicit_h: 0,
            });
        }

        let bonds: Vec<Bond> = parsed
            .bonds
            .into_iter()
            .map(|(a, b, kind)| Bond { a, b, kind })
            .collect();

        let mut mol = Self { atoms, bonds };
        mol.perceive();
        Ok(mol)
    }

    /// Fill in degree and implicit hydrogen count for every atom.
    fn perceive(&mut self) {
        let n = self.atoms.len();
        let mut degree = vec![0u8; n];
        let mut valence = vec![0f32; n];
        for bond in &self.bonds {
            degree[bond.a] += 1;
            degree[bond.b] += 1;
            valence[bond.a] += bond.kind.order();
            valence[bond.b] += bond.kind.order();
        }

        for (i, atom) in self.atoms.iter_mut().enumerate() {
            atom.degree = degree[i];
            atom.implicit_h = match atom.explicit_h {
                // Bracket atoms carry their hydrogens explicitly.
                Some(_) => 0,
                None => {
                    let explicit = valence[i].ceil() as u8;
                    default_valences(atom.atomic_num)
                        .iter()
                        .find(|&&v| v >= explicit)
                        .map_or(0, |&v| v - explicit)
                }
            };
        }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn num_atoms(&self) -> usize {
        self.atoms.len()
    }

    pub fn num_bonds(&self) -> usize {
        self.bonds.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ethanol_perception() {
        let mol = Molecule::parse("CCO").unwrap();
        assert_eq!(mol.num_atoms(), 3);
        assert_eq!(mol.num_bonds(), 2);

        let c0 = &mol.atoms()[0];
        assert_eq!((c0.atomic_num, c0.degree, c0.implicit_h), (6, 1, 3));
        let o = &mol.atoms()[2];
        assert_eq!((o.atomic_num, o.degree, o.implicit_h), (8, 1, 1));
    }

    #[test]
    fn benzene_perception() {
        let mol = Molecule::parse("c1ccccc1").unwrap();
        for atom in mol.atoms() {
            assert!(atom.aromatic);
            assert_eq!(atom.degree, 2);
            // two aromatic bonds -> explicit valence 3 -> one implicit H
            assert_eq!(atom.implicit_h, 1);
        }
    }

    #[test]
    fn substituted_aromatic_carbon_has_no_implicit_h() {
        let mol = Molecule::parse("c1ccccc1C").unwrap(); // toluene
        let ipso = &mol.atoms()[5];
        assert_eq!(ipso.degree, 3);
        assert_eq!(ipso.implicit_h, 0);
    }

    #[test]
    fn pyridine_nitrogen() {
        let mol = Molecule::parse("c1ccncc1").unwrap();
        let n = mol.atoms().iter().find(|a| a.atomic_num == 7).unwrap();
        assert_eq!(n.implicit_h, 0);
    }

    #[test]
    fn pyrrole_nitrogen_is_bracketed() {
        let mol = Molecule::parse("c1cc[nH]c1").unwrap();
        let n = mol.atoms().iter().find(|a| a.atomic_num == 7).unwrap();
        assert_eq!(n.explicit_h, Some(1));
        assert_eq!(n.implicit_h, 0);
        assert!(n.aromatic);
    }

    #[test]
    fn triple_bond_valence() {
        let mol = Molecule::parse("C#N").unwrap(); // hydrogen cyanide
        assert_eq!(mol.atoms()[0].implicit_h, 1);
        assert_eq!(mol.atoms()[1].implicit_h, 0);
    }

    #[test]
    fn charged_bracket_atoms() {
        let mol = Molecule::parse("C[N+](=O)[O-]").unwrap(); // nitromethane
        let n = &mol.atoms()[1];
        assert_eq!(n.formal_charge, 1);
        assert_eq!(n.degree, 3);
        assert_eq!(n.implicit_h, 0);
        let o_minus = &mol.atoms()[3];
        assert_eq!(o_minus.formal_charge, -1);
    }

    #[test]
    fn hypervalent_sulfur() {
        let mol = Molecule::parse("CS(=O)(=O)C").unwrap(); // dimethyl sulfone
        let s = &mol.atoms()[1];
        assert_eq!(s.degree, 4);
        // explicit valence 6 matches sulfur's highest default valence
        assert_eq!(s.implicit_h, 0);
    }

    #[test]
    fn isotope_recorded() {
        let mol = Molecule::parse("[13C]").unwrap();
        assert_eq!(mol.atoms()[0].isotope, Some(13));
        assert_eq!(mol.atoms()[0].atomic_num, 6);
    }

    #[test]
    fn unknown_element_rejected() {
        assert_eq!(
            Molecule::parse("[Xx]").unwrap_err(),
            SmilesError::UnknownElement("Xx".to_string())
        );
    }
}
