use crate::error::{Result, SmilesError};
use crate::molecule::BondKind;

/// One atom as written, before connectivity or perception.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct AtomSpec {
    /// Canonical-case element symbol, e.g. "N", "Cl".
    pub symbol: String,
    pub aromatic: bool,
    pub isotope: Option<u16>,
    /// Explicit hydrogen count; `Some` only for bracket atoms.
    pub h_count: Option<u8>,
    pub charge: i8,
}

impl AtomSpec {
    fn organic(symbol: &str, aromatic: bool) -> Self {
        Self {
            symbol: symbol.to_string(),
            aromatic,
            isotope: None,
            h_count: None,
            charge: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Token {
    Atom(AtomSpec),
    Bond(BondKind),
    Ring(u8),
    OpenBranch,
    CloseBranch,
    Dot,
}

/// Scan a SMILES string into tokens.
pub(crate) fn scan(s: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = s.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let token = match c {
            '(' => Token::OpenBranch,
            ')' => Token::CloseBranch,
            '.' => Token::Dot,
            '-' => Token::Bond(BondKind::Single),
            '=' => Token::Bond(BondKind::Double),
            '#' => Token::Bond(BondKind::Triple),
            ':' => Token::Bond(BondKind::Aromatic),
            // Directional bonds mark double-bond geometry; connectivity-wise
            // they are single bonds and the atom features ignore stereo.
            '/' | '\\' => Token::Bond(BondKind::Single),
            '0'..='9' => Token::Ring(c as u8 - b'0'),
            '%' => {
                let d1 = chars.get(i + 1).copied().filter(char::is_ascii_digit);
                let d2 = chars.get(i + 2).copied().filter(char::is_ascii_digit);
                match (d1, d2) {
                    (Some(a), Some(b)) => {
                        i += 2;
                        Token::Ring((a as u8 - b'0') * 10 + (b as u8 - b'0'))
                    }
                    _ => return Err(SmilesError::UnexpectedChar('%', i)),
                }
            }
            '[' => {
                let close = chars[i + 1..]
                    .iter()
                    .position(|&c| c == ']')
                    .ok_or(SmilesError::UnclosedBracket)?;
                let content: String = chars[i + 1..i + 1 + close].iter().collect();
                i += close + 1;
                Token::Atom(scan_bracket(&content)?)
            }
            'C' if chars.get(i + 1) == Some(&'l') => {
                i += 1;
                Token::Atom(AtomSpec::organic("Cl", false))
            }
            'B' if chars.get(i + 1) == Some(&'r') => {
                i += 1;
                Token::Atom(AtomSpec::organic("Br", false))
            }
            'B' | 'C' | 'N' | 'O' | 'P' | 'S' | 'F' | 'I' => {
                Token::Atom(AtomSpec::organic(&c.to_string(), false))
            }
            'b' | 'c' | 'n' | 'o' | 'p' | 's' => {
                Token::Atom(AtomSpec::organic(&c.to_uppercase().to_string(), true))
            }
            _ => return Err(SmilesError::UnexpectedChar(c, i)),
        };
        tokens.push(token);
        i += 1;
    }

    Ok(tokens)
}

/// Parse the inside of a bracket atom:
/// `isotope? symbol chirality? hcount? charge? class?`
fn scan_bracket(content: &str) -> Result<AtomSpec> {
    let malformed = || SmilesError::MalformedBracket(content.to_string());
    let chars: Vec<char> = content.chars().collect();
    let mut i = 0;

    let isotope = take_digits(&chars, &mut i);
    let isotope = match isotope {
        Some(digits) => Some(digits.parse::<u16>().map_err(|_| malformed())?),
        None => None,
    };

    // Element symbol. Aromatic symbols are lowercase; two-letter aromatic
    // symbols (se, as) exist for selenophenes and arsoles.
    let (symbol, aromatic) = match chars.get(i) {
        Some('s') if chars.get(i + 1) == Some(&'e') => {
            i += 2;
            ("Se".to_string(), true)
        }
        Some('a') if chars.get(i + 1) == Some(&'s') => {
            i += 2;
            ("As".to_string(), true)
        }
        Some(c @ ('b' | 'c' | 'n' | 'o' | 'p' | 's')) => {
            let sym = c.to_uppercase().to_string();
            i += 1;
            (sym, true)
        }
        Some(c) if c.is_ascii_uppercase() => {
            // Two-letter symbols are one uppercase plus one lowercase letter;
            // whether the symbol names a real element is checked downstream.
            let mut sym = c.to_string();
            if let Some(low) = chars.get(i + 1).filter(|c| c.is_ascii_lowercase()) {
                sym.push(*low);
                i += 1;
            }
            i += 1;
            (sym, false)
        }
        Some('*') => return Err(SmilesError::UnknownElement("*".to_string())),
        _ => return Err(malformed()),
    };

    // Chirality markers carry no weight in the atom features; consume them.
    while chars.get(i) == Some(&'@') {
        i += 1;
    }

    let mut h_count = 0u8;
    if chars.get(i) == Some(&'H') {
        i += 1;
        h_count = match take_digits(&chars, &mut i) {
            Some(digits) => digits.parse().map_err(|_| malformed())?,
            None => 1,
        };
    }

    let mut charge = 0i8;
    match chars.get(i) {
        Some(sign @ ('+' | '-')) => {
            let unit: i8 = if *sign == '+' { 1 } else { -1 };
            i += 1;
            if let Some(digits) = take_digits(&chars, &mut i) {
                charge = unit * digits.parse::<i8>().map_err(|_| malformed())?;
            } else {
                charge = unit;
                // "++" / "--" style repeats
                while chars.get(i) == Some(sign) {
                    charge += unit;
                    i += 1;
                }
            }
        }
        _ => {}
    }

    // Atom-map class: parsed so reaction-annotated input survives, ignored.
    if chars.get(i) == Some(&':') {
        i += 1;
        take_digits(&chars, &mut i).ok_or_else(malformed)?;
    }

    if i != chars.len() {
        return Err(malformed());
    }

    Ok(AtomSpec {
        symbol,
        aromatic,
        isotope,
        h_count: Some(h_count),
        charge,
    })
}

fn take_digits(chars: &[char], i: &mut usize) -> Option<String> {
    let start = *i;
    while chars.get(*i).is_some_and(char::is_ascii_digit) {
        *i += 1;
    }
    (*i > start).then(|| chars[start..*i].iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_chain() {
        let tokens = scan("CCO").unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(matches!(&tokens[2], Token::Atom(a) if a.symbol == "O"));
    }

    #[test]
    fn two_letter_organic_atoms() {
        let tokens = scan("ClCBr").unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(matches!(&tokens[0], Token::Atom(a) if a.symbol == "Cl"));
        assert!(matches!(&tokens[2], Token::Atom(a) if a.symbol == "Br"));
    }

    #[test]
    fn aromatic_atoms_lowercase() {
        let tokens = scan("c1ccccc1").unwrap();
        let aromatic = tokens
            .iter()
            .filter(|t| matches!(t, Token::Atom(a) if a.aromatic))
            .count();
        assert_eq!(aromatic, 6);
    }

    #[test]
    fn bracket_atom_full() {
        let tokens = scan("[13C@@H2+2]").unwrap();
        match &tokens[0] {
            Token::Atom(a) => {
                assert_eq!(a.symbol, "C");
                assert_eq!(a.isotope, Some(13));
                assert_eq!(a.h_count, Some(2));
                assert_eq!(a.charge, 2);
            }
            other => panic!("expected atom, got {other:?}"),
        }
    }

    #[test]
    fn bracket_charges() {
        let scan_charge = |s: &str| match &scan(s).unwrap()[0] {
            Token::Atom(a) => a.charge,
            _ => unreachable!(),
        };
        assert_eq!(scan_charge("[O-]"), -1);
        assert_eq!(scan_charge("[NH4+]"), 1);
        assert_eq!(scan_charge("[Fe++]"), 2);
        assert_eq!(scan_charge("[Fe+2]"), 2);
    }

    #[test]
    fn percent_ring_closure() {
        let tokens = scan("C%12CC%12").unwrap();
        assert!(tokens.contains(&Token::Ring(12)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            scan("not_a_smiles"),
            Err(SmilesError::UnexpectedChar('t', 2))
        );
        assert_eq!(scan("[NH4"), Err(SmilesError::UnclosedBracket));
        assert!(matches!(scan("[]"), Err(SmilesError::MalformedBracket(_))));
    }
}
