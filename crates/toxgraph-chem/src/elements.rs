//! Periodic-table lookups used during SMILES perception.

/// Atomic number for an element symbol (canonical case, e.g. `"Cl"`).
///
/// Covers the elements that actually show up in toxicity screening data:
/// the full organic subset plus the metals and metalloids common in salts
/// and organometallics.
pub fn atomic_number(symbol: &str) -> Option<u8> {
    let z = match symbol {
        "H" => 1,
        "He" => 2,
        "Li" => 3,
        "Be" => 4,
        "B" => 5,
        "C" => 6,
        "N" => 7,
        "O" => 8,
        "F" => 9,
        "Ne" => 10,
        "Na" => 11,
        "Mg" => 12,
        "Al" => 13,
        "Si" => 14,
        "P" => 15,
        "S" => 16,
        "Cl" => 17,
        "Ar" => 18,
        "K" => 19,
        "Ca" => 20,
        "Ti" => 22,
        "V" => 23,
        "Cr" => 24,
        "Mn" => 25,
        "Fe" => 26,
        "Co" => 27,
        "Ni" => 28,
        "Cu" => 29,
        "Zn" => 30,
        "Ga" => 31,
        "Ge" => 32,
        "As" => 33,
        "Se" => 34,
        "Br" => 35,
        "Kr" => 36,
        "Sr" => 38,
        "Zr" => 40,
        "Mo" => 42,
        "Pd" => 46,
        "Ag" => 47,
        "Cd" => 48,
        "In" => 49,
        "Sn" => 50,
        "Sb" => 51,
        "Te" => 52,
        "I" => 53,
        "Xe" => 54,
        "Ba" => 56,
        "Gd" => 64,
        "Pt" => 78,
        "Au" => 79,
        "Hg" => 80,
        "Tl" => 81,
        "Pb" => 82,
        "Bi" => 83,
        _ => return None,
    };
    Some(z)
}

/// Default valences used to derive implicit hydrogen counts, in ascending
/// order. Only the organic subset gets implicit hydrogens in SMILES; every
/// other element must be written in brackets and therefore carries an
/// explicit H count (or none).
pub fn default_valences(atomic_num: u8) -> &'static [u8] {
    match atomic_num {
        5 => &[3],          // B
        6 => &[4],          // C
        7 => &[3, 5],       // N
        8 => &[2],          // O
        15 => &[3, 5],      // P
        16 => &[2, 4, 6],   // S
        9 | 17 | 35 | 53 => &[1], // F, Cl, Br, I
        _ => &[],
    }
}
