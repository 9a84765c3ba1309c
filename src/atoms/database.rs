/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Periodic table reference data
//!
//! Element symbols, names and the ground-state configurations that do not
//! follow the Madelung filling rule.

/// Heaviest element the database knows about
pub const MAX_ATOMIC_NUMBER: u32 = 118;

/// (symbol, name) for Z = 1..=118, indexed by `Z - 1`
const ELEMENTS: [(&str, &str); MAX_ATOMIC_NUMBER as usize] = [
    ("H", "Hydrogen"),
    ("He", "Helium"),
    ("Li", "Lithium"),
    ("Be", "Beryllium"),
    ("B", "Boron"),
    ("C", "Carbon"),
    ("N", "Nitrogen"),
    ("O", "Oxygen"),
    ("F", "Fluorine"),
    ("Ne", "Neon"),
    ("Na", "Sodium"),
    ("Mg", "Magnesium"),
    ("Al", "Aluminum"),
    ("Si", "Silicon"),
    ("P", "Phosphorus"),
    ("S", "Sulfur"),
    ("Cl", "Chlorine"),
    ("Ar", "Argon"),
    ("K", "Potassium"),
    ("Ca", "Calcium"),
    ("Sc", "Scandium"),
    ("Ti", "Titanium"),
    ("V", "Vanadium"),
    ("Cr", "Chromium"),
    ("Mn", "Manganese"),
    ("Fe", "Iron"),
    ("Co", "Cobalt"),
    ("Ni", "Nickel"),
    ("Cu", "Copper"),
    ("Zn", "Zinc"),
    ("Ga", "Gallium"),
    ("Ge", "Germanium"),
    ("As", "Arsenic"),
    ("Se", "Selenium"),
    ("Br", "Bromine"),
    ("Kr", "Krypton"),
    ("Rb", "Rubidium"),
    ("Sr", "Strontium"),
    ("Y", "Yttrium"),
    ("Zr", "Zirconium"),
    ("Nb", "Niobium"),
    ("Mo", "Molybdenum"),
    ("Tc", "Technetium"),
    ("Ru", "Ruthenium"),
    ("Rh", "Rhodium"),
    ("Pd", "Palladium"),
    ("Ag", "Silver"),
    ("Cd", "Cadmium"),
    ("In", "Indium"),
    ("Sn", "Tin"),
    ("Sb", "Antimony"),
    ("Te", "Tellurium"),
    ("I", "Iodine"),
    ("Xe", "Xenon"),
    ("Cs", "Cesium"),
    ("Ba", "Barium"),
    ("La", "Lanthanum"),
    ("Ce", "Cerium"),
    ("Pr", "Praseodymium"),
    ("Nd", "Neodymium"),
    ("Pm", "Promethium"),
    ("Sm", "Samarium"),
    ("Eu", "Europium"),
    ("Gd", "Gadolinium"),
    ("Tb", "Terbium"),
    ("Dy", "Dysprosium"),
    ("Ho", "Holmium"),
    ("Er", "Erbium"),
    ("Tm", "Thulium"),
    ("Yb", "Ytterbium"),
    ("Lu", "Lutetium"),
    ("Hf", "Hafnium"),
    ("Ta", "Tantalum"),
    ("W", "Tungsten"),
    ("Re", "Rhenium"),
    ("Os", "Osmium"),
    ("Ir", "Iridium"),
    ("Pt", "Platinum"),
    ("Au", "Gold"),
    ("Hg", "Mercury"),
    ("Tl", "Thallium"),
    ("Pb", "Lead"),
    ("Bi", "Bismuth"),
    ("Po", "Polonium"),
    ("At", "Astatine"),
    ("Rn", "Radon"),
    ("Fr", "Francium"),
    ("Ra", "Radium"),
    ("Ac", "Actinium"),
    ("Th", "Thorium"),
    ("Pa", "Protactinium"),
    ("U", "Uranium"),
    ("Np", "Neptunium"),
    ("Pu", "Plutonium"),
    ("Am", "Americium"),
    ("Cm", "Curium"),
    ("Bk", "Berkelium"),
    ("Cf", "Californium"),
    ("Es", "Einsteinium"),
    ("Fm", "Fermium"),
    ("Md", "Mendelevium"),
    ("No", "Nobelium"),
    ("Lr", "Lawrencium"),
    ("Rf", "Rutherfordium"),
    ("Db", "Dubnium"),
    ("Sg", "Seaborgium"),
    ("Bh", "Bohrium"),
    ("Hs", "Hassium"),
    ("Mt", "Meitnerium"),
    ("Ds", "Darmstadtium"),
    ("Rg", "Roentgenium"),
    ("Cn", "Copernicium"),
    ("Nh", "Nihonium"),
    ("Fl", "Flerovium"),
    ("Mc", "Moscovium"),
    ("Lv", "Livermorium"),
    ("Ts", "Tennessine"),
    ("Og", "Oganesson"),
];

/// Ground-state configurations that break the Madelung rule, in noble-gas
/// core notation
const AUFBAU_EXCEPTIONS: [(u32, &str); 20] = [
    (24, "[Ar] 3d5 4s1"),
    (29, "[Ar] 3d10 4s1"),
    (41, "[Kr] 4d4 5s1"),
    (42, "[Kr] 4d5 5s1"),
    (44, "[Kr] 4d7 5s1"),
    (45, "[Kr] 4d8 5s1"),
    (46, "[Kr] 4d10"),
    (47, "[Kr] 4d10 5s1"),
    (57, "[Xe] 5d1 6s2"),
    (58, "[Xe] 4f1 5d1 6s2"),
    (64, "[Xe] 4f7 5d1 6s2"),
    (78, "[Xe] 4f14 5d9 6s1"),
    (79, "[Xe] 4f14 5d10 6s1"),
    (89, "[Rn] 6d1 7s2"),
    (90, "[Rn] 6d2 7s2"),
    (91, "[Rn] 5f2 6d1 7s2"),
    (92, "[Rn] 5f3 6d1 7s2"),
    (93, "[Rn] 5f4 6d1 7s2"),
    (96, "[Rn] 5f7 6d1 7s2"),
    (103, "[Rn] 5f14 7s2 7p1"),
];

/// Provides the element symbol for an atomic number
pub fn element_symbol(atomic_number: u32) -> Option<&'static str> {
    entry(atomic_number).map(|(symbol, _)| symbol)
}

/// Provides the English element name for an atomic number
pub fn element_name(atomic_number: u32) -> Option<&'static str> {
    entry(atomic_number).map(|(_, name)| name)
}

/// Returns the atomic number for an element symbol
///
/// This function is case-insensitive and will handle both "Fe" and "FE"
pub fn atomic_number_from_symbol(symbol: &str) -> Option<u32> {
    position(|(candidate, _)| candidate.eq_ignore_ascii_case(symbol.trim()))
}

/// Returns the atomic number for an English element name, case-insensitive
pub fn atomic_number_from_name(name: &str) -> Option<u32> {
    position(|(_, candidate)| candidate.eq_ignore_ascii_case(name.trim()))
}

/// Ground-state configuration override for elements that do not follow
/// the Madelung filling order
pub fn aufbau_exception(atomic_number: u32) -> Option<&'static str> {
    AUFBAU_EXCEPTIONS
        .iter()
        .find(|(z, _)| *z == atomic_number)
        .map(|(_, notation)| *notation)
}

fn entry(atomic_number: u32) -> Option<(&'static str, &'static str)> {
    if atomic_number == 0 {
        return None;
    }
    ELEMENTS.get(atomic_number as usize - 1).copied()
}

fn position(predicate: impl Fn(&(&str, &str)) -> bool) -> Option<u32> {
    ELEMENTS
        .iter()
        .position(predicate)
        .map(|index| index as u32 + 1)
}
