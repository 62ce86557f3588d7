use rand::{Rng, RngCore};

const FIRST_NAMES: &[&str] = &[
    "Alina", "Bart", "Cassius", "Dana", "Edrik", "Fen", "Greta", "Hale", "Ines", "Joris",
    "Kara", "Lem", "Mirela", "Nox", "Orla", "Pavel", "Quinn", "Rosa", "Sten", "Tova",
    "Ulric", "Vera", "Wren", "Yusuf", "Zella",
];

const NICKNAMES: &[&str] = &[
    "Ace", "Bolt", "Crow", "Dusty", "Ember", "Flint", "Grit", "Hawk", "Iron", "Jinx",
    "Patch", "Rook", "Slate", "Tinker", "Whisper",
];

const LAST_NAMES: &[&str] = &[
    "Ashdown", "Briggs", "Calder", "Drummond", "Eastvale", "Fairbanks", "Graves", "Holt",
    "Kessler", "Lowe", "Marsh", "Navarro", "Oakes", "Pike", "Renner", "Sandoval", "Thorne",
    "Vance", "Weller", "Yates",
];

/// Generate a pawn name: first 'nickname' last, nickname on a coin flip.
pub fn generate_pawn_name(rng: &mut dyn RngCore) -> String {
    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
    if rng.random_bool(0.5) {
        let nick = NICKNAMES[rng.random_range(0..NICKNAMES.len())];
        format!("{first} '{nick}' {last}")
    } else {
        format!("{first} {last}")
    }
}
