pub mod common;

#[cfg(test)]
mod test_battle_modes;

#[cfg(test)]
mod test_formation_errors;
