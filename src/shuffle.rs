// src/shuffle.rs

use rand::Rng;

/// Fisher–Yates in situ: de la última posición hacia la 1, intercambia `i`
/// con un `j` uniforme en `[0, i]`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Copia y baraja; el slice original no se toca.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    fisher_yates(&mut copy, rng);
    copy
}
