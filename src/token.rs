use rand::{seq::SliceRandom, Rng};

/// Characters a route path may be drawn from. Never empty, no repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn new(chars: &str) -> anyhow::Result<Self> {
        let mut alphabet = Self(Vec::with_capacity(chars.len()));
        for c in chars.chars() {
            if alphabet.contains(c) {
                anyhow::bail!("token alphabet contains duplicate character {c:?}");
            }
            alphabet.0.push(c);
        }
        if alphabet.0.is_empty() {
            anyhow::bail!("token alphabet must not be empty");
        }
        Ok(alphabet)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Number of distinct tokens of `length`, saturating at `u128::MAX`.
    pub fn space(&self, length: usize) -> u128 {
        let base = self.0.len() as u128;
        (0..length).fold(1u128, |acc, _| acc.saturating_mul(base))
    }
}

/// Draws `length` characters uniformly, with replacement, from `alphabet`.
pub fn generate(alphabet: &Alphabet, length: usize) -> String {
    generate_with(&mut rand::thread_rng(), alphabet, length)
}

pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, alphabet: &Alphabet, length: usize) -> String {
    (0..length)
        // Alphabet is non-empty by construction
        .filter_map(|_| alphabet.0.choose(rng).copied())
        .collect()
}
