use rand::Rng;

/// Length of every generated string unless a caller asks otherwise.
pub const DEFAULT_STRING_LEN: usize = 50;

pub fn random_lowercase_char<R: Rng>(rng: &mut R) -> char {
    (b'a' + rng.gen_range(0..26)) as char
}

/// Uniform random string of lowercase a-z. Generated once, never mutated.
pub fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| random_lowercase_char(rng)).collect()
}
