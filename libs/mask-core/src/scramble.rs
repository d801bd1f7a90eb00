use rand::Rng;

/// Returns a uniformly random permutation of the characters of `input`.
///
/// Uses the calling thread's generator, which is seeded from the operating
/// system once per thread. Output may equal the input, especially for short
/// strings.
///
/// # Example
/// ```
/// use mask_core::scramble;
///
/// let scrambled = scramble("password");
/// assert_eq!(scrambled.len(), "password".len());
/// ```
pub fn scramble(input: &str) -> String {
    scramble_with(input, &mut rand::thread_rng())
}

/// Same as [`scramble`], drawing swap positions from `rng`.
pub fn scramble_with<R: Rng + ?Sized>(input: &str, rng: &mut R) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut chars: Vec<char> = input.chars().collect();

    // Fisher-Yates: walk down from the last slot, swapping with a slot in [0, i].
    for i in (1..chars.len()).rev() {
        let j = rng.gen_range(0..=i);
        chars.swap(i, j);
    }

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn sorted_chars(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_scramble_empty_is_empty() {
        assert_eq!(scramble(""), "");
    }

    #[test]
    fn test_scramble_single_character() {
        assert_eq!(scramble("x"), "x");
    }

    #[test]
    fn test_scramble_preserves_characters() {
        let input = "the quick brown fox";
        let scrambled = scramble(input);
        assert_eq!(sorted_chars(&scrambled), sorted_chars(input));
    }

    #[test]
    fn test_scramble_with_same_seed_is_reproducible() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        assert_eq!(
            scramble_with("abcdefghij", &mut first),
            scramble_with("abcdefghij", &mut second)
        );
    }

    #[test]
    fn test_scramble_keeps_multibyte_characters_whole() {
        let input = "ñandú日本";
        let scrambled = scramble(input);
        assert_eq!(scrambled.chars().count(), input.chars().count());
        assert_eq!(sorted_chars(&scrambled), sorted_chars(input));
    }

    #[test]
    fn test_scramble_reaches_every_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            seen.insert(scramble_with("abc", &mut rng));
        }
        assert_eq!(seen.len(), 6);
    }
}
