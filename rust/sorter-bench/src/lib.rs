//! Input generation shared by the criterion benches and the runner binary.

/// Simple LCG so generated inputs are identical across runs.
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }
}

/// Shape of a generated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Random,
    Reversed,
    Sorted,
    FewUnique,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Random,
        Pattern::Reversed,
        Pattern::Sorted,
        Pattern::FewUnique,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Random => "random",
            Pattern::Reversed => "reversed",
            Pattern::Sorted => "sorted",
            Pattern::FewUnique => "few_unique",
        }
    }
}

/// Non-negative keys below `size * 10`, so every algorithm accepts them.
pub fn generate(pattern: Pattern, size: usize, seed: u64) -> Vec<i64> {
    let mut rng = Lcg::new(seed);
    let bound = (size as u64).max(1) * 10;
    match pattern {
        Pattern::Random => (0..size)
            .map(|_| ((rng.next_u64() >> 16) % bound) as i64)
            .collect(),
        Pattern::Reversed => (0..size as i64).rev().collect(),
        Pattern::Sorted => (0..size as i64).collect(),
        Pattern::FewUnique => (0..size).map(|_| ((rng.next_u64() >> 16) % 4) as i64).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate(Pattern::Random, 50, 1), generate(Pattern::Random, 50, 1));
        assert_ne!(generate(Pattern::Random, 50, 1), generate(Pattern::Random, 50, 2));
    }

    #[test]
    fn generated_keys_are_non_negative_and_bounded() {
        for pattern in Pattern::ALL {
            let values = generate(pattern, 100, 9);
            assert_eq!(values.len(), 100);
            assert!(values.iter().all(|&v| (0..1000).contains(&v)), "{}", pattern.name());
        }
    }
}
