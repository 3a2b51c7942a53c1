/// Tunables recognized by the core, construction parameters rather than
/// process-wide constants so that test suites can dial them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Tolerance for all geometric predicates.
    pub epsilon: f32,
    /// Alignment granularity for dynamic arrays: buckets of `2^bucket_bits`.
    pub bucket_bits: u32,
}

pub const DEFAULT_EPSILON: f32 = 1e-6;
pub const DEFAULT_BUCKET_BITS: u32 = 4;

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Config {
    pub fn new(epsilon: f32, bucket_bits: u32) -> Self {
        Self {
            epsilon,
            bucket_bits,
        }
    }

    /// Reads `TRIANGULATE_EPSILON` / `TRIANGULATE_BUCKET_BITS`, falling back
    /// to the reference defaults on any missing or unparsable value.
    pub fn from_env() -> Self {
        let epsilon = std::env::var("TRIANGULATE_EPSILON")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_EPSILON);
        let bucket_bits = std::env::var("TRIANGULATE_BUCKET_BITS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_BUCKET_BITS);
        Self {
            epsilon,
            bucket_bits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_constants() {
        let c = Config::default();
        assert_eq!(c.epsilon, DEFAULT_EPSILON);
        assert_eq!(c.bucket_bits, DEFAULT_BUCKET_BITS);
    }

    #[test]
    fn from_env_overrides_epsilon() {
        std::env::set_var("TRIANGULATE_EPSILON", "0.5");
        let c = Config::from_env();
        assert_eq!(c.epsilon, 0.5);
        std::env::remove_var("TRIANGULATE_EPSILON");
    }
}
