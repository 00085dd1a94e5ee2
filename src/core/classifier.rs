use std::fmt;

/// Normalized gender category for the numeric code carried on customer
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Total over all integers; every unmapped code is `Unknown`, not an error.
pub fn classify(code: i64) -> Gender {
    match code {
        0 => Gender::Male,
        1 => Gender::Female,
        _ => Gender::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(classify(0), Gender::Male);
        assert_eq!(classify(1), Gender::Female);
    }

    #[test]
    fn test_unmapped_codes_are_unknown() {
        assert_eq!(classify(2), Gender::Unknown);
        assert_eq!(classify(-5), Gender::Unknown);
        assert_eq!(classify(i64::MAX), Gender::Unknown);
        assert_eq!(classify(i64::MIN), Gender::Unknown);
    }

    #[test]
    fn test_labels() {
        assert_eq!(classify(0).to_string(), "male");
        assert_eq!(classify(1).to_string(), "female");
        assert_eq!(classify(42).to_string(), "unknown");
    }
}
