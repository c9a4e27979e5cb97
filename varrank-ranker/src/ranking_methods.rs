use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::RankError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankingMethod {
    /// order by summed allele frequencies
    PopCov,
    /// population coverage discounted by the number of variants sharing a window
    PopCovBlowup,
    /// greedy haplotype-aware ranking, reported with and without blowup penalty
    Hybrid,
}

impl RankingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingMethod::PopCov => "popcov",
            RankingMethod::PopCovBlowup => "popcov-blowup",
            RankingMethod::Hybrid => "hybrid",
        }
    }
}

impl FromStr for RankingMethod {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "popcov" => Ok(RankingMethod::PopCov),
            "popcov-blowup" => Ok(RankingMethod::PopCovBlowup),
            "hybrid" => Ok(RankingMethod::Hybrid),
            _ => Err(RankError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl Display for RankingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("popcov", RankingMethod::PopCov)]
    #[case("popcov-blowup", RankingMethod::PopCovBlowup)]
    #[case("Hybrid", RankingMethod::Hybrid)]
    fn test_parse_methods(#[case] name: &str, #[case] expected: RankingMethod) {
        assert_eq!(RankingMethod::from_str(name).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("popcov_blowup")]
    #[case("random")]
    fn test_unknown_method_is_an_error(#[case] name: &str) {
        let result = RankingMethod::from_str(name);
        assert!(matches!(result, Err(RankError::UnsupportedMethod(n)) if n == name));
    }
}
