use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::VariantError;
use crate::models::Variant;

///
/// One named frequency field of a variant that can contribute to its base weight.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeightField {
    /// frequency of the reference allele, `1 - sum(alt frequencies)`
    RefFreq,
    /// frequency of the n-th alternate allele (0-based slot)
    AltFreq(usize),
}

impl WeightField {
    pub fn value(&self, variant: &Variant) -> f64 {
        match self {
            WeightField::RefFreq => (1.0 - variant.probs().iter().sum::<f64>()).max(0.0),
            WeightField::AltFreq(slot) => variant.probs().get(*slot).copied().unwrap_or(0.0),
        }
    }
}

impl FromStr for WeightField {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "ref" {
            return Ok(WeightField::RefFreq);
        }
        match s.strip_prefix("alt").map(|n| n.parse::<usize>()) {
            Some(Ok(n)) if n >= 1 => Ok(WeightField::AltFreq(n - 1)),
            _ => Err(VariantError::InvalidWeightField(s)),
        }
    }
}

impl Display for WeightField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightField::RefFreq => write!(f, "ref"),
            WeightField::AltFreq(slot) => write!(f, "alt{}", slot + 1),
        }
    }
}

///
/// The set of frequency fields summed into a variant's base weight. Resolved once
/// (from the CLI or a config file) and then applied to every row.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeightFields {
    fields: Vec<WeightField>,
}

impl WeightFields {
    pub fn new(fields: Vec<WeightField>) -> Result<Self, VariantError> {
        if fields.is_empty() {
            return Err(VariantError::InvalidWeightField(
                "at least one weight field is required".to_string(),
            ));
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].contains(field) {
                return Err(VariantError::InvalidWeightField(format!(
                    "duplicate weight field: {}",
                    field
                )));
            }
        }
        Ok(WeightFields { fields })
    }

    pub fn fields(&self) -> &[WeightField] {
        &self.fields
    }

    ///
    /// Sum of the designated frequency fields of a variant. Missing alleles contribute 0.
    ///
    pub fn base_weight(&self, variant: &Variant) -> f64 {
        self.fields.iter().map(|field| field.value(variant)).sum()
    }
}

impl Default for WeightFields {
    fn default() -> Self {
        WeightFields {
            fields: vec![
                WeightField::AltFreq(0),
                WeightField::AltFreq(1),
                WeightField::AltFreq(2),
            ],
        }
    }
}

impl FromStr for WeightFields {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(WeightField::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        WeightFields::new(fields)
    }
}

impl TryFrom<String> for WeightFields {
    type Error = VariantError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        WeightFields::from_str(&value)
    }
}

impl From<WeightFields> for String {
    fn from(value: WeightFields) -> Self {
        value.to_string()
    }
}

impl Display for WeightFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.fields.iter().map(|field| field.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn multi_allelic() -> Variant {
        let mut v = Variant::new(
            "rs7".to_string(),
            "chr2".to_string(),
            100,
            "A".to_string(),
            vec!["C".to_string()],
            vec![0.2],
        )
        .unwrap();
        v.add_alt("G".to_string(), 0.1).unwrap();
        v
    }

    #[rstest]
    fn test_default_sums_first_three_alts(multi_allelic: Variant) {
        let fields = WeightFields::default();
        let weight = fields.base_weight(&multi_allelic);
        assert!((weight - 0.3).abs() < 1e-12);
    }

    #[rstest]
    fn test_ref_frequency(multi_allelic: Variant) {
        let fields = WeightFields::from_str("ref").unwrap();
        let weight = fields.base_weight(&multi_allelic);
        assert!((weight - 0.7).abs() < 1e-12);
    }

    #[rstest]
    #[case("alt1,alt2,alt3", 3)]
    #[case("alt2", 1)]
    #[case(" ref , alt1 ", 2)]
    fn test_parse_fields(#[case] input: &str, #[case] expected_len: usize) {
        let fields = WeightFields::from_str(input).unwrap();
        assert_eq!(fields.fields().len(), expected_len);
    }

    #[rstest]
    #[case("")]
    #[case("alt0")]
    #[case("alt1,alt1")]
    #[case("freq")]
    fn test_parse_invalid_fields(#[case] input: &str) {
        assert!(WeightFields::from_str(input).is_err());
    }

    #[rstest]
    fn test_display_round_trips() {
        let fields = WeightFields::default();
        assert_eq!(fields.to_string(), "alt1,alt2,alt3");
    }
}
