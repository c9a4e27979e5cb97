pub mod genome;
pub mod phasing;
pub mod variant;
pub mod variant_table;
pub mod weight_fields;

// re-export for cleaner imports
pub use self::genome::Genome;
pub use self::phasing::Phasing;
pub use self::variant::Variant;
pub use self::variant_table::VariantTable;
pub use self::weight_fields::{WeightField, WeightFields};
