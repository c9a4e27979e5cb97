use fxhash::FxHashMap as HashMap;

///
/// Genome metadata: the length of every chromosome. The ranker never needs the
/// sequence itself, only where each chromosome ends.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Genome {
    pub chrom_lens: HashMap<String, u32>,
}

impl Genome {
    pub fn new() -> Self {
        Genome::default()
    }

    pub fn insert(&mut self, chrom: String, len: u32) {
        self.chrom_lens.insert(chrom, len);
    }

    pub fn chrom_len(&self, chrom: &str) -> Option<u32> {
        self.chrom_lens.get(chrom).copied()
    }

    pub fn contains(&self, chrom: &str) -> bool {
        self.chrom_lens.contains_key(chrom)
    }

    pub fn len(&self) -> usize {
        self.chrom_lens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chrom_lens.is_empty()
    }

    /// Chromosome names sorted lexicographically
    pub fn chrom_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.chrom_lens.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl FromIterator<(String, u32)> for Genome {
    fn from_iter<T: IntoIterator<Item = (String, u32)>>(iter: T) -> Self {
        Genome {
            chrom_lens: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_genome_from_iter() {
        let genome: Genome = vec![("chr2".to_string(), 50), ("chr1".to_string(), 100)]
            .into_iter()
            .collect();

        assert_eq!(genome.len(), 2);
        assert_eq!(genome.chrom_len("chr1"), Some(100));
        assert_eq!(genome.chrom_len("chrX"), None);
        assert_eq!(genome.chrom_names(), vec!["chr1", "chr2"]);
    }
}
