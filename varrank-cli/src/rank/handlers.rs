use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{debug, info};

use varrank_core::models::WeightFields;
use varrank_io::{read_1ksnp_w_stdin, read_genome, read_phasing};
use varrank_ranker::{OutputLayout, RankerConfig, RankingMethod, VariantRanker};

use super::cli::DEFAULT_OUT;

fn build_config(matches: &ArgMatches) -> Result<RankerConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => RankerConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load ranker config: {}", path))?,
        None => RankerConfig::default(),
    };

    if let Some(&window_radius) = matches.get_one::<u32>("window-size") {
        config.window_radius = window_radius;
    }
    if let Some(&prune) = matches.get_one::<usize>("prune") {
        config.max_variants_per_window = Some(prune);
    }
    if let Some(&threshold) = matches.get_one::<f64>("threshold") {
        config.blowup_threshold = threshold;
    }
    if let Some(fields) = matches.get_one::<String>("weight-fields") {
        config.weight_fields = WeightFields::from_str(fields)?;
    }

    Ok(config)
}

pub fn run_rank(matches: &ArgMatches) -> Result<()> {
    let start = Instant::now();

    // get arguments from CLI
    let method = matches
        .get_one::<String>("method")
        .expect("A ranking method is required.");
    let reference = matches
        .get_one::<String>("reference")
        .expect("A path to the reference genome is required.");
    let vars = matches
        .get_one::<String>("vars")
        .expect("A path to the variant file is required.");
    let chrom = matches.get_one::<String>("chrom").map(|c| c.as_str());
    let phasing = matches.get_one::<String>("phasing");

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);
    let layout = match matches.get_one::<String>("format") {
        Some(format) => OutputLayout::from_str(format)?,
        None => OutputLayout::default(),
    };

    // coerce arguments to types; unknown methods fail before any file is read
    let method = RankingMethod::from_str(method)?;
    let config = build_config(matches)?;

    let genome = read_genome(reference, chrom)
        .with_context(|| format!("Failed to read reference genome: {}", reference))?;
    debug!("Genome loaded after {:.2}s", start.elapsed().as_secs_f64());

    let variants = read_1ksnp_w_stdin(vars, chrom)
        .with_context(|| format!("Failed to read variants: {}", vars))?;
    debug!("Variants loaded after {:.2}s", start.elapsed().as_secs_f64());

    let phasing = match phasing {
        Some(path) => {
            let phasing = read_phasing(path)
                .with_context(|| format!("Failed to read phasing: {}", path))?;
            debug!("Phasing loaded after {:.2}s", start.elapsed().as_secs_f64());
            Some(phasing)
        }
        None => None,
    };

    let ranker = VariantRanker::new(genome, variants, phasing, config)?;
    let ranking = ranker.rank(method)?;
    debug!("Ranking done after {:.2}s", start.elapsed().as_secs_f64());

    ranking.write_to_file(ranker.variants(), Path::new(output), layout)?;

    info!(
        "Ranked {} variants with {} in {:.2} seconds",
        ranking.len(),
        method,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::read_to_string;

    use tempfile::tempdir;

    use crate::rank::cli::create_rank_cli;

    #[test]
    fn test_run_rank_writes_both_hybrid_orders() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("ordered.txt");
        let output_str = output.display().to_string();

        let matches = create_rank_cli()
            .try_get_matches_from([
                "rank",
                "--method",
                "hybrid",
                "--reference",
                "../tests/data/small.fa",
                "--vars",
                "../tests/data/small.1ksnp",
                "--phasing",
                "../tests/data/small.phasing",
                "--output",
                output_str.as_str(),
            ])
            .unwrap();

        run_rank(&matches).unwrap();

        let ordered = read_to_string(&output).unwrap();
        assert!(ordered.starts_with("chr1,101\t"));
        assert!(read_to_string(format!("{}.blowup", output_str)).is_ok());
    }

    #[test]
    fn test_run_rank_rejects_unknown_method() {
        let matches = create_rank_cli()
            .try_get_matches_from([
                "rank",
                "--method",
                "popcov-hybrid",
                "--reference",
                "../tests/data/small.fa",
                "--vars",
                "../tests/data/small.1ksnp",
            ])
            .unwrap();

        assert!(run_rank(&matches).is_err());
    }
}
