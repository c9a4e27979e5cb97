use clap::{Arg, Command, arg, value_parser};

pub use varrank_ranker::consts::{DEFAULT_OUT, RANK_CMD};

pub fn create_rank_cli() -> Command {
    Command::new(RANK_CMD)
        .about("Rank a set of variants for inclusion in a graph genome, from highest to lowest priority.")
        .arg(
            arg!(--method <METHOD>)
                .required(true)
                .help("Ranking method: popcov | popcov-blowup | hybrid. 'hybrid' writes rankings both with and without blowup avoidance"),
        )
        .arg(
            arg!(--reference <REFERENCE>)
                .required(true)
                .help("Path to the reference genome: FASTA, FASTA index (.fai) or chrom.sizes"),
        )
        .arg(
            arg!(--vars <VARS>)
                .required(true)
                .help("Path to the 1ksnp file with variant information, or '-' to read it from stdin"),
        )
        .arg(
            arg!(--chrom <CHROM>)
                .required(false)
                .conflicts_with("phasing")
                .help("Name of the chromosome to process. If not present, process all chromosomes. Phasing files cover the whole variant file, so this cannot be combined with --phasing"),
        )
        .arg(
            Arg::new("window-size")
                .long("window-size")
                .required(false)
                .value_parser(value_parser!(u32))
                .help("Radius of window (i.e. max read length) to use. Default: 10"),
        )
        .arg(
            arg!(--prune <PRUNE>)
                .required(false)
                .value_parser(value_parser!(usize))
                .help("In each window, only process up to this many variants (hybrid ranking). Default: window size"),
        )
        .arg(
            arg!(--threshold <THRESHOLD>)
                .required(false)
                .value_parser(value_parser!(f64))
                .help("Blowup penalty base, between 0 and 1. A smaller value is a stricter penalty. Default: 1/3"),
        )
        .arg(
            arg!(--phasing <PHASING>)
                .required(false)
                .help("Path to the phasing file (one line per variant, comma separated alleles per haplotype)"),
        )
        .arg(
            Arg::new("weight-fields")
                .long("weight-fields")
                .required(false)
                .help("Comma separated frequency fields summed into a variant's weight (ref, alt1, alt2, ...). Default: alt1,alt2,alt3"),
        )
        .arg(
            arg!(--format <FORMAT>)
                .required(false)
                .help("Output layout: erg (chrom,pos pairs separated by tabs) or tsv (one chrom<TAB>pos per line). Default: erg"),
        )
        .arg(
            arg!(--config <CONFIG>)
                .required(false)
                .help("TOML file with ranker settings; command line flags take precedence"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Path to write the ranking to. Default: 'ordered.txt'"),
        )
}
