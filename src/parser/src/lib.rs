use std::path::{Path, PathBuf};

use clap::Parser;

mod error;
pub use error::ParserError;

/// Meaningful decimal digits of an `f64`. Requesting more is a user error.
const MAX_PRECISION: usize = 17;

#[derive(Parser, Debug)]
#[clap(name="mendel-rs", version, about, long_about = None)]
/// mendel-rs: posterior gene-copy and trait probabilities over a family pedigree.
pub struct Cli {
    /// Input pedigree file.
    ///
    /// CSV file with a 'name,mother,father,trait' header. 'mother' and 'father'
    /// must both be blank, or both name another row of the file. 'trait' should
    /// be 1 or 0 if the phenotype is known, blank otherwise.
    #[clap(parse(from_os_str))]
    pub pedigree: PathBuf,

    /// Custom probability model.
    ///
    /// A .yaml file overriding the built-in probability tables, with fields
    /// 'gene_prior', 'trait_given_gene' (each a three-entry list, indexed by
    /// gene-copy count) and 'mutation_rate'.
    #[clap(short, long, required(false), parse(from_os_str))]
    pub model: Option<PathBuf>,

    /// Output file where per-individual probabilities are written.
    ///
    /// When unset, results are written to the standard output.
    #[clap(short, long, required(false), parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Number of displayed decimal places.
    #[clap(short, long, default_value("4"))]
    pub precision: usize,

    /// Overwrite existing output files.
    #[clap(short='x', long)]
    pub overwrite: bool,

    /// Set the verbosity level (-v -vv -vvv)
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use the --quiet/-q flag to disable them.
    #[clap(short='v', long, parse(from_occurrences))]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emitted and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long)]
    pub quiet: bool,
}

impl Cli {
    /// Sanity checks, run before anything else: input paths must point to
    /// regular files and the requested precision must be displayable.
    ///
    /// # Errors
    /// - `MissingInputFile` / `InvalidInputFile` for the pedigree or model path.
    /// - `InvalidPrecision` when `--precision` falls outside [1, 17].
    pub fn validate(&self) -> Result<(), ParserError> {
        Self::check_input_file(&self.pedigree)?;
        if let Some(model) = &self.model {
            Self::check_input_file(model)?;
        }
        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(ParserError::InvalidPrecision)
        }
        Ok(())
    }

    fn check_input_file(path: &Path) -> Result<(), ParserError> {
        if !path.exists() {
            return Err(ParserError::MissingInputFile(path.to_path_buf()))
        }
        if !path.is_file() {
            return Err(ParserError::InvalidInputFile(path.to_path_buf()))
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("mendel-rs").chain(args.iter().copied()))
    }

    #[test]
    fn minimal_invocation() {
        let cli = parse(&["family.csv"]);
        assert_eq!(cli.pedigree, PathBuf::from("family.csv"));
        assert_eq!(cli.precision, 4);
        assert!(cli.output.is_none());
        assert!(cli.model.is_none());
        assert!(!cli.overwrite);
    }

    #[test]
    fn verbosity_occurrences() {
        assert_eq!(parse(&["family.csv"]).verbose, 0);
        assert_eq!(parse(&["family.csv", "-vv"]).verbose, 2);
        assert_eq!(parse(&["family.csv", "-v", "-v", "-v"]).verbose, 3);
    }

    #[test]
    fn validate_accepts_existing_file() -> std::io::Result<()> {
        let tmpdir = tempfile::tempdir()?;
        let path = tmpdir.path().join("family.csv");
        File::create(&path)?;

        let cli = parse(&[path.to_str().expect("Invalid unicode path")]);
        assert_eq!(cli.validate(), Ok(()));
        Ok(())
    }

    #[test]
    fn validate_rejects_missing_pedigree() {
        let cli = parse(&["does-not-exist.csv"]);
        assert_eq!(cli.validate(), Err(ParserError::MissingInputFile(PathBuf::from("does-not-exist.csv"))));
    }

    #[test]
    fn validate_rejects_directory_input() -> std::io::Result<()> {
        let tmpdir = tempfile::tempdir()?;
        let path = tmpdir.path().to_path_buf();
        let cli = parse(&[path.to_str().expect("Invalid unicode path")]);
        assert_eq!(cli.validate(), Err(ParserError::InvalidInputFile(path)));
        Ok(())
    }

    #[test]
    fn validate_rejects_precision_bounds() -> std::io::Result<()> {
        let tmpdir = tempfile::tempdir()?;
        let path = tmpdir.path().join("family.csv");
        File::create(&path)?;
        let path = path.to_str().expect("Invalid unicode path");

        for precision in ["0", "18"] {
            let cli = parse(&[path, "--precision", precision]);
            assert_eq!(cli.validate(), Err(ParserError::InvalidPrecision));
        }
        Ok(())
    }
}
