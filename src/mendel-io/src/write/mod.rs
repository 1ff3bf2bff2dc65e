use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

use heredity::{
    inference::{Posterior, Posteriors},
    model::GeneCount,
    pedigree::Pedigree,
};

mod error;
pub use error::WriterError;

/// Check if a given file already exists; raise an error if such is the case,
/// and the user did not explicitly allow file overwriting.
///
/// # Errors
/// `OverwriteDisallowed` if `path` exists and `overwrite` is unset.
pub fn can_write_file(overwrite: bool, path: &Path) -> Result<(), WriterError> {
    if !overwrite && path.exists() {
        return Err(WriterError::OverwriteDisallowed(path.to_path_buf()))
    }
    Ok(())
}

/// Buffered writer displaying per-individual posterior distributions,
/// targeting either a file or the standard output.
pub struct PosteriorWriter<'a> {
    sink     : BufWriter<Box<dyn Write + 'a>>,
    precision: usize,
}

impl<'a> PosteriorWriter<'a> {
    /// Instantiate a new writer, linked to a file when `path` is set and to
    /// stdout otherwise.
    ///
    /// # Errors
    /// If `path` cannot be created or the user lacks write permissions.
    pub fn new(path: Option<&Path>, precision: usize) -> Result<PosteriorWriter<'a>> {
        let sink: Box<dyn Write> = match path {
            Some(path) => {
                let file = File::create(path)
                    .map_err(WriterError::IOError)
                    .with_context(|| format!("While creating '{}'", path.display()))?;
                Box::new(file)
            }
            None => Box::new(std::io::stdout()),
        };
        Ok(Self { sink: BufWriter::new(sink), precision })
    }

    /// Write every member's gene and trait distributions, in pedigree order.
    ///
    /// Gene-copy rows are displayed in descending count order, trait rows as
    /// `True` then `False`, with `self.precision` decimal places.
    ///
    /// # Errors
    /// If any line fails to reach the underlying sink.
    pub fn write_posteriors(&mut self, pedigree: &Pedigree, posteriors: &Posteriors) -> Result<()> {
        for (member, posterior) in pedigree.members().iter().zip(posteriors) {
            self.write_member(&member.name, posterior)
                .map_err(WriterError::IOError)
                .with_context(|| format!("While writing the results of '{}'", member.name))?;
        }
        self.sink.flush().context("While flushing buffer contents of PosteriorWriter")
    }

    fn write_member(&mut self, name: &str, posterior: &Posterior) -> std::io::Result<()> {
        let precision = self.precision;
        writeln!(self.sink, "{name}:")?;
        writeln!(self.sink, "  Gene:")?;
        for &count in GeneCount::ALL.iter().rev() {
            writeln!(self.sink, "    {count}: {:.precision$}", posterior.gene(count))?;
        }
        writeln!(self.sink, "  Trait:")?;
        for has_trait in [true, false] {
            let label = if has_trait { "True" } else { "False" };
            writeln!(self.sink, "    {label}: {:.precision$}", posterior.phenotype(has_trait))?;
        }
        Ok(())
    }
}
