use anyhow::{Context, Result};

#[macro_use]
extern crate log;

use heredity::{inference, model::HeredityModel, pedigree::Pedigree};
use parser::Cli;

/// Unpack the command line arguments and run a full inference pass:
/// load the probability model and the pedigree, enumerate, write the results.
pub fn run(cli: &Cli) -> Result<()> {
    // ----------------------------- Sanity checks.
    cli.validate()?;
    if let Some(path) = &cli.output {
        mendel_io::write::can_write_file(cli.overwrite, path)?;
    }

    // ----------------------------- Load the probability model.
    let model = match &cli.model {
        Some(path) => {
            info!("Loading probability model from '{}'", path.display());
            HeredityModel::from_yaml(path)?
        }
        None => HeredityModel::default(),
    };

    // ----------------------------- Load and resolve the pedigree.
    info!("Reading pedigree from '{}'", cli.pedigree.display());
    let records = mendel_io::read::read_pedigree(&cli.pedigree)?;
    let pedigree = Pedigree::from_records(&records)
        .with_context(|| format!("While building the pedigree found in '{}'", cli.pedigree.display()))?;
    if pedigree.is_empty() {
        warn!("'{}' contains no individuals. Nothing to infer", cli.pedigree.display());
    }
    debug!("{} founder(s), {} offspring", pedigree.founders().count(), pedigree.offspring().count());

    // ----------------------------- Run the enumeration engine.
    info!("Enumerating joint hypotheses over {} member(s)...", pedigree.len());
    let posteriors = inference::infer(&pedigree, &model)?;

    // ----------------------------- Write the results.
    if let Some(path) = &cli.output {
        info!("Writing posterior probabilities to '{}'", path.display());
    }
    let mut writer = mendel_io::write::PosteriorWriter::new(cli.output.as_deref(), cli.precision)?;
    writer.write_posteriors(&pedigree, &posteriors)?;
    Ok(())
}
