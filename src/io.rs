//! Reading beam files from disk

use log::debug;
use std::fs;
use std::path::Path;

use crate::beam::{BeamDescription, BeamModelBuilder, BuildOptions};
use crate::error::{ModelError, ModelResult};
use crate::fem::FEModel;
use crate::parse::separate_lines;

fn io_error(path: &Path, err: std::io::Error) -> ModelError {
    ModelError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Raw lines of a beam file, without line terminators
pub fn read_beam_file<P: AsRef<Path>>(path: P) -> ModelResult<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| io_error(path, err))?;
    let lines: Vec<String> = separate_lines(&text).into_iter().map(str::to_string).collect();
    debug!("Read {} line(s) from {}", lines.len(), path.display());
    Ok(lines)
}

pub fn load_beam_description<P: AsRef<Path>>(path: P) -> ModelResult<BeamDescription> {
    BeamDescription::from_lines(&read_beam_file(path)?)
}

/// Read, parse and build a beam file into an unanalysed [`FEModel`]
pub fn load_beam_model<P: AsRef<Path>>(path: P, options: BuildOptions) -> ModelResult<FEModel> {
    let beam = load_beam_description(path)?;
    BeamModelBuilder::with_options(options).build(&beam)
}
