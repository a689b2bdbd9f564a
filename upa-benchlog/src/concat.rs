use crate::error::BenchLogError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Write the contents of `inputs`, in order, to `output`.
///
/// All inputs are read before `output` is touched, so a missing input leaves
/// an existing output file alone. Returns the number of bytes written.
pub fn concat_files<P: AsRef<Path>>(output: &Path, inputs: &[P]) -> Result<usize, BenchLogError> {
    let mut contents = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        let bytes = fs::read(input).map_err(|source| BenchLogError::Read {
            path: input.to_path_buf(),
            source,
        })?;
        contents.extend_from_slice(&bytes);
    }

    info!(path = %output.display(), inputs = inputs.len(), "writing concatenated logs");
    fs::write(output, &contents).map_err(|source| BenchLogError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(contents.len())
}
