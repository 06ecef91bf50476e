use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Writes bytes to `out`, or to stdout followed by a newline when absent.
pub fn emit(out: Option<&Path>, bytes: &[u8]) -> Result<(), Box<dyn Error>> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, bytes)?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Opens a CSV writer on `out` or stdout.
pub fn csv_writer(out: Option<&Path>) -> Result<csv::Writer<Box<dyn Write>>, Box<dyn Error>> {
    let sink: Box<dyn Write> = match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            Box::new(fs::File::create(path)?)
        }
        None => Box::new(io::stdout()),
    };
    Ok(csv::Writer::from_writer(sink))
}
