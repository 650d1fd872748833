use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::LoadError;

/// Reads one puzzle per line.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if reading fails.
///
/// # Examples
///
/// ```
/// use deduce_puzzles::load_puzzles;
///
/// let input = "# easy\n..3.2.6..\n\n  4.....8.  \n";
/// assert_eq!(load_puzzles(input.as_bytes())?, ["..3.2.6..", "4.....8."]);
/// # Ok::<(), deduce_puzzles::LoadError>(())
/// ```
pub fn load_puzzles<R>(reader: R) -> Result<Vec<String>, LoadError>
where
    R: BufRead,
{
    let mut puzzles = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        puzzles.push(line.to_owned());
    }
    Ok(puzzles)
}

/// Reads a puzzle list from the file at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be opened or read.
pub fn load_puzzles_from_path<P>(path: P) -> Result<Vec<String>, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let puzzles = load_puzzles(BufReader::new(File::open(path)?))?;
    log::debug!("loaded {} puzzles from {}", puzzles.len(), path.display());
    Ok(puzzles)
}
