//! Pattern file adapter: moves the engine's line format to and from storage.
//!
//! The engine never touches the filesystem itself.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{info, warn};

use crate::domain::{LifeEngine, LifeError};

/// Write one `x,y` line per live cell, each terminated by `\n`
pub fn write_lines<W: Write>(engine: &LifeEngine, mut out: W) -> io::Result<usize> {
    let mut written = 0;
    for line in engine.serialize() {
        writeln!(out, "{line}")?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Load pattern lines from any buffered reader
pub fn read_lines<R: BufRead>(engine: &mut LifeEngine, input: R) -> Result<(), LifeError> {
    let lines = input.lines().collect::<io::Result<Vec<String>>>();
    match lines {
        Ok(lines) => engine.deserialize(lines),
        Err(err) => {
            engine.clear();
            Err(err.into())
        }
    }
}

pub fn save_pattern(engine: &LifeEngine, path: &Path) -> Result<(), LifeError> {
    let file = File::create(path)?;
    let written = write_lines(engine, BufWriter::new(file))?;
    info!("saved {} live cells to {}", written, path.display());
    Ok(())
}

/// Replace the engine's cells with the pattern stored at `path`.
/// A missing file leaves the engine cleared and reports `NotFound`.
pub fn load_pattern(engine: &mut LifeEngine, path: &Path) -> Result<(), LifeError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            engine.clear();
            if err.kind() == io::ErrorKind::NotFound {
                warn!("{} not found, starting with an empty grid", path.display());
                return Err(LifeError::NotFound(path.to_path_buf()));
            }
            return Err(err.into());
        }
    };
    read_lines(engine, BufReader::new(file))?;
    info!("loaded pattern from {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn engine_with(cells: &[(i32, i32)]) -> LifeEngine {
        let mut engine = LifeEngine::new(10, 10).unwrap();
        for &(x, y) in cells {
            engine.set_cell(x, y, true).unwrap();
        }
        engine
    }

    #[test]
    fn test_write_lines_format() {
        let engine = engine_with(&[(2, 1), (0, 5), (2, 0)]);
        let mut buffer = Vec::new();
        let written = write_lines(&engine, &mut buffer).unwrap();
        assert_eq!(written, 3);
        assert_eq!(String::from_utf8(buffer).unwrap(), "0,5\n2,0\n2,1\n");
    }

    #[test]
    fn test_empty_grid_writes_nothing() {
        let engine = engine_with(&[]);
        let mut buffer = Vec::new();
        write_lines(&engine, &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_read_lines_tolerates_blank_lines() {
        let mut engine = engine_with(&[(9, 9)]);
        read_lines(&mut engine, "1,1\n\n2,2\r\n".as_bytes()).unwrap();
        assert_eq!(engine.sorted_cells(), vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn test_read_lines_reports_parse_error() {
        let mut engine = engine_with(&[(9, 9)]);
        let err = read_lines(&mut engine, "1,1\nx\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LifeError::Parse { line_number: 2, .. }));
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_save_then_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("patterns.txt");
        let mut source = LifeEngine::new(10, 10).unwrap();
        source.randomize(0.4, Some(21)).unwrap();
        save_pattern(&source, &path).unwrap();

        let mut target = engine_with(&[(0, 0)]);
        load_pattern(&mut target, &path).unwrap();
        assert_eq!(target.live_cells(), source.live_cells());
    }

    #[test]
    fn test_load_into_smaller_grid_drops_cells() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("patterns.txt");
        std::fs::write(&path, "1,1\n100,100\n").unwrap();

        let mut engine = engine_with(&[]);
        load_pattern(&mut engine, &path).unwrap();
        assert_eq!(engine.sorted_cells(), vec![(1, 1)]);
    }

    #[test]
    fn test_missing_file_clears_engine() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does_not_exist.txt");
        let mut engine = engine_with(&[(3, 3), (4, 4)]);
        engine.step();

        match load_pattern(&mut engine, &path) {
            Err(LifeError::NotFound(missing)) => assert_eq!(missing, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.generation(), 0);
    }
}
