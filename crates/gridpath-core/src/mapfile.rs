//! Reader for benchmark map files.
//!
//! The format is the MovingAI `.map` layout:
//!
//! ```text
//! type octile
//! height 4
//! width 6
//! map
//! ......
//! .@@@..
//! ..T...
//! ......
//! ```
//!
//! The first four lines are metadata. Every later line is a grid row where
//! `.` is traversable and any other character is blocked.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::grid::{Grid, GridError};

/// Number of metadata lines preceding the grid rows.
pub const HEADER_LINES: usize = 4;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("cannot read map file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// A parsed map file: the grid plus whatever dimensions the header declared.
#[derive(Debug, Clone)]
pub struct MapFile {
    grid: Grid,
    declared_height: Option<usize>,
    declared_width: Option<usize>,
}

impl MapFile {
    /// Read and parse the map file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::parse(&text)?;
        log::debug!(
            "loaded map {}: {}x{} ({} passable)",
            path.display(),
            map.grid.rows(),
            map.grid.cols(),
            map.grid.passable_count()
        );
        Ok(map)
    }

    /// Parse map file contents.
    ///
    /// Every line after the header is a grid row, kept verbatim apart from a
    /// trailing `\r`. Only empty lines at the end of the file are dropped, so
    /// an empty line between rows fails as a ragged grid.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut lines = text.lines();

        let mut declared_height = None;
        let mut declared_width = None;
        for line in lines.by_ref().take(HEADER_LINES) {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next().map(str::parse::<usize>)) {
                (Some("height"), Some(Ok(h))) => declared_height = Some(h),
                (Some("width"), Some(Ok(w))) => declared_width = Some(w),
                _ => {}
            }
        }

        let mut rows: Vec<&str> = lines
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        while rows.last().is_some_and(|line| line.is_empty()) {
            rows.pop();
        }
        let grid = Grid::from_lines(rows)?;

        if declared_height.is_some_and(|h| h != grid.rows())
            || declared_width.is_some_and(|w| w != grid.cols())
        {
            log::warn!(
                "map header declares {}x{} but data is {}x{}",
                declared_height.map_or("?".to_string(), |h| h.to_string()),
                declared_width.map_or("?".to_string(), |w| w.to_string()),
                grid.rows(),
                grid.cols()
            );
        }

        Ok(Self {
            grid,
            declared_height,
            declared_width,
        })
    }

    /// The parsed grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the map file, keeping only the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Height from the `height N` header line, if present.
    pub fn declared_height(&self) -> Option<usize> {
        self.declared_height
    }

    /// Width from the `width N` header line, if present.
    pub fn declared_width(&self) -> Option<usize> {
        self.declared_width
    }
}

/// Load just the grid from a map file.
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid, MapError> {
    MapFile::load(path).map(MapFile::into_grid)
}
