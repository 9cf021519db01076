use crate::api::Subject;
use crate::constants::{DATA_ROW, FIRST_COLUMN, HEADERS, HEADER_ROW};
use crate::errors::{Result, SyllabusError};
use crate::utils::{join_names, join_titles};
use csv::{ReaderBuilder, WriterBuilder};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// A spreadsheet row: one cell per header column.
pub type Row = Vec<String>;

/// A 2-D addressable sink. Rows and columns are 1-based.
pub trait Grid {
    /// Write `values` as a block whose top-left cell is (`row`, `column`).
    /// Every row of the block must have the same width.
    fn set_values(&mut self, row: usize, column: usize, values: &[Row]) -> Result<()>;

    /// Read a `height` x `width` block. Cells never written read as "".
    fn get_values(
        &self,
        row: usize,
        column: usize,
        height: usize,
        width: usize,
    ) -> Result<Vec<Row>>;
}

fn check_origin(row: usize, column: usize) -> Result<()> {
    if row == 0 || column == 0 {
        return Err(SyllabusError::InvalidCell { row, column });
    }
    Ok(())
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryGrid {
    cells: Vec<Row>,
}

impl MemoryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: Vec<Row>) -> Self {
        MemoryGrid { cells }
    }

    pub fn rows(&self) -> &[Row] {
        &self.cells
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl Grid for MemoryGrid {
    fn set_values(&mut self, row: usize, column: usize, values: &[Row]) -> Result<()> {
        check_origin(row, column)?;
        let width = match values.first() {
            Some(first) => first.len(),
            None => return Err(SyllabusError::EmptyResult),
        };
        if let Some((offset, ragged)) = values.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(SyllabusError::RaggedRows {
                row: row + offset,
                expected: width,
                found: ragged.len(),
            });
        }

        let top = row - 1;
        let left = column - 1;
        if self.cells.len() < top + values.len() {
            self.cells.resize_with(top + values.len(), Vec::new);
        }
        for (target, source) in self.cells[top..].iter_mut().zip(values) {
            if target.len() < left + width {
                target.resize(left + width, String::new());
            }
            target[left..left + width].clone_from_slice(source);
        }
        Ok(())
    }

    fn get_values(
        &self,
        row: usize,
        column: usize,
        height: usize,
        width: usize,
    ) -> Result<Vec<Row>> {
        check_origin(row, column)?;
        let rows = (row - 1..row - 1 + height)
            .map(|r| {
                (column - 1..column - 1 + width)
                    .map(|c| {
                        self.cells
                            .get(r)
                            .and_then(|cells| cells.get(c))
                            .cloned()
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();
        Ok(rows)
    }
}

/// A sheet persisted as a CSV file.
///
/// Existing cells are loaded on open and every write rewrites the whole
/// file, so cells outside a write keep their previous contents.
#[derive(Debug)]
pub struct CsvSheet {
    path: PathBuf,
    grid: MemoryGrid,
}

impl CsvSheet {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut cells = Vec::new();
        if path.exists() {
            let mut reader = ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_path(&path)?;
            for record in reader.records() {
                cells.push(record?.iter().map(str::to_string).collect());
            }
        }
        debug!("opened sheet {} with {} rows", path.display(), cells.len());
        Ok(CsvSheet {
            path,
            grid: MemoryGrid::from_rows(cells),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }

    /// Write the grid next to the sheet, then rename it over the sheet so a
    /// failed write never leaves a truncated file behind.
    fn save(&self) -> Result<()> {
        let staging = self.staging_path();
        let width = self.grid.width();
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&staging)?;
        for row in self.grid.rows() {
            let padding = std::iter::repeat("").take(width - row.len());
            writer.write_record(row.iter().map(String::as_str).chain(padding))?;
        }
        writer.flush()?;
        drop(writer);
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl Grid for CsvSheet {
    fn set_values(&mut self, row: usize, column: usize, values: &[Row]) -> Result<()> {
        self.grid.set_values(row, column, values)?;
        self.save()
    }

    fn get_values(
        &self,
        row: usize,
        column: usize,
        height: usize,
        width: usize,
    ) -> Result<Vec<Row>> {
        self.grid.get_values(row, column, height, width)
    }
}

pub fn header_row() -> Row {
    HEADERS.iter().map(|header| header.to_string()).collect()
}

/// Flatten a subject into its spreadsheet row, in header order.
pub fn project(subject: &Subject) -> Row {
    let metadata = &subject.metadata;
    vec![
        subject.code.clone(),
        subject.name.clone(),
        subject.description.clone(),
        metadata.enrollment_grade.clone(),
        metadata.credit.clone(),
        metadata.quarters.join(" "),
        metadata.subject_requirement.clone(),
        metadata.teaching_method.clone(),
        metadata.evaluation_system.clone(),
        join_names(&metadata.prerequisite_recommended_subjects),
        join_names(&metadata.prerequisite_subjects),
        join_names(&metadata.next_recommended_subjects),
        metadata.objective.clone(),
        join_titles(&metadata.text_books),
        metadata.learning_outside_class.clone(),
        metadata.special_notes.clone(),
        subject.movie_url.clone(),
    ]
}

pub fn set_headers(grid: &mut impl Grid) -> Result<()> {
    grid.set_values(HEADER_ROW, FIRST_COLUMN, &[header_row()])
}

/// Write one row per subject below the header. Refuses an empty list.
pub fn write_rows(grid: &mut impl Grid, subjects: &[Subject]) -> Result<usize> {
    if subjects.is_empty() {
        return Err(SyllabusError::EmptyResult);
    }
    let rows: Vec<Row> = subjects.iter().map(project).collect();
    grid.set_values(DATA_ROW, FIRST_COLUMN, &rows)?;
    info!("wrote {} rows", rows.len());
    Ok(rows.len())
}
