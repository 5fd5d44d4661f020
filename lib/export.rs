//! Plain-text tables of sampled data for consumption by external plotting
//! tools.
//!
//! Every table starts with a header row naming its columns, followed by one row
//! per sample.

use std::{
    fs,
    io::{ BufWriter, Write },
    path::Path,
};
use ndarray as nd;
use crate::{
    error::{ ExportError, LengthError },
    sample::Cloud,
};

pub type ExportResult<T> = Result<T, ExportError>;

/// Column separator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Delimiter {
    /// `,`
    Comma,
    /// `\t`
    Tab,
}

impl Delimiter {
    /// Pick a delimiter from a file extension: `.tsv` and `.tab` files are
    /// tab-separated, everything else is comma-separated.
    pub fn for_path<P>(path: P) -> Self
    where P: AsRef<Path>
    {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("tsv") | Some("tab") => Self::Tab,
            _ => Self::Comma,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Comma => ",",
            Self::Tab => "\t",
        }
    }
}

/// Write a table whose columns are given as arrays of equal length.
pub fn write_table<W>(
    writer: &mut W,
    delim: Delimiter,
    header: &[&str],
    columns: &[nd::ArrayView1<f64>],
) -> ExportResult<()>
where W: Write
{
    LengthError::check_len(header.len(), columns.len())?;
    if let Some(first) = columns.first() {
        columns.iter().try_for_each(|col| LengthError::check(first, col))?;
    }
    let sep = delim.as_str();
    writeln!(writer, "{}", header.join(sep))?;
    let nrows = columns.first().map(|col| col.len()).unwrap_or(0);
    for i in 0..nrows {
        let row: Vec<String>
            = columns.iter().map(|col| col[i].to_string()).collect();
        writeln!(writer, "{}", row.join(sep))?;
    }
    Ok(())
}

/// Write two-dimensional data in long form: one row per grid point `(x[i],
/// y[j])`, with the coordinates in columns `x` and `y` followed by one column
/// per array in `grids`, each indexed as `[i, j]`.
pub fn write_grid<W>(
    writer: &mut W,
    delim: Delimiter,
    x: nd::ArrayView1<f64>,
    y: nd::ArrayView1<f64>,
    names: &[&str],
    grids: &[nd::ArrayView2<f64>],
) -> ExportResult<()>
where W: Write
{
    LengthError::check_len(names.len(), grids.len())?;
    for grid in grids.iter() {
        let (nx, ny) = grid.dim();
        LengthError::check_len(x.len(), nx)?;
        LengthError::check_len(y.len(), ny)?;
    }
    let sep = delim.as_str();
    let header: Vec<&str>
        = ["x", "y"].into_iter().chain(names.iter().copied()).collect();
    writeln!(writer, "{}", header.join(sep))?;
    for (i, xi) in x.iter().enumerate() {
        for (j, yj) in y.iter().enumerate() {
            let row: Vec<String>
                = [*xi, *yj].into_iter()
                .chain(grids.iter().map(|grid| grid[[i, j]]))
                .map(|v| v.to_string())
                .collect();
            writeln!(writer, "{}", row.join(sep))?;
        }
    }
    Ok(())
}

// axis labels for the position columns of a cloud
fn axis_names(dims: usize) -> Vec<String> {
    match dims {
        1 => vec!["x".into()],
        2 => vec!["x".into(), "y".into()],
        3 => vec!["x".into(), "y".into(), "z".into()],
        _ => (0..dims).map(|k| format!("x{}", k)).collect(),
    }
}

/// Write the accepted points of a rejection sampling run, one row per point:
/// the position coordinates followed by the accepted height
/// ([`CloudPoint::y`][crate::sample::CloudPoint::y]) in a `y_draw` column.
pub fn write_cloud<W, const D: usize>(
    writer: &mut W,
    delim: Delimiter,
    cloud: &Cloud<D>,
) -> ExportResult<()>
where W: Write
{
    let sep = delim.as_str();
    let mut header = axis_names(D);
    header.push("y_draw".into());
    writeln!(writer, "{}", header.join(sep))?;
    for point in cloud.points() {
        let row: Vec<String>
            = point.x.iter().chain(std::iter::once(&point.y))
            .map(|v| v.to_string())
            .collect();
        writeln!(writer, "{}", row.join(sep))?;
    }
    Ok(())
}

/// Create a buffered file for writing, creating any missing parent
/// directories.
pub fn create<P>(path: P) -> ExportResult<BufWriter<fs::File>>
where P: AsRef<Path>
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() { fs::create_dir_all(parent)?; }
    }
    Ok(BufWriter::new(fs::File::create(path)?))
}

/// Like [`write_table`], but write to a new file at `path`, choosing the
/// delimiter with [`Delimiter::for_path`].
pub fn write_table_file<P>(
    path: P,
    header: &[&str],
    columns: &[nd::ArrayView1<f64>],
) -> ExportResult<()>
where P: AsRef<Path>
{
    let delim = Delimiter::for_path(&path);
    let mut out = create(&path)?;
    write_table(&mut out, delim, header, columns)?;
    out.flush()?;
    Ok(())
}

/// Like [`write_grid`], but write to a new file at `path`, choosing the
/// delimiter with [`Delimiter::for_path`].
pub fn write_grid_file<P>(
    path: P,
    x: nd::ArrayView1<f64>,
    y: nd::ArrayView1<f64>,
    names: &[&str],
    grids: &[nd::ArrayView2<f64>],
) -> ExportResult<()>
where P: AsRef<Path>
{
    let delim = Delimiter::for_path(&path);
    let mut out = create(&path)?;
    write_grid(&mut out, delim, x, y, names, grids)?;
    out.flush()?;
    Ok(())
}

/// Like [`write_cloud`], but write to a new file at `path`, choosing the
/// delimiter with [`Delimiter::for_path`].
pub fn write_cloud_file<P, const D: usize>(path: P, cloud: &Cloud<D>)
    -> ExportResult<()>
where P: AsRef<Path>
{
    let delim = Delimiter::for_path(&path);
    let mut out = create(&path)?;
    write_cloud(&mut out, delim, cloud)?;
    out.flush()?;
    Ok(())
}
