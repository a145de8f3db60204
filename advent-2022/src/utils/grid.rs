//! Rectangular character grids

use advent_solver::ParseError;

/// Split `input` into byte rows of equal length
///
/// Blank trailing lines are ignored. Fails on empty input or when a row's
/// length differs from the first row's.
pub fn parse_rows(input: &str) -> Result<Vec<&[u8]>, ParseError> {
    let rows: Vec<&[u8]> = input.trim_end().lines().map(str::as_bytes).collect();

    let width = match rows.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => return Err(ParseError::MissingData("empty grid".into())),
    };

    if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
        return Err(ParseError::InvalidFormat(format!(
            "(line {}) expected {} columns, found {}",
            idx + 1,
            width,
            row.len()
        )));
    }

    Ok(rows)
}
