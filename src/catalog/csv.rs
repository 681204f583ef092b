// ABOUTME: Minimal CSV reader for nutrition catalog exports
// ABOUTME: Normalizes dataset headers, splits quoted fields, and skips unusable rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CatalogError;
use meal_core::models::MealCandidate;
use std::io::BufRead;
use tracing::debug;

/// Canonical column a header maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Dish name
    Name,
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrates (g)
    Carbs,
    /// Fat (g)
    Fat,
}

impl Column {
    /// Canonical header name
    #[must_use]
    pub const fn canonical(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
        }
    }

    /// Map a raw header to a canonical column
    ///
    /// Accepts the export headers (`Dish Name`, `Calories (kcal)`, `Protein (g)`,
    /// `Fats (g)`, `Carbohydrates (g)`) and canonical names in any case.
    #[must_use]
    pub fn from_header(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "dish name" | "name" | "dish" => Some(Self::Name),
            "calories (kcal)" | "calories" | "kcal" => Some(Self::Calories),
            "protein (g)" | "protein" => Some(Self::Protein),
            "carbohydrates (g)" | "carbohydrates" | "carbs" => Some(Self::Carbs),
            "fats (g)" | "fat (g)" | "fats" | "fat" => Some(Self::Fat),
            _ => None,
        }
    }
}

/// Column positions resolved from the header line
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    name: usize,
    calories: usize,
    protein: usize,
    carbs: usize,
    fat: usize,
}

impl ColumnIndex {
    fn from_header(line: &str) -> Result<Self, CatalogError> {
        let headers: Vec<Option<Column>> = split_line(line)
            .iter()
            .map(|raw| Column::from_header(raw))
            .collect();

        let position = |column: Column| {
            headers
                .iter()
                .position(|h| *h == Some(column))
                .ok_or(CatalogError::MissingColumn(column.canonical()))
        };

        Ok(Self {
            name: position(Column::Name)?,
            calories: position(Column::Calories)?,
            protein: position(Column::Protein)?,
            carbs: position(Column::Carbs)?,
            fat: position(Column::Fat)?,
        })
    }
}

/// Rows read from a CSV source
#[derive(Debug, Default)]
pub struct ParsedRows {
    /// Meals that passed validation
    pub meals: Vec<MealCandidate>,
    /// Rows dropped for missing, unparseable, negative, or non-finite values
    pub skipped: usize,
}

/// Split one CSV line into fields, honoring double quotes
///
/// A doubled quote inside a quoted field is an escaped quote.
#[must_use]
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

fn parse_number(fields: &[String], index: usize) -> Option<f64> {
    let raw = fields.get(index)?.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok()
}

fn parse_row(fields: &[String], columns: &ColumnIndex) -> Option<MealCandidate> {
    let name = fields.get(columns.name)?.trim();
    if name.is_empty() {
        return None;
    }

    let meal = MealCandidate::new(
        name,
        parse_number(fields, columns.calories)?,
        parse_number(fields, columns.protein)?,
        parse_number(fields, columns.carbs)?,
        parse_number(fields, columns.fat)?,
    );

    meal.has_valid_nutrients().then_some(meal)
}

/// Read every row of a CSV catalog
///
/// # Errors
///
/// Returns an error if the input cannot be read, has no header line, or the
/// header lacks a required column
pub fn read_rows<R: BufRead>(reader: R) -> Result<ParsedRows, CatalogError> {
    let mut lines = reader.lines();

    let header = loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                let line = line.trim_start_matches('\u{feff}');
                if !line.trim().is_empty() {
                    break line.to_owned();
                }
            }
            None => return Err(CatalogError::EmptyInput),
        }
    };
    let columns = ColumnIndex::from_header(&header)?;

    let mut rows = ParsedRows::default();
    for (line_number, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_line(&line);
        if let Some(meal) = parse_row(&fields, &columns) {
            rows.meals.push(meal);
        } else {
            // Header is line 1
            debug!(line = line_number + 2, "Skipping catalog row");
            rows.skipped += 1;
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_line_handles_quotes() {
        let fields = split_line(r#""Rice, Jeera",210,"4.5",40,"say ""hi""""#);
        assert_eq!(fields[0], "Rice, Jeera");
        assert_eq!(fields[2], "4.5");
        assert_eq!(fields[4], r#"say "hi""#);
    }

    #[test]
    fn test_header_aliases() {
        assert_eq!(Column::from_header(" Dish Name "), Some(Column::Name));
        assert_eq!(Column::from_header("FATS (G)"), Some(Column::Fat));
        assert_eq!(Column::from_header("Fibre (g)"), None);
    }

    #[test]
    fn test_negative_row_is_skipped() {
        let data = "name,calories,protein,carbs,fat\nGood,200,10,20,5\nBad,-5,10,20,5\n";
        let rows = read_rows(data.as_bytes()).unwrap();
        assert_eq!(rows.meals.len(), 1);
        assert_eq!(rows.skipped, 1);
    }
}
