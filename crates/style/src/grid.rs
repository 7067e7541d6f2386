//! Grid track definitions and per-child placement.
use crate::parsers::{parse_grid_length_str, parse_grid_lengths};
use serde::{Deserialize, Deserializer, Serialize, de};
use trellis_types::Axis;

/// Sizing rule for a single row or column.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum GridLength {
    Absolute(f32),
    Auto,
    /// Proportional share of the space left after absolute and auto tracks.
    Star(f32),
}

impl GridLength {
    pub fn is_star(&self) -> bool {
        matches!(self, GridLength::Star(_))
    }
}

impl<'de> Deserialize<'de> for GridLength {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum GridLengthDef {
            Num(f32),
            Str(String),
            Map {
                #[serde(default)]
                absolute: Option<f32>,
                #[serde(default)]
                star: Option<f32>,
            },
        }

        match GridLengthDef::deserialize(deserializer)? {
            GridLengthDef::Num(v) => Ok(GridLength::Absolute(v)),
            GridLengthDef::Str(s) => parse_grid_length_str(&s).map_err(de::Error::custom),
            GridLengthDef::Map {
                absolute: Some(v),
                star: None,
            } => Ok(GridLength::Absolute(v)),
            GridLengthDef::Map {
                absolute: None,
                star: Some(w),
            } => Ok(GridLength::Star(w)),
            GridLengthDef::Map { .. } => Err(de::Error::custom(
                "grid length map needs exactly one of 'absolute' or 'star'",
            )),
        }
    }
}

fn deserialize_tracks<'de, D>(deserializer: D) -> Result<Vec<GridLength>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TracksDef {
        Shorthand(String),
        List(Vec<GridLength>),
    }

    match TracksDef::deserialize(deserializer)? {
        TracksDef::Shorthand(s) => parse_grid_lengths(&s).map_err(de::Error::custom),
        TracksDef::List(list) => Ok(list),
    }
}

static IMPLICIT_TRACK: [GridLength; 1] = [GridLength::Star(1.0)];

/// Row and column definitions owned by a Grid container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GridDefinition {
    #[serde(deserialize_with = "deserialize_tracks")]
    pub rows: Vec<GridLength>,
    #[serde(deserialize_with = "deserialize_tracks")]
    pub columns: Vec<GridLength>,
    /// Defaults to `6.0`.
    pub row_spacing: f32,
    /// Defaults to `6.0`.
    pub column_spacing: f32,
}

impl Default for GridDefinition {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            columns: Vec::new(),
            row_spacing: 6.0,
            column_spacing: 6.0,
        }
    }
}

impl GridDefinition {
    pub fn new(rows: Vec<GridLength>, columns: Vec<GridLength>) -> Self {
        Self {
            rows,
            columns,
            ..Default::default()
        }
    }

    pub fn with_spacing(mut self, row_spacing: f32, column_spacing: f32) -> Self {
        self.row_spacing = row_spacing;
        self.column_spacing = column_spacing;
        self
    }

    /// Tracks laid out along `axis`: columns for horizontal, rows for
    /// vertical. An empty definition yields one implicit `Star(1)` track.
    pub fn tracks(&self, axis: Axis) -> &[GridLength] {
        let declared = match axis {
            Axis::Horizontal => &self.columns,
            Axis::Vertical => &self.rows,
        };
        if declared.is_empty() {
            &IMPLICIT_TRACK
        } else {
            declared
        }
    }

    pub fn spacing(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.column_spacing,
            Axis::Vertical => self.row_spacing,
        }
    }
}

/// Cell position of a child inside its Grid container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(default, rename_all = "camelCase")]
pub struct GridPlacement {
    pub row: usize,
    pub column: usize,
    pub row_span: usize,
    pub column_span: usize,
}

impl Default for GridPlacement {
    fn default() -> Self {
        Self {
            row: 0,
            column: 0,
            row_span: 1,
            column_span: 1,
        }
    }
}

impl GridPlacement {
    pub fn at(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            ..Default::default()
        }
    }

    pub fn spanning(mut self, row_span: usize, column_span: usize) -> Self {
        self.row_span = row_span;
        self.column_span = column_span;
        self
    }

    pub fn start(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.column,
            Axis::Vertical => self.row,
        }
    }

    pub fn span(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.column_span,
            Axis::Vertical => self.row_span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_definition_has_implicit_star_track() {
        let def = GridDefinition::default();
        assert_eq!(def.tracks(Axis::Vertical), &[GridLength::Star(1.0)]);
        assert_eq!(def.spacing(Axis::Horizontal), 6.0);
    }

    #[test]
    fn test_deserialize_shorthand_and_list() {
        let def: GridDefinition = serde_json::from_str(
            r#"{ "rows": "auto, *, 2*", "columns": [100, "auto", {"star": 3}], "rowSpacing": 0 }"#,
        )
        .unwrap();
        assert_eq!(
            def.rows,
            vec![GridLength::Auto, GridLength::Star(1.0), GridLength::Star(2.0)]
        );
        assert_eq!(
            def.columns,
            vec![GridLength::Absolute(100.0), GridLength::Auto, GridLength::Star(3.0)]
        );
        assert_eq!(def.row_spacing, 0.0);
        assert_eq!(def.column_spacing, 6.0);
    }

    #[test]
    fn test_placement_defaults() {
        let p: GridPlacement = serde_json::from_str(r#"{ "row": 2, "columnSpan": 3 }"#).unwrap();
        assert_eq!(p.row, 2);
        assert_eq!(p.column, 0);
        assert_eq!(p.span(Axis::Horizontal), 3);
        assert_eq!(p.span(Axis::Vertical), 1);
    }
}
