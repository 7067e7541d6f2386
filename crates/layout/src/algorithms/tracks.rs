//! Row/column size resolution for the Grid strategy.
//!
//! The solver is pure: it sees track definitions, the available extent and
//! the natural extents of the children placed on the axis, and produces one
//! size per track.

use crate::resolve::total_spacing;
use trellis_style::GridLength;

/// A child's footprint along the axis being solved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackItem {
    pub start: usize,
    pub span: usize,
    pub natural: f32,
}

impl TrackItem {
    pub fn new(start: usize, span: usize, natural: f32) -> Self {
        Self {
            start,
            span,
            natural,
        }
    }

    fn tracks(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.span
    }
}

/// A dedicated solver for one axis of a grid.
pub struct TrackSolver<'a> {
    tracks: &'a [GridLength],
    spacing: f32,
}

impl<'a> TrackSolver<'a> {
    pub fn new(tracks: &'a [GridLength], spacing: f32) -> Self {
        Self { tracks, spacing }
    }

    /// Describes the first malformed track, if any.
    pub fn validate(&self) -> Result<(), String> {
        for (i, track) in self.tracks.iter().enumerate() {
            match *track {
                GridLength::Absolute(v) if !v.is_finite() || v < 0.0 => {
                    return Err(format!("track {} has invalid absolute size {}", i, v));
                }
                GridLength::Star(w) if !w.is_finite() || w <= 0.0 => {
                    return Err(format!("track {} has non-positive star weight {}", i, w));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Checks that `item` fits inside the declared tracks.
    pub fn check_item(&self, item: &TrackItem) -> Result<(), String> {
        if item.span == 0 {
            return Err("span must be at least 1".to_string());
        }
        if item.start + item.span > self.tracks.len() {
            return Err(format!(
                "tracks {}..{} exceed the {} defined",
                item.start,
                item.start + item.span,
                self.tracks.len()
            ));
        }
        Ok(())
    }

    /// Resolves track sizes.
    ///
    /// It handles, in order:
    /// 1. Absolute tracks (verbatim)
    /// 2. Auto tracks (largest single-span item)
    /// 3. Star tracks when `available` is `None` (sized to content)
    /// 4. Multi-span items, whose excess goes into their Auto tracks
    /// 5. Star tracks when `available` is bounded (share of the remainder)
    pub fn resolve(&self, available: Option<f32>, items: &[TrackItem]) -> Vec<f32> {
        let count = self.tracks.len();
        let mut sizes = vec![0.0f32; count];

        for (i, track) in self.tracks.iter().enumerate() {
            if let GridLength::Absolute(v) = *track {
                sizes[i] = v;
            }
        }

        for item in items.iter().filter(|it| it.span == 1) {
            if let Some(GridLength::Auto) = self.tracks.get(item.start) {
                sizes[item.start] = sizes[item.start].max(item.natural);
            }
        }

        if available.is_none() {
            self.size_stars_to_content(&mut sizes, items);
        }

        self.distribute_spanning_excess(&mut sizes, items, available.is_some());

        if let Some(available) = available {
            let fixed: f32 = self
                .tracks
                .iter()
                .zip(&sizes)
                .filter(|(t, _)| !t.is_star())
                .map(|(_, s)| *s)
                .sum();
            let remaining = (available - fixed - total_spacing(self.spacing, count)).max(0.0);
            let total_weight: f32 = self
                .tracks
                .iter()
                .filter_map(|t| match t {
                    GridLength::Star(w) => Some(*w),
                    _ => None,
                })
                .sum();
            if total_weight > 0.0 {
                for (i, track) in self.tracks.iter().enumerate() {
                    if let GridLength::Star(w) = *track {
                        sizes[i] = remaining * w / total_weight;
                    }
                }
            }
        }

        sizes
    }

    fn size_stars_to_content(&self, sizes: &mut [f32], items: &[TrackItem]) {
        let mut unit = 0.0f32;
        for item in items.iter().filter(|it| it.span == 1) {
            if let Some(GridLength::Star(w)) = self.tracks.get(item.start) {
                unit = unit.max(item.natural / w);
            }
        }
        for (i, track) in self.tracks.iter().enumerate() {
            if let GridLength::Star(w) = *track {
                sizes[i] = unit * w;
            }
        }
    }

    fn distribute_spanning_excess(&self, sizes: &mut [f32], items: &[TrackItem], stars_pending: bool) {
        let mut spanning: Vec<&TrackItem> = items.iter().filter(|it| it.span > 1).collect();
        spanning.sort_by_key(|it| it.span);

        for item in spanning {
            let range = item.tracks();
            if range.end > sizes.len() {
                continue;
            }
            let covered: f32 = range
                .clone()
                .filter(|&i| !(stars_pending && self.tracks[i].is_star()))
                .map(|i| sizes[i])
                .sum::<f32>()
                + total_spacing(self.spacing, item.span);
            let excess = item.natural - covered;
            if excess <= 0.0 {
                continue;
            }

            let autos: Vec<usize> = range
                .filter(|&i| matches!(self.tracks[i], GridLength::Auto))
                .collect();
            if autos.is_empty() {
                continue;
            }
            let current: f32 = autos.iter().map(|&i| sizes[i]).sum();
            if current > 0.0 {
                for &i in &autos {
                    sizes[i] += excess * sizes[i] / current;
                }
            } else {
                let share = excess / autos.len() as f32;
                for &i in &autos {
                    sizes[i] += share;
                }
            }
        }
    }
}

/// Start offset of each track, given resolved sizes and the gap between
/// tracks.
pub fn track_offsets(origin: f32, sizes: &[f32], spacing: f32) -> Vec<f32> {
    let mut offsets = Vec::with_capacity(sizes.len());
    let mut cursor = origin;
    for size in sizes {
        offsets.push(cursor);
        cursor += size + spacing;
    }
    offsets
}

/// Extent covered by `span` tracks starting at `start`, including the
/// gaps between them.
pub fn spanned_extent(sizes: &[f32], start: usize, span: usize, spacing: f32) -> f32 {
    let end = (start + span).min(sizes.len());
    let tracks = end.saturating_sub(start);
    sizes[start.min(end)..end].iter().sum::<f32>() + total_spacing(spacing, tracks)
}
