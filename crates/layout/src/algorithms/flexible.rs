//! Line breaking, grow/shrink resolution and main-axis justification for
//! the Flex strategy.

use crate::resolve::total_spacing;
use std::ops::Range;
use trellis_style::JustifyContent;

/// One item as seen by the main-axis solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexFactors {
    pub basis: f32,
    pub grow: f32,
    pub shrink: f32,
}

/// Splits items into lines.
///
/// Without wrapping, or with an unbounded main axis, every item lands on a
/// single line. Otherwise a new line starts when the next basis (plus the
/// gap before it) would overflow `available`. A line always holds at least
/// one item.
pub fn break_lines(
    bases: &[f32],
    spacing: f32,
    available: Option<f32>,
    wrap: bool,
) -> Vec<Range<usize>> {
    if bases.is_empty() {
        return Vec::new();
    }
    let limit = match available {
        Some(limit) if wrap => limit,
        _ => return vec![0..bases.len()],
    };

    let mut lines = Vec::new();
    let mut start = 0;
    let mut used = 0.0f32;
    for (i, basis) in bases.iter().enumerate() {
        if i > start && used + spacing + basis > limit {
            lines.push(start..i);
            start = i;
            used = 0.0;
        }
        used += if i > start { spacing + basis } else { *basis };
    }
    lines.push(start..bases.len());
    lines
}

/// Resolves final main-axis sizes for the items of one line.
///
/// Positive free space is shared by grow factor (only when some item can
/// grow). Negative free space is removed in proportion to `shrink * basis`;
/// items that would go below zero are clamped and frozen and the rest of the
/// deficit is spread over the remaining items. With an unbounded main axis
/// every item keeps its basis.
pub fn resolve_line(items: &[FlexFactors], spacing: f32, available: Option<f32>) -> Vec<f32> {
    let mut sizes: Vec<f32> = items.iter().map(|it| it.basis).collect();
    let Some(available) = available else {
        return sizes;
    };

    let used: f32 = sizes.iter().sum::<f32>() + total_spacing(spacing, items.len());
    let free = available - used;

    if free >= 0.0 {
        let total_grow: f32 = items.iter().map(|it| it.grow).sum();
        if total_grow > 0.0 {
            for (size, item) in sizes.iter_mut().zip(items) {
                *size += free * item.grow / total_grow;
            }
        }
        return sizes;
    }

    let mut deficit = -free;
    let mut frozen = vec![false; items.len()];
    loop {
        let total_weight: f32 = items
            .iter()
            .zip(&frozen)
            .filter(|(_, f)| !**f)
            .map(|(it, _)| it.shrink * it.basis)
            .sum();
        if total_weight <= 0.0 || deficit <= 0.0 {
            break;
        }

        let mut clamped_any = false;
        for (i, item) in items.iter().enumerate() {
            if frozen[i] {
                continue;
            }
            let cut = deficit * item.shrink * item.basis / total_weight;
            if item.basis - cut < 0.0 {
                deficit -= item.basis;
                sizes[i] = 0.0;
                frozen[i] = true;
                clamped_any = true;
            }
        }

        if !clamped_any {
            for (i, item) in items.iter().enumerate() {
                if !frozen[i] {
                    sizes[i] = item.basis - deficit * item.shrink * item.basis / total_weight;
                }
            }
            break;
        }
    }
    sizes
}

/// Leading offset and extra gap between items for a line with `free`
/// leftover main-axis space.
pub fn justify(justify: JustifyContent, free: f32, count: usize) -> (f32, f32) {
    if free <= 0.0 || count == 0 {
        return (0.0, 0.0);
    }
    let n = count as f32;
    match justify {
        JustifyContent::Start => (0.0, 0.0),
        JustifyContent::Center => (free / 2.0, 0.0),
        JustifyContent::End => (free, 0.0),
        JustifyContent::SpaceBetween if count > 1 => (0.0, free / (n - 1.0)),
        JustifyContent::SpaceBetween => (0.0, 0.0),
        JustifyContent::SpaceAround => (free / n / 2.0, free / n),
        JustifyContent::SpaceEvenly => (free / (n + 1.0), free / (n + 1.0)),
    }
}
