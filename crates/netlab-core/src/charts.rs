//! Static data behind the two comparison charts.
//!
//! The charts are declarative: fixed slices, fixed series, fixed titles.
//! Switching a chart's kind only changes how the same numbers are drawn.

use crate::theme::Rgb;

/// A labeled pie slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub label: &'static str,
    pub value: u32,
    pub color: Rgb,
}

/// A named series over [`TECHNIQUE_CATEGORIES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Series {
    pub name: &'static str,
    pub values: [u32; 4],
    pub color: Rgb,
}

pub const HEADER_CHART_TITLE: &str = "Header Sizes (Bytes)";

pub const HEADER_SLICES: [Slice; 3] = [
    Slice {
        label: "TCP Header",
        value: 20,
        color: Rgb(0x0d, 0x6e, 0xfd),
    },
    Slice {
        label: "UDP Header",
        value: 8,
        color: Rgb(0x19, 0x87, 0x54),
    },
    Slice {
        label: "ICMP Header",
        value: 8,
        color: Rgb(0xff, 0xc1, 0x07),
    },
];

/// Hole size of the doughnut as a fraction of the outer radius.
pub const DOUGHNUT_INNER_RATIO: f64 = 0.5;

pub const TECHNIQUE_CHART_TITLE: &str = "Scan Technique Comparison";
pub const TECHNIQUE_CHART_SUBTITLE: &str = "Speed vs Stealth";
pub const TECHNIQUE_AXIS_TITLE: &str = "Score (0-100)";
pub const TECHNIQUE_AXIS_MAX: u32 = 100;

pub const TECHNIQUE_CATEGORIES: [&str; 4] = ["TCP SYN", "UDP Scan", "NULL/Stealth", "ACK Scan"];

pub const TECHNIQUE_SERIES: [Series; 2] = [
    Series {
        name: "Speed",
        values: [95, 30, 70, 90],
        color: Rgb(0x33, 0x7a, 0xb7),
    },
    Series {
        name: "Stealth",
        values: [20, 60, 95, 50],
        color: Rgb(0xd9, 0x53, 0x4f),
    },
];

/// How the header-sizes chart is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderChartKind {
    Pie,
    #[default]
    Doughnut,
}

impl HeaderChartKind {
    pub fn next(self) -> Self {
        match self {
            HeaderChartKind::Pie => HeaderChartKind::Doughnut,
            HeaderChartKind::Doughnut => HeaderChartKind::Pie,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeaderChartKind::Pie => "Pie",
            HeaderChartKind::Doughnut => "Doughnut",
        }
    }
}

/// How the technique chart is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TechniqueChartKind {
    /// Vertical bars, one group per category.
    #[default]
    Column,
    /// Horizontal bars.
    Bar,
}

impl TechniqueChartKind {
    pub fn next(self) -> Self {
        match self {
            TechniqueChartKind::Column => TechniqueChartKind::Bar,
            TechniqueChartKind::Bar => TechniqueChartKind::Column,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TechniqueChartKind::Column => "Column",
            TechniqueChartKind::Bar => "Bar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_slices_are_the_fixed_byte_counts() {
        let values: Vec<u32> = HEADER_SLICES.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![20, 8, 8]);
        assert_eq!(HEADER_SLICES.iter().map(|s| s.value).sum::<u32>(), 36);
    }

    #[test]
    fn test_technique_scores_stay_on_the_axis() {
        for series in &TECHNIQUE_SERIES {
            for value in series.values {
                assert!(value <= TECHNIQUE_AXIS_MAX);
            }
        }
    }

    #[test]
    fn test_kind_cycles_return_to_default() {
        assert_eq!(HeaderChartKind::default().next().next(), HeaderChartKind::default());
        assert_eq!(
            TechniqueChartKind::default().next().next(),
            TechniqueChartKind::default()
        );
    }

    #[test]
    fn test_doughnut_is_the_default_header_kind() {
        assert_eq!(HeaderChartKind::default(), HeaderChartKind::Doughnut);
        assert_eq!(TechniqueChartKind::default(), TechniqueChartKind::Column);
    }
}
