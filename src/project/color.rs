use serde::Serialize;

/// One band of the heatmap gradient. `rank` orders bands from coldest to warmest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorBand {
    pub rank: u8,
    pub label: &'static str,
    pub hex: &'static str,
}

const BANDS: [ColorBand; 11] = [
    ColorBand { rank: 0, label: "0", hex: "#7f1d1d" },
    ColorBand { rank: 1, label: "≤10", hex: "#b91c1c" },
    ColorBand { rank: 2, label: "≤20", hex: "#dc2626" },
    ColorBand { rank: 3, label: "≤30", hex: "#ea580c" },
    ColorBand { rank: 4, label: "≤40", hex: "#f97316" },
    ColorBand { rank: 5, label: "≤50", hex: "#f59e0b" },
    ColorBand { rank: 6, label: "≤60", hex: "#eab308" },
    ColorBand { rank: 7, label: "≤70", hex: "#a3e635" },
    ColorBand { rank: 8, label: "≤80", hex: "#84cc16" },
    ColorBand { rank: 9, label: "≤90", hex: "#22c55e" },
    ColorBand { rank: 10, label: ">90", hex: "#15803d" },
];

pub fn bands() -> &'static [ColorBand] {
    &BANDS
}

/// Band for `score`. Zero (and anything below) has its own band; no interpolation.
pub fn color_for(score: i64) -> ColorBand {
    if score <= 0 {
        return BANDS[0];
    }
    let index = ((score.min(100) + 9) / 10).min(BANDS.len() as i64 - 1);
    BANDS[index as usize]
}
