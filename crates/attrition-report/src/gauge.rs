//! Probability gauge with three fixed colour bands.

use serde::Serialize;

/// Lower edge of the medium band, in gauge units (percent).
pub const MEDIUM_RISK_FROM: f64 = 40.0;

/// Lower edge of the high band, in gauge units (percent).
pub const HIGH_RISK_FROM: f64 = 70.0;

pub const GAUGE_TITLE: &str = "Attrition Probability";

pub const BAR_COLOR: &str = "darkblue";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub const ALL: [RiskBand; 3] = [Self::Low, Self::Medium, Self::High];

    /// Band for a gauge value: `[0,40)` low, `[40,70)` medium, `[70,100]` high.
    pub fn for_value(value: f64) -> Self {
        if value < MEDIUM_RISK_FROM {
            Self::Low
        } else if value < HIGH_RISK_FROM {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "lightgreen",
            Self::Medium => "orange",
            Self::High => "red",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "low risk",
            Self::Medium => "medium risk",
            Self::High => "high risk",
        }
    }

    /// Gauge range this band covers.
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::Low => (0.0, MEDIUM_RISK_FROM),
            Self::Medium => (MEDIUM_RISK_FROM, HIGH_RISK_FROM),
            Self::High => (HIGH_RISK_FROM, 100.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub title: &'static str,
    /// Probability × 100.
    pub value: f64,
    pub band: RiskBand,
    pub color: &'static str,
    pub bar_color: &'static str,
    pub axis: (f64, f64),
}

impl Gauge {
    pub fn from_probability(probability: f64) -> Self {
        let value = (probability * 100.0).clamp(0.0, 100.0);
        let band = RiskBand::for_value(value);
        Self {
            title: GAUGE_TITLE,
            value,
            band,
            color: band.color(),
            bar_color: BAR_COLOR,
            axis: (0.0, 100.0),
        }
    }
}
