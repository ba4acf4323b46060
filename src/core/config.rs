//! Chart configuration object + fluent builder.

use crate::core::{color::Palette, error::ConfigError};

/// Immutable parameters handed to the chart renderers.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub subtitle: Option<String>,
    /// Value at the bottom of the plot area.
    pub y_min: f64,
    /// Value at the top of the plot area.
    pub y_max: f64,
    pub x_chars: usize,
    pub y_chars: usize,
    pub palette: Palette,
}

impl ChartConfig {
    #[inline]
    pub fn builder(x_chars: usize, y_chars: usize) -> ChartConfigBuilder {
        ChartConfigBuilder::new(x_chars, y_chars)
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug)]
pub struct ChartConfigBuilder {
    x_chars: usize,
    y_chars: usize,
    title: Option<String>,
    subtitle: Option<String>,
    y_min: Option<f64>,
    y_max: Option<f64>,
    palette: Option<Palette>,
}

impl ChartConfigBuilder {
    pub(crate) fn new(x_chars: usize, y_chars: usize) -> Self {
        Self {
            x_chars,
            y_chars,
            title: None,
            subtitle: None,
            y_min: None,
            y_max: None,
            palette: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn subtitle(mut self, s: impl Into<String>) -> Self {
        self.subtitle = Some(s.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn y_range(mut self, r: std::ops::RangeInclusive<f64>) -> Self {
        self.y_min = Some(*r.start());
        self.y_max = Some(*r.end());
        self
    }
    #[inline]
    #[must_use]
    pub fn palette(mut self, p: Palette) -> Self {
        self.palette = Some(p);
        self
    }

    pub fn build(self) -> Result<ChartConfig, ConfigError> {
        let y_min = self.y_min.ok_or(ConfigError::MissingField("y_min"))?;
        let y_max = self.y_max.ok_or(ConfigError::MissingField("y_max"))?;
        if y_min >= y_max || !y_min.is_finite() || !y_max.is_finite() {
            return Err(ConfigError::InvalidRange {
                low: y_min,
                high: y_max,
            });
        }
        Ok(ChartConfig {
            title: self.title.unwrap_or_default(),
            subtitle: self.subtitle,
            y_min,
            y_max,
            x_chars: self.x_chars,
            y_chars: self.y_chars,
            palette: self.palette.unwrap_or_else(Palette::plain),
        })
    }
}
