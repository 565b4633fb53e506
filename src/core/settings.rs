use super::constants::*;
use super::surface::Region;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("malformed settings: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to serialise settings: {0}")]
    Serialise(#[source] serde_json::Error),
    #[error("unknown group side: {0:?}")]
    UnknownSide(String),
}

/// Parameters of one group of concentric curves.
///
/// Value object: replaced wholesale on edits, never mutated mid-frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurveGroupSettings {
    pub speed: f64,
    pub wobble_amount: f64,
    pub wobble_frequency: f64,
    pub radius_scale: f64,
    pub line_width: f64,
    pub circle_count: u32,
    pub radius_step: f64,
    pub individual_frequency: bool,
    pub opacity_fade: f64,
    pub mouse_offset: f64,
    pub sphere_mode: bool,
}

impl Default for CurveGroupSettings {
    fn default() -> Self {
        Self {
            speed: 1.0,
            wobble_amount: 12.0,
            wobble_frequency: 3.0,
            radius_scale: 0.8,
            line_width: 1.5,
            circle_count: 8,
            radius_step: 18.0,
            individual_frequency: false,
            opacity_fade: 0.6,
            mouse_offset: 40.0,
            sphere_mode: false,
        }
    }
}

#[inline]
fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

impl CurveGroupSettings {
    /// Default preset for the right-hand group.
    pub fn right_default() -> Self {
        Self {
            speed: 0.7,
            wobble_frequency: 5.0,
            ..Self::default()
        }
    }

    /// Copy with every field forced into its documented range.
    pub fn sanitized(&self) -> Self {
        let d = Self::default();
        Self {
            speed: clamp_or(self.speed, 0.0, SPEED_MAX, d.speed),
            wobble_amount: clamp_or(self.wobble_amount, 0.0, WOBBLE_AMOUNT_MAX, d.wobble_amount),
            wobble_frequency: clamp_or(
                self.wobble_frequency,
                WOBBLE_FREQUENCY_MIN,
                WOBBLE_FREQUENCY_MAX,
                d.wobble_frequency,
            ),
            radius_scale: clamp_or(
                self.radius_scale,
                RADIUS_SCALE_MIN,
                RADIUS_SCALE_MAX,
                d.radius_scale,
            ),
            line_width: clamp_or(self.line_width, 0.0, LINE_WIDTH_MAX, d.line_width),
            circle_count: self.circle_count.clamp(CIRCLE_COUNT_MIN, CIRCLE_COUNT_MAX),
            radius_step: clamp_or(
                self.radius_step,
                -RADIUS_STEP_MAX,
                RADIUS_STEP_MAX,
                d.radius_step,
            ),
            individual_frequency: self.individual_frequency,
            opacity_fade: clamp_or(self.opacity_fade, 0.0, 1.0, d.opacity_fade),
            mouse_offset: clamp_or(self.mouse_offset, 0.0, MOUSE_OFFSET_MAX, d.mouse_offset),
            sphere_mode: self.sphere_mode,
        }
    }

    /// Wobble frequency rounded to a whole number of cycles per revolution.
    #[inline]
    pub fn base_frequency(&self) -> u32 {
        self.wobble_frequency.round().max(WOBBLE_FREQUENCY_MIN) as u32
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Single,
    #[default]
    Dual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupSide {
    Left,
    Right,
}

impl std::str::FromStr for GroupSide {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" | "Left" => Ok(GroupSide::Left),
            "right" | "Right" => Ok(GroupSide::Right),
            other => Err(SettingsError::UnknownSide(other.to_string())),
        }
    }
}

/// The full persisted settings graph: two groups plus the frame-rate cap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppSettings {
    pub left: CurveGroupSettings,
    pub right: CurveGroupSettings,
    pub target_fps: u32,
    pub layout: Layout,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            left: CurveGroupSettings::default(),
            right: CurveGroupSettings::right_default(),
            target_fps: DEFAULT_TARGET_FPS,
            layout: Layout::default(),
        }
    }
}

/// One entry of the per-frame render list.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderGroup {
    pub side: GroupSide,
    pub settings: CurveGroupSettings,
    pub region: Region,
}

impl AppSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let parsed: AppSettings = serde_json::from_str(json).map_err(SettingsError::Parse)?;
        Ok(parsed.sanitized())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string(self).map_err(SettingsError::Serialise)
    }

    pub fn sanitized(&self) -> Self {
        Self {
            left: self.left.sanitized(),
            right: self.right.sanitized(),
            target_fps: self.target_fps.clamp(TARGET_FPS_MIN, TARGET_FPS_MAX),
            layout: self.layout,
        }
    }

    pub fn group(&self, side: GroupSide) -> &CurveGroupSettings {
        match side {
            GroupSide::Left => &self.left,
            GroupSide::Right => &self.right,
        }
    }

    /// Copy with one group replaced.
    pub fn with_group(&self, side: GroupSide, group: CurveGroupSettings) -> Self {
        let mut next = self.clone();
        match side {
            GroupSide::Left => next.left = group.sanitized(),
            GroupSide::Right => next.right = group.sanitized(),
        }
        next
    }

    /// Ordered (side, settings, region) list for a surface of the given size.
    pub fn render_groups(&self, width: f64, height: f64) -> SmallVec<[RenderGroup; 2]> {
        match self.layout {
            Layout::Single => smallvec![RenderGroup {
                side: GroupSide::Left,
                settings: self.left.clone(),
                region: Region::new(0.0, 0.0, width, height),
            }],
            Layout::Dual => {
                let half = width * 0.5;
                smallvec![
                    RenderGroup {
                        side: GroupSide::Left,
                        settings: self.left.clone(),
                        region: Region::new(0.0, 0.0, half, height),
                    },
                    RenderGroup {
                        side: GroupSide::Right,
                        settings: self.right.clone(),
                        region: Region::new(half, 0.0, width - half, height),
                    },
                ]
            }
        }
    }
}
