use super::constants::STROKE_RGB;
use super::harmonics::HarmonicAllocator;
use super::settings::CurveGroupSettings;
use super::surface::{DrawSurface, Region, Rgba};
use super::wobble::{curve_base_radius, CurveShape};
use glam::DVec2;

/// Direction and relative strength of the pointer's pull on a group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPull {
    pub direction: DVec2,
    /// Pointer distance over the region's half-diagonal. Not clamped: a
    /// pointer outside a split region may push this slightly above 1.
    pub dist_factor: f64,
}

pub fn pointer_pull(region: &Region, pointer: DVec2) -> PointerPull {
    let to_pointer = pointer - region.center();
    let dist = to_pointer.length();
    let max_dist = region.half_diagonal();
    let direction = if dist > 0.0 {
        to_pointer / dist
    } else {
        DVec2::ZERO
    };
    let dist_factor = if max_dist > 0.0 { dist / max_dist } else { 0.0 };
    PointerPull {
        direction,
        dist_factor,
    }
}

/// Lateral offset of curve `c`; zero for the outermost curve and for single-curve groups.
#[inline]
pub fn curve_offset(c: u32, n: u32, mouse_offset: f64, pull: &PointerPull) -> DVec2 {
    let fraction = if n > 1 {
        c as f64 / (n - 1) as f64
    } else {
        0.0
    };
    pull.direction * (fraction * mouse_offset * pull.dist_factor)
}

#[inline]
pub fn curve_opacity(c: u32, n: u32, opacity_fade: f64) -> f64 {
    1.0 - (c as f64 / n.max(1) as f64) * opacity_fade
}

/// Draw every curve of one group into `region`, outermost first.
pub fn draw_group<S: DrawSurface + ?Sized>(
    surface: &mut S,
    region: &Region,
    settings: &CurveGroupSettings,
    time: f64,
    pointer: DVec2,
) {
    let n = settings.circle_count.max(1);
    let allocator =
        HarmonicAllocator::new(settings.base_frequency(), n, settings.individual_frequency);
    let base_radius = region.min_half_extent() * settings.radius_scale;
    let center = region.center();
    let pull = pointer_pull(region, pointer);

    let (step2, step3) = allocator.steps();
    log::trace!("[loop] drawing {} curves, steps {}/{}", allocator.count(), step2, step3);

    for c in 0..allocator.count() {
        let radius = curve_base_radius(base_radius, c, settings.radius_step, settings.sphere_mode);
        let shape = CurveShape::new(radius, settings.wobble_amount, allocator.curve(c));
        let offset = curve_offset(c, n, settings.mouse_offset, &pull);

        surface.begin_path();
        let mut points = shape.points(center, offset, time);
        if let Some(first) = points.next() {
            surface.move_to(first.x, first.y);
        }
        for p in points {
            surface.line_to(p.x, p.y);
        }
        surface.close_path();
        surface.set_stroke(
            Rgba::new(STROKE_RGB, curve_opacity(c, n, settings.opacity_fade)),
            settings.line_width,
        );
        surface.stroke();
    }
}
