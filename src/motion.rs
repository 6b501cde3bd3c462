/// How far a magnetic button follows the cursor, as a share of the cursor's offset.
pub const MAGNETIC_PULL: f64 = 0.15;
/// Pixels of cursor offset per degree of tilt.
pub const TILT_DIVISOR: f64 = 60.0;
/// Slight zoom applied while the hero shape is tilted.
pub const TILT_SCALE: f64 = 1.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    fn offset(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        let (cx, cy) = self.center();
        (client_x - cx, client_y - cy)
    }
}

/// Translation for a button pulled toward a cursor at (`client_x`, `client_y`).
pub fn magnetic_offset(rect: &Rect, client_x: f64, client_y: f64) -> (f64, f64) {
    let (x, y) = rect.offset(client_x, client_y);
    (x * MAGNETIC_PULL, y * MAGNETIC_PULL)
}

pub fn magnetic_transform(offset: Option<(f64, f64)>) -> String {
    match offset {
        Some((x, y)) if x.is_finite() && y.is_finite() => format!("translate({x}px, {y}px)"),
        _ => "translate(0, 0)".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    /// Degrees around the horizontal axis.
    pub rotate_x: f64,
    /// Degrees around the vertical axis.
    pub rotate_y: f64,
}

impl Tilt {
    pub fn to_css(&self) -> String {
        format!(
            "perspective(1200px) rotateX({}deg) rotateY({}deg) scale3d({TILT_SCALE}, {TILT_SCALE}, {TILT_SCALE})",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Parallax tilt of the hero shape for a cursor inside `container`.
pub fn parallax_tilt(container: &Rect, client_x: f64, client_y: f64) -> Tilt {
    let (x, y) = container.offset(client_x, client_y);
    if !x.is_finite() || !y.is_finite() {
        return Tilt::default();
    }
    Tilt {
        rotate_x: -y / TILT_DIVISOR,
        rotate_y: x / TILT_DIVISOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn test_magnetic_offset() {
        assert_eq!(magnetic_offset(&RECT, 200.0, 100.0), (0.0, 0.0));
        let (x, y) = magnetic_offset(&RECT, 300.0, 0.0);
        assert!((x - 15.0).abs() < 1e-12);
        assert!((y + 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_magnetic_transform() {
        assert_eq!(magnetic_transform(None), "translate(0, 0)");
        assert_eq!(magnetic_transform(Some((1.5, -2.0))), "translate(1.5px, -2px)");
        assert_eq!(magnetic_transform(Some((f64::NAN, 0.0))), "translate(0, 0)");
    }

    #[test]
    fn test_parallax_tilt() {
        let tilt = parallax_tilt(&RECT, 260.0, 40.0);
        assert!((tilt.rotate_x - 1.0).abs() < 1e-12);
        assert!((tilt.rotate_y - 1.0).abs() < 1e-12);
        assert_eq!(parallax_tilt(&RECT, f64::INFINITY, 0.0), Tilt::default());
        assert!(tilt.to_css().starts_with("perspective(1200px) rotateX(1deg) rotateY(1deg)"));
    }
}
