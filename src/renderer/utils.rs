// ── Letterbox viewport math ───────────────────────────────────────────────────
//
// The map has a fixed logical resolution (16 × 12 tiles). When the window is
// resized the map is scaled uniformly and centred, leaving black bars on the
// spare axis.

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in physical pixels that centres the game view while
/// preserving its aspect ratio (letterbox / pillarbox).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Largest uniformly scaled copy of `logical` that fits inside `physical`,
/// centred on both axes.
///
/// ```text
/// scale = min(physical_w / logical_w, physical_h / logical_h)
/// x     = (physical_w - logical_w * scale) / 2
/// ```
///
/// Returns a zero-sized viewport when either logical dimension is zero.
pub fn letterbox_viewport(physical: (u32, u32), logical: (u32, u32)) -> Viewport {
    let (lw, lh) = logical;
    if lw == 0 || lh == 0 {
        return Viewport { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };
    }

    let pw = physical.0 as f32;
    let ph = physical.1 as f32;
    let lw = lw as f32;
    let lh = lh as f32;

    let scale = (pw / lw).min(ph / lh);

    let width  = lw * scale;
    let height = lh * scale;
    let x      = (pw - width)  / 2.0;
    let y      = (ph - height) / 2.0;

    Viewport { x, y, width, height }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fit_no_offset() {
        let v = letterbox_viewport((512, 384), (512, 384));
        assert_eq!(v, Viewport { x: 0.0, y: 0.0, width: 512.0, height: 384.0 });
    }

    #[test]
    fn integer_scale_2x_no_offset() {
        let v = letterbox_viewport((1024, 768), (512, 384));
        assert_eq!(v, Viewport { x: 0.0, y: 0.0, width: 1024.0, height: 768.0 });
    }

    #[test]
    fn widescreen_window_gets_pillarbox() {
        // 512×384 in 1280×720 → scale = min(2.5, 1.875) = 1.875 → 960×720.
        let v = letterbox_viewport((1280, 720), (512, 384));
        assert!((v.x - 160.0).abs() < 1e-3, "x={}", v.x);
        assert!(v.y.abs() < 1e-3, "y={}", v.y);
        assert!((v.width  - 960.0).abs() < 1e-3, "w={}", v.width);
        assert!((v.height - 720.0).abs() < 1e-3, "h={}", v.height);
    }

    #[test]
    fn tall_window_gets_letterbox() {
        // 512×384 in 512×512 → scale = 1 → bars of 64 above and below.
        let v = letterbox_viewport((512, 512), (512, 384));
        assert!(v.x.abs() < 1e-3);
        assert!((v.y - 64.0).abs() < 1e-3, "y={}", v.y);
    }

    #[test]
    fn zero_logical_size_returns_zero_viewport() {
        let zero = Viewport { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };
        assert_eq!(letterbox_viewport((1280, 720), (0, 384)), zero);
        assert_eq!(letterbox_viewport((1280, 720), (512, 0)), zero);
    }

    #[test]
    fn viewport_never_exceeds_physical_bounds() {
        for (pw, ph) in [(1920u32, 1080u32), (800, 600), (300, 900), (3840, 2160)] {
            let v = letterbox_viewport((pw, ph), (512, 384));
            assert!(v.x >= 0.0 && v.y >= 0.0, "negative offset ({pw}x{ph})");
            assert!(v.x + v.width  <= pw as f32 + 1e-3, "overflows x ({pw}x{ph})");
            assert!(v.y + v.height <= ph as f32 + 1e-3, "overflows y ({pw}x{ph})");
        }
    }
}
