use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::complex::Complex;
use crate::error::CoreError;

/// Height of the complex-plane window, in plane units, shown at `zoom = 1`.
pub const VERTICAL_EXTENT: f64 = 3.0;

/// Center and magnification of the fractal view on a `width × height` canvas.
///
/// Pixel `(px, py)` maps to
///
/// ```text
/// scale = VERTICAL_EXTENT / (zoom * height)
/// re    = (px - width / 2) * scale * aspect + center.re
/// im    = (py - height / 2) * scale + center.im
/// ```
///
/// Pixel y grows downward together with the imaginary part, so the image is
/// not flipped about the real axis. The mapping is shared by rendering and by
/// [`zoom_view`](Self::zoom_view), which keeps the two exactly consistent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Complex-plane coordinate shown at the center of the canvas.
    pub center: Complex,

    /// Magnification factor. Expected to be `> 0`.
    pub zoom: f64,

    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,
}

impl Viewport {
    pub const DEFAULT_CENTER: Complex = Complex { re: -0.7, im: 0.0 };
    pub const DEFAULT_ZOOM: f64 = 1.0;

    /// The start-up view: the whole set, centred slightly left of the origin.
    ///
    /// Dimensions are not validated here; a zero-height canvas simply has no
    /// pixels to map.
    pub fn default_view(width: u32, height: u32) -> Self {
        Self {
            center: Self::DEFAULT_CENTER,
            zoom: Self::DEFAULT_ZOOM,
            width,
            height,
        }
    }

    /// Create a viewport with explicit parameters, rejecting degenerate ones.
    pub fn new(center: Complex, zoom: f64, width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidViewport {
                reason: format!("dimensions must be > 0, got {width}×{height}"),
            });
        }
        if zoom <= 0.0 || !zoom.is_finite() {
            return Err(CoreError::InvalidViewport {
                reason: format!("zoom must be positive and finite, got {zoom}"),
            });
        }
        Ok(Self {
            center,
            zoom,
            width,
            height,
        })
    }

    /// Complex-plane units per vertical pixel at the current zoom.
    #[inline]
    pub fn scale(&self) -> f64 {
        VERTICAL_EXTENT / (self.zoom * self.height as f64)
    }

    /// The aspect ratio of the canvas (width / height).
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Map a pixel coordinate to a point on the complex plane.
    #[inline]
    pub fn pixel_to_complex(&self, px: u32, py: u32) -> Complex {
        self.subpixel_to_complex(px as f64, py as f64)
    }

    /// Map fractional pixel coordinates to a complex-plane point.
    ///
    /// Used for focus points (cursor positions) that need not sit on a pixel.
    #[inline]
    pub fn subpixel_to_complex(&self, px: f64, py: f64) -> Complex {
        self.center + self.plane_offset(px, py)
    }

    /// Replace center and zoom unconditionally.
    ///
    /// A non-positive zoom is accepted; pixels then map to infinite or NaN
    /// coordinates, which the kernel renders without failing.
    pub fn set_view(&mut self, x: f64, y: f64, zoom: f64) {
        if zoom <= 0.0 || !zoom.is_finite() {
            warn!(zoom, "set_view with degenerate zoom; output will be unspecified");
        }
        self.center = Complex::new(x, y);
        self.zoom = zoom;
    }

    /// Pan by a pixel-space delta without changing the zoom.
    pub fn move_view(&mut self, dx: f64, dy: f64) {
        self.center = self.center + Complex::new(dx, dy) * self.scale();
    }

    /// Multiply the zoom by `factor`, keeping the plane point under the
    /// focus pixel `(focus_x, focus_y)` fixed on screen.
    pub fn zoom_view(&mut self, factor: f64, focus_x: f64, focus_y: f64) {
        let anchor = self.subpixel_to_complex(focus_x, focus_y);
        self.zoom *= factor;
        self.center = anchor - self.plane_offset(focus_x, focus_y);
    }

    /// Change the canvas size, keeping center and zoom.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Plane-space displacement of `(px, py)` from the canvas center.
    #[inline]
    fn plane_offset(&self, px: f64, py: f64) -> Complex {
        let scale = self.scale();
        let dx = px - self.width as f64 / 2.0;
        let dy = py - self.height as f64 / 2.0;
        Complex::new(dx * scale * self.aspect_ratio(), dy * scale)
    }
}
