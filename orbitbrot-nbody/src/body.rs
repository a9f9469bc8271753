use rand::Rng;

/// A point mass in canvas (pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub mass: f64,
    /// Display radius, derived from the mass.
    pub radius: f64,
    /// Packed `0xRRGGBBAA`.
    pub color: u32,
}

impl Body {
    /// A body with its radius derived from `mass`.
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, mass: f64, color: u32) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            mass,
            radius: radius_for_mass(mass),
            color,
        }
    }

    /// Draw a body uniformly placed in a `width × height` box.
    ///
    /// Velocity components are `(k - 50) * 0.5` and the mass is `1 + k`, each
    /// for an integer `k` in `[0, 100)`. Color channels are drawn from
    /// `[55, 255)` so no body is too dark to see, with alpha fixed at 255.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        let x = sample_extent(rng, width);
        let y = sample_extent(rng, height);
        let vx = (rng.gen_range(0..100) - 50) as f64 * 0.5;
        let vy = (rng.gen_range(0..100) - 50) as f64 * 0.5;
        let mass = 1.0 + rng.gen_range(0..100) as f64;
        let color = pack_rgba(
            rng.gen_range(55..255),
            rng.gen_range(55..255),
            rng.gen_range(55..255),
            0xFF,
        );
        Self::new(x, y, vx, vy, mass, color)
    }

    #[inline]
    pub fn momentum(&self) -> (f64, f64) {
        (self.mass * self.vx, self.mass * self.vy)
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * (self.vx * self.vx + self.vy * self.vy)
    }
}

/// `1 + √mass / 2`.
#[inline]
pub fn radius_for_mass(mass: f64) -> f64 {
    1.0 + mass.sqrt() * 0.5
}

/// Pack four channels as `0xRRGGBBAA`.
#[inline]
pub fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_be_bytes([r, g, b, a])
}

fn sample_extent<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
    if extent > 0.0 && extent.is_finite() {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}
