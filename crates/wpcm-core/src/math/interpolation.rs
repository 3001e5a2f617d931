//! Interpolation functions for LUT evaluation

/// Linear interpolation between two values
///
/// Returns a + t * (b - a) for t in [0, 1]
#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Trilinear interpolation in a 3D grid
///
/// # Arguments
/// * `c` - Array of 8 corner values in order: [000, 100, 010, 110, 001, 101, 011, 111]
///         where the indices represent (x, y, z) positions
/// * `tx`, `ty`, `tz` - Interpolation parameters in [0, 1]
#[inline]
fn trilinear(c: [f32; 8], tx: f32, ty: f32, tz: f32) -> f32 {
    // Interpolate along x
    let c00 = lerp(c[0], c[1], tx);
    let c10 = lerp(c[2], c[3], tx);
    let c01 = lerp(c[4], c[5], tx);
    let c11 = lerp(c[6], c[7], tx);

    // Interpolate along y
    let c0 = lerp(c00, c10, ty);
    let c1 = lerp(c01, c11, ty);

    // Interpolate along z
    lerp(c0, c1, tz)
}

/// Trilinear interpolation for 3D color LUT
///
/// # Arguments
/// * `lut` - 3D LUT data, flattened in (r, g, b, channel) order
/// * `grid_size` - Number of grid points in each dimension
/// * `input` - Input RGB values, clamped to [0, 1]
///
/// A grid of one point is constant; an empty grid yields black.
pub(crate) fn trilinear_interp(lut: &[f32], grid_size: usize, input: [f32; 3]) -> [f32; 3] {
    if grid_size < 2 {
        return match lut {
            [r, g, b, ..] if grid_size == 1 => [*r, *g, *b],
            _ => [0.0; 3],
        };
    }
    let max_idx = (grid_size - 1) as f32;

    let scaled = input.map(|v| (v * max_idx).clamp(0.0, max_idx));
    let lo = scaled.map(|v| v.floor() as usize);
    let hi = lo.map(|i| (i + 1).min(grid_size - 1));
    let frac = [
        scaled[0] - lo[0] as f32,
        scaled[1] - lo[1] as f32,
        scaled[2] - lo[2] as f32,
    ];

    let idx = |r: usize, g: usize, b: usize, c: usize| -> f32 {
        let i = ((r * grid_size + g) * grid_size + b) * 3 + c;
        lut.get(i).copied().unwrap_or(0.0)
    };

    let (r0, g0, b0) = (lo[0], lo[1], lo[2]);
    let (r1, g1, b1) = (hi[0], hi[1], hi[2]);

    let mut output = [0.0; 3];
    for (c, out) in output.iter_mut().enumerate() {
        let corners = [
            idx(r0, g0, b0, c),
            idx(r1, g0, b0, c),
            idx(r0, g1, b0, c),
            idx(r1, g1, b0, c),
            idx(r0, g0, b1, c),
            idx(r1, g0, b1, c),
            idx(r0, g1, b1, c),
            idx(r1, g1, b1, c),
        ];
        *out = trilinear(corners, frac[0], frac[1], frac[2]);
    }

    output
}
