//! 3D camera orbiting the projected tesseract
//!
//! The camera always looks at `target`; mouse input swings it around the
//! target and moves it closer or further away. Matrices are column-major,
//! right-handed, with wgpu's 0..1 clip depth.

use hyperview_input::OrbitControl;

/// Elevation limit (just under 90 degrees) so `up` never lines up with the view
const ELEVATION_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Perspective camera orbiting a fixed target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewCamera {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Closest zoom distance to the target
    pub min_distance: f32,
    /// Furthest zoom distance from the target
    pub max_distance: f32,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov_y: 60.0,
            near: 0.1,
            far: 100.0,
            min_distance: 1.5,
            max_distance: 30.0,
        }
    }
}

impl ViewCamera {
    pub fn view_matrix(&self) -> [[f32; 4]; 4] {
        look_at_matrix(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> [[f32; 4]; 4] {
        perspective_matrix(self.fov_y.to_radians(), aspect, self.near, self.far)
    }

    /// Distance from the eye to the target
    pub fn distance(&self) -> f32 {
        let offset = self.offset();
        dot(offset, offset).sqrt()
    }

    fn offset(&self) -> [f32; 3] {
        [
            self.eye[0] - self.target[0],
            self.eye[1] - self.target[1],
            self.eye[2] - self.target[2],
        ]
    }

    fn place(&mut self, azimuth: f32, elevation: f32, distance: f32) {
        let (sin_a, cos_a) = azimuth.sin_cos();
        let (sin_e, cos_e) = elevation.sin_cos();
        self.eye = [
            self.target[0] + distance * cos_e * sin_a,
            self.target[1] + distance * sin_e,
            self.target[2] + distance * cos_e * cos_a,
        ];
    }
}

impl OrbitControl for ViewCamera {
    fn orbit(&mut self, delta_azimuth: f32, delta_elevation: f32) {
        let distance = self.distance();
        if distance <= 0.0 {
            return;
        }

        let offset = self.offset();
        // Azimuth 0 looks down -Z from +Z
        let azimuth = offset[0].atan2(offset[2]) + delta_azimuth;
        let elevation = ((offset[1] / distance).clamp(-1.0, 1.0).asin() + delta_elevation)
            .clamp(-ELEVATION_LIMIT, ELEVATION_LIMIT);
        self.place(azimuth, elevation, distance);
    }

    fn zoom(&mut self, scale: f32) {
        let distance = self.distance();
        if !scale.is_finite() || scale <= 0.0 || distance <= 0.0 {
            return;
        }

        let new_distance = (distance * scale).clamp(self.min_distance, self.max_distance);
        let ratio = new_distance / distance;
        let offset = self.offset();
        self.eye = [
            self.target[0] + offset[0] * ratio,
            self.target[1] + offset[1] * ratio,
            self.target[2] + offset[2] * ratio,
        ];
    }
}

/// Helper to create a perspective projection matrix (depth 0 at `near`, 1 at `far`)
pub fn perspective_matrix(fov_y: f32, aspect: f32, near: f32, far: f32) -> [[f32; 4]; 4] {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * nf, -1.0],
        [0.0, 0.0, far * near * nf, 0.0],
    ]
}

/// Helper to create a look-at view matrix
pub fn look_at_matrix(eye: [f32; 3], target: [f32; 3], up: [f32; 3]) -> [[f32; 4]; 4] {
    let f = normalize([
        target[0] - eye[0],
        target[1] - eye[1],
        target[2] - eye[2],
    ]);
    let s = normalize(cross(f, up));
    let u = cross(s, f);

    [
        [s[0], u[0], -f[0], 0.0],
        [s[1], u[1], -f[1], 0.0],
        [s[2], u[2], -f[2], 0.0],
        [-dot(s, eye), -dot(u, eye), dot(f, eye), 1.0],
    ]
}

/// Apply a column-major matrix to a point
pub fn transform_point(m: [[f32; 4]; 4], p: [f32; 3]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, value) in out.iter_mut().enumerate() {
        *value = m[0][row] * p[0] + m[1][row] * p[1] + m[2][row] * p[2] + m[3][row];
    }
    out
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len > 0.0 {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        v
    }
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_view_moves_target_in_front() {
        let camera = ViewCamera::default();
        let p = transform_point(camera.view_matrix(), [0.0, 0.0, 0.0]);
        // Origin sits 5 units down the camera's -Z
        assert!(p[0].abs() < EPSILON);
        assert!(p[1].abs() < EPSILON);
        assert!((p[2] + 5.0).abs() < EPSILON);
        assert_eq!(p[3], 1.0);
    }

    #[test]
    fn test_perspective_depth_range() {
        let proj = perspective_matrix(std::f32::consts::FRAC_PI_3, 1.0, 0.1, 100.0);
        let near = transform_point(proj, [0.0, 0.0, -0.1]);
        let far = transform_point(proj, [0.0, 0.0, -100.0]);
        assert!((near[2] / near[3]).abs() < EPSILON);
        assert!((far[2] / far[3] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_projected_tesseract_is_visible() {
        // The projected tesseract stays within radius 3 of the origin
        let camera = ViewCamera::default();
        let view = camera.view_matrix();
        let proj = camera.projection_matrix(16.0 / 9.0);
        for corner in [[3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 3.0], [0.0, 0.0, -3.0]] {
            let v = transform_point(view, corner);
            let clip = transform_point(proj, [v[0], v[1], v[2]]);
            let depth = clip[2] / clip[3];
            assert!(depth > 0.0 && depth < 1.0, "{:?} clipped at depth {}", corner, depth);
            assert!((clip[1] / clip[3]).abs() <= 1.0);
        }
    }

    #[test]
    fn test_orbit_keeps_distance_and_target() {
        let mut camera = ViewCamera::default();
        camera.orbit(0.7, 0.3);
        camera.orbit(-2.1, -0.5);
        assert!((camera.distance() - 5.0).abs() < 1e-4);
        assert_eq!(camera.target, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_quarter_orbit() {
        let mut camera = ViewCamera::default();
        camera.orbit(std::f32::consts::FRAC_PI_2, 0.0);
        assert!((camera.eye[0] - 5.0).abs() < 1e-4);
        assert!(camera.eye[1].abs() < 1e-4);
        assert!(camera.eye[2].abs() < 1e-4);

        // The target is still straight ahead
        let p = transform_point(camera.view_matrix(), camera.target);
        assert!(p[0].abs() < 1e-4);
        assert!((p[2] + 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_orbit_elevation_clamped() {
        let mut camera = ViewCamera::default();
        camera.orbit(0.0, 10.0);
        let elevation = (camera.eye[1] / camera.distance()).asin();
        assert!((elevation - ELEVATION_LIMIT).abs() < 1e-3);

        // View stays well formed over the pole
        let view = camera.view_matrix();
        assert!(view.iter().flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = ViewCamera::default();
        camera.zoom(0.5);
        assert!((camera.distance() - 2.5).abs() < EPSILON);
        assert_eq!(camera.eye[0], 0.0);

        camera.zoom(0.01);
        assert!((camera.distance() - camera.min_distance).abs() < EPSILON);

        camera.zoom(1000.0);
        assert!((camera.distance() - camera.max_distance).abs() < 1e-4);
    }

    #[test]
    fn test_zoom_ignores_bad_scale() {
        let mut camera = ViewCamera::default();
        camera.zoom(0.0);
        camera.zoom(-1.0);
        camera.zoom(f32::NAN);
        assert_eq!(camera, ViewCamera::default());
    }
}
