use glam::{DMat4, DVec3};

/// Ground-plane movement directions for the navigation camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Back,
    Left,
    Right,
}

/// First-person camera.
///
/// The view is built as `RotX(pitch) * RotY(yaw) * Translate(-position)`,
/// angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyCamera {
    /// Camera position in world space
    pub position: DVec3,
    /// Rotation about the X axis (degrees)
    pub pitch: f64,
    /// Rotation about the Y axis (degrees)
    pub yaw: f64,
}

impl FlyCamera {
    pub fn new(position: [f64; 3]) -> Self {
        Self {
            position: DVec3::from_array(position),
            pitch: 0.0,
            yaw: 0.0,
        }
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::from_rotation_x(self.pitch.to_radians())
            * DMat4::from_rotation_y(self.yaw.to_radians())
            * DMat4::from_translation(-self.position)
    }

    /// Projection matrix (camera -> clip), OpenGL depth range
    pub fn projection_matrix(&self, fov_degrees: f64, aspect: f64, near: f64, far: f64) -> DMat4 {
        DMat4::perspective_rh_gl(fov_degrees.to_radians(), aspect, near, far)
    }

    /// Ground-plane vectors derived from yaw: (forward, right)
    fn ground_axes(&self) -> (DVec3, DVec3) {
        let yaw = self.yaw.to_radians();
        let forward = DVec3::new(yaw.sin(), 0.0, yaw.cos());
        let right = DVec3::new(yaw.cos(), 0.0, -yaw.sin());
        (forward, right)
    }

    /// Move along the ground plane; only x and z change
    pub fn translate(&mut self, direction: MoveDirection, speed: f64) {
        let (forward, right) = self.ground_axes();
        let dir = match direction {
            MoveDirection::Forward => forward,
            MoveDirection::Back => -forward,
            MoveDirection::Left => -right,
            MoveDirection::Right => right,
        };
        self.position.x += dir.x * speed;
        self.position.z += dir.z * speed;
    }

    /// Mouse-look: `dx` turns yaw, `dy` turns pitch, wrapped to [0, 360)
    pub fn look(&mut self, dx: f64, dy: f64, sensitivity: f64) {
        self.pitch = (self.pitch + dy * sensitivity).rem_euclid(360.0);
        self.yaw = (self.yaw + dx * sensitivity).rem_euclid(360.0);
    }

    /// Face the sketch plane head-on from height `distance`
    pub fn look_down_at_plane(&mut self, distance: f64) {
        self.position = DVec3::new(0.0, 0.0, distance);
        self.pitch = 0.0;
        self.yaw = 0.0;
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new([0.0, 0.0, 5.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec4;

    #[test]
    fn test_identity_rotation_is_translation() {
        let cam = FlyCamera::new([1.0, 2.0, 3.0]);
        let p = cam.view_matrix() * DVec4::new(1.0, 2.0, 3.0, 1.0);
        assert!(p.truncate().length() < 1e-12);
    }

    #[test]
    fn test_translate_forward_at_zero_yaw() {
        let mut cam = FlyCamera::new([0.0, 0.0, 5.0]);
        cam.translate(MoveDirection::Forward, 0.1);
        assert!((cam.position.z - 5.1).abs() < 1e-12);
        assert_eq!(cam.position.x, 0.0);
        assert_eq!(cam.position.y, 0.0);
    }

    #[test]
    fn test_translate_right_after_yaw() {
        let mut cam = FlyCamera::new([0.0, 1.0, 0.0]);
        cam.yaw = 90.0;
        cam.translate(MoveDirection::Right, 1.0);
        // right = (cos 90°, 0, -sin 90°)
        assert!(cam.position.x.abs() < 1e-12);
        assert!((cam.position.z + 1.0).abs() < 1e-12);
        assert_eq!(cam.position.y, 1.0);
    }

    #[test]
    fn test_look_wraps() {
        let mut cam = FlyCamera::default();
        cam.look(-10.0, 1900.0, 0.2);
        assert!((cam.yaw - 358.0).abs() < 1e-9);
        assert!((cam.pitch - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_look_down_resets_rotation() {
        let mut cam = FlyCamera::default();
        cam.look(30.0, 40.0, 1.0);
        cam.translate(MoveDirection::Left, 3.0);
        cam.look_down_at_plane(8.0);
        assert_eq!(cam.position, DVec3::new(0.0, 0.0, 8.0));
        assert_eq!(cam.pitch, 0.0);
        assert_eq!(cam.yaw, 0.0);
    }
}
