use crate::glm;
use crate::input::MovementKeys;

#[derive(Debug, Clone)]
pub struct Camera {
    /// position of the camera in 3D space
    position: glm::DVec3,
    /// front direction of the camera
    front: glm::DVec3,
    /// up direction of the camera
    up: glm::DVec3,
    /// right direction of the camera
    right: glm::DVec3,
    /// up direction of the world with respect to which the camera's
    /// front, up and right are defined
    world_up: glm::DVec3,
    /// yaw of the camera in degrees
    yaw: f64,
    /// pitch of the camera in degrees
    pitch: f64,
    /// vertical field of view of the camera in degrees
    fov: f64,

    /// near clipping plane of the camera
    near_plane: f64,
    /// far clipping plane of the camera
    far_plane: f64,

    /// distance moved per second while a movement key is held
    movement_speed: f64,
    /// degrees turned per pixel of cursor movement
    mouse_sensitivity: f64,
}

impl Camera {
    pub fn new(position: glm::DVec3, up: glm::DVec3, yaw: f64, pitch: f64, fov: f64) -> Camera {
        let mut camera = Camera {
            position,
            yaw,
            pitch,
            world_up: up,
            front: glm::vec3(0.0, 0.0, -1.0),
            right: glm::zero(),
            up,
            fov,
            near_plane: 0.1,
            far_plane: 100.0,
            movement_speed: 5.0,
            mouse_sensitivity: 0.1,
        };

        camera.update_camera_vectors();

        camera
    }

    fn update_camera_vectors(&mut self) {
        let yaw_radians = f64::to_radians(self.yaw);
        let pitch_radians = f64::to_radians(self.pitch);
        let front: glm::DVec3 = glm::vec3(
            yaw_radians.cos() * pitch_radians.cos(),
            pitch_radians.sin(),
            yaw_radians.sin() * pitch_radians.cos(),
        );
        self.front = glm::normalize(&front);

        self.right = glm::normalize(&glm::cross(&self.front, &self.world_up));
        self.up = glm::normalize(&glm::cross(&self.right, &self.front));
    }

    pub fn get_position(&self) -> glm::DVec3 {
        self.position
    }

    pub fn get_front(&self) -> glm::DVec3 {
        self.front
    }

    pub fn get_right(&self) -> glm::DVec3 {
        self.right
    }

    pub fn get_up(&self) -> glm::DVec3 {
        self.up
    }

    pub fn get_yaw(&self) -> f64 {
        self.yaw
    }

    pub fn get_pitch(&self) -> f64 {
        self.pitch
    }

    pub fn get_fov(&self) -> f64 {
        self.fov
    }

    pub fn get_near_plane(&self) -> f64 {
        self.near_plane
    }

    pub fn get_far_plane(&self) -> f64 {
        self.far_plane
    }

    pub fn set_near_plane(&mut self, near_plane: f64) {
        self.near_plane = near_plane;
    }

    pub fn set_far_plane(&mut self, far_plane: f64) {
        self.far_plane = far_plane;
    }

    pub fn get_movement_speed(&self) -> f64 {
        self.movement_speed
    }

    pub fn set_movement_speed(&mut self, movement_speed: f64) {
        self.movement_speed = movement_speed;
    }

    pub fn get_mouse_sensitivity(&self) -> f64 {
        self.mouse_sensitivity
    }

    pub fn set_mouse_sensitivity(&mut self, mouse_sensitivity: f64) {
        self.mouse_sensitivity = mouse_sensitivity;
    }

    pub fn get_view_matrix(&self) -> glm::DMat4 {
        glm::look_at(&self.position, &(self.position + self.front), &self.up)
    }

    pub fn get_projection_matrix(&self, width: usize, height: usize) -> glm::DMat4 {
        glm::perspective(
            width as f64 / height as f64,
            self.fov.to_radians(),
            self.near_plane,
            self.far_plane,
        )
    }

    /// Walk the camera on the horizontal plane. Pitch does not affect
    /// the direction of movement.
    pub fn process_keyboard(&mut self, keys: MovementKeys, delta_time: f64) {
        let yaw_radians = self.yaw.to_radians();
        let front = glm::normalize(&glm::vec3(yaw_radians.cos(), 0.0, yaw_radians.sin()));
        let right = glm::normalize(&glm::cross(&front, &self.world_up));

        let velocity = self.movement_speed * delta_time;
        if keys.contains(MovementKeys::FORWARD) {
            self.position += front * velocity;
        }
        if keys.contains(MovementKeys::BACKWARD) {
            self.position -= front * velocity;
        }
        if keys.contains(MovementKeys::LEFT) {
            self.position -= right * velocity;
        }
        if keys.contains(MovementKeys::RIGHT) {
            self.position += right * velocity;
        }
    }

    /// Turn the camera given the cursor offset in window coordinates
    /// (y increases downwards).
    pub fn process_mouse_movement(&mut self, x_offset: f64, y_offset: f64) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch -= y_offset * self.mouse_sensitivity;

        self.pitch = self.pitch.clamp(-89.0, 89.0);

        self.update_camera_vectors();
    }

    /// Direction in world space of the ray from the camera through the
    /// given cursor position. `(0.0, 0.0)` is the top left of the
    /// window and `(width, height)` the bottom right.
    pub fn get_raycast_direction(
        &self,
        mouse_x: f64,
        mouse_y: f64,
        width: usize,
        height: usize,
    ) -> glm::DVec3 {
        let x = (2.0 * mouse_x) / width as f64 - 1.0;
        let y = 1.0 - (2.0 * mouse_y) / height as f64;

        let ray_clip = glm::vec4(x, y, -1.0, 1.0);

        let ray_eye = glm::inverse(&self.get_projection_matrix(width, height)) * ray_clip;
        let ray_eye = glm::vec4(ray_eye[0], ray_eye[1], -1.0, 0.0);

        let ray_wor = glm::inverse(&self.get_view_matrix()) * ray_eye;

        glm::normalize(&glm::vec4_to_vec3(&ray_wor))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            glm::vec3(0.0, 0.0, 3.0),
            glm::vec3(0.0, 1.0, 0.0),
            -90.0,
            0.0,
            45.0,
        )
    }
}
