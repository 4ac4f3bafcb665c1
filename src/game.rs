use crate::camera::Camera;
use crate::config::Config;
use crate::glm;
use crate::input::InputState;
use crate::rasterize::{renderer::Renderer, shader::ShaderError};
use crate::ray::Ray;
use crate::target::Target;
use crate::target_manager::TargetManager;
use crate::util::translate_scale;

/// Color of the targets
pub const TARGET_COLOR: (f64, f64, f64) = (1.0, 0.3, 0.3);

/// Shots fired and targets hit during a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    shots: usize,
    hits: usize,
    /// shots that hit at least one target
    shots_that_hit: usize,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_shots(&self) -> usize {
        self.shots
    }

    /// Number of targets hit, a single shot may hit more than one
    pub fn get_hits(&self) -> usize {
        self.hits
    }

    /// Record a shot that hit `num_hit` targets
    pub fn record(&mut self, num_hit: usize) {
        self.shots += 1;
        self.hits += num_hit;
        if num_hit > 0 {
            self.shots_that_hit += 1;
        }
    }

    /// Fraction of shots that hit at least one target, `None` before
    /// the first shot
    pub fn accuracy(&self) -> Option<f64> {
        if self.shots == 0 {
            None
        } else {
            Some(self.shots_that_hit as f64 / self.shots as f64)
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "shots: {} hits: {}", self.shots, self.hits)?;
        if let Some(accuracy) = self.accuracy() {
            write!(f, " accuracy: {:.0}%", accuracy * 100.0)?;
        }
        Ok(())
    }
}

/// Static box in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneProp {
    name: &'static str,
    position: glm::DVec3,
    scale: glm::DVec3,
    color: glm::DVec3,
}

impl SceneProp {
    pub fn new(
        name: &'static str,
        position: glm::DVec3,
        scale: glm::DVec3,
        color: glm::DVec3,
    ) -> Self {
        Self {
            name,
            position,
            scale,
            color,
        }
    }

    /// Thin slab below the targets
    pub fn ground() -> Self {
        Self::new(
            "ground",
            glm::vec3(0.0, -1.5, 0.0),
            glm::vec3(10.0, 0.1, 10.0),
            glm::vec3(0.3, 0.3, 1.0),
        )
    }

    /// Wall behind the starting position of the camera
    pub fn wall() -> Self {
        Self::new(
            "wall",
            glm::vec3(0.0, 0.75, 5.0),
            glm::vec3(10.0, 5.0, 0.2),
            glm::vec3(0.8, 0.2, 0.2),
        )
    }

    pub fn get_name(&self) -> &'static str {
        self.name
    }

    pub fn get_color(&self) -> &glm::DVec3 {
        &self.color
    }

    pub fn model_matrix(&self) -> glm::DMat4 {
        translate_scale(&self.position, &self.scale)
    }
}

/// Model matrix that maps the unit sphere onto `target`
pub fn target_model_matrix(target: &Target) -> glm::DMat4 {
    let radius = target.get_radius();
    translate_scale(target.get_position(), &glm::vec3(radius, radius, radius))
}

/// State of a running session: the player's camera, the targets and
/// the score.
#[derive(Debug)]
pub struct Game {
    camera: Camera,
    target_manager: TargetManager,
    score: Score,
    props: Vec<SceneProp>,
}

impl Game {
    pub fn new(camera: Camera, target_manager: TargetManager) -> Self {
        Self {
            camera,
            target_manager,
            score: Score::new(),
            props: vec![SceneProp::ground(), SceneProp::wall()],
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let targets = &config.targets;
        let target_manager =
            TargetManager::with_seed(targets.count, targets.bounds, targets.radius, targets.seed);
        Self::new(config.camera.build_camera(), target_manager)
    }

    pub fn get_camera(&self) -> &Camera {
        &self.camera
    }

    pub fn get_target_manager(&self) -> &TargetManager {
        &self.target_manager
    }

    pub fn get_score(&self) -> &Score {
        &self.score
    }

    pub fn get_props(&self) -> &[SceneProp] {
        &self.props
    }

    /// Ray from the camera through the cursor position `(x, y)` of a
    /// window of size `window_size`
    pub fn ray_through_cursor(&self, cursor: (f64, f64), window_size: (usize, usize)) -> Ray {
        let direction = self.camera.get_raycast_direction(
            cursor.0,
            cursor.1,
            window_size.0,
            window_size.1,
        );
        Ray::new(self.camera.get_position(), direction)
    }

    /// Fire a shot along `ray`. Every target hit is placed again
    /// right away. Returns the number of targets hit.
    pub fn shoot(&mut self, ray: &Ray) -> usize {
        let num_hit = self.target_manager.shoot(ray);
        self.score.record(num_hit);
        if num_hit > 0 {
            self.target_manager.reset_hit_targets();
            log::info!("hit {} target(s), {}", num_hit, self.score);
        } else {
            log::debug!("missed, {}", self.score);
        }
        num_hit
    }

    /// Apply the input gathered since the last frame: look around,
    /// move, then shoot. Returns the number of targets hit this
    /// frame.
    pub fn update(&mut self, input: &mut InputState, delta_time: f64) -> usize {
        let (x_offset, y_offset) = input.take_look_offset();
        if x_offset != 0.0 || y_offset != 0.0 {
            self.camera.process_mouse_movement(x_offset, y_offset);
        }

        self.camera
            .process_keyboard(input.get_movement_keys(), delta_time);

        if input.take_shot() {
            let ray = self.ray_through_cursor(input.get_aim_position(), input.get_window_size());
            self.shoot(&ray)
        } else {
            0
        }
    }

    /// Draw the scene props and every target not hit. Expects the
    /// per frame shader uniforms to be set already.
    pub fn draw(&self, renderer: &Renderer) -> Result<(), ShaderError> {
        for prop in &self.props {
            renderer.draw_cube(&prop.model_matrix(), prop.get_color())?;
        }

        let color = glm::vec3(TARGET_COLOR.0, TARGET_COLOR.1, TARGET_COLOR.2);
        for target in self.target_manager.get_active_targets() {
            renderer.draw_sphere(&target_model_matrix(target), &color)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glfw::{Action, Modifiers, MouseButton, WindowEvent};

    use super::*;
    use crate::config::TargetConfig;

    fn test_config(count: usize) -> Config {
        Config {
            targets: TargetConfig {
                count,
                seed: Some(7),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn click() -> WindowEvent {
        WindowEvent::MouseButton(MouseButton::Button1, Action::Press, Modifiers::empty())
    }

    #[test]
    fn score_accuracy() {
        let mut score = Score::new();
        assert_eq!(score.accuracy(), None);

        score.record(0);
        score.record(2);
        assert_eq!(score.get_shots(), 2);
        assert_eq!(score.get_hits(), 2);
        assert_eq!(score.accuracy(), Some(0.5));
        assert_eq!(score.to_string(), "shots: 2 hits: 2 accuracy: 50%");
    }

    #[test]
    fn scene_prop_model_matrix() {
        let ground = SceneProp::ground();
        let corner = ground.model_matrix() * glm::vec4(0.5, 0.5, 0.5, 1.0);
        assert!(glm::distance(&glm::vec4_to_vec3(&corner), &glm::vec3(5.0, -1.45, 5.0)) < 1e-12);
        assert_eq!(ground.get_name(), "ground");
    }

    #[test]
    fn target_model_matrix_scales_by_radius() {
        let game = Game::from_config(&test_config(1));
        let target = &game.get_target_manager().get_targets()[0];
        let surface = target_model_matrix(target) * glm::vec4(1.0, 0.0, 0.0, 1.0);
        let expected = target.get_position() + glm::vec3(target.get_radius(), 0.0, 0.0);
        assert!(glm::distance(&glm::vec4_to_vec3(&surface), &expected) < 1e-12);
    }

    #[test]
    fn game_from_config() {
        let game = Game::from_config(&test_config(4));
        assert_eq!(game.get_target_manager().get_targets().len(), 4);
        assert_eq!(game.get_camera().get_position(), glm::vec3(0.0, 0.0, 3.0));
        assert_eq!(game.get_props().len(), 2);
        assert_eq!(game.get_score().accuracy(), None);
    }

    #[test]
    fn game_shoot_hit_and_miss() {
        let mut game = Game::from_config(&test_config(1));
        let position = *game.get_target_manager().get_targets()[0].get_position();
        let origin = game.get_camera().get_position();

        let ray = Ray::new(origin, position - origin);
        assert_eq!(game.shoot(&ray), 1);
        // the target is placed again right away
        assert_eq!(game.get_target_manager().get_active_targets().count(), 1);

        let away = Ray::new(origin, glm::vec3(0.0, 0.0, 1.0));
        assert_eq!(game.shoot(&away), 0);

        assert_eq!(game.get_score().get_shots(), 2);
        assert_eq!(game.get_score().get_hits(), 1);
        assert_eq!(game.get_score().accuracy(), Some(0.5));
    }

    #[test]
    fn game_update_shoots_through_window_center() {
        let mut game = Game::from_config(&test_config(0));
        let mut input = InputState::new((800, 600), (800, 600));
        input.handle_event(&click());

        assert_eq!(game.update(&mut input, 0.016), 0);
        assert_eq!(game.get_score().get_shots(), 1);

        // the click is consumed
        game.update(&mut input, 0.016);
        assert_eq!(game.get_score().get_shots(), 1);
    }

    #[test]
    fn game_update_center_ray_follows_front() {
        let game = Game::from_config(&test_config(0));
        let ray = game.ray_through_cursor((400.0, 300.0), (800, 600));
        assert!(glm::distance(ray.get_direction(), &game.get_camera().get_front()) < 1e-9);
        assert_eq!(*ray.get_origin(), game.get_camera().get_position());
    }

    #[test]
    fn game_update_moves_and_looks() {
        let mut game = Game::from_config(&test_config(0));
        let mut input = InputState::new((800, 600), (800, 600));
        input.handle_event(&WindowEvent::Key(
            glfw::Key::W,
            0,
            Action::Press,
            Modifiers::empty(),
        ));
        input.handle_event(&WindowEvent::CursorPos(100.0, 100.0));
        input.handle_event(&WindowEvent::CursorPos(110.0, 100.0));

        game.update(&mut input, 1.0);

        let camera = game.get_camera();
        assert!((camera.get_yaw() - -89.0).abs() < 1e-9);
        // looked before moving
        assert!(camera.get_position()[2] < 3.0);
        assert_eq!(game.get_score().get_shots(), 0);
    }
}
