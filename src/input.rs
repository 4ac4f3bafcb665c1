use bitflags::bitflags;
use glfw::{Action, Key, MouseButton, WindowEvent};

bitflags! {
    /// Movement keys currently held down
    pub struct MovementKeys: u8 {
        const FORWARD = 0b0001;
        const BACKWARD = 0b0010;
        const LEFT = 0b0100;
        const RIGHT = 0b1000;
    }
}

impl MovementKeys {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::W => Some(MovementKeys::FORWARD),
            Key::S => Some(MovementKeys::BACKWARD),
            Key::A => Some(MovementKeys::LEFT),
            Key::D => Some(MovementKeys::RIGHT),
            _ => None,
        }
    }
}

/// Input gathered from the window events between two frames.
#[derive(Debug)]
pub struct InputState {
    movement_keys: MovementKeys,
    /// last known cursor position, `None` until the first cursor
    /// event arrives
    last_cursor: Option<(f64, f64)>,
    /// accumulated cursor movement not yet applied to the camera
    look_offset: (f64, f64),
    /// a left click happened and has not been processed yet
    shot_pending: bool,
    close_requested: bool,
    /// window size in screen coordinates, the unit of cursor positions
    window_size: (usize, usize),
    /// framebuffer size in pixels
    framebuffer_size: (usize, usize),
}

impl InputState {
    pub fn new(window_size: (usize, usize), framebuffer_size: (usize, usize)) -> Self {
        Self {
            movement_keys: MovementKeys::empty(),
            last_cursor: None,
            look_offset: (0.0, 0.0),
            shot_pending: false,
            close_requested: false,
            window_size,
            framebuffer_size,
        }
    }

    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                self.close_requested = true;
            }
            WindowEvent::Key(key, _, action, _) => {
                if let Some(movement) = MovementKeys::from_key(*key) {
                    match action {
                        Action::Press => self.movement_keys.insert(movement),
                        Action::Release => self.movement_keys.remove(movement),
                        Action::Repeat => {}
                    }
                }
            }
            WindowEvent::CursorPos(x, y) => {
                // the first position only seeds the cursor so the camera
                // does not jump
                let (last_x, last_y) = self.last_cursor.unwrap_or((*x, *y));
                self.look_offset.0 += x - last_x;
                self.look_offset.1 += y - last_y;
                self.last_cursor = Some((*x, *y));
            }
            WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) => {
                self.shot_pending = true;
            }
            WindowEvent::Size(width, height) => {
                self.window_size = clamp_size(*width, *height);
            }
            WindowEvent::FramebufferSize(width, height) => {
                self.framebuffer_size = clamp_size(*width, *height);
            }
            _ => {}
        }
    }

    pub fn get_movement_keys(&self) -> MovementKeys {
        self.movement_keys
    }

    pub fn get_last_cursor(&self) -> Option<(f64, f64)> {
        self.last_cursor
    }

    pub fn get_window_size(&self) -> (usize, usize) {
        self.window_size
    }

    /// Cursor position to shoot from, center of the window until the
    /// cursor has been seen
    pub fn get_aim_position(&self) -> (f64, f64) {
        self.last_cursor.unwrap_or((
            self.window_size.0 as f64 / 2.0,
            self.window_size.1 as f64 / 2.0,
        ))
    }

    pub fn get_framebuffer_size(&self) -> (usize, usize) {
        self.framebuffer_size
    }

    pub fn is_close_requested(&self) -> bool {
        self.close_requested
    }

    /// Cursor movement since the last call
    pub fn take_look_offset(&mut self) -> (f64, f64) {
        std::mem::replace(&mut self.look_offset, (0.0, 0.0))
    }

    /// Whether a shot was fired since the last call
    pub fn take_shot(&mut self) -> bool {
        std::mem::replace(&mut self.shot_pending, false)
    }
}

/// Minimized windows report a zero size, keep at least one pixel so
/// aspect ratios stay finite.
pub fn clamp_size(width: i32, height: i32) -> (usize, usize) {
    (width.max(1) as usize, height.max(1) as usize)
}
