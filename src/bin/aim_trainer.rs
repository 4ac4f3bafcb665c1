use glfw::Context;

use aim::{
    config::ConfigError,
    fps::FrameTimer,
    game::Game,
    input::{clamp_size, InputState},
    inputs::InputArguments,
    logging::{init_logging, LoggingConfig},
    rasterize::{
        renderer::Renderer,
        shader::{self, ShaderError},
    },
};

#[derive(Debug)]
enum AppError {
    Config(ConfigError),
    Shader(ShaderError),
    GlfwInit(glfw::InitError),
    WindowCreation,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(error) => write!(f, "{}", error),
            AppError::Shader(error) => write!(f, "{}", error),
            AppError::GlfwInit(error) => write!(f, "glfw failed to initialize: {:?}", error),
            AppError::WindowCreation => write!(f, "glfw window creation failed"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(error) => Some(error),
            AppError::Shader(error) => Some(error),
            AppError::GlfwInit(_) | AppError::WindowCreation => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<ShaderError> for AppError {
    fn from(error: ShaderError) -> Self {
        AppError::Shader(error)
    }
}

impl From<glfw::InitError> for AppError {
    fn from(error: glfw::InitError) -> Self {
        AppError::GlfwInit(error)
    }
}

fn glfw_error_callback(error: glfw::Error, description: String, _: &()) {
    log::error!("glfw error {:?}: {}", error, description);
}

fn set_viewport((width, height): (usize, usize)) {
    unsafe {
        gl::Viewport(0, 0, width as gl::types::GLsizei, height as gl::types::GLsizei);
    }
}

fn main() {
    let arguments = InputArguments::read_cli();

    init_logging(LoggingConfig {
        level: arguments.get_log_level(),
    });

    if let Err(error) = run(&arguments) {
        log::error!("{}", error);
        std::process::exit(1);
    }
}

fn run(arguments: &InputArguments) -> Result<(), AppError> {
    let config = arguments.generate_config()?;

    if arguments.get_dump_config() {
        println!("{}", config.to_json_string()?);
        return Ok(());
    }

    let mut glfw = glfw::init(Some(glfw::Callback {
        f: glfw_error_callback,
        data: (),
    }))?;

    glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
    glfw.window_hint(glfw::WindowHint::OpenGlProfile(
        glfw::OpenGlProfileHint::Core,
    ));
    #[cfg(target_os = "macos")]
    glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

    // creating window
    let (mut window, events) = glfw
        .create_window(
            config.window.width,
            config.window.height,
            &config.window.title,
            glfw::WindowMode::Windowed,
        )
        .ok_or(AppError::WindowCreation)?;

    // setup bunch of polling data
    window.set_key_polling(true);
    window.set_cursor_pos_polling(true);
    window.set_mouse_button_polling(true);
    window.set_framebuffer_size_polling(true);
    window.set_size_polling(true);
    window.make_current();

    gl::load_with(|symbol| window.get_proc_address(symbol));

    let renderer = Renderer::new()?;
    let mut game = Game::from_config(&config);

    let mut input = {
        let (width, height) = window.get_size();
        let (framebuffer_width, framebuffer_height) = window.get_framebuffer_size();
        InputState::new(
            clamp_size(width, height),
            clamp_size(framebuffer_width, framebuffer_height),
        )
    };
    let mut viewport_size = input.get_framebuffer_size();
    set_viewport(viewport_size);

    log::info!(
        "{} targets, WASD to move, mouse to look, left click to shoot, escape to quit",
        game.get_target_manager().get_targets().len()
    );

    let mut frame_timer = FrameTimer::new();

    while !window.should_close() {
        let delta_time = frame_timer.tick(glfw.get_time());

        glfw.poll_events();
        glfw::flush_messages(&events).for_each(|(_, event)| {
            input.handle_event(&event);
        });

        if input.is_close_requested() {
            window.set_should_close(true);
        }

        if input.get_framebuffer_size() != viewport_size {
            viewport_size = input.get_framebuffer_size();
            set_viewport(viewport_size);
        }

        game.update(&mut input, delta_time);

        shader::builtins::setup_shaders(game.get_camera(), viewport_size.0, viewport_size.1)?;

        renderer.begin_frame();
        game.draw(&renderer)?;

        window.set_title(&format!(
            "{} | fps: {:.0} | {}",
            config.window.title,
            frame_timer.get_fps(),
            game.get_score()
        ));

        window.swap_buffers();
    }

    log::info!("final score, {}", game.get_score());

    Ok(())
}
