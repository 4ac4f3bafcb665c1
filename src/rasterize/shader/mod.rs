use crate::glm;
use crate::util::str_to_cstr;

pub mod builtins;

#[derive(Debug)]
pub struct Shader {
    program_id: gl::types::GLuint,
}

#[derive(Debug, Clone)]
pub enum ShaderError {
    /// source code contained a nul byte
    InvalidSource,
    VertexCompile(String),
    FragmentCompile(String),
    ProgramLinker(String),
}

impl std::fmt::Display for ShaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderError::InvalidSource => write!(f, "shader source contains a nul byte"),
            ShaderError::VertexCompile(error_log) => {
                write!(f, "vertex shader compile error with log: {}", error_log)
            }
            ShaderError::FragmentCompile(error_log) => {
                write!(f, "fragment shader compile error with log: {}", error_log)
            }
            ShaderError::ProgramLinker(error_log) => {
                write!(f, "program linker error with log: {}", error_log)
            }
        }
    }
}

impl std::error::Error for ShaderError {}

fn get_shader_error_log(shader: gl::types::GLuint) -> String {
    let mut max_length = 0;
    unsafe {
        gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut max_length);
    }

    let mut log: Vec<u8> = vec![0; max_length.max(0) as usize];

    unsafe {
        gl::GetShaderInfoLog(
            shader,
            max_length,
            &mut max_length,
            log.as_mut_ptr() as *mut gl::types::GLchar,
        );
    }

    String::from_utf8_lossy(&log[..max_length.max(0) as usize]).to_string()
}

fn get_program_error_log(program: gl::types::GLuint) -> String {
    let mut max_length = 0;
    unsafe {
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut max_length);
    }

    let mut log: Vec<u8> = vec![0; max_length.max(0) as usize];

    unsafe {
        gl::GetProgramInfoLog(
            program,
            max_length,
            &mut max_length,
            log.as_mut_ptr() as *mut gl::types::GLchar,
        );
    }

    String::from_utf8_lossy(&log[..max_length.max(0) as usize]).to_string()
}

/// Compile a single shader stage, the shader object is deleted on
/// failure.
fn compile_stage(
    stage: gl::types::GLenum,
    code: &str,
) -> Result<gl::types::GLuint, ShaderError> {
    let code = std::ffi::CString::new(code).map_err(|_| ShaderError::InvalidSource)?;
    let shader = unsafe {
        let shader = gl::CreateShader(stage);
        gl::ShaderSource(shader, 1, &code.as_ptr(), std::ptr::null());
        gl::CompileShader(shader);
        shader
    };

    let mut success: gl::types::GLint = -10;
    unsafe {
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    }
    if success != gl::types::GLint::from(gl::TRUE) {
        let log = get_shader_error_log(shader);
        unsafe {
            gl::DeleteShader(shader);
        }
        return Err(if stage == gl::VERTEX_SHADER {
            ShaderError::VertexCompile(log)
        } else {
            ShaderError::FragmentCompile(log)
        });
    }

    Ok(shader)
}

impl Shader {
    pub fn from_strings(vertex_code: &str, fragment_code: &str) -> Result<Shader, ShaderError> {
        let vertex_shader = compile_stage(gl::VERTEX_SHADER, vertex_code).map_err(|error| {
            log::error!("vertex shader didn't compile");
            error
        })?;
        let fragment_shader =
            compile_stage(gl::FRAGMENT_SHADER, fragment_code).map_err(|error| {
                log::error!("fragment shader didn't compile");
                unsafe {
                    gl::DeleteShader(vertex_shader);
                }
                error
            })?;

        let shader_program = unsafe {
            let shader_program = gl::CreateProgram();
            gl::AttachShader(shader_program, vertex_shader);
            gl::AttachShader(shader_program, fragment_shader);
            gl::LinkProgram(shader_program);
            gl::DeleteShader(vertex_shader);
            gl::DeleteShader(fragment_shader);
            shader_program
        };

        let mut success: gl::types::GLint = -10;
        unsafe {
            gl::GetProgramiv(shader_program, gl::LINK_STATUS, &mut success);
        }
        if success != gl::types::GLint::from(gl::TRUE) {
            log::error!("program not linked");
            let log = get_program_error_log(shader_program);
            unsafe {
                gl::DeleteProgram(shader_program);
            }
            return Err(ShaderError::ProgramLinker(log));
        }

        Ok(Shader {
            program_id: shader_program,
        })
    }

    pub fn use_shader(&self) {
        unsafe {
            gl::UseProgram(self.program_id);
        }
    }

    pub fn set_vec3(&self, name: &str, value: &glm::Vec3) {
        unsafe {
            gl::Uniform3f(
                gl::GetUniformLocation(self.program_id, str_to_cstr(name).as_ptr()),
                value[0],
                value[1],
                value[2],
            );
        }
    }

    pub fn set_mat4(&self, name: &str, value: &glm::Mat4) {
        unsafe {
            gl::UniformMatrix4fv(
                gl::GetUniformLocation(self.program_id, str_to_cstr(name).as_ptr()),
                1,
                gl::FALSE,
                value.as_ptr(),
            );
        }
    }

    pub fn get_id(&self) -> gl::types::GLuint {
        self.program_id
    }

    fn get_active_names(&self, count_kind: gl::types::GLenum, is_attribute: bool) -> Vec<String> {
        let mut names = Vec::new();
        let mut count: gl::types::GLint = -1;
        const MAX_LENGTH: usize = 100;
        let mut name: [gl::types::GLchar; MAX_LENGTH] = [0; MAX_LENGTH];
        let mut length: gl::types::GLsizei = -1;
        let mut size: gl::types::GLint = -1;
        let mut var_type: gl::types::GLenum = gl::NONE;
        unsafe {
            gl::GetProgramiv(self.get_id(), count_kind, &mut count);
        }

        for i in 0..count.max(0) {
            let index = i as gl::types::GLuint;
            unsafe {
                if is_attribute {
                    gl::GetActiveAttrib(
                        self.get_id(),
                        index,
                        MAX_LENGTH as gl::types::GLsizei,
                        &mut length,
                        &mut size,
                        &mut var_type,
                        name.as_mut_ptr(),
                    );
                } else {
                    gl::GetActiveUniform(
                        self.get_id(),
                        index,
                        MAX_LENGTH as gl::types::GLsizei,
                        &mut length,
                        &mut size,
                        &mut var_type,
                        name.as_mut_ptr(),
                    );
                }
            }
            let name_string = unsafe { std::ffi::CStr::from_ptr(name.as_ptr()) };
            names.push(name_string.to_string_lossy().into_owned());
        }

        names
    }

    pub fn get_attributes(&self) -> Vec<String> {
        self.get_active_names(gl::ACTIVE_ATTRIBUTES, true)
    }

    pub fn get_uniforms(&self) -> Vec<String> {
        self.get_active_names(gl::ACTIVE_UNIFORMS, false)
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.program_id);
        }
    }
}
