use crate::glm;

/// str to CStr, `string` must end with a '\0'
pub fn str_to_cstr(string: &str) -> &std::ffi::CStr {
    std::ffi::CStr::from_bytes_with_nul(string.as_bytes())
        .expect("ensure there is a '\\0' at the end of the string")
}

/// Model matrix that scales by `scale` and then translates to
/// `position`
pub fn translate_scale(position: &glm::DVec3, scale: &glm::DVec3) -> glm::DMat4 {
    glm::scale(&glm::translate(&glm::identity(), position), scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_scale_unit_point() {
        let model = translate_scale(&glm::vec3(1.0, 2.0, 3.0), &glm::vec3(2.0, 0.5, 1.0));
        let p = model * glm::vec4(1.0, 1.0, 1.0, 1.0);
        assert_eq!(glm::vec4_to_vec3(&p), glm::vec3(3.0, 2.5, 4.0));
    }
}
