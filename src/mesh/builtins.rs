use lazy_static::lazy_static;
use paste::paste;

use crate::mesh::Mesh;

macro_rules! load_builtin_mesh {
    ( $name:ident ; $builder:expr ) => {
        paste! {
            lazy_static! {
                static ref [<$name:upper>]: Mesh = $builder;
            }

            pub fn [<get_ $name>]() -> &'static Mesh {
                &[<$name:upper>]
            }
        }
    };
}

load_builtin_mesh!(uv_sphere; Mesh::uv_sphere(1.0, 36, 18));
load_builtin_mesh!(cube; Mesh::cube());
