//! Known extension identifiers

macro_rules! extensions {
    ($($name:ident),* $(,)?) => {
        /// Optional capabilities that can be queried with
        /// [`CapabilityRegistry::is_supported`](super::CapabilityRegistry::is_supported).
        ///
        /// Variant names are the registry names verbatim.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Extension {
            $($name,)*
        }

        impl Extension {
            pub const ALL: &'static [Extension] = &[$(Extension::$name,)*];
            pub const COUNT: usize = Self::ALL.len();

            pub fn name(self) -> &'static str {
                match self {
                    $(Extension::$name => stringify!($name),)*
                }
            }
        }
    };
}

extensions! {
    GL_ARB_multitexture,
    GL_ARB_multisample,
    GL_ARB_texture_cube_map,
    GL_ARB_texture_compression,
    GL_ARB_texture_border_clamp,
    GL_ARB_depth_texture,
    GL_ARB_shadow,
    GL_ARB_vertex_program,
    GL_ARB_fragment_program,
    GL_ARB_vertex_buffer_object,
    GL_ARB_occlusion_query,
    GL_ARB_shader_objects,
    GL_ARB_vertex_shader,
    GL_ARB_fragment_shader,
    GL_ARB_texture_non_power_of_two,
    GL_ARB_draw_buffers,
    GL_ARB_texture_float,
    GL_ARB_pixel_buffer_object,
    GL_ARB_depth_buffer_float,
    GL_ARB_draw_instanced,
    GL_ARB_framebuffer_object,
    GL_ARB_framebuffer_sRGB,
    GL_ARB_geometry_shader4,
    GL_ARB_instanced_arrays,
    GL_ARB_map_buffer_range,
    GL_ARB_texture_rg,
    GL_ARB_vertex_array_object,
    GL_ARB_uniform_buffer_object,
    GL_ARB_compatibility,
    GL_ARB_copy_buffer,
    GL_ARB_depth_clamp,
    GL_ARB_draw_elements_base_vertex,
    GL_ARB_seamless_cube_map,
    GL_ARB_sync,
    GL_ARB_texture_multisample,
    GL_ARB_sample_shading,
    GL_ARB_texture_compression_bptc,
    GL_ARB_blend_func_extended,
    GL_ARB_explicit_attrib_location,
    GL_ARB_sampler_objects,
    GL_ARB_texture_swizzle,
    GL_ARB_timer_query,
    GL_ARB_draw_indirect,
    GL_ARB_gpu_shader5,
    GL_ARB_tessellation_shader,
    GL_ARB_ES2_compatibility,
    GL_ARB_get_program_binary,
    GL_ARB_separate_shader_objects,
    GL_ARB_viewport_array,
    GL_ARB_debug_output,
    GL_ARB_robustness,
    GL_ARB_base_instance,
    GL_ARB_shader_atomic_counters,
    GL_ARB_shader_image_load_store,
    GL_ARB_texture_storage,
    GL_ARB_clear_buffer_object,
    GL_ARB_compute_shader,
    GL_ARB_copy_image,
    GL_ARB_texture_view,
    GL_ARB_vertex_attrib_binding,
    GL_ARB_ES3_compatibility,
    GL_ARB_multi_draw_indirect,
    GL_ARB_program_interface_query,
    GL_ARB_shader_storage_buffer_object,
    GL_ARB_buffer_storage,
    GL_ARB_clear_texture,
    GL_ARB_multi_bind,
    GL_ARB_bindless_texture,
    GL_ARB_sparse_texture,
    GL_ARB_clip_control,
    GL_ARB_direct_state_access,
    GL_ARB_texture_barrier,
    GL_ARB_parallel_shader_compile,
    GL_ARB_gl_spirv,
    GL_KHR_debug,
    GL_KHR_no_error,
    GL_KHR_texture_compression_astc_ldr,
    GL_EXT_texture_filter_anisotropic,
    GL_EXT_texture_compression_s3tc,
    GL_EXT_texture_sRGB,
    GL_EXT_texture_sRGB_decode,
    GL_EXT_framebuffer_object,
    GL_EXT_framebuffer_blit,
    GL_EXT_framebuffer_multisample,
    GL_EXT_separate_shader_objects,
    GL_EXT_direct_state_access,
    GL_EXT_swap_control,
    GL_NV_bindless_texture,
    GL_NV_shader_buffer_load,
    GL_NV_texture_barrier,
    GL_AMD_debug_output,
    GL_AMD_pinned_memory,
    GL_AMD_multi_draw_indirect,
    GL_APPLE_texture_range,
    GL_APPLE_float_pixels,
    WGL_ARB_extensions_string,
    WGL_ARB_pixel_format,
    WGL_ARB_create_context,
    WGL_EXT_swap_control,
    WGL_EXT_swap_control_tear,
    GLX_ARB_get_proc_address,
    GLX_ARB_create_context,
    GLX_EXT_swap_control,
    GLX_EXT_swap_control_tear,
}

impl Extension {
    /// Position in [`Extension::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Case-insensitive lookup by registry name.
    pub fn from_name(name: &str) -> Option<Extension> {
        Self::ALL
            .iter()
            .copied()
            .find(|extension| extension.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position() {
        for (i, extension) in Extension::ALL.iter().enumerate() {
            assert_eq!(extension.index(), i);
        }
        assert_eq!(Extension::COUNT, Extension::ALL.len());
    }

    #[test]
    fn names_are_verbatim() {
        assert_eq!(Extension::GL_KHR_debug.name(), "GL_KHR_debug");
        assert_eq!(Extension::WGL_EXT_swap_control.name(), "WGL_EXT_swap_control");
    }

    #[test]
    fn from_name_ignores_case() {
        assert_eq!(Extension::from_name("gl_arb_sync"), Some(Extension::GL_ARB_sync));
        assert_eq!(Extension::from_name("GL_ARB_SYNC"), Some(Extension::GL_ARB_sync));
        assert_eq!(Extension::from_name("GL_ARB_nonexistent"), None);
    }
}
