//! Declarative table macro

/// Declare the entry point tables.
///
/// Names are written without the `gl` prefix; each entry pairs a name with
/// its C prototype. `core` entries are exported by the system GL library and
/// land in both tables, `extension` entries only in `ENTRY_POINTS`.
///
/// # Examples
///
/// ```ignore
/// entry_points! {
///     core {
///         Clear => "void glClear(GLbitfield mask)",
///     }
///     extension {
///         CreateShader => "GLuint glCreateShader(GLenum shaderType)",
///     }
/// }
/// ```
#[macro_export]
macro_rules! entry_points {
    (
        core { $($core:ident => $core_sig:literal),* $(,)? }
        extension { $($ext:ident => $ext_sig:literal),* $(,)? }
    ) => {
        /// Every bindable slot, core entries first.
        pub static ENTRY_POINTS: &[$crate::catalog::SlotDescriptor] = &[
            $(
                $crate::catalog::SlotDescriptor::new(
                    concat!("gl", stringify!($core)),
                    $crate::catalog::Signature::new($core_sig),
                ),
            )*
            $(
                $crate::catalog::SlotDescriptor::new(
                    concat!("gl", stringify!($ext)),
                    $crate::catalog::Signature::new($ext_sig),
                ),
            )*
        ];

        /// Functions the system GL library exports by name.
        pub static CORE_ENTRY_POINTS: &[$crate::catalog::CoreDescriptor] = &[
            $(
                $crate::catalog::CoreDescriptor::new(
                    stringify!($core),
                    $crate::catalog::Signature::new($core_sig),
                ),
            )*
        ];
    };
}
