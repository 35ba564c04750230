//! Profiling scopes based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the macros expand to nothing, so the
//! hot paths that carry them pay no cost.

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __tesser_profile_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::__tesser_profile_noop as profile_function;
#[cfg(not(feature = "profiling"))]
pub use crate::__tesser_profile_noop as profile_scope;

/// Turn scope collection on or off.
///
/// Does nothing without the `profiling` feature.
pub fn set_enabled(enabled: bool) {
    #[cfg(feature = "profiling")]
    {
        puffin::set_scopes_on(enabled);
        tracing::info!(enabled, "puffin scopes toggled");
    }
    #[cfg(not(feature = "profiling"))]
    let _ = enabled;
}

/// Mark the start of a new profiling frame.
///
/// Call this once per frame from the transform loop to group scopes by frame.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_frame() {
        set_enabled(true);
        #[cfg(feature = "profiling")]
        assert!(puffin::are_scopes_on());
        {
            profile_scope!("toggle_and_frame");
            let mut v = crate::Vector4::default();
            v.rotate_axis(0.5, 0.0, 0.0, 1.0);
        }
        new_frame();

        set_enabled(false);
        #[cfg(feature = "profiling")]
        assert!(!puffin::are_scopes_on());
        new_frame();
    }
}
