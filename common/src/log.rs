//! Status macros shared by every crate in the workspace.
//!
//! They forward to `tracing`; the terminal formatter in the CLI picks the
//! status symbol from the event target.

pub const SUCCESS_TARGET: &str = "checkr::success";
pub const PRINT_TARGET: &str = "checkr::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "checkr::success", $($arg)*)
    };
}
