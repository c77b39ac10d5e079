//! Platform logging initialization for shortener_web.
//!
//! Log lines go to the browser devtools console; panics are reported there
//! too instead of surfacing as an opaque `unreachable` trap.

pub fn initialize() {
    console_error_panic_hook::set_once();
    shortener_logging::initialize_for_browser();
}
