use std::sync::Once;

static INIT: Once = Once::new();

/// Route `log` output to the browser console and report panics there.
/// Later calls are ignored.
pub fn init(level: log::Level) {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(level) {
            web_sys::console::warn_1(&format!("logger already set: {}", e).into());
        }
    });
}
