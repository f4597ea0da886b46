fn main() {
    if let Err(e) = theme_toggle::run() {
        wasm_bindgen::throw_val(e);
    }
}
