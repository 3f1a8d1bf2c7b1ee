//! WebAssembly entry point for the Lets Learn pages.
//!
//! Hydrates the server-rendered markup so the retry control on the error
//! panel and client-side navigation between items work in the browser.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the application on the client.
///
/// Initializes `console_log` so render failures logged by the error panel
/// reach the browser console, installs the panic hook, then mounts
/// `app::component` over the existing DOM.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(component);
}
