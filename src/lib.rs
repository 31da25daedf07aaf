// ============================================================================
// SHIPPING INFO APP - FRONTEND MVVM (YEW)
// ============================================================================
// - Views: componentes Yew (solo html!)
// - Hooks: puente ViewModel <-> Yew (Rc<RefCell> + re-render)
// - ViewModels: estado + lógica UI
// - Forms: esquemas declarativos y validadores
// - Services: SOLO comunicación API
// - Models: estructuras compartidas con la API
// ============================================================================

pub mod config;
pub mod forms;
pub mod models;
pub mod services;
pub mod viewmodels;

mod hooks;
mod utils;
mod views;

pub use views::App;

use crate::config::CONFIG;

/// Punto de entrada del navegador
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Shipping info app starting (objects API: {})", CONFIG.objects_url());

    yew::Renderer::<App>::new().render();
}
