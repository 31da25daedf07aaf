// ============================================================================
// BROWSER - Efectos secundarios del navegador (alert)
// ============================================================================

use web_sys::window;

/// Muestra un alert nativo; sin `window` (tests nativos) solo se registra en el log
pub fn alert(message: &str) {
    match window() {
        Some(win) => {
            let _ = win.alert_with_message(message);
        }
        None => log::warn!("⚠️ Sin window, alert omitido: {}", message),
    }
}
