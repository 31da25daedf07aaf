use yew::prelude::*;

use super::{AbsenceSummary, AddComputer, AddObject, ShippingInformation};

/// Vistas hermanas, independientes entre sí
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main class="app-root">
            <ShippingInformation />
            <AbsenceSummary />
            <AddObject />
            <AddComputer />
        </main>
    }
}
