use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Callback de texto para <input>
pub fn on_input_text(field: &'static str, callback: &Callback<(&'static str, String)>) -> Callback<InputEvent> {
    callback.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (field, input.value())
    })
}

pub fn on_textarea_text(field: &'static str, callback: &Callback<(&'static str, String)>) -> Callback<InputEvent> {
    callback.reform(move |e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        (field, textarea.value())
    })
}

pub fn on_select_change(field: &'static str, callback: &Callback<(&'static str, String)>) -> Callback<Event> {
    callback.reform(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        (field, select.value())
    })
}

pub fn on_checkbox_change(field: &'static str, callback: &Callback<(&'static str, bool)>) -> Callback<Event> {
    callback.reform(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (field, input.checked())
    })
}

pub fn on_field_blur(field: &'static str, callback: &Callback<&'static str>) -> Callback<FocusEvent> {
    callback.reform(move |_: FocusEvent| field)
}

/// Evita el submit nativo del navegador
pub fn on_form_submit(callback: &Callback<()>) -> Callback<SubmitEvent> {
    callback.reform(|e: SubmitEvent| e.prevent_default())
}
