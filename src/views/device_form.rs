use yew::prelude::*;

use crate::hooks::use_device_form;
use crate::viewmodels::device_form_viewmodel::{
    field_label, FIELD_CPU_MODEL, FIELD_HARD_DISK_SIZE, FIELD_NAME, FIELD_PRICE, FIELD_YEAR,
};
use crate::viewmodels::DeviceFormKind;
use super::shared::{on_field_blur, on_form_submit, on_input_text, FormField};

/// (campo, inputmode, placeholder)
const FIELDS: [(&str, &str, &str); 5] = [
    (FIELD_NAME, "text", "Apple MacBook Pro 16"),
    (FIELD_YEAR, "numeric", "2019"),
    (FIELD_PRICE, "decimal", "1849.99"),
    (FIELD_CPU_MODEL, "text", "Intel Core i9"),
    (FIELD_HARD_DISK_SIZE, "text", "1 TB"),
];

#[derive(Properties, PartialEq)]
pub struct DeviceFormProps {
    pub kind: DeviceFormKind,
}

#[function_component(DeviceForm)]
pub fn device_form(props: &DeviceFormProps) -> Html {
    let handle = use_device_form(props.kind);
    let vm = handle.view_model.borrow();
    let form = vm.form();
    let is_submitting = vm.is_submitting();

    let fields = FIELDS.iter().map(|&(field, input_mode, placeholder)| {
        let class = classes!("input", vm.is_field_invalid(field).then_some("is-invalid"));
        html! {
            <FormField id={field} label={field_label(field).to_string()} error={vm.field_error(field)} required=true>
                <input
                    id={field}
                    type="text"
                    {class}
                    inputmode={input_mode}
                    placeholder={placeholder}
                    value={form.text(field).to_string()}
                    disabled={is_submitting}
                    oninput={on_input_text(field, &handle.on_input)}
                    onblur={on_field_blur(field, &handle.on_blur)}
                />
            </FormField>
        }
    });

    html! {
        <section class="device-form">
            <h2>{vm.config().kind.title()}</h2>

            if let Some(message) = vm.success_message() {
                <div class="alert alert-success" role="status">{message}</div>
            }
            if let Some(message) = vm.error_message() {
                <div class="alert alert-error" role="alert">{message}</div>
            }

            <form onsubmit={on_form_submit(&handle.on_submit)} novalidate=true>
                { for fields }
                <button type="submit" class="submit-btn" disabled={is_submitting}>
                    { if is_submitting { "Submitting..." } else { "Submit" } }
                </button>
            </form>
        </section>
    }
}

#[function_component(AddObject)]
pub fn add_object() -> Html {
    html! { <DeviceForm kind={DeviceFormKind::Object} /> }
}

#[function_component(AddComputer)]
pub fn add_computer() -> Html {
    html! { <DeviceForm kind={DeviceFormKind::Computer} /> }
}
