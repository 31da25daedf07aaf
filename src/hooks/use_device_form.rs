// ============================================================================
// USE DEVICE FORM - Envío asíncrono del formulario de alta
// ============================================================================

use yew::prelude::*;

use crate::services::{ApiClient, ObjectsBackend};
use crate::viewmodels::{DeviceFormConfig, DeviceFormKind, DeviceFormViewModel};
use super::{use_view_model, UseViewModelHandle};

pub struct UseDeviceFormHandle {
    pub view_model: UseViewModelHandle<DeviceFormViewModel>,
    pub on_input: Callback<(&'static str, String)>,
    pub on_blur: Callback<&'static str>,
    pub on_submit: Callback<()>,
}

#[hook]
pub fn use_device_form(kind: DeviceFormKind) -> UseDeviceFormHandle {
    let view_model = use_view_model(move || DeviceFormViewModel::new(DeviceFormConfig::for_kind(kind)));
    let client = use_memo((), |_| ApiClient::new());

    let on_input = {
        let view_model = view_model.clone();
        Callback::from(move |(field, value): (&'static str, String)| {
            view_model.update(|vm| vm.update_field(field, value));
        })
    };

    let on_blur = {
        let view_model = view_model.clone();
        Callback::from(move |field: &'static str| {
            view_model.update(|vm| vm.touch(field));
        })
    };

    let on_submit = {
        let view_model = view_model.clone();
        Callback::from(move |_| {
            // is_submitting queda activo antes de lanzar la petición
            let Some(request) = view_model.update(|vm| vm.begin_submit()) else {
                return;
            };

            let view_model = view_model.clone();
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.create_object(&request).await;
                view_model.update(|vm| vm.complete_submit(result));
            });
        })
    };

    UseDeviceFormHandle {
        view_model,
        on_input,
        on_blur,
        on_submit,
    }
}
