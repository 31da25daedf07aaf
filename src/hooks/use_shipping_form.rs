use yew::prelude::*;

use crate::models::RelatedProduct;
use crate::utils::alert;
use crate::viewmodels::ShippingViewModel;
use super::{use_view_model, UseViewModelHandle};

pub struct UseShippingFormHandle {
    pub view_model: UseViewModelHandle<ShippingViewModel>,
    pub on_text: Callback<(&'static str, String)>,
    pub on_checkbox: Callback<(&'static str, bool)>,
    pub on_blur: Callback<&'static str>,
    pub on_submit: Callback<()>,
    pub on_add_product: Callback<RelatedProduct>,
}

#[hook]
pub fn use_shipping_form() -> UseShippingFormHandle {
    let view_model = use_view_model(ShippingViewModel::new);

    let on_text = {
        let view_model = view_model.clone();
        Callback::from(move |(field, value): (&'static str, String)| {
            view_model.update(|vm| vm.update_text(field, value));
        })
    };

    let on_checkbox = {
        let view_model = view_model.clone();
        Callback::from(move |(field, checked): (&'static str, bool)| {
            view_model.update(|vm| vm.update_checkbox(field, checked));
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
            let message = view_model.update(|vm| vm.submit_feedback());
            alert(message);
        })
    };

    let on_add_product = {
        let view_model = view_model.clone();
        Callback::from(move |product: RelatedProduct| {
            let message = view_model.borrow().add_product(&product);
            alert(&message);
        })
    };

    UseShippingFormHandle {
        view_model,
        on_text,
        on_checkbox,
        on_blur,
        on_submit,
        on_add_product,
    }
}
