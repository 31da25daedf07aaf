use yew::prelude::*;

use crate::hooks::use_shipping_form;
use crate::models::RelatedProduct;
use crate::viewmodels::shipping_viewmodel::{
    field_label, FIELD_ACCEPT_TERMS, FIELD_ADDRESS, FIELD_AGE_VERIFICATION, FIELD_CITY,
    FIELD_DELIVERY_NOTE, FIELD_EMAIL, FIELD_FULL_NAME, FIELD_LOCATION, FIELD_PHONE,
    FIELD_POSTAL_CODE, LOCATIONS,
};
use super::shared::{
    on_checkbox_change, on_field_blur, on_form_submit, on_input_text, on_select_change,
    on_textarea_text, FormField,
};

/// Campos de texto simples: (campo, tipo de input, placeholder)
const TEXT_FIELDS: [(&str, &str, &str); 6] = [
    (FIELD_FULL_NAME, "text", "Value"),
    (FIELD_EMAIL, "email", "name@example.com"),
    (FIELD_PHONE, "tel", "Value"),
    (FIELD_ADDRESS, "text", "Value"),
    (FIELD_CITY, "text", "Value"),
    (FIELD_POSTAL_CODE, "text", "Value"),
];

#[function_component(ShippingInformation)]
pub fn shipping_information() -> Html {
    let handle = use_shipping_form();
    let vm = handle.view_model.borrow();
    let form = vm.form();

    let text_fields = TEXT_FIELDS.iter().map(|&(field, input_type, placeholder)| {
        html! {
            <FormField id={field} label={field_label(field).to_string()} error={vm.field_error(field)} required=true>
                <input
                    id={field}
                    type={input_type}
                    class="input"
                    placeholder={placeholder}
                    value={form.text(field).to_string()}
                    oninput={on_input_text(field, &handle.on_text)}
                    onblur={on_field_blur(field, &handle.on_blur)}
                />
            </FormField>
        }
    });

    let products = vm.related_products().iter().map(|product| {
        html! { <RelatedProductCard product={product.clone()} on_add={handle.on_add_product.clone()} /> }
    });

    html! {
        <section class="canvas-bg">
            <div class="form-card">
                <form onsubmit={on_form_submit(&handle.on_submit)} autocomplete="off">
                    <div class="legend">
                        <h2 class="legend-title">{"Shipping information"}</h2>
                        <div class="legend-desc">{"We ship within 2 working days"}</div>
                    </div>

                    <div class="checkbox-field">
                        <label class="checkbox-row">
                            <input
                                type="checkbox"
                                class="checkbox-input"
                                checked={form.checked(FIELD_AGE_VERIFICATION)}
                                onchange={on_checkbox_change(FIELD_AGE_VERIFICATION, &handle.on_checkbox)}
                                onblur={on_field_blur(FIELD_AGE_VERIFICATION, &handle.on_blur)}
                            />
                            <span class="checkbox-label">{"I confirm I am of legal age"}</span>
                        </label>
                        if let Some(error) = vm.field_error(FIELD_AGE_VERIFICATION) {
                            <div class="field-error" role="alert">{error}</div>
                        }
                    </div>

                    { for text_fields }

                    <FormField id={FIELD_LOCATION} label={field_label(FIELD_LOCATION).to_string()} error={vm.field_error(FIELD_LOCATION)} required=true>
                        <select
                            id={FIELD_LOCATION}
                            class="select"
                            onchange={on_select_change(FIELD_LOCATION, &handle.on_text)}
                            onblur={on_field_blur(FIELD_LOCATION, &handle.on_blur)}
                        >
                            <option value="" disabled=true selected={form.text(FIELD_LOCATION).is_empty()} hidden=true>{"Value"}</option>
                            { for LOCATIONS.iter().map(|location| html! {
                                <option value={*location} selected={form.text(FIELD_LOCATION) == *location}>{*location}</option>
                            }) }
                        </select>
                    </FormField>

                    <FormField id={FIELD_DELIVERY_NOTE} label={field_label(FIELD_DELIVERY_NOTE).to_string()}>
                        <textarea
                            id={FIELD_DELIVERY_NOTE}
                            class="textarea"
                            rows="2"
                            placeholder="Value"
                            value={form.text(FIELD_DELIVERY_NOTE).to_string()}
                            oninput={on_textarea_text(FIELD_DELIVERY_NOTE, &handle.on_text)}
                        />
                    </FormField>

                    <div class="checkbox-field">
                        <label class="checkbox-row">
                            <input
                                type="checkbox"
                                class="checkbox-input"
                                checked={form.checked(FIELD_ACCEPT_TERMS)}
                                onchange={on_checkbox_change(FIELD_ACCEPT_TERMS, &handle.on_checkbox)}
                                onblur={on_field_blur(FIELD_ACCEPT_TERMS, &handle.on_blur)}
                            />
                            <span class="checkbox-label">{"I accept the terms"}</span>
                        </label>
                        <a href="#" class="checkbox-desc">{"Read our T&Cs"}</a>
                        if let Some(error) = vm.field_error(FIELD_ACCEPT_TERMS) {
                            <div class="field-error" role="alert">{error}</div>
                        }
                    </div>

                    <div class="button-group">
                        <button type="submit" class={classes!("submit-btn", (!vm.can_submit()).then_some("is-incomplete"))}>
                            {"Save shipping information"}
                        </button>
                    </div>
                </form>

                <div class="related-products">
                    <h3>{"You might also need"}</h3>
                    <div class="product-list">
                        { for products }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct RelatedProductCardProps {
    product: RelatedProduct,
    on_add: Callback<RelatedProduct>,
}

#[function_component(RelatedProductCard)]
fn related_product_card(props: &RelatedProductCardProps) -> Html {
    let onclick = {
        let product = props.product.clone();
        props.on_add.reform(move |_: MouseEvent| product.clone())
    };

    html! {
        <div class="product-card">
            <img src={props.product.image.clone()} alt={props.product.name.clone()} class="product-image" />
            <div class="product-info">
                <div class="product-name">{props.product.name.clone()}</div>
                <div class="product-price">{format!("${:.2}", props.product.price)}</div>
            </div>
            <button type="button" class="btn-add" {onclick}>{"Add to order"}</button>
        </div>
    }
}
