use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub required: bool,
    pub children: Children,
}

/// Label + control + mensaje de error del campo
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let class = classes!("field", props.error.is_some().then_some("field-invalid"));

    html! {
        <div {class}>
            <label for={props.id.clone()} class="field-label">
                {props.label.as_str()}
                if props.required {
                    <span class="required">{"*"}</span>
                }
            </label>
            { for props.children.iter() }
            if let Some(error) = &props.error {
                <div class="field-error" role="alert">{error.clone()}</div>
            }
        </div>
    }
}
