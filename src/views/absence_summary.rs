use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::use_absence_summary;
use crate::models::{AbsenceSection, AbsenceStatus};
use crate::viewmodels::absence_viewmodel::{status_class, status_text, FIELD_ABSENCE_TYPE};
use crate::viewmodels::AbsenceAction;

#[function_component(AbsenceSummary)]
pub fn absence_summary() -> Html {
    let handle = use_absence_summary();
    let vm = handle.view_model.borrow();

    let on_filter_change = handle.on_filter.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    });

    let selected = vm.absence_type().to_string();

    html! {
        <section class="absence-summary">
            <header class="absence-header">
                <h2>{"Resumen de ausencias"}</h2>
                <select
                    id={FIELD_ABSENCE_TYPE}
                    class="select"
                    onchange={on_filter_change}
                >
                    <option value="" selected={selected.is_empty()}>{"Todos los tipos"}</option>
                    { for vm.sections().iter().map(|section| html! {
                        <option value={section.id.clone()} selected={section.id == selected}>{section.title.clone()}</option>
                    }) }
                </select>
            </header>

            { for vm.visible_sections().into_iter().map(|section| html! {
                <AbsenceSectionCard section={section.clone()} on_action={handle.on_action.clone()} />
            }) }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AbsenceSectionCardProps {
    section: AbsenceSection,
    on_action: Callback<(AbsenceAction, String, usize)>,
}

#[function_component(AbsenceSectionCard)]
fn absence_section_card(props: &AbsenceSectionCardProps) -> Html {
    let section = &props.section;

    let action_button = |action: AbsenceAction, index: usize, label: &'static str, class: &'static str| {
        let section_id = section.id.clone();
        let onclick = props
            .on_action
            .reform(move |_: MouseEvent| (action, section_id.clone(), index));
        html! { <button type="button" class={classes!("btn-action", class)} {onclick}>{label}</button> }
    };

    let rows = section.requests.iter().enumerate().map(|(index, request)| {
        let status = request.status.as_str();
        html! {
            <tr>
                <td>{request.start_date.clone()}</td>
                <td>{request.end_date.clone()}</td>
                if section.shows_hours() {
                    <td>{request.hours.clone().unwrap_or_default()}</td>
                }
                <td>
                    <span class={classes!("status-badge", status_class(status))}>
                        {status_text(status)}
                    </span>
                </td>
                if section.shows_justifications() {
                    <td>
                        if request.has_document.unwrap_or(false) {
                            { action_button(AbsenceAction::ViewDocument, index, "Ver documento", "btn-document") }
                        }
                    </td>
                }
                <td class="actions">
                    if request.status == AbsenceStatus::Pending {
                        { action_button(AbsenceAction::Approve, index, "Aprobar", "btn-approve") }
                    }
                    if request.status != AbsenceStatus::Cancelled {
                        { action_button(AbsenceAction::Cancel, index, "Cancelar", "btn-cancel") }
                    }
                </td>
            </tr>
        }
    });

    html! {
        <article class="absence-section">
            <div class="absence-section-header">
                <span class="absence-color" style={format!("background-color: {}", section.color)}></span>
                <h3>{section.title.clone()}</h3>
                if !section.available.is_empty() {
                    <span class="absence-available">{section.available.clone()}</span>
                }
            </div>
            if section.requests.is_empty() {
                <p class="absence-empty">{"Sin solicitudes"}</p>
            } else {
                <table class="absence-requests">
                    <thead>
                        <tr>
                            <th>{"Inicio"}</th>
                            <th>{"Fin"}</th>
                            if section.shows_hours() {
                                <th>{"Horas"}</th>
                            }
                            <th>{"Estado"}</th>
                            if section.shows_justifications() {
                                <th>{"Justificante"}</th>
                            }
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows }
                    </tbody>
                </table>
            }
        </article>
    }
}
