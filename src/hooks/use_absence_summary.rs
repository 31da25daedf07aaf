use yew::prelude::*;

use crate::viewmodels::{AbsenceAction, AbsenceSummaryViewModel};
use super::{use_view_model, UseViewModelHandle};

pub struct UseAbsenceSummaryHandle {
    pub view_model: UseViewModelHandle<AbsenceSummaryViewModel>,
    pub on_filter: Callback<String>,
    /// (acción, id de sección, índice de la solicitud)
    pub on_action: Callback<(AbsenceAction, String, usize)>,
}

#[hook]
pub fn use_absence_summary() -> UseAbsenceSummaryHandle {
    let view_model = use_view_model(AbsenceSummaryViewModel::new);

    let on_filter = {
        let view_model = view_model.clone();
        Callback::from(move |absence_type: String| {
            view_model.update(|vm| vm.set_absence_type(absence_type));
        })
    };

    // Solo diagnóstico: no hay mutación, no hace falta re-render
    let on_action = {
        let view_model = view_model.clone();
        Callback::from(move |(action, section_id, index): (AbsenceAction, String, usize)| {
            let vm = view_model.borrow();
            match action {
                AbsenceAction::Approve => vm.approve(&section_id, index),
                AbsenceAction::Cancel => vm.cancel(&section_id, index),
                AbsenceAction::ViewDocument => vm.view_document(&section_id, index),
            };
        })
    };

    UseAbsenceSummaryHandle {
        view_model,
        on_filter,
        on_action,
    }
}
