// ============================================================================
// ABSENCE SUMMARY VIEWMODEL - Resumen de ausencias (solo lectura)
// ============================================================================
// Datos estáticos; las acciones solo emiten un registro de diagnóstico.
// ============================================================================

use std::fmt;

use crate::forms::{FormControl, FormGroup};
use crate::models::{AbsenceRequest, AbsenceSection, AbsenceStatus};

pub const FIELD_ABSENCE_TYPE: &str = "absenceType";

/// Texto visible del estado; códigos desconocidos se devuelven tal cual
pub fn status_text(status: &str) -> &str {
    match status {
        "approved" => "Aprobado",
        "pending" => "Pendiente",
        "cancelled" => "Cancelado",
        other => other,
    }
}

/// Clase CSS del estado; "" para códigos desconocidos
pub fn status_class(status: &str) -> &'static str {
    match status {
        "approved" => "status-approved",
        "pending" => "status-pending",
        "cancelled" => "status-cancelled",
        _ => "",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsenceAction {
    Approve,
    Cancel,
    ViewDocument,
}

impl fmt::Display for AbsenceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AbsenceAction::Approve => "Approve request",
            AbsenceAction::Cancel => "Cancel request",
            AbsenceAction::ViewDocument => "View document",
        };
        f.write_str(label)
    }
}

/// Registro (acción, sección, índice) emitido por cada botón
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    pub action: AbsenceAction,
    pub section_id: String,
    pub index: usize,
}

pub struct AbsenceSummaryViewModel {
    sections: Vec<AbsenceSection>,
    filter_form: FormGroup,
}

impl AbsenceSummaryViewModel {
    pub fn new() -> Self {
        Self {
            sections: default_absence_sections(),
            filter_form: FormGroup::new().with_control(FIELD_ABSENCE_TYPE, FormControl::new("", vec![])),
        }
    }

    pub fn sections(&self) -> &[AbsenceSection] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&AbsenceSection> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn filter_form(&self) -> &FormGroup {
        &self.filter_form
    }

    pub fn absence_type(&self) -> &str {
        self.filter_form.text(FIELD_ABSENCE_TYPE)
    }

    pub fn set_absence_type(&mut self, absence_type: String) {
        self.filter_form.set_value(FIELD_ABSENCE_TYPE, absence_type);
    }

    pub fn reset_filter(&mut self) {
        self.filter_form.reset();
    }

    /// Sin filtro se muestran todas las secciones
    pub fn visible_sections(&self) -> Vec<&AbsenceSection> {
        let absence_type = self.absence_type();
        self.sections
            .iter()
            .filter(|section| absence_type.is_empty() || section.id == absence_type)
            .collect()
    }

    pub fn approve(&self, section_id: &str, index: usize) -> ActionRecord {
        Self::record(AbsenceAction::Approve, section_id, index)
    }

    pub fn cancel(&self, section_id: &str, index: usize) -> ActionRecord {
        Self::record(AbsenceAction::Cancel, section_id, index)
    }

    pub fn view_document(&self, section_id: &str, index: usize) -> ActionRecord {
        Self::record(AbsenceAction::ViewDocument, section_id, index)
    }

    fn record(action: AbsenceAction, section_id: &str, index: usize) -> ActionRecord {
        log::info!("📝 {} {} {}", action, section_id, index);
        ActionRecord {
            action,
            section_id: section_id.to_string(),
            index,
        }
    }
}

impl Default for AbsenceSummaryViewModel {
    fn default() -> Self {
        Self::new()
    }
}

fn request(start_date: &str, end_date: &str, status: AbsenceStatus) -> AbsenceRequest {
    AbsenceRequest {
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        status,
        hours: None,
        has_document: None,
    }
}

fn hours_request(
    start_date: &str,
    status: AbsenceStatus,
    hours: &str,
    has_document: Option<bool>,
) -> AbsenceRequest {
    AbsenceRequest {
        hours: Some(hours.to_string()),
        has_document,
        ..request(start_date, "", status)
    }
}

fn section(id: &str, title: &str, color: &str, available: &str, requests: Vec<AbsenceRequest>) -> AbsenceSection {
    AbsenceSection {
        id: id.to_string(),
        title: title.to_string(),
        color: color.to_string(),
        available: available.to_string(),
        requests,
        has_hours: None,
        has_justifications: None,
    }
}

fn hours_section(id: &str, title: &str, color: &str, available: &str, requests: Vec<AbsenceRequest>) -> AbsenceSection {
    AbsenceSection {
        has_hours: Some(true),
        has_justifications: Some(true),
        ..section(id, title, color, available, requests)
    }
}

pub fn default_absence_sections() -> Vec<AbsenceSection> {
    use AbsenceStatus::{Approved, Pending};

    vec![
        section(
            "vacations",
            "Vacaciones",
            "#22c55e",
            "10 de 20 días disponibles",
            vec![
                request("01/01/2023", "05/01/2023", Approved),
                request("04/04/2023", "06/04/2023", Pending),
            ],
        ),
        section(
            "bridges",
            "Puentes",
            "#ef4444",
            "0 de 1 día disponible",
            vec![request("01/05/2023", "03/05/2023", Approved)],
        ),
        hours_section(
            "free-hours",
            "Horas de libre disposición",
            "#f97316",
            "16 de 24 horas disponibles",
            vec![
                hours_request("02/03/2023", Approved, "3h", Some(true)),
                hours_request("01/05/2023", Pending, "1h", Some(true)),
            ],
        ),
        hours_section(
            "paid-leave",
            "Permisos Retribuidos",
            "#8b5cf6",
            "Sin Límite",
            vec![hours_request("02/03/2023", Approved, "3h", None)],
        ),
        section("medical-leave", "Baja médica", "#8b5cf6", "Sin Límite", vec![]),
        section("maternity-leave", "Baja de maternidad / paternidad", "#6b7280", "", vec![]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(status_text("approved"), "Aprobado");
        assert_eq!(status_text("pending"), "Pendiente");
        assert_eq!(status_text("cancelled"), "Cancelado");
        assert_eq!(status_text("rejected"), "rejected");
        assert_eq!(status_text(""), "");
    }

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(AbsenceStatus::Approved.as_str()), "status-approved");
        assert_eq!(status_class("pending"), "status-pending");
        assert_eq!(status_class("cancelled"), "status-cancelled");
        assert_eq!(status_class("unknown"), "");
        assert_eq!(status_class(""), "");
    }

    #[test]
    fn test_six_sections_in_order() {
        let vm = AbsenceSummaryViewModel::new();
        let ids: Vec<&str> = vm.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["vacations", "bridges", "free-hours", "paid-leave", "medical-leave", "maternity-leave"]
        );
    }

    #[test]
    fn test_section_details() {
        let vm = AbsenceSummaryViewModel::new();

        let vacations = vm.section("vacations").unwrap();
        assert_eq!(vacations.available, "10 de 20 días disponibles");
        assert_eq!(vacations.requests.len(), 2);
        assert_eq!(vacations.has_hours, None);
        assert_eq!(vacations.requests[0].end_date, "05/01/2023");
        assert_eq!(vacations.requests[1].status, AbsenceStatus::Pending);

        let free_hours = vm.section("free-hours").unwrap();
        assert!(free_hours.shows_hours());
        assert!(free_hours.shows_justifications());
        assert_eq!(free_hours.requests[0].hours.as_deref(), Some("3h"));
        assert_eq!(free_hours.requests[0].end_date, "");
        assert_eq!(free_hours.requests[1].has_document, Some(true));

        let paid_leave = vm.section("paid-leave").unwrap();
        assert_eq!(paid_leave.requests[0].has_document, None);

        let maternity = vm.section("maternity-leave").unwrap();
        assert_eq!(maternity.color, "#6b7280");
        assert_eq!(maternity.available, "");
        assert!(maternity.requests.is_empty());
        assert!(!maternity.shows_hours());
    }

    #[test]
    fn test_actions_emit_records_without_mutation() {
        let vm = AbsenceSummaryViewModel::new();
        let before = vm.sections().to_vec();

        assert_eq!(
            vm.approve("vacations", 0),
            ActionRecord {
                action: AbsenceAction::Approve,
                section_id: "vacations".to_string(),
                index: 0,
            }
        );
        assert_eq!(vm.cancel("bridges", 5).action, AbsenceAction::Cancel);
        let record = vm.view_document("free-hours", 1);
        assert_eq!(record.action.to_string(), "View document");
        assert_eq!(record.index, 1);

        assert_eq!(vm.sections(), before.as_slice());
    }

    #[test]
    fn test_filter_by_absence_type() {
        let mut vm = AbsenceSummaryViewModel::new();
        assert_eq!(vm.absence_type(), "");
        assert_eq!(vm.visible_sections().len(), 6);

        vm.set_absence_type("bridges".to_string());
        let visible = vm.visible_sections();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Puentes");

        vm.reset_filter();
        assert_eq!(vm.absence_type(), "");
        assert_eq!(vm.visible_sections().len(), 6);
    }
}
