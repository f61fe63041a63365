use crate::domain::reports::{ReportDialog, ReportDraft, ReportReason, MAX_ADDITIONAL_INFO_CHARS};
use crate::domain::Profile;
use crate::templates::{desktop_layout, notice};
use maud::{html, Markup};
use url::form_urlencoded;

pub struct ReportVm<'a> {
    pub profile: &'a Profile,
    pub reported_id: &'a str,
    pub reported_name: &'a str,
    pub dialog: &'a ReportDialog,
    pub draft: &'a ReportDraft,
}

pub fn report_page(vm: &ReportVm) -> Markup {
    let dialog = vm.dialog;
    let disabled = dialog.locked() || dialog.submitted;
    let action = format!(
        "/reportes/{}?{}",
        vm.reported_id,
        form_urlencoded::Serializer::new(String::new())
            .append_pair("nombre", vm.reported_name)
            .finish()
    );

    desktop_layout(
        "Reportar arrendatario",
        Some(vm.profile),
        html! {
            main class="container narrow" {
                h1 { "Reportar a " (vm.reported_name) }
                p class="dialog-message" { (dialog.message()) }

                @if let Some(msg) = &dialog.notice {
                    (notice(if dialog.submitted { "success" } else { "error" }, msg))
                }

                form class="report-form" method="post" action=(action) {
                    fieldset disabled[disabled] {
                        legend { "Motivo del reporte" }
                        @for reason in ReportReason::ALL {
                            label class="reason" {
                                input type="radio" name="motivo" value=(reason.as_wire())
                                    checked[vm.draft.reason == Some(reason)];
                                " " (reason.label())
                            }
                        }

                        label for="informacion_adicional" { "Información adicional (opcional)" }
                        textarea id="informacion_adicional" name="informacion_adicional"
                            rows="4" maxlength=(MAX_ADDITIONAL_INFO_CHARS) {
                            (vm.draft.additional_info)
                        }
                        p class="char-count" {
                            (vm.draft.info_len()) "/" (MAX_ADDITIONAL_INFO_CHARS) " caracteres"
                        }
                    }
                    button type="submit" class="btn btn-danger" disabled[disabled] {
                        (dialog.submit_label())
                    }
                    a href="/perfil" class="btn-link" { "Cancelar" }
                }
            }
        },
    )
}
