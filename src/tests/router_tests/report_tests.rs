// src/tests/router_tests/report_tests.rs

use crate::domain::reports::ReportReason;
use crate::tests::utils::{body_text, get, post_form, FakeBackend, TestApp};
use scraper::{Html, Selector};
use serde_json::json;

const URI: &str = "/reportes/41?nombre=Luis%20Vaca";

fn render(test: &TestApp, req: astra::Request) -> Html {
    let resp = test.handle(req).unwrap();
    assert_eq!(resp.status(), 200);
    Html::parse_document(&body_text(resp))
}

fn text_of(doc: &Html, selector: &str) -> String {
    doc.select(&Selector::parse(selector).unwrap())
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn submit_disabled(doc: &Html) -> bool {
    let sel = Selector::parse("form.report-form button[type=submit]").unwrap();
    doc.select(&sel)
        .next()
        .is_some_and(|b| b.value().attr("disabled").is_some())
}

#[test]
fn fresh_dialog_offers_every_reason() {
    let test = TestApp::signed_in(FakeBackend::default());
    let doc = render(&test, get(URI));

    assert_eq!(text_of(&doc, "h1"), "Reportar a Luis Vaca");
    let radios = Selector::parse(r#"input[type=radio][name=motivo]"#).unwrap();
    assert_eq!(doc.select(&radios).count(), ReportReason::ALL.len());
    assert_eq!(text_of(&doc, "form.report-form button"), "Enviar reporte");
    assert!(!submit_disabled(&doc));
}

#[test]
fn only_rejected_prior_reports_leave_the_form_open() {
    let test = TestApp::signed_in(FakeBackend {
        prior_reports: json!([{ "estado": "RECHAZADO" }]),
        ..FakeBackend::default()
    });
    assert!(!submit_disabled(&render(&test, get(URI))));

    let test = TestApp::signed_in(FakeBackend {
        prior_reports: json!([{ "estado": "RECHAZADO" }, { "estado": "PENDIENTE" }]),
        ..FakeBackend::default()
    });
    let doc = render(&test, get(URI));
    assert!(submit_disabled(&doc));
    assert_eq!(
        text_of(&doc, "form.report-form button"),
        "No se permiten múltiples reportes"
    );
}

#[test]
fn valid_report_is_sent_with_wire_names() {
    let test = TestApp::signed_in(FakeBackend::default());
    let doc = render(
        &test,
        post_form(
            URI,
            &[
                ("motivo", "daños_propiedad"),
                ("informacion_adicional", "  Rayó la puerta  "),
            ],
        ),
    );

    let sent = test.submissions.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reported_id, "41");
    assert_eq!(sent[0].reason, ReportReason::PropertyDamage);
    assert_eq!(sent[0].additional_info, "Rayó la puerta");

    assert!(text_of(&doc, ".notice-success").starts_with("Reporte enviado."));
    assert!(submit_disabled(&doc));
}

#[test]
fn missing_reason_is_rejected_locally() {
    let test = TestApp::signed_in(FakeBackend::default());
    let doc = render(&test, post_form(URI, &[("informacion_adicional", "algo")]));

    assert!(test.submissions.lock().unwrap().is_empty());
    assert_eq!(
        text_of(&doc, ".notice-error"),
        "Por favor, seleccione un motivo para el reporte"
    );
    assert!(!submit_disabled(&doc));
}

#[test]
fn additional_info_is_capped_at_two_hundred_characters() {
    let test = TestApp::signed_in(FakeBackend::default());
    let long = "ñ".repeat(201);
    let doc = render(
        &test,
        post_form(
            URI,
            &[("motivo", "otro"), ("informacion_adicional", long.as_str())],
        ),
    );

    assert!(test.submissions.lock().unwrap().is_empty());
    assert_eq!(
        text_of(&doc, ".notice-error"),
        "La información adicional no puede exceder los 200 caracteres"
    );
    assert_eq!(text_of(&doc, "p.char-count"), "201/200 caracteres");
}

#[test]
fn daily_limit_locks_the_dialog() {
    let test = TestApp::signed_in(FakeBackend {
        submit_error: Some("Has alcanzado el límite de reportes por hoy".into()),
        ..FakeBackend::default()
    });
    let doc = render(&test, post_form(URI, &[("motivo", "otro")]));

    assert_eq!(test.submissions.lock().unwrap().len(), 1);
    assert!(submit_disabled(&doc));
    assert_eq!(
        text_of(&doc, "form.report-form button"),
        "Límite de reportes alcanzado"
    );
    assert!(text_of(&doc, "p.dialog-message").contains("2 reportes/24 horas"));
}

#[test]
fn other_server_errors_are_shown_verbatim() {
    let test = TestApp::signed_in(FakeBackend {
        submit_error: Some("Usuario no encontrado".into()),
        ..FakeBackend::default()
    });
    let doc = render(&test, post_form(URI, &[("motivo", "otro")]));

    assert_eq!(text_of(&doc, ".notice-error"), "Usuario no encontrado");
    assert!(!submit_disabled(&doc));
}

#[test]
fn already_reported_blocks_submission() {
    let test = TestApp::signed_in(FakeBackend {
        prior_reports: json!([{ "estado": "PENDIENTE" }]),
        ..FakeBackend::default()
    });
    let doc = render(&test, post_form(URI, &[("motivo", "otro")]));

    assert!(test.submissions.lock().unwrap().is_empty());
    assert_eq!(
        text_of(&doc, ".notice-error"),
        "Ya has reportado a este usuario anteriormente"
    );
}

#[test]
fn unreadable_prior_reports_leave_the_dialog_usable() {
    let test = TestApp::signed_in(FakeBackend {
        prior_reports: json!({ "error": "servicio no disponible" }),
        ..FakeBackend::default()
    });

    let doc = render(&test, get(URI));
    assert!(!submit_disabled(&doc));
    assert_eq!(text_of(&doc, "form.report-form button"), "Enviar reporte");

    let doc = render(&test, post_form(URI, &[("motivo", "otro")]));
    let sent = test.submissions.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reason, ReportReason::Other);
    assert!(text_of(&doc, ".notice-success").starts_with("Reporte enviado."));
}
