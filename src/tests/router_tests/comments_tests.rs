// src/tests/router_tests/comments_tests.rs

use crate::tests::utils::{body_text, get, FakeBackend, TestApp};
use pretty_assertions::assert_eq;
use scraper::{Html, Selector};
use serde_json::{json, Value};

fn comment(id: i64, brand: &str, model: &str, rating: f64, day: u32) -> Value {
    json!({
        "id": id,
        "id_carro": id * 10,
        "id_usuario": 100 + id,
        "comentario": format!("Comentario {id}"),
        "calificacion": rating,
        "fecha_creacion": format!("2025-03-{day:02}T10:00:00Z"),
        "usuario": { "id": 100 + id, "nombre": format!("Usuario {id}") },
        "carro": {
            "id": id * 10,
            "marca": brand,
            "modelo": model,
            "anio": 2020,
            "imagenes": [{ "url": format!("https://img.example/{id}.jpg") }]
        }
    })
}

fn six_comments() -> Value {
    json!([
        comment(1, "Toyota", "Corolla", 4.0, 1),
        comment(2, "Nissan", "March", 3.0, 2),
        comment(3, "toyota", "Hilux", 5.0, 3),
        comment(4, "Kia", "Rio", 2.0, 4),
        comment(5, "Suzuki", "Swift", 1.5, 5),
        comment(6, "Hyundai", "Accent", 4.5, 6),
    ])
}

fn listing(payload: Value) -> TestApp {
    TestApp::signed_in(FakeBackend {
        comments: Ok(payload),
        ..FakeBackend::default()
    })
}

fn page(test: &TestApp, uri: &str) -> Html {
    let resp = test.handle(get(uri)).unwrap();
    assert_eq!(resp.status(), 200);
    Html::parse_document(&body_text(resp))
}

fn card_ids(doc: &Html) -> Vec<String> {
    let sel = Selector::parse("article.comment-card").unwrap();
    doc.select(&sel)
        .filter_map(|el| el.value().attr("data-comment-id"))
        .map(str::to_string)
        .collect()
}

fn count(doc: &Html, selector: &str) -> usize {
    doc.select(&Selector::parse(selector).unwrap()).count()
}

fn text_of(doc: &Html, selector: &str) -> String {
    doc.select(&Selector::parse(selector).unwrap())
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default()
}

#[test]
fn newest_first_four_per_page() {
    let test = listing(six_comments());
    let doc = page(&test, "/calificaciones");

    assert_eq!(card_ids(&doc), vec!["6", "5", "4", "3"]);
    assert_eq!(count(&doc, "nav.pager"), 1);
    assert_eq!(text_of(&doc, ".pager-page.current"), "1");
}

#[test]
fn search_narrows_results_and_hides_the_pager() {
    let test = listing(six_comments());
    let doc = page(&test, "/calificaciones?q=TOYOTA");

    assert_eq!(card_ids(&doc), vec!["3", "1"]);
    assert_eq!(count(&doc, "nav.pager"), 0);
}

#[test]
fn requested_page_beyond_results_is_clamped() {
    let test = listing(six_comments());
    let doc = page(
        &test,
        "/calificaciones?orden=calificacion&direccion=ascendente&pagina=7",
    );

    assert_eq!(card_ids(&doc), vec!["6", "3"]);
    assert_eq!(text_of(&doc, ".pager-page.current"), "2");
    assert_eq!(count(&doc, "a.pager-next"), 0);
}

#[test]
fn date_range_needs_both_bounds() {
    let test = listing(six_comments());

    let doc = page(&test, "/calificaciones?desde=2025-03-02&hasta=2025-03-03");
    assert_eq!(card_ids(&doc), vec!["3", "2"]);

    let doc = page(&test, "/calificaciones?desde=2025-03-05");
    assert_eq!(card_ids(&doc), vec!["6", "5", "4", "3"]);
}

#[test]
fn sorts_by_vehicle_name_ignoring_case() {
    let test = listing(six_comments());
    let doc = page(&test, "/calificaciones?orden=nombre&direccion=ascendente");

    // Hyundai, Kia, Nissan, Suzuki, then the two Toyotas on page two.
    assert_eq!(card_ids(&doc), vec!["6", "4", "2", "5"]);
}

#[test]
fn pager_links_keep_the_filters() {
    let many: Vec<Value> = (1..=9).map(|i| comment(i, "Kia", "Rio", 3.0, i as u32)).collect();
    let test = listing(Value::Array(many));
    let doc = page(&test, "/calificaciones?q=kia&orden=calificacion");

    let next = Selector::parse("a.pager-next").unwrap();
    let href = doc
        .select(&next)
        .next()
        .and_then(|a| a.value().attr("href"))
        .unwrap();
    assert!(href.starts_with("/calificaciones?"));
    assert!(href.contains("q=kia"));
    assert!(href.contains("orden=calificacion"));
    assert!(href.contains("direccion=descendente"));
    assert!(href.contains("pagina=2"));
    assert_eq!(count(&doc, "a.pager-page"), 2);
}

#[test]
fn card_shows_vehicle_date_stars_and_author() {
    let test = listing(json!([comment(1, "Toyota", "Corolla", 3.5, 1)]));
    let doc = page(&test, "/calificaciones");

    assert_eq!(text_of(&doc, "article h3.vehicle"), "Toyota Corolla 2020");
    assert_eq!(text_of(&doc, "article time.date"), "1 marzo 2025");
    assert_eq!(text_of(&doc, "article p.text"), "Comentario 1");
    assert_eq!(text_of(&doc, "article p.author"), "Usuario 1");
    assert_eq!(count(&doc, "article .star-full"), 3);
    assert_eq!(count(&doc, "article .star-half"), 1);
    assert_eq!(count(&doc, "article .star-empty"), 1);
    assert_eq!(count(&doc, r#"img.cover[src="https://img.example/1.jpg"]"#), 1);
}

#[test]
fn sparse_records_use_fallbacks() {
    let test = listing(json!([{
        "id": 1,
        "calificacion": "4",
        "comentario": "",
        "fecha_creacion": "2025-03-01 08:00:00",
        "usuario": { "nombre": "Carla" }
    }]));
    let doc = page(&test, "/calificaciones");

    assert_eq!(text_of(&doc, "article h3.vehicle"), "Vehículo");
    assert_eq!(text_of(&doc, "article p.text"), "Sin comentarios");
    assert_eq!(count(&doc, "article .cover.placeholder"), 1);
    assert_eq!(count(&doc, "article .star-full"), 4);
}

#[test]
fn no_matches_show_the_empty_state() {
    let test = listing(six_comments());
    let doc = page(&test, "/calificaciones?q=ferrari");

    assert!(card_ids(&doc).is_empty());
    assert_eq!(
        text_of(&doc, "p.empty-state"),
        "No se encontraron comentarios con los filtros aplicados."
    );
}

#[test]
fn fetch_failure_shows_a_notice_and_the_empty_state() {
    let test = TestApp::signed_in(FakeBackend {
        comments: Err(500),
        ..FakeBackend::default()
    });
    let doc = page(&test, "/calificaciones");

    assert_eq!(count(&doc, ".notice-error"), 1);
    assert_eq!(
        text_of(&doc, ".notice-error"),
        "No se pudieron cargar los comentarios. El servidor respondió con un error (500)."
    );
    assert_eq!(count(&doc, "p.empty-state"), 1);
}

#[test]
fn malformed_envelope_is_rejected_whole() {
    let test = listing(json!({ "comentarios": [] }));
    let doc = page(&test, "/calificaciones");
    assert_eq!(
        text_of(&doc, ".notice-error"),
        "No se pudieron cargar los comentarios. La respuesta del servidor no tiene el formato esperado."
    );

    let test = listing(json!([comment(1, "Kia", "Rio", 3.0, 1), 42]));
    let doc = page(&test, "/calificaciones");
    assert!(card_ids(&doc).is_empty());
    assert_eq!(count(&doc, ".notice-error"), 1);
}

#[test]
fn backend_detail_stays_out_of_the_page() {
    let test = TestApp::signed_in(FakeBackend {
        comments: Err(503),
        ..FakeBackend::default()
    });
    let html = body_text(test.handle(get("/calificaciones")).unwrap());

    assert!(html.contains("El servidor respondió con un error (503)."));
    assert!(!html.contains("Backend"));
    assert!(!html.contains("fallo del servidor"));
}
