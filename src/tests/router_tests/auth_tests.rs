// src/tests/router_tests/auth_tests.rs

use crate::db::credentials::load_token;
use crate::tests::utils::{
    body_text, get, location, post_form, renter_profile, FakeBackend, TestApp, TOKEN,
};
use scraper::{Html, Selector};

#[test]
fn pages_redirect_to_login_without_a_token() {
    let test = TestApp::anonymous(FakeBackend::default());

    for path in ["/", "/perfil", "/calificaciones", "/vehiculos", "/reportes/4"] {
        let resp = test.handle(get(path)).unwrap();
        assert_eq!(resp.status(), 303, "{path}");
        assert_eq!(location(&resp), Some("/login"), "{path}");
    }
}

#[test]
fn login_page_renders_the_token_form() {
    let test = TestApp::anonymous(FakeBackend::default());
    let html = body_text(test.handle(get("/login")).unwrap());
    let doc = Html::parse_document(&html);

    let form = Selector::parse(r#"form[action="/login"] textarea[name="token"]"#).unwrap();
    assert_eq!(doc.select(&form).count(), 1);
}

#[test]
fn valid_token_is_stored_and_leads_to_the_profile() {
    let test = TestApp::anonymous(FakeBackend::default());

    let padded = format!("  {TOKEN} ");
    let resp = test
        .handle(post_form("/login", &[("token", padded.as_str())]))
        .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), Some("/perfil"));
    assert_eq!(load_token(&test.app.db).unwrap().as_deref(), Some(TOKEN));

    let html = body_text(test.handle(get("/perfil")).unwrap());
    assert!(html.contains("Hola, Ana Rojas"));
    assert!(html.contains(r#"href="/vehiculos""#));
}

#[test]
fn rejected_token_is_not_stored() {
    let test = TestApp::anonymous(FakeBackend::default());

    let resp = test
        .handle(post_form("/login", &[("token", "otro-token")]))
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_text(resp).contains("El token no es válido."));
    assert_eq!(load_token(&test.app.db).unwrap(), None);

    let html = body_text(test.handle(post_form("/login", &[("token", "   ")])).unwrap());
    assert!(html.contains("Ingrese un token válido."));
}

#[test]
fn logout_clears_the_token() {
    let test = TestApp::signed_in(FakeBackend::default());

    let resp = test.handle(post_form("/logout", &[])).unwrap();
    assert_eq!(location(&resp), Some("/login"));
    assert_eq!(load_token(&test.app.db).unwrap(), None);
}

#[test]
fn renter_profile_has_no_host_links() {
    let test = TestApp::signed_in(FakeBackend {
        profile: renter_profile(),
        ..FakeBackend::default()
    });

    let html = body_text(test.handle(get("/perfil")).unwrap());
    assert!(html.contains("Arrendatario"));
    assert!(!html.contains(r#"href="/vehiculos""#));
}

#[test]
fn host_pages_are_forbidden_to_renters() {
    let test = TestApp::signed_in(FakeBackend {
        profile: renter_profile(),
        ..FakeBackend::default()
    });

    for path in ["/calificaciones", "/vehiculos", "/reportes/4"] {
        let resp = test.respond(get(path));
        assert_eq!(resp.status(), 403, "{path}");
        assert!(body_text(resp).contains("No tienes permiso para ver esta página."));
    }
}

#[test]
fn unknown_routes_are_not_found() {
    let test = TestApp::signed_in(FakeBackend::default());
    assert_eq!(test.respond(get("/nada")).status(), 404);
    assert_eq!(test.respond(get("/reportes/")).status(), 404);
}
