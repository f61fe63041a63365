use maud::{html, Markup, DOCTYPE};

/// A bare error page. Rendered without the nav layout since the profile may be unavailable.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                h1 { "Error " (status) }
                p class="error-message" { (message) }
                @if status == 401 {
                    p { a href="/login" { "Iniciar sesión" } }
                } @else {
                    p { a href="/" { "← Volver al inicio" } }
                }
            }
        }
    }
}
