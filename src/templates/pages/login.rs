use crate::templates::{desktop_layout, notice};
use maud::{html, Markup};

pub fn login_page(error: Option<&str>) -> Markup {
    desktop_layout(
        "Iniciar sesión",
        None,
        html! {
            main class="container narrow" {
                h1 { "Iniciar sesión" }
                p class="lead" {
                    "Pega el token de acceso que recibiste al iniciar sesión en Redibo."
                }
                @if let Some(msg) = error {
                    (notice("error", msg))
                }
                form action="/login" method="post" class="stack" {
                    label for="token" { "Token" }
                    textarea id="token" name="token" rows="3" required {}
                    button type="submit" class="btn" { "Entrar" }
                }
            }
        },
    )
}
