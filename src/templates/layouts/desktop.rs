use crate::domain::Profile;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, profile: Option<&Profile>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Redibo" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  a href="/" class="brand" { "Redibo" }
                  nav {
                      ul {
                          li { a href="/perfil" { "Perfil" } }
                          @if let Some(p) = profile {
                              @if p.is_host() {
                                  li { a href="/vehiculos" { "Mis Vehículos" } }
                                  li { a href="/calificaciones" { "Calificaciones" } }
                              }
                          }
                      }
                  }

                  @match profile {
                      Some(p) => {
                          form action="/logout" method="post" class="inline" {
                              span class="text-sm mr-2" { (p.name) }
                              button type="submit" class="btn-link" { "Cerrar sesión" }
                          }
                      }
                      None => {
                          a href="/login" class="text-base font-medium hover:text-blue-600" { "Iniciar sesión" }
                      }
                  }
              }
                (content)
            }
        }
    }
}
