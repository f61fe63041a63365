use crate::domain::profile::{ROLE_HOST, ROLE_RENTER};
use crate::domain::Profile;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

fn role_label(role: &str) -> &str {
    match role {
        ROLE_HOST => "Anfitrión",
        ROLE_RENTER => "Arrendatario",
        other => other,
    }
}

pub fn profile_page(profile: &Profile) -> Markup {
    desktop_layout(
        "Perfil",
        Some(profile),
        html! {
            main class="container" {
                h1 { "Hola, " (profile.name) }

                (card("Roles", html! {
                    @if profile.roles.is_empty() {
                        p class="muted" { "Sin roles asignados" }
                    } @else {
                        ul class="roles" {
                            @for role in &profile.roles {
                                li { (role_label(role)) }
                            }
                        }
                    }
                }))

                @if profile.is_host() {
                    (card("Anfitrión", html! {
                        ul class="links" {
                            li { a href="/vehiculos" { "Mis Vehículos" } }
                            li { a href="/calificaciones" { "Calificaciones de mis autos" } }
                        }
                    }))
                }

                @if profile.is_renter() {
                    (card("Arrendatario", html! {
                        p { "Busca un auto disponible y gestiona tus reservas desde la aplicación de Redibo." }
                    }))
                }
            }
        },
    )
}
