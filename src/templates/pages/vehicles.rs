use crate::domain::vehicle::Availability;
use crate::domain::{CanonicalVehicle, Profile, VehicleBoard};
use crate::templates::{desktop_layout, notice};
use maud::{html, Markup};

pub struct VehiclesVm<'a> {
    pub profile: &'a Profile,
    /// The board, or the message of the failed fetch.
    pub board: Result<&'a VehicleBoard, String>,
}

fn badge(availability: Availability) -> Markup {
    let class = match availability {
        Availability::Available => "badge badge-available",
        Availability::Reserved => "badge badge-reserved",
        Availability::Maintenance => "badge badge-maintenance",
    };
    html! { span class=(class) { (availability.label()) } }
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

fn vehicle_card(v: &CanonicalVehicle, selected: bool) -> Markup {
    let class = if selected {
        "vehicle-card selected"
    } else {
        "vehicle-card"
    };
    html! {
        a class=(class) href=(format!("/vehiculos?seleccion={}", v.id)) data-vehicle-id=(v.id) {
            @match v.images.first() {
                Some(img) => {
                    img class="cover" src=(img.source) alt=(v.title());
                }
                None => {
                    div class="cover placeholder" { "Sin imagen" }
                }
            }
            h3 class="title" { (v.title()) }
            (badge(v.availability))
            p class="fuel" { (v.primary_fuel().unwrap_or("No especificado")) }
            p class="city" { (or_fallback(&v.address.city, "Ciudad no especificada")) }
            p class="price" { "Bs. " (format!("{:.2}", v.daily_price)) " / día" }
        }
    }
}

fn detail_panel(v: &CanonicalVehicle) -> Markup {
    let address = [
        v.address.street.as_str(),
        v.address.house_number.as_str(),
        v.address.city.as_str(),
        v.address.province.as_str(),
    ]
    .iter()
    .filter(|part| !part.trim().is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(", ");

    html! {
        aside class="vehicle-detail" data-vehicle-id=(v.id) {
            a href="/vehiculos" class="close" aria-label="Cerrar" { "×" }
            h2 { (v.title()) " " (v.year) }
            (badge(v.availability))
            dl {
                dt { "Placa" } dd class="plate" { (or_fallback(&v.plate, "Sin placa")) }
                dt { "VIN" } dd { (or_fallback(&v.vin, "No especificado")) }
                dt { "Asientos" } dd { (v.seats) }
                dt { "Puertas" } dd { (v.doors) }
                dt { "Transmisión" } dd { (or_fallback(&v.transmission, "No especificado")) }
                dt { "Combustible" } dd {
                    @if v.fuel_types.is_empty() {
                        "No especificado"
                    } @else {
                        (v.fuel_types.join(", "))
                    }
                }
                dt { "Precio por día" } dd { "Bs. " (format!("{:.2}", v.daily_price)) }
                dt { "Seguro" } dd { @if v.insured { "Sí" } @else { "No" } }
                dt { "Mantenimientos" } dd { (v.maintenance_count) }
                dt { "Dirección" } dd { (or_fallback(&address, "Ciudad no especificada")) }
            }
            @if !v.features.is_empty() {
                h3 { "Características" }
                ul class="features" {
                    @for f in &v.features {
                        li { (f) }
                    }
                }
            }
            @if v.images.len() > 1 {
                div class="gallery" {
                    @for img in &v.images {
                        img src=(img.source) alt=(v.title());
                    }
                }
            }
        }
    }
}

pub fn vehicles_page(vm: &VehiclesVm) -> Markup {
    desktop_layout(
        "Mis Vehículos",
        Some(vm.profile),
        html! {
            main class="container" {
                h1 { "Mis Vehículos" }
                @match &vm.board {
                    Err(msg) => {
                        (notice("error", msg))
                    }
                    Ok(board) => {
                        @let stats = board.stats();
                        div class="stats" {
                            div class="stat stat-total" {
                                span class="value" { (stats.total) }
                                span class="label" { "Autos registrados" }
                            }
                            div class="stat stat-plates" {
                                span class="value" { (stats.with_plate) }
                                span class="label" { "Con placa" }
                            }
                        }

                        @if board.vehicles().is_empty() {
                            p class="empty-state" { "No tienes autos registrados" }
                        } @else {
                            section class="vehicle-grid" {
                                @for v in board.vehicles() {
                                    (vehicle_card(v, board.selection().is_selected(v.id)))
                                }
                            }
                        }

                        @if let Some(selected) = board.selected() {
                            (detail_panel(selected))
                        }
                    }
                }
            }
        },
    )
}
