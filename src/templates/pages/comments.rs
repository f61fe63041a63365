use crate::domain::{CanonicalComment, CommentView, Direction, Profile, QuerySpec, SortKey};
use crate::templates::components::{pager, star_row};
use crate::templates::{desktop_layout, notice};
use chrono::Locale;
use maud::{html, Markup};
use url::form_urlencoded;

pub struct CommentsVm<'a> {
    pub profile: &'a Profile,
    pub spec: &'a QuerySpec,
    pub view: &'a CommentView<'a>,
    pub load_error: Option<&'a str>,
}

/// `/calificaciones` link for `page`, carrying every active filter.
pub fn listing_href(spec: &QuerySpec, page: usize) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if !spec.search().is_empty() {
        query.append_pair("q", spec.search());
    }
    let range = spec.date_range();
    if let Some(from) = range.from {
        query.append_pair("desde", &from.format("%Y-%m-%d").to_string());
    }
    if let Some(to) = range.to {
        query.append_pair("hasta", &to.format("%Y-%m-%d").to_string());
    }
    query
        .append_pair("orden", spec.sort_key().as_param())
        .append_pair("direccion", spec.direction().as_param())
        .append_pair("pagina", &page.to_string());

    format!("/calificaciones?{}", query.finish())
}

fn vehicle_heading(c: &CanonicalComment) -> String {
    match &c.vehicle {
        Some(v) => {
            let brand = if v.brand.trim().is_empty() {
                "Vehículo"
            } else {
                v.brand.as_str()
            };
            let year = if v.year > 0 {
                v.year.to_string()
            } else {
                String::new()
            };
            format!("{brand} {} {year}", v.model)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        }
        None => "Vehículo".to_string(),
    }
}

fn comment_card(c: &CanonicalComment) -> Markup {
    let heading = vehicle_heading(c);
    html! {
        article class="comment-card" data-comment-id=(c.id) {
            @match c.cover_image() {
                Some(img) => {
                    img class="cover" src=(img.source) alt=(heading);
                }
                None => {
                    div class="cover placeholder" { "Sin imagen" }
                }
            }
            div class="comment-body" {
                h3 class="vehicle" { (heading) }
                time class="date" datetime=(c.created_at.to_rfc3339()) {
                    (c.created_at.format_localized("%-d %B %Y", Locale::es_ES))
                }
                (star_row(c.rating))
                p class="text" {
                    @if c.body.trim().is_empty() {
                        "Sin comentarios"
                    } @else {
                        (c.body)
                    }
                }
                p class="author" {
                    @if let Some(photo) = &c.author.photo {
                        img class="avatar" src=(photo) alt="";
                    }
                    (c.author.name)
                }
            }
        }
    }
}

fn filter_form(spec: &QuerySpec) -> Markup {
    let range = spec.date_range();
    let day = |d: Option<chrono::DateTime<chrono::Utc>>| {
        d.map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    };

    html! {
        form class="filters" method="get" action="/calificaciones" {
            input type="search" name="q" value=(spec.search()) placeholder="Buscar por marca o modelo";
            label { "Desde " input type="date" name="desde" value=(day(range.from)); }
            label { "Hasta " input type="date" name="hasta" value=(day(range.to)); }
            select name="orden" {
                @for key in SortKey::ALL {
                    option value=(key.as_param()) selected[key == spec.sort_key()] { (key.label()) }
                }
            }
            select name="direccion" {
                @for dir in Direction::ALL {
                    option value=(dir.as_param()) selected[dir == spec.direction()] { (dir.label()) }
                }
            }
            button type="submit" class="btn" { "Aplicar" }
            a href="/calificaciones" class="btn-link" { "Limpiar" }
        }
    }
}

pub fn comments_page(vm: &CommentsVm) -> Markup {
    let view = vm.view;
    desktop_layout(
        "Calificaciones",
        Some(vm.profile),
        html! {
            main class="container" {
                h1 { "Calificaciones de mis autos" }
                (filter_form(vm.spec))

                @if let Some(msg) = vm.load_error {
                    (notice("error", msg))
                }

                @if view.items.is_empty() {
                    p class="empty-state" { "No se encontraron comentarios con los filtros aplicados." }
                } @else {
                    p class="result-count" { (view.filtered_count) " comentarios" }
                    section class="comment-list" {
                        @for c in &view.items {
                            (comment_card(c))
                        }
                    }
                }

                @if view.shows_pager(vm.spec.page_size()) {
                    (pager(&view.links, |n| listing_href(vm.spec, n)))
                }
            }
        },
    )
}
