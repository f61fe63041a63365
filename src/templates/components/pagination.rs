use crate::domain::paginate::PageLinks;
use maud::{html, Markup};

/// Previous, numbered links, ellipsis, next. `href` builds the link for a page number.
pub fn pager(links: &PageLinks, href: impl Fn(usize) -> String) -> Markup {
    html! {
        nav class="pager" aria-label="Paginación" {
            @if links.at_first() {
                span class="pager-prev disabled" { "‹ Anterior" }
            } @else {
                a class="pager-prev" href=(href(links.previous)) { "‹ Anterior" }
            }

            @for n in &links.numbers {
                @if *n == links.current {
                    span class="pager-page current" aria-current="page" { (n) }
                } @else {
                    a class="pager-page" href=(href(*n)) { (n) }
                }
            }
            @if links.has_more {
                span class="pager-more" { "…" }
            }

            @if links.at_last() {
                span class="pager-next disabled" { "Siguiente ›" }
            } @else {
                a class="pager-next" href=(href(links.next)) { "Siguiente ›" }
            }
        }
    }
}
