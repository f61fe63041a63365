use maud::{html, Markup};

pub mod error;
pub mod pagination;
pub mod stars;

pub use error::error_page;
pub use pagination::pager;
pub use stars::star_row;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// A dismissable banner above page content.
pub fn notice(kind: &str, message: &str) -> Markup {
    html! {
        div class=(format!("notice notice-{kind}")) role="alert" { (message) }
    }
}
