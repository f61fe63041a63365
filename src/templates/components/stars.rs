use crate::domain::derived::StarRating;
use maud::{html, Markup};

pub fn star_row(rating: f64) -> Markup {
    let stars = StarRating::from_rating(rating);
    html! {
        span class="stars" title=(format!("{rating:.1} de 5")) {
            @for _ in 0..stars.full {
                span class="star star-full" { "★" }
            }
            @if stars.half {
                span class="star star-half" { "★" }
            }
            @for _ in 0..stars.empty {
                span class="star star-empty" { "☆" }
            }
            span class="rating-value" { (format!("{rating:.1}")) }
        }
    }
}
