// src/domain/query.rs

use crate::domain::paginate::total_pages;
use chrono::{DateTime, NaiveDate, Utc};

/// Comments shown per page on the reviews listing.
pub const COMMENTS_PAGE_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Creation timestamp.
    #[default]
    Date,
    Rating,
    /// "brand model" of the reviewed vehicle.
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Date, SortKey::Rating, SortKey::Name];

    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "fecha" => Some(SortKey::Date),
            "calificacion" => Some(SortKey::Rating),
            "nombre" => Some(SortKey::Name),
            _ => None,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Date => "fecha",
            SortKey::Rating => "calificacion",
            SortKey::Name => "nombre",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Date => "Fecha",
            SortKey::Rating => "Calificación",
            SortKey::Name => "Nombre",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Asc, Direction::Desc];

    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "ascendente" => Some(Direction::Asc),
            "descendente" => Some(Direction::Desc),
            _ => None,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            Direction::Asc => "ascendente",
            Direction::Desc => "descendente",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Asc => "Ascendente",
            Direction::Desc => "Descendente",
        }
    }
}

/// Inclusive bounds on a comment's creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    /// Whole calendar days: `from` starts at 00:00:00 and `to` ends at 23:59:59.999 (UTC).
    pub fn from_days(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            from: from.and_then(|d| d.and_hms_opt(0, 0, 0)).map(|n| n.and_utc()),
            to: to
                .and_then(|d| d.and_hms_milli_opt(23, 59, 59, 999))
                .map(|n| n.and_utc()),
        }
    }

    /// Both bounds, when both are set. The date filter only applies then.
    pub fn bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.from?, self.to?))
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        match self.bounds() {
            Some((from, to)) => from <= at && at <= to,
            None => true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Filter, sort and page parameters for one listing.
///
/// Changing any filter or ordering parameter sends the listing back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    search: String,
    date_range: DateRange,
    sort_key: SortKey,
    direction: Direction,
    page: usize,
    page_size: usize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self::new(COMMENTS_PAGE_SIZE)
    }
}

impl QuerySpec {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            date_range: DateRange::default(),
            sort_key: SortKey::default(),
            direction: Direction::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.date_range = range;
        self.page = 1;
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.page = 1;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.page = 1;
    }

    /// Sets the page as requested. Use [`QuerySpec::clamp_page`] once the filtered count is known.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Pulls the page into `1..=total_pages` for `filtered_count` matching records.
    pub fn clamp_page(&mut self, filtered_count: usize) -> usize {
        let last = total_pages(filtered_count, self.page_size);
        self.page = self.page.clamp(1, last);
        self.page
    }
}
