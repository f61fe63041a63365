// src/domain/pipeline.rs

//! The derived views a page renders, rebuilt from scratch on every request.

use crate::domain::comment::CanonicalComment;
use crate::domain::derived::VehicleStats;
use crate::domain::filter::filter_comments;
use crate::domain::paginate::{paginate, PageLinks};
use crate::domain::query::QuerySpec;
use crate::domain::selection::Selection;
use crate::domain::sort::sort_comments;
use crate::domain::vehicle::CanonicalVehicle;

/// One rendered page of the reviews listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentView<'a> {
    pub items: Vec<&'a CanonicalComment>,
    /// The page actually shown, after clamping the requested one.
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub links: PageLinks,
}

impl CommentView<'_> {
    /// The pager is only worth showing when results overflow a single page.
    pub fn shows_pager(&self, page_size: usize) -> bool {
        self.filtered_count > page_size
    }
}

/// filter → sort → clamp page → paginate.
pub fn comment_view<'a>(comments: &'a [CanonicalComment], spec: &QuerySpec) -> CommentView<'a> {
    let filtered = filter_comments(comments, spec);
    let sorted = sort_comments(&filtered, spec.sort_key(), spec.direction());

    let mut spec = spec.clone();
    let page_no = spec.clamp_page(sorted.len());
    let page = paginate(&sorted, page_no, spec.page_size());

    CommentView {
        links: PageLinks::new(page_no, page.total_pages),
        items: page.items,
        page: page_no,
        total_pages: page.total_pages,
        filtered_count: sorted.len(),
    }
}

/// The host's vehicles with their counters and the opened detail panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VehicleBoard {
    vehicles: Vec<CanonicalVehicle>,
    stats: VehicleStats,
    selection: Selection,
}

impl VehicleBoard {
    /// Loads `vehicles` with `requested` opened, unless the fetch no longer contains it.
    pub fn new(vehicles: Vec<CanonicalVehicle>, requested: Option<i64>) -> Self {
        let mut board = Self::default();
        if let Some(id) = requested {
            board.select(id);
        }
        board.replace(vehicles);
        board
    }

    /// Swaps in a freshly fetched collection and recomputes everything derived from it.
    pub fn replace(&mut self, vehicles: Vec<CanonicalVehicle>) {
        self.stats = VehicleStats::from_vehicles(&vehicles);
        self.selection.reconcile(&vehicles);
        self.vehicles = vehicles;
    }

    pub fn vehicles(&self) -> &[CanonicalVehicle] {
        &self.vehicles
    }

    pub fn stats(&self) -> VehicleStats {
        self.stats
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn select(&mut self, id: i64) {
        self.selection.select(id);
    }

    pub fn selected(&self) -> Option<&CanonicalVehicle> {
        self.selection.current(&self.vehicles)
    }
}
