pub mod comment;
pub mod derived;
pub mod filter;
pub mod normalize;
pub mod paginate;
pub mod pipeline;
pub mod profile;
pub mod query;
pub mod reports;
pub mod selection;
pub mod sort;
pub mod vehicle;


pub use comment::CanonicalComment;
pub use normalize::NormalizeError;
pub use pipeline::{comment_view, CommentView, VehicleBoard};
pub use profile::Profile;
pub use query::{DateRange, Direction, QuerySpec, SortKey};
pub use vehicle::CanonicalVehicle;
