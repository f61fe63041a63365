pub mod comments;
pub mod login;
pub mod profile;
pub mod report;
pub mod vehicles;

pub use comments::{comments_page, listing_href, CommentsVm};
pub use login::login_page;
pub use profile::profile_page;
pub use report::{report_page, ReportVm};
pub use vehicles::{vehicles_page, VehiclesVm};
