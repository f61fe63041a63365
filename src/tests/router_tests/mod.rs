mod auth_tests;
mod comments_tests;
mod report_tests;
