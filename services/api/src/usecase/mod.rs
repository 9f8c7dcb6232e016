pub mod admin;
pub mod media;
pub mod oauth;
pub mod post;
pub mod review;
pub mod session;
