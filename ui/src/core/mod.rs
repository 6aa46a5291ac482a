//! Platform-agnostic landing page core: locale selection, catalogs, the
//! waitlist subscription flow, and the share action. Views only read from and
//! dispatch into the [`session::Session`] defined here.

pub mod catalog;
pub mod config;
pub mod locale;
pub mod platform;
pub mod session;
pub mod share;
pub mod subscription;
pub mod timing;
pub mod transport;
