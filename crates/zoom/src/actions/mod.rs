//! Zoom actions.

mod update_webinar;

pub use update_webinar::UpdateWebinar;
