use crate::constants::{
    ABOUT_OVERLAY_ID, LOADING_OVERLAY_ID, LOADING_PERCENT_ID, PROJECTS_OVERLAY_ID, VIDEO_MODAL_ID,
};
use crate::dom;
use showcase_core::OverlayFlags;
use web_sys as web;

/// Mirrors [`OverlayFlags`] onto the page, touching the DOM only on change.
#[derive(Default)]
pub struct OverlayView {
    last: Option<OverlayFlags>,
}

impl OverlayView {
    pub fn apply(&mut self, document: &web::Document, flags: &OverlayFlags) {
        let prev = self.last.unwrap_or(OverlayFlags {
            // force a first write of every element
            about_visible: !flags.about_visible,
            projects_overlay_visible: !flags.projects_overlay_visible,
            loading_visible: !flags.loading_visible,
            loading_percent: -1.0,
            showreel_ready: false,
        });
        if prev.about_visible != flags.about_visible {
            dom::set_visible(document, ABOUT_OVERLAY_ID, flags.about_visible);
        }
        if prev.projects_overlay_visible != flags.projects_overlay_visible {
            dom::set_visible(document, PROJECTS_OVERLAY_ID, flags.projects_overlay_visible);
        }
        if prev.loading_visible != flags.loading_visible {
            dom::set_visible(document, LOADING_OVERLAY_ID, flags.loading_visible);
        }
        if flags.loading_visible && prev.loading_percent.round() != flags.loading_percent.round() {
            dom::set_text(
                document,
                LOADING_PERCENT_ID,
                &format!("{:.0}%", flags.loading_percent),
            );
        }
        if flags.showreel_ready {
            log::info!("[overlay] showreel ready, opening video");
            show_video(document);
        }
        self.last = Some(*flags);
    }
}

pub fn show_video(document: &web::Document) {
    dom::set_visible(document, VIDEO_MODAL_ID, true);
}

pub fn hide_video(document: &web::Document) {
    dom::set_visible(document, VIDEO_MODAL_ID, false);
}
