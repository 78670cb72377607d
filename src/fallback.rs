use crate::constants::{CANVAS_ID, FALLBACK_ID};
use sphere_core::Fallback;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(FALLBACK_ID) {
        _ = el.set_attribute("style", "");
    }
    if let Some(el) = document.get_element_by_id(CANVAS_ID) {
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(FALLBACK_ID) {
        _ = el.set_attribute("style", "display:none");
    }
}

/// Swaps the canvas for the static gradient element.
pub struct DomFallback {
    document: web::Document,
}

impl DomFallback {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl Fallback for DomFallback {
    fn engage(&mut self, reason: &anyhow::Error) {
        log::warn!("showing static hero fallback: {:#}", reason);
        show(&self.document);
    }
}
