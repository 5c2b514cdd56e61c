use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::nav::{Section, SectionBounds, SectionLayout, Viewport};

/// The live document. Every query goes to the DOM, nothing is cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentViewport;

impl DocumentViewport {
    fn element(section: Section) -> Option<HtmlElement> {
        document()
            .get_element_by_id(section.anchor())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    pub fn document_height(&self) -> f64 {
        document()
            .document_element()
            .map(|el| f64::from(el.scroll_height()))
            .unwrap_or_default()
    }

    pub fn viewport_height(&self) -> f64 {
        window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default()
    }
}

impl SectionLayout for DocumentViewport {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        Self::element(section).map(|el| SectionBounds {
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
    }
}

impl Viewport for DocumentViewport {
    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn scroll_into_view(&self, section: Section) -> bool {
        let Some(el) = Self::element(section) else {
            log::warn!("no rendered section #{}", section.anchor());
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
