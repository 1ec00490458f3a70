#![forbid(unsafe_code)]

//! Initial carousel state for static pages.
//!
//! The carousel is mounted once on a [`SimulatedEngine`] whose slide
//! handles are shared [`InlineStyle`] nodes; after the mount tween and the
//! start-index jump have been dispatched, each node holds the slide's
//! first-paint `style` and the carousel reports the selected snap.

use std::cell::RefCell;
use std::rc::Rc;

use vc_carousel::{
    AutoplayOptions, Carousel, CarouselOptions, Dot, InlineStyle, Neighbors, SimulatedEngine,
};

use crate::config::CarouselSection;

type SharedStyle = Rc<RefCell<InlineStyle>>;

/// First-paint carousel state.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticCarousel {
    /// Inline `style` per slide; empty for carousels without a tween.
    pub slide_styles: Vec<String>,
    pub selected: usize,
    pub dots: Vec<Dot>,
    pub neighbors: Option<Neighbors>,
    pub autoplay_ms: Option<u128>,
    /// Options handed to the host engine as `data-carousel-*`.
    pub engine_attributes: Vec<(&'static str, String)>,
}

impl StaticCarousel {
    /// Mount `options` over `slide_count` slides and capture the result.
    #[must_use]
    pub fn settle(
        slide_count: usize,
        options: CarouselOptions,
        slides_per_view: f64,
        tuning: &CarouselSection,
    ) -> Self {
        let nodes: Vec<SharedStyle> = (0..slide_count)
            .map(|_| Rc::new(RefCell::new(InlineStyle::new())))
            .collect();
        let handles = nodes.iter().cloned().map(Some).collect();
        let engine_attributes = options.data_attributes();
        let mut engine = SimulatedEngine::from_options(handles, &options, tuning.viewport_width)
            .with_slides_per_view(slides_per_view);

        let mut carousel =
            Carousel::mount_with_factor_base(&mut engine, options, tuning.tween_factor_base);
        let events = engine.drain_events();
        carousel.dispatch(&engine, events);

        let state = Self {
            slide_styles: nodes.iter().map(|node| node.borrow().css()).collect(),
            selected: carousel.selected_index(),
            dots: carousel.dots(),
            neighbors: carousel.neighbors(),
            autoplay_ms: carousel
                .autoplay()
                .map(|autoplay| autoplay.options().delay.as_millis()),
            engine_attributes,
        };
        carousel.unmount();
        tracing::trace!(
            slides = slide_count,
            selected = state.selected,
            "carousel settled for render"
        );
        state
    }

    #[must_use]
    pub fn style(&self, slide: usize) -> &str {
        self.slide_styles.get(slide).map_or("", String::as_str)
    }
}

/// About cards with the configured autoplay delay.
#[must_use]
pub fn about_options(tuning: &CarouselSection) -> CarouselOptions {
    let mut options = CarouselOptions::about();
    options.autoplay = Some(AutoplayOptions::with_delay(std::time::Duration::from_millis(
        tuning.about_autoplay_ms,
    )));
    options
}

/// Text reviews with the configured autoplay delay.
#[must_use]
pub fn reviews_options(tuning: &CarouselSection) -> CarouselOptions {
    let mut options = CarouselOptions::reviews();
    options.autoplay = Some(AutoplayOptions::with_delay(std::time::Duration::from_millis(
        tuning.reviews_autoplay_ms,
    )));
    options
}
