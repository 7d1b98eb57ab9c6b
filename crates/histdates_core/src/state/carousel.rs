//! Article slider position and edge flags.

use serde::{Deserialize, Serialize};

/// Slider over a page's articles.
///
/// The last reachable index leaves the final slide flush with the viewport
/// edge, so a fractional `slides_per_view` still gets one extra step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselState {
    slide_count: usize,
    slides_per_view: f64,
    index: usize,
}

impl CarouselState {
    pub fn new(slide_count: usize, slides_per_view: f64) -> Self {
        Self {
            slide_count,
            slides_per_view,
            index: 0,
        }
    }

    /// Swaps in a new slide set and returns to the first slide.
    pub fn reset(&mut self, slide_count: usize) {
        self.slide_count = slide_count;
        self.index = 0;
    }

    /// Changes slides per view (viewport resize), clamping the index.
    pub fn set_slides_per_view(&mut self, slides_per_view: f64) {
        self.slides_per_view = slides_per_view;
        self.index = self.index.min(self.max_index());
    }

    /// Returns whether the slider moved.
    pub fn slide_next(&mut self) -> bool {
        if self.is_end() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Returns whether the slider moved.
    pub fn slide_prev(&mut self) -> bool {
        if self.is_beginning() {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn max_index(&self) -> usize {
        let overflow = self.slide_count as f64 - self.slides_per_view;
        if overflow <= 0.0 {
            return 0;
        }
        overflow.ceil() as usize
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slides_per_view(&self) -> f64 {
        self.slides_per_view
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_beginning(&self) -> bool {
        self.index == 0
    }

    pub fn is_end(&self) -> bool {
        self.index >= self.max_index()
    }
}
