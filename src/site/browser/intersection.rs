//! # Intersection Observer
//!
//! Computes how much of each observed element lies inside the viewport and
//! reports threshold crossings. The root is the viewport with its bottom edge
//! pulled up by `bottom_margin` pixels.
//!
//! An entry is delivered when a target is first observed and afterwards
//! whenever its "ratio at or above threshold" state flips. `is_intersecting`
//! in delivered entries reflects that state.

use super::Viewport;
use crate::site::document::{Document, NodeId};
use crate::site::events::IntersectionEntry;
use std::collections::BTreeMap;

/// Visibility threshold and root margin of an observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the target that must be visible (0.0..=1.0)
    pub threshold: f64,
    /// Pixels removed from the bottom of the viewport
    pub bottom_margin: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntersectionObserver {
    options: ObserverOptions,
    // None until the initial observation has been delivered
    targets: BTreeMap<NodeId, Option<bool>>,
}

impl IntersectionObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            targets: BTreeMap::new(),
        }
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    pub fn observe(&mut self, target: NodeId) {
        self.targets.entry(target).or_insert(None);
    }

    pub fn unobserve(&mut self, target: NodeId) {
        self.targets.remove(&target);
    }

    pub fn is_observing(&self, target: NodeId) -> bool {
        self.targets.contains_key(&target)
    }

    pub fn observed_count(&self) -> usize {
        self.targets.len()
    }

    /// Fraction of `target` inside the root, 0.0 when it is not rendered
    pub fn intersection_ratio(&self, document: &Document, viewport: Viewport, target: NodeId) -> f64 {
        if !document.is_rendered(target) {
            return 0.0;
        }
        let Some(layout) = document.get(target).and_then(|element| element.layout) else {
            return 0.0;
        };

        let root_top = viewport.scroll_top;
        let root_bottom = viewport.scroll_top + viewport.height - self.options.bottom_margin;

        if layout.height <= 0.0 {
            let inside = layout.top >= root_top && layout.top <= root_bottom;
            return if inside { 1.0 } else { 0.0 };
        }

        let overlap = root_bottom.min(layout.bottom()) - root_top.max(layout.top);
        (overlap.max(0.0) / layout.height).min(1.0)
    }

    /// Entries for targets whose threshold state changed since the last call
    pub fn take_records(&mut self, document: &Document, viewport: Viewport) -> Vec<IntersectionEntry> {
        let ratios: Vec<_> = self
            .targets
            .keys()
            .map(|target| (*target, self.intersection_ratio(document, viewport, *target)))
            .collect();

        let mut records = Vec::new();
        for (target, ratio) in ratios {
            let above = ratio > 0.0 && ratio >= self.options.threshold;
            let state = self.targets.entry(target).or_insert(None);
            if *state != Some(above) {
                *state = Some(above);
                records.push(IntersectionEntry {
                    target,
                    is_intersecting: above,
                    intersection_ratio: ratio,
                });
            }
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> Document {
        let value = json!({
            "tag": "body",
            "children": [
                { "tag": "div", "id": "top", "layout": { "top": 100.0, "height": 200.0 } },
                { "tag": "div", "id": "edge", "layout": { "top": 700.0, "height": 200.0 } },
                { "tag": "div", "id": "far", "layout": { "top": 2000.0, "height": 200.0 } },
                { "tag": "div", "id": "hidden", "style": { "display": "none" },
                  "layout": { "top": 0.0, "height": 100.0 } }
            ]
        });
        Document::from_json_str(&value.to_string()).unwrap()
    }

    fn node(document: &Document, id: &str) -> NodeId {
        document.element_by_id(id).unwrap()
    }

    fn viewport(scroll_top: f64) -> Viewport {
        Viewport {
            scroll_top,
            height: 800.0,
        }
    }

    #[test]
    fn ratio_should_account_for_bottom_margin() {
        let document = document();
        let observer = IntersectionObserver::new(ObserverOptions::default());

        // root is [0, 750]; "edge" spans [700, 900]
        let ratio = observer.intersection_ratio(&document, viewport(0.0), node(&document, "edge"));
        assert!((ratio - 0.25).abs() < 1e-9);

        let ratio = observer.intersection_ratio(&document, viewport(0.0), node(&document, "top"));
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn hidden_elements_should_never_intersect() {
        let document = document();
        let observer = IntersectionObserver::new(ObserverOptions::default());
        let ratio = observer.intersection_ratio(&document, viewport(0.0), node(&document, "hidden"));
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn initial_observation_should_report_every_target() {
        let document = document();
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        observer.observe(node(&document, "top"));
        observer.observe(node(&document, "far"));

        let records = observer.take_records(&document, viewport(0.0));
        assert_eq!(records.len(), 2);
        assert!(records[0].is_intersecting);
        assert!(!records[1].is_intersecting);

        assert!(observer.take_records(&document, viewport(0.0)).is_empty());
    }

    #[test]
    fn records_should_only_report_threshold_crossings() {
        let document = document();
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        let far = node(&document, "far");
        observer.observe(far);
        observer.take_records(&document, viewport(0.0));

        // "far" spans [2000, 2200]; root [1300, 2050] shows 50px = 25%
        let records = observer.take_records(&document, viewport(1300.0));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].target, far);
        assert!(records[0].is_intersecting);

        // still visible, no crossing
        assert!(observer.take_records(&document, viewport(1400.0)).is_empty());

        let records = observer.take_records(&document, viewport(0.0));
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_intersecting);
    }

    #[test]
    fn sliver_below_threshold_should_not_count() {
        let document = document();
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        let far = node(&document, "far");
        observer.observe(far);
        observer.take_records(&document, viewport(0.0));

        // root [1260, 2010] shows 10px = 5%
        assert!(observer.take_records(&document, viewport(1260.0)).is_empty());
    }

    #[test]
    fn unobserve_should_stop_reports() {
        let document = document();
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        let top = node(&document, "top");
        observer.observe(top);
        observer.unobserve(top);

        assert!(!observer.is_observing(top));
        assert!(observer.take_records(&document, viewport(0.0)).is_empty());
    }
}
