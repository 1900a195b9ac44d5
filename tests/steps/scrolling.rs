//! Step definitions for anchors, the viewport and reveal effects

use crate::common::world::SiteWorld;
use cucumber::{then, when};
use folio::{Browser, BrowserEffect, ScrollBehavior, SiteEvent};

#[when(expr = "I scroll to {int}")]
async fn when_scroll(world: &mut SiteWorld, top: u32) {
    world.act(SiteEvent::ScrollTo { top: f64::from(top) });
}

#[then(expr = "the viewport is at {int}")]
async fn then_viewport_at(world: &mut SiteWorld, top: u32) {
    assert_eq!(world.controller().browser().viewport().scroll_top, f64::from(top));
}

#[then(expr = "the last scroll was smooth to {int}")]
async fn then_smooth_scroll(world: &mut SiteWorld, top: u32) {
    let expected = BrowserEffect::Scrolled {
        top: f64::from(top),
        behavior: ScrollBehavior::Smooth,
    };
    assert_eq!(world.controller().browser().effects().last(), Some(&expected));
}

#[then(expr = "element {string} is revealed")]
async fn then_revealed(world: &mut SiteWorld, element: String) {
    let node = world.node(&element);
    let vm = world.controller().view_model();
    assert!(vm.is_revealed(node));
    assert_eq!(vm.opacity(node), Some("1"));
}

#[then(expr = "element {string} is not revealed")]
async fn then_not_revealed(world: &mut SiteWorld, element: String) {
    let node = world.node(&element);
    let vm = world.controller().view_model();
    assert!(!vm.is_revealed(node));
    assert_eq!(vm.opacity(node), Some("0"));
}

#[then(expr = "element {string} was revealed once")]
async fn then_revealed_once(world: &mut SiteWorld, element: String) {
    let description = world
        .controller()
        .view_model()
        .document()
        .describe(world.node(&element));
    let reveals = world
        .recorded_events()
        .iter()
        .filter(|event| {
            matches!(event, folio::ViewEvent::ElementRevealed { element } if *element == description)
        })
        .count();
    assert_eq!(reveals, 1);
}
