//! Step definitions for opening the page and feeding user actions

use crate::common::world::SiteWorld;
use cucumber::{given, then, when};
use folio::{BrowserEvent, SiteEvent};
use std::time::Duration;
use tracing::debug;

#[given("the portfolio site is opened")]
async fn given_site_opened(world: &mut SiteWorld) {
    world.open("").expect("demo page should open");
}

#[given(expr = "the portfolio site is opened at {string}")]
async fn given_site_opened_at(world: &mut SiteWorld, fragment: String) {
    world.open(&fragment).expect("demo page should open");
}

fn click(world: &mut SiteWorld, element: &str) {
    debug!("Clicking #{}", element);
    let target = world.node(element);
    world.dispatch(BrowserEvent::Click { target });
}

#[given("the page has loaded")]
async fn given_page_loaded(world: &mut SiteWorld) {
    world.act(SiteEvent::Load);
}

#[when("the page loads")]
async fn when_page_loads(world: &mut SiteWorld) {
    world.act(SiteEvent::Load);
}

#[given(expr = "I have clicked {string}")]
async fn given_clicked(world: &mut SiteWorld, element: String) {
    click(world, &element);
}

#[when(expr = "I click {string}")]
async fn when_click(world: &mut SiteWorld, element: String) {
    click(world, &element);
}

#[when(expr = "I click {string} {int} times")]
async fn when_click_times(world: &mut SiteWorld, element: String, times: usize) {
    let target = world.node(&element);
    for _ in 0..times {
        world.dispatch(BrowserEvent::Click { target });
    }
}

#[when(expr = "I click the missing element {string}")]
async fn when_click_missing(world: &mut SiteWorld, element: String) {
    world.act(SiteEvent::Click { element });
}

#[when(expr = "{int} milliseconds pass")]
async fn when_time_passes(world: &mut SiteWorld, ms: u64) {
    if let Err(e) = world.controller_mut().advance_time(Duration::from_millis(ms)) {
        world.last_error = Some(e.to_string());
    }
}

#[then("the default action was prevented")]
async fn then_default_prevented(world: &mut SiteWorld) {
    let outcome = world.last_outcome.expect("an event should have been dispatched");
    assert!(outcome.default_prevented);
}

#[then("the default action was not prevented")]
async fn then_default_not_prevented(world: &mut SiteWorld) {
    let outcome = world.last_outcome.expect("an event should have been dispatched");
    assert!(!outcome.default_prevented);
}

#[then(expr = "a notice says {string}")]
async fn then_notice(world: &mut SiteWorld, message: String) {
    assert_eq!(world.controller().notices().to_vec(), vec![message]);
}

#[then(expr = "the step fails mentioning {string}")]
async fn then_step_fails(world: &mut SiteWorld, text: String) {
    let error = world.last_error.as_deref().expect("a step should have failed");
    assert!(error.contains(&text), "error '{error}' should mention '{text}'");
}
