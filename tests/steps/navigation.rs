//! Step definitions for routing, the mobile menu and history traversal

use crate::common::world::SiteWorld;
use cucumber::{given, then, when};
use folio::{Browser, PageId, SiteEvent, ViewEvent};

#[given(expr = "the browser has visited {string}")]
async fn given_visited(world: &mut SiteWorld, fragment: String) {
    world
        .controller_mut()
        .browser_mut()
        .navigate_to_fragment(fragment.trim_start_matches('#'));
}

#[when("I go back")]
async fn when_go_back(world: &mut SiteWorld) {
    world.act(SiteEvent::Back);
}

#[when("I go forward")]
async fn when_go_forward(world: &mut SiteWorld) {
    world.act(SiteEvent::Forward);
}

#[then(expr = "the {string} page is shown")]
async fn then_page_shown(world: &mut SiteWorld, page: String) {
    assert_eq!(world.controller().view_model().active_pages(), vec![PageId::new(page)]);
}

#[then("no page is shown")]
async fn then_no_page(world: &mut SiteWorld) {
    assert!(world.controller().view_model().active_pages().is_empty());
}

#[then(expr = "only the {string} nav link is highlighted")]
async fn then_link_highlighted(world: &mut SiteWorld, page: String) {
    assert_eq!(
        world.controller().view_model().highlighted_links(),
        vec![PageId::new(page)]
    );
}

#[then(expr = "element {string} is not highlighted")]
async fn then_not_highlighted(world: &mut SiteWorld, element: String) {
    let node = world.node(&element);
    let document = world.controller().view_model().document();
    assert!(!document.get(node).is_some_and(|e| e.has_class("active")));
}

#[then("the menu is open")]
async fn then_menu_open(world: &mut SiteWorld) {
    let vm = world.controller().view_model();
    assert!(vm.is_menu_open());
    assert!(vm.is_menu_panel_open());
}

#[then("the menu is closed")]
async fn then_menu_closed(world: &mut SiteWorld) {
    let vm = world.controller().view_model();
    assert!(!vm.is_menu_open());
    assert!(!vm.is_menu_panel_open());
}

#[then(expr = "the location is {string}")]
async fn then_location(world: &mut SiteWorld, location: String) {
    let fragment = world.controller().browser().location_fragment();
    assert_eq!(format!("#{fragment}"), location);
}

#[then(expr = "the history has {int} entries")]
async fn then_history_len(world: &mut SiteWorld, entries: usize) {
    assert_eq!(world.controller().browser().history().len(), entries);
}

#[then(expr = "a request for the unknown page {string} was recorded")]
async fn then_unknown_page_recorded(world: &mut SiteWorld, page: String) {
    let expected = ViewEvent::PageActivated {
        requested: PageId::new(page),
        page: None,
    };
    assert!(world.recorded_events().contains(&expected));
}
