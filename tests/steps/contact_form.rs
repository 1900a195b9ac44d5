//! Step definitions for the contact form

use crate::common::world::{parse_field, SiteWorld};
use cucumber::{given, then, when};
use folio::{BrowserEvent, ContactField, SiteEvent, ViewEvent};

#[when(expr = "I type {string} into {string}")]
async fn when_type(world: &mut SiteWorld, value: String, element: String) {
    world.act(SiteEvent::Type { element, value });
}

#[given("I fill the contact form with valid details")]
async fn given_valid_details(world: &mut SiteWorld) {
    for (element, value) in [
        ("name", "Ada Lovelace"),
        ("email", "ada@example.com"),
        ("message", "I would like to talk about engines."),
    ] {
        world.act(SiteEvent::Type {
            element: element.to_string(),
            value: value.to_string(),
        });
    }
}

fn submit(world: &mut SiteWorld) {
    let target = world.node("contactForm");
    world.dispatch(BrowserEvent::Submit { target });
}

#[given("I have submitted the contact form")]
async fn given_submitted(world: &mut SiteWorld) {
    submit(world);
}

#[when("I submit the contact form")]
async fn when_submit(world: &mut SiteWorld) {
    submit(world);
}

#[then(expr = "the {string} field shows {string}")]
async fn then_field_error(world: &mut SiteWorld, field: String, message: String) {
    let field = parse_field(&field);
    assert_eq!(
        world.controller().view_model().field_error(field),
        Some(message.as_str())
    );
}

#[then(expr = "the {string} field shows no error")]
async fn then_no_field_error(world: &mut SiteWorld, field: String) {
    let field = parse_field(&field);
    assert_eq!(world.controller().view_model().field_error(field), None);
}

#[then("the contact form is visible")]
async fn then_form_visible(world: &mut SiteWorld) {
    assert!(world.controller().view_model().is_form_visible());
}

#[then("the contact form is hidden")]
async fn then_form_hidden(world: &mut SiteWorld) {
    assert!(!world.controller().view_model().is_form_visible());
}

#[then("the success banner is shown")]
async fn then_banner_shown(world: &mut SiteWorld) {
    assert!(world.controller().view_model().is_banner_visible());
}

#[then("the success banner is hidden")]
async fn then_banner_hidden(world: &mut SiteWorld) {
    assert!(!world.controller().view_model().is_banner_visible());
}

#[then("every contact field is empty")]
async fn then_fields_empty(world: &mut SiteWorld) {
    let vm = world.controller().view_model();
    for field in ContactField::ALL {
        assert_eq!(vm.field_value(field), Some(""));
    }
}

#[then(expr = "the form was reset {int} time(s)")]
async fn then_reset_count(world: &mut SiteWorld, times: usize) {
    let resets = world
        .recorded_events()
        .iter()
        .filter(|event| **event == ViewEvent::FormReset)
        .count();
    assert_eq!(resets, times);
}
