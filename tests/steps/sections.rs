//! Step definitions for expandable resume sections

use crate::common::world::SiteWorld;
use cucumber::then;
use folio::SectionId;

#[then(expr = "the {string} section is collapsed")]
async fn then_section_collapsed(world: &mut SiteWorld, section: String) {
    let vm = world.controller().view_model();
    let key = SectionId::new(section);
    assert_eq!(vm.is_section_collapsed(&key), Some(true));
    if let Some(content) = vm.is_section_content_collapsed(&key) {
        assert!(content, "content block should collapse with its title");
    }
}

#[then(expr = "the {string} section is expanded")]
async fn then_section_expanded(world: &mut SiteWorld, section: String) {
    let vm = world.controller().view_model();
    let key = SectionId::new(section);
    assert_eq!(vm.is_section_collapsed(&key), Some(false));
    if let Some(content) = vm.is_section_content_collapsed(&key) {
        assert!(!content, "content block should expand with its title");
    }
}

#[then(expr = "the {string} section has no content block")]
async fn then_section_without_content(world: &mut SiteWorld, section: String) {
    let vm = world.controller().view_model();
    assert_eq!(vm.is_section_content_collapsed(&SectionId::new(section)), None);
}
