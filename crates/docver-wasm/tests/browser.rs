//! Browser-only DOM tests, run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use docver_core::{Depth, DocLocation, LinkContainer, Strategy, VersionList, append_links, build_links};
use docver_wasm::ElementContainer;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn list_element() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("dl").unwrap();
    element.set_inner_html("<dt>Versions</dt>");
    element
}

#[wasm_bindgen_test]
fn splices_links_after_existing_markup() {
    let location = DocLocation::resolve(
        "https://site.example/2.0/guide/intro.html",
        Strategy::Marked(Depth::new(2)),
    );
    let links = build_links(&location, &VersionList::parse("1.0\n2.0"));

    let element = list_element();
    let mut container = ElementContainer::new(element.clone());
    append_links(&mut container, &links);

    let markup = element.inner_html();
    assert!(markup.starts_with("<dt>Versions</dt>"));
    assert!(markup.contains(r#"href="https://site.example/1.0/guide/intro.html""#));
    assert!(markup.contains(r#"href="https://site.example/2.0/guide/intro.html""#));
}

#[wasm_bindgen_test]
fn double_render_duplicates_links() {
    let location = DocLocation::resolve(
        "https://site.example/2.0/intro.html",
        Strategy::Marked(Depth::new(1)),
    );
    let links = build_links(&location, &VersionList::parse("1.0"));

    let element = list_element();
    let mut container = ElementContainer::new(element.clone());
    append_links(&mut container, &links);
    append_links(&mut container, &links);

    assert_eq!(element.inner_html().matches("<dd>").count(), 2);
}
