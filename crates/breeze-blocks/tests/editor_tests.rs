//! End-to-end editing flows over the real block library.

use async_trait::async_trait;
use breeze_blocks::{register_all, register_ui};
use breeze_core::BlockRegistry;
use breeze_editor::{EditSession, Error, Media, MediaKind, MediaProvider, UiRegistry};
use pretty_assertions::assert_eq;
use serde_json::json;

fn registry() -> BlockRegistry {
    let mut registry = BlockRegistry::new();
    register_all(&mut registry).unwrap();
    registry
}

fn uis() -> UiRegistry {
    let mut uis = UiRegistry::new();
    register_ui(&mut uis).unwrap();
    uis
}

#[test]
fn accordion_builds_and_survives_reload() {
    let registry = registry();
    let uis = uis();
    let mut session = EditSession::new(&registry);

    let accordion = session.insert_root("breezeblocks/accordion").unwrap();
    session.set_attributes(accordion, [("items", json!(3))]).unwrap();
    assert_eq!(session.ensure_template(accordion).unwrap(), 3);
    session.mount_all(&uis).unwrap();

    let schema = registry.schema("breezeblocks/accordion-item").unwrap();
    let items: Vec<_> = session.find(accordion).unwrap().children().to_vec();
    assert_eq!(items.len(), 3);
    for item in &items {
        // The mount hook assigned each item a 9-character anchor.
        assert_eq!(item.resolved(schema).str("anchor").unwrap().len(), 9);
    }

    let first = items[0].id();
    session
        .set_attributes(first, [("title", json!("Breakfast"))])
        .unwrap();

    let markup = session.serialize().unwrap();
    let (reloaded, warnings) = EditSession::load(&registry, &markup);
    assert_eq!(warnings, vec![]);
    assert_eq!(reloaded.roots(), session.roots());

    // Anchors persisted, so remounting after reload changes nothing.
    let mut reloaded = reloaded;
    reloaded.mount_all(&uis).unwrap();
    assert_eq!(reloaded.roots(), session.roots());
}

#[test]
fn tile_template_fills_heading_then_paragraph() {
    let registry = registry();
    let mut session = EditSession::new(&registry);

    let tile = session.insert_root("breezeblocks/tile").unwrap();
    assert_eq!(session.ensure_template(tile).unwrap(), 2);

    let children = session.find(tile).unwrap().children();
    assert_eq!(
        children.iter().map(|c| c.type_id()).collect::<Vec<_>>(),
        vec!["core/heading", "core/paragraph"]
    );

    // The template fired; it must not fire again even after an edit.
    assert_eq!(session.ensure_template(tile).unwrap(), 0);
}

#[test]
fn split_panel_rejects_list_children() {
    let registry = registry();
    let mut session = EditSession::new(&registry);

    let panel = session.insert_root("breezeblocks/block-split-panel").unwrap();
    let result = session.insert_child(panel, "core/list");
    assert!(matches!(result, Err(Error::ChildNotAllowed { .. })));
    assert!(session.find(panel).unwrap().children().is_empty());

    session.insert_child(panel, "core/heading").unwrap();
}

#[test]
fn accordion_item_cannot_be_inserted_elsewhere() {
    let registry = registry();
    let mut session = EditSession::new(&registry);

    let container = session.insert_root("breezeblocks/container").unwrap();
    let result = session.insert_child(container, "breezeblocks/accordion-item");
    assert!(matches!(result, Err(Error::ChildNotAllowed { .. })));
}

struct Library(Option<Media>);

#[async_trait]
impl MediaProvider for Library {
    async fn pick(&self, _kind: MediaKind) -> Option<Media> {
        self.0.clone()
    }
}

#[tokio::test]
async fn split_panel_image_flow() {
    let registry = registry();
    let mut session = EditSession::new(&registry);
    let panel = session.insert_root("breezeblocks/block-split-panel").unwrap();
    let schema = registry.schema("breezeblocks/block-split-panel").unwrap();

    // Pick an image.
    let picked = Library(Some(Media {
        url: "https://example.test/hero.jpg".to_string(),
        id: 41,
    }));
    assert!(session.select_media(panel, &picked).await.unwrap());
    {
        let block = session.find(panel).unwrap();
        assert_eq!(
            block.resolved(schema).str("url"),
            Some("https://example.test/hero.jpg")
        );
        assert_eq!(block.resolved(schema).i64("id"), Some(41));
    }

    // Dismissing the dialog changes nothing.
    let cancelled = Library(None);
    assert!(!session.select_media(panel, &cancelled).await.unwrap());
    assert_eq!(
        session.find(panel).unwrap().resolved(schema).i64("id"),
        Some(41)
    );

    // The picked image round-trips through markup.
    let markup = session.serialize().unwrap();
    let (reloaded, warnings) = EditSession::load(&registry, &markup);
    assert_eq!(warnings, vec![]);
    assert_eq!(reloaded.roots(), session.roots());
}

#[test]
fn toggling_reverse_updates_save_classes() {
    let registry = registry();
    let mut session = EditSession::new(&registry);
    let panel = session.insert_root("breezeblocks/block-split-panel").unwrap();

    assert!(session.toggle(panel, "reversed").unwrap());
    let markup = session.serialize().unwrap();
    assert!(markup.contains("split-panel--reversed"));

    assert!(!session.toggle(panel, "reversed").unwrap());
    let markup = session.serialize().unwrap();
    assert!(!markup.contains("split-panel--reversed"));
}

#[test]
fn edit_views_exist_for_all_layout_blocks() {
    let registry = registry();
    let uis = uis();
    let mut session = EditSession::new(&registry);

    for type_id in [
        "breezeblocks/container",
        "breezeblocks/block-split-panel",
        "breezeblocks/tile",
        "breezeblocks/button-group",
        "breezeblocks/accordion",
    ] {
        let id = session.insert_root(type_id).unwrap();
        let view = session.edit_view(id, &uis).unwrap();
        assert!(view.is_some(), "no edit view for {type_id}");
    }

    // The core text blocks rely on host-provided editing.
    let heading = session.insert_root("core/heading").unwrap();
    assert!(session.edit_view(heading, &uis).unwrap().is_none());
}
