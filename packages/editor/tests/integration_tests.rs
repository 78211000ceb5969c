//! Integration tests for the editor crate: full gesture-to-tree flows
//! the way the host application drives them.

use mosaic_editor::{DropTarget, EditorStore, ElementPatch, Mutation};
use mosaic_model::{ComponentDefinition, Document, EditorMode};
use serde_json::json;

#[test]
fn test_empty_canvas_scenario() {
    // Start with an empty root list
    let mut store = EditorStore::new("Landing page", EditorMode::Form);
    assert_eq!(store.stats().total, 0);

    // Drop a two-column section on the canvas
    let section = ComponentDefinition::new("section")
        .container()
        .with_default("columns", json!(2));
    let outcome = store.apply(Mutation::InsertFromPalette {
        definition: section,
        target: DropTarget::RootAppend,
    });
    let section_id = outcome.element_id().unwrap().to_string();

    let root = &store.elements()[0];
    assert_eq!(root.kind, "section");
    assert_eq!(root.children.as_deref(), Some(&[][..]));

    // Drop a text element into column 0
    store.apply(Mutation::InsertFromPalette {
        definition: ComponentDefinition::new("text"),
        target: DropTarget::ContainerColumnAppend {
            container_id: section_id,
            column_index: 0,
        },
    });

    // section + synthesized column + text
    assert_eq!(store.stats().total, 3);
    let column = &store.elements()[0].children.as_ref().unwrap()[0];
    assert_eq!(column.column_index(), Some(0));
    assert_eq!(column.children.as_ref().unwrap()[0].kind, "text");
}

#[test]
fn test_drag_end_to_tree_via_zone_identifiers() {
    let mut store = EditorStore::new("Page", EditorMode::Zone);

    let hero = ComponentDefinition::new("hero").with_label("Hero").container();
    let section_id = store
        .insert_at_zone(hero, "canvas")
        .element_id()
        .unwrap()
        .to_string();

    // Numbered slot before the hero
    store.insert_at_zone(ComponentDefinition::new("divider"), "drop-zone-0");
    assert_eq!(store.elements()[0].kind, "divider");

    // Direct drop on the hero element
    store.insert_at_zone(
        ComponentDefinition::new("button"),
        &section_id,
    );
    let hero = &store.elements()[1];
    assert_eq!(hero.children.as_ref().unwrap()[0].kind, "button");

    // Column drop zone rendered by the hero
    store.insert_at_zone(
        ComponentDefinition::new("image"),
        &format!("drop-zone-{section_id}-col-1"),
    );
    let hero = &store.elements()[1];
    assert_eq!(hero.children.as_ref().unwrap().len(), 2);
}

#[test]
fn test_properties_panel_round_trip() {
    let mut store = EditorStore::new("Form", EditorMode::Form);
    let id = store
        .insert_at_zone(
            ComponentDefinition::new("text").with_label("Text"),
            "canvas",
        )
        .element_id()
        .unwrap()
        .to_string();

    // Panel edits flow back through Update
    let mut properties = serde_json::Map::new();
    properties.insert("required".to_string(), json!(true));
    store.apply(Mutation::Update {
        element_id: id.clone(),
        patch: ElementPatch {
            label: Some("Email address".to_string()),
            properties: Some(properties),
            ..Default::default()
        },
    });

    let selected = store.selected_element().unwrap();
    assert_eq!(selected.label.as_deref(), Some("Email address"));
    assert_eq!(selected.properties.get("required"), Some(&json!(true)));
    assert_eq!(selected.properties.get("id"), Some(&json!(id)));
}

#[test]
fn test_reorder_is_root_only() {
    let mut store = EditorStore::new("Form", EditorMode::Form);
    let a = store
        .insert_at_zone(ComponentDefinition::new("text"), "canvas")
        .element_id()
        .unwrap()
        .to_string();
    let section = store
        .insert_at_zone(ComponentDefinition::new("section").container(), "canvas")
        .element_id()
        .unwrap()
        .to_string();
    let nested = store
        .insert_at_zone(ComponentDefinition::new("text"), &section)
        .element_id()
        .unwrap()
        .to_string();

    // Nested ids are not root siblings, so this is a no-op
    let outcome = store.apply(Mutation::Reorder {
        active_id: nested,
        over_id: a.clone(),
    });
    assert!(!outcome.is_applied());

    let outcome = store.apply(Mutation::Reorder {
        active_id: section.clone(),
        over_id: a,
    });
    assert!(outcome.is_applied());
    assert_eq!(store.elements()[0].id, section);
}

#[test]
fn test_document_persistence_boundary() {
    let mut store = EditorStore::new("Newsletter", EditorMode::Email);
    store
        .document()
        .to_json()
        .expect("empty document serializes");

    store.insert_at_zone(ComponentDefinition::new("hero").container(), "canvas");
    assert!(store.is_dirty());

    let json = store.to_json().unwrap();
    store.mark_saved();
    assert!(!store.is_dirty());

    let restored = Document::from_json(&json).unwrap();
    assert_eq!(restored.title, "Newsletter");
    assert_eq!(restored.mode, EditorMode::Email);
    assert_eq!(restored.elements.len(), 1);
}

#[test]
fn test_stats_summary_per_mode() {
    let mut store = EditorStore::new("Form", EditorMode::Form);
    store.insert_at_zone(ComponentDefinition::new("section").container(), "canvas");
    store.insert_at_zone(ComponentDefinition::new("text"), "canvas");

    assert_eq!(
        store.stats().summary(store.document().mode),
        "1 sections, 1 fields"
    );
}
