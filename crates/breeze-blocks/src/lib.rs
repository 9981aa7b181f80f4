//! The Breezeblocks block library.
//!
//! One module per block type, each implementing [`breeze_core::BlockType`]
//! (schema + save markup) and, for the layout blocks, [`breeze_editor::BlockUi`]
//! (edit view + mount hook):
//!
//! - [`container`] - full-width section with background/text colors
//! - [`split_panel`] - image beside content, reversible
//! - [`tile`] - linked card with color or image background
//! - [`button_group`] - inline row of buttons
//! - [`accordion`] / [`accordion_item`] - collapsible definition list
//! - [`core_text`] - minimal heading/paragraph/button/list leaves the
//!   layout blocks nest in their templates and allow-lists
//!
//! [`register_all`] populates a [`BlockRegistry`] with every type above;
//! [`register_ui`] populates a [`UiRegistry`] with the layout blocks' edit
//! views. Both are called once at editor-session startup.

pub mod accordion;
pub mod accordion_item;
pub mod button_group;
pub mod colors;
pub mod container;
pub mod core_text;
pub mod split_panel;
pub mod tile;

use breeze_core::BlockRegistry;
use breeze_editor::UiRegistry;

pub use accordion::Accordion;
pub use accordion_item::AccordionItem;
pub use button_group::ButtonGroup;
pub use container::Container;
pub use split_panel::SplitPanel;
pub use tile::Tile;

/// Register every block type this library defines.
///
/// # Errors
/// Fails with `DuplicateType` when called against a registry that already
/// holds any of the library's type ids.
pub fn register_all(registry: &mut BlockRegistry) -> breeze_core::Result<()> {
    registry.register(Box::new(Container::new()))?;
    registry.register(Box::new(SplitPanel::new()))?;
    registry.register(Box::new(Tile::new()))?;
    registry.register(Box::new(ButtonGroup::new()))?;
    registry.register(Box::new(Accordion::new()))?;
    registry.register(Box::new(AccordionItem::new()))?;
    core_text::register(registry)?;
    Ok(())
}

/// Register the layout blocks' edit UIs.
///
/// The `core_text` blocks get no UI here; hosts bring their own rich-text
/// editing for those.
pub fn register_ui(uis: &mut UiRegistry) -> breeze_editor::Result<()> {
    uis.register(Box::new(Container::new()))?;
    uis.register(Box::new(SplitPanel::new()))?;
    uis.register(Box::new(Tile::new()))?;
    uis.register(Box::new(ButtonGroup::new()))?;
    uis.register(Box::new(Accordion::new()))?;
    uis.register(Box::new(AccordionItem::new()))?;
    Ok(())
}
