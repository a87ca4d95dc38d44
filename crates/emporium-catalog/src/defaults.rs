//! Built-in default catalog
//!
//! Used when the host has no catalog document or its region fails to parse.
//! Also renders the fenced document seeded into fresh stores so users have
//! something to edit.

use emporium_core::{ExtensionDescriptor, ExtensionKind, SourceType};

use crate::parser::{FENCE_CLOSE, FENCE_OPEN};

/// The extensions offered out of the box
pub fn default_catalog() -> Vec<ExtensionDescriptor> {
    vec![
        ExtensionDescriptor {
            name: Some("AutosavePlugin".to_string()),
            url: "https://github.com/emporium-dev/extensions/blob/master/AutosavePlugin.js"
                .to_string(),
            source_type: Some(SourceType::Text),
            description: Some(
                "highlights the save control and the window title while there are unsaved changes"
                    .to_string(),
            ),
            kind: Some(ExtensionKind::Plugin),
            version: None,
            text: None,
        },
        ExtensionDescriptor {
            description: Some(
                "dark color scheme, toggled by a macro or the operating system setting".to_string(),
            ),
            ..ExtensionDescriptor::from_url(
                "https://github.com/emporium-dev/extensions/blob/master/NightShiftPlugin.js",
            )
        },
        ExtensionDescriptor {
            name: Some("FieldEditorPlugin".to_string()),
            url: "https://emporium-dev.github.io/showcase/index.html#FieldEditorPlugin".to_string(),
            source_type: Some(SourceType::Container),
            description: Some(
                "adds create/edit/rename/delete controls to the record fields panel".to_string(),
            ),
            kind: Some(ExtensionKind::Plugin),
            version: None,
            text: None,
        },
        ExtensionDescriptor::from_url(
            "https://github.com/emporium-dev/extensions/blob/master/TableSortPlugin.js",
        ),
    ]
}

/// Render the default catalog as a fenced document body
///
/// Suitable for seeding the host's catalog record; parsing it back yields
/// the default catalog.
pub fn default_catalog_document() -> String {
    let json = serde_json::to_string_pretty(&default_catalog())
        .expect("default catalog serializes to JSON");
    format!("{FENCE_OPEN}\n{json}\n{FENCE_CLOSE}")
}
