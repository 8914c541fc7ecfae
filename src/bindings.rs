//! `Bindings.xml` generation.
//!
//! Key bindings are declared in the config file and rendered to the XML
//! format the game client loads. Entries may be limited to one client
//! flavor (classic or retail).

use std::{fs, path::Path};

use anyhow::{Context, Result};
use quick_xml::{
    Writer,
    escape::partial_escape,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::config::{BindingEntry, BindingsConfig, Flavor};

/// Entries emitted for `flavor`, in declaration order.
pub fn selected_entries(config: &BindingsConfig, flavor: Flavor) -> Vec<&BindingEntry> {
    config
        .entries
        .iter()
        .filter(|entry| entry.flavor.is_none_or(|f| f == flavor))
        .collect()
}

/// Render the bindings document for `flavor`.
///
/// Binding bodies keep quotes as-is; only `<`, `>` and `&` are escaped.
pub fn render_bindings(config: &BindingsConfig, flavor: Flavor) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
    writer.write_event(Event::Start(BytesStart::new("Bindings")))?;

    for entry in selected_entries(config, flavor) {
        let mut binding = BytesStart::new("Binding");
        binding.push_attribute(("name", entry.name.as_str()));
        if let Some(header) = &entry.header {
            binding.push_attribute(("header", header.as_str()));
        }
        if !config.category.is_empty() {
            binding.push_attribute(("category", config.category.as_str()));
        }

        writer.write_event(Event::Start(binding))?;
        let body = entry.lua.join("\n");
        writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(&body))))?;
        writer.write_event(Event::End(BytesEnd::new("Binding")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("Bindings")))?;

    let mut xml = String::from_utf8(writer.into_inner()).context("Generated XML is not UTF-8")?;
    xml.push('\n');
    Ok(xml)
}

/// Render and write the bindings document, replacing any existing file.
///
/// Returns the number of bindings written.
pub fn write_bindings(config: &BindingsConfig, flavor: Flavor, path: &Path) -> Result<usize> {
    let xml = render_bindings(config, flavor)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, xml).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(selected_entries(config, flavor).len())
}
