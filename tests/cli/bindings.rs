use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

const CONFIG: &str = r#"{
  "bindings": {
    "category": "BINDING_CATEGORY_DEJUNK",
    "entries": [
      {
        "name": "DEJUNK_TOGGLE_OPTIONS_FRAME",
        "header": "DEJUNK_HEADER_GENERAL",
        "lua": ["DejunkBindings_ToggleOptionsFrame()"]
      },
      {
        "name": "DEJUNK_START_DESTROYING",
        "lua": ["DejunkBindings_StartDestroying()"],
        "flavor": "classic"
      },
      {
        "name": "DEJUNK_DESTROY_NEXT_ITEM",
        "lua": ["DejunkBindings_DestroyNextItem()"],
        "flavor": "retail"
      }
    ]
  }
}"#;

#[test]
fn test_bindings_retail() -> Result<()> {
    let test = CliTest::with_file(".loclintrc.json", CONFIG)?;

    let output = test.bindings_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Wrote 2 bindings (retail)"));

    let xml = test.read_file("Bindings.xml")?;
    assert!(xml.starts_with("<?xml version=\"1.0\"?>"));
    assert!(xml.contains(
        r#"<Binding name="DEJUNK_TOGGLE_OPTIONS_FRAME" header="DEJUNK_HEADER_GENERAL" category="BINDING_CATEGORY_DEJUNK">DejunkBindings_ToggleOptionsFrame()</Binding>"#
    ));
    assert!(xml.contains("DEJUNK_DESTROY_NEXT_ITEM"));
    assert!(!xml.contains("DEJUNK_START_DESTROYING"));

    Ok(())
}

#[test]
fn test_bindings_classic_to_output() -> Result<()> {
    let test = CliTest::with_file(".loclintrc.json", CONFIG)?;

    let output = test
        .bindings_command()
        .args(["--classic", "--output", "build/Bindings.xml"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Wrote 2 bindings (classic) to ./build/Bindings.xml"));

    let xml = test.read_file("build/Bindings.xml")?;
    assert!(xml.contains("DEJUNK_START_DESTROYING"));
    assert!(!xml.contains("DEJUNK_DESTROY_NEXT_ITEM"));
    assert!(!test.root().join("Bindings.xml").exists());

    Ok(())
}

#[test]
fn test_bindings_without_entries() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.bindings_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Wrote 0 bindings"));
    assert!(test.read_file("Bindings.xml")?.contains("<Bindings"));

    Ok(())
}

#[test]
fn test_bindings_output_is_relative_to_root() -> Result<()> {
    let test = CliTest::with_file("addon/.loclintrc.json", CONFIG)?;

    let output = test
        .bindings_command()
        .args(["--root", "addon", "--output", "Bindings.xml"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("to addon/Bindings.xml"));
    assert!(test.read_file("addon/Bindings.xml")?.contains("DEJUNK_TOGGLE_OPTIONS_FRAME"));
    assert!(!test.root().join("Bindings.xml").exists());

    Ok(())
}
