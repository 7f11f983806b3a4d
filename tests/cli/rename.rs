use anyhow::Result;
use regex::Regex;

use crate::CliTest;

#[test]
fn test_rename_apply_single_class() -> Result<()> {
    let test = CliTest::with_file("Widget.cs", "class Foo {}\n")?;

    let output = test.rename_command().arg("Widget.cs").arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("renamed: Widget.cs -> Foo.cs"), "{}", stdout);

    assert!(!test.exists("Widget.cs"));
    assert_eq!(test.read_file("Foo.cs")?, "class Foo {}\n");

    Ok(())
}

#[test]
fn test_dry_run_is_default() -> Result<()> {
    let test = CliTest::with_file("Widget.cs", "class Foo {}\n")?;

    let output = test.rename_command().arg("Widget.cs").output()?;

    // Pending renames exit 1 so CI can flag misnamed files.
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("would rename: Widget.cs -> Foo.cs"), "{}", stdout);
    assert!(stdout.contains("Run with --apply to rename these files."));

    assert!(test.exists("Widget.cs"));
    assert!(!test.exists("Foo.cs"));

    Ok(())
}

#[test]
fn test_already_named_file_is_untouched() -> Result<()> {
    let test = CliTest::with_file("Foo.cs", "class Foo {}\n")?;

    let output = test.rename_command().arg("Foo.cs").arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Checked 1 source file - all file names match their types"),
        "{}",
        stdout
    );
    assert!(test.exists("Foo.cs"));

    Ok(())
}

#[test]
fn test_multiple_types_skipped() -> Result<()> {
    let test = CliTest::with_file("Both.cs", "class A {}\nclass B {}\n")?;

    let output = test
        .rename_command()
        .arg("Both.cs")
        .arg("--apply")
        .arg("--verbose")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("skipped: Both.cs (multiple types declared)"),
        "{}",
        stdout
    );
    assert!(test.exists("Both.cs"));

    Ok(())
}

#[test]
fn test_nested_type_counts_as_multiple() -> Result<()> {
    let test = CliTest::with_file("Outer.cs", "class Outer2 { interface IFoo {} }\n")?;

    let output = test
        .rename_command()
        .arg("Outer.cs")
        .arg("--apply")
        .arg("--verbose")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("skipped: Outer.cs (multiple types declared)"),
        "{}",
        stdout
    );
    assert!(test.exists("Outer.cs"));

    Ok(())
}

#[test]
fn test_partial_class_keeps_designer_segment() -> Result<()> {
    let test = CliTest::with_file("Old.Designer.cs", "partial class New {}\n")?;

    let output = test
        .rename_command()
        .arg("Old.Designer.cs")
        .arg("--apply")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(!test.exists("Old.Designer.cs"));
    assert_eq!(test.read_file("New.Designer.cs")?, "partial class New {}\n");

    Ok(())
}

#[test]
fn test_scans_source_root_when_no_paths_given() -> Result<()> {
    let test = CliTest::with_file("Models/Widget.cs", "class Gadget {}\n")?;
    test.write_file("Services/Mailer.cs", "class Mailer {}\n")?;

    let output = test.rename_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(!test.exists("Models/Widget.cs"));
    assert!(test.exists("Models/Gadget.cs"));
    // Already-named files stay put.
    assert!(test.exists("Services/Mailer.cs"));

    Ok(())
}

#[test]
fn test_generated_files_are_ignored_on_scan() -> Result<()> {
    let test = CliTest::with_file("Resources.g.cs", "class Foo {}\n")?;
    test.write_file("obj/Temp.cs", "class Bar {}\n")?;

    let output = test.rename_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.exists("Resources.g.cs"));
    assert!(test.exists("obj/Temp.cs"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        ".typenamerrc.json",
        r#"{
         "ignores": ["**/legacy/**"]
     }"#,
    )?;

    test.write_file("Widget.cs", "class Foo {}\n")?;
    test.write_file("legacy/Old.cs", "class Ancient {}\n")?;

    let output = test.rename_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.exists("Foo.cs"));
    assert!(test.exists("legacy/Old.cs"));

    Ok(())
}

#[test]
fn test_missing_explicit_path_is_skipped() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .rename_command()
        .arg("Missing.cs")
        .arg("--apply")
        .arg("--verbose")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("skipped: Missing.cs (file does not exist)"),
        "{}",
        stdout
    );

    Ok(())
}

#[test]
fn test_collision_falls_back_to_random_suffix() -> Result<()> {
    let test = CliTest::with_file("Widget.cs", "class Foo {}\n")?;
    test.write_file("Foo.cs", "class Foo {} // occupant\n")?;

    let output = test.rename_command().arg("Widget.cs").arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(!test.exists("Widget.cs"));

    // The occupant is never overwritten.
    assert_eq!(test.read_file("Foo.cs")?, "class Foo {} // occupant\n");

    // The moved file landed under Foo.<5 hex chars>.cs with its content intact.
    let pattern = Regex::new(r"^Foo\.[0-9a-f]{5}\.cs$")?;
    let fallback: Vec<String> = std::fs::read_dir(test.root())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| pattern.is_match(name))
        .collect();
    assert_eq!(fallback.len(), 1, "expected one fallback file");
    assert_eq!(test.read_file(&fallback[0])?, "class Foo {}\n");

    Ok(())
}

#[test]
fn test_unparsable_file_is_left_alone() -> Result<()> {
    let test = CliTest::with_file("Broken.cs", "%%% not C# at all @@@\n")?;

    let output = test.rename_command().arg("Broken.cs").arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.exists("Broken.cs"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("rename"));
    assert!(stdout.contains("init"));

    Ok(())
}
