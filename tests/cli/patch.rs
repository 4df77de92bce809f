use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout, table};

fn setup(test: &CliTest, lang: &str) -> Result<()> {
    test.write_file(
        "Localizable.strings",
        "\"ok\"=\"OK\";\n\"cancel\"=\"Cancel\";\n\"save\"=\"Save\";\n",
    )?;
    let output = test
        .init_command()
        .args(["Localizable.strings", "translate.xlsx", "--lang", lang])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    Ok(())
}

#[test]
fn test_patch_from_strings_overwrites_only_matching_keys() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test, "zh_CN")?;
    test.write_file("fix.strings", "\"cancel\"=\"取消\";\n")?;

    let output = test
        .patch_command()
        .args(["fix.strings", "translate.xlsx", "--lang", "zh_CN"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "✓ Patched sheet zh_CN in translate.xlsx: 1/3 keys matched, 1 changed\n"
    );
    assert_eq!(
        test.read_sheet("translate.xlsx", "zh_CN")?,
        table(&[("ok", "OK"), ("cancel", "取消"), ("save", "Save")])
    );
    Ok(())
}

#[test]
fn test_patch_does_not_add_unknown_keys() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test, "base")?;
    test.write_file("fix.strings", "\"extra\"=\"Extra\";\n")?;

    let output = test
        .patch_command()
        .args(["fix.strings", "translate.xlsx"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(
        stderr(&output).contains("1 patch key not present in translate.xlsx"),
        "{}",
        stderr(&output)
    );
    assert_eq!(
        test.read_sheet("translate.xlsx", "base")?,
        table(&[("ok", "OK"), ("cancel", "Cancel"), ("save", "Save")])
    );
    Ok(())
}

#[test]
fn test_patch_verbose_lists_ignored_keys() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test, "base")?;
    test.write_file("fix.strings", "\"extra\"=\"Extra\";\n")?;

    let output = test
        .patch_command()
        .args(["fix.strings", "translate.xlsx", "-v"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("ignored: extra"));
    Ok(())
}

#[test]
fn test_patch_from_workbook() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test, "en_US")?;
    test.write_file("reviewed.strings", "\"save\"=\"Save changes\";\n")?;
    test.init_command()
        .args(["reviewed.strings", "reviewed.xlsx", "--lang", "en_US"])
        .output()?;

    let output = test
        .patch_command()
        .args(["reviewed.xlsx", "translate.xlsx", "--lang", "en_US"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_sheet("translate.xlsx", "en_US")?,
        table(&[("ok", "OK"), ("cancel", "Cancel"), ("save", "Save changes")])
    );
    Ok(())
}

#[test]
fn test_patch_rejects_unsupported_patch_file() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test, "base")?;
    test.write_file("fix.json", r#"{ "ok": "Okay" }"#)?;

    let output = test
        .patch_command()
        .args(["fix.json", "translate.xlsx"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Patch file must be a .xlsx or .strings file"));
    Ok(())
}

#[test]
fn test_patch_missing_patch_file() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test, "base")?;

    let output = test
        .patch_command()
        .args(["missing.strings", "translate.xlsx"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Patch file not found"));
    Ok(())
}

#[test]
fn test_patch_missing_sheet_fails() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test, "base")?;
    test.write_file("fix.strings", "\"ok\"=\"Okay\";\n")?;

    let output = test
        .patch_command()
        .args(["fix.strings", "translate.xlsx", "--lang", "ja_JP"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Sheet \"ja_JP\" not found"));
    Ok(())
}
