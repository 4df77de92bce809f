use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_then_restore_round_trip() -> Result<()> {
    let test = CliTest::with_file(
        "Localizable.strings",
        "\"zebra\"=\"Zebra\";\n\"apple\"=\"Apple\";\n/* skipped */\n\"mango\"=\"a=b\";\n",
    )?;
    let output = test
        .init_command()
        .args(["Localizable.strings", "translate.xlsx", "--lang", "en_US"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let output = test
        .restore_command()
        .args(["translate.xlsx", "out", "--lang", "en_US"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("✓ Restored 3 keys from sheet en_US to "));
    assert_eq!(
        test.read_file("out/en_us/Localizable.strings")?,
        "\"apple\"=\"Apple\";\n\"mango\"=\"a=b\";\n\"zebra\"=\"Zebra\";\n"
    );
    Ok(())
}

#[test]
fn test_restore_overwrites_existing_file() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", "\"a\"=\"1\";\n\"b\"=\"2\";\n")?;
    test.write_file("out/base/Localizable.strings", "\"stale\"=\"old value\";\n")?;
    test.init_command()
        .args(["Localizable.strings", "translate.xlsx"])
        .output()?;

    let output = test
        .restore_command()
        .args(["translate.xlsx", "out"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("out/base/Localizable.strings")?,
        "\"a\"=\"1\";\n\"b\"=\"2\";\n"
    );
    Ok(())
}

#[test]
fn test_restore_requires_xlsx() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", "\"a\"=\"1\";\n")?;

    let output = test
        .restore_command()
        .args(["Localizable.strings", "out"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("must be a .xlsx file"));
    assert!(!test.root().join("out").exists());
    Ok(())
}

#[test]
fn test_restore_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .restore_command()
        .args(["translate.xlsx", "out"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Translation file not found"));
    Ok(())
}

#[test]
fn test_restore_unknown_lang_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("Localizable.strings", "\"a\"=\"1\";\n")?;
    test.init_command()
        .args(["Localizable.strings", "translate.xlsx"])
        .output()?;

    let output = test
        .restore_command()
        .args(["translate.xlsx", "out", "--lang", "de_DE"])
        .output()?;

    assert!(!output.status.success());
    assert!(!test.root().join("out").exists());
    Ok(())
}
