use mockito::Server;
use pcfgen_testing::TestWorld;
use pcfgen_testing::assertions::{assert_file_names, assert_no_placeholders, assert_unresolved};
use pcfgen_testing::fixtures::{DUPLICATE_NAMES_CSV, PROFILE_CONFIG, PROFILE_TEMPLATE};

fn profile_world() -> TestWorld {
    TestWorld::new()
        .with_config(PROFILE_CONFIG)
        .with_template(PROFILE_TEMPLATE)
        .with_csv(DUPLICATE_NAMES_CSV)
}

#[test]
fn test_generate_writes_one_file_per_row() -> anyhow::Result<()> {
    let world = profile_world();

    let result = world.run(&["generate", "--format", "json"])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json()?;
    assert_file_names(&json, &["jane-doe", "jane-doe (1)", "jane-doe (2)"])?;
    assert_unresolved(&json, &["Department"])?;
    assert_eq!(json["written"], true);

    for name in ["jane-doe", "jane-doe (1)", "jane-doe (2)"] {
        let content = world.read(format!("out/{}.pcf", name))?;
        assert_no_placeholders(&content)?;
        assert!(content.contains("<h1>Jane Doe</h1>"));
    }
    Ok(())
}

#[test]
fn test_generated_content_is_formatted() -> anyhow::Result<()> {
    let world = profile_world();
    assert!(world.run(&["generate"])?.success());

    let first = world.read("out/jane-doe.pcf")?;
    assert!(first.contains("<div class=\"bio\"><p>First &amp; only</p></div>"));
    assert!(!first.contains("note"));
    assert!(first.contains("<li class='dm-profile-acitivity'>PhD</li>"));
    assert!(first.contains("<p>312-555-1234</p>"));
    assert!(first.contains("<!--  -->"));

    let second = world.read("out/jane-doe (1).pcf")?;
    assert!(second.contains("<div class=\"bio\"></div>"));
    assert!(second.contains("<p></p>"));

    let third = world.read("out/jane-doe (2).pcf")?;
    assert!(third.contains("<p>12345</p>"));
    Ok(())
}

#[test]
fn test_unknown_placeholder_warned() -> anyhow::Result<()> {
    let world = profile_world();

    let result = world.run(&["generate"])?;
    assert!(result.success());
    assert!(result.stderr().contains("|||Department|||"));
    assert!(result.stdout().contains("Generated 3 files"));
    Ok(())
}

#[test]
fn test_keep_flag_preserves_placeholder() -> anyhow::Result<()> {
    let world = profile_world();

    let result = world.run(&["generate", "--keep", "Department", "--format", "json"])?;
    assert!(result.success());
    assert_unresolved(&result.json()?, &[])?;

    let content = world.read("out/jane-doe.pcf")?;
    assert!(content.contains("<!-- |||Department||| -->"));
    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> anyhow::Result<()> {
    let world = profile_world();

    let result = world.run(&["generate", "--dry-run"])?;
    assert!(result.success());
    assert!(result.stdout().contains("Dry run: 3 files would be written"));
    assert!(!world.path("out").exists());
    Ok(())
}

#[test]
fn test_flags_work_without_config() -> anyhow::Result<()> {
    let world = TestWorld::new()
        .with_sample("profiles_sheet.json", "data/sheet.json")
        .with_file("page.txt", "<h1>|||First Name||| |||Last Name|||</h1>|||Zip Code|||");

    let result = world.run(&[
        "generate",
        "--input",
        "data/sheet.json",
        "--template",
        "page.txt",
        "--output-dir",
        "pages",
        "--format",
        "json",
    ])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    assert_file_names(&result.json()?, &["ada-lovelace"])?;
    assert_eq!(
        world.read("pages/ada-lovelace.pcf")?,
        "<h1>Ada Lovelace</h1>60607"
    );
    Ok(())
}

#[test]
fn test_missing_template_aborts_before_output() -> anyhow::Result<()> {
    let world = TestWorld::new()
        .with_config(PROFILE_CONFIG)
        .with_csv(DUPLICATE_NAMES_CSV);

    let result = world.run(&["generate"])?;
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("Cannot read template"));
    assert!(!world.path("out").exists());
    Ok(())
}

#[test]
fn test_missing_source_reported() -> anyhow::Result<()> {
    let world = TestWorld::new().with_template(PROFILE_TEMPLATE);

    let result = world.run(&["generate", "--template", "template.txt"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("No row source configured"));
    Ok(())
}

#[test]
fn test_missing_smartsheet_token_reported() -> anyhow::Result<()> {
    let world = TestWorld::new().with_template(PROFILE_TEMPLATE).with_config(
        r#"
template = "template.txt"

[source]
kind = "smartsheet"
sheet_id = "4583173393803140"
token_env = "PCFGEN_CLI_TEST_TOKEN_NEVER_SET"
"#,
    );

    let result = world.run(&["generate"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("PCFGEN_CLI_TEST_TOKEN_NEVER_SET"));
    Ok(())
}

#[test]
fn test_smartsheet_token_read_from_env() -> anyhow::Result<()> {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/sheets/42")
        .match_header("authorization", "Bearer s3cret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "columns": [{"id": 1, "title": "First Name"}, {"id": 2, "title": "Last Name"}],
                "rows": [{"cells": [{"columnId": 1, "value": "Ada"}, {"columnId": 2, "value": "Lovelace"}]}]
            }"#,
        )
        .create();

    let world = TestWorld::new()
        .with_env("PCFGEN_CLI_TEST_TOKEN", "s3cret")
        .with_template("<h1>|||First Name||| |||Last Name|||</h1>")
        .with_config(&format!(
            r#"
template = "template.txt"
output_dir = "out"

[source]
kind = "smartsheet"
sheet_id = "42"
token_env = "PCFGEN_CLI_TEST_TOKEN"
api_base = "{}"
"#,
            server.url()
        ));

    let result = world.run(&["generate", "--format", "json"])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    mock.assert();
    assert_file_names(&result.json()?, &["ada-lovelace"])?;
    assert_eq!(world.read("out/ada-lovelace.pcf")?, "<h1>Ada Lovelace</h1>");
    Ok(())
}

#[test]
fn test_config_paths_resolve_from_config_dir() -> anyhow::Result<()> {
    let world = TestWorld::new()
        .with_file("site/pcfgen.toml", PROFILE_CONFIG)
        .with_file("site/template.txt", PROFILE_TEMPLATE)
        .with_file("site/rows.csv", DUPLICATE_NAMES_CSV)
        .enter_dir("elsewhere");

    let result = world.run(&["--config", "../site/pcfgen.toml", "generate"])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    assert!(world.temp_dir().join("site/out/jane-doe.pcf").exists());
    assert!(!world.cwd().join("out").exists());
    Ok(())
}
