use pcfgen_testing::TestWorld;
use pcfgen_testing::fixtures::{DUPLICATE_NAMES_CSV, PROFILE_CONFIG};

#[test]
fn test_columns_plain() -> anyhow::Result<()> {
    let world = TestWorld::new()
        .with_config(PROFILE_CONFIG)
        .with_csv(DUPLICATE_NAMES_CSV);

    let result = world.run(&["columns"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    insta::assert_snapshot!(result.stdout(), @r"
    First Name  plain
    Last Name   plain
    Biography   rich-text
    Education   list
    Phone       phone
    ");
    Ok(())
}

#[test]
fn test_columns_json_with_input_override() -> anyhow::Result<()> {
    let world = TestWorld::new()
        .with_config(PROFILE_CONFIG)
        .with_file("other.csv", "Biography,Notes\nx,y\n");

    let result = world.run(&["columns", "--input", "other.csv", "--format", "json"])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json()?;
    assert_eq!(json["columns"][0]["name"], "Biography");
    assert_eq!(json["columns"][0]["kind"], "rich-text");
    assert_eq!(json["columns"][0]["configured"], true);
    assert_eq!(json["columns"][1]["kind"], "plain");
    assert_eq!(json["missing"], serde_json::json!(["Education", "Phone"]));
    Ok(())
}
