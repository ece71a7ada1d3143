use predicates::prelude::*;

#[test]
fn catalog_prints_table() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("casemix");
    cmd.arg("catalog");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Procedure | Time (minutes)"))
        .stdout(predicate::str::contains("Lap Cholecystectomy | 96 | 1.60 | 0.25 | 0.50"));
}

#[test]
fn catalog_prints_json() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("casemix");
    cmd.args(["catalog", "-f", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let catalog: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(catalog.as_array().unwrap().len(), 5);
    assert_eq!(catalog[4]["name"], "Revision Surgery/Complex");
    assert_eq!(catalog[4]["base_time_minutes"], 210);
}
