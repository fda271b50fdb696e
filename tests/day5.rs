use assert_cmd::Command;

#[test]
fn diagnostic_code_follows_system_id() {
    for (id, code) in [(7, 999), (8, 1000), (9, 1001)] {
        let mut cmd = Command::cargo_bin("day5").unwrap();
        cmd.args(["tests/data/compare8.txt", "--system-id", &id.to_string()]);

        cmd.assert().success().stdout(predicates::str::contains(format!(
            "The diagnostic code for system {} is {}.",
            id, code
        )));
    }
}

#[test]
fn fails_when_program_waits_for_more_input() {
    let mut cmd = Command::cargo_bin("day5").unwrap();
    cmd.args(["tests/data/amp_chain.txt", "-s", "1"]);

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("AwaitingInput"));
}
