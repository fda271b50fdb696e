use assert_cmd::Command;

#[test]
fn outputs_large_number() {
    let mut cmd = Command::cargo_bin("day9").unwrap();
    cmd.arg("tests/data/boost.txt");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Halted"))
        .stdout(predicates::str::contains("[1219070632396864]"));
}
