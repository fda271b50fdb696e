use assert_cmd::Command;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day7_part1").unwrap();
    cmd.arg("tests/data/amp_chain.txt");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("43210"));
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day7_part2").unwrap();
    cmd.arg("tests/data/amp_loop.txt");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("139629729"));
}
