use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("hanami-flower").unwrap()
}

#[test]
fn rose_gets_the_lovely_name_line() {
    cmd()
        .write_stdin("Rose\n")
        .assert()
        .success()
        .code(0)
        .stdout(contains("Hello from Hanami Rose!"))
        .stdout(contains("You have a lovely name!"));
}

#[test]
fn lily_gets_the_flower_name_line() {
    cmd()
        .write_stdin("Lily\n")
        .assert()
        .success()
        .code(0)
        .stdout(contains("Another beautiful flower name!"));
}

#[test]
fn other_names_are_interpolated() {
    cmd()
        .write_stdin("Zed\n")
        .assert()
        .success()
        .code(0)
        .stdout(contains("Nice to meet you, Zed !"));
}

#[test]
fn greeting_appears_before_the_branch_line() {
    let out = cmd()
        .write_stdin("Rose\n")
        .output()
        .expect("run hanami-flower");
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).expect("utf8 output");
    let hello = stdout.find("Hello from Hanami Rose!").expect("greeting");
    let branch = stdout.find("You have a lovely name!").expect("branch line");
    assert!(hello < branch);
}
