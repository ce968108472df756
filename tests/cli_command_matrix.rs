use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn run_help(home: &TempDir, args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("tidyname");
    cmd.env("HOME", home.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let home = TempDir::new().expect("temp home");

    // top-level
    run_help(&home, &[]);

    // scan commands
    run_help(&home, &["list"]);
    run_help(&home, &["rename"]);

    // history maintenance
    run_help(&home, &["history"]);
    run_help(&home, &["history", "skip"]);
    run_help(&home, &["history", "rename"]);
    run_help(&home, &["history", "clear"]);
    run_help(&home, &["history", "show"]);
}
