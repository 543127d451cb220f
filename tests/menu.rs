use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn menu_displays_first_and_last() {
    Command::cargo_bin("contact-book")
        .unwrap()
        .write_stdin("first\nlast\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Maxwell Wright / (0191) 719 6495 / Curabitur.egestas.nunc@nonummyac.co.uk",
        ))
        .stdout(predicate::str::contains(
            "Helen Richards / 0800 1111 / libero@convallis.edu",
        ))
        .stdout(predicate::str::contains("Bye!"));
}

#[test]
fn menu_adds_then_lists_new_contact() {
    Command::cargo_bin("contact-book")
        .unwrap()
        .write_stdin("new\nUche\n01234567890\nucheuche@gmail.com\nall\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully"))
        .stdout(predicate::str::contains(
            "Uche / 01234567890 / ucheuche@gmail.com",
        ));
}

#[test]
fn menu_add_with_blank_field_reports_and_continues() {
    Command::cargo_bin("contact-book")
        .unwrap()
        .write_stdin("new\nUche\n\nucheuche@gmail.com\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Missing contact phone"))
        .stdout(predicate::str::contains("Bye!"));
}

#[test]
fn menu_sorts_by_name() {
    let output = Command::cargo_bin("contact-book")
        .unwrap()
        .write_stdin("sort\nname\nasc\nquit\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8_lossy(&output);

    let helen = stdout.find("Helen Richards /").unwrap();
    let maxwell = stdout.find("Maxwell Wright /").unwrap();
    let raja = stdout.find("Raja Villarreal /").unwrap();

    assert!(helen < maxwell && maxwell < raja);
}

#[test]
fn menu_rejects_unknown_sort_field() {
    Command::cargo_bin("contact-book")
        .unwrap()
        .write_stdin("sort\naddress\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unrecognized sort field: 'address'"))
        .stdout(predicate::str::contains("Bye!"));
}

#[test]
fn menu_rejects_unknown_command() {
    Command::cargo_bin("contact-book")
        .unwrap()
        .write_stdin("frist\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unrecognized command: 'frist'"));
}

#[test]
fn menu_empty_store_reports_on_first() {
    Command::cargo_bin("contact-book")
        .unwrap()
        .args(["--no-seed"])
        .write_stdin("first\nall\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Cannot take first of an empty contact list",
        ))
        .stdout(predicate::str::contains("No contact in contact list!"));
}

#[test]
fn menu_exits_on_end_of_input() {
    // no trailing quit; the loop must still terminate
    Command::cargo_bin("contact-book")
        .unwrap()
        .write_stdin("first\n")
        .assert()
        .success();
}
