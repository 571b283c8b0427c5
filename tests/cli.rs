use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn reefdex(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("reefdex").unwrap();
    cmd.env("REEFDEX_HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn default_command_lists_cards() {
    let home = tempfile::tempdir().unwrap();
    reefdex(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Clownfish"))
        .stdout(predicate::str::contains("Pufferfish"));

    reefdex(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clownfish"))
        .stdout(predicate::str::contains("Pufferfish"));
}

#[test]
fn search_by_icon_token() {
    let home = tempfile::tempdir().unwrap();
    reefdex(&home)
        .args(["search", "[Predator]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Great White Shark"))
        .stdout(predicate::str::contains("Blue Marlin").not());
}

#[test]
fn facet_flags_combine() {
    let home = tempfile::tempdir().unwrap();
    reefdex(&home)
        .args(["search", "--require", "predator", "--forbid-zone", "midnight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Great White Shark"))
        .stdout(predicate::str::contains("Blue Marlin"))
        .stdout(predicate::str::contains("Anglerfish").not());

    reefdex(&home)
        .args(["list", "--exclude-group", "starter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clownfish").not())
        .stdout(predicate::str::contains("Electric Eel"));
}

#[test]
fn no_match_says_so() {
    let home = tempfile::tempdir().unwrap();
    reefdex(&home)
        .args(["search", "kraken"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cards match."));
}

#[test]
fn sanitize_strips_unknown_tokens() {
    let home = tempfile::tempdir().unwrap();
    reefdex(&home)
        .args(["sanitize", "[Predator][BogusName][Wave]"])
        .assert()
        .success()
        .stdout("[Predator][Wave]\n");
}

#[test]
fn parse_prints_the_tree() {
    let home = tempfile::tempdir().unwrap();
    reefdex(&home)
        .args(["parse", "[DrawCard] + [Discard]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Row"))
        .stdout(predicate::str::contains("DrawCard"))
        .stdout(predicate::str::contains("Discard"))
        .stdout(predicate::str::contains("+").not());
}

#[test]
fn icons_lists_the_vocabulary() {
    let home = tempfile::tempdir().unwrap();
    reefdex(&home)
        .arg("icons")
        .assert()
        .success()
        .stdout(predicate::str::contains("FishEgg"))
        .stdout(predicate::str::contains("Wave"));
}

#[test]
fn view_shows_a_card_or_fails() {
    let home = tempfile::tempdir().unwrap();
    reefdex(&home)
        .args(["view", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Great White Shark"))
        .stdout(predicate::str::contains("Carcharodon carcharias"))
        .stdout(predicate::str::contains("traits   ‹Predator›"));

    reefdex(&home)
        .args(["view", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("traits   Electric x2"));

    reefdex(&home)
        .args(["view", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Card not found: 99"));
}

#[test]
fn stats_count_traits() {
    let home = tempfile::tempdir().unwrap();
    reefdex(&home)
        .args(["stats", "--require", "venomous"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Venomous 2"));
}

#[test]
fn config_round_trip() {
    let home = tempfile::tempdir().unwrap();
    reefdex(&home)
        .args(["config", "line_width", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line_width set to 80"));

    reefdex(&home)
        .args(["config", "line_width"])
        .assert()
        .success()
        .stdout(predicate::str::contains("80"));

    reefdex(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("index_fields = name,latin,ability"));
}

#[test]
fn external_cards_path_is_used() {
    let home = tempfile::tempdir().unwrap();
    let cards = home.path().join("cards.json");
    std::fs::write(&cards, r#"[{"id": 1, "group": "main", "name": "Lone Cod"}]"#).unwrap();

    reefdex(&home)
        .args(["config", "cards_path", cards.to_str().unwrap()])
        .assert()
        .success();

    reefdex(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lone Cod"))
        .stdout(predicate::str::contains("Clownfish").not());
}

#[test]
fn browse_applies_each_line() {
    let home = tempfile::tempdir().unwrap();
    reefdex(&home)
        .arg("browse")
        .write_stdin(":tag predator on\n:zone sunlight off\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 cards"))
        .stdout(predicate::str::contains("1 cards"))
        .stdout(predicate::str::contains("Anglerfish"));
}

#[test]
fn browse_reports_bad_commands_and_keeps_going() {
    let home = tempfile::tempdir().unwrap();
    reefdex(&home)
        .arg("browse")
        .write_stdin(":fly\n[Bogus]\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown command: :fly"))
        .stdout(predicate::str::contains("12 cards"));
}
