use std::process::Command;

use assert_cmd::prelude::*;

#[test]
fn run_one_move() {
    let output = r"Initial board:
 1  2  3  4
 5  6  7  8
 9 10 11 12
13 14  0 15

Solving...
Bound: 1
Iterations: 1
Bounds: 1
Nodes visited total: 4
Nodes expanded total: 1

Depth          Visited        Expanded
0:             1              1
1:             3              0

Found solution with cost 1:
 1  2  3  4
 5  6  7  8
 9 10 11 12
13 14  0 15

 1  2  3  4
 5  6  7  8
 9 10 11 12
13 14 15  0

Moves: r
";

    Command::cargo_bin("sliding-puzzle-solver")
        .unwrap()
        .arg("puzzles/4x4-one-move.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_one_move_quiet() {
    let output = r"Initial board:
 1  2  3  4
 5  6  7  8
 9 10 11 12
13 14  0 15

Solving...
Iterations: 1
Bounds: 1
Nodes visited total: 4
Nodes expanded total: 1

Depth          Visited        Expanded
0:             1              1
1:             3              0

Found solution with cost 1:
 1  2  3  4
 5  6  7  8
 9 10 11 12
13 14  0 15

 1  2  3  4
 5  6  7  8
 9 10 11 12
13 14 15  0

Moves: r
";

    Command::cargo_bin("sliding-puzzle-solver")
        .unwrap()
        .arg("--quiet")
        .arg("puzzles/4x4-one-move.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_scrambled() {
    let output = Command::cargo_bin("sliding-puzzle-solver")
        .unwrap()
        .args(&["--dimension", "3", "--scramble", "20", "--seed", "42", "--quiet"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Initial board:\n"));
    assert!(stdout.contains("Found solution with cost "));
    // the goal is the last board
    assert!(stdout.contains("7 8 0\n\nMoves: "));

    // same seed, same output
    let again = Command::cargo_bin("sliding-puzzle-solver")
        .unwrap()
        .args(&["--dimension", "3", "--scramble", "20", "--seed", "42", "--quiet"])
        .output()
        .unwrap();
    assert_eq!(String::from_utf8(again.stdout).unwrap(), stdout);
}

#[test]
fn run_unsolvable() {
    Command::cargo_bin("sliding-puzzle-solver")
        .unwrap()
        .arg("puzzles/4x4-unsolvable.txt")
        .assert()
        .failure()
        .stderr("Failed to solve: Unsolvable - the goal can't be reached from this configuration\n");
}

#[test]
fn run_missing_file() {
    Command::cargo_bin("sliding-puzzle-solver")
        .unwrap()
        .arg("puzzles/does-not-exist.txt")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_bad_args() {
    // doesn't check stderr - that's clap's business
    // hopefully should be enough to test that it fails and doesn't print to stdout

    Command::cargo_bin("sliding-puzzle-solver")
        .unwrap()
        .arg("--seed")
        .arg("1")
        .arg("puzzles/4x4-one-move.txt")
        .assert()
        .failure()
        .stdout("");

    Command::cargo_bin("sliding-puzzle-solver")
        .unwrap()
        .arg("--dimension")
        .arg("16")
        .assert()
        .failure()
        .stdout("");

    Command::cargo_bin("sliding-puzzle-solver")
        .unwrap()
        .arg("--scramble")
        .arg("many")
        .assert()
        .failure()
        .stdout("");
}
