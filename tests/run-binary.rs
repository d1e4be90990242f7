use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn run_solved() {
    let output = r"Solving boards/00-solved.txt using a-star-blocking...
States created total: 1
Unique visited total: 1
Reached duplicates total: 0
Created but not reached total: 0

Depth          Created        Unique         Duplicates     Unknown (not reached)
0:             1              1              0              0

Found solution:
......
......
....XX
......
......
......

Cost: 0
";

    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("boards/00-solved.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_one_blocker_a_star() {
    let output = r"Solving boards/01-one-blocker.txt using a-star-blocking...
States created total: 31
Unique visited total: 5
Reached duplicates total: 0
Created but not reached total: 26

Depth          Created        Unique         Duplicates     Unknown (not reached)
0:             1              1              0              0
1:             6              3              0              3
2:             24             1              0              23

Found solution:
......
......
XX..A.
....A.
......
......

....A.
....A.
XX....
......
......
......

....A.
....A.
....XX
......
......
......

Cost: 2
";

    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("--a-star")
        .arg("--heuristic")
        .arg("blocking")
        .arg("boards/01-one-blocker.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_no_moves_dfs() {
    let output = r"Solving boards/05-no-moves.txt using dfs...
States created total: 1
Unique visited total: 1
Reached duplicates total: 0
Created but not reached total: 0

Depth          Created        Unique         Duplicates     Unknown (not reached)
0:             1              1              0              0

No solution
";

    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("--dfs")
        .arg("boards/05-no-moves.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_expansion_limit() {
    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("--max-expansions")
        .arg("10")
        .arg("--heuristic")
        .arg("zero")
        .arg("boards/03-expert.txt")
        .assert()
        .failure()
        .stdout(
            "Solving boards/03-expert.txt using a-star-zero...\n\
             Failed to solve: Gave up after expanding 10 states\n",
        );
}

#[test]
fn run_missing_file() {
    Command::main_binary()
        .unwrap()
        .arg("boards/does-not-exist.txt")
        .assert()
        .failure();
}

#[test]
fn run_bad_method_args() {
    // doesn't check stderr - clap's message isn't stable between versions
    // hopefully should be enough to test that it fails and doesn't print to stdout

    Command::main_binary()
        .unwrap()
        .arg("--dfs")
        .arg("--a-star")
        .arg("boards/01-one-blocker.txt")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_bad_heuristic() {
    Command::main_binary()
        .unwrap()
        .arg("--heuristic")
        .arg("manhattan")
        .arg("boards/01-one-blocker.txt")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_heuristic_with_dfs() {
    Command::main_binary()
        .unwrap()
        .arg("--dfs")
        .arg("--heuristic")
        .arg("zero")
        .arg("boards/01-one-blocker.txt")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_bad_max_expansions() {
    Command::main_binary()
        .unwrap()
        .arg("--max-expansions")
        .arg("lots")
        .arg("boards/01-one-blocker.txt")
        .assert()
        .failure()
        .stdout("");
}
