use std::process::Command;

fn run_sim(args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let v = run_sim(&["1", "2"]);
    let winner = v["winner"].as_str().expect("winner should be a side");
    assert!(winner == "player" || winner == "computer");
    let loser = if winner == "player" { "computer" } else { "player" };
    assert_eq!(v[loser]["ships_lost"].as_array().unwrap().len(), 5);
    assert_eq!(v[winner]["hits"], 17);
}

#[test]
fn sim_binary_shuffled_is_reproducible() {
    let a = run_sim(&["5", "--shuffled"]);
    let b = run_sim(&["5", "--shuffled"]);
    assert_eq!(a, b);
}
