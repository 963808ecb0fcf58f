use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "--width", "8", "--height", "8"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["winner"].is_string());
    assert!(v["turns"].as_u64().unwrap() > 0);
}

#[test]
fn sim_binary_rejects_oversized_board() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "--width", "30"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
