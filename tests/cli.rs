use intstats::output::{BANNER, NO_DATA, PROMPT};
use std::io::{Read, Write};
use std::process::{Command, Output, Stdio};

fn run_binary(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_intstats"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn test_binary_prints_banner_prompt_and_report() {
    let output = run_binary("3 x 5 -2\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!(
            "{}\n\n{}Input data: [3, 5, -2]\n\nMean: 2.00\nMedian: 3.00\nMode: No mode (all values occur equally)\n",
            BANNER, PROMPT
        )
    );
}

#[test]
fn test_binary_no_valid_integers_exits_cleanly() {
    let output = run_binary("nothing here\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{}\n\n{}{}\n", BANNER, PROMPT, NO_DATA)
    );
}

#[test]
fn test_binary_empty_stdin_exits_cleanly() {
    let output = run_binary("");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with(&format!("{}\n", NO_DATA)));
}

#[cfg(unix)]
#[test]
fn test_binary_ctrl_c_while_reading_prints_no_data() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_intstats"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to spawn binary");

    // held open so the binary stays blocked on the read
    let _stdin = child.stdin.take().unwrap();
    let mut stdout = child.stdout.take().unwrap();

    // the handler is installed before the banner, so seeing the prompt means it is live
    let mut seen = Vec::new();
    let mut chunk = [0u8; 256];
    while !String::from_utf8_lossy(&seen).ends_with(PROMPT) {
        let n = stdout.read(&mut chunk).unwrap();
        assert!(n > 0, "binary closed stdout before prompting");
        seen.extend_from_slice(&chunk[..n]);
    }

    let killed = Command::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .unwrap();
    assert!(killed.success());

    stdout.read_to_end(&mut seen).unwrap();
    let status = child.wait().unwrap();

    assert!(status.success());
    assert!(
        String::from_utf8(seen)
            .unwrap()
            .ends_with(&format!("{}{}\n", PROMPT, NO_DATA))
    );
}
