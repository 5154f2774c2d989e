use handscope_cli::run;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn flush_beats_straight() {
    let (code, out, _) = run_cli(&[
        "handscope", "compare", "--a", "2s 4s 6s 8s Ks", "--b", "3h 4d 5c 6s 7h", "--format",
        "text",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Result: A wins"), "stdout: {out}");
}

#[test]
fn category_beats_any_kicker() {
    let (code, out, _) = run_cli(&[
        "handscope", "compare", "--a", "As Kh Qd Jc 9s", "--b", "2s 2h 3d 4c 6s", "--format",
        "json",
    ]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["winner"], "b");
    assert_eq!(v["a"]["category"], "HighCard");
    assert_eq!(v["b"]["category"], "OnePair");
}

#[test]
fn seven_card_sets_compare() {
    let (code, out, _) = run_cli(&[
        "handscope", "compare", "--a", "As Ks 2s 5s 9s 4h 7d", "--b", "Qh Qd 2s 5s 9s 4h 7d",
        "--format", "json",
    ]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["a"]["name"], "Flush");
    assert_eq!(v["b"]["name"], "One Pair");
    assert_eq!(v["winner"], "a");
}

#[test]
fn missing_argument_is_usage_error() {
    let (code, _, err) = run_cli(&["handscope", "compare", "--a", "As Ks Qs Js Ts"]);
    assert_eq!(code, 2);
    assert!(err.contains("Usage: handscope"), "stderr: {err}");
}

#[test]
fn invalid_side_reports_error() {
    let (code, _, err) = run_cli(&[
        "handscope", "compare", "--a", "As Ks Qs Js Ts", "--b", "2h 3h",
    ]);
    assert_eq!(code, 2);
    assert!(err.contains("Invalid hand size: 2 cards"), "stderr: {err}");
}
