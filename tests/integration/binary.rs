use std::fs;

use crate::common::{
    make_nginx_tree, make_temp_dir, normalized_lines, read_log_contents, run_with_args,
    run_with_input, write_config,
};

#[test]
fn exit_at_first_question_says_bye() {
    let dir = make_temp_dir("binary");
    let root = make_nginx_tree(&dir, &["a"]);
    write_config(&dir, &root, "true");

    let output = run_with_input(&dir, "exit\n");
    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "Bye!"), "stdout: {lines:?}");
}

#[test]
fn listing_marks_sites_before_prompting() {
    let dir = make_temp_dir("binary");
    let root = make_nginx_tree(&dir, &["alpha", "beta"]);
    write_config(&dir, &root, "true");

    let output = run_with_input(&dir, "");
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "\u{2714} is enabled"), "{lines:?}");
    assert!(lines.iter().any(|l| l.starts_with("alpha") && l.ends_with('\u{2718}')));
    assert!(lines.iter().any(|l| l.starts_with("beta")));
}

#[test]
fn arguments_are_rejected() {
    let dir = make_temp_dir("binary");
    let output = run_with_args(&dir, &["--help"], "");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: sitectl"), "stderr: {stderr}");
}

#[test]
fn missing_site_folders_fail_before_prompting() {
    let dir = make_temp_dir("binary");
    let root = dir.join("empty-nginx");
    fs::create_dir_all(&root).unwrap();
    write_config(&dir, &root, "true");

    let output = run_with_input(&dir, "exit\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Inventory error"), "stderr: {stderr}");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("What would you like to do?"));
}

#[test]
fn malformed_config_fails() {
    let dir = make_temp_dir("binary");
    fs::write(dir.join("config.json"), "{ nope").unwrap();
    let output = run_with_input(&dir, "exit\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid JSON"));
}

#[cfg(unix)]
#[test]
fn failing_configtest_exits_with_status_one() {
    let dir = make_temp_dir("binary");
    let root = make_nginx_tree(&dir, &[]);
    write_config(&dir, &root, "false");

    let output = run_with_input(&dir, "manage\nconfigtest\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to configtest nginx"), "stderr: {stderr}");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Bye!"));
}

#[cfg(unix)]
#[test]
fn toggle_updates_sites_enabled_and_logs_it() {
    let dir = make_temp_dir("binary");
    let root = make_nginx_tree(&dir, &["a", "b"]);
    write_config(&dir, &root, "true");

    let output = run_with_input(&dir, "toggle\nb\n");
    assert!(output.status.success(), "{:?}", output);
    assert!(root.join("sites-enabled").join("b").exists());
    assert!(!root.join("sites-enabled").join("a").exists());

    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "Sites enabled:"), "{lines:?}");

    let log = read_log_contents(&dir).expect("session log written");
    assert!(log.contains("Enabled site 'b'"), "log: {log}");
    assert!(log.contains("Reloaded nginx"), "log: {log}");
}

#[test]
fn static_template_writes_into_sites_available() {
    let dir = make_temp_dir("binary");
    let root = make_nginx_tree(&dir, &[]);
    write_config(&dir, &root, "true");

    let output = run_with_input(&dir, "add\n2\n8081\nexample.com\n/srv/example\n");
    assert!(output.status.success(), "{:?}", output);
    let text = fs::read_to_string(root.join("sites-available").join("example.com")).unwrap();
    assert!(text.contains("listen 8081;"));
}
