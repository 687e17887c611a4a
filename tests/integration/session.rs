use std::io::BufReader;

use sitectl::core::session::Session;
use sitectl::errors::Error;

use crate::common::{FakeSites, quiet_logger};

fn run(sites: &mut FakeSites, input: &[u8]) -> sitectl::dispatch::Outcome {
    let logger = quiet_logger();
    Session::new(sites, &logger).run(BufReader::new(input))
}

#[test]
fn toggle_session_enables_then_disables_then_reloads() {
    let mut sites = FakeSites::new(&["a", "b", "c"], &["a", "b"]);
    let outcome = run(&mut sites, b"1\nb,c\n");

    assert!(!outcome.is_error());
    assert_eq!(sites.calls, vec!["enable c", "disable a", "manage reload"]);
    assert_eq!(sites.enabled, vec!["b", "c"]);
}

#[test]
fn toggle_with_blank_answer_keeps_current_state() {
    let mut sites = FakeSites::new(&["a", "b"], &["a"]);
    let outcome = run(&mut sites, b"toggle\n\n");
    assert_eq!(sites.calls, vec!["manage reload"]);
    assert_eq!(outcome.exit_code(), 0);
}

#[test]
fn toggle_stops_at_first_failure() {
    let mut sites = FakeSites::new(&["a", "b", "c"], &["a"]).failing_on("enable c");
    let outcome = run(&mut sites, b"toggle\nb c\n");

    assert_eq!(sites.calls, vec!["enable b"]);
    assert_eq!(outcome.exit_code(), 1);
    match outcome.error {
        Some(Error::Sequence { completed, .. }) => {
            assert_eq!(completed.enabled, vec!["b"]);
            assert!(!completed.reloaded);
        }
        other => panic!("expected a sequence error, got {other:?}"),
    }
}

#[test]
fn static_add_session_uses_default_port() {
    let mut sites = FakeSites::new(&[], &[]);
    let outcome = run(&mut sites, b"add\nstatic-template\n\nexample.com\n/var/www/example\n");
    assert_eq!(sites.calls, vec!["add_static 80 example.com /var/www/example"]);
    assert_eq!(outcome.message.as_deref(), Some("created example.com"));
}

#[test]
fn proxy_add_session_maps_localhost_to_loopback() {
    let mut sites = FakeSites::new(&[], &[]);
    run(&mut sites, b"add\n3\n8000\napi\nlocalhost\n\n");
    assert_eq!(sites.calls, vec!["add_proxy 8000 api 127.0.0.1 8080"]);
}

#[test]
fn from_file_session_passes_path_through() {
    let mut sites = FakeSites::new(&[], &[]);
    run(&mut sites, b"add\n1\n/tmp/blog.conf\n");
    assert_eq!(sites.calls, vec!["add_file /tmp/blog.conf"]);
}

#[test]
fn declined_remove_touches_nothing() {
    let mut sites = FakeSites::new(&["old-site"], &[]);
    let outcome = run(&mut sites, b"remove\n1\n\n");
    assert!(sites.calls.is_empty());
    assert!(!outcome.is_error());
    assert_eq!(outcome.message.as_deref(), Some("old-site was not removed"));
}

#[test]
fn confirmed_remove_calls_collaborator_once() {
    let mut sites = FakeSites::new(&["old-site", "keep"], &[]);
    let outcome = run(&mut sites, b"remove\nold-site\ny\n");
    assert_eq!(sites.calls, vec!["remove old-site"]);
    assert_eq!(sites.available, vec!["keep"]);
    assert_eq!(outcome.message.as_deref(), Some("old-site removed"));
}

#[test]
fn failed_configtest_is_an_error() {
    let mut sites = FakeSites::new(&[], &[]).failing_on("manage configtest");
    let outcome = run(&mut sites, b"manage\nconfigtest\n");
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(outcome.message.as_deref(), Some("failed to configtest nginx"));
}

#[test]
fn exit_choice_makes_no_calls() {
    let mut sites = FakeSites::new(&["a"], &["a"]);
    let outcome = run(&mut sites, b"exit\n");
    assert!(sites.calls.is_empty());
    assert_eq!(outcome.exit_code(), 0);
}

#[test]
fn invalid_answers_are_asked_again() {
    let mut sites = FakeSites::new(&[], &[]);
    run(&mut sites, b"9\nmanage\nexplode\nrestart\n");
    assert_eq!(sites.calls, vec!["manage restart"]);
}

#[test]
fn toggle_by_numeric_site_name_changes_only_that_site() {
    let mut sites = FakeSites::new(&["2", "none", "x"], &["x"]);
    let outcome = run(&mut sites, b"toggle\n2 x\n");
    assert!(!outcome.is_error());
    assert_eq!(sites.calls, vec!["enable 2", "manage reload"]);
    assert_eq!(sites.enabled, vec!["x", "2"]);
}

#[test]
fn toggle_site_named_none_keeps_others_enabled() {
    let mut sites = FakeSites::new(&["2", "none", "x"], &["2", "x"]);
    run(&mut sites, b"toggle\nnone,2,x\n");
    assert_eq!(sites.calls, vec!["enable none", "manage reload"]);
}

#[test]
fn added_site_shows_up_in_the_next_listing() {
    let mut sites = FakeSites::new(&[], &[]);
    run(&mut sites, b"add\n2\n\nexample.com\n/var/www/example\n");
    assert_eq!(sites.available, vec!["example.com"]);
}
