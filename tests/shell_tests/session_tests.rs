//! Shell Tests
//!
//! Tests for command parsing and session execution.

use columnkv::shell::{Command, Response, Session};
use columnkv::{ColumnKvError, Database};

fn session() -> Session {
    Session::new(Database::in_memory())
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_parse_put() {
    let cmd = Command::parse("put 3 job-1 active").unwrap().unwrap();
    assert_eq!(
        cmd,
        Command::Put {
            cf: 3,
            key: b"job-1".to_vec(),
            value: b"active".to_vec(),
        }
    );
}

#[test]
fn test_parse_is_case_insensitive_and_trims() {
    let cmd = Command::parse("   GET 1 key  ").unwrap().unwrap();
    assert_eq!(
        cmd,
        Command::Get {
            cf: 1,
            key: b"key".to_vec(),
        }
    );
}

#[test]
fn test_parse_scan_with_and_without_prefix() {
    assert_eq!(
        Command::parse("scan 2").unwrap(),
        Some(Command::Scan {
            cf: 2,
            prefix: Vec::new(),
        })
    );
    assert_eq!(
        Command::parse("scan 2 job").unwrap(),
        Some(Command::Scan {
            cf: 2,
            prefix: b"job".to_vec(),
        })
    );
}

#[test]
fn test_parse_blank_and_comment() {
    assert_eq!(Command::parse("").unwrap(), None);
    assert_eq!(Command::parse("   ").unwrap(), None);
    assert_eq!(Command::parse("# setup").unwrap(), None);
}

#[test]
fn test_parse_unknown_command() {
    let err = Command::parse("flush 1").unwrap_err();
    assert!(matches!(err, ColumnKvError::Command(ref msg) if msg.contains("unknown")));
}

#[test]
fn test_parse_wrong_arity() {
    let err = Command::parse("put 1 key").unwrap_err();
    assert!(matches!(err, ColumnKvError::Command(ref msg) if msg.contains("arguments")));
}

#[test]
fn test_parse_bad_ordinal() {
    let err = Command::parse("get jobs key").unwrap_err();
    assert!(matches!(err, ColumnKvError::Command(_)));
}

// =============================================================================
// Response Rendering Tests
// =============================================================================

#[test]
fn test_response_display() {
    assert_eq!(Response::Ok.to_string(), "OK");
    assert_eq!(Response::NotFound.to_string(), "NOT_FOUND");
    assert_eq!(Response::Value(b"v".to_vec()).to_string(), "VALUE v");
    assert_eq!(Response::Bool(true).to_string(), "TRUE");
    assert_eq!(Response::Count(4).to_string(), "COUNT 4");
    assert_eq!(Response::Pong.to_string(), "PONG");
    assert_eq!(
        Response::Entries(vec![(b"a".to_vec(), b"1".to_vec())]).to_string(),
        "ENTRY a 1\nEND"
    );
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_session_put_get_delete() {
    let mut session = session();

    assert_eq!(session.execute_line("put 1 k v"), Some(Response::Ok));
    assert_eq!(session.execute_line("get 1 k"), Some(Response::Value(b"v".to_vec())));
    assert_eq!(session.execute_line("get 2 k"), Some(Response::NotFound));
    assert_eq!(session.execute_line("del 1 k"), Some(Response::Ok));
    assert_eq!(session.execute_line("del 1 k"), Some(Response::NotFound));
    assert_eq!(session.execute_line("exists 1 k"), Some(Response::Bool(false)));
}

#[test]
fn test_session_scan_and_count() {
    let mut session = session();
    for line in ["put 1 job-2 b", "put 1 job-1 a", "put 1 timer-1 t", "put 2 job-3 x"] {
        session.execute_line(line);
    }

    assert_eq!(
        session.execute_line("scan 1 job"),
        Some(Response::Entries(vec![
            (b"job-1".to_vec(), b"a".to_vec()),
            (b"job-2".to_vec(), b"b".to_vec()),
        ]))
    );
    assert_eq!(session.execute_line("count 1"), Some(Response::Count(3)));
    assert_eq!(session.execute_line("empty 3"), Some(Response::Bool(true)));
}

#[test]
fn test_session_clear() {
    let mut session = session();
    session.execute_line("put 1 a 1");
    session.execute_line("put 2 b 2");

    assert_eq!(session.execute_line("clear"), Some(Response::Ok));
    assert_eq!(session.database().entry_count(), 0);
    assert_eq!(session.execute_line("empty 1"), Some(Response::Bool(true)));
}

#[test]
fn test_run_script() {
    let mut session = session();
    let script = "\
# seed
put 7 a 1
put 7 b 2

get 7 a
bogus
scan 7
ping
";
    let mut output = Vec::new();
    let executed = session.run_script(script.as_bytes(), &mut output).unwrap();

    assert_eq!(executed, 6);
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "OK");
    assert_eq!(lines[1], "OK");
    assert_eq!(lines[2], "VALUE 1");
    assert!(lines[3].starts_with("ERROR"));
    assert_eq!(&lines[4..], &["ENTRY a 1", "ENTRY b 2", "END", "PONG"]);
}
