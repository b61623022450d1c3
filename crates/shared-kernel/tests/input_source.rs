// crates/shared-kernel/tests/input_source.rs
use std::ffi::OsStr;
use std::path::PathBuf;

use rwc_shared_kernel::{InputSource, STDIN_PLACEHOLDER};

#[test]
fn placeholder_resolves_to_stdin() {
    let input = InputSource::from_arg(OsStr::new(STDIN_PLACEHOLDER));
    assert_eq!(input, InputSource::Stdin);
    assert_eq!(input.to_string(), "");
}

#[test]
fn filename_resolves_to_file() {
    let input = InputSource::from_arg(OsStr::new("notes.txt"));
    assert_eq!(input, InputSource::File(PathBuf::from("notes.txt")));
    assert_eq!(input.to_string(), "notes.txt");
}

#[test]
fn only_a_lone_dash_is_the_placeholder() {
    assert_ne!(InputSource::from_arg(OsStr::new("--")), InputSource::Stdin);
    assert_ne!(InputSource::from_arg(OsStr::new("./-")), InputSource::Stdin);
    assert_eq!(InputSource::default(), InputSource::Stdin);
}

#[cfg(unix)]
#[test]
fn non_utf8_name_is_kept_verbatim() {
    use std::os::unix::ffi::OsStrExt;

    let raw = OsStr::from_bytes(b"caf\xe9.txt");
    let input = InputSource::from_arg(raw);
    assert_eq!(input, InputSource::File(PathBuf::from(raw)));
    assert_eq!(input.to_string(), "caf\u{fffd}.txt");
}
