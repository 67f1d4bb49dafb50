//! Navigation tests for pathsurfer against real directories.
//!
//! These tests build temporary directory trees and drive the navigation state through
//! [FsLister]. The temporary resources are cleaned up after the tests complete.

use pathsurfer::app::{Action, Mode, NavState, Transition};
use pathsurfer::core::{FsLister, ListErrorKind};

use std::error;
use std::fs::{self, File};
use std::path::Path;
use tempfile::{TempDir, tempdir};

fn names(nav: &NavState) -> Vec<&str> {
    nav.entries().iter().map(|e| e.name()).collect()
}

/// project/
///   .git/
///   Cargo.toml
///   docs/guide.md
///   src/main.rs
///   src/util_mod/
///   target/
fn project() -> Result<TempDir, Box<dyn error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();
    for sub in [".git", "docs", "src/util_mod", "target"] {
        fs::create_dir_all(root.join(sub))?;
    }
    for file in ["Cargo.toml", "docs/guide.md", "src/main.rs"] {
        File::create(root.join(file))?;
    }
    Ok(dir)
}

fn open(path: &Path) -> Result<NavState, Box<dyn error::Error>> {
    Ok(NavState::open(path.canonicalize()?, false, &FsLister))
}

#[test]
fn listing_is_sorted_and_hides_dotfiles() -> Result<(), Box<dyn error::Error>> {
    let dir = project()?;
    let nav = open(dir.path())?;

    assert_eq!(names(&nav), vec!["Cargo.toml", "docs", "src", "target"]);
    assert_eq!(nav.selected_idx(), 0);
    assert!(nav.last_error().is_none());
    Ok(())
}

#[test]
fn walk_down_and_back_up() -> Result<(), Box<dyn error::Error>> {
    let dir = project()?;
    let mut nav = open(dir.path())?;
    let lister = FsLister;

    nav.apply(Action::MoveDown, &lister);
    nav.apply(Action::MoveDown, &lister);
    nav.apply(Action::EnterChild, &lister);
    assert!(nav.current_dir().ends_with("src"));
    assert_eq!(names(&nav), vec!["main.rs", "util_mod"]);

    nav.apply(Action::MoveDown, &lister);
    nav.apply(Action::GoToParent, &lister);
    assert_eq!(nav.selected_entry().map(|e| e.name()), Some("src"));

    // The position inside src was remembered.
    nav.apply(Action::EnterChild, &lister);
    assert_eq!(nav.selected_entry().map(|e| e.name()), Some("util_mod"));
    Ok(())
}

#[test]
fn files_cannot_be_entered() -> Result<(), Box<dyn error::Error>> {
    let dir = project()?;
    let mut nav = open(dir.path())?;
    let before = nav.current_dir().to_path_buf();

    nav.apply(Action::EnterChild, &FsLister);
    assert_eq!(nav.current_dir(), before);
    Ok(())
}

#[test]
fn toggle_hidden_reveals_dotfiles() -> Result<(), Box<dyn error::Error>> {
    let dir = project()?;
    let mut nav = open(dir.path())?;

    nav.apply(Action::ToggleHidden, &FsLister);
    assert_eq!(names(&nav), vec![".git", "Cargo.toml", "docs", "src", "target"]);
    Ok(())
}

#[test]
fn search_filters_confirms_and_descends() -> Result<(), Box<dyn error::Error>> {
    let dir = project()?;
    let mut nav = open(dir.path())?;
    let lister = FsLister;

    nav.apply(Action::EnterSearch, &lister);
    for c in "sr".chars() {
        nav.apply(Action::TypeChar(c), &lister);
    }
    assert_eq!(names(&nav), vec!["src"]);
    assert_eq!(nav.match_at(0).map(|m| m.positions()), Some(&[0, 1][..]));

    nav.apply(Action::DescendMatch, &lister);
    assert!(nav.current_dir().ends_with("src"));
    assert_eq!(nav.mode(), Mode::Search);
    assert_eq!(nav.query(), "");

    for c in "um".chars() {
        nav.apply(Action::TypeChar(c), &lister);
    }
    assert_eq!(names(&nav), vec!["util_mod"]);

    nav.apply(Action::ConfirmSearch, &lister);
    assert_eq!(nav.mode(), Mode::Default);
    assert_eq!(names(&nav), vec!["util_mod"]);
    Ok(())
}

#[test]
fn quit_reports_the_current_directory() -> Result<(), Box<dyn error::Error>> {
    let dir = project()?;
    let mut nav = open(dir.path())?;

    nav.apply(Action::MoveDown, &FsLister);
    nav.apply(Action::EnterChild, &FsLister);

    assert_eq!(
        nav.apply(Action::Quit, &FsLister),
        Transition::Quit(dir.path().canonicalize()?.join("docs"))
    );
    Ok(())
}

#[test]
fn vanished_directory_degrades_to_empty() -> Result<(), Box<dyn error::Error>> {
    let dir = project()?;
    let mut nav = open(dir.path())?;

    fs::remove_dir(dir.path().join("target"))?;
    nav.apply(Action::MoveUp, &FsLister);
    assert_eq!(nav.selected_entry().map(|e| e.name()), Some("target"));

    nav.apply(Action::EnterChild, &FsLister);
    assert!(nav.entries().is_empty());
    assert_eq!(
        nav.last_error().map(|e| e.kind()),
        Some(ListErrorKind::NotFound)
    );

    nav.apply(Action::GoToParent, &FsLister);
    assert!(nav.last_error().is_none());
    assert_eq!(names(&nav), vec!["Cargo.toml", "docs", "src"]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn unreadable_directory_reports_permission_denied() -> Result<(), Box<dyn error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let dir = project()?;
    let locked = dir.path().join("target");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    // Privileged users can read it anyway.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        return Ok(());
    }

    let mut nav = open(dir.path())?;
    nav.apply(Action::MoveUp, &FsLister);
    nav.apply(Action::EnterChild, &FsLister);

    assert!(nav.entries().is_empty());
    assert_eq!(
        nav.last_error().map(|e| e.kind()),
        Some(ListErrorKind::PermissionDenied)
    );

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
    Ok(())
}
