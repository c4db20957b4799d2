//! End-to-end tests of the public surface.

use pretty_assertions::assert_eq;
use pystr::{Error, PyStr};

#[test]
fn subtract_removes_last_occurrence_only() {
    let s = PyStr::new("ost kake ost kake ost");
    assert_eq!(s.subtract("kake").as_str(), "ost kake ost  ost");
    // The original is untouched.
    assert_eq!(s.as_str(), "ost kake ost kake ost");
    assert_eq!(s.subtract("absent"), s);
}

#[test]
fn multiply_is_codepoint_safe() {
    let s = PyStr::new("┐");
    let five = s.multiply(5);
    assert_eq!(five.as_str(), "┐┐┐┐┐");
    assert_eq!(five.as_str().chars().count(), 5);
    assert_eq!(s.multiply(1), s);
    assert_eq!(s.multiply(0).as_str(), "");
    assert_eq!(s.multiply(-2).as_str(), "");
}

#[test]
fn find_and_index_agree() {
    let s = PyStr::new("aabbcc");
    assert_eq!(s.find("cc"), 4);
    assert_eq!(s.index("cc"), Ok(4));
    assert!(s.ends_with("cc"));
    assert!(!s.starts_with("cc"));

    assert_eq!(s.find("zz"), -1);
    assert!(!s.has("zz"));
    assert_eq!(s.index("zz"), Err(Error::NotFound("zz".to_string())));
}

#[test]
fn rfind_matches_last_occurrence() {
    let s = PyStr::new("ababab");
    assert_eq!(s.rfind("ab"), 4);
    assert_eq!(s.find("ab"), 0);
}

#[test]
fn digit_classification() {
    assert!(PyStr::new("223098473").is_digit());
    assert!(!PyStr::new("x1z").is_digit());
    assert!(!PyStr::new("").is_digit());
    // Non-ASCII digits are outside the table.
    assert!(!PyStr::new("١٢٣").is_digit());
}

#[test]
fn line_splitting_policies() {
    let text = PyStr::new("one\r\ntwo\rthree\n\n   \nfour");
    assert_eq!(
        text.split_lines(),
        vec!["one", "two", "three", "   ", "four"]
    );
    assert_eq!(
        text.split_no_blank_lines(),
        vec!["one", "two", "three", "four"]
    );
}

#[test]
fn split_lines_round_trips_through_join() {
    let text = PyStr::new("alpha\nbeta\r\ngamma\r");
    let lines = text.split_lines();
    let joined = PyStr::new("\n").join(&lines);
    assert_eq!(joined.as_str(), "alpha\nbeta\ngamma");
}

#[test]
fn split_and_join() {
    let s = PyStr::new("a,b,c");
    assert_eq!(s.split(","), vec!["a", "b", "c"]);
    assert_eq!(PyStr::new(", ").join(&["a", "b", "c"]).as_str(), "a, b, c");
}

#[test]
fn replace_is_in_place() {
    let mut s = PyStr::new("one two two");
    s.replace("two", "2");
    assert_eq!(s.as_str(), "one 2 2");
}
