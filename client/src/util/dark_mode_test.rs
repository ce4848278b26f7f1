#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn theme_name_maps_flag() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}

#[test]
fn themed_class_adds_dark_modifier() {
    assert_eq!(themed_class("login-page", true), "login-page login-page--dark");
    assert_eq!(themed_class("login-page", false), "login-page");
}
