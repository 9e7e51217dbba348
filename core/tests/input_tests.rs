/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input helper functions

use hydra_core::input::title_case;

#[test]
fn test_title_case() {
    assert_eq!(title_case("nixpkgs"), "Nixpkgs");
    assert_eq!(title_case("my-project"), "My-Project");
    assert_eq!(title_case("hello world"), "Hello World");
    assert_eq!(title_case("ALREADY"), "Already");
    assert_eq!(title_case("x2y"), "X2Y");
    assert_eq!(title_case(""), "");
}
