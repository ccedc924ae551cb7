// font-diff/tests/select_face.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Face matching tests, following CSS Fonts Level 3 § 5.2.

use font_diff::config::{Style, Weight};
use font_diff::error::SelectionError;
use font_diff::matching::{find_best_match, FaceProperties};

fn face(style: Style, weight: Weight) -> FaceProperties {
    FaceProperties { style, weight }
}

fn normal(weight: u16) -> FaceProperties {
    face(Style::Normal, Weight(weight))
}

#[test]
pub fn select_exact_weight() {
    let candidates = [normal(300), normal(400), normal(700)];
    let query = normal(400);
    assert_eq!(find_best_match(&candidates, &query), Ok(1));
}

#[test]
pub fn select_500_for_a_regular_query_without_an_exact_match() {
    let candidates = [normal(300), normal(500)];
    let query = normal(400);
    assert_eq!(find_best_match(&candidates, &query), Ok(1));
}

#[test]
pub fn select_400_for_a_medium_query_without_an_exact_match() {
    let candidates = [normal(400), normal(600)];
    let query = normal(460);
    assert_eq!(find_best_match(&candidates, &query), Ok(0));
}

#[test]
pub fn light_queries_prefer_thinner_faces() {
    let candidates = [normal(200), normal(500)];
    let query = normal(300);
    assert_eq!(find_best_match(&candidates, &query), Ok(0));
}

#[test]
pub fn light_queries_fall_back_to_fatter_faces() {
    let candidates = [normal(350), normal(500)];
    let query = normal(300);
    assert_eq!(find_best_match(&candidates, &query), Ok(0));
}

#[test]
pub fn bold_queries_prefer_fatter_faces() {
    let candidates = [normal(600), normal(800)];
    let query = normal(700);
    assert_eq!(find_best_match(&candidates, &query), Ok(1));
}

#[test]
pub fn bold_queries_fall_back_to_thinner_faces() {
    let candidates = [normal(400), normal(500)];
    let query = normal(700);
    assert_eq!(find_best_match(&candidates, &query), Ok(1));
}

#[test]
pub fn style_selection_runs_before_weight_selection() {
    let candidates = [face(Style::Normal, Weight(400)), face(Style::Italic, Weight(700))];
    let query = face(Style::Italic, Weight(400));
    assert_eq!(find_best_match(&candidates, &query), Ok(1));
}

#[test]
pub fn a_normal_query_accepts_an_italic_only_family() {
    let candidates = [face(Style::Italic, Weight(400))];
    let query = face(Style::Normal, Weight(400));
    assert_eq!(find_best_match(&candidates, &query), Ok(0));
}

#[test]
pub fn no_candidates_is_an_error() {
    let query = normal(400);
    assert_eq!(find_best_match(&[], &query), Err(SelectionError::NotFound));
}
