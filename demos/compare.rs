// font-diff/demos/compare.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Renders a character-set comparison of two font files.
//!
//! Prints a per-unit pixel classification summary and, with `--out`, writes
//! the three views of every unit as PNGs.

use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::Colorize;
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

use font_diff::backends::fontdue::FontdueBackend;
use font_diff::canvas::{AlphaBitmap, BYTES_PER_PIXEL};
use font_diff::color::{FONT_A_COLOR, FONT_B_COLOR, OVERLAP_COLOR};
use font_diff::config::{FontConfig, Style, Weight};
use font_diff::frame::{ComparisonFrame, RenderScale};
use font_diff::tokenizer;

static FAMILY_A: &str = "font-a";
static FAMILY_B: &str = "font-b";

// The default character set of the comparison table.
static DEFAULT_CHARACTER_SET: &str = "afrtcGQR1%";

fn get_args() -> ArgMatches {
    let font_a_arg = Arg::new("FONT-A")
        .help("Path to the first font file")
        .required(true)
        .index(1);
    let font_b_arg = Arg::new("FONT-B")
        .help("Path to the second font file")
        .required(true)
        .index(2);
    let characters_arg = Arg::new("CHARACTERS")
        .help("Characters (or space-separated words) to compare")
        .default_value(DEFAULT_CHARACTER_SET)
        .index(3);
    let weight_arg = Arg::new("weight")
        .long("weight")
        .short('w')
        .help("Font weight to request from both sides")
        .default_value("400");
    let italic_arg = Arg::new("italic")
        .long("italic")
        .short('i')
        .help("Request italic faces")
        .action(ArgAction::SetTrue);
    let enlarged_arg = Arg::new("enlarged")
        .long("enlarged")
        .short('e')
        .help("Render at the enlarged 2x scale")
        .action(ArgAction::SetTrue);
    let out_arg = Arg::new("out")
        .long("out")
        .short('o')
        .help("Directory to write the per-unit PNGs into")
        .value_name("DIR");
    Command::new("compare")
        .version("0.1")
        .about("Renders glyph-level diffs of two font files")
        .arg(font_a_arg)
        .arg(font_b_arg)
        .arg(characters_arg)
        .arg(weight_arg)
        .arg(italic_arg)
        .arg(enlarged_arg)
        .arg(out_arg)
        .get_matches()
}

fn parse_font(path: &str) -> fontdue::Font {
    let bytes = fs::read(path).expect("failed to read font file");
    fontdue::Font::from_bytes(bytes.as_slice(), fontdue::FontSettings::default())
        .expect("failed to parse font file")
}

fn main() {
    env_logger::init();
    let matches = get_args();

    let path_a = matches.get_one::<String>("FONT-A").unwrap();
    let path_b = matches.get_one::<String>("FONT-B").unwrap();
    let characters = matches.get_one::<String>("CHARACTERS").unwrap();
    let weight = Weight(
        matches
            .get_one::<String>("weight")
            .unwrap()
            .parse()
            .expect("weight must be an integer"),
    );
    let style = if matches.get_flag("italic") {
        Style::Italic
    } else {
        Style::Normal
    };
    let scale = if matches.get_flag("enlarged") {
        RenderScale::Enlarged
    } else {
        RenderScale::Thumbnail
    };
    let out_dir = matches.get_one::<String>("out").map(PathBuf::from);

    let mut backend = FontdueBackend::new(parse_font(path_a));
    backend.register(FAMILY_A, style, weight, parse_font(path_a));
    backend.register(FAMILY_B, style, weight, parse_font(path_b));

    let mut font_a = FontConfig::new(FAMILY_A);
    font_a.weight(weight).style(style);
    let mut font_b = FontConfig::new(FAMILY_B);
    font_b.weight(weight).style(style);

    if let Some(ref dir) = out_dir {
        fs::create_dir_all(dir).expect("failed to create output directory");
    }

    let frame = ComparisonFrame::new(backend);

    // Unregistered families render silently in the fallback face, so check
    // readiness before asking for pixels.
    for family in [FAMILY_A, FAMILY_B] {
        if !frame.rasterizer().backend().is_registered(family) {
            eprintln!("warning: {} is not registered; the fallback face will be used", family);
        }
    }

    let units = tokenizer::tokenize(characters);
    let results = frame.render_batch(&units, &font_a, &font_b, scale);

    for (unit, result) in units.iter().zip(results) {
        let set = match result {
            Ok(set) => set,
            Err(err) => {
                eprintln!("{}: {}", unit, err);
                continue;
            }
        };

        let (only_a, only_b, overlap) = classification_counts(&set.bitmap_diff);
        println!(
            "{:>8}   {} {:6}   {} {:6}   {} {:6}",
            unit.bold(),
            "only A".cyan(),
            only_a,
            "only B".magenta(),
            only_b,
            "overlap".bold(),
            overlap
        );

        if let Some(ref dir) = out_dir {
            write_png(&set.bitmap_a, &dir.join(format!("{}-a.png", unit)));
            write_png(&set.bitmap_diff, &dir.join(format!("{}-diff.png", unit)));
            write_png(&set.bitmap_b, &dir.join(format!("{}-b.png", unit)));
        }
    }
}

/// Counts the classified pixels of a diff bitmap by role color.
fn classification_counts(diff: &AlphaBitmap) -> (usize, usize, usize) {
    let (mut only_a, mut only_b, mut overlap) = (0, 0, 0);
    for pixel in diff.pixels.chunks(BYTES_PER_PIXEL) {
        if pixel[3] == 0 {
            continue;
        }
        let role = (pixel[0], pixel[1], pixel[2]);
        if role == (FONT_A_COLOR.r, FONT_A_COLOR.g, FONT_A_COLOR.b) {
            only_a += 1;
        } else if role == (FONT_B_COLOR.r, FONT_B_COLOR.g, FONT_B_COLOR.b) {
            only_b += 1;
        } else if role == (OVERLAP_COLOR.r, OVERLAP_COLOR.g, OVERLAP_COLOR.b) {
            overlap += 1;
        }
    }
    (only_a, only_b, overlap)
}

fn write_png(bitmap: &AlphaBitmap, path: &Path) {
    let image = RgbaImage::from_raw(bitmap.size, bitmap.size, bitmap.pixels.clone())
        .expect("bitmap dimensions out of sync with its pixel data");
    image.save(path).expect("failed to write PNG");
}
