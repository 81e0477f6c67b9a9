//! Build script to generate the embedded dictionary
//!
//! Reads the tab separated word list and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const INPUT: &str = "data/words.tsv";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_dictionary(
        INPUT,
        &Path::new(&out_dir).join("dictionary.rs"),
        "ENTRIES",
        "Embedded dictionary entries as (tier, word, score, definition)",
    );

    // Rebuild if the dictionary changes
    println!("cargo:rerun-if-changed={INPUT}");
}

fn generate_dictionary(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<Vec<&str>> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.splitn(4, '\t').map(str::trim).collect())
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dictionary").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str, u32, &str)] = &[").unwrap();

    for (index, row) in rows.iter().enumerate() {
        let [tier, word, score, definition] = row.as_slice() else {
            panic!("{input_path}: entry {} must have 4 tab separated fields", index + 1);
        };
        let score: u32 = score
            .parse()
            .unwrap_or_else(|e| panic!("{input_path}: bad score for '{word}': {e}"));
        writeln!(output, "    ({tier:?}, {word:?}, {score}, {definition:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", rows.len()).unwrap();
}
