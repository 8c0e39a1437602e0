use line_diff::{compute_unified_diff, DiffOptions, Edit, TextDiff};

fn main() -> line_diff::Result<()> {
    // Two sample texts to compare
    let text1 = "This is the first line.\nHere is the second line.\nAnd the third line.";
    let text2 = "This is the first line.\nThis is a completely different second line.\nAnd the third line.\nPlus a new fourth line.";

    // Generate a unified diff
    println!("Unified diff:");
    print!("{}", compute_unified_diff("first.txt", "second.txt", text1, text2, 1)?);

    // Generate a diff object
    let diff = TextDiff::diff(text1, text2, &DiffOptions::new(1)?);
    let snapshot = diff.snapshot();

    // Print diff statistics
    println!("\nDiff statistics:");
    println!("  Total hunks: {}", snapshot.hunk_count());
    println!("  Added lines: {}", snapshot.added_lines());
    println!("  Deleted lines: {}", snapshot.deleted_lines());
    println!("  Unchanged lines: {}", snapshot.unchanged_lines());

    // Print hunks with color-coded lines
    println!("\nHunks:");
    for (i, hunk) in diff.hunks().iter().enumerate() {
        println!("Hunk {} ({}): {}", i + 1, hunk.status, hunk.header());
        for edit in hunk.lines(diff.edits()) {
            match edit {
                Edit::Delete(line) => println!("    \x1b[31m-{}\x1b[0m", line),
                Edit::Insert(line) => println!("    \x1b[32m+{}\x1b[0m", line),
                Edit::Keep(line) => println!("    \x1b[37m {}\x1b[0m", line),
            }
        }
    }

    // Show example of comparing different file versions
    println!("\nExample of comparing different versions of a file:");
    let file1 = r#"fn main() {
    println!("Hello, world!");
}
"#;

    let file2 = r#"fn main() {
    // Add a greeting with name
    let name = "Rust";
    println!("Hello, {}!", name);
}
"#;

    print!(
        "{}",
        TextDiff::unified_diff("main.rs", "main.rs", file1, file2, &DiffOptions::default())
    );

    Ok(())
}
