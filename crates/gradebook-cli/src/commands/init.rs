//! The `gradebook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("gradebook.toml").exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write("gradebook.toml", SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: gradebook add-course --name Maths --trimester T1 --credits 3");
    println!("  2. Run: gradebook add-student --email ada@alu.edu --name Ada --gender female");
    println!("  3. Run: gradebook register --email ada@alu.edu --course Maths --marks 88");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# JSON document holding students and courses.
# ${VAR} references are expanded; GRADEBOOK_DATA_FILE overrides this value.
data_file = "gradebook_data.json"

# Save after every command that changes the book.
autosave = true
"#;
