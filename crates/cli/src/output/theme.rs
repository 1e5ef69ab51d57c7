use colored::Colorize;

pub fn print_section(title: &str) {
    println!();
    println!("  {} {}", "●".bright_cyan(), title.bold());
    println!("  {}", "─".repeat(40).dimmed());
}

pub fn print_kv(label: &str, value: &str) {
    println!(
        "    {} {}",
        format!("{:<22}", label).dimmed(),
        value.bright_white()
    );
}

/// One line of a plan: `~` for in-place changes, `-/+` for replacement.
pub fn print_change(attribute: &str, forces_new: bool) {
    if forces_new {
        println!(
            "    {} {} {}",
            "-/+".red().bold(),
            attribute,
            "(forces replacement)".red()
        );
    } else {
        println!("    {} {}", "~".yellow().bold(), attribute);
    }
}

pub fn print_warning(msg: &str) {
    println!("{} {}", "⚠".yellow().bold(), msg.yellow());
}

pub fn print_dim(msg: &str) {
    println!("  {}", msg.dimmed());
}
