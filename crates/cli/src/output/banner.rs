use colored::Colorize;

const LOGO: &[&str] = &[
    r"   ███████╗███████╗██╗  ██╗",
    r"   ██╔════╝██╔════╝╚██╗██╔╝",
    r"   ███████╗█████╗   ╚███╔╝ ",
    r"   ╚════██║██╔══╝   ██╔██╗ ",
    r"   ███████║██║     ██╔╝ ██╗",
    r"   ╚══════╝╚═╝     ╚═╝  ╚═╝",
    r"   ░░ alert muting rules, declared ░░",
];

pub fn print_banner() {
    for (i, line) in LOGO.iter().enumerate() {
        let color = if i + 1 == LOGO.len() {
            colored::Color::BrightBlack
        } else if i % 2 == 0 {
            colored::Color::Magenta
        } else {
            colored::Color::BrightMagenta
        };
        println!("{}", line.color(color).bold());
    }
}

pub fn print_version_block(version: &str, api_url: &str) {
    print_banner();
    println!();
    println!("  {} {}", "Version".dimmed(), version.bright_magenta().bold());
    println!("  {} {}", "    API".dimmed(), api_url.bright_white());
    println!(
        "  {} {}",
        "   Arch".dimmed(),
        std::env::consts::ARCH.bright_white()
    );
    println!(
        "  {} {}",
        "     OS".dimmed(),
        std::env::consts::OS.bright_white()
    );
    println!();
}
