use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("pagetext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scrape document pages into plain text")
        .arg(
            clap::arg!(-u --urls [FILE] "File with one URL per line")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--prefix [URL] "Prefix removed from each URL to name its output"))
        .arg(
            clap::arg!(-o --"out-dir" [DIR] "Directory for per-page text files")
                .default_value("pages")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-c --combined [FILE] "Path of the combined text file")
                .default_value("highway_code_full.txt")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--banner [TITLE] "Title for the combined file banner"))
        .arg(
            clap::arg!(-s --selector [CSS] "Content container selector, repeatable")
                .action(clap::ArgAction::Append),
        )
        .arg(clap::arg!(--dedupe "Render a container only once when several selectors match it"))
        .arg(clap::arg!(--timeout [SECS] "HTTP timeout in seconds"))
        .arg(clap::arg!(--"user-agent" [UA] "Custom User-Agent for HTTP requests"))
        .arg(
            clap::arg!(--completions [SHELL] "Print a shell completion script and exit")
                .value_parser(["bash", "zsh", "fish", "powershell", "elvish"]),
        )
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "pagetext", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "pagetext", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "pagetext", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "pagetext", &completions_dir).unwrap();
}
