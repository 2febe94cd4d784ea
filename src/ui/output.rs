use crate::output::is_quiet;
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

fn icon(icon: &'static str) -> &'static str {
    if is_quiet() { "" } else { icon }
}

pub fn header(text: &str) {
    println!("{} {}", icon(Icons::DATABASE), text.style(theme().header.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", icon(Icons::CHECK), label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", icon(Icons::CROSS), label.style(theme().error.clone()));
}

pub fn info(label: &str, value: &str) {
    println!(
        "{} {}: {}",
        icon(Icons::INFO).style(theme().info.clone()),
        label.style(theme().dim.clone()),
        value
    );
}

pub fn dim(text: &str) -> String {
    text.style(theme().dim.clone()).to_string()
}

pub fn muted(text: &str) -> String {
    text.style(theme().muted.clone()).to_string()
}

pub fn summary_row(label: &str, value: &str) {
    println!("  {} {}", label.style(theme().dim.clone()), value);
}

pub fn key_value(key: &str, value: &str) {
    println!("{} {}", key.style(theme().key.clone()), value);
}
