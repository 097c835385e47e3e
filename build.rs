use std::fs;

// Sections `Config` knows how to read
const SECTIONS: &[&str] = &["page", "layout"];

fn main() {
    // The page defaults are compiled into the binary, so a broken file
    // must fail the build rather than fall back at run time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    for (key, value) in &table {
        if !SECTIONS.contains(&key.as_str()) || !value.is_table() {
            panic!("default_config.toml: unexpected entry `{}`", key);
        }
    }
}
