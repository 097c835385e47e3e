use std::fs;
use std::process::Command;

use checklist::{Config, Error, ParseError};

const PREFLIGHT: &str = "\u{feff}# Cessna 172 preflight\r\n\
sw_define_colour:red:1,0,0\r\n\
sw_define_colour:red:0,1,0\r\n\
sw_checklist:preflight:Before Start\r\n\
sw_item:Fuel quantity|CHECK\r\n\
sw_item:---\r\n\
sw_item:Brakes|SET\r\n\
sw_item_c:\\red\\Master switch|\\red\\OFF\r\n\
sw_checklist:runup\r\n\
sw_itemvoid:Mags: L then R\r\n\
sw_show\r\n";

fn checklist_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_checklist"))
}

#[test]
fn converts_file_to_html() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("c172.txt");
    let output = dir.path().join("c172.html");
    fs::write(&input, PREFLIGHT).unwrap();

    checklist::convert_file(&input, &output, &Config::default()).unwrap();
    let html = fs::read_to_string(&output).unwrap();

    assert!(html.contains("<!--  Cessna 172 preflight -->"));
    assert!(html.contains("<th colspan=\"2\" class=\"checkListTitle\">Before Start</th>"));
    assert!(html.contains("<th colspan=\"2\" class=\"checkListTitle\">runup</th>"));
    assert!(html.contains(
        "<tr><td colspan=\"2\" class=\"itemInfo\">&nbsp;</td></tr>"
    ));
    assert!(html.contains(
        "<td bgcolor=\"#ff0000\" class=\"itemText\">Master switch</td>\
         <td bgcolor=\"#ff0000\" class=\"itemCheck\">OFF</td>"
    ));
    assert!(html.contains("<td colspan=\"2\" class=\"itemInfo\">Mags L then R</td>"));
    assert_eq!(html.matches("<table").count(), 2);
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = checklist::convert_file(
        &dir.path().join("absent.txt"),
        &dir.path().join("absent.html"),
        &Config::default(),
    );
    assert!(matches!(result, Err(Error::Read { .. })));
}

#[test]
fn unknown_directive_stops_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    let output = dir.path().join("bad.html");
    fs::write(&input, "sw_checklist:a\nsw_bogus:x\n").unwrap();

    let result = checklist::convert_file(&input, &output, &Config::default());
    assert!(matches!(
        result,
        Err(Error::Parse(ParseError::UnknownDirective { line: 2, .. }))
    ));
    assert!(!output.exists());
}

#[test]
fn cli_defaults_output_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("list.clist");
    fs::write(&input, PREFLIGHT).unwrap();

    let status = checklist_bin()
        .arg(&input)
        .args(["--columns", "3", "--title", "C172"])
        .status()
        .unwrap();
    assert!(status.success());

    let html = fs::read_to_string(dir.path().join("list.html")).unwrap();
    assert!(html.contains("column-count: 3;"));
    assert!(html.contains("<h1 class=\"title\">C172</h1>"));
}

#[test]
fn cli_config_file_and_flags() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("list.txt");
    let output = dir.path().join("out.html");
    let config = dir.path().join("checklist.toml");
    fs::write(&input, PREFLIGHT).unwrap();
    fs::write(&config, "[page]\ncolumns = 4\ntitle = \"From config\"\n").unwrap();

    let status = checklist_bin()
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .arg("-o")
        .arg(&output)
        .args(["--title", "From flag", "--trailing-rule"])
        .status()
        .unwrap();
    assert!(status.success());

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("column-count: 4;"));
    assert!(html.contains("<h1 class=\"title\">From flag</h1>"));
    assert_eq!(html.matches("</table>\n<hr>").count(), 2);
}

#[test]
fn cli_fails_on_unknown_directive() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    fs::write(&input, "sw_checklist:a\nsw_bogus:x\n").unwrap();

    let result = checklist_bin().arg(&input).output().unwrap();
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("unknown command: sw_bogus"));
}
