use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_data_step_skips_work_dataset() -> Result<()> {
    let test = CliTest::with_file("load.sas", "data lib1.sales; set work.temp; run;\n")?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_create_table_split_across_lines_json() -> Result<()> {
    let test = CliTest::with_file(
        "report.sas",
        "proc sql; create table mylib.\nreport as select * from x; quit;\n",
    )?;

    assert_cmd_snapshot!(test.scan_command().args(["--format", "json"]));

    Ok(())
}

#[test]
fn test_macro_context_column() -> Result<()> {
    let test = CliTest::with_file(
        "macros.sas",
        r#"%macro refresh(lib);
  data lib1.sales; set work.temp; run;
%mend refresh;

data lib1.totals; set lib1.sales; run;
"#,
    )?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_rows_sorted_across_files_with_ids() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "b_publish.sas",
        "proc sql;\n  create table mart.daily as\n  select * from stage.raw;\nquit;\n",
    )?;
    test.write_file(
        "a_stage.sas",
        "/* staging */\ndata stage.raw stage.rejects;\n  set src.feed;\nrun;\n",
    )?;
    test.write_file("notes.txt", "data lib.not_scanned;\n")?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_scan_single_file_path() -> Result<()> {
    let test = CliTest::with_file(
        "jobs/nightly.SAS",
        "data out.nightly;\n  set in.feed;\nrun;\n",
    )?;

    assert_cmd_snapshot!(test.scan_command().arg("jobs/nightly.SAS"));

    Ok(())
}

#[test]
fn test_subdirectories_skipped_without_recursive() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("top.sas", "data lib.top;\n")?;
    test.write_file("sub/deep.sas", "data lib.deep;\n")?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_subdirectories_scanned_with_recursive() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("top.sas", "data lib.top;\n")?;
    test.write_file("sub/deep.sas", "data lib.deep;\n")?;

    assert_cmd_snapshot!(test.scan_command().arg("--recursive"));

    Ok(())
}

#[test]
fn test_config_ignores_and_recursive() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".dsscanrc.json",
        r#"{
         "recursive": true,
         "ignores": ["**/archive/**"]
     }"#,
    )?;
    test.write_file("jobs/load.sas", "data lib.load;\n")?;
    test.write_file("archive/old.sas", "data lib.old;\n")?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_unterminated_statement_warning() -> Result<()> {
    let test = CliTest::with_file("open.sas", "data lib.a\n  lib.b\n")?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_unterminated_statement_details_verbose() -> Result<()> {
    let test = CliTest::with_file("open.sas", "data lib.a\n  lib.b\n")?;

    assert_cmd_snapshot!(test.scan_command().arg("-v"));

    Ok(())
}

#[test]
fn test_create_table_line_ends_data_step() -> Result<()> {
    let test = CliTest::with_file(
        "mixed.sas",
        "data lib.a\n  lib.b; proc sql; create table lib.c as select 1 from x; quit;\n",
    )?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_byte_order_mark() -> Result<()> {
    let test = CliTest::with_file("windows.sas", "\u{feff}data lib.first;\r\nrun;\r\n")?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_empty_directory() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_missing_path_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.scan_command().arg("does-not-exist"));

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".dsscanrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_repeated_scans_are_identical() -> Result<()> {
    let test = CliTest::new()?;
    for idx in 0..5 {
        test.write_file(
            &format!("job{}.sas", idx),
            &format!(
                "%macro m{idx};\ndata out.t{idx};\n%mend;\nproc sql; create table out.s{idx} as select 1 from x; quit;\n"
            ),
        )?;
    }

    let first = test.scan_command().output()?;
    let second = test.scan_command().output()?;

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(
        String::from_utf8_lossy(&first.stdout).contains("Found 10 permanent datasets in 5 files")
    );

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"));

    Ok(())
}
