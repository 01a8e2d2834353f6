use anyhow::Result;
use insta::assert_snapshot;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, output_text};

const CLEAN_DOCUMENT: &str = r"\documentclass{article}
\usepackage[acronym]{glossaries}
\newacronym{ml}{ML}{Machine Learning}
\begin{document}
We study \gls{ml} and more \gls{ml}.
\end{document}
";

#[test]
fn test_clean_document() -> Result<()> {
    let test = CliTest::with_file("main.tex", CLEAN_DOCUMENT)?;

    assert_cmd_snapshot!(test.check_command());

    let report = test.read_file("acronym_report.html")?;
    assert!(report.contains("LaTeX Acronym Analysis Report"));
    assert!(report.contains("ML"));

    Ok(())
}

#[test]
fn test_undefined_informal_acronym() -> Result<()> {
    let test = CliTest::with_file(
        "main.tex",
        r"\begin{document}
\input{chapters/intro}
\end{document}
",
    )?;
    test.write_file(
        "chapters/intro.tex",
        r"A Central Processing Unit (CPU) executes instructions.
Each modern Central Processing Unit (CPU) has registers.
It mentions the (CPU) once more.
",
    )?;

    let output = test.check_command().output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("error: \"CPU\" is used informally but never defined"));
    assert!(stdout.contains("undefined-informal"));
    assert!(stdout.contains("--> chapters/intro.tex:1:27"));
    assert!(stdout.contains("\\newacronym{cpu}{CPU}{Central Processing Unit}"));
    assert!(stdout.contains("1 problem (1 error, 0 warnings)"));

    let report = test.read_file("acronym_report.html")?;
    assert!(report.contains("CPU"));
    assert!(report.contains("Central Processing Unit"));

    Ok(())
}

#[test]
fn test_single_mention_below_threshold() -> Result<()> {
    let test = CliTest::with_file(
        "main.tex",
        r"\begin{document}
A Graphics Processing Unit (GPU) renders frames.
\end{document}
",
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let output = test.check_command().args(["--threshold", "1"]).output()?;
    let (stdout, _) = output_text(&output);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("\"GPU\" is used informally but never defined"));

    Ok(())
}

#[test]
fn test_typed_full_form() -> Result<()> {
    let test = CliTest::with_file(
        "main.tex",
        r"\newacronym{ml}{ML}{Machine Learning}
\begin{document}
We use \gls{ml} here.
Modern machine learning needs data.
\end{document}
",
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_unused_entry_is_warning_only() -> Result<()> {
    let test = CliTest::with_file(
        "main.tex",
        r"\newacronym{ai}{AI}{Artificial Intelligence}
\begin{document}
Nothing about it.
\end{document}
",
    )?;

    let output = test.check_command().output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("warning: \"AI\" is defined but never used"));
    assert!(stdout.contains("unused-entry"));

    Ok(())
}

#[test]
fn test_missing_include_fails() -> Result<()> {
    let test = CliTest::with_file(
        "main.tex",
        r"\begin{document}
\input{chapters/missing}
\end{document}
",
    )?;

    test.snapshot_settings().bind(|| {
        assert_cmd_snapshot!(test.check_command().arg("--root").arg(test.root()));
    });
    assert!(!test.root().join("acronym_report.html").exists());

    Ok(())
}

#[test]
fn test_missing_entry_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("main.tex"));

    Ok(())
}

#[test]
fn test_no_report_flag() -> Result<()> {
    let test = CliTest::with_file("main.tex", CLEAN_DOCUMENT)?;

    let output = test.check_command().arg("--no-report").output()?;
    let (stdout, _) = output_text(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout.contains("Report written to"));
    assert!(!test.root().join("acronym_report.html").exists());

    Ok(())
}

#[test]
fn test_markdown_output() -> Result<()> {
    let test = CliTest::with_file("main.tex", CLEAN_DOCUMENT)?;

    let output = test
        .check_command()
        .args(["--output", "report.md"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let report = test.read_file("report.md")?;
    let header: Vec<&str> = report.lines().take(3).collect();
    test.snapshot_settings().bind(|| {
        assert_snapshot!(header.join("\n"));
    });
    assert!(report.contains("## 3. Used consistently"));

    Ok(())
}

#[test]
fn test_config_file_is_used() -> Result<()> {
    let test = CliTest::with_file(
        "thesis/thesis.tex",
        r"\begin{document}
A Graphics Processing Unit (GPU) renders frames.
\end{document}
",
    )?;
    test.write_file(
        ".acrolintrc.json",
        r#"{
  "entryFile": "thesis.tex",
  "rootDir": "thesis",
  "output": "out.md",
  "informalThreshold": 1
}"#,
    )?;

    let output = test.check_command().output()?;
    let (stdout, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(stdout.contains("\"GPU\" is used informally but never defined"));
    assert!(test.root().join("out.md").exists());

    Ok(())
}

#[test]
fn test_invalid_threshold() -> Result<()> {
    let test = CliTest::with_file("main.tex", CLEAN_DOCUMENT)?;

    let output = test.check_command().args(["--threshold", "0"]).output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("informalThreshold"));

    Ok(())
}

#[test]
fn test_unsupported_output_extension() -> Result<()> {
    let test = CliTest::with_file("main.tex", CLEAN_DOCUMENT)?;

    let output = test
        .check_command()
        .args(["--output", "report.pdf"])
        .output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("report.pdf"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"));

    Ok(())
}
